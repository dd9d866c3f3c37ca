//! Text parser for guard expressions.
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! or      := xor (('|' | '+') xor)*
//! xor     := and ('^' and)*
//! and     := unary (('&' | '*') unary)*
//! unary   := ('!' | '~') unary | primary
//! primary := '0' | '1' | ident | '(' or ')'
//! ```

use super::error::ExpressionError;
use super::expr::Expression;
use std::iter::Peekable;
use std::str::CharIndices;
use std::str::FromStr;

/// Deepest nesting of parentheses and negations a guard may use.
pub const MAX_DEPTH: usize = 256;

#[derive(Clone, Debug, PartialEq)]
enum Token {
    Ident(String),
    Constant(bool),
    Not,
    And,
    Or,
    Xor,
    Open,
    Close,
}

impl Token {
    fn text(&self) -> String {
        match self {
            Token::Ident(name) => name.clone(),
            Token::Constant(true) => "1".to_string(),
            Token::Constant(false) => "0".to_string(),
            Token::Not => "!".to_string(),
            Token::And => "&".to_string(),
            Token::Or => "|".to_string(),
            Token::Xor => "^".to_string(),
            Token::Open => "(".to_string(),
            Token::Close => ")".to_string(),
        }
    }
}

fn tokenize(text: &str) -> Result<Vec<(Token, usize)>, ExpressionError> {
    let mut tokens = Vec::new();
    let mut chars: Peekable<CharIndices<'_>> = text.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        let token = match c {
            c if c.is_whitespace() => continue,
            '!' | '~' => Token::Not,
            '&' | '*' => Token::And,
            '|' | '+' => Token::Or,
            '^' => Token::Xor,
            '(' => Token::Open,
            ')' => Token::Close,
            '0' => Token::Constant(false),
            '1' => Token::Constant(true),
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut name = String::from(c);
                while let Some(&(_, next)) = chars.peek() {
                    if next.is_ascii_alphanumeric() || next == '_' {
                        name.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                Token::Ident(name)
            }
            other => {
                return Err(ExpressionError::UnexpectedToken {
                    found: other.to_string(),
                    position,
                })
            }
        };
        tokens.push((token, position));
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<(Token, usize)>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn descend(&mut self, position: usize) -> Result<(), ExpressionError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ExpressionError::TooDeep {
                position,
                max: MAX_DEPTH,
            });
        }
        Ok(())
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(token, _)| token)
    }

    fn advance(&mut self) -> Option<(Token, usize)> {
        let next = self.tokens.get(self.pos).cloned();
        if next.is_some() {
            self.pos += 1;
        }
        next
    }

    fn parse_or(&mut self) -> Result<Expression, ExpressionError> {
        let mut operands = vec![self.parse_xor()?];
        while self.peek() == Some(&Token::Or) {
            self.advance();
            operands.push(self.parse_xor()?);
        }
        Ok(collapse(operands, Expression::Or))
    }

    fn parse_xor(&mut self) -> Result<Expression, ExpressionError> {
        let mut expr = self.parse_and()?;
        while self.peek() == Some(&Token::Xor) {
            self.advance();
            let rhs = self.parse_and()?;
            expr = Expression::Xor(Box::new(expr), Box::new(rhs));
        }
        Ok(expr)
    }

    fn parse_and(&mut self) -> Result<Expression, ExpressionError> {
        let mut operands = vec![self.parse_unary()?];
        while self.peek() == Some(&Token::And) {
            self.advance();
            operands.push(self.parse_unary()?);
        }
        Ok(collapse(operands, Expression::And))
    }

    fn parse_unary(&mut self) -> Result<Expression, ExpressionError> {
        if let Some((Token::Not, position)) = self.tokens.get(self.pos).cloned() {
            self.advance();
            self.descend(position)?;
            let inner = self.parse_unary()?;
            self.depth -= 1;
            return Ok(Expression::Not(Box::new(inner)));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Expression, ExpressionError> {
        let Some((token, position)) = self.advance() else {
            return Err(ExpressionError::UnexpectedEnd {
                expected: "an operand".to_string(),
            });
        };

        match token {
            Token::Ident(name) => Ok(Expression::Variable(name)),
            Token::Constant(value) => Ok(Expression::Constant(value)),
            Token::Open => {
                self.descend(position)?;
                let inner = self.parse_or()?;
                self.depth -= 1;
                match self.advance() {
                    Some((Token::Close, _)) => Ok(inner),
                    Some((other, at)) => Err(ExpressionError::UnexpectedToken {
                        found: other.text(),
                        position: at,
                    }),
                    None => Err(ExpressionError::UnbalancedParenthesis { position }),
                }
            }
            Token::Close => Err(ExpressionError::UnbalancedParenthesis { position }),
            other => Err(ExpressionError::UnexpectedToken {
                found: other.text(),
                position,
            }),
        }
    }
}

fn collapse(mut operands: Vec<Expression>, wrap: fn(Vec<Expression>) -> Expression) -> Expression {
    if operands.len() == 1 {
        operands.remove(0)
    } else {
        wrap(operands)
    }
}

impl Expression {
    /// Parse an expression from its text form.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsm_table::expression::Expression;
    ///
    /// let expr = Expression::parse("A & !B | C").unwrap();
    /// assert_eq!(
    ///     expr,
    ///     (Expression::var("A") & !Expression::var("B")) | Expression::var("C")
    /// );
    /// ```
    pub fn parse(text: &str) -> Result<Self, ExpressionError> {
        let tokens = tokenize(text)?;
        if tokens.is_empty() {
            return Err(ExpressionError::Empty);
        }

        let mut parser = Parser {
            tokens,
            pos: 0,
            depth: 0,
        };
        let expr = parser.parse_or()?;

        match parser.advance() {
            None => Ok(expr),
            Some((Token::Close, position)) => Err(ExpressionError::UnbalancedParenthesis { position }),
            Some((other, position)) => Err(ExpressionError::UnexpectedToken {
                found: other.text(),
                position,
            }),
        }
    }
}

impl FromStr for Expression {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expression::parse(s)
    }
}
