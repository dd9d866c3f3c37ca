//! Boolean expression tree used for transition guards.

use super::context::Context;
use super::error::ExpressionError;
use indexmap::IndexSet;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// A boolean expression over named input variables.
///
/// Expressions can be assembled with the `!`, `&`, `|` and `^` operators or
/// parsed from text with [`Expression::parse`].
///
/// # Example
///
/// ```rust
/// use fsm_table::expression::{Context, Expression};
///
/// let guard = Expression::var("A") & !Expression::var("B");
///
/// let mut context = Context::new();
/// context.set("A", true);
/// context.set("B", false);
/// assert!(guard.evaluate(&context).unwrap());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression {
    Constant(bool),
    Variable(String),
    Not(Box<Expression>),
    And(Vec<Expression>),
    Or(Vec<Expression>),
    Xor(Box<Expression>, Box<Expression>),
}

impl Expression {
    /// Shorthand for [`Expression::Variable`].
    pub fn var(name: impl Into<String>) -> Self {
        Expression::Variable(name.into())
    }

    /// Evaluate the expression under a variable assignment.
    ///
    /// Fails if a variable reached during evaluation has no value in `context`.
    /// `And`/`Or` short-circuit, so variables after a deciding operand are
    /// not required.
    pub fn evaluate(&self, context: &Context) -> Result<bool, ExpressionError> {
        match self {
            Expression::Constant(value) => Ok(*value),
            Expression::Variable(name) => {
                context
                    .get(name)
                    .ok_or_else(|| ExpressionError::UnassignedVariable { name: name.clone() })
            }
            Expression::Not(inner) => Ok(!inner.evaluate(context)?),
            Expression::And(operands) => {
                for operand in operands {
                    if !operand.evaluate(context)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Expression::Or(operands) => {
                for operand in operands {
                    if operand.evaluate(context)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Expression::Xor(lhs, rhs) => Ok(lhs.evaluate(context)? ^ rhs.evaluate(context)?),
        }
    }

    /// Add the free variables of this expression to `vars`, left to right.
    ///
    /// Names already present keep their position.
    pub fn collect_variables(&self, vars: &mut IndexSet<String>) {
        match self {
            Expression::Constant(_) => {}
            Expression::Variable(name) => {
                if !vars.contains(name) {
                    vars.insert(name.clone());
                }
            }
            Expression::Not(inner) => inner.collect_variables(vars),
            Expression::And(operands) | Expression::Or(operands) => {
                for operand in operands {
                    operand.collect_variables(vars);
                }
            }
            Expression::Xor(lhs, rhs) => {
                lhs.collect_variables(vars);
                rhs.collect_variables(vars);
            }
        }
    }

    /// The free variables of this expression in first-seen order.
    pub fn variables(&self) -> IndexSet<String> {
        let mut vars = IndexSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    /// Whether `name` can be written as a variable in guard text:
    /// `[A-Za-z_][A-Za-z0-9_]*`.
    pub fn is_identifier(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() || first == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        }
    }

    /// Fail on the first variable whose name cannot be written as guard text.
    pub fn check_identifiers(&self) -> Result<(), ExpressionError> {
        match self {
            Expression::Constant(_) => Ok(()),
            Expression::Variable(name) if Self::is_identifier(name) => Ok(()),
            Expression::Variable(name) => {
                Err(ExpressionError::InvalidVariableName { name: name.clone() })
            }
            Expression::Not(inner) => inner.check_identifiers(),
            Expression::And(operands) | Expression::Or(operands) => {
                operands.iter().try_for_each(Expression::check_identifiers)
            }
            Expression::Xor(lhs, rhs) => {
                lhs.check_identifiers()?;
                rhs.check_identifiers()
            }
        }
    }

    /// Fold `And`/`Or` with zero or one operand into the equivalent constant
    /// or operand. The parser never produces those shapes, so a normalized
    /// tree prints to text that parses back to the same tree.
    pub fn normalize(self) -> Self {
        match self {
            Expression::Not(inner) => Expression::Not(Box::new(inner.normalize())),
            Expression::And(operands) => fold(operands, true, Expression::And),
            Expression::Or(operands) => fold(operands, false, Expression::Or),
            Expression::Xor(lhs, rhs) => {
                Expression::Xor(Box::new(lhs.normalize()), Box::new(rhs.normalize()))
            }
            leaf => leaf,
        }
    }

    fn is_compound(&self) -> bool {
        matches!(
            self,
            Expression::And(_) | Expression::Or(_) | Expression::Xor(_, _)
        )
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_compound() {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

fn fold(operands: Vec<Expression>, identity: bool, wrap: fn(Vec<Expression>) -> Expression) -> Expression {
    let mut operands: Vec<Expression> = operands.into_iter().map(Expression::normalize).collect();
    match operands.len() {
        0 => Expression::Constant(identity),
        1 => operands.remove(0),
        _ => wrap(operands),
    }
}

fn fmt_joined(f: &mut fmt::Formatter<'_>, operands: &[Expression], op: &str) -> fmt::Result {
    for (i, operand) in operands.iter().enumerate() {
        if i > 0 {
            write!(f, " {op} ")?;
        }
        operand.fmt_operand(f)?;
    }
    Ok(())
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Constant(true) => write!(f, "1"),
            Expression::Constant(false) => write!(f, "0"),
            Expression::Variable(name) => write!(f, "{name}"),
            Expression::Not(inner) => {
                write!(f, "!")?;
                inner.fmt_operand(f)
            }
            Expression::And(operands) if operands.is_empty() => write!(f, "1"),
            Expression::Or(operands) if operands.is_empty() => write!(f, "0"),
            Expression::And(operands) => fmt_joined(f, operands, "&"),
            Expression::Or(operands) => fmt_joined(f, operands, "|"),
            Expression::Xor(lhs, rhs) => {
                lhs.fmt_operand(f)?;
                write!(f, " ^ ")?;
                rhs.fmt_operand(f)
            }
        }
    }
}

impl Not for Expression {
    type Output = Expression;

    fn not(self) -> Expression {
        Expression::Not(Box::new(self))
    }
}

impl BitAnd for Expression {
    type Output = Expression;

    fn bitand(self, rhs: Expression) -> Expression {
        match self {
            Expression::And(mut operands) => {
                operands.push(rhs);
                Expression::And(operands)
            }
            lhs => Expression::And(vec![lhs, rhs]),
        }
    }
}

impl BitOr for Expression {
    type Output = Expression;

    fn bitor(self, rhs: Expression) -> Expression {
        match self {
            Expression::Or(mut operands) => {
                operands.push(rhs);
                Expression::Or(operands)
            }
            lhs => Expression::Or(vec![lhs, rhs]),
        }
    }
}

impl BitXor for Expression {
    type Output = Expression;

    fn bitxor(self, rhs: Expression) -> Expression {
        Expression::Xor(Box::new(self), Box::new(rhs))
    }
}
