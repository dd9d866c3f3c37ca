//! Three-valued cell contents of a truth table.

use super::error::TableError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A truth table cell: a fixed bit or "don't care".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ternary {
    Zero,
    One,
    /// Left for downstream minimization to choose.
    DontCare,
}

impl Ternary {
    pub fn is_dont_care(self) -> bool {
        self == Ternary::DontCare
    }
}

impl From<bool> for Ternary {
    fn from(value: bool) -> Self {
        if value {
            Ternary::One
        } else {
            Ternary::Zero
        }
    }
}

impl TryFrom<i64> for Ternary {
    type Error = TableError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Ternary::Zero),
            1 => Ok(Ternary::One),
            other => Err(TableError::InvalidValue { value: other }),
        }
    }
}

impl fmt::Display for Ternary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ternary::Zero => write!(f, "0"),
            Ternary::One => write!(f, "1"),
            Ternary::DontCare => write!(f, "x"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_from_bits() {
        assert_eq!(Ternary::from(true), Ternary::One);
        assert_eq!(Ternary::from(false), Ternary::Zero);
        assert_eq!(Ternary::try_from(1i64), Ok(Ternary::One));
        assert_eq!(Ternary::try_from(0i64), Ok(Ternary::Zero));
    }

    #[test]
    fn rejects_non_binary_integers() {
        assert_eq!(
            Ternary::try_from(2i64),
            Err(TableError::InvalidValue { value: 2 })
        );
        assert!(Ternary::try_from(-1i64).is_err());
    }

    #[test]
    fn displays_compactly() {
        let text: String = [Ternary::Zero, Ternary::One, Ternary::DontCare]
            .iter()
            .map(|t| t.to_string())
            .collect();
        assert_eq!(text, "01x");
    }
}
