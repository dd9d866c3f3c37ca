//! Boolean guard expressions.
//!
//! Guards on transitions are boolean expressions over named input variables.
//! This module provides the expression tree, its evaluation against a
//! [`Context`] of variable values, free-variable collection in first-seen
//! order, and a small text parser.

mod context;
mod error;
mod expr;
mod parser;

pub use context::Context;
pub use error::ExpressionError;
pub use expr::Expression;
pub use parser::MAX_DEPTH;
