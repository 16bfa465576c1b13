//! loxscript_ast: token and syntax tree definitions for loxscript.
//!
//! This crate holds the pure data side of the pipeline: the `TokenKind`
//! enumeration with its reserved-word lookup, the `Token` record produced
//! by the scanner, and the expression node types.

pub mod expr;
pub mod token;
pub mod token_kind;

// Re-export key types
pub use expr::Expr;
pub use token::{LiteralValue, Token};
pub use token_kind::TokenKind;
