//! Expression node definitions.
//!
//! The node set is fixed and small, so the variants are written out by
//! hand as one sum type with named fields rather than generated from a
//! type table. Nodes are plain data; later pipeline stages own all
//! behavior.

use crate::token::{LiteralValue, Token};

/// An expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An infix operation: `left operator right`.
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    /// A parenthesized expression.
    Grouping { expression: Box<Expr> },
    /// A literal value; `None` is the language's `null`.
    Literal { value: Option<LiteralValue> },
    /// A prefix operation: `operator right`.
    Unary { operator: Token, right: Box<Expr> },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token_kind::TokenKind;

    fn number(value: f64) -> Expr {
        Expr::Literal {
            value: Some(LiteralValue::Number(value)),
        }
    }

    #[test]
    fn test_build_nested_expression() {
        // -1 * (2 + 3)
        let expr = Expr::Binary {
            left: Box::new(Expr::Unary {
                operator: Token::new(TokenKind::MinusToken, "-", None, 1),
                right: Box::new(number(1.0)),
            }),
            operator: Token::new(TokenKind::AsteriskToken, "*", None, 1),
            right: Box::new(Expr::Grouping {
                expression: Box::new(Expr::Binary {
                    left: Box::new(number(2.0)),
                    operator: Token::new(TokenKind::PlusToken, "+", None, 1),
                    right: Box::new(number(3.0)),
                }),
            }),
        };

        match expr {
            Expr::Binary { operator, right, .. } => {
                assert_eq!(operator.kind, TokenKind::AsteriskToken);
                assert!(matches!(*right, Expr::Grouping { .. }));
            }
            other => panic!("expected binary node, got {:?}", other),
        }
    }

    #[test]
    fn test_null_literal_is_none() {
        let null = Expr::Literal { value: None };
        assert_eq!(null, Expr::Literal { value: None });
        assert_ne!(
            null,
            Expr::Literal {
                value: Some(LiteralValue::Number(0.0))
            }
        );
    }
}
