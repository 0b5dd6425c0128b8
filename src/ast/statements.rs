use std::fmt::Display;

use crate::lexer::tokens::Token;

use super::{ast::Expression, expressions::Identifier};

/// A `let` binding: `let <name> = <value>;`.
///
/// The bound expression is an optional slot; a statement whose value has
/// not been parsed renders that portion as nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    /// The `let` token.
    pub token: Token,
    pub name: Identifier,
    pub value: Option<Expression>,
}

impl LetStatement {
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for LetStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = ", self.token_literal(), self.name)?;
        if let Some(value) = &self.value {
            value.fmt(f)?;
        }
        write!(f, ";")
    }
}

/// A `return` statement: `return <value>;`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    /// The `return` token.
    pub token: Token,
    pub value: Option<Expression>,
}

impl ReturnStatement {
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for ReturnStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ", self.token_literal())?;
        if let Some(value) = &self.value {
            value.fmt(f)?;
        }
        write!(f, ";")
    }
}

/// A statement consisting solely of an expression, wrapped so it can sit
/// in a statement position.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    /// The first token of the expression.
    pub token: Token,
    pub expression: Option<Expression>,
}

impl ExpressionStatement {
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(expression) = &self.expression {
            expression.fmt(f)?;
        }
        Ok(())
    }
}
