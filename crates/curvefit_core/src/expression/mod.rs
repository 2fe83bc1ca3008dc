//! Single-variable math expressions.
//!
//! An [`Expression`] is tokenised and parsed once, then evaluated any number
//! of times. The grammar covers:
//!
//! - binary operators `+ - * / ^` and unary `-`/`+`
//! - functions `sin`, `cos`, `tan`, `exp`, `log`/`ln` (natural), `sqrt`, `abs`
//! - constants `pi` and `e`
//! - decimal and scientific literals (`0.5`, `1e-3`)
//!
//! Names are case-insensitive. Function arguments must be bracketed and
//! there is no implicit multiplication (`2x` is rejected, write `2*x`).
//!
//! ## Example
//!
//! ```
//! use curvefit_core::expression::Expression;
//!
//! let expr = Expression::parse("x^2 + 2*x + 1").unwrap();
//! assert_eq!(expr.evaluate(3.0), 16.0);
//!
//! let expr = Expression::parse("-x^2").unwrap();
//! assert_eq!(expr.evaluate(3.0), -9.0);
//! ```

mod ast;
mod parser;
mod token;

use crate::types::ExpressionError;
use ast::Node;
use parser::Parser;
use std::fmt;
use std::str::FromStr;

/// Variable name used by [`Expression::parse`].
pub const DEFAULT_VARIABLE: &str = "x";

/// A parsed expression in one variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    variable: String,
    root: Node,
}

impl Expression {
    /// Parse `source` with `x` as the variable.
    ///
    /// # Errors
    ///
    /// Returns an [`ExpressionError`] naming the offending token and its
    /// character position.
    pub fn parse(source: &str) -> Result<Self, ExpressionError> {
        Self::with_variable(source, DEFAULT_VARIABLE)
    }

    /// Parse `source` with a custom variable name.
    ///
    /// ```
    /// use curvefit_core::expression::Expression;
    ///
    /// let expr = Expression::with_variable("2*t + 1", "t").unwrap();
    /// assert_eq!(expr.evaluate(1.5), 4.0);
    /// ```
    pub fn with_variable(source: &str, variable: &str) -> Result<Self, ExpressionError> {
        let variable = variable.to_lowercase();
        let valid_name = variable
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && variable
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid_name {
            return Err(ExpressionError::UnknownToken {
                token: variable,
                position: 0,
            });
        }
        if is_reserved(&variable) {
            return Err(ExpressionError::ReservedName { name: variable });
        }

        let tokens = token::tokenize(source)?;
        let root = Parser::new(&tokens, &variable).parse()?;

        Ok(Self {
            source: source.trim().to_string(),
            variable,
            root,
        })
    }

    /// Evaluate at `x`.
    ///
    /// Never fails once parsed; domain errors follow IEEE rules and show up
    /// as NaN or infinity.
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.root.eval(x)
    }

    /// Evaluate at every point of `xs`.
    pub fn evaluate_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// The trimmed source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The variable name, lower-cased.
    pub fn variable(&self) -> &str {
        &self.variable
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Expression {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Function and constant names the tokenizer claims before the variable.
fn is_reserved(name: &str) -> bool {
    ast::Function::from_name(name).is_some() || matches!(name, "pi" | "e")
}

/// Parse and evaluate in one step.
///
/// ```
/// use curvefit_core::expression::evaluate_str;
///
/// assert_eq!(evaluate_str("2^3", 0.0).unwrap(), 8.0);
/// assert!(evaluate_str("sin(x", 0.0).is_err());
/// ```
pub fn evaluate_str(source: &str, x: f64) -> Result<f64, ExpressionError> {
    Ok(Expression::parse(source)?.evaluate(x))
}
