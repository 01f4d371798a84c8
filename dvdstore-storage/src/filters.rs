//! Raw predicate escape hatch with injection guards
//!
//! Structured filters on the repositories cover equality, comparison and
//! null checks. Anything beyond that (date arithmetic, backend-specific
//! functions) goes through [`RawPredicate`]: a compiled-in SQL fragment
//! with bound parameters. The fragment type is `&'static str` so a
//! user-supplied string cannot reach it without deliberate leaking.

use crate::error::{StorageError, StorageResult};
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::Value;

/// A literal SQL predicate fragment with bound parameter values
///
/// Parameters are written as `?` in the fragment and attached with
/// [`RawPredicate::bind`]; they are always sent as bound values, never
/// interpolated into the SQL text.
#[derive(Debug, Clone)]
pub struct RawPredicate {
    sql: &'static str,
    values: Vec<Value>,
}

impl RawPredicate {
    /// Create a raw predicate from a compiled-in fragment
    ///
    /// Rejects fragments containing statement separators or comment
    /// markers, which have no place in a single predicate.
    pub fn new(sql: &'static str) -> StorageResult<Self> {
        validate_fragment(sql)?;
        Ok(Self {
            sql,
            values: Vec::new(),
        })
    }

    /// Attach a bound parameter value for the next `?` placeholder
    pub fn bind(mut self, value: impl Into<Value>) -> Self {
        self.values.push(value.into());
        self
    }

    /// Convert into a query condition
    pub fn into_expr(self) -> SimpleExpr {
        if self.values.is_empty() {
            Expr::cust(self.sql)
        } else {
            Expr::cust_with_values(self.sql, self.values)
        }
    }
}

/// Reject fragments that could smuggle in additional statements
fn validate_fragment(sql: &str) -> StorageResult<()> {
    if sql.trim().is_empty() {
        return Err(StorageError::Validation(
            "raw predicate cannot be empty".to_string(),
        ));
    }

    let dangerous_patterns = [";", "--", "/*", "*/"];
    for pattern in &dangerous_patterns {
        if sql.contains(pattern) {
            return Err(StorageError::Validation(format!(
                "raw predicate contains disallowed pattern: {}",
                pattern
            )));
        }
    }

    let placeholders = sql.matches('?').count();
    if placeholders > 16 {
        return Err(StorageError::Validation(
            "raw predicate has too many placeholders (max: 16)".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_predicate() {
        let pred = RawPredicate::new("\"film\".\"length\" > ?").unwrap().bind(90);
        let expr = pred.into_expr();
        // Rough shape check; exact SQL is asserted at the query level
        assert!(format!("{:?}", expr).contains("length"));
    }

    #[test]
    fn test_statement_separator_rejected() {
        let result = RawPredicate::new("1 = 1; DROP TABLE film");
        assert!(matches!(result, Err(StorageError::Validation(_))));
    }

    #[test]
    fn test_comment_marker_rejected() {
        assert!(RawPredicate::new("1 = 1 -- hide").is_err());
        assert!(RawPredicate::new("1 = 1 /* hide */").is_err());
    }

    #[test]
    fn test_empty_fragment_rejected() {
        assert!(RawPredicate::new("   ").is_err());
    }

    #[test]
    fn test_predicate_without_values() {
        let pred = RawPredicate::new("\"rental\".\"return_date\" IS NULL").unwrap();
        let _expr = pred.into_expr();
    }
}
