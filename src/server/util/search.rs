use sea_orm::{sea_query::Expr, QueryFilter};

/// Adds a case-insensitive substring filter on `column`.
///
/// `column` is a quoted SQL column reference such as `"profile"."address"`; the value is
/// always bound as a parameter.
pub fn contains_ignore_case<Q: QueryFilter>(query: Q, column: &str, value: &str) -> Q {
    query.filter(Expr::cust_with_values(
        format!("LOWER({}) LIKE LOWER(?)", column),
        [format!("%{}%", value)],
    ))
}
