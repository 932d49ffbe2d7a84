use sea_orm::sea_query::{Alias, Expr, Func, LikeExpr, SimpleExpr};

/// `LOWER(expr) LIKE pattern ESCAPE '\'`.
///
/// `pattern` must already be lowercased with `%`, `_` and `\` escaped by `\`.
pub fn lower_like(expr: impl Into<SimpleExpr>, pattern: &str) -> SimpleExpr {
    Expr::expr(Func::lower(expr)).like(LikeExpr::new(pattern).escape('\\'))
}

/// `CAST(expr AS text)`, for substring matching on numeric columns.
pub fn as_text(expr: impl Into<SimpleExpr>) -> SimpleExpr {
    Func::cast_as(expr, Alias::new("text")).into()
}
