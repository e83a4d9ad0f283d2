use tracing::debug;

use crate::error::ValidationError;
use crate::parser::ast::{Expr, Limit};
use crate::types::value::Value;

/// Marks entry into an aggregate call; an aggregate may not contain another.
pub(crate) fn enter_aggregate(in_aggregate: &mut bool) -> Result<(), ValidationError> {
    if *in_aggregate {
        return Err(ValidationError::InvalidGroupFuncUse);
    }
    *in_aggregate = true;
    Ok(())
}

/// `?` is only legal in statements being prepared.
pub(crate) fn check_param_marker(in_prepare: bool) -> Result<(), ValidationError> {
    if !in_prepare {
        return Err(ValidationError::UnexpectedParamMarker);
    }
    Ok(())
}

/// Clamps a literal LIMIT count so that `count + offset` fits in a `u64`.
///
/// This is the only place validation writes to the tree. Applying it to an
/// already clamped limit leaves the limit unchanged.
pub fn normalize_limit(limit: &mut Limit) {
    let Some(count_expr) = limit.count.as_mut() else {
        return;
    };
    if count_expr.is_param_marker() {
        return;
    }
    // Only `?` and u64 literals come out of the parser; anything else reads as 0.
    let count = count_expr.uint_value().unwrap_or(0);
    let offset = limit
        .offset
        .as_ref()
        .and_then(Expr::uint_value)
        .unwrap_or(0);
    if count > u64::MAX - offset {
        let clamped = u64::MAX - offset;
        debug!(count, offset, clamped, "clamping LIMIT count");
        *count_expr = Expr::Literal(Value::UInt(clamped));
    }
}
