use crate::config::ValidatorConfig;
use crate::error::ValidationError;
use crate::parser::ast::{ColumnDef, ColumnOption, Constraint, ConstraintKind, CreateTableStmt, TableOption};

/// AUTO_INCREMENT rules for CREATE TABLE: at most one such column, it must be
/// a key (unless the engine is exempt), it must be numeric, and it must not
/// carry a non-NULL default.
pub(crate) fn check_auto_increment(
    stmt: &CreateTableStmt,
    config: &ValidatorConfig,
) -> Result<(), ValidationError> {
    let mut count = 0usize;
    let mut auto_col: Option<&ColumnDef> = None;

    for col in &stmt.columns {
        let mut has_auto_increment = false;
        for pos in 0..col.options.len() {
            if check_auto_increment_option(col, pos)? {
                has_auto_increment = true;
            }
        }
        if has_auto_increment {
            count += 1;
            auto_col = Some(col);
        }
    }

    let Some(col) = auto_col else {
        return Ok(());
    };

    let must_be_key = !stmt.options.iter().any(|opt| {
        matches!(opt, TableOption::Engine(engine) if config.is_auto_increment_exempt(engine))
    });
    let is_key = col
        .options
        .iter()
        .any(|op| matches!(op, ColumnOption::PrimaryKey | ColumnOption::UniqueKey))
        || is_constraint_key(&stmt.constraints, col);

    if count > 1 || (must_be_key && !is_key) {
        return Err(ValidationError::AutoIncrementKey);
    }
    if !col.field_type.kind.supports_auto_increment() {
        return Err(ValidationError::AutoIncrementType(col.name.clone()));
    }
    Ok(())
}

/// Inspects the option at `pos` against the options declared after it.
///
/// Returns whether that option is AUTO_INCREMENT. An AUTO_INCREMENT followed by
/// a non-NULL DEFAULT, or a non-NULL DEFAULT followed by AUTO_INCREMENT, is an
/// error; between the two scans either ordering is caught.
fn check_auto_increment_option(col: &ColumnDef, pos: usize) -> Result<bool, ValidationError> {
    let later = &col.options[pos + 1..];
    match &col.options[pos] {
        ColumnOption::AutoIncrement => {
            if later.iter().any(ColumnOption::is_non_null_default) {
                return Err(ValidationError::AutoIncrementDefault(col.name.clone()));
            }
            Ok(true)
        }
        opt if opt.is_non_null_default() => {
            if later
                .iter()
                .any(|op| matches!(op, ColumnOption::AutoIncrement))
            {
                return Err(ValidationError::AutoIncrementDefault(col.name.clone()));
            }
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Whether `col` leads a table-level key. For `PRIMARY KEY(c1, c2)` only `c1` qualifies.
fn is_constraint_key(constraints: &[Constraint], col: &ColumnDef) -> bool {
    constraints.iter().any(|c| {
        let leads = c
            .keys
            .first()
            .is_some_and(|key| key.column.eq_ignore_ascii_case(&col.name));
        leads
            && matches!(
                c.kind,
                ConstraintKind::PrimaryKey
                    | ConstraintKind::Key
                    | ConstraintKind::Index
                    | ConstraintKind::Unique
                    | ConstraintKind::UniqueKey
                    | ConstraintKind::UniqueIndex
            )
    })
}
