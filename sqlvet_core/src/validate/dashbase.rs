use crate::connection::ConnectionParser;
use crate::error::ValidationError;
use crate::limits::DASHBASE_ENGINE;
use crate::parser::ast::{ColumnOption, ConstraintKind, CreateTableStmt};
use crate::types::datatype::TypeKind;

pub fn is_engine_dashbase(stmt: &CreateTableStmt) -> bool {
    stmt.engine()
        .is_some_and(|engine| engine.eq_ignore_ascii_case(DASHBASE_ENGINE))
}

/// Table shape required by the Dashbase engine: a valid DASHBASE_CONN, a single
/// datetime primary key, no unique keys, and single-column text indexes.
pub(crate) fn check_dashbase(
    stmt: &CreateTableStmt,
    connections: &dyn ConnectionParser,
) -> Result<(), ValidationError> {
    if !is_engine_dashbase(stmt) {
        return Ok(());
    }

    let conn = stmt
        .dashbase_connection()
        .ok_or(ValidationError::DashbaseConnectionMissing)?;
    if connections.parse(conn).is_none() {
        return Err(ValidationError::DashbaseConnectionInvalid);
    }

    let mut primary_keys = 0usize;

    for col in &stmt.columns {
        for op in &col.options {
            if matches!(op, ColumnOption::PrimaryKey) {
                primary_keys += 1;
                if col.field_type.kind != TypeKind::Datetime {
                    return Err(ValidationError::DashbasePrimaryKeyType);
                }
            }
        }
    }

    for constraint in &stmt.constraints {
        match &constraint.kind {
            ConstraintKind::PrimaryKey => {
                primary_keys += 1;
                let [key] = constraint.keys.as_slice() else {
                    return Err(ValidationError::DashbasePrimaryKeyColumns);
                };
                if let Some(col) = stmt.column(&key.column) {
                    if col.field_type.kind != TypeKind::Datetime {
                        return Err(ValidationError::DashbasePrimaryKeyType);
                    }
                }
            }
            ConstraintKind::Unique | ConstraintKind::UniqueKey | ConstraintKind::UniqueIndex => {
                return Err(ValidationError::DashbaseUnsupportedConstraint(
                    constraint.kind.clone(),
                ));
            }
            ConstraintKind::Key | ConstraintKind::Index => {
                let [key] = constraint.keys.as_slice() else {
                    return Err(ValidationError::DashbaseIndexColumns);
                };
                if let Some(col) = stmt.column(&key.column) {
                    if col.field_type.kind != TypeKind::Blob {
                        return Err(ValidationError::DashbaseIndexType);
                    }
                }
            }
            ConstraintKind::FullText | ConstraintKind::ForeignKey { .. } => {}
        }
    }

    if primary_keys == 0 {
        return Err(ValidationError::DashbasePrimaryKeyMissing);
    }
    Ok(())
}
