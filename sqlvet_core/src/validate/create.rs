use crate::error::ValidationError;
use crate::parser::ast::{ConstraintKind, CreateTableStmt};

use super::field::FieldChecker;
use super::index::check_duplicate_column_name;

/// Entry-time CREATE TABLE checks: table name, column limits, primary key
/// multiplicity and duplicate key columns.
pub(crate) fn check_create_table_grammar(
    stmt: &CreateTableStmt,
    fields: &FieldChecker<'_>,
) -> Result<(), ValidationError> {
    if stmt.table.name.is_empty() {
        return Err(ValidationError::WrongTableName(String::new()));
    }

    let mut primary_keys = 0usize;
    for col in &stmt.columns {
        fields.check(col)?;
        if col.is_primary_key() {
            primary_keys += 1;
        }
        if primary_keys > 1 {
            return Err(ValidationError::MultiplePrimaryKey);
        }
    }

    for constraint in &stmt.constraints {
        match &constraint.kind {
            ConstraintKind::PrimaryKey => {
                if primary_keys > 0 {
                    return Err(ValidationError::MultiplePrimaryKey);
                }
                primary_keys += 1;
                check_duplicate_column_name(&constraint.keys)?;
            }
            ConstraintKind::Key
            | ConstraintKind::Index
            | ConstraintKind::Unique
            | ConstraintKind::UniqueKey
            | ConstraintKind::UniqueIndex => {
                check_duplicate_column_name(&constraint.keys)?;
            }
            ConstraintKind::FullText | ConstraintKind::ForeignKey { .. } => {}
        }
    }
    Ok(())
}
