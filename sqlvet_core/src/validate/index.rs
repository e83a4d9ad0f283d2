use crate::error::ValidationError;
use crate::parser::ast::{CreateIndexStmt, IndexColName};

/// Rejects an index key list that names the same column twice (case-insensitive).
pub fn check_duplicate_column_name(keys: &[IndexColName]) -> Result<(), ValidationError> {
    for (i, first) in keys.iter().enumerate() {
        if let Some(dup) = keys[i + 1..]
            .iter()
            .find(|other| other.column.eq_ignore_ascii_case(&first.column))
        {
            return Err(ValidationError::DuplicateColumn(dup.column.clone()));
        }
    }
    Ok(())
}

pub(crate) fn check_create_index_grammar(stmt: &CreateIndexStmt) -> Result<(), ValidationError> {
    check_duplicate_column_name(&stmt.columns)
}
