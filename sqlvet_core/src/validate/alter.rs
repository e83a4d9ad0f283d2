use crate::error::ValidationError;
use crate::parser::ast::{AlterTableSpec, AlterTableStmt, TableOption};

use super::field::FieldChecker;
use super::index::check_duplicate_column_name;

pub(crate) fn check_alter_table_grammar(
    stmt: &AlterTableStmt,
    fields: &FieldChecker<'_>,
) -> Result<(), ValidationError> {
    for spec in &stmt.specs {
        if let Some(col) = spec.new_column() {
            fields.check(col)?;
        }
        match spec {
            AlterTableSpec::AddConstraint(constraint) => {
                if constraint.kind.is_plain_index() || constraint.kind.is_unique() {
                    check_duplicate_column_name(&constraint.keys)?;
                }
            }
            AlterTableSpec::Options(options) => {
                // AUTO_INCREMENT is fixed at creation time.
                if options
                    .iter()
                    .any(|opt| matches!(opt, TableOption::AutoIncrement(_)))
                {
                    return Err(ValidationError::AlterAutoIncrement);
                }
            }
            AlterTableSpec::AddColumn(_)
            | AlterTableSpec::DropColumn(_)
            | AlterTableSpec::DropPrimaryKey
            | AlterTableSpec::DropIndex(_)
            | AlterTableSpec::ModifyColumn(_)
            | AlterTableSpec::ChangeColumn { .. }
            | AlterTableSpec::RenameTable(_) => {}
        }
    }
    Ok(())
}
