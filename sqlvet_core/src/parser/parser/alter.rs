use super::Parser;
use crate::parser::ast::{AlterTableSpec, AlterTableStmt, Statement};

const ALTER_USAGE: &str = "Usage: alter table <table> add|drop|modify|change|rename ...";

impl Parser<'_> {
    pub(super) fn parse_alter(&mut self) -> Result<Statement, String> {
        self.expect_keyword("alter", ALTER_USAGE)?;
        self.expect_keyword("table", ALTER_USAGE)?;
        let table = self.parse_table_name()?;
        if self.at_end() {
            return Err(ALTER_USAGE.to_string());
        }

        let mut specs = vec![self.parse_alter_spec()?];
        while self.accept_symbol(",") {
            specs.push(self.parse_alter_spec()?);
        }
        Ok(Statement::AlterTable(AlterTableStmt { table, specs }))
    }

    fn parse_alter_spec(&mut self) -> Result<AlterTableSpec, String> {
        if self.peek_table_option() {
            let mut options = vec![self.parse_table_option()?];
            while self.peek_table_option() {
                options.push(self.parse_table_option()?);
            }
            return Ok(AlterTableSpec::Options(options));
        }
        if self.accept_keyword("add") {
            return self.parse_alter_add();
        }
        if self.accept_keyword("drop") {
            return self.parse_alter_drop();
        }
        if self.accept_keyword("modify") {
            self.accept_keyword("column");
            return Ok(AlterTableSpec::ModifyColumn(self.parse_column_def()?));
        }
        if self.accept_keyword("change") {
            self.accept_keyword("column");
            let old_name = self.parse_identifier("column name")?;
            let column = self.parse_column_def()?;
            return Ok(AlterTableSpec::ChangeColumn { old_name, column });
        }
        if self.accept_keyword("rename") {
            if !self.accept_keyword("to") {
                self.accept_keyword("as");
            }
            return Ok(AlterTableSpec::RenameTable(self.parse_table_name()?));
        }
        Err(ALTER_USAGE.to_string())
    }

    fn parse_alter_add(&mut self) -> Result<AlterTableSpec, String> {
        if self.accept_keyword("column") {
            return Ok(AlterTableSpec::AddColumn(self.parse_column_def()?));
        }
        if self.peek_constraint_start() {
            return Ok(AlterTableSpec::AddConstraint(self.parse_constraint()?));
        }
        Ok(AlterTableSpec::AddColumn(self.parse_column_def()?))
    }

    fn parse_alter_drop(&mut self) -> Result<AlterTableSpec, String> {
        if self.accept_keyword("primary") {
            self.expect_keyword("key", "Bad ALTER TABLE DROP PRIMARY KEY syntax")?;
            return Ok(AlterTableSpec::DropPrimaryKey);
        }
        if self.accept_keyword("index") || self.accept_keyword("key") {
            return Ok(AlterTableSpec::DropIndex(self.parse_identifier("index name")?));
        }
        self.accept_keyword("column");
        Ok(AlterTableSpec::DropColumn(self.parse_identifier("column name")?))
    }
}
