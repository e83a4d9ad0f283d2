use super::Parser;
use crate::parser::ast::{Assignment, DeleteStmt, InsertStmt, Statement, UpdateStmt};

const INSERT_USAGE: &str = "Usage: insert into <table> [(<col>, ...)] values (<v1>, <v2>, ...)[, (...)]";
const UPDATE_USAGE: &str = "Usage: update <table> set <col> = <expr>[, ...] [where <expr>] [order by ...] [limit <n>]";
const DELETE_USAGE: &str = "Usage: delete from <table> [where <expr>] [order by ...] [limit <n>]";

impl Parser<'_> {
    pub(super) fn parse_insert(&mut self) -> Result<Statement, String> {
        self.expect_keyword("insert", INSERT_USAGE)?;
        self.accept_keyword("into");
        let table = self.parse_table_name()?;
        let columns = if self.peek_symbol("(") {
            self.parse_column_name_list()?
        } else {
            Vec::new()
        };
        if !self.accept_keyword("values") {
            self.expect_keyword("value", INSERT_USAGE)?;
        }

        let mut rows = Vec::new();
        loop {
            let row = self.parse_expr_list("Bad INSERT values. Values must be a parenthesized, comma-separated list.")?;
            if !columns.is_empty() && row.len() != columns.len() {
                return Err(format!(
                    "INSERT row has {} values but {} columns were listed",
                    row.len(),
                    columns.len()
                ));
            }
            rows.push(row);
            if !self.accept_symbol(",") {
                break;
            }
        }

        Ok(Statement::Insert(InsertStmt {
            table,
            columns,
            rows,
        }))
    }

    pub(super) fn parse_update(&mut self) -> Result<Statement, String> {
        self.expect_keyword("update", UPDATE_USAGE)?;
        let table = self.parse_table_name()?;
        self.expect_keyword("set", UPDATE_USAGE)?;

        let mut assignments = Vec::new();
        loop {
            let column = self.parse_identifier("column name in SET")?;
            self.expect_symbol("=", "Bad SET assignment. Use <col> = <expr>")?;
            let value = self.parse_expr()?;
            assignments.push(Assignment { column, value });
            if !self.accept_symbol(",") {
                break;
            }
        }

        let filter = self.parse_where()?;
        let order_by = self.parse_order_by()?;
        let limit = self.parse_limit()?;
        Ok(Statement::Update(UpdateStmt {
            table,
            assignments,
            filter,
            order_by,
            limit,
        }))
    }

    pub(super) fn parse_delete(&mut self) -> Result<Statement, String> {
        self.expect_keyword("delete", DELETE_USAGE)?;
        self.expect_keyword("from", DELETE_USAGE)?;
        let table = self.parse_table_name()?;
        let filter = self.parse_where()?;
        let order_by = self.parse_order_by()?;
        let limit = self.parse_limit()?;
        Ok(Statement::Delete(DeleteStmt {
            table,
            filter,
            order_by,
            limit,
        }))
    }
}
