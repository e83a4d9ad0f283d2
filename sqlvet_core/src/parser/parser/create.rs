use super::Parser;
use super::tokenizer::Token;
use crate::parser::ast::{
    ColumnDef, ColumnOption, Constraint, ConstraintKind, CreateIndexStmt, CreateTableStmt,
    DropTableStmt, ForeignKeyAction, Statement, TableOption,
};
use crate::types::datatype::{FieldType, TypeKind, parse_type_kind};

const CREATE_TABLE_USAGE: &str = "Usage: create table <table> (<col> <type> [options], ... [, constraints]) [table options]";
const CREATE_INDEX_USAGE: &str = "Usage: create [unique] index <name> on <table> (<col>, ...)";

impl Parser<'_> {
    pub(super) fn parse_create(&mut self) -> Result<Statement, String> {
        self.expect_keyword("create", CREATE_TABLE_USAGE)?;
        if self.peek_keyword("index") {
            return self.parse_create_index(false);
        }
        if self.accept_keyword("unique") {
            return self.parse_create_index(true);
        }
        self.expect_keyword("table", CREATE_TABLE_USAGE)?;

        let mut if_not_exists = false;
        if self.accept_keyword("if") {
            self.expect_keyword("not", "Bad IF NOT EXISTS clause")?;
            self.expect_keyword("exists", "Bad IF NOT EXISTS clause")?;
            if_not_exists = true;
        }
        let table = self.parse_table_name()?;
        if !self.accept_symbol("(") {
            return Err("CREATE requires parenthesized column definitions".to_string());
        }

        let mut columns: Vec<ColumnDef> = Vec::new();
        let mut constraints: Vec<Constraint> = Vec::new();
        loop {
            if self.peek_constraint_start() {
                constraints.push(self.parse_constraint()?);
            } else {
                columns.push(self.parse_column_def()?);
            }
            if self.accept_symbol(")") {
                break;
            }
            if !self.accept_symbol(",") {
                return Err("Bad CREATE column list. Columns must be comma-separated.".to_string());
            }
            if self.peek_symbol(")") {
                return Err("Bad CREATE column list. Trailing comma is not allowed.".to_string());
            }
        }

        if columns.is_empty() {
            return Err("CREATE requires at least one column".to_string());
        }

        let mut options: Vec<TableOption> = Vec::new();
        while !self.at_end() {
            if !options.is_empty() {
                self.accept_symbol(",");
            }
            options.push(self.parse_table_option()?);
        }

        Ok(Statement::CreateTable(CreateTableStmt {
            table,
            if_not_exists,
            columns,
            constraints,
            options,
        }))
    }

    fn parse_create_index(&mut self, unique: bool) -> Result<Statement, String> {
        self.expect_keyword("index", CREATE_INDEX_USAGE)?;
        let index_name = self.parse_identifier("index name")?;
        self.expect_keyword("on", CREATE_INDEX_USAGE)?;
        let table = self.parse_table_name()?;
        let columns = self.parse_index_col_names()?;
        Ok(Statement::CreateIndex(CreateIndexStmt {
            index_name,
            table,
            unique,
            columns,
        }))
    }

    pub(super) fn parse_drop(&mut self) -> Result<Statement, String> {
        self.expect_keyword("drop", "Usage: drop table [if exists] <table>[, <table>...]")?;
        self.expect_keyword("table", "Usage: drop table [if exists] <table>[, <table>...]")?;
        let mut if_exists = false;
        if self.accept_keyword("if") {
            self.expect_keyword("exists", "Bad IF EXISTS clause")?;
            if_exists = true;
        }
        let mut tables = vec![self.parse_table_name()?];
        while self.accept_symbol(",") {
            tables.push(self.parse_table_name()?);
        }
        Ok(Statement::DropTable(DropTableStmt { tables, if_exists }))
    }

    pub(super) fn peek_constraint_start(&self) -> bool {
        ["constraint", "primary", "unique", "key", "index", "fulltext", "foreign"]
            .iter()
            .any(|kw| self.peek_keyword(kw))
    }

    pub(super) fn parse_column_def(&mut self) -> Result<ColumnDef, String> {
        let name = self.parse_identifier("column name")?;
        let field_type = self.parse_field_type()?;
        let options = self.parse_column_options()?;
        Ok(ColumnDef {
            name,
            field_type,
            options,
        })
    }

    fn parse_field_type(&mut self) -> Result<FieldType, String> {
        let type_name = match self.advance() {
            Some(Token::Word(w)) => w.to_lowercase(),
            _ => return Err("Missing datatype in column definition".to_string()),
        };
        let kind = parse_type_kind(&type_name)?;
        let mut tp = FieldType::new(kind);
        if type_name == "bool" || type_name == "boolean" {
            tp.length = Some(1);
        }
        if kind == TypeKind::Double {
            self.accept_keyword("precision");
        }

        match kind {
            TypeKind::Enum | TypeKind::Set => {
                tp.elems = self.parse_type_elems(&type_name)?;
            }
            TypeKind::VarChar | TypeKind::VarBinary => {
                if !self.peek_symbol("(") {
                    return Err(format!("Bad {type_name} type. Use {type_name}(n)"));
                }
                self.parse_type_length(&mut tp, &type_name)?;
            }
            TypeKind::Date | TypeKind::Json => {}
            _ => {
                if self.peek_symbol("(") {
                    self.parse_type_length(&mut tp, &type_name)?;
                }
            }
        }

        loop {
            if self.accept_keyword("unsigned") {
                tp.unsigned = true;
            } else if self.accept_keyword("signed") || self.accept_keyword("zerofill") {
            } else if self.accept_keyword("charset") {
                tp.charset = Some(self.parse_name_or_string("charset name")?);
            } else if self.peek_keyword("character") && self.peek_keyword_nth(1, "set") {
                self.pos += 2;
                tp.charset = Some(self.parse_name_or_string("charset name")?);
            } else if self.accept_keyword("collate") {
                tp.collate = Some(self.parse_name_or_string("collation name")?);
            } else {
                break;
            }
        }
        Ok(tp)
    }

    /// `(n)` or `(m, d)`; temporal kinds store the fsp in `decimal`.
    fn parse_type_length(&mut self, tp: &mut FieldType, type_name: &str) -> Result<(), String> {
        self.expect_symbol("(", &format!("Bad {type_name} type"))?;
        let first = self.parse_u64(&format!("{type_name} length"))?;
        let mut second = None;
        if self.accept_symbol(",") {
            let d = self.parse_u64(&format!("{type_name} scale"))?;
            second = Some(u32::try_from(d).map_err(|_| format!("{type_name} scale out of range"))?);
        }
        self.expect_symbol(")", &format!("Bad {type_name} type. Missing ')'"))?;

        match tp.kind {
            TypeKind::Datetime | TypeKind::Timestamp | TypeKind::Time => {
                if second.is_some() {
                    return Err(format!("Bad {type_name} type. Use {type_name}(fsp)"));
                }
                tp.decimal = Some(
                    u32::try_from(first).map_err(|_| format!("{type_name} precision out of range"))?,
                );
            }
            _ => {
                tp.length = Some(first);
                tp.decimal = second;
            }
        }
        Ok(())
    }

    fn parse_type_elems(&mut self, type_name: &str) -> Result<Vec<String>, String> {
        let usage = format!("Bad {type_name} type. Use {type_name}('a', 'b', ...)");
        self.expect_symbol("(", &usage)?;
        let mut elems = Vec::new();
        loop {
            elems.push(self.parse_string(&format!("{type_name} member"))?);
            if self.accept_symbol(")") {
                return Ok(elems);
            }
            self.expect_symbol(",", &usage)?;
        }
    }

    fn parse_column_options(&mut self) -> Result<Vec<ColumnOption>, String> {
        let mut options = Vec::new();
        while !self.at_end() && !self.peek_symbol(",") && !self.peek_symbol(")") {
            let option = match self.advance() {
                Some(Token::Word(w)) => w.to_lowercase(),
                Some(tok) => {
                    return Err(format!("Unknown column option '{}'", tok.describe()));
                }
                None => break,
            };
            match option.as_str() {
                "primary" => {
                    self.expect_keyword("key", "Bad PRIMARY KEY option. Use 'primary key'")?;
                    options.push(ColumnOption::PrimaryKey);
                }
                // a bare KEY in a column definition means PRIMARY KEY
                "key" => options.push(ColumnOption::PrimaryKey),
                "unique" => {
                    self.accept_keyword("key");
                    options.push(ColumnOption::UniqueKey);
                }
                "not" => {
                    self.expect_keyword("null", "Bad NOT NULL option. Use 'not null'")?;
                    options.push(ColumnOption::NotNull);
                }
                "null" => options.push(ColumnOption::Null),
                "auto_increment" => options.push(ColumnOption::AutoIncrement),
                "default" => {
                    let expr = self.parse_unary()?;
                    options.push(ColumnOption::DefaultValue(expr));
                }
                "on" => {
                    self.expect_keyword("update", "Bad ON UPDATE option. Use 'on update <expr>'")?;
                    let expr = self.parse_unary()?;
                    options.push(ColumnOption::OnUpdate(expr));
                }
                "comment" => {
                    options.push(ColumnOption::Comment(self.parse_string("column comment")?));
                }
                other => return Err(format!("Unknown column option '{other}'")),
            }
        }
        Ok(options)
    }

    pub(super) fn parse_constraint(&mut self) -> Result<Constraint, String> {
        let mut name = None;
        if self.accept_keyword("constraint")
            && !self.peek_keyword("primary")
            && !self.peek_keyword("unique")
            && !self.peek_keyword("foreign")
        {
            name = Some(self.parse_identifier("constraint name")?);
        }

        let kind = if self.accept_keyword("primary") {
            self.expect_keyword("key", "Bad PRIMARY KEY constraint. Use primary key(col1,col2)")?;
            ConstraintKind::PrimaryKey
        } else if self.accept_keyword("unique") {
            if self.accept_keyword("key") {
                ConstraintKind::UniqueKey
            } else if self.accept_keyword("index") {
                ConstraintKind::UniqueIndex
            } else {
                ConstraintKind::Unique
            }
        } else if self.accept_keyword("key") {
            ConstraintKind::Key
        } else if self.accept_keyword("index") {
            ConstraintKind::Index
        } else if self.accept_keyword("fulltext") {
            if !self.accept_keyword("key") {
                self.accept_keyword("index");
            }
            ConstraintKind::FullText
        } else if self.accept_keyword("foreign") {
            self.expect_keyword(
                "key",
                "Bad FOREIGN KEY constraint. Use foreign key(col) references t(col)",
            )?;
            let index_name = self.parse_optional_index_name()?;
            let keys = self.parse_index_col_names()?;
            let kind = self.parse_references()?;
            return Ok(Constraint {
                name: name.or(index_name),
                kind,
                keys,
            });
        } else {
            return Err("Unknown table constraint".to_string());
        };

        if kind != ConstraintKind::PrimaryKey {
            let index_name = self.parse_optional_index_name()?;
            name = name.or(index_name);
        }
        let keys = self.parse_index_col_names()?;
        Ok(Constraint { name, kind, keys })
    }

    fn parse_optional_index_name(&mut self) -> Result<Option<String>, String> {
        if self.peek_symbol("(") {
            return Ok(None);
        }
        Ok(Some(self.parse_identifier("index name")?))
    }

    fn parse_references(&mut self) -> Result<ConstraintKind, String> {
        self.expect_keyword("references", "Bad FOREIGN KEY constraint. Missing REFERENCES")?;
        let ref_table = self.parse_table_name()?;
        let ref_columns = self.parse_column_name_list()?;
        let mut on_delete = ForeignKeyAction::Restrict;
        let mut on_update = ForeignKeyAction::Restrict;
        loop {
            if self.peek_keyword("on") && self.peek_keyword_nth(1, "delete") {
                self.pos += 2;
                on_delete = self.parse_foreign_key_action("DELETE")?;
                continue;
            }
            if self.peek_keyword("on") && self.peek_keyword_nth(1, "update") {
                self.pos += 2;
                on_update = self.parse_foreign_key_action("UPDATE")?;
                continue;
            }
            break;
        }
        Ok(ConstraintKind::ForeignKey {
            ref_table,
            ref_columns,
            on_delete,
            on_update,
        })
    }

    pub(super) fn peek_table_option(&self) -> bool {
        [
            "engine",
            "default",
            "charset",
            "character",
            "collate",
            "auto_increment",
            "comment",
            "dashbase_conn",
        ]
        .iter()
        .any(|kw| self.peek_keyword(kw))
    }

    pub(super) fn parse_table_option(&mut self) -> Result<TableOption, String> {
        self.accept_keyword("default");
        let option = match self.advance() {
            Some(Token::Word(w)) => w.to_lowercase(),
            Some(tok) => return Err(format!("Unknown table option '{}'", tok.describe())),
            None => return Err("Missing table option".to_string()),
        };
        if option == "character" {
            self.expect_keyword("set", "Bad CHARACTER SET option")?;
        }
        self.accept_symbol("=");
        match option.as_str() {
            "engine" => Ok(TableOption::Engine(self.parse_name_or_string("engine name")?)),
            "charset" | "character" => {
                Ok(TableOption::Charset(self.parse_name_or_string("charset name")?))
            }
            "collate" => Ok(TableOption::Collate(
                self.parse_name_or_string("collation name")?,
            )),
            "auto_increment" => Ok(TableOption::AutoIncrement(
                self.parse_u64("AUTO_INCREMENT")?,
            )),
            "comment" => Ok(TableOption::Comment(self.parse_string("table comment")?)),
            "dashbase_conn" => Ok(TableOption::DashbaseConnection(
                self.parse_string("DASHBASE_CONN")?,
            )),
            other => Err(format!("Unknown table option '{other}'")),
        }
    }
}
