use super::Parser;
use super::tokenizer::Token;
use crate::parser::ast::{ForeignKeyAction, IndexColName, TableName};

impl<'a> Parser<'a> {
    pub(super) fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    pub(super) fn peek_nth(&self, n: usize) -> Option<&'a Token> {
        self.tokens.get(self.pos + n)
    }

    pub(super) fn advance(&mut self) -> Option<&'a Token> {
        let tok = self.tokens.get(self.pos);
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    pub(super) fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(super) fn peek_keyword(&self, kw: &str) -> bool {
        self.peek_keyword_nth(0, kw)
    }

    pub(super) fn peek_keyword_nth(&self, n: usize, kw: &str) -> bool {
        matches!(self.peek_nth(n), Some(Token::Word(w)) if w.eq_ignore_ascii_case(kw))
    }

    /// Consumes `kw` if it is next.
    pub(super) fn accept_keyword(&mut self, kw: &str) -> bool {
        if self.peek_keyword(kw) {
            self.pos += 1;
            return true;
        }
        false
    }

    pub(super) fn expect_keyword(&mut self, kw: &str, usage: &str) -> Result<(), String> {
        if self.accept_keyword(kw) {
            return Ok(());
        }
        Err(usage.to_string())
    }

    pub(super) fn peek_symbol(&self, sym: &str) -> bool {
        matches!(self.peek(), Some(Token::Symbol(s)) if *s == sym)
    }

    pub(super) fn accept_symbol(&mut self, sym: &str) -> bool {
        if self.peek_symbol(sym) {
            self.pos += 1;
            return true;
        }
        false
    }

    pub(super) fn expect_symbol(&mut self, sym: &str, usage: &str) -> Result<(), String> {
        if self.accept_symbol(sym) {
            return Ok(());
        }
        Err(usage.to_string())
    }

    pub(super) fn parse_identifier(&mut self, what: &str) -> Result<String, String> {
        match self.advance() {
            Some(Token::Word(w)) | Some(Token::QuotedIdent(w)) => Ok(w.clone()),
            Some(tok) => Err(format!("Expected {what} but got '{}'", tok.describe())),
            None => Err(format!("Missing {what}")),
        }
    }

    /// `name` or `schema.name`.
    pub(super) fn parse_table_name(&mut self) -> Result<TableName, String> {
        let first = self.parse_identifier("table name")?;
        if self.accept_symbol(".") {
            let name = self.parse_identifier("table name")?;
            return Ok(TableName {
                schema: Some(first),
                name,
            });
        }
        Ok(TableName::new(first))
    }

    pub(super) fn parse_u64(&mut self, what: &str) -> Result<u64, String> {
        match self.advance() {
            Some(Token::Number(n)) => n
                .parse::<u64>()
                .map_err(|_| format!("{what} must be a non-negative integer")),
            _ => Err(format!("{what} must be a non-negative integer")),
        }
    }

    pub(super) fn parse_string(&mut self, what: &str) -> Result<String, String> {
        match self.advance() {
            Some(Token::Str(s)) => Ok(s.clone()),
            _ => Err(format!("Expected quoted string for {what}")),
        }
    }

    /// Word, quoted identifier or string, as accepted for engine and charset names.
    pub(super) fn parse_name_or_string(&mut self, what: &str) -> Result<String, String> {
        match self.advance() {
            Some(Token::Word(w)) | Some(Token::QuotedIdent(w)) | Some(Token::Str(w)) => {
                Ok(w.clone())
            }
            _ => Err(format!("Missing {what}")),
        }
    }

    /// `( col [(len)] [ASC|DESC] [, ...] )`
    pub(super) fn parse_index_col_names(&mut self) -> Result<Vec<IndexColName>, String> {
        if !self.accept_symbol("(") {
            return Err("Constraint column list must start with '('".to_string());
        }
        let mut cols: Vec<IndexColName> = Vec::new();
        loop {
            if self.peek_symbol(")") {
                return Err("Constraint column list cannot be empty".to_string());
            }
            let column = self.parse_identifier("column name in key list")?;
            let mut length = None;
            if self.accept_symbol("(") {
                length = Some(self.parse_u64("Key part length")?);
                self.expect_symbol(")", "Bad key part length. Use col(n)")?;
            }
            if !self.accept_keyword("asc") {
                self.accept_keyword("desc");
            }
            cols.push(IndexColName { column, length });
            if self.accept_symbol(")") {
                return Ok(cols);
            }
            if !self.accept_symbol(",") {
                if self.at_end() {
                    return Err("Unclosed constraint column list".to_string());
                }
                return Err("Bad constraint column list, expected comma".to_string());
            }
        }
    }

    /// `( col [, ...] )` without key lengths.
    pub(super) fn parse_column_name_list(&mut self) -> Result<Vec<String>, String> {
        if !self.accept_symbol("(") {
            return Err("Column list must start with '('".to_string());
        }
        let mut cols: Vec<String> = Vec::new();
        loop {
            cols.push(self.parse_identifier("column name")?);
            if self.accept_symbol(")") {
                return Ok(cols);
            }
            if !self.accept_symbol(",") {
                return Err("Bad column list, expected comma".to_string());
            }
        }
    }

    pub(super) fn parse_foreign_key_action(
        &mut self,
        action_kind: &str,
    ) -> Result<ForeignKeyAction, String> {
        let t0 = match self.advance() {
            Some(Token::Word(w)) => w.to_lowercase(),
            _ => {
                return Err(format!(
                    "Unknown ON {action_kind} action ''. Use restrict|cascade|set null|no action"
                ));
            }
        };
        match t0.as_str() {
            "restrict" => Ok(ForeignKeyAction::Restrict),
            "cascade" => Ok(ForeignKeyAction::Cascade),
            "set" => {
                if self.accept_keyword("null") {
                    Ok(ForeignKeyAction::SetNull)
                } else {
                    Err(format!(
                        "Unknown ON {action_kind} action 'set'. Use restrict|cascade|set null|no action"
                    ))
                }
            }
            "no" => {
                if self.accept_keyword("action") {
                    Ok(ForeignKeyAction::NoAction)
                } else {
                    Err(format!(
                        "Unknown ON {action_kind} action 'no'. Use restrict|cascade|set null|no action"
                    ))
                }
            }
            other => Err(format!(
                "Unknown ON {action_kind} action '{other}'. Use restrict|cascade|set null|no action"
            )),
        }
    }
}
