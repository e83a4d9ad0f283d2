use super::Parser;
use super::tokenizer::Token;
use crate::parser::ast::{Expr, Limit, OrderByItem, SelectField, SelectStmt};
use crate::types::value::Value;

const SELECT_USAGE: &str = "Usage: select [distinct] <expr [as alias], ...|*> [from <table>] [where <expr>] [group by <expr>, ...] [having <expr>] [order by <expr> [asc|desc], ...] [limit [<offset>,] <n> [offset <n>]]";

impl Parser<'_> {
    pub(super) fn parse_select(&mut self) -> Result<SelectStmt, String> {
        self.expect_keyword("select", SELECT_USAGE)?;
        let distinct = self.accept_keyword("distinct");
        if !distinct {
            self.accept_keyword("all");
        }

        let mut fields = Vec::new();
        loop {
            fields.push(self.parse_select_field()?);
            if !self.accept_symbol(",") {
                break;
            }
        }

        let from = if self.accept_keyword("from") {
            Some(self.parse_table_name()?)
        } else {
            None
        };

        let filter = self.parse_where()?;

        let mut group_by = Vec::new();
        if self.accept_keyword("group") {
            self.expect_keyword("by", "Bad GROUP BY clause. Use group by <expr>, ...")?;
            loop {
                group_by.push(self.parse_expr()?);
                if !self.accept_symbol(",") {
                    break;
                }
            }
        }

        let having = if self.accept_keyword("having") {
            Some(self.parse_expr()?)
        } else {
            None
        };

        let order_by = self.parse_order_by()?;
        let limit = self.parse_limit()?;

        Ok(SelectStmt {
            distinct,
            fields,
            from,
            filter,
            group_by,
            having,
            order_by,
            limit,
        })
    }

    fn parse_select_field(&mut self) -> Result<SelectField, String> {
        if self.accept_symbol("*") {
            return Ok(SelectField::Wildcard);
        }
        let expr = self.parse_expr()?;
        let alias = if self.accept_keyword("as") {
            Some(self.parse_identifier("alias")?)
        } else if matches!(self.peek(), Some(Token::QuotedIdent(_))) || self.peek_bare_alias() {
            Some(self.parse_identifier("alias")?)
        } else {
            None
        };
        Ok(SelectField::Expr { expr, alias })
    }

    /// A bare word after a select expression is an alias unless it starts the next clause.
    fn peek_bare_alias(&self) -> bool {
        const CLAUSES: [&str; 7] = ["from", "where", "group", "having", "order", "limit", "offset"];
        match self.peek() {
            Some(Token::Word(w)) => !CLAUSES.iter().any(|c| w.eq_ignore_ascii_case(c)),
            _ => false,
        }
    }

    pub(super) fn parse_where(&mut self) -> Result<Option<Expr>, String> {
        if self.accept_keyword("where") {
            return Ok(Some(self.parse_expr()?));
        }
        Ok(None)
    }

    pub(super) fn parse_order_by(&mut self) -> Result<Vec<OrderByItem>, String> {
        let mut items = Vec::new();
        if !self.accept_keyword("order") {
            return Ok(items);
        }
        self.expect_keyword("by", "Bad ORDER BY clause. Use order by <expr> [asc|desc]")?;
        loop {
            let expr = self.parse_expr()?;
            let desc = if self.accept_keyword("desc") {
                true
            } else {
                self.accept_keyword("asc");
                false
            };
            items.push(OrderByItem { expr, desc });
            if !self.accept_symbol(",") {
                return Ok(items);
            }
        }
    }

    /// `LIMIT n`, `LIMIT offset, n` or `LIMIT n OFFSET m`.
    pub(super) fn parse_limit(&mut self) -> Result<Option<Limit>, String> {
        if !self.accept_keyword("limit") {
            return Ok(None);
        }
        let first = self.parse_limit_value()?;
        if self.accept_symbol(",") {
            let count = self.parse_limit_value()?;
            return Ok(Some(Limit {
                count: Some(count),
                offset: Some(first),
            }));
        }
        let offset = if self.accept_keyword("offset") {
            Some(self.parse_limit_value()?)
        } else {
            None
        };
        Ok(Some(Limit {
            count: Some(first),
            offset,
        }))
    }

    fn parse_limit_value(&mut self) -> Result<Expr, String> {
        match self.peek() {
            Some(Token::Param) => self.parse_unary(),
            _ => Ok(Expr::Literal(Value::UInt(self.parse_u64("LIMIT value")?))),
        }
    }
}
