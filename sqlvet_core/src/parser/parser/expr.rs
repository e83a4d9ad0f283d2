use super::Parser;
use super::tokenizer::Token;
use crate::parser::ast::{
    AggregateFunc, AggregateFuncExpr, BinaryOp, ColumnName, Expr, FuncCallExpr, ParamMarkerExpr,
    UnaryOp,
};
use crate::types::value::{Value, negate, parse_date, parse_number, parse_timestamp};

/// Functions that may be written without parentheses.
const NILADIC_FUNCS: [&str; 6] = [
    "current_timestamp",
    "current_date",
    "current_time",
    "localtime",
    "localtimestamp",
    "utc_timestamp",
];

impl Parser<'_> {
    pub(super) fn parse_expr(&mut self) -> Result<Expr, String> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> Result<Expr, String> {
        let mut left = self.parse_and()?;
        while self.accept_keyword("or") {
            let right = self.parse_and()?;
            left = Expr::binary(left, BinaryOp::Or, right);
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr, String> {
        let mut left = self.parse_not()?;
        while self.accept_keyword("and") {
            let right = self.parse_not()?;
            left = Expr::binary(left, BinaryOp::And, right);
        }
        Ok(left)
    }

    fn parse_not(&mut self) -> Result<Expr, String> {
        if self.accept_keyword("not") || self.accept_symbol("!") {
            let expr = self.parse_not()?;
            return Ok(Expr::Unary {
                op: UnaryOp::Not,
                expr: Box::new(expr),
            });
        }
        self.parse_comparison()
    }

    fn parse_comparison(&mut self) -> Result<Expr, String> {
        let left = self.parse_additive()?;

        if self.accept_keyword("is") {
            let negated = self.accept_keyword("not");
            self.expect_keyword("null", "Bad IS clause. Use IS [NOT] NULL")?;
            return Ok(Expr::IsNull {
                expr: Box::new(left),
                negated,
            });
        }

        let negated = if self.peek_keyword("not")
            && (self.peek_keyword_nth(1, "like") || self.peek_keyword_nth(1, "in"))
        {
            self.pos += 1;
            true
        } else {
            false
        };

        if self.accept_keyword("like") {
            let right = self.parse_additive()?;
            let op = if negated { BinaryOp::NotLike } else { BinaryOp::Like };
            return Ok(Expr::binary(left, op, right));
        }
        if self.accept_keyword("in") {
            let list = self.parse_expr_list("Bad IN list. Use IN (v1, v2, ...)")?;
            return Ok(Expr::InList {
                expr: Box::new(left),
                list,
                negated,
            });
        }

        let op = match self.peek() {
            Some(Token::Symbol("=")) => BinaryOp::Eq,
            Some(Token::Symbol("!=")) | Some(Token::Symbol("<>")) => BinaryOp::NotEq,
            Some(Token::Symbol("<")) => BinaryOp::Lt,
            Some(Token::Symbol("<=")) => BinaryOp::LtEq,
            Some(Token::Symbol(">")) => BinaryOp::Gt,
            Some(Token::Symbol(">=")) => BinaryOp::GtEq,
            _ => return Ok(left),
        };
        self.pos += 1;
        let right = self.parse_additive()?;
        Ok(Expr::binary(left, op, right))
    }

    fn parse_additive(&mut self) -> Result<Expr, String> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = if self.accept_symbol("+") {
                BinaryOp::Plus
            } else if self.accept_symbol("-") {
                BinaryOp::Minus
            } else {
                return Ok(left);
            };
            let right = self.parse_multiplicative()?;
            left = Expr::binary(left, op, right);
        }
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, String> {
        let mut left = self.parse_unary()?;
        loop {
            let op = if self.accept_symbol("*") {
                BinaryOp::Mul
            } else if self.accept_symbol("/") {
                BinaryOp::Div
            } else if self.accept_symbol("%") || self.accept_keyword("mod") {
                BinaryOp::Mod
            } else {
                return Ok(left);
            };
            let right = self.parse_unary()?;
            left = Expr::binary(left, op, right);
        }
    }

    /// Unary minus before a numeric literal folds into the literal.
    pub(super) fn parse_unary(&mut self) -> Result<Expr, String> {
        if self.accept_symbol("-") {
            if let Some(Token::Number(n)) = self.peek() {
                self.pos += 1;
                return Ok(Expr::Literal(negate(parse_number(n)?)?));
            }
            let expr = self.parse_unary()?;
            return Ok(Expr::Unary {
                op: UnaryOp::Neg,
                expr: Box::new(expr),
            });
        }
        if self.accept_symbol("+") {
            return self.parse_unary();
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Expr, String> {
        let tok = match self.advance() {
            Some(tok) => tok,
            None => return Err("Unexpected end of expression".to_string()),
        };
        match tok {
            Token::Number(n) => Ok(Expr::Literal(parse_number(n)?)),
            Token::Str(s) => Ok(Expr::Literal(Value::Str(s.clone()))),
            Token::Param => {
                let index = self.params;
                self.params += 1;
                Ok(Expr::ParamMarker(ParamMarkerExpr { index, value: None }))
            }
            Token::Symbol("(") => {
                let expr = self.parse_expr()?;
                self.expect_symbol(")", "Unclosed '(' in expression")?;
                Ok(expr)
            }
            Token::Symbol(s) => Err(format!("Unexpected '{s}' in expression")),
            Token::QuotedIdent(name) => self.parse_column_ref(name.clone()),
            Token::Word(w) => {
                let lower = w.to_lowercase();
                match lower.as_str() {
                    "null" => return Ok(Expr::Literal(Value::Null)),
                    "true" => return Ok(Expr::Literal(Value::Bool(true))),
                    "false" => return Ok(Expr::Literal(Value::Bool(false))),
                    "date" if matches!(self.peek(), Some(Token::Str(_))) => {
                        let s = self.parse_string("DATE literal")?;
                        return Ok(Expr::Literal(parse_date(&s)?));
                    }
                    "timestamp" if matches!(self.peek(), Some(Token::Str(_))) => {
                        let s = self.parse_string("TIMESTAMP literal")?;
                        return Ok(Expr::Literal(parse_timestamp(&s)?));
                    }
                    _ => {}
                }
                if self.peek_symbol("(") {
                    return self.parse_call(w.clone());
                }
                if NILADIC_FUNCS.contains(&lower.as_str()) {
                    return Ok(Expr::FuncCall(FuncCallExpr {
                        name: lower,
                        args: Vec::new(),
                    }));
                }
                self.parse_column_ref(w.clone())
            }
        }
    }

    fn parse_column_ref(&mut self, first: String) -> Result<Expr, String> {
        if self.accept_symbol(".") {
            let name = self.parse_identifier("column name")?;
            return Ok(Expr::Column(ColumnName {
                table: Some(first),
                name,
            }));
        }
        Ok(Expr::Column(ColumnName {
            table: None,
            name: first,
        }))
    }

    fn parse_call(&mut self, name: String) -> Result<Expr, String> {
        self.expect_symbol("(", "Bad function call")?;
        let Some(func) = AggregateFunc::from_name(&name) else {
            let mut args = Vec::new();
            if !self.accept_symbol(")") {
                loop {
                    args.push(self.parse_expr()?);
                    if self.accept_symbol(")") {
                        break;
                    }
                    self.expect_symbol(",", &format!("Bad argument list for {name}()"))?;
                }
            }
            return Ok(Expr::FuncCall(FuncCallExpr {
                name: name.to_lowercase(),
                args,
            }));
        };

        let distinct = self.accept_keyword("distinct");
        let mut args = Vec::new();
        if func == AggregateFunc::Count && !distinct && self.accept_symbol("*") {
            args.push(Expr::Literal(Value::Int(1)));
        } else {
            loop {
                args.push(self.parse_expr()?);
                if !self.accept_symbol(",") {
                    break;
                }
            }
        }
        self.expect_symbol(")", &format!("Bad {} call. Missing ')'", name.to_uppercase()))?;
        Ok(Expr::Aggregate(AggregateFuncExpr {
            func,
            distinct,
            args,
        }))
    }

    /// `( expr [, ...] )`
    pub(super) fn parse_expr_list(&mut self, usage: &str) -> Result<Vec<Expr>, String> {
        self.expect_symbol("(", usage)?;
        let mut list = Vec::new();
        loop {
            list.push(self.parse_expr()?);
            if self.accept_symbol(")") {
                return Ok(list);
            }
            self.expect_symbol(",", usage)?;
        }
    }
}
