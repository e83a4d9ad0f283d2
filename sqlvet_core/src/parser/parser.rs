mod alter;
mod common;
mod create;
mod dml;
mod expr;
mod select;
mod tokenizer;

use crate::parser::ast::Statement;

pub use tokenizer::Token;

/// Parses one statement. A single trailing `;` is allowed.
pub fn parse(input: &str) -> Result<Statement, String> {
    let mut tokens = tokenizer::tokenize(input)?;
    if tokens.last() == Some(&Token::Symbol(";")) {
        tokens.pop();
    }
    if tokens.is_empty() {
        return Err("Empty statement".to_string());
    }

    let mut parser = Parser::new(&tokens);
    let stmt = parser.parse_statement()?;
    if let Some(tok) = parser.peek() {
        return Err(format!("Unexpected '{}' after end of statement", tok.describe()));
    }
    Ok(stmt)
}

pub fn tokenize(input: &str) -> Result<Vec<Token>, String> {
    tokenizer::tokenize(input)
}

/// Cursor over the token stream. Grammar rules live in the sibling modules.
struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    params: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            params: 0,
        }
    }

    fn parse_statement(&mut self) -> Result<Statement, String> {
        let keyword = match self.peek() {
            Some(Token::Word(w)) => w.to_lowercase(),
            Some(tok) => return Err(format!("Unknown command '{}'", tok.describe())),
            None => return Err("Empty statement".to_string()),
        };

        match keyword.as_str() {
            "create" => self.parse_create(),
            "alter" => self.parse_alter(),
            "drop" => self.parse_drop(),
            "select" => self.parse_select().map(Statement::Select),
            "insert" => self.parse_insert(),
            "update" => self.parse_update(),
            "delete" => self.parse_delete(),
            _ => Err(format!("Unknown command '{keyword}'")),
        }
    }
}
