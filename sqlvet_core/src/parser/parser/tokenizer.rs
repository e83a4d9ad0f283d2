#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Bare word: keyword or identifier.
    Word(String),
    /// Backtick-quoted identifier.
    QuotedIdent(String),
    /// Single- or double-quoted string literal.
    Str(String),
    Number(String),
    Symbol(&'static str),
    Param,
}

impl Token {
    pub(super) fn describe(&self) -> String {
        match self {
            Token::Word(w) => w.clone(),
            Token::QuotedIdent(w) => format!("`{w}`"),
            Token::Str(s) => format!("'{s}'"),
            Token::Number(n) => n.clone(),
            Token::Symbol(s) => (*s).to_string(),
            Token::Param => "?".to_string(),
        }
    }
}

pub(super) fn tokenize(input: &str) -> Result<Vec<Token>, String> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut it = input.chars().peekable();

    while let Some(&ch) = it.peek() {
        match ch {
            c if c.is_whitespace() => {
                it.next();
            }

            '\'' | '"' => {
                it.next();
                let mut current = String::new();
                let mut closed = false;
                while let Some(c) = it.next() {
                    if c == ch {
                        // a doubled quote is an escaped quote
                        if it.peek() == Some(&ch) {
                            it.next();
                            current.push(ch);
                            continue;
                        }
                        closed = true;
                        break;
                    }
                    if c == '\\' {
                        match it.next() {
                            Some('n') => current.push('\n'),
                            Some('t') => current.push('\t'),
                            Some('0') => current.push('\0'),
                            Some(other) => current.push(other),
                            None => break,
                        }
                        continue;
                    }
                    current.push(c);
                }
                if !closed {
                    return Err(format!("Unclosed quote ({ch}) in input"));
                }
                tokens.push(Token::Str(current));
            }

            '`' => {
                it.next();
                let mut current = String::new();
                let mut closed = false;
                while let Some(c) = it.next() {
                    if c == '`' {
                        if it.peek() == Some(&'`') {
                            it.next();
                            current.push('`');
                            continue;
                        }
                        closed = true;
                        break;
                    }
                    current.push(c);
                }
                if !closed {
                    return Err("Unclosed quoted identifier (`) in input".to_string());
                }
                tokens.push(Token::QuotedIdent(current));
            }

            c if c.is_ascii_digit() => {
                let mut current = String::new();
                current.push(c);
                it.next();
                if c == '0' && matches!(it.peek(), Some('x') | Some('X')) {
                    current.push('x');
                    it.next();
                    while let Some(&h) = it.peek() {
                        if !h.is_ascii_hexdigit() {
                            break;
                        }
                        current.push(h);
                        it.next();
                    }
                    if current.len() == 2 {
                        return Err("Bad hex literal. Use 0x followed by hex digits.".to_string());
                    }
                } else {
                    read_number_tail(&mut it, &mut current);
                }
                if it.peek().is_some_and(|c| c.is_alphanumeric() || *c == '_') {
                    return Err(format!(
                        "Characters found immediately after number '{current}'. Add whitespace after the number."
                    ));
                }
                tokens.push(Token::Number(current));
            }

            c if c.is_alphabetic() || c == '_' || c == '@' || c == '$' => {
                let mut current = String::new();
                while let Some(&w) = it.peek() {
                    if !(w.is_alphanumeric() || w == '_' || w == '@' || w == '$') {
                        break;
                    }
                    current.push(w);
                    it.next();
                }
                tokens.push(Token::Word(current));
            }

            '?' => {
                it.next();
                tokens.push(Token::Param);
            }

            '>' | '<' | '!' => {
                it.next();
                let sym = match (ch, it.peek().copied()) {
                    ('>', Some('=')) => ">=",
                    ('<', Some('=')) => "<=",
                    ('<', Some('>')) => "<>",
                    ('!', Some('=')) => "!=",
                    ('>', _) => ">",
                    ('<', _) => "<",
                    _ => "!",
                };
                if sym.len() == 2 {
                    it.next();
                }
                tokens.push(Token::Symbol(sym));
            }

            _ => {
                let sym = match ch {
                    '(' => "(",
                    ')' => ")",
                    ',' => ",",
                    ';' => ";",
                    '.' => ".",
                    '*' => "*",
                    '+' => "+",
                    '-' => "-",
                    '/' => "/",
                    '%' => "%",
                    '=' => "=",
                    other => return Err(format!("Unexpected character '{other}' in input")),
                };
                it.next();
                tokens.push(Token::Symbol(sym));
            }
        }
    }

    Ok(tokens)
}

fn read_number_tail(it: &mut std::iter::Peekable<std::str::Chars<'_>>, current: &mut String) {
    let mut seen_dot = false;
    let mut seen_exp = false;
    while let Some(&c) = it.peek() {
        if c.is_ascii_digit() {
            current.push(c);
            it.next();
        } else if c == '.' && !seen_dot && !seen_exp {
            seen_dot = true;
            current.push(c);
            it.next();
        } else if (c == 'e' || c == 'E') && !seen_exp {
            // only an exponent when digits (optionally signed) follow
            let mut lookahead = it.clone();
            lookahead.next();
            let mut exp = String::from("e");
            if let Some(&sign) = lookahead.peek() {
                if sign == '+' || sign == '-' {
                    exp.push(sign);
                    lookahead.next();
                }
            }
            if !lookahead.peek().is_some_and(|d| d.is_ascii_digit()) {
                break;
            }
            seen_exp = true;
            current.push_str(&exp);
            *it = lookahead;
        } else {
            break;
        }
    }
}
