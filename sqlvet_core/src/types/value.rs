use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::fmt;

/// A literal datum as written in statement text.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Decimal(Decimal),
    Str(String),
    Blob(Vec<u8>),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::UInt(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            Value::Int(n) => write!(f, "{n}"),
            Value::UInt(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x:e}"),
            Value::Decimal(d) => write!(f, "{}", d.normalize()),
            Value::Str(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Value::Blob(b) => write!(f, "0x{}", hex::encode_upper(b)),
            Value::Date(d) => write!(f, "DATE '{}'", d.format("%Y-%m-%d")),
            Value::Timestamp(ts) => write!(f, "TIMESTAMP '{}'", ts.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

/// Parses an unsigned numeric token (sign handled by the caller).
pub fn parse_number(token: &str) -> Result<Value, String> {
    if let Some(raw) = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        let padded = if raw.len() % 2 == 1 {
            format!("0{raw}")
        } else {
            raw.to_string()
        };
        let bytes = hex::decode(&padded)
            .map_err(|_| format!("Expected hex literal (e.g. 0xDEADBEEF) but got '{token}'"))?;
        return Ok(Value::Blob(bytes));
    }
    if token.contains(['e', 'E']) {
        let x: f64 = token
            .parse()
            .map_err(|_| format!("Expected float but got '{token}'"))?;
        return Ok(Value::Float(x));
    }
    if token.contains('.') {
        let d = token
            .parse::<Decimal>()
            .map_err(|_| format!("Expected decimal but got '{token}'"))?;
        return Ok(Value::Decimal(d));
    }
    if let Ok(n) = token.parse::<i64>() {
        return Ok(Value::Int(n));
    }
    if let Ok(n) = token.parse::<u64>() {
        return Ok(Value::UInt(n));
    }
    let d = token
        .parse::<Decimal>()
        .map_err(|_| format!("Expected number but got '{token}'"))?;
    Ok(Value::Decimal(d))
}

/// Negates a literal produced by [`parse_number`].
pub fn negate(value: Value) -> Result<Value, String> {
    match value {
        Value::Int(n) => Ok(Value::Int(-n)),
        Value::UInt(n) => {
            if n == i64::MAX as u64 + 1 {
                Ok(Value::Int(i64::MIN))
            } else {
                Ok(Value::Decimal(-Decimal::from(n)))
            }
        }
        Value::Float(x) => Ok(Value::Float(-x)),
        Value::Decimal(d) => Ok(Value::Decimal(-d)),
        other => Err(format!("Cannot negate literal {other}")),
    }
}

pub fn parse_date(token: &str) -> Result<Value, String> {
    let d = NaiveDate::parse_from_str(token, "%Y-%m-%d")
        .map_err(|_| format!("Expected date YYYY-MM-DD but got '{token}'"))?;
    Ok(Value::Date(d))
}

pub fn parse_timestamp(token: &str) -> Result<Value, String> {
    let ts = NaiveDateTime::parse_from_str(token, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(token, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| format!("Expected timestamp 'YYYY-MM-DD HH:MM:SS' but got '{token}'"))?;
    Ok(Value::Timestamp(ts))
}
