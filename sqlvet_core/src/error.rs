use serde::Serialize;
use thiserror::Error;

use crate::parser::ast::ConstraintKind;

/// Broad category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Grammar,
    FieldLength,
    AutoIncrement,
    SearchEngineConstraint,
    AlterRestriction,
    AggregateNesting,
    ParameterContext,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CharsetError {
    #[error("Unknown character set: '{0}'")]
    Unknown(String),
}

/// A statement rejected by semantic validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Incorrect table name '{0}'")]
    WrongTableName(String),

    #[error("Multiple primary key defined")]
    MultiplePrimaryKey,

    #[error("Duplicate column name '{0}'")]
    DuplicateColumn(String),

    #[error("Display width out of range for column '{column}' (max = {max})")]
    DisplayWidthOutOfRange { column: String, max: u64 },

    #[error("Column length too big for column '{column}' (max = {max}); use BLOB or TEXT instead")]
    ColumnLengthTooBig { column: String, max: u64 },

    #[error("Incorrect column specifier for column '{0}'")]
    WrongFieldSpec(String),

    #[error("Too many strings for column {0} and SET")]
    TooManySetMembers(String),

    #[error("Too many enumeration values for column {0}")]
    TooManyEnumMembers(String),

    #[error(transparent)]
    Charset(#[from] CharsetError),

    #[error("Invalid default value for '{0}'")]
    AutoIncrementDefault(String),

    #[error(
        "Incorrect table definition; there can be only one auto column and it must be defined as a key"
    )]
    AutoIncrementKey,

    #[error("Incorrect column specifier for column '{0}'")]
    AutoIncrementType(String),

    #[error("Incorrect table definition; DASHBASE_CONN option is required for Dashbase engine tables")]
    DashbaseConnectionMissing,

    #[error("Incorrect table definition; DASHBASE_CONN is not valid")]
    DashbaseConnectionInvalid,

    #[error("Incorrect table definition; Dashbase table primary key column must be datetime type")]
    DashbasePrimaryKeyType,

    #[error("Incorrect table definition; Dashbase table primary key must contain only one column")]
    DashbasePrimaryKeyColumns,

    #[error("Incorrect table definition; Constraint {0} not supported in Dashbase table")]
    DashbaseUnsupportedConstraint(ConstraintKind),

    #[error("Incorrect table definition; Dashbase table index must contain only one column")]
    DashbaseIndexColumns,

    #[error("Incorrect table definition; Dashbase table index column must be text type")]
    DashbaseIndexType,

    #[error("Incorrect table definition; Dashbase table should have a primary key")]
    DashbasePrimaryKeyMissing,

    #[error("No support for setting auto_increment using alter_table")]
    AlterAutoIncrement,

    #[error("Invalid use of group function")]
    InvalidGroupFuncUse,

    #[error("syntax error, unexpected '?'")]
    UnexpectedParamMarker,
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::WrongTableName(_)
            | ValidationError::MultiplePrimaryKey
            | ValidationError::DuplicateColumn(_) => ErrorKind::Grammar,
            ValidationError::DisplayWidthOutOfRange { .. }
            | ValidationError::ColumnLengthTooBig { .. }
            | ValidationError::WrongFieldSpec(_)
            | ValidationError::TooManySetMembers(_)
            | ValidationError::TooManyEnumMembers(_)
            | ValidationError::Charset(_) => ErrorKind::FieldLength,
            ValidationError::AutoIncrementDefault(_)
            | ValidationError::AutoIncrementKey
            | ValidationError::AutoIncrementType(_) => ErrorKind::AutoIncrement,
            ValidationError::DashbaseConnectionMissing
            | ValidationError::DashbaseConnectionInvalid
            | ValidationError::DashbasePrimaryKeyType
            | ValidationError::DashbasePrimaryKeyColumns
            | ValidationError::DashbaseUnsupportedConstraint(_)
            | ValidationError::DashbaseIndexColumns
            | ValidationError::DashbaseIndexType
            | ValidationError::DashbasePrimaryKeyMissing => ErrorKind::SearchEngineConstraint,
            ValidationError::AlterAutoIncrement => ErrorKind::AlterRestriction,
            ValidationError::InvalidGroupFuncUse => ErrorKind::AggregateNesting,
            ValidationError::UnexpectedParamMarker => ErrorKind::ParameterContext,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error returned by [`crate::Frontend`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Validation category, `None` for parse and config failures.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Validation(err) => Some(err.kind()),
            Error::Parse(_) | Error::Config(_) => None,
        }
    }
}
