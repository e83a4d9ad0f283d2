pub mod charset;
pub mod config;
pub mod connection;
pub mod error;
pub mod limits;
pub mod parser;
pub mod types;
pub mod validate;

pub use config::ValidatorConfig;
pub use error::{Error, ErrorKind, ValidationError};
pub use parser::ast::Statement;
pub use validate::Validator;

/// Validates `stmt` with the default configuration and collaborators.
pub fn validate(stmt: &mut Statement, in_prepare: bool) -> Result<(), ValidationError> {
    Validator::default().validate(stmt, in_prepare)
}

/// Parse-then-validate entry point used by the CLI.
#[derive(Debug, Clone, Default)]
pub struct Frontend {
    validator: Validator,
}

impl Frontend {
    pub fn new(validator: Validator) -> Self {
        Self { validator }
    }

    pub fn with_config(config: ValidatorConfig) -> Self {
        Self::new(Validator::new(config))
    }

    /// Parses `input` and validates it. Returns the validated (possibly
    /// LIMIT-clamped) statement.
    pub fn check(&self, input: &str, in_prepare: bool) -> Result<Statement, Error> {
        let mut stmt = parser::parser::parse(input).map_err(Error::Parse)?;
        self.validator.validate(&mut stmt, in_prepare)?;
        Ok(stmt)
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }
}
