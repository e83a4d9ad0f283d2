//! Engine-wide column limits.
//!
//! See https://dev.mysql.com/doc/refman/5.7/en/storage-requirements.html

/// Largest display width any column may declare.
pub const MAX_DISPLAY_WIDTH: u64 = u32::MAX as u64;

/// CHAR length ceiling, in characters.
pub const MAX_FIELD_CHAR_LENGTH: u64 = 255;

/// VARCHAR row budget, in bytes. Divided by the charset width to get characters.
pub const MAX_FIELD_VARCHAR_LENGTH: u64 = 65535;

pub const PRECISION_FOR_DOUBLE: u64 = 53;

pub const MAX_TYPE_SET_MEMBERS: usize = 64;

pub const MAX_TYPE_ENUM_MEMBERS: usize = 65535;

/// Charset used by string columns that do not name one.
pub const DEFAULT_CHARSET: &str = "utf8";

/// Charset of BINARY and VARBINARY columns.
pub const BINARY_CHARSET: &str = "binary";

/// Engine whose AUTO_INCREMENT column need not be a key.
pub const DEFAULT_AUTO_INCREMENT_EXEMPT_ENGINE: &str = "MyISAM";

/// Search-indexed storage engine with its own table shape rules.
pub const DASHBASE_ENGINE: &str = "Dashbase";
