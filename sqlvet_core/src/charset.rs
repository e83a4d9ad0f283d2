use crate::error::CharsetError;

/// Metadata for one character set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharsetDesc {
    pub name: String,
    pub desc: String,
    pub default_collation: String,
    /// Maximum bytes a single character can occupy.
    pub max_len: u64,
}

/// Resolves a charset name to its description.
pub trait CharsetLookup: Send + Sync {
    fn resolve(&self, name: &str) -> Result<CharsetDesc, CharsetError>;
}

// name, description, default collation, max bytes per char
const CHARSETS: &[(&str, &str, &str, u64)] = &[
    ("utf8", "UTF-8 Unicode", "utf8_bin", 3),
    ("utf8mb4", "UTF-8 Unicode", "utf8mb4_bin", 4),
    ("ascii", "US ASCII", "ascii_bin", 1),
    ("latin1", "Latin1", "latin1_bin", 1),
    ("binary", "binary", "binary", 1),
];

/// The charsets the engine supports out of the box.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinCharsets;

impl CharsetLookup for BuiltinCharsets {
    fn resolve(&self, name: &str) -> Result<CharsetDesc, CharsetError> {
        CHARSETS
            .iter()
            .find(|(cs, ..)| cs.eq_ignore_ascii_case(name))
            .map(|(cs, desc, collation, max_len)| CharsetDesc {
                name: cs.to_string(),
                desc: desc.to_string(),
                default_collation: collation.to_string(),
                max_len: *max_len,
            })
            .ok_or_else(|| CharsetError::Unknown(name.to_string()))
    }
}
