use crate::charset::CharsetLookup;
use crate::error::ValidationError;
use crate::limits::{
    BINARY_CHARSET, MAX_DISPLAY_WIDTH, MAX_FIELD_CHAR_LENGTH, MAX_FIELD_VARCHAR_LENGTH,
    MAX_TYPE_ENUM_MEMBERS, MAX_TYPE_SET_MEMBERS, PRECISION_FOR_DOUBLE,
};
use crate::parser::ast::ColumnDef;
use crate::types::datatype::TypeKind;

/// Checks declared column types against the engine's length and cardinality limits.
pub(crate) struct FieldChecker<'a> {
    pub charsets: &'a dyn CharsetLookup,
    pub default_charset: &'a str,
}

impl FieldChecker<'_> {
    pub fn check(&self, col: &ColumnDef) -> Result<(), ValidationError> {
        let tp = &col.field_type;
        if let Some(length) = tp.length {
            if length > MAX_DISPLAY_WIDTH {
                return Err(ValidationError::DisplayWidthOutOfRange {
                    column: col.name.clone(),
                    max: MAX_DISPLAY_WIDTH,
                });
            }
        }
        match tp.kind {
            TypeKind::Char | TypeKind::Binary => {
                if tp.length.is_some_and(|n| n > MAX_FIELD_CHAR_LENGTH) {
                    return Err(ValidationError::ColumnLengthTooBig {
                        column: col.name.clone(),
                        max: MAX_FIELD_CHAR_LENGTH,
                    });
                }
            }
            TypeKind::VarChar | TypeKind::VarBinary => {
                // TODO: fall back to the table and database charsets before the global default.
                let cs = if tp.kind == TypeKind::VarBinary {
                    BINARY_CHARSET
                } else {
                    tp.charset.as_deref().unwrap_or(self.default_charset)
                };
                let desc = self.charsets.resolve(cs)?;
                let max = MAX_FIELD_VARCHAR_LENGTH / desc.max_len.max(1);
                if tp.length.is_some_and(|n| n > max) {
                    return Err(ValidationError::ColumnLengthTooBig {
                        column: col.name.clone(),
                        max,
                    });
                }
            }
            TypeKind::Double => {
                if tp.length.is_some_and(|n| n > PRECISION_FOR_DOUBLE) {
                    return Err(ValidationError::WrongFieldSpec(col.name.clone()));
                }
            }
            TypeKind::Set => {
                if tp.elems.len() > MAX_TYPE_SET_MEMBERS {
                    return Err(ValidationError::TooManySetMembers(col.name.clone()));
                }
            }
            TypeKind::Enum => {
                if tp.elems.len() > MAX_TYPE_ENUM_MEMBERS {
                    return Err(ValidationError::TooManyEnumMembers(col.name.clone()));
                }
            }
            TypeKind::TinyInt
            | TypeKind::SmallInt
            | TypeKind::MediumInt
            | TypeKind::Int
            | TypeKind::BigInt
            | TypeKind::Float
            | TypeKind::Decimal
            | TypeKind::Bit
            | TypeKind::Year
            | TypeKind::Date
            | TypeKind::Datetime
            | TypeKind::Timestamp
            | TypeKind::Time
            | TypeKind::TinyBlob
            | TypeKind::Blob
            | TypeKind::MediumBlob
            | TypeKind::LongBlob
            | TypeKind::Json => {}
        }
        Ok(())
    }
}
