use std::fmt;

/// Storage class of a declared column type.
///
/// TEXT types share the BLOB kinds; they only differ by charset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    TinyInt,
    SmallInt,
    MediumInt,
    Int,
    BigInt,
    Float,
    Double,
    Decimal,
    Bit,
    Year,
    Date,
    Datetime,
    Timestamp,
    Time,
    Char,
    VarChar,
    Binary,
    VarBinary,
    TinyBlob,
    Blob,
    MediumBlob,
    LongBlob,
    Enum,
    Set,
    Json,
}

impl TypeKind {
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            TypeKind::TinyInt
                | TypeKind::SmallInt
                | TypeKind::MediumInt
                | TypeKind::Int
                | TypeKind::BigInt
        )
    }

    /// Kinds an AUTO_INCREMENT column may be declared with.
    pub fn supports_auto_increment(self) -> bool {
        self.is_integer() || matches!(self, TypeKind::Float | TypeKind::Double)
    }

    pub fn name(self) -> &'static str {
        match self {
            TypeKind::TinyInt => "tinyint",
            TypeKind::SmallInt => "smallint",
            TypeKind::MediumInt => "mediumint",
            TypeKind::Int => "int",
            TypeKind::BigInt => "bigint",
            TypeKind::Float => "float",
            TypeKind::Double => "double",
            TypeKind::Decimal => "decimal",
            TypeKind::Bit => "bit",
            TypeKind::Year => "year",
            TypeKind::Date => "date",
            TypeKind::Datetime => "datetime",
            TypeKind::Timestamp => "timestamp",
            TypeKind::Time => "time",
            TypeKind::Char => "char",
            TypeKind::VarChar => "varchar",
            TypeKind::Binary => "binary",
            TypeKind::VarBinary => "varbinary",
            TypeKind::TinyBlob => "tinyblob",
            TypeKind::Blob => "blob",
            TypeKind::MediumBlob => "mediumblob",
            TypeKind::LongBlob => "longblob",
            TypeKind::Enum => "enum",
            TypeKind::Set => "set",
            TypeKind::Json => "json",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Declared type of a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldType {
    pub kind: TypeKind,
    /// Declared length / display width, `None` when unspecified.
    pub length: Option<u64>,
    /// Fractional digits (or fsp for temporal kinds).
    pub decimal: Option<u32>,
    pub unsigned: bool,
    pub charset: Option<String>,
    pub collate: Option<String>,
    /// Member list for ENUM and SET.
    pub elems: Vec<String>,
}

impl FieldType {
    pub fn new(kind: TypeKind) -> Self {
        Self {
            kind,
            length: None,
            decimal: None,
            unsigned: false,
            charset: None,
            collate: None,
            elems: Vec::new(),
        }
    }
}

pub fn parse_type_kind(s: &str) -> Result<TypeKind, String> {
    match s.to_lowercase().as_str() {
        "tinyint" | "bool" | "boolean" => Ok(TypeKind::TinyInt),
        "smallint" => Ok(TypeKind::SmallInt),
        "mediumint" => Ok(TypeKind::MediumInt),
        "int" | "integer" => Ok(TypeKind::Int),
        "bigint" => Ok(TypeKind::BigInt),
        "float" => Ok(TypeKind::Float),
        "double" | "real" => Ok(TypeKind::Double),
        "decimal" | "numeric" | "dec" => Ok(TypeKind::Decimal),
        "bit" => Ok(TypeKind::Bit),
        "year" => Ok(TypeKind::Year),
        "date" => Ok(TypeKind::Date),
        "datetime" => Ok(TypeKind::Datetime),
        "timestamp" => Ok(TypeKind::Timestamp),
        "time" => Ok(TypeKind::Time),
        "char" | "character" => Ok(TypeKind::Char),
        "varchar" => Ok(TypeKind::VarChar),
        "binary" => Ok(TypeKind::Binary),
        "varbinary" => Ok(TypeKind::VarBinary),
        "tinyblob" | "tinytext" => Ok(TypeKind::TinyBlob),
        "blob" | "text" => Ok(TypeKind::Blob),
        "mediumblob" | "mediumtext" => Ok(TypeKind::MediumBlob),
        "longblob" | "longtext" => Ok(TypeKind::LongBlob),
        "enum" => Ok(TypeKind::Enum),
        "set" => Ok(TypeKind::Set),
        "json" => Ok(TypeKind::Json),
        other => Err(format!("Unknown type '{other}'")),
    }
}
