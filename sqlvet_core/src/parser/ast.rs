use std::fmt;

use crate::types::datatype::FieldType;
use crate::types::value::Value;

#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::large_enum_variant)]
pub enum Statement {
    CreateTable(CreateTableStmt),
    CreateIndex(CreateIndexStmt),
    AlterTable(AlterTableStmt),
    DropTable(DropTableStmt),
    Select(SelectStmt),
    Insert(InsertStmt),
    Update(UpdateStmt),
    Delete(DeleteStmt),
}

impl Statement {
    /// Short statement label used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::CreateTable(_) => "create_table",
            Statement::CreateIndex(_) => "create_index",
            Statement::AlterTable(_) => "alter_table",
            Statement::DropTable(_) => "drop_table",
            Statement::Select(_) => "select",
            Statement::Insert(_) => "insert",
            Statement::Update(_) => "update",
            Statement::Delete(_) => "delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableName {
    pub schema: Option<String>,
    pub name: String,
}

impl TableName {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
        }
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.schema {
            Some(schema) => write!(f, "{}.{}", schema, self.name),
            None => f.write_str(&self.name),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTableStmt {
    pub table: TableName,
    pub if_not_exists: bool,
    pub columns: Vec<ColumnDef>,
    pub constraints: Vec<Constraint>,
    pub options: Vec<TableOption>,
}

impl CreateTableStmt {
    /// Engine named by the first ENGINE option, if any.
    pub fn engine(&self) -> Option<&str> {
        self.options.iter().find_map(|opt| match opt {
            TableOption::Engine(name) => Some(name.as_str()),
            _ => None,
        })
    }

    pub fn dashbase_connection(&self) -> Option<&str> {
        self.options.iter().find_map(|opt| match opt {
            TableOption::DashbaseConnection(conn) => Some(conn.as_str()),
            _ => None,
        })
    }

    /// Case-insensitive column lookup.
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub field_type: FieldType,
    /// Options in declaration order.
    pub options: Vec<ColumnOption>,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            options: Vec::new(),
        }
    }

    pub fn with_option(mut self, option: ColumnOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn is_primary_key(&self) -> bool {
        self.options
            .iter()
            .any(|op| matches!(op, ColumnOption::PrimaryKey))
    }

    pub fn is_auto_increment(&self) -> bool {
        self.options
            .iter()
            .any(|op| matches!(op, ColumnOption::AutoIncrement))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnOption {
    PrimaryKey,
    UniqueKey,
    NotNull,
    Null,
    AutoIncrement,
    DefaultValue(Expr),
    OnUpdate(Expr),
    Comment(String),
}

impl ColumnOption {
    /// True for a DEFAULT whose value is a literal other than NULL.
    ///
    /// Non-literal defaults (CURRENT_TIMESTAMP and friends) carry no datum and count as NULL.
    pub fn is_non_null_default(&self) -> bool {
        match self {
            ColumnOption::DefaultValue(Expr::Literal(v)) => !v.is_null(),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexColName {
    pub column: String,
    pub length: Option<u64>,
}

impl IndexColName {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            length: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForeignKeyAction {
    Restrict,
    Cascade,
    SetNull,
    NoAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintKind {
    PrimaryKey,
    Key,
    Index,
    Unique,
    UniqueKey,
    UniqueIndex,
    FullText,
    ForeignKey {
        ref_table: TableName,
        ref_columns: Vec<String>,
        on_delete: ForeignKeyAction,
        on_update: ForeignKeyAction,
    },
}

impl ConstraintKind {
    pub fn is_unique(&self) -> bool {
        matches!(
            self,
            ConstraintKind::Unique | ConstraintKind::UniqueKey | ConstraintKind::UniqueIndex
        )
    }

    /// Plain KEY / INDEX.
    pub fn is_plain_index(&self) -> bool {
        matches!(self, ConstraintKind::Key | ConstraintKind::Index)
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConstraintKind::PrimaryKey => "PRIMARY KEY",
            ConstraintKind::Key => "KEY",
            ConstraintKind::Index => "INDEX",
            ConstraintKind::Unique => "UNIQUE",
            ConstraintKind::UniqueKey => "UNIQUE KEY",
            ConstraintKind::UniqueIndex => "UNIQUE INDEX",
            ConstraintKind::FullText => "FULLTEXT",
            ConstraintKind::ForeignKey { .. } => "FOREIGN KEY",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    pub name: Option<String>,
    pub kind: ConstraintKind,
    pub keys: Vec<IndexColName>,
}

impl Constraint {
    pub fn new(kind: ConstraintKind, keys: Vec<IndexColName>) -> Self {
        Self {
            name: None,
            kind,
            keys,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableOption {
    Engine(String),
    Charset(String),
    Collate(String),
    AutoIncrement(u64),
    Comment(String),
    DashbaseConnection(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateIndexStmt {
    pub index_name: String,
    pub table: TableName,
    pub unique: bool,
    pub columns: Vec<IndexColName>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlterTableStmt {
    pub table: TableName,
    pub specs: Vec<AlterTableSpec>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AlterTableSpec {
    AddColumn(ColumnDef),
    AddConstraint(Constraint),
    DropColumn(String),
    DropPrimaryKey,
    DropIndex(String),
    ModifyColumn(ColumnDef),
    ChangeColumn { old_name: String, column: ColumnDef },
    RenameTable(TableName),
    Options(Vec<TableOption>),
}

impl AlterTableSpec {
    /// Column definition introduced by this spec, if any.
    pub fn new_column(&self) -> Option<&ColumnDef> {
        match self {
            AlterTableSpec::AddColumn(col)
            | AlterTableSpec::ModifyColumn(col)
            | AlterTableSpec::ChangeColumn { column: col, .. } => Some(col),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DropTableStmt {
    pub tables: Vec<TableName>,
    pub if_exists: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectStmt {
    pub distinct: bool,
    pub fields: Vec<SelectField>,
    pub from: Option<TableName>,
    pub filter: Option<Expr>,
    pub group_by: Vec<Expr>,
    pub having: Option<Expr>,
    pub order_by: Vec<OrderByItem>,
    pub limit: Option<Limit>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectField {
    Wildcard,
    Expr { expr: Expr, alias: Option<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByItem {
    pub expr: Expr,
    pub desc: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertStmt {
    pub table: TableName,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Expr>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStmt {
    pub table: TableName,
    pub assignments: Vec<Assignment>,
    pub filter: Option<Expr>,
    pub order_by: Vec<OrderByItem>,
    pub limit: Option<Limit>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteStmt {
    pub table: TableName,
    pub filter: Option<Expr>,
    pub order_by: Vec<OrderByItem>,
    pub limit: Option<Limit>,
}

/// LIMIT clause. Literal count and offset are `Value::UInt`.
#[derive(Debug, Clone, PartialEq)]
pub struct Limit {
    pub count: Option<Expr>,
    pub offset: Option<Expr>,
}

impl Limit {
    pub fn new(count: u64, offset: Option<u64>) -> Self {
        Self {
            count: Some(Expr::Literal(Value::UInt(count))),
            offset: offset.map(|n| Expr::Literal(Value::UInt(n))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnName {
    pub table: Option<String>,
    pub name: String,
}

/// A `?` placeholder; `index` is its ordinal within the statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamMarkerExpr {
    pub index: usize,
    pub value: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Or,
    And,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Like,
    NotLike,
    Plus,
    Minus,
    Mul,
    Div,
    Mod,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncCallExpr {
    pub name: String,
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFunc {
    Count,
    Sum,
    Avg,
    Min,
    Max,
    GroupConcat,
    BitAnd,
    BitOr,
    BitXor,
}

impl AggregateFunc {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "count" => Some(AggregateFunc::Count),
            "sum" => Some(AggregateFunc::Sum),
            "avg" => Some(AggregateFunc::Avg),
            "min" => Some(AggregateFunc::Min),
            "max" => Some(AggregateFunc::Max),
            "group_concat" => Some(AggregateFunc::GroupConcat),
            "bit_and" => Some(AggregateFunc::BitAnd),
            "bit_or" => Some(AggregateFunc::BitOr),
            "bit_xor" => Some(AggregateFunc::BitXor),
            _ => None,
        }
    }
}

/// Aggregate call. `COUNT(*)` is stored with the single argument `1`.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateFuncExpr {
    pub func: AggregateFunc,
    pub distinct: bool,
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Value),
    Column(ColumnName),
    ParamMarker(ParamMarkerExpr),
    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
    IsNull {
        expr: Box<Expr>,
        negated: bool,
    },
    InList {
        expr: Box<Expr>,
        list: Vec<Expr>,
        negated: bool,
    },
    FuncCall(FuncCallExpr),
    Aggregate(AggregateFuncExpr),
}

impl Expr {
    pub fn column(name: impl Into<String>) -> Self {
        Expr::Column(ColumnName {
            table: None,
            name: name.into(),
        })
    }

    pub fn aggregate(func: AggregateFunc, args: Vec<Expr>) -> Self {
        Expr::Aggregate(AggregateFuncExpr {
            func,
            distinct: false,
            args,
        })
    }

    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn is_param_marker(&self) -> bool {
        matches!(self, Expr::ParamMarker(_))
    }

    /// The `u64` carried by a literal LIMIT count/offset.
    pub fn uint_value(&self) -> Option<u64> {
        match self {
            Expr::Literal(v) => v.as_u64(),
            _ => None,
        }
    }
}
