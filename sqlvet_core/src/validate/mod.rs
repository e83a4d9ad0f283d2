//! Semantic validation of parsed statements.
//!
//! [`Validator::validate`] walks a statement once, depth first. Structural
//! checks for CREATE TABLE / CREATE INDEX / ALTER TABLE run when those nodes are
//! entered; the Dashbase and AUTO_INCREMENT checks, the `?` context check and
//! the LIMIT clamp run when nodes are left. The first error ends the walk.

mod alter;
mod auto_increment;
mod create;
mod dashbase;
mod expr;
mod field;
mod index;

use std::sync::Arc;

use tracing::debug;

use crate::charset::{BuiltinCharsets, CharsetLookup};
use crate::config::ValidatorConfig;
use crate::connection::{ConnectionParser, DashbaseConnectionParser};
use crate::error::ValidationError;
use crate::parser::ast::{Expr, Statement};
use crate::parser::visit::{Node, Visitor, walk};

pub use dashbase::is_engine_dashbase;
pub use expr::normalize_limit;
pub use index::check_duplicate_column_name;

use field::FieldChecker;

/// Reusable validator: configuration plus the charset and connection-string
/// collaborators. Every call to [`Validator::validate`] gets fresh state.
#[derive(Clone)]
pub struct Validator {
    config: ValidatorConfig,
    charsets: Arc<dyn CharsetLookup>,
    connections: Arc<dyn ConnectionParser>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Validator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            config,
            charsets: Arc::new(BuiltinCharsets),
            connections: Arc::new(DashbaseConnectionParser),
        }
    }

    pub fn with_charsets(mut self, charsets: Arc<dyn CharsetLookup>) -> Self {
        self.charsets = charsets;
        self
    }

    pub fn with_connection_parser(mut self, connections: Arc<dyn ConnectionParser>) -> Self {
        self.connections = connections;
        self
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates `stmt`, returning the first error in traversal order.
    ///
    /// `?` placeholders are accepted only when `in_prepare` is set. A literal
    /// LIMIT count may be clamped in place, see [`normalize_limit`].
    pub fn validate(&self, stmt: &mut Statement, in_prepare: bool) -> Result<(), ValidationError> {
        let span = tracing::debug_span!("validate", statement = stmt.kind(), in_prepare);
        let _enter = span.enter();

        let mut state = ValidatorState::new(self, in_prepare);
        let result = walk(stmt, &mut state);
        if let Err(err) = &result {
            debug!(kind = ?err.kind(), error = %err, "statement rejected");
        }
        result
    }

    fn field_checker(&self) -> FieldChecker<'_> {
        FieldChecker {
            charsets: self.charsets.as_ref(),
            default_charset: &self.config.default_charset,
        }
    }
}

/// Per-call traversal state. Never reused across statements.
struct ValidatorState<'v> {
    validator: &'v Validator,
    in_prepare: bool,
    in_aggregate: bool,
}

impl<'v> ValidatorState<'v> {
    fn new(validator: &'v Validator, in_prepare: bool) -> Self {
        Self {
            validator,
            in_prepare,
            in_aggregate: false,
        }
    }
}

impl Visitor for ValidatorState<'_> {
    type Error = ValidationError;

    fn enter(&mut self, node: Node<'_>) -> Result<(), ValidationError> {
        match node {
            Node::Expr(Expr::Aggregate(_)) => expr::enter_aggregate(&mut self.in_aggregate)?,
            Node::CreateTable(stmt) => {
                create::check_create_table_grammar(stmt, &self.validator.field_checker())?
            }
            Node::CreateIndex(stmt) => index::check_create_index_grammar(stmt)?,
            Node::AlterTable(stmt) => {
                alter::check_alter_table_grammar(stmt, &self.validator.field_checker())?
            }
            Node::Expr(
                Expr::Literal(_)
                | Expr::Column(_)
                | Expr::ParamMarker(_)
                | Expr::Unary { .. }
                | Expr::Binary { .. }
                | Expr::IsNull { .. }
                | Expr::InList { .. }
                | Expr::FuncCall(_),
            )
            | Node::AlterTableSpec(_)
            | Node::DropTable(_)
            | Node::Select(_)
            | Node::Insert(_)
            | Node::Update(_)
            | Node::Delete(_)
            | Node::ColumnDef(_)
            | Node::ColumnOption(_)
            | Node::Constraint(_)
            | Node::TableOption(_)
            | Node::Limit(_) => {}
        }
        Ok(())
    }

    fn leave(&mut self, node: Node<'_>) -> Result<(), ValidationError> {
        match node {
            Node::Expr(Expr::Aggregate(_)) => self.in_aggregate = false,
            Node::CreateTable(stmt) => {
                dashbase::check_dashbase(stmt, self.validator.connections.as_ref())?;
                auto_increment::check_auto_increment(stmt, &self.validator.config)?;
            }
            Node::Expr(Expr::ParamMarker(_)) => expr::check_param_marker(self.in_prepare)?,
            Node::Limit(limit) => normalize_limit(limit),
            Node::Expr(
                Expr::Literal(_)
                | Expr::Column(_)
                | Expr::Unary { .. }
                | Expr::Binary { .. }
                | Expr::IsNull { .. }
                | Expr::InList { .. }
                | Expr::FuncCall(_),
            )
            | Node::CreateIndex(_)
            | Node::AlterTable(_)
            | Node::AlterTableSpec(_)
            | Node::DropTable(_)
            | Node::Select(_)
            | Node::Insert(_)
            | Node::Update(_)
            | Node::Delete(_)
            | Node::ColumnDef(_)
            | Node::ColumnOption(_)
            | Node::Constraint(_)
            | Node::TableOption(_) => {}
        }
        Ok(())
    }
}
