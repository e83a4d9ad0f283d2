//! Depth-first walk over a statement tree.
//!
//! Every node is offered to the visitor twice: `enter` before its children and
//! `leave` after them. An error from either hook ends the walk immediately, so
//! the first error in traversal order is the one returned.

use crate::parser::ast::{
    AlterTableSpec, AlterTableStmt, Assignment, ColumnDef, ColumnOption, Constraint,
    CreateIndexStmt, CreateTableStmt, DeleteStmt, DropTableStmt, Expr, InsertStmt, Limit,
    OrderByItem, SelectField, SelectStmt, Statement, TableOption, UpdateStmt,
};

/// A node handed to a [`Visitor`].
#[derive(Debug)]
pub enum Node<'a> {
    CreateTable(&'a mut CreateTableStmt),
    CreateIndex(&'a mut CreateIndexStmt),
    AlterTable(&'a mut AlterTableStmt),
    AlterTableSpec(&'a mut AlterTableSpec),
    DropTable(&'a mut DropTableStmt),
    Select(&'a mut SelectStmt),
    Insert(&'a mut InsertStmt),
    Update(&'a mut UpdateStmt),
    Delete(&'a mut DeleteStmt),
    ColumnDef(&'a mut ColumnDef),
    ColumnOption(&'a mut ColumnOption),
    Constraint(&'a mut Constraint),
    TableOption(&'a mut TableOption),
    Expr(&'a mut Expr),
    Limit(&'a mut Limit),
}

pub trait Visitor {
    type Error;

    fn enter(&mut self, node: Node<'_>) -> Result<(), Self::Error>;

    fn leave(&mut self, node: Node<'_>) -> Result<(), Self::Error>;
}

pub trait Accept {
    fn accept<V: Visitor>(&mut self, v: &mut V) -> Result<(), V::Error>;
}

fn accept_all<T: Accept, V: Visitor>(items: &mut [T], v: &mut V) -> Result<(), V::Error> {
    for item in items {
        item.accept(v)?;
    }
    Ok(())
}

fn accept_opt<T: Accept, V: Visitor>(item: &mut Option<T>, v: &mut V) -> Result<(), V::Error> {
    match item {
        Some(item) => item.accept(v),
        None => Ok(()),
    }
}

impl Accept for Statement {
    fn accept<V: Visitor>(&mut self, v: &mut V) -> Result<(), V::Error> {
        match self {
            Statement::CreateTable(stmt) => stmt.accept(v),
            Statement::CreateIndex(stmt) => stmt.accept(v),
            Statement::AlterTable(stmt) => stmt.accept(v),
            Statement::DropTable(stmt) => stmt.accept(v),
            Statement::Select(stmt) => stmt.accept(v),
            Statement::Insert(stmt) => stmt.accept(v),
            Statement::Update(stmt) => stmt.accept(v),
            Statement::Delete(stmt) => stmt.accept(v),
        }
    }
}

impl Accept for CreateTableStmt {
    fn accept<V: Visitor>(&mut self, v: &mut V) -> Result<(), V::Error> {
        v.enter(Node::CreateTable(&mut *self))?;
        accept_all(&mut self.columns, v)?;
        accept_all(&mut self.constraints, v)?;
        accept_all(&mut self.options, v)?;
        v.leave(Node::CreateTable(self))
    }
}

impl Accept for CreateIndexStmt {
    fn accept<V: Visitor>(&mut self, v: &mut V) -> Result<(), V::Error> {
        v.enter(Node::CreateIndex(&mut *self))?;
        v.leave(Node::CreateIndex(self))
    }
}

impl Accept for AlterTableStmt {
    fn accept<V: Visitor>(&mut self, v: &mut V) -> Result<(), V::Error> {
        v.enter(Node::AlterTable(&mut *self))?;
        accept_all(&mut self.specs, v)?;
        v.leave(Node::AlterTable(self))
    }
}

impl Accept for AlterTableSpec {
    fn accept<V: Visitor>(&mut self, v: &mut V) -> Result<(), V::Error> {
        v.enter(Node::AlterTableSpec(&mut *self))?;
        match self {
            AlterTableSpec::AddColumn(col)
            | AlterTableSpec::ModifyColumn(col)
            | AlterTableSpec::ChangeColumn { column: col, .. } => col.accept(v)?,
            AlterTableSpec::AddConstraint(constraint) => constraint.accept(v)?,
            AlterTableSpec::Options(options) => accept_all(options, v)?,
            AlterTableSpec::DropColumn(_)
            | AlterTableSpec::DropPrimaryKey
            | AlterTableSpec::DropIndex(_)
            | AlterTableSpec::RenameTable(_) => {}
        }
        v.leave(Node::AlterTableSpec(self))
    }
}

impl Accept for DropTableStmt {
    fn accept<V: Visitor>(&mut self, v: &mut V) -> Result<(), V::Error> {
        v.enter(Node::DropTable(&mut *self))?;
        v.leave(Node::DropTable(self))
    }
}

impl Accept for SelectStmt {
    fn accept<V: Visitor>(&mut self, v: &mut V) -> Result<(), V::Error> {
        v.enter(Node::Select(&mut *self))?;
        for field in &mut self.fields {
            if let SelectField::Expr { expr, .. } = field {
                expr.accept(v)?;
            }
        }
        accept_opt(&mut self.filter, v)?;
        accept_all(&mut self.group_by, v)?;
        accept_opt(&mut self.having, v)?;
        accept_all(&mut self.order_by, v)?;
        accept_opt(&mut self.limit, v)?;
        v.leave(Node::Select(self))
    }
}

impl Accept for InsertStmt {
    fn accept<V: Visitor>(&mut self, v: &mut V) -> Result<(), V::Error> {
        v.enter(Node::Insert(&mut *self))?;
        for row in &mut self.rows {
            accept_all(row, v)?;
        }
        v.leave(Node::Insert(self))
    }
}

impl Accept for UpdateStmt {
    fn accept<V: Visitor>(&mut self, v: &mut V) -> Result<(), V::Error> {
        v.enter(Node::Update(&mut *self))?;
        accept_all(&mut self.assignments, v)?;
        accept_opt(&mut self.filter, v)?;
        accept_all(&mut self.order_by, v)?;
        accept_opt(&mut self.limit, v)?;
        v.leave(Node::Update(self))
    }
}

impl Accept for DeleteStmt {
    fn accept<V: Visitor>(&mut self, v: &mut V) -> Result<(), V::Error> {
        v.enter(Node::Delete(&mut *self))?;
        accept_opt(&mut self.filter, v)?;
        accept_all(&mut self.order_by, v)?;
        accept_opt(&mut self.limit, v)?;
        v.leave(Node::Delete(self))
    }
}

impl Accept for Assignment {
    fn accept<V: Visitor>(&mut self, v: &mut V) -> Result<(), V::Error> {
        self.value.accept(v)
    }
}

impl Accept for OrderByItem {
    fn accept<V: Visitor>(&mut self, v: &mut V) -> Result<(), V::Error> {
        self.expr.accept(v)
    }
}

impl Accept for ColumnDef {
    fn accept<V: Visitor>(&mut self, v: &mut V) -> Result<(), V::Error> {
        v.enter(Node::ColumnDef(&mut *self))?;
        accept_all(&mut self.options, v)?;
        v.leave(Node::ColumnDef(self))
    }
}

impl Accept for ColumnOption {
    fn accept<V: Visitor>(&mut self, v: &mut V) -> Result<(), V::Error> {
        v.enter(Node::ColumnOption(&mut *self))?;
        match self {
            ColumnOption::DefaultValue(expr) | ColumnOption::OnUpdate(expr) => expr.accept(v)?,
            ColumnOption::PrimaryKey
            | ColumnOption::UniqueKey
            | ColumnOption::NotNull
            | ColumnOption::Null
            | ColumnOption::AutoIncrement
            | ColumnOption::Comment(_) => {}
        }
        v.leave(Node::ColumnOption(self))
    }
}

impl Accept for Constraint {
    fn accept<V: Visitor>(&mut self, v: &mut V) -> Result<(), V::Error> {
        v.enter(Node::Constraint(&mut *self))?;
        v.leave(Node::Constraint(self))
    }
}

impl Accept for TableOption {
    fn accept<V: Visitor>(&mut self, v: &mut V) -> Result<(), V::Error> {
        v.enter(Node::TableOption(&mut *self))?;
        v.leave(Node::TableOption(self))
    }
}

impl Accept for Limit {
    fn accept<V: Visitor>(&mut self, v: &mut V) -> Result<(), V::Error> {
        v.enter(Node::Limit(&mut *self))?;
        accept_opt(&mut self.count, v)?;
        accept_opt(&mut self.offset, v)?;
        v.leave(Node::Limit(self))
    }
}

impl Accept for Expr {
    fn accept<V: Visitor>(&mut self, v: &mut V) -> Result<(), V::Error> {
        v.enter(Node::Expr(&mut *self))?;
        match self {
            Expr::Unary { expr, .. } | Expr::IsNull { expr, .. } => expr.accept(v)?,
            Expr::Binary { left, right, .. } => {
                left.accept(v)?;
                right.accept(v)?;
            }
            Expr::InList { expr, list, .. } => {
                expr.accept(v)?;
                accept_all(list, v)?;
            }
            Expr::FuncCall(call) => accept_all(&mut call.args, v)?,
            Expr::Aggregate(agg) => accept_all(&mut agg.args, v)?,
            Expr::Literal(_) | Expr::Column(_) | Expr::ParamMarker(_) => {}
        }
        v.leave(Node::Expr(self))
    }
}

/// Walks `stmt` with `visitor`.
pub fn walk<V: Visitor>(stmt: &mut Statement, visitor: &mut V) -> Result<(), V::Error> {
    stmt.accept(visitor)
}
