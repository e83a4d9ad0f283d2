use super::*;

#[test]
fn parse_alter_add_column_and_constraint() {
    let stmt = parse("alter table t add column c varchar(10), add unique key uk (c), add d int").unwrap();

    match stmt {
        Statement::AlterTable(at) => {
            assert_eq!(at.table.name, "t");
            assert_eq!(at.specs.len(), 3);
            assert!(matches!(&at.specs[0], AlterTableSpec::AddColumn(col) if col.name == "c"));
            match &at.specs[1] {
                AlterTableSpec::AddConstraint(c) => {
                    assert_eq!(c.kind, ConstraintKind::UniqueKey);
                    assert_eq!(c.name.as_deref(), Some("uk"));
                }
                other => panic!("Expected AddConstraint, got {other:?}"),
            }
            assert!(matches!(&at.specs[2], AlterTableSpec::AddColumn(col) if col.name == "d"));
        }
        _ => panic!("Expected AlterTable statement"),
    }
}

#[test]
fn parse_alter_drop_variants() {
    let stmt = parse("alter table t drop column a, drop primary key, drop index idx, drop b").unwrap();

    match stmt {
        Statement::AlterTable(at) => {
            assert_eq!(
                at.specs,
                vec![
                    AlterTableSpec::DropColumn("a".to_string()),
                    AlterTableSpec::DropPrimaryKey,
                    AlterTableSpec::DropIndex("idx".to_string()),
                    AlterTableSpec::DropColumn("b".to_string()),
                ]
            );
        }
        _ => panic!("Expected AlterTable statement"),
    }
}

#[test]
fn parse_alter_modify_change_rename() {
    let stmt =
        parse("alter table t modify a bigint not null, change b c text, rename to t2").unwrap();

    match stmt {
        Statement::AlterTable(at) => {
            assert!(matches!(&at.specs[0], AlterTableSpec::ModifyColumn(col) if col.field_type.kind == TypeKind::BigInt));
            match &at.specs[1] {
                AlterTableSpec::ChangeColumn { old_name, column } => {
                    assert_eq!(old_name, "b");
                    assert_eq!(column.name, "c");
                }
                other => panic!("Expected ChangeColumn, got {other:?}"),
            }
            assert!(matches!(&at.specs[2], AlterTableSpec::RenameTable(name) if name.name == "t2"));
        }
        _ => panic!("Expected AlterTable statement"),
    }
}

#[test]
fn parse_alter_table_options() {
    let stmt = parse("alter table t engine = InnoDB auto_increment = 100").unwrap();

    match stmt {
        Statement::AlterTable(at) => {
            assert_eq!(
                at.specs,
                vec![AlterTableSpec::Options(vec![
                    TableOption::Engine("InnoDB".to_string()),
                    TableOption::AutoIncrement(100),
                ])]
            );
        }
        _ => panic!("Expected AlterTable statement"),
    }
}

#[test]
fn alter_without_action_errors() {
    let err = parse("alter table t").unwrap_err();
    assert!(err.to_lowercase().contains("usage: alter table"));
}

#[test]
fn alter_unknown_action_errors() {
    let err = parse("alter table t explode a").unwrap_err();
    assert!(err.to_lowercase().contains("usage: alter table"));
}
