use super::*;

#[test]
fn alter_add_column_passes() {
    check("alter table t add column c int, add index idx (c), drop column d").unwrap();
}

#[test]
fn alter_auto_increment_rejected() {
    let err = rejected("alter table t auto_increment = 10");
    assert_eq!(err, ValidationError::AlterAutoIncrement);
    assert_eq!(err.kind(), ErrorKind::AlterRestriction);
    assert_eq!(
        err.to_string(),
        "No support for setting auto_increment using alter_table"
    );
}

#[test]
fn alter_auto_increment_among_other_options_rejected() {
    let err = rejected("alter table t engine = InnoDB auto_increment 5 comment 'x'");
    assert_eq!(err, ValidationError::AlterAutoIncrement);
}

#[test]
fn alter_other_table_options_pass() {
    check("alter table t engine = InnoDB, comment = 'rebuilt'").unwrap();
}

#[test]
fn alter_added_column_gets_field_checks() {
    let err = rejected("alter table t add c char(300)");
    assert!(matches!(err, ValidationError::ColumnLengthTooBig { .. }));

    let err = rejected("alter table t modify v varchar(70000)");
    assert!(matches!(err, ValidationError::ColumnLengthTooBig { .. }));

    let err = rejected("alter table t change old_d d double(60)");
    assert_eq!(err, ValidationError::WrongFieldSpec("d".to_string()));
}

#[test]
fn alter_add_index_duplicate_columns_rejected() {
    let err = rejected("alter table t add index idx (a, b, a)");
    assert_eq!(err, ValidationError::DuplicateColumn("a".to_string()));

    let err = rejected("alter table t add unique key (a, A)");
    assert_eq!(err, ValidationError::DuplicateColumn("A".to_string()));
}

#[test]
fn create_index_duplicate_columns_rejected() {
    check("create unique index idx on t (a, b)").unwrap();
    let err = rejected("create index idx on t (a, B, b)");
    assert_eq!(err, ValidationError::DuplicateColumn("b".to_string()));
    assert_eq!(err.kind(), ErrorKind::Grammar);
}

#[test]
fn duplicate_check_is_callable_directly() {
    use sqlvet_core::parser::ast::IndexColName;
    use sqlvet_core::validate::check_duplicate_column_name;

    let keys = vec![IndexColName::new("x"), IndexColName::new("y")];
    check_duplicate_column_name(&keys).unwrap();
    let keys = vec![IndexColName::new("x"), IndexColName::new("X")];
    assert!(check_duplicate_column_name(&keys).is_err());
}
