use super::*;

#[test]
fn valid_create_table_passes() {
    check("create table users (id int primary key, name varchar(20), index idx (name))").unwrap();
}

#[test]
fn empty_table_name_rejected() {
    let err = rejected("create table `` (a int)");
    assert_eq!(err, ValidationError::WrongTableName(String::new()));
    assert_eq!(err.kind(), ErrorKind::Grammar);
}

#[test]
fn two_primary_key_columns_rejected() {
    let err = rejected("create table t (a int primary key, b int primary key)");
    assert_eq!(err, ValidationError::MultiplePrimaryKey);
    assert_eq!(err.to_string(), "Multiple primary key defined");
}

#[test]
fn primary_key_column_and_constraint_rejected() {
    let err = rejected("create table t (a int primary key, b int, primary key (b))");
    assert_eq!(err, ValidationError::MultiplePrimaryKey);
}

#[test]
fn bare_key_column_option_counts_as_primary() {
    let err = rejected("create table t (a int key, b int, primary key (b))");
    assert_eq!(err, ValidationError::MultiplePrimaryKey);
}

#[test]
fn composite_primary_key_passes() {
    check("create table t (a int, b int, primary key (a, b))").unwrap();
}

#[test]
fn duplicate_index_column_rejected_case_insensitive() {
    let err = rejected("create table t (a int, b int, index idx (a, b, A))");
    assert_eq!(err, ValidationError::DuplicateColumn("A".to_string()));
    assert_eq!(err.to_string(), "Duplicate column name 'A'");
}

#[test]
fn duplicate_column_in_index_and_unique_constraints_rejected() {
    for constraint in [
        "primary key (a, a)",
        "unique (a, a)",
        "unique key (a, a)",
        "key (a, a)",
        "index (a, a)",
    ] {
        let sql = format!("create table t (a int, {constraint})");
        let err = rejected(&sql);
        assert_eq!(err, ValidationError::DuplicateColumn("a".to_string()), "{sql}");
    }
}

#[test]
fn fulltext_and_foreign_key_lists_are_not_deduplicated() {
    check("create table t (a text, fulltext (a, a))").unwrap();
    check("create table t (a int, foreign key (a, a) references p (x, y))").unwrap();
}

#[test]
fn first_error_in_traversal_order_wins() {
    let err = rejected("create table t (a char(300), b int primary key, c int primary key)");
    assert!(err.to_string().contains("column 'a'"));
}

#[test]
fn drop_table_is_not_checked() {
    check("drop table if exists a, b").unwrap();
}

#[test]
fn parse_error_has_no_kind() {
    let err = check("create table t (a int").unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
    assert_eq!(err.kind(), None);
    assert!(err.to_string().starts_with("Parse error:"));
}
