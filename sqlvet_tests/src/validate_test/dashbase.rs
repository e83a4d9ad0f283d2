use super::*;
use sqlvet_core::connection::parse_connection_option;
use sqlvet_core::parser::ast::ConstraintKind;

const CONN: &str = "api=http://dashbase-api:9876;kafka=k1:9092,k2:9092;topic=logs";

fn dashbase_table(body: &str) -> String {
    format!("create table logs ({body}) engine = Dashbase dashbase_conn = '{CONN}'")
}

#[test]
fn valid_dashbase_table_passes() {
    check(&dashbase_table("ts datetime primary key, msg text, index (msg)")).unwrap();
    check(&dashbase_table("ts datetime, host text, primary key (ts), key k_host (host)")).unwrap();
}

#[test]
fn engine_name_is_case_insensitive() {
    let err = rejected("create table logs (ts datetime primary key) engine = dashbase");
    assert_eq!(err, ValidationError::DashbaseConnectionMissing);
    assert_eq!(err.kind(), ErrorKind::SearchEngineConstraint);
}

#[test]
fn other_engines_are_not_checked() {
    check("create table logs (id int, msg text, unique (msg)) engine = InnoDB").unwrap();
}

#[test]
fn invalid_connection_rejected() {
    for conn in [
        "",
        "api=ftp://dashbase:9876;kafka=k1:9092",
        "api=http://dashbase:9876",
        "api=http://dashbase:9876;kafka=k1",
        "api=http://dashbase:9876;kafka=k1:9092;zookeeper=z:2181",
    ] {
        let sql = format!(
            "create table logs (ts datetime primary key) engine = Dashbase dashbase_conn = '{conn}'"
        );
        assert_eq!(rejected(&sql), ValidationError::DashbaseConnectionInvalid, "{conn}");
    }
}

#[test]
fn connection_option_is_parsed() {
    let conn = parse_connection_option(CONN).unwrap();
    assert_eq!(conn.api_url, "http://dashbase-api:9876");
    assert_eq!(conn.kafka_hosts, vec!["k1:9092".to_string(), "k2:9092".to_string()]);
    assert_eq!(conn.topic.as_deref(), Some("logs"));
}

#[test]
fn primary_key_column_must_be_datetime() {
    let err = rejected(&dashbase_table("id int primary key"));
    assert_eq!(err, ValidationError::DashbasePrimaryKeyType);

    let err = rejected(&dashbase_table("id int, primary key (id)"));
    assert_eq!(err, ValidationError::DashbasePrimaryKeyType);
}

#[test]
fn composite_primary_key_rejected() {
    let err = rejected(&dashbase_table("ts datetime, seq int, primary key (ts, seq)"));
    assert_eq!(err, ValidationError::DashbasePrimaryKeyColumns);
}

#[test]
fn unique_constraints_rejected() {
    let err = rejected(&dashbase_table("ts datetime primary key, msg text, unique key (msg)"));
    assert_eq!(
        err,
        ValidationError::DashbaseUnsupportedConstraint(ConstraintKind::UniqueKey)
    );
    assert_eq!(
        err.to_string(),
        "Incorrect table definition; Constraint UNIQUE KEY not supported in Dashbase table"
    );
}

#[test]
fn index_must_be_single_text_column() {
    let err = rejected(&dashbase_table("ts datetime primary key, a text, b text, index (a, b)"));
    assert_eq!(err, ValidationError::DashbaseIndexColumns);

    let err = rejected(&dashbase_table("ts datetime primary key, n int, index (n)"));
    assert_eq!(err, ValidationError::DashbaseIndexType);
}

#[test]
fn missing_primary_key_rejected() {
    let err = rejected(&dashbase_table("ts datetime, msg text"));
    assert_eq!(err, ValidationError::DashbasePrimaryKeyMissing);
}

#[test]
fn fulltext_and_foreign_keys_are_ignored() {
    check(&dashbase_table(
        "ts datetime primary key, msg text, fulltext (msg), foreign key (msg) references other (m)",
    ))
    .unwrap();
}

#[test]
fn grammar_errors_win_over_dashbase_errors() {
    let err = rejected(&dashbase_table("a int primary key, b int primary key"));
    assert_eq!(err, ValidationError::MultiplePrimaryKey);
}

#[test]
fn dashbase_errors_win_over_auto_increment_errors() {
    let err = rejected(&dashbase_table("ts datetime primary key, n int auto_increment, unique (n)"));
    assert!(matches!(err, ValidationError::DashbaseUnsupportedConstraint(_)));
}
