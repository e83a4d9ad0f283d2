use super::*;

#[test]
fn char_length_limit() {
    check("create table t (c char(255))").unwrap();
    let err = rejected("create table t (c char(256))");
    assert_eq!(
        err,
        ValidationError::ColumnLengthTooBig {
            column: "c".to_string(),
            max: 255
        }
    );
    assert_eq!(err.kind(), ErrorKind::FieldLength);
}

#[test]
fn varchar_limit_depends_on_default_charset() {
    // utf8 is three bytes per character: 65535 / 3
    check("create table t (v varchar(21845))").unwrap();
    let err = rejected("create table t (v varchar(21846))");
    assert_eq!(
        err,
        ValidationError::ColumnLengthTooBig {
            column: "v".to_string(),
            max: 21845
        }
    );
    assert_eq!(
        err.to_string(),
        "Column length too big for column 'v' (max = 21845); use BLOB or TEXT instead"
    );
}

#[test]
fn varchar_limit_uses_column_charset() {
    check("create table t (v varchar(65535) character set latin1)").unwrap();
    check("create table t (v varchar(16383) charset utf8mb4)").unwrap();
    let err = rejected("create table t (v varchar(16384) charset utf8mb4)");
    assert!(err.to_string().contains("max = 16383"));
}

#[test]
fn varchar_unknown_charset_rejected() {
    let err = rejected("create table t (v varchar(10) charset klingon)");
    assert_eq!(err.to_string(), "Unknown character set: 'klingon'");
    assert_eq!(err.kind(), ErrorKind::FieldLength);
}

#[test]
fn double_precision_limit() {
    check("create table t (d double(53))").unwrap();
    check("create table t (d double(10, 4))").unwrap();
    let err = rejected("create table t (d double(54))");
    assert_eq!(err, ValidationError::WrongFieldSpec("d".to_string()));
}

#[test]
fn display_width_limit() {
    check("create table t (i int(4294967295))").unwrap();
    let err = rejected("create table t (i int(4294967296))");
    assert!(matches!(err, ValidationError::DisplayWidthOutOfRange { .. }));
}

#[test]
fn set_member_limit() {
    let members = |n: usize| {
        (0..n)
            .map(|i| format!("'m{i}'"))
            .collect::<Vec<_>>()
            .join(", ")
    };
    check(&format!("create table t (s set({}))", members(64))).unwrap();
    let err = rejected(&format!("create table t (s set({}))", members(65)));
    assert_eq!(err, ValidationError::TooManySetMembers("s".to_string()));
    assert_eq!(err.to_string(), "Too many strings for column s and SET");
}

#[test]
fn blob_and_text_have_no_length_ceiling() {
    check("create table t (b blob(100000), x text(70000), j json)").unwrap();
}

#[test]
fn binary_length_limit() {
    check("create table t (b binary(255))").unwrap();
    let err = rejected("create table t (b binary(256))");
    assert_eq!(
        err,
        ValidationError::ColumnLengthTooBig {
            column: "b".to_string(),
            max: 255
        }
    );
}

#[test]
fn varbinary_limit_ignores_default_charset() {
    // one byte per character regardless of the utf8 default
    check("create table t (b varbinary(65535))").unwrap();
    let err = rejected("create table t (b varbinary(65536))");
    assert_eq!(
        err,
        ValidationError::ColumnLengthTooBig {
            column: "b".to_string(),
            max: 65535
        }
    );
    assert_eq!(err.kind(), ErrorKind::FieldLength);
}

#[test]
fn altered_binary_column_is_checked() {
    let err = rejected("alter table t add column b varbinary(100000)");
    assert!(err.to_string().contains("max = 65535"));
}
