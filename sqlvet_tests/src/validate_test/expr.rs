use super::*;

#[test]
fn plain_aggregates_pass() {
    check("select count(*), max(a), min(b) from t group by c having sum(d) > 10").unwrap();
}

#[test]
fn nested_aggregate_rejected() {
    let err = rejected("select sum(count(a)) from t");
    assert_eq!(err, ValidationError::InvalidGroupFuncUse);
    assert_eq!(err.kind(), ErrorKind::AggregateNesting);
    assert_eq!(err.to_string(), "Invalid use of group function");
}

#[test]
fn aggregate_nested_inside_expression_rejected() {
    let err = rejected("select avg(a + max(b) * 2) from t");
    assert_eq!(err, ValidationError::InvalidGroupFuncUse);
}

#[test]
fn aggregate_inside_function_inside_aggregate_rejected() {
    let err = rejected("select max(abs(min(a))) from t");
    assert_eq!(err, ValidationError::InvalidGroupFuncUse);
}

#[test]
fn aggregate_flag_resets_between_siblings() {
    check("select sum(a) + sum(b), count(c) from t").unwrap();
    check("select * from t where a > 1 having count(a) > max(b)").unwrap();
}

#[test]
fn nested_aggregate_in_dml_rejected() {
    let err = rejected("update t set a = 1 where b = sum(max(c))");
    assert_eq!(err, ValidationError::InvalidGroupFuncUse);
}

#[test]
fn param_marker_outside_prepare_rejected() {
    let err = rejected("select * from t where a = ?");
    assert_eq!(err, ValidationError::UnexpectedParamMarker);
    assert_eq!(err.kind(), ErrorKind::ParameterContext);
    assert_eq!(err.to_string(), "syntax error, unexpected '?'");
}

#[test]
fn param_marker_in_prepare_passes() {
    check_prepare("select * from t where a = ? and b in (?, ?)").unwrap();
    check_prepare("insert into t values (?, ?)").unwrap();
    check_prepare("update t set a = ? where id = ?").unwrap();
    check_prepare("delete from t where id = ? limit ?").unwrap();
}

#[test]
fn param_marker_in_limit_outside_prepare_rejected() {
    let err = rejected("select * from t limit ?");
    assert_eq!(err, ValidationError::UnexpectedParamMarker);
}

#[test]
fn param_marker_in_column_default_rejected() {
    let err = rejected("create table t (a int default ?)");
    assert_eq!(err, ValidationError::UnexpectedParamMarker);
}

#[test]
fn nested_aggregate_reported_before_later_param_marker() {
    let err = rejected("select sum(count(a)) from t where b = ?");
    assert_eq!(err, ValidationError::InvalidGroupFuncUse);
}
