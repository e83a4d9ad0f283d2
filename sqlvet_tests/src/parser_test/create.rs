use super::*;

#[test]
fn parse_create_basic() {
    let stmt = parse("create table users (id int primary key, name varchar(20) not null)").unwrap();

    match stmt {
        Statement::CreateTable(ct) => {
            assert_eq!(ct.table.name, "users");
            assert!(ct.table.schema.is_none());
            assert_eq!(ct.columns.len(), 2);
            assert_eq!(ct.columns[0].name, "id");
            assert_eq!(ct.columns[0].field_type.kind, TypeKind::Int);
            assert_eq!(ct.columns[0].options, vec![ColumnOption::PrimaryKey]);
            assert_eq!(ct.columns[1].field_type.kind, TypeKind::VarChar);
            assert_eq!(ct.columns[1].field_type.length, Some(20));
            assert_eq!(ct.columns[1].options, vec![ColumnOption::NotNull]);
        }
        _ => panic!("Expected CreateTable statement"),
    }
}

#[test]
fn parse_create_with_schema_and_if_not_exists() {
    let stmt = parse("CREATE TABLE IF NOT EXISTS app.`order` (id bigint unsigned);").unwrap();

    match stmt {
        Statement::CreateTable(ct) => {
            assert!(ct.if_not_exists);
            assert_eq!(ct.table.schema.as_deref(), Some("app"));
            assert_eq!(ct.table.name, "order");
            assert!(ct.columns[0].field_type.unsigned);
        }
        _ => panic!("Expected CreateTable statement"),
    }
}

#[test]
fn parse_create_type_modifiers() {
    let stmt = parse(
        "create table t (d decimal(10,2), s varchar(10) character set latin1 collate latin1_bin, e enum('a', 'b'), dt datetime(6), x double precision)",
    )
    .unwrap();

    match stmt {
        Statement::CreateTable(ct) => {
            let d = &ct.columns[0].field_type;
            assert_eq!((d.length, d.decimal), (Some(10), Some(2)));
            let s = &ct.columns[1].field_type;
            assert_eq!(s.charset.as_deref(), Some("latin1"));
            assert_eq!(s.collate.as_deref(), Some("latin1_bin"));
            assert_eq!(ct.columns[2].field_type.elems, vec!["a".to_string(), "b".to_string()]);
            let dt = &ct.columns[3].field_type;
            assert_eq!(dt.length, None);
            assert_eq!(dt.decimal, Some(6));
            assert_eq!(ct.columns[4].field_type.kind, TypeKind::Double);
        }
        _ => panic!("Expected CreateTable statement"),
    }
}

#[test]
fn parse_create_text_maps_to_blob() {
    let stmt = parse("create table t (body text, big longtext)").unwrap();
    match stmt {
        Statement::CreateTable(ct) => {
            assert_eq!(ct.columns[0].field_type.kind, TypeKind::Blob);
            assert_eq!(ct.columns[1].field_type.kind, TypeKind::LongBlob);
        }
        _ => panic!("Expected CreateTable statement"),
    }
}

#[test]
fn parse_create_column_options_keep_order() {
    let stmt = parse(
        "create table t (id int default -1 auto_increment unique key comment 'pk', ts timestamp default current_timestamp on update current_timestamp)",
    )
    .unwrap();

    match stmt {
        Statement::CreateTable(ct) => {
            assert_eq!(
                ct.columns[0].options,
                vec![
                    ColumnOption::DefaultValue(Expr::Literal(Value::Int(-1))),
                    ColumnOption::AutoIncrement,
                    ColumnOption::UniqueKey,
                    ColumnOption::Comment("pk".to_string()),
                ]
            );
            assert!(matches!(
                &ct.columns[1].options[0],
                ColumnOption::DefaultValue(Expr::FuncCall(f)) if f.name == "current_timestamp"
            ));
            assert!(matches!(&ct.columns[1].options[1], ColumnOption::OnUpdate(_)));
        }
        _ => panic!("Expected CreateTable statement"),
    }
}

#[test]
fn parse_create_table_constraints() {
    let stmt = parse(
        "create table t (a int, b int, c text, primary key (a, b), unique key uk (b), index idx (c(10) desc), fulltext (c), constraint fk foreign key (b) references p (id) on delete cascade)",
    )
    .unwrap();

    match stmt {
        Statement::CreateTable(ct) => {
            assert_eq!(ct.columns.len(), 3);
            assert_eq!(ct.constraints.len(), 5);
            assert_eq!(ct.constraints[0].kind, ConstraintKind::PrimaryKey);
            assert_eq!(ct.constraints[0].keys.len(), 2);
            assert_eq!(ct.constraints[1].kind, ConstraintKind::UniqueKey);
            assert_eq!(ct.constraints[1].name.as_deref(), Some("uk"));
            assert_eq!(ct.constraints[2].kind, ConstraintKind::Index);
            assert_eq!(ct.constraints[2].keys[0].length, Some(10));
            assert_eq!(ct.constraints[3].kind, ConstraintKind::FullText);
            assert_eq!(ct.constraints[4].name.as_deref(), Some("fk"));
            match &ct.constraints[4].kind {
                ConstraintKind::ForeignKey {
                    ref_table,
                    ref_columns,
                    ..
                } => {
                    assert_eq!(ref_table.name, "p");
                    assert_eq!(ref_columns, &vec!["id".to_string()]);
                }
                other => panic!("Expected foreign key, got {other}"),
            }
        }
        _ => panic!("Expected CreateTable statement"),
    }
}

#[test]
fn parse_create_table_options() {
    let stmt = parse(
        "create table logs (ts datetime primary key) engine = Dashbase default charset=utf8mb4, auto_increment 5 dashbase_conn='api=http://h:1;kafka=k:9092' comment 'events'",
    )
    .unwrap();

    match stmt {
        Statement::CreateTable(ct) => {
            assert_eq!(ct.engine(), Some("Dashbase"));
            assert_eq!(ct.dashbase_connection(), Some("api=http://h:1;kafka=k:9092"));
            assert_eq!(
                ct.options,
                vec![
                    TableOption::Engine("Dashbase".to_string()),
                    TableOption::Charset("utf8mb4".to_string()),
                    TableOption::AutoIncrement(5),
                    TableOption::DashbaseConnection("api=http://h:1;kafka=k:9092".to_string()),
                    TableOption::Comment("events".to_string()),
                ]
            );
        }
        _ => panic!("Expected CreateTable statement"),
    }
}

#[test]
fn parse_create_index() {
    let stmt = parse("create unique index idx_ab on t (a, b)").unwrap();
    match stmt {
        Statement::CreateIndex(ci) => {
            assert!(ci.unique);
            assert_eq!(ci.index_name, "idx_ab");
            assert_eq!(ci.table.name, "t");
            assert_eq!(ci.columns.len(), 2);
        }
        _ => panic!("Expected CreateIndex statement"),
    }
}

#[test]
fn parse_drop_table_list() {
    let stmt = parse("drop table if exists a, b").unwrap();
    match stmt {
        Statement::DropTable(dt) => {
            assert!(dt.if_exists);
            assert_eq!(dt.tables.len(), 2);
        }
        _ => panic!("Expected DropTable statement"),
    }
}

#[test]
fn create_rejects_unknown_datatype() {
    let err = parse("create table users (id uuid)").unwrap_err();
    assert!(err.to_lowercase().contains("unknown type"));
}

#[test]
fn create_requires_table_keyword() {
    let err = parse("create users (id int)").unwrap_err();
    assert!(err.to_lowercase().contains("usage: create"));
}

#[test]
fn create_requires_parentheses() {
    let err = parse("create table users id int").unwrap_err();
    assert!(err.to_lowercase().contains("parenthesized"));
}

#[test]
fn create_requires_commas_between_columns() {
    let err = parse("create table users (id int name text)").unwrap_err();
    assert!(err.to_lowercase().contains("unknown column option"));
}

#[test]
fn create_trailing_comma_errors() {
    let err = parse("create table users (id int,)").unwrap_err();
    assert!(err.to_lowercase().contains("trailing comma"));
}

#[test]
fn create_varchar_requires_length() {
    let err = parse("create table users (name varchar)").unwrap_err();
    assert!(err.to_lowercase().contains("use varchar(n)"));
}

#[test]
fn create_empty_key_list_errors() {
    let err = parse("create table t (a int, index ())").unwrap_err();
    assert!(err.to_lowercase().contains("cannot be empty"));
}

#[test]
fn create_bad_foreign_key_action_errors() {
    let err =
        parse("create table t (a int, foreign key (a) references p (id) on delete explode)").unwrap_err();
    assert!(err.contains("Unknown ON DELETE action 'explode'"));
}
