use pretty_assertions::assert_eq;
use qail_values::prelude::*;

fn points() -> Vec<(f64, f64)> {
    vec![(10.1, 20.2), (11.1, 21.2), (12.1, 22.2)]
}

#[test]
fn test_bulk_insert_statement() {
    let mut b = ValuesBuilder::new();
    b.add(row![1, "foo"]);
    b.add(row![2, "bar"]);

    let sql = b.statement("INSERT INTO items (id, name) VALUES %s");
    assert_eq!(sql, "INSERT INTO items (id, name) VALUES ($1,$2),\n($3,$4)");
    assert_eq!(
        b.args(),
        &[
            Value::Int(1),
            Value::String("foo".to_string()),
            Value::Int(2),
            Value::String("bar".to_string()),
        ]
    );
}

#[test]
fn test_expression_numbering_continues() {
    let mut b: ValuesBuilder = ValuesBuilder::with_config(
        ValuesConfig::new().with_expected_blocks(points().len()),
    );
    for (x, y) in points() {
        b.add([Expression::new("ST_SetSRID(ST_Point(%s, %s)", [x, y])]);
    }

    assert_eq!(
        b.blocks(),
        &[
            "(ST_SetSRID(ST_Point($1, $2))".to_string(),
            "(ST_SetSRID(ST_Point($3, $4))".to_string(),
            "(ST_SetSRID(ST_Point($5, $6))".to_string(),
        ]
    );
    let expected: Vec<Value> = points()
        .into_iter()
        .flat_map(|(x, y)| [Value::Float(x), Value::Float(y)])
        .collect();
    assert_eq!(b.args(), expected.as_slice());
}

#[test]
fn test_numbering_counts_leaves_not_top_level_args() {
    let mut b = ValuesBuilder::new();
    let point: Expression = Expression::new("ST_Point(%s, %s)", [1.0, 2.0]);
    let located: Expression = Expression::new("ST_SetSRID(%s, %s)", row![point, 4326]);

    b.add(row!["a", located.clone()]);
    assert_eq!(b.next_placeholder(), 5);

    b.add(row!["b", located]);
    assert_eq!(b.next_placeholder(), 9);
    assert_eq!(b.args().len(), 8);
    assert_eq!(
        b.values(),
        "($1,ST_SetSRID(ST_Point($2, $3), $4)),\n($5,ST_SetSRID(ST_Point($6, $7), $8))"
    );
}

#[test]
fn test_reset_matches_fresh_builder() {
    let config = ValuesConfig::new()
        .with_template("(%s, DEFAULT)")
        .with_placeholder_format(PlaceholderFormat::QuestionMark)
        .with_expected_blocks(4);

    let mut reused: ValuesBuilder = ValuesBuilder::with_config(config.clone());
    reused.add(row!["stale", 0]);
    reused.add(row!["stale", 1]);
    reused.reset();

    let mut fresh: ValuesBuilder = ValuesBuilder::with_config(config);

    for b in [&mut reused, &mut fresh] {
        b.add(row!["x", Expression::new("upper(%s)", ["y"])]);
        b.add(row!["z", 3]);
    }

    assert_eq!(reused.values(), fresh.values());
    assert_eq!(reused.args(), fresh.args());
    assert_eq!(reused.next_placeholder(), fresh.next_placeholder());
    assert_eq!(fresh.values(), "(?,upper(?), DEFAULT),\n(?,?, DEFAULT)");
}

#[test]
fn test_block_count_and_separators() {
    let mut b = ValuesBuilder::new();
    for i in 0..5 {
        b.add([i]);
    }
    let values = b.values();
    assert_eq!(values.matches(",\n").count(), 4);
    assert!(!values.starts_with(",\n"));
    assert!(!values.ends_with(",\n"));
    assert_eq!(values.split(",\n").count(), b.len());
}

#[test]
fn test_empty_adds_leave_state_unchanged() {
    let mut b = ValuesBuilder::new();
    b.add(row![1, 2]);
    let before = (b.values(), b.args().to_vec(), b.next_placeholder());

    b.add(Vec::<Arg>::new());

    assert_eq!((b.values(), b.args().to_vec(), b.next_placeholder()), before);
}

#[test]
fn test_config_from_toml() {
    let config = ValuesConfig::from_toml_str(
        r#"
        placeholder_format = "question-mark"
        expected_blocks = 2
        "#,
    )
    .unwrap();

    let mut b: ValuesBuilder = ValuesBuilder::with_config(config);
    b.add([1, 2]);
    b.add([3, 4]);
    assert_eq!(b.values(), "(?,?),\n(?,?)");
}

#[test]
fn test_config_with_invalid_template() {
    let config = ValuesConfig::from_toml_str(r#"template = "VALUES""#).unwrap();
    let mut b: ValuesBuilder = ValuesBuilder::with_config(config);
    b.add([1]);
    assert_eq!(b.values(), "($1)");
}

#[test]
fn test_null_values_keep_positions() {
    let mut b = ValuesBuilder::new();
    b.add(row![None::<&str>, Some("x"), None::<i64>]);
    assert_eq!(b.values(), "($1,$2,$3)");
    assert_eq!(
        b.args(),
        &[Value::Null, Value::String("x".to_string()), Value::Null]
    );
}
