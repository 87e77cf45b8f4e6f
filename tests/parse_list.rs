use cellplot::{parse_list, Value};

#[test]
fn empty_input_is_empty() {
    assert!(parse_list("").is_empty());
    assert!(parse_list(" , ,").is_empty());
}

#[test]
fn numbers_are_parsed() {
    assert_eq!(
        parse_list("1, 2, 3"),
        vec![Value::Number(1.0), Value::Number(2.0), Value::Number(3.0)]
    );
}

#[test]
fn trailing_comma_is_ignored() {
    assert_eq!(parse_list("1, 2, 3, "), parse_list("1, 2, 3"));
}

#[test]
fn text_is_kept_verbatim() {
    assert_eq!(parse_list("A, B"), vec![Value::from("A"), Value::from("B")]);
}

#[test]
fn other_separators_stay_in_one_token() {
    assert_eq!(parse_list("1;2;3"), vec![Value::from("1;2;3")]);
    assert_eq!(parse_list("1 / 2 / 3"), vec![Value::from("1 / 2 / 3")]);
}

#[test]
fn float_syntax_is_accepted() {
    assert_eq!(
        parse_list("-1.5, 2e3, .5"),
        vec![Value::Number(-1.5), Value::Number(2000.0), Value::Number(0.5)]
    );
}
