//! Integration tests for variables, tables and their JSON form.

use std::fs;

use docbind::json::{read_document, read_variables, to_json, write_document, JsonFormat};
use docbind::{
    DocBind, Document, Error, ImageSource, Key, ObjectVariable, Paragraph, TableVariable,
    TextVariable, Variable, VariableType, Variables,
};
use serde_json::json;
use tempfile::TempDir;

fn order(id: u32, product: &str, qty: u32) -> Variable {
    Variable::Object(ObjectVariable::from_json(
        "order",
        &json!({"id": id, "product": product, "qty": qty}),
    ))
}

#[test]
fn test_every_declared_key_resolves() {
    let mut items = TableVariable::new();
    items.add_row(vec![TextVariable::new("sku", "P-1").into()]).unwrap();
    let mut more_items = TableVariable::new();
    more_items.add_row(vec![TextVariable::new("sku", "I-9").into()]).unwrap();

    let customer = |city: &str| {
        Variable::Object(ObjectVariable::from_json(
            "order",
            &json!({"id": 7, "customer": {"city": city}}),
        ))
    };

    let mut table = TableVariable::new();
    table
        .add_row(vec![
            TextVariable::new("title", "A").into(),
            TextVariable::new("title", "B").into(),
        ])
        .unwrap();
    table.add_row(vec![customer("Oslo"), customer("Lima")]).unwrap();
    table
        .add_row(vec![Variable::Table(items), Variable::Table(more_items)])
        .unwrap();

    let keys = table.keys();
    let mut names: Vec<&str> = keys.iter().map(Key::name).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["city", "customer", "id", "order", "sku", "title"]);

    for key in &keys {
        assert!(table.contains_key(key.name()), "{} not found by name", key.name());
        let value = table.get_variable(key, 0);
        assert!(value.is_some(), "{} has no value at row 0", key.name());
        assert_eq!(value.and_then(Variable::key).as_ref(), Some(key));
    }
}

#[test]
fn test_order_table_columns() {
    let mut table = TableVariable::new();
    table
        .add_row(vec![order(1, "pen", 3), order(2, "ink", 1)])
        .unwrap();
    table
        .add_row(vec![
            TextVariable::new("note", "urgent").into(),
            TextVariable::new("note", "").into(),
        ])
        .unwrap();

    assert_eq!(table.number_of_rows(), 2);
    // raw orders, id, product, qty, note
    assert_eq!(table.columns().len(), 5);

    let product = Key::new("product", VariableType::Object);
    let second = table.get_variable(&product, 1).and_then(Variable::as_object);
    assert_eq!(second.map(ObjectVariable::text), Some("ink".to_string()));

    let note = table.get_variable(&Key::new("note", VariableType::Text), 0);
    assert_eq!(note.and_then(Variable::as_text), Some("urgent"));
}

#[test]
fn test_row_count_is_fixed_by_first_row() {
    let mut table = TableVariable::new();
    table.add_row(vec![order(1, "pen", 3)]).unwrap();

    let result = table.add_row(vec![
        TextVariable::new("note", "a").into(),
        TextVariable::new("note", "b").into(),
    ]);
    assert!(matches!(
        result,
        Err(Error::IncorrectNumberOfRows {
            expected: 1,
            actual: 2
        })
    ));
    assert_eq!(
        result.unwrap_err().to_string(),
        "Incorrect number of rows. Expected 1 but was 2"
    );
}

#[test]
fn test_nested_table_lookup() {
    let mut inner = TableVariable::new();
    inner
        .add_row(vec![
            TextVariable::new("line", "first").into(),
            TextVariable::new("line", "second").into(),
        ])
        .unwrap();

    let mut outer = TableVariable::new();
    outer.add_row(vec![Variable::Table(inner)]).unwrap();

    assert!(outer.contains_key("line"));
    let line = outer.get_variable(&Key::new("line", VariableType::Text), 1);
    assert_eq!(line.and_then(Variable::as_text), Some("second"));

    let mut variables = Variables::new();
    variables.add_table(outer);
    let found = variables.find(&Key::new("line", VariableType::Text));
    assert_eq!(found.and_then(Variable::as_text), Some("first"));
}

#[test]
fn test_variables_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("variables.json");
    fs::write(
        &path,
        r#"[
            {"type": "text", "key": "firstName", "value": "Ann"},
            {"type": "image", "key": "logo", "source": {"file": "logo.png"}, "width": 120},
            {"type": "object", "key": "address", "value": {"city": "Oslo"}},
            {"type": "table", "rows": [
                [
                    {"type": "object", "key": "item", "value": {"name": "pen", "price": 2}},
                    {"type": "object", "key": "item", "value": {"name": "ink", "price": 7}}
                ]
            ]}
        ]"#,
    )
    .unwrap();

    let variables = read_variables(&path).unwrap();
    assert_eq!(variables.len(), 4);

    let keys = DocBind::new().keys(&variables);
    assert!(keys.contains_key(&Key::new("firstName", VariableType::Text)));
    assert!(keys.contains_key(&Key::new("logo", VariableType::Image)));
    assert!(keys.contains_key(&Key::new("address", VariableType::Object)));
    assert!(keys.contains_key(&Key::new("item", VariableType::Object)));
    assert!(keys.contains_key(&Key::new("price", VariableType::Object)));
    assert!(!keys.contains_key_by_name("city"));

    let logo = variables
        .iter()
        .find_map(|v| match v {
            Variable::Image(image) => Some(image),
            _ => None,
        })
        .unwrap();
    assert_eq!(logo.width, Some(120));
    assert!(matches!(logo.source(), ImageSource::File(_)));
}

#[test]
fn test_invalid_table_in_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("variables.json");
    fs::write(
        &path,
        r#"[{"type": "table", "rows": [[
            {"type": "text", "key": "a", "value": "1"},
            {"type": "text", "key": "b", "value": "2"}
        ]]}]"#,
    )
    .unwrap();

    let err = read_variables(&path).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert!(err.to_string().contains("Expected name of variable"));
}

#[test]
fn test_clean_document_file() {
    let dir = TempDir::new().unwrap();
    let doc_path = dir.path().join("template.json");

    let mut doc = Document::new();
    doc.add_paragraph(Paragraph::with_text("Hello ${FirstName}"));
    write_document(&doc, &doc_path, JsonFormat::Compact).unwrap();

    let mut variables = Variables::new();
    variables.add_text("firstName", "Ann");

    let mut loaded = read_document(&doc_path).unwrap();
    let report = DocBind::new().clean(&mut loaded, &variables);
    assert_eq!(report.runs_rewritten, 1);

    let json = to_json(&loaded, JsonFormat::Compact).unwrap();
    assert!(json.contains("${firstName}"));
    assert!(!json.contains("${FirstName}"));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = read_variables(dir.path().join("absent.json"));
    assert!(matches!(result, Err(Error::Io(_))));
}
