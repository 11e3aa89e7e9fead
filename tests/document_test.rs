//! Integration tests for the document model
//!
//! Duplicate keys, scalar typing, canonical rendering and structural
//! comparison through the public API.

use rest_step::document::{self, Mapping, Node, Scalar};
use serde_json::json;

#[test]
fn test_yaml_and_json_give_the_same_tree() {
    let from_yaml = document::from_yaml_str("index:\n  id: 1\n  body: { f: [a, 2] }\n").unwrap();
    let from_json =
        document::from_json_str(r#"{"index": {"id": 1, "body": {"f": ["a", 2]}}}"#).unwrap();
    assert_eq!(from_yaml, from_json);
}

#[test]
fn test_repeated_keys_form_a_multiset() {
    let node = document::from_yaml_str("body: 1\nbody: 2\nbody: 3\n").unwrap();
    let values: Vec<_> = node
        .as_mapping()
        .unwrap()
        .get_all("body")
        .map(|n| n.as_scalar().unwrap().to_text())
        .collect();
    assert_eq!(values, vec!["1", "2", "3"]);
}

#[test]
fn test_render_repeated_keys_keeps_every_entry() {
    let mut mapping = Mapping::new();
    mapping.push("f", Node::Scalar(Scalar::Int(1)));
    mapping.push("f", Node::Scalar(Scalar::Int(2)));
    let text = document::render(&Node::Mapping(mapping)).unwrap();
    assert_eq!(text, r#"{"f":1,"f":2}"#);
}

#[test]
fn test_render_scalars() {
    let cases = [
        (Node::Scalar(Scalar::Null), "null"),
        (Node::Scalar(Scalar::Bool(true)), "true"),
        (Node::Scalar(Scalar::Int(-7)), "-7"),
        (Node::Scalar(Scalar::Float(1.5)), "1.5"),
        (Node::Scalar(Scalar::String("a\"b".into())), r#""a\"b""#),
        (Node::Sequence(vec![]), "[]"),
        (Node::Mapping(Mapping::new()), "{}"),
    ];
    for (node, expected) in cases {
        assert_eq!(document::render(&node).unwrap(), expected);
    }
}

#[test]
fn test_rendering_round_trips_structurally() {
    let node = document::from_yaml_str(
        "docs:\n  - { _index: test_2, _type: test, _id: 1 }\n  - { _index: test_1, _type: none, _id: 1 }\n",
    )
    .unwrap();
    let rendered = document::render(&node).unwrap();
    assert_eq!(
        document::structural_value(&rendered),
        Some(json!({
            "docs": [
                {"_index": "test_2", "_type": "test", "_id": 1},
                {"_index": "test_1", "_type": "none", "_id": 1}
            ]
        }))
    );
}

#[test]
fn test_mapping_from_iterator() {
    let mapping: Mapping = vec![
        ("a".to_string(), Node::Scalar(Scalar::Int(1))),
        ("b".to_string(), Node::Scalar(Scalar::Int(2))),
    ]
    .into_iter()
    .collect();
    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping.get("b"), Some(&Node::Scalar(Scalar::Int(2))));
    assert!(mapping.get("c").is_none());
}
