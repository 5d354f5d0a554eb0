//! End-to-end wire format tests.

use tagwire::{decode, encode, Encoder, Tag, Value};

/// A document shaped like the todo-list payload this codec was built to move.
fn sample_document() -> Value {
    let todos = [
        (1.0, "Buy the milk", false),
        (2.0, "Wash the car", true),
        (3.0, "Write some code", false),
    ]
    .into_iter()
    .map(|(id, text, done)| {
        [
            ("id", Value::Number(id)),
            ("text", Value::from(text)),
            ("done", Value::Bool(done)),
        ]
        .into_iter()
        .collect()
    })
    .collect::<Vec<Value>>();

    [
        ("type", Value::from("list")),
        ("payload", Value::Array(todos)),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_document_roundtrip() {
    let document = sample_document();
    let bytes = encode(&document).unwrap();
    assert_eq!(decode(&bytes).unwrap(), document);
}

#[test]
fn test_top_level_framing() {
    let bytes = encode(&sample_document()).unwrap();
    assert_eq!(bytes[0], Tag::Object.byte());

    // The declared payload length accounts for every byte after the header.
    let declared = u32::from_le_bytes(bytes[1..5].try_into().unwrap()) as usize;
    assert_eq!(declared, bytes.len() - 5);
}

#[test]
fn test_decode_foreign_buffer() {
    // {"ok": true, "items": ["a", 2.0]} assembled by hand, as another
    // implementation of the format would emit it.
    let mut bytes = vec![Tag::Object.byte()];
    let mut payload = Vec::new();
    payload.extend_from_slice(&[0x02, 0x02, 0x00, 0x00, 0x00, b'o', b'k', 0x01]);
    payload.extend_from_slice(&[0x02, 0x05, 0x00, 0x00, 0x00]);
    payload.extend_from_slice(b"items");
    payload.push(Tag::Array.byte());
    let mut items = vec![0x02, 0x01, 0x00, 0x00, 0x00, b'a', 0x03];
    items.extend_from_slice(&2.0f64.to_le_bytes());
    payload.extend_from_slice(&(items.len() as u32).to_le_bytes());
    payload.extend_from_slice(&items);
    bytes.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    bytes.extend_from_slice(&payload);

    let expected: Value = [
        ("ok", Value::Bool(true)),
        (
            "items",
            Value::Array(vec![Value::from("a"), Value::Number(2.0)]),
        ),
    ]
    .into_iter()
    .collect();
    assert_eq!(decode(&bytes).unwrap(), expected);
}

#[test]
fn test_deep_nesting() {
    let mut value = Value::Number(42.0);
    for _ in 0..100 {
        value = Value::Array(vec![value]);
    }
    let bytes = encode(&value).unwrap();
    assert_eq!(decode(&bytes).unwrap(), value);
}

#[test]
fn test_encoder_reuse_across_documents() {
    let mut encoder = Encoder::new();
    let documents = [
        sample_document(),
        Value::Array(vec![Value::Null; 32]),
        Value::from("solo"),
    ];
    for document in &documents {
        let bytes = encoder.encode(document).unwrap();
        assert_eq!(&decode(&bytes).unwrap(), document);
    }
}
