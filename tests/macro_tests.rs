use cton::{cton, CtonValue};
use num_bigint::BigInt;

#[test]
fn test_cton_macro_null() {
    let value = cton!(null);
    assert_eq!(value, CtonValue::Null);
}

#[test]
fn test_cton_macro_booleans() {
    let true_val = cton!(true);
    assert_eq!(true_val, CtonValue::Bool(true));

    let false_val = cton!(false);
    assert_eq!(false_val, CtonValue::Bool(false));
}

#[test]
fn test_cton_macro_numbers() {
    let int_val = cton!(42);
    assert_eq!(int_val, CtonValue::Integer(BigInt::from(42)));

    let float_val = cton!(3.5);
    assert_eq!(float_val, CtonValue::Decimal(3.5));

    let negative_val = cton!(-123);
    assert_eq!(negative_val, CtonValue::Integer(BigInt::from(-123)));
}

#[test]
fn test_cton_macro_strings() {
    let string_val = cton!("hello world");
    assert_eq!(string_val, CtonValue::String("hello world".to_string()));

    let empty_string = cton!("");
    assert_eq!(empty_string, CtonValue::String(String::new()));
}

#[test]
fn test_cton_macro_empty_array() {
    let value = cton!([]);
    assert_eq!(value, CtonValue::Array(vec![]));
}

#[test]
fn test_cton_macro_array_of_scalars() {
    let value = cton!([1, 2, 3]);
    assert_eq!(
        value,
        CtonValue::Array(vec![
            CtonValue::Integer(BigInt::from(1)),
            CtonValue::Integer(BigInt::from(2)),
            CtonValue::Integer(BigInt::from(3)),
        ])
    );
}

#[test]
fn test_cton_macro_nested_array() {
    let value = cton!([[1, 2], [3, 4]]);
    assert_eq!(
        value,
        CtonValue::Array(vec![
            CtonValue::Array(vec![
                CtonValue::Integer(BigInt::from(1)),
                CtonValue::Integer(BigInt::from(2)),
            ]),
            CtonValue::Array(vec![
                CtonValue::Integer(BigInt::from(3)),
                CtonValue::Integer(BigInt::from(4)),
            ]),
        ])
    );
}

#[test]
fn test_cton_macro_empty_object() {
    let value = cton!({});
    match value {
        CtonValue::Object(map) => assert!(map.is_empty()),
        _ => panic!("expected object"),
    }
}

#[test]
fn test_cton_macro_object() {
    let value = cton!({
        "name": "Alice",
        "age": 30,
        "active": true,
    });

    match value {
        CtonValue::Object(map) => {
            assert_eq!(map.get("name"), Some(&CtonValue::String("Alice".to_string())));
            assert_eq!(map.get("age"), Some(&CtonValue::Integer(BigInt::from(30))));
            assert_eq!(map.get("active"), Some(&CtonValue::Bool(true)));
        }
        _ => panic!("expected object"),
    }
}

#[test]
fn test_cton_macro_nested_object_with_array() {
    let value = cton!({
        "name": "Alice",
        "tags": ["admin", "developer"]
    });

    match value {
        CtonValue::Object(map) => {
            match map.get("tags") {
                Some(CtonValue::Array(tags)) => {
                    assert_eq!(tags.len(), 2);
                    assert_eq!(tags[0], CtonValue::String("admin".to_string()));
                    assert_eq!(tags[1], CtonValue::String("developer".to_string()));
                }
                _ => panic!("expected tags array"),
            }
        }
        _ => panic!("expected object"),
    }
}

#[test]
fn test_cton_macro_fallback_expression() {
    let name = "computed".to_string();
    let value = cton!(name);
    assert_eq!(value, CtonValue::String("computed".to_string()));
}

#[test]
fn test_cton_macro_round_trips_through_encoder() {
    let value = cton!({
        "id": 1,
        "label": "widget"
    });

    let encoded = cton::to_string(&value).unwrap();
    let decoded: CtonValue = cton::from_str(&encoded).unwrap();
    assert_eq!(value, decoded);
}
