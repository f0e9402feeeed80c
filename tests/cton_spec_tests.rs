//! Byte-exact tests for the concrete seed scenarios named in the core
//! codec specification, plus the boundary behaviors it calls out
//! alongside them.

use cton::{decode, encode, from_str, to_string, CtonMap, CtonValue, DecoderOptions, EncoderOptions};
use num_bigint::BigInt;

fn obj(pairs: Vec<(&str, CtonValue)>) -> CtonValue {
    let mut map = CtonMap::new();
    for (k, v) in pairs {
        map.insert(k.to_string(), v);
    }
    CtonValue::Object(map)
}

fn int(n: i64) -> CtonValue {
    CtonValue::Integer(BigInt::from(n))
}

#[test]
fn seed_1_hikes_document() {
    let value = obj(vec![
        (
            "context",
            obj(vec![
                ("task", CtonValue::from("Our favorite hikes together")),
                ("location", CtonValue::from("Boulder")),
                ("season", CtonValue::from("spring_2025")),
            ]),
        ),
        (
            "friends",
            CtonValue::Array(vec![
                CtonValue::from("ana"),
                CtonValue::from("luis"),
                CtonValue::from("sam"),
            ]),
        ),
        (
            "hikes",
            CtonValue::Array(vec![
                obj(vec![
                    ("id", int(1)),
                    ("name", CtonValue::from("Blue Lake Trail")),
                    ("distanceKm", CtonValue::Decimal(7.5)),
                    ("elevationGain", int(320)),
                    ("companion", CtonValue::from("ana")),
                    ("wasSunny", CtonValue::Bool(true)),
                ]),
                obj(vec![
                    ("id", int(2)),
                    ("name", CtonValue::from("Ridge Overlook")),
                    ("distanceKm", CtonValue::Decimal(9.2)),
                    ("elevationGain", int(540)),
                    ("companion", CtonValue::from("luis")),
                    ("wasSunny", CtonValue::Bool(false)),
                ]),
                obj(vec![
                    ("id", int(3)),
                    ("name", CtonValue::from("Wildflower Loop")),
                    ("distanceKm", CtonValue::Decimal(5.1)),
                    ("elevationGain", int(180)),
                    ("companion", CtonValue::from("sam")),
                    ("wasSunny", CtonValue::Bool(true)),
                ]),
            ]),
        ),
    ]);

    let expected = "context(task=\"Our favorite hikes together\",location=Boulder,season=spring_2025)\n\
friends[3]=ana,luis,sam\n\
hikes[3]{id,name,distanceKm,elevationGain,companion,wasSunny}=1,\"Blue Lake Trail\",7.5,320,ana,true;2,\"Ridge Overlook\",9.2,540,luis,false;3,\"Wildflower Loop\",5.1,180,sam,true";

    let cton = encode(&value, &EncoderOptions::default()).unwrap();
    assert_eq!(cton, expected);
}

#[test]
fn seed_2_numeric_canonicalization() {
    let value = obj(vec![
        ("intish", CtonValue::Decimal(1.0)),
        ("fraction", CtonValue::Decimal(0.5)),
        ("scientific", CtonValue::Decimal(1.2e6)),
        ("negative_zero", CtonValue::Decimal(-0.0)),
    ]);

    let cton = encode(&value, &EncoderOptions::default()).unwrap();
    assert_eq!(
        cton,
        "intish=1\nfraction=0.5\nscientific=1200000\nnegative_zero=0"
    );
}

#[test]
fn seed_3_non_finite_floats_encode_as_null() {
    let value = obj(vec![
        ("pos_inf", CtonValue::Decimal(f64::INFINITY)),
        ("neg_inf", CtonValue::Decimal(f64::NEG_INFINITY)),
        ("not_a_number", CtonValue::Decimal(f64::NAN)),
    ]);

    let cton = encode(&value, &EncoderOptions::default()).unwrap();
    assert_eq!(cton, "pos_inf=null\nneg_inf=null\nnot_a_number=null");
}

#[test]
fn seed_4_numeric_like_strings_are_quoted() {
    let value = obj(vec![
        ("bool_string", CtonValue::from("true")),
        ("numeric_string", CtonValue::from("007")),
        ("float_like", CtonValue::from("1e6")),
        ("negative_digits", CtonValue::from("-5")),
    ]);

    let cton = encode(&value, &EncoderOptions::default()).unwrap();
    assert_eq!(
        cton,
        "bool_string=\"true\"\nnumeric_string=\"007\"\nfloat_like=\"1e6\"\nnegative_digits=\"-5\""
    );
}

#[test]
fn seed_5_boundary_heuristic_splits_adjoining_pairs() {
    let value = decode("a=1b=2c=3", &DecoderOptions::default()).unwrap();
    assert_eq!(
        value,
        obj(vec![("a", int(1)), ("b", int(2)), ("c", int(3))])
    );

    let value = decode("k1=1k2=2k3=3", &DecoderOptions::default()).unwrap();
    assert_eq!(
        value,
        obj(vec![("k1", int(1)), ("k2", int(2)), ("k3", int(3))])
    );
}

#[test]
fn seed_6_boundary_errors() {
    assert!(decode("friends[2]=ana", &DecoderOptions::default()).is_err());
    assert!(decode("rows[1]{id,name}=42", &DecoderOptions::default()).is_err());
    assert!(decode("note=\"unclosed", &DecoderOptions::default()).is_err());
}

#[test]
fn empty_object_and_array_boundaries() {
    let empty_object = CtonValue::Object(CtonMap::new());
    assert_eq!(encode(&empty_object, &EncoderOptions::default()).unwrap(), "()");

    let empty_array = CtonValue::Array(vec![]);
    assert_eq!(encode(&empty_array, &EncoderOptions::default()).unwrap(), "[0]=");
}

#[test]
fn safe_strings_encode_unquoted() {
    let value = CtonValue::from("spring_2025");
    let cton = encode(&value, &EncoderOptions::default()).unwrap();
    assert_eq!(cton, "spring_2025");
}

#[test]
fn reserved_and_numeric_like_strings_are_quoted() {
    for s in ["true", "false", "null", "123", "-5", "1e6", "007"] {
        let value = CtonValue::from(s);
        let cton = encode(&value, &EncoderOptions::default()).unwrap();
        assert_eq!(cton, format!("\"{s}\""));
    }
}

#[test]
fn leading_zero_round_trips_as_a_string() {
    let cton = "numeric_string=\"007\"";
    let decoded: CtonValue = from_str(cton).unwrap();
    let re_encoded = to_string(&decoded).unwrap();
    assert_eq!(cton, re_encoded);
}
