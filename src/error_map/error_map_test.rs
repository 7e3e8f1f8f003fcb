use super::{Code, ErrorMap, ErrorMapError, ErrorMapStore};

const SAMPLE: &str = "{\n  \"0\": \"a %s\",\n  \"1\": \"b\",\n  \"5\": \"c \\\"quoted\\\" é\"\n}\n";

#[test]
fn parses_and_keeps_file_order() {
    let map = ErrorMap::parse("{\"3\": \"x\", \"1\": \"y\"}").unwrap();
    let entries: Vec<(u64, &str)> = map.iter().map(|(c, t)| (c.value(), t)).collect();
    assert_eq!(entries, vec![(3, "x"), (1, "y")]);
    assert_eq!(map.max_code(), Some(Code::new(3)));
}

#[test]
fn rejects_non_canonical_codes() {
    for key in ["", "-1", "+1", "01", "1.5", "abc", " 1", "18446744073709551616"] {
        assert!(
            matches!(key.parse::<Code>(), Err(ErrorMapError::InvalidCode { .. })),
            "{key:?} should be rejected"
        );
    }
    assert_eq!("0".parse::<Code>().unwrap(), Code::ZERO);
    assert_eq!("42".parse::<Code>().unwrap(), Code::new(42));
}

#[test]
fn load_falls_back_to_empty_on_corrupt_input() {
    for raw in [
        "",
        "not json",
        "[\"a\"]",
        "{\"a\": \"x\"}",
        "{\"1\": 2}",
        "{\"1\": null}",
        "{\"1\": \"x\"",
        "{\"1\": \"x\", \"1\": \"y\"}",
    ] {
        assert!(ErrorMap::load(raw).is_empty(), "{raw:?} should load as empty");
    }
}

#[test]
fn empty_map_allocates_zero_first() {
    let mut store = ErrorMapStore::new();
    assert_eq!(store.lookup_or_allocate("first").unwrap(), Code::new(0));
    assert_eq!(store.lookup_or_allocate("second").unwrap(), Code::new(1));
    assert_eq!(store.lookup_or_allocate("first").unwrap(), Code::new(0));
    assert_eq!(store.len(), 2);
}

#[test]
fn allocation_continues_after_highest_code() {
    let map = ErrorMap::parse("{\"0\": \"a\", \"7\": \"b\", \"3\": \"c\"}").unwrap();
    let mut store = ErrorMapStore::build_index(map).unwrap();
    assert_eq!(store.next_code(), Some(Code::new(8)));
    assert_eq!(store.lookup_or_allocate("b").unwrap(), Code::new(7));
    assert_eq!(store.lookup_or_allocate("new").unwrap(), Code::new(8));
    assert_eq!(store.lookup_or_allocate("newer").unwrap(), Code::new(9));
}

#[test]
fn strict_index_rejects_duplicate_templates() {
    let map = ErrorMap::parse("{\"0\": \"same\", \"1\": \"other\", \"2\": \"same\"}").unwrap();
    match ErrorMapStore::build_index(map) {
        Err(ErrorMapError::DuplicateTemplate {
            template,
            first,
            second,
        }) => {
            assert_eq!(template, "same");
            assert_eq!(first, Code::new(0));
            assert_eq!(second, Code::new(2));
        }
        other => panic!("expected duplicate template error, got {other:?}"),
    }
}

#[test]
fn lenient_index_uses_first_code_and_keeps_all_entries() {
    let raw = "{\n  \"0\": \"same\",\n  \"1\": \"same\"\n}\n";
    let mut store = ErrorMapStore::build_index_lenient(ErrorMap::parse(raw).unwrap());
    assert_eq!(store.lookup_or_allocate("same").unwrap(), Code::new(0));
    assert_eq!(store.next_code(), Some(Code::new(2)));
    assert_eq!(store.serialize().unwrap(), raw);
}

#[test]
fn serializes_with_two_space_indent_and_trailing_newline() {
    let mut store = ErrorMapStore::new();
    store.lookup_or_allocate("Expected %s.").unwrap();
    store.lookup_or_allocate("Line\nbreak").unwrap();
    assert_eq!(
        store.serialize().unwrap(),
        "{\n  \"0\": \"Expected %s.\",\n  \"1\": \"Line\\nbreak\"\n}\n"
    );
    assert_eq!(ErrorMap::new().to_json().unwrap(), "{}\n");
}

#[test]
fn unchanged_map_round_trips_byte_for_byte() {
    let store = ErrorMapStore::build_index(ErrorMap::parse(SAMPLE).unwrap()).unwrap();
    assert_eq!(store.serialize().unwrap(), SAMPLE);
}

#[test]
fn new_entries_are_appended_after_existing_ones() {
    let mut store = ErrorMapStore::build_index(ErrorMap::parse(SAMPLE).unwrap()).unwrap();
    store.lookup_or_allocate("d").unwrap();
    let codes: Vec<u64> = store.map().iter().map(|(c, _)| c.value()).collect();
    assert_eq!(codes, vec![0, 1, 5, 6]);
}

#[test]
fn duplicate_code_is_rejected() {
    let err = ErrorMap::parse("{\"2\": \"a\", \"2\": \"b\"}").unwrap_err();
    assert!(matches!(err, ErrorMapError::DuplicateCode { code } if code == Code::new(2)));
}

#[test]
fn codes_above_u32_are_valid() {
    let map = ErrorMap::parse("{\"4294967295\": \"a\"}").unwrap();
    let mut store = ErrorMapStore::build_index_lenient(map);
    assert_eq!(store.lookup_or_allocate("b").unwrap(), Code::new(4_294_967_296));
}

#[test]
fn exhausted_code_space_fails_instead_of_reusing_codes() {
    let raw = format!("{{\"{}\": \"last\"}}", u64::MAX);
    let mut store = ErrorMapStore::build_index(ErrorMap::parse(&raw).unwrap()).unwrap();
    assert_eq!(store.next_code(), None);
    assert_eq!(store.lookup_or_allocate("last").unwrap(), Code::new(u64::MAX));
    match store.lookup_or_allocate("new") {
        Err(ErrorMapError::CodesExhausted { template, last }) => {
            assert_eq!(template, "new");
            assert_eq!(last, Code::new(u64::MAX));
        }
        other => panic!("expected exhausted code space, got {other:?}"),
    }
    assert_eq!(store.len(), 1);
}
