#![no_main]
extern crate libfuzzer_sys;
extern crate dbwire_parser;
use dbwire_parser::temporal::legacy::*;
use dbwire_parser::temporal::*;
#[export_name="rust_fuzzer_test_input"]
pub extern fn go(data: &[u8]) {
    // when both decoders accept the input, they must agree
    let fast = parse_datetime(data, ZeroDatePolicy::ToSentinel);
    let legacy = legacy_parse_datetime(data, ZeroDatePolicy::ToSentinel);
    if let (Ok(a), Ok(b)) = (&fast, &legacy) {
        assert_eq!(a, b);
    }
    let fast = parse_duration(data);
    let legacy = legacy_parse_duration(data);
    if let (Ok(a), Ok(b)) = (&fast, &legacy) {
        assert_eq!(a, b);
    }
}
