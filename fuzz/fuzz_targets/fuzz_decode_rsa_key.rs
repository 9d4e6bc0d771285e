#![no_main]
extern crate libfuzzer_sys;
extern crate dbwire_parser;
#[export_name="rust_fuzzer_test_input"]
pub extern fn go(data: &[u8]) {
    let _ = dbwire_parser::rsa::decode_spki_der(data);
    let _ = dbwire_parser::rsa::decode_pkcs1_der(data);
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = dbwire_parser::decode_rsa_public_key(text);
    }
}
