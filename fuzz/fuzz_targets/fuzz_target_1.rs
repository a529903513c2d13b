#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate nmea_segment;

use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(line) = str::from_utf8(data) {
        let _ = nmea_segment::parse_sentence(line);
    }
});
