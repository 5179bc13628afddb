#![no_main]

use extbuild::domain::services::parse_tsc_output;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let _ = parse_tsc_output(&text);
});
