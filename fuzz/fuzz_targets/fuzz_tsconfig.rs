#![no_main]

use std::path::Path;

use extbuild::domain::services::{parse_project_config, strip_jsonc};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Stripping keeps byte offsets, so diagnostics point into the original text
        assert_eq!(strip_jsonc(content).len(), content.len());
        let _ = parse_project_config(Path::new("tsconfig.json"), content);
    }
});
