#![no_main]
use finwell::WeightTable;
use libfuzzer_sys::fuzz_target;

/// Fuzz YAML question bank loading and validation.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = WeightTable::from_yaml_str(s);
    }
});
