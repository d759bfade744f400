#![no_main]

use libfuzzer_sys::fuzz_target;
use nullguard_core::{nesting_depth, NullFieldValidator};

fuzz_target!(|data: &[u8]| {
    let Ok(doc) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    let validator = NullFieldValidator::new(["a", "[0]", ""]);
    let result = validator.validate(&doc);
    assert_eq!(result, validator.validate(&doc));
    for path in result.invalid_fields() {
        assert!(!validator.optional_fields().contains(path));
    }
    let _ = nesting_depth(&doc);
});
