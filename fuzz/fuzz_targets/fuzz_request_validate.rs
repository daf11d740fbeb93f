#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any JSON that decodes into a request must validate without panicking,
    // and the outcome must not change between runs.
    if let Ok(req) = serde_json::from_slice::<invoicegen::core::Request>(data) {
        let first = req.validate();
        assert_eq!(first, req.validate());
        if let Err(e) = first {
            assert!(!e.errors.is_empty());
        }
    }
});
