#![no_main]

use invoicegen::core::Format;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for format in Format::ALL {
            let _ = format.matches(s);
        }
        let _ = s.parse::<Format>();
    }
});
