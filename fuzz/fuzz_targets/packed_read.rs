#![no_main]

use libfuzzer_sys::fuzz_target;
use packed::{Format, Width};

fuzz_target!(|data: &[u8]| {
    for format in [Format::Packed, Format::Sorted] {
        for width in [Width::Int, Width::Long] {
            let mut offset = 0usize;
            while offset < data.len() {
                let Ok(value) = packed::read(format, width, data, offset) else {
                    offset += 1;
                    continue;
                };

                // A successful read implies a consistent, in-bounds length.
                let len = packed::read_len(format, width, data, offset).unwrap();
                assert!(offset + len <= data.len());

                // Non-minimal input may be longer than the canonical encoding.
                let canonical = packed::write_len(format, value);
                assert!(canonical <= len);

                let mut buf = [0u8; packed::MAX_LONG_LEN];
                let end = packed::write(format, &mut buf, 0, value).unwrap();
                assert_eq!(end, canonical);
                assert_eq!(packed::read(format, width, &buf, 0).unwrap(), value);

                offset += len;
            }
        }
    }
});
