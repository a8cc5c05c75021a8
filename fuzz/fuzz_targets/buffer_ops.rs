#![no_main]

use libfuzzer_sys::fuzz_target;
use bytepool::Buffer;

fuzz_target!(|data: &[u8]| {
    // Interpret the input as a sequence of buffer operations
    let mut buf = Buffer::new();
    let mut expected: Vec<u8> = Vec::new();

    for window in data.chunks(4) {
        let Some((op, payload)) = window.split_first() else {
            continue;
        };
        match op % 5 {
            0 => {
                buf.write(payload);
                expected.extend_from_slice(payload);
            }
            1 => {
                buf.write_byte(*op);
                expected.push(*op);
            }
            2 => {
                buf.set(payload);
                expected = payload.to_vec();
            }
            3 => {
                buf.reset();
                expected.clear();
            }
            _ => {
                let frozen = buf.freeze();
                assert_eq!(&frozen[..], &expected[..]);
                expected.clear();
            }
        }

        // Verify: length and content track every operation
        assert_eq!(buf.len(), expected.len());
        assert_eq!(buf.bytes(), &expected[..]);

        // Verify: string views agree with std's UTF-8 check
        match std::str::from_utf8(&expected) {
            Ok(s) => assert_eq!(buf.str_view().unwrap(), (s, s.len())),
            Err(_) => assert!(buf.str_view().is_err()),
        }
    }

    let _ = buf.to_string_reset();
    assert!(buf.is_empty());
});
