#![no_main]

use libfuzzer_sys::fuzz_target;
use bytepool::{Buffer, BufferPool};

fuzz_target!(|data: &[u8]| {
    let Some((&capacity, ops)) = data.split_first() else {
        return;
    };
    let capacity = (capacity % 32) as usize;
    let pool = BufferPool::new(capacity);
    let mut held: Vec<Buffer> = Vec::new();
    let mut expected_exhausted = 0;

    for &op in ops {
        if op % 2 == 0 {
            if pool.available() == 0 {
                expected_exhausted += 1;
            }
            let mut buf = pool.acquire();
            assert!(buf.is_empty());
            buf.write_byte(op);
            held.push(buf);
        } else if let Some(buf) = held.pop() {
            pool.release(buf);
        } else {
            pool.release(Buffer::from(&[op][..]));
        }

        // Verify: the pool never holds more than its capacity
        assert!(pool.available() <= capacity);
        assert_eq!(pool.exhausted(), expected_exhausted);
    }
});
