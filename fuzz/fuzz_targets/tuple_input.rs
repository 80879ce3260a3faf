#![no_main]

use libfuzzer_sys::fuzz_target;
use tuple::TupleInput;

fuzz_target!(|data: &[u8]| {
    let Some((ops, body)) = data.split_first_chunk::<8>() else {
        return;
    };
    let mut input = TupleInput::new(body);

    // Use the leading bytes to drive a bounded sequence of reads.
    for &op in ops.iter().cycle().take(256) {
        if input.is_empty() {
            break;
        }
        let before = input.offset();
        let advanced = match op % 10 {
            0 => input.read_bool().is_ok(),
            1 => input.read_short().is_ok(),
            2 => input.read_int().is_ok(),
            3 => input.read_long().is_ok(),
            4 => input.read_sorted_double().is_ok(),
            5 => input.read_packed_int().is_ok(),
            6 => input.read_packed_long().is_ok(),
            7 => input.read_sorted_packed_int().is_ok(),
            8 => input.read_sorted_packed_long().is_ok(),
            _ => input.skip(usize::from(op >> 4)).is_ok(),
        };
        if !advanced {
            assert_eq!(input.offset(), before);
            let _ = input.skip(1);
        }
    }
});
