//! Bindings for single primitive values.
//!
//! Each binding stores one field; the entry holds nothing else.

use crate::binding::TupleBinding;
use crate::error::TupleResult;
use crate::input::TupleInput;
use crate::output::TupleOutput;

macro_rules! primitive_binding {
    ($(#[$doc:meta])* fixed $name:ident, $ty:ty, $write:ident, $read:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl TupleBinding for $name {
            type Value = $ty;

            fn write_value(&self, value: &$ty, output: &mut TupleOutput) -> TupleResult<()> {
                output.$write(*value);
                Ok(())
            }

            fn read_value(&self, input: &mut TupleInput<'_>) -> TupleResult<$ty> {
                input.$read()
            }
        }
    };
    ($(#[$doc:meta])* packed $name:ident, $ty:ty, $write:ident, $read:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl TupleBinding for $name {
            type Value = $ty;

            fn write_value(&self, value: &$ty, output: &mut TupleOutput) -> TupleResult<()> {
                output.$write(*value)
            }

            fn read_value(&self, input: &mut TupleInput<'_>) -> TupleResult<$ty> {
                input.$read()
            }
        }
    };
}

primitive_binding!(
    /// Binds a `bool` as one byte.
    fixed BoolBinding, bool, write_bool, read_bool
);
primitive_binding!(
    /// Binds an `i8` as one sortable byte.
    fixed ByteBinding, i8, write_byte, read_byte
);
primitive_binding!(
    /// Binds an `i16` as two sortable bytes.
    fixed ShortBinding, i16, write_short, read_short
);
primitive_binding!(
    /// Binds an `i32` as four sortable bytes.
    fixed IntBinding, i32, write_int, read_int
);
primitive_binding!(
    /// Binds an `i64` as eight sortable bytes.
    fixed LongBinding, i64, write_long, read_long
);
primitive_binding!(
    /// Binds an `f32` by its IEEE 754 bits. Does not sort numerically.
    fixed FloatBinding, f32, write_float, read_float
);
primitive_binding!(
    /// Binds an `f64` by its IEEE 754 bits. Does not sort numerically.
    fixed DoubleBinding, f64, write_double, read_double
);
primitive_binding!(
    /// Binds an `f32` so entries sort numerically.
    fixed SortedFloatBinding, f32, write_sorted_float, read_sorted_float
);
primitive_binding!(
    /// Binds an `f64` so entries sort numerically.
    fixed SortedDoubleBinding, f64, write_sorted_double, read_sorted_double
);
primitive_binding!(
    /// Binds an `i32` in the packed format (1 to 5 bytes).
    packed PackedIntBinding, i32, write_packed_int, read_packed_int
);
primitive_binding!(
    /// Binds an `i64` in the packed format (1 to 9 bytes).
    packed PackedLongBinding, i64, write_packed_long, read_packed_long
);
primitive_binding!(
    /// Binds an `i32` in the sorted packed format (1 to 5 bytes).
    packed SortedPackedIntBinding, i32, write_sorted_packed_int, read_sorted_packed_int
);
primitive_binding!(
    /// Binds an `i64` in the sorted packed format (1 to 9 bytes).
    packed SortedPackedLongBinding, i64, write_sorted_packed_long, read_sorted_packed_long
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::EntryBinding;
    use crate::entry::Entry;
    use crate::error::TupleError;
    use crate::limits::Limits;

    fn roundtrip<B>(binding: &B, value: B::Value) -> Entry
    where
        B: TupleBinding,
        B::Value: PartialEq + std::fmt::Debug,
    {
        let entry = binding.object_to_entry(&value).unwrap();
        let decoded = binding.entry_to_object(&entry, &Limits::default()).unwrap();
        assert_eq!(decoded, value);
        entry
    }

    #[test]
    fn fixed_width_entry_sizes() {
        assert_eq!(roundtrip(&BoolBinding, true).len(), 1);
        assert_eq!(roundtrip(&ByteBinding, -5).len(), 1);
        assert_eq!(roundtrip(&ShortBinding, i16::MIN).len(), 2);
        assert_eq!(roundtrip(&IntBinding, 42).len(), 4);
        assert_eq!(roundtrip(&LongBinding, -42).len(), 8);
        assert_eq!(roundtrip(&FloatBinding, 1.5).len(), 4);
        assert_eq!(roundtrip(&DoubleBinding, -2.25).len(), 8);
        assert_eq!(roundtrip(&SortedFloatBinding, -0.5).len(), 4);
        assert_eq!(roundtrip(&SortedDoubleBinding, 1e100).len(), 8);
    }

    #[test]
    fn packed_entry_sizes() {
        assert_eq!(roundtrip(&PackedIntBinding, 0).len(), 1);
        assert_eq!(roundtrip(&PackedIntBinding, i32::MIN).len(), 5);
        assert_eq!(roundtrip(&PackedLongBinding, i64::MAX).len(), 9);
        assert_eq!(roundtrip(&SortedPackedIntBinding, 120).len(), 1);
        assert_eq!(roundtrip(&SortedPackedLongBinding, -120).len(), 2);
    }

    #[test]
    fn int_entries_sort_numerically() {
        let values = [i32::MIN, -70_000, -1, 0, 1, 375, i32::MAX];
        for pair in values.windows(2) {
            let low = IntBinding.object_to_entry(&pair[0]).unwrap();
            let high = IntBinding.object_to_entry(&pair[1]).unwrap();
            assert!(low < high, "{} < {}", pair[0], pair[1]);
            let low = SortedPackedIntBinding.object_to_entry(&pair[0]).unwrap();
            let high = SortedPackedIntBinding.object_to_entry(&pair[1]).unwrap();
            assert!(low < high, "sorted packed {} < {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn empty_entry_fails() {
        let err = IntBinding
            .entry_to_object(&Entry::default(), &Limits::default())
            .unwrap_err();
        assert_eq!(
            err,
            TupleError::UnexpectedEnd {
                requested: 4,
                available: 0
            }
        );
    }
}
