//! Binding traits between typed values and byte entries.
//!
//! Implement [`TupleBinding`] for a value stored in one entry, or
//! [`TupleTupleBinding`] for an entity split across a key and a data entry.
//! The entry-level traits [`EntryBinding`] and [`EntityBinding`] are provided
//! for both by blanket impls and enforce decode [`Limits`].

use crate::entry::Entry;
use crate::error::{TupleError, TupleResult};
use crate::input::TupleInput;
use crate::limits::Limits;
use crate::output::TupleOutput;

/// Converts a value to and from tuple fields.
pub trait TupleBinding {
    /// The bound value type.
    type Value;

    /// Writes `value` as tuple fields.
    fn write_value(&self, value: &Self::Value, output: &mut TupleOutput) -> TupleResult<()>;

    /// Reads a value from tuple fields.
    fn read_value(&self, input: &mut TupleInput<'_>) -> TupleResult<Self::Value>;
}

/// Converts a value to and from a single entry.
pub trait EntryBinding {
    /// The bound value type.
    type Value;

    /// Encodes `value` as an entry.
    fn object_to_entry(&self, value: &Self::Value) -> TupleResult<Entry>;

    /// Decodes an entry, enforcing `limits`.
    fn entry_to_object(&self, entry: &Entry, limits: &Limits) -> TupleResult<Self::Value>;
}

impl<B: TupleBinding> EntryBinding for B {
    type Value = B::Value;

    fn object_to_entry(&self, value: &Self::Value) -> TupleResult<Entry> {
        let mut output = TupleOutput::new();
        self.write_value(value, &mut output)?;
        Ok(output.into_entry())
    }

    fn entry_to_object(&self, entry: &Entry, limits: &Limits) -> TupleResult<Self::Value> {
        check_entry_len(entry, limits)?;
        let mut input = TupleInput::new(entry.as_bytes());
        let value = self.read_value(&mut input)?;
        check_consumed(&input, limits)?;
        Ok(value)
    }
}

/// Converts an entity to and from a key tuple and a data tuple.
pub trait TupleTupleBinding {
    /// The bound entity type.
    type Entity;

    /// Reads an entity from its key and data tuples.
    fn read_entity(
        &self,
        key: &mut TupleInput<'_>,
        data: &mut TupleInput<'_>,
    ) -> TupleResult<Self::Entity>;

    /// Writes the key fields of `entity`.
    fn write_key(&self, entity: &Self::Entity, output: &mut TupleOutput) -> TupleResult<()>;

    /// Writes the data fields of `entity`.
    fn write_data(&self, entity: &Self::Entity, output: &mut TupleOutput) -> TupleResult<()>;
}

/// Converts an entity to and from a key entry and a data entry.
pub trait EntityBinding {
    /// The bound entity type.
    type Entity;

    /// Decodes an entity from its key and data entries, enforcing `limits`.
    fn entry_to_entity(
        &self,
        key: &Entry,
        data: &Entry,
        limits: &Limits,
    ) -> TupleResult<Self::Entity>;

    /// Encodes the key entry of `entity`.
    fn entity_to_key(&self, entity: &Self::Entity) -> TupleResult<Entry>;

    /// Encodes the data entry of `entity`.
    fn entity_to_data(&self, entity: &Self::Entity) -> TupleResult<Entry>;
}

impl<B: TupleTupleBinding> EntityBinding for B {
    type Entity = B::Entity;

    fn entry_to_entity(
        &self,
        key: &Entry,
        data: &Entry,
        limits: &Limits,
    ) -> TupleResult<Self::Entity> {
        check_entry_len(key, limits)?;
        check_entry_len(data, limits)?;
        let mut key_input = TupleInput::new(key.as_bytes());
        let mut data_input = TupleInput::new(data.as_bytes());
        let entity = self.read_entity(&mut key_input, &mut data_input)?;
        check_consumed(&key_input, limits)?;
        check_consumed(&data_input, limits)?;
        Ok(entity)
    }

    fn entity_to_key(&self, entity: &Self::Entity) -> TupleResult<Entry> {
        let mut output = TupleOutput::new();
        self.write_key(entity, &mut output)?;
        Ok(output.into_entry())
    }

    fn entity_to_data(&self, entity: &Self::Entity) -> TupleResult<Entry> {
        let mut output = TupleOutput::new();
        self.write_data(entity, &mut output)?;
        Ok(output.into_entry())
    }
}

fn check_entry_len(entry: &Entry, limits: &Limits) -> TupleResult<()> {
    if entry.len() > limits.max_entry_bytes {
        return Err(TupleError::EntryTooLarge {
            len: entry.len(),
            limit: limits.max_entry_bytes,
        });
    }
    Ok(())
}

fn check_consumed(input: &TupleInput<'_>, limits: &Limits) -> TupleResult<()> {
    if !limits.allow_trailing_bytes && !input.is_empty() {
        return Err(TupleError::TrailingBytes {
            remaining: input.available(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Point {
        x: i32,
        y: i32,
    }

    struct PointBinding;

    impl TupleBinding for PointBinding {
        type Value = Point;

        fn write_value(&self, value: &Point, output: &mut TupleOutput) -> TupleResult<()> {
            output.write_packed_int(value.x)?;
            output.write_packed_int(value.y)
        }

        fn read_value(&self, input: &mut TupleInput<'_>) -> TupleResult<Point> {
            Ok(Point {
                x: input.read_packed_int()?,
                y: input.read_packed_int()?,
            })
        }
    }

    #[test]
    fn entry_binding_roundtrip() {
        let point = Point { x: -500, y: 7 };
        let entry = PointBinding.object_to_entry(&point).unwrap();
        assert_eq!(entry.len(), 3 + 1);
        let decoded = PointBinding
            .entry_to_object(&entry, &Limits::default())
            .unwrap();
        assert_eq!(decoded, point);
    }

    #[test]
    fn entry_binding_rejects_trailing_bytes() {
        let mut bytes = PointBinding
            .object_to_entry(&Point { x: 1, y: 2 })
            .unwrap()
            .into_bytes();
        bytes.push(0);
        let entry = Entry::new(bytes);
        assert_eq!(
            PointBinding.entry_to_object(&entry, &Limits::default()),
            Err(TupleError::TrailingBytes { remaining: 1 })
        );
        assert!(PointBinding
            .entry_to_object(&entry, &Limits::unlimited())
            .is_ok());
    }

    #[test]
    fn entry_binding_rejects_oversize_entry() {
        let entry = Entry::new(vec![0; 257]);
        assert_eq!(
            PointBinding.entry_to_object(&entry, &Limits::for_testing()),
            Err(TupleError::EntryTooLarge {
                len: 257,
                limit: 256
            })
        );
    }

    #[test]
    fn entry_binding_truncated_entry() {
        let entry = Entry::new(vec![0x01]);
        assert!(matches!(
            PointBinding.entry_to_object(&entry, &Limits::default()),
            Err(TupleError::Packed(_))
        ));
    }
}
