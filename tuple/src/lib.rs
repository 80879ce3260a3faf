//! Tuple input/output and entry bindings over packed integer encodings.
//!
//! This crate turns typed values into the opaque byte entries a key-value
//! store keeps, and back:
//!
//! - [`TupleOutput`] / [`TupleInput`] write and read primitive fields,
//!   fixed-width or packed.
//! - [`TupleBinding`] and [`TupleTupleBinding`] describe how a value or an
//!   entity maps to tuple fields; [`EntryBinding`] and [`EntityBinding`]
//!   follow from them.
//! - Primitive bindings such as [`PackedIntBinding`] cover single values.
//!
//! # Design Principles
//!
//! - **Sortable keys** - Signed fixed-width and sorted packed fields compare
//!   bytewise in numeric order.
//! - **Bounded decoding** - Entries are checked against [`Limits`] before
//!   they are read.
//! - **No storage knowledge** - Entries are plain bytes; opening, reading
//!   and writing a store is left to the caller.
//!
//! # Example
//!
//! ```
//! use tuple::{EntryBinding, Limits, PackedIntBinding, TupleInput, TupleOutput};
//!
//! let mut output = TupleOutput::new();
//! output.write_packed_int(1000).unwrap();
//! output.write_int(-1);
//! let bytes = output.finish();
//!
//! let mut input = TupleInput::new(&bytes);
//! assert_eq!(input.read_packed_int().unwrap(), 1000);
//! assert_eq!(input.read_int().unwrap(), -1);
//!
//! let entry = PackedIntBinding.object_to_entry(&7).unwrap();
//! assert_eq!(PackedIntBinding.entry_to_object(&entry, &Limits::default()).unwrap(), 7);
//! ```

mod binding;
mod entry;
mod error;
mod input;
mod limits;
mod output;
mod primitive;

pub use binding::{EntityBinding, EntryBinding, TupleBinding, TupleTupleBinding};
pub use entry::Entry;
pub use error::{TupleError, TupleResult};
pub use input::TupleInput;
pub use limits::Limits;
pub use output::TupleOutput;
pub use packed::PackedError;
pub use primitive::{
    BoolBinding, ByteBinding, DoubleBinding, FloatBinding, IntBinding, LongBinding,
    PackedIntBinding, PackedLongBinding, ShortBinding, SortedDoubleBinding, SortedFloatBinding,
    SortedPackedIntBinding, SortedPackedLongBinding,
};
