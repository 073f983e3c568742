//! Stateless operations over homogeneous slices.
//!
//! Every function here is a pure free function: it borrows its input, never
//! mutates it, and allocates only its own return value. Nothing logs and
//! nothing touches global state, so all of them are safe to call from any
//! number of threads at once.
//!
//! Empty input is handled per operation:
//!
//! | operation            | empty input            |
//! |----------------------|------------------------|
//! | `find_max`/`find_min`| `None`                 |
//! | `average`            | `0.0`                  |
//! | `median`             | `None`                 |
//! | `remove_duplicates`  | empty `Vec`            |
//! | `most_frequent`      | `None`                 |
//! | `chunk`              | empty `Vec` (size > 0) |
//! | `interleave`         | empty `Vec`            |
//!
//! `chunk` is the only fallible operation: a zero size yields
//! [`Error::InvalidArgument`](crate::errors::Error::InvalidArgument).

pub mod dedup;
pub mod extremes;
pub mod partition;
pub mod stats;

pub use dedup::{most_frequent, remove_duplicates};
pub use extremes::{find_max, find_max_by, find_min, find_min_by};
pub use partition::{chunk, chunk_size_from, interleave};
pub use stats::{average, median};
