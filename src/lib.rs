//! Stateless sequence utilities.
//!
//! The [`array`] module holds the operations; everything else supports the
//! `array-utils` binary.
//!
//! ```
//! use array_utils::{average, chunk, find_max, remove_duplicates};
//!
//! assert_eq!(find_max(&[3, 1, 4]), Some(&4));
//! assert_eq!(average(&[10.0, 20.0]), 15.0);
//! assert_eq!(remove_duplicates(&[1, 2, 2, 3]), vec![1, 2, 3]);
//! assert_eq!(chunk(&[1, 2, 3], 2).unwrap(), vec![vec![1, 2], vec![3]]);
//! ```

// Export modules for library usage
pub mod array;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod formatting;

// Re-export commonly used items
pub use crate::array::{
    average, chunk, chunk_size_from, find_max, find_max_by, find_min, find_min_by, interleave,
    median, most_frequent, remove_duplicates,
};
pub use crate::errors::{Error, Result};
