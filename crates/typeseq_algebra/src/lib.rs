//! Pure combinators over type sequences.
//!
//! Every function here takes sequences by reference and returns a new
//! sequence (or a scalar). Nothing is mutated and nothing is shared between
//! calls, so results depend only on inputs.
//!
//! - Quantifiers: [`forall`], [`exists`], [`count`], [`count_not`],
//!   [`zipped_forall`], [`is_zipped`]
//! - Structure: [`reverse`], [`concat`], [`push_back`], [`push_front`],
//!   [`prepend`], [`pop_back`], [`first_n`], [`last_n`], [`at`]
//! - Search: [`find`], [`find_if`]
//! - Selection: [`filter`], [`filter_not`], [`filter_by_value`],
//!   [`filter_not_by_value`], [`distinct`]
//! - Transforms: [`zip`], [`unzip`], [`zip_with_index`], [`map`],
//!   [`zipped_map`]
//! - Resizing: [`pad_right`], [`pad_left`], [`trim`]
//! - Grouping: [`group_by`]
//!
//! Contract violations (zipping unequal sizes, slicing past the end, left
//! padding to a smaller size) are reported as [`typeseq_foundation::Error`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod filter;
pub mod group;
pub mod pad;
pub mod quantify;
pub mod search;
pub mod structure;
pub mod zip;


pub use filter::{distinct, filter, filter_by_value, filter_not, filter_not_by_value};
pub use group::group_by;
pub use pad::{pad_left, pad_right, trim};
pub use quantify::{count, count_not, exists, forall, is_type_list, is_zipped, zipped_forall};
pub use search::{find, find_from, find_if, find_if_from};
pub use structure::{
    append, at, concat, first_n, last_n, pop_back, prepend, push_back, push_front, reverse,
};
pub use zip::{map, unzip, zip, zip_with, zip_with_index, zipped_map};
