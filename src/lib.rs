//! Prefix-code text codec.
//!
//! Analyzes character frequencies in a source text (ASCII letters, comma
//! and space; everything else is discarded), builds a full binary coding
//! tree through a bounded binary-heap [`PriorityQueue`], assigns each
//! character a prefix-free bit-string code, and exposes
//! [`Codec::encode`] / [`Codec::decode`] over strings of `'0'`/`'1'`
//! characters.
//!
//! The tree builder merges the two *highest*-frequency nodes first. The
//! code it produces is always decodable and prefix-free, but it is not
//! the minimum-redundancy code canonical Huffman construction would give.
//!
//! ```rust
//! use huffcode::Codec;
//!
//! let codec = Codec::new("aaabbcdf");
//! let bits = codec.encode("aaabbcdf");
//! assert_eq!(codec.decode(&bits), "aaabbcdf");
//! ```

pub mod code_table;
pub mod codec;
pub mod error;
pub mod frequency;
pub mod heap;
pub mod tree;

pub use code_table::build_code_table;
pub use codec::Codec;
pub use error::{Error, Result};
pub use frequency::{frequency_table, is_allowed};
pub use heap::PriorityQueue;
pub use tree::{build_tree, Node};
