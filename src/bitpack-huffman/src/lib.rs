//! Frequency-based Huffman coding over bit buffers.
//!
//! A [`HuffmanTree`] is built once from per-byte-value occurrence
//! weights and assigns a minimum-redundancy prefix code to each of
//! the 256 possible byte values. [`compress`] and [`decompress`]
//! then transform the contents of a [`bitpack_buf::BitBuffer`] in
//! place, so typed values can be read back in write order after a
//! full round trip.
//!
//! Trees are immutable once built and may be shared freely between
//! buffers and threads.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod codec;
pub use codec::{compress, decompress};

mod node;
pub use node::HuffmanNode;

mod tree;
pub use tree::{Code, HuffmanError, HuffmanTree};
