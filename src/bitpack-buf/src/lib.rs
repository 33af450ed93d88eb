//! Provides a cursor-addressed buffer for bit-level manipulation
//! of data.
//!
//! Unlike stream-oriented designs with separate reader and writer
//! halves, the buffer here exposes a single seekable bit cursor
//! which both reads and writes go through. This allows revisiting
//! and patching already written regions in place, which bit-packed
//! wire formats commonly require.
//!
//! Every operation starts at a byte's LSB, working towards the MSB.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod buffer;
pub use buffer::BitBuffer;
