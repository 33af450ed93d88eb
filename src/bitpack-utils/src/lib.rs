//! Shared utility code throughout the bitpack project.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use thiserror;

pub mod align;
