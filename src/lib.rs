//! Base58 and Base58Check codecs over byte buffers.
//!
//! Conversion works on digit arrays rather than big integers, so inputs of any length are
//! supported. Every codec holds only a reference to its alphabet and is safe to share
//! between threads.

pub mod base58;
pub mod base58_check;
pub mod base_common;
pub mod hex;
