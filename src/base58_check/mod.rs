mod checksum;
pub mod decode;
pub mod encode;

pub use crate::base58::{Alphabet, ALPHABET, RIPPLE_ALPHABET};
pub use checksum::{compute_checksum, DoubleHash, Sha256d};
pub use decode::{decode, decode_into, decode_versioned, Decoder};
pub use encode::{encode, encode_into, encode_versioned, Encoder};
