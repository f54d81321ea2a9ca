use super::{compute_checksum, Alphabet, DoubleHash, Sha256d, ALPHABET};
use crate::base58::{self, encode::Error};

pub struct Encoder<'a, H = Sha256d> {
    encoder: base58::Encoder<'a>,
    hasher: H,
}

impl<'a, H> Encoder<'a, H> {
    pub const fn new(alphabet: &'a Alphabet<58>, hasher: H) -> Self {
        Self {
            encoder: base58::Encoder::new(alphabet),
            hasher,
        }
    }
}

impl<'a, H: DoubleHash> Encoder<'a, H> {
    fn extend_input(&self, input: impl AsRef<[u8]>) -> Vec<u8> {
        let mut input = input.as_ref().to_vec();
        let checksum = compute_checksum(&self.hasher, &input);
        input.extend_from_slice(&checksum);
        input
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        self.encoder.encode(self.extend_input(input))
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        self.encoder.encode_into(self.extend_input(input), output)
    }

    /// Encodes `version` followed by `payload`; the checksum covers both.
    pub fn encode_versioned(&self, version: u8, payload: impl AsRef<[u8]>) -> String {
        let mut input = Vec::with_capacity(payload.as_ref().len() + 1);
        input.push(version);
        input.extend_from_slice(payload.as_ref());
        self.encode(input)
    }
}

impl Encoder<'static, Sha256d> {
    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&ALPHABET, Sha256d);

pub fn encode(input: impl AsRef<[u8]>) -> String {
    Encoder::default().encode(input)
}

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_into(input, output)
}

pub fn encode_versioned(version: u8, payload: impl AsRef<[u8]>) -> String {
    Encoder::default().encode_versioned(version, payload)
}
