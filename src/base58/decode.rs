use super::{Alphabet, ALPHABET};
use crate::base_common::{
    alphabet,
    convert::{decoded_capacity, multiply_add},
};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall { required: usize },
    InvalidCharacter { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall { required } => write!(f, "Output buffer too small ({} bytes required)", required),
            Error::InvalidCharacter { character, index } => write!(f, "Invalid character {:?} at index {}", character, index),
        }
    }
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        match error {
            alphabet::DecodeError::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
        }
    }
}

/// What to do with whitespace between symbols. Whitespace around the input is always trimmed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Whitespace {
    Skip,
    Reject,
}

pub struct Decoder<'a> {
    alphabet: &'a Alphabet<58>,
    whitespace: Whitespace,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<58>) -> Self {
        Self {
            alphabet,
            whitespace: Whitespace::Skip,
        }
    }

    pub const fn with_whitespace(self, whitespace: Whitespace) -> Self {
        Self { whitespace, ..self }
    }

    /// Returns the number of leading zero symbols and the value of the remaining symbols as
    /// big-endian bytes.
    fn bytes(&self, input: &str) -> Result<(usize, Vec<u8>), Error> {
        let trimmed = input.trim_start_matches(is_whitespace);
        let offset = input.len() - trimmed.len();

        let mut digits = Vec::with_capacity(trimmed.len());
        for (index, character) in trimmed.trim_end_matches(is_whitespace).char_indices() {
            if self.whitespace == Whitespace::Skip && is_whitespace(character) {
                continue;
            }
            digits.push(self.alphabet.decode(character, offset + index)?);
        }

        let zeros = digits.iter().take_while(|&&digit| digit == 0).count();
        let digits = &digits[zeros..];
        let mut bytes = vec![0u8; decoded_capacity(digits.len())];
        let mut length = 0;
        for &digit in digits {
            length = multiply_add(&mut bytes, length, 58, 256, digit as usize);
        }
        bytes.truncate(length);
        bytes.reverse();
        Ok((zeros, bytes))
    }

    pub fn decode_into(&self, input: impl AsRef<str>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let output = output.as_mut();
        let (zeros, bytes) = self.bytes(input.as_ref())?;
        let len = zeros + bytes.len();
        if output.len() < len {
            return Err(Error::BufferTooSmall { required: len });
        }
        output[..zeros].fill(0);
        output[zeros..len].copy_from_slice(&bytes);
        Ok(len)
    }

    pub fn decode(&self, input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
        let (zeros, bytes) = self.bytes(input.as_ref())?;
        let mut output = vec![0u8; zeros];
        output.extend_from_slice(&bytes);
        Ok(output)
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&ALPHABET);

/// Whitespace both trimmed around the input and skipped inside it. Other Unicode spaces are
/// invalid characters.
fn is_whitespace(character: char) -> bool {
    character.is_ascii_whitespace()
}

pub fn decode(input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode(input)
}

pub fn decode_into(input: impl AsRef<str>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}
