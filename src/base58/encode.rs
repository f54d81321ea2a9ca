use super::{Alphabet, ALPHABET};
use crate::base_common::convert::{encoded_capacity, multiply_add};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The output buffer was too small to contain the entire encoding.
    BufferTooSmall { required: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall { required } => write!(f, "Output buffer too small ({} bytes required)", required),
        }
    }
}

pub struct Encoder<'a> {
    alphabet: &'a Alphabet<58>,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<58>) -> Self {
        Self { alphabet }
    }

    /// Returns the number of leading zero bytes and the base-58 digits of the rest of
    /// `input`, most significant first.
    fn digits(&self, input: &[u8]) -> (usize, Vec<u8>) {
        let zeros = input.iter().take_while(|&&value| value == 0).count();
        let input = &input[zeros..];
        let mut digits = vec![0u8; encoded_capacity(input.len())];
        let mut length = 0;
        for &value in input {
            length = multiply_add(&mut digits, length, 256, 58, value as usize);
        }
        digits.truncate(length);
        digits.reverse();
        (zeros, digits)
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let output = output.as_mut();
        let (zeros, digits) = self.digits(input.as_ref());
        let len = zeros + digits.len();
        if output.len() < len {
            return Err(Error::BufferTooSmall { required: len });
        }
        output[..zeros].fill(self.alphabet.zero());
        for (value, &digit) in output[zeros..len].iter_mut().zip(&digits) {
            *value = self.alphabet.encode(digit as usize);
        }
        Ok(len)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let (zeros, digits) = self.digits(input.as_ref());
        let mut output = String::with_capacity(zeros + digits.len());
        output.extend((0..zeros).map(|_| self.alphabet.zero() as char));
        output.extend(digits.iter().map(|&digit| self.alphabet.encode(digit as usize) as char));
        output
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&ALPHABET);

pub fn encode(input: impl AsRef<[u8]>) -> String {
    Encoder::default().encode(input)
}

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_into(input, output)
}
