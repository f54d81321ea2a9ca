use super::{compute_checksum, Alphabet, DoubleHash, Sha256d, ALPHABET};
use crate::base58::{self, Whitespace};
use crate::hex;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall { required: usize },
    InvalidEncoding(base58::decode::Error),
    TooShort { length: usize },
    ChecksumMismatch { checksum: [u8; 4], expected_checksum: [u8; 4] },
    MissingVersion,
}

impl From<base58::decode::Error> for Error {
    fn from(error: base58::decode::Error) -> Self {
        match error {
            base58::decode::Error::BufferTooSmall { required } => Error::BufferTooSmall { required },
            error => Error::InvalidEncoding(error),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::InvalidEncoding(error) => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall { required } => write!(f, "Output buffer too small ({} bytes required)", required),
            Error::InvalidEncoding(error) => write!(f, "Invalid encoding: {}", error),
            Error::TooShort { length } => write!(f, "Decoded data too short for a checksum ({} bytes)", length),
            Error::ChecksumMismatch {
                checksum,
                expected_checksum,
            } => write!(
                f,
                "Invalid checksum '{}' ('{}' expected)",
                hex::encode(checksum),
                hex::encode(expected_checksum)
            ),
            Error::MissingVersion => write!(f, "Missing version byte"),
        }
    }
}

pub struct Decoder<'a, H = Sha256d> {
    decoder: base58::Decoder<'a>,
    hasher: H,
}

impl<'a, H> Decoder<'a, H> {
    pub const fn new(alphabet: &'a Alphabet<58>, hasher: H) -> Self {
        Self {
            decoder: base58::Decoder::new(alphabet),
            hasher,
        }
    }

    pub fn with_whitespace(self, whitespace: Whitespace) -> Self {
        Self {
            decoder: self.decoder.with_whitespace(whitespace),
            hasher: self.hasher,
        }
    }
}

impl<'a, H: DoubleHash> Decoder<'a, H> {
    /// Writes the verified payload to the start of `output`. `output` is left untouched on failure.
    pub fn decode_into(&self, input: impl AsRef<str>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let payload = self.decode(input)?;
        let output = output.as_mut();
        if output.len() < payload.len() {
            return Err(Error::BufferTooSmall { required: payload.len() });
        }
        output[..payload.len()].copy_from_slice(&payload);
        Ok(payload.len())
    }

    pub fn decode(&self, input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
        let mut output = self.decoder.decode(input)?;
        let len = verify_checksum(&self.hasher, &output)?;
        output.truncate(len);
        Ok(output)
    }

    /// Decodes a payload produced by `Encoder::encode_versioned`.
    pub fn decode_versioned(&self, input: impl AsRef<str>) -> Result<(u8, Vec<u8>), Error> {
        let output = self.decode(input)?;
        match output.split_first() {
            Some((&version, payload)) => Ok((version, payload.to_vec())),
            None => Err(Error::MissingVersion),
        }
    }
}

impl Decoder<'static, Sha256d> {
    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&ALPHABET, Sha256d);

/// Checks the trailing 4 bytes of `buffer` against the checksum of the bytes before them and
/// returns the payload length.
fn verify_checksum(hasher: &impl DoubleHash, buffer: &[u8]) -> Result<usize, Error> {
    if buffer.len() < 4 {
        return Err(Error::TooShort { length: buffer.len() });
    }
    let (payload, checksum) = buffer.split_at(buffer.len() - 4);
    let expected_checksum = compute_checksum(hasher, payload);
    if checksum != &expected_checksum[..] {
        return Err(Error::ChecksumMismatch {
            checksum: [checksum[0], checksum[1], checksum[2], checksum[3]],
            expected_checksum,
        });
    }
    Ok(payload.len())
}

pub fn decode(input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode(input)
}

pub fn decode_into(input: impl AsRef<str>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}

pub fn decode_versioned(input: impl AsRef<str>) -> Result<(u8, Vec<u8>), Error> {
    Decoder::default().decode_versioned(input)
}
