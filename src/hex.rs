use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall { required: usize },
    InvalidHexCharacter { character: char, index: usize },
    OddLength,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::BufferTooSmall { required } => write!(f, "Output buffer too small ({} bytes required)", required),
            Error::InvalidHexCharacter { character, index } => write!(f, "Invalid hex character {:?} at index {}", character, index),
            Error::OddLength => write!(f, "Odd number of hex digits"),
        }
    }
}

fn nibble(character: char, index: usize) -> Result<u8, Error> {
    match character.to_digit(16) {
        Some(value) => Ok(value as u8),
        None => Err(Error::InvalidHexCharacter { character, index }),
    }
}

pub fn decode_into(input: impl AsRef<str>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    let input = input.as_ref();
    let output = output.as_mut();
    if let Some((index, character)) = input.char_indices().find(|(_, character)| !character.is_ascii()) {
        return Err(Error::InvalidHexCharacter { character, index });
    }
    if input.len() % 2 != 0 {
        return Err(Error::OddLength);
    }
    let len = input.len() / 2;
    if output.len() < len {
        return Err(Error::BufferTooSmall { required: len });
    }
    for (i, pair) in input.as_bytes().chunks(2).enumerate() {
        output[i] = nibble(pair[0] as char, 2 * i)? << 4 | nibble(pair[1] as char, 2 * i + 1)?;
    }
    Ok(len)
}

pub fn decode(input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
    let input = input.as_ref();
    let mut output = vec![0u8; input.len() / 2];
    let len = decode_into(input, &mut output)?;
    output.truncate(len);
    Ok(output)
}

const TABLE: &[u8; 16] = b"0123456789abcdef";

pub fn encode(input: impl AsRef<[u8]>) -> String {
    let input = input.as_ref();
    let mut output = String::with_capacity(input.len() * 2);
    for byte in input {
        output.push(TABLE[(byte >> 4) as usize] as char);
        output.push(TABLE[(byte & 0x0F) as usize] as char);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn encode() {
        assert_eq!(super::encode(b"Hello world"), "48656c6c6f20776f726c64");
        assert_eq!(super::encode([]), "");
    }

    #[test]
    fn decode() {
        assert_eq!(
            super::decode("48656C6c6f20776f726c64"),
            Ok(vec![0x48, 0x65, 0x6c, 0x6c, 0x6f, 0x20, 0x77, 0x6f, 0x72, 0x6c, 0x64])
        );
        assert_eq!(super::decode("abc"), Err(Error::OddLength));
        assert_eq!(super::decode("0g"), Err(Error::InvalidHexCharacter { character: 'g', index: 1 }));
        assert_eq!(super::decode("0é"), Err(Error::InvalidHexCharacter { character: 'é', index: 1 }));
    }

    #[test]
    fn decode_into() {
        let mut output = [0u8; 2];
        assert_eq!(super::decode_into("00ff", &mut output), Ok(2));
        assert_eq!(output, [0x00, 0xff]);
        assert_eq!(super::decode_into("00ff00", &mut output), Err(Error::BufferTooSmall { required: 3 }));
    }
}
