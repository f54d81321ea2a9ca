use crate::{
    configuration::{BinaryFormat, Configuration, Mode, OutputFormat},
    error::Error,
};
use base58_codec::{base58, base58_check, hex};
use serde::Serialize;
use std::error;

/// Applies the configured mode to one line of input.
pub struct Transcoder {
    mode: Mode,
    binary_format: BinaryFormat,
    version: Option<u8>,
    encoder: base58::Encoder<'static>,
    decoder: base58::Decoder<'static>,
    check_encoder: base58_check::Encoder<'static>,
    check_decoder: base58_check::Decoder<'static>,
}

impl Transcoder {
    pub fn new(configuration: &Configuration) -> Self {
        let alphabet = configuration.alphabet().alphabet();
        let whitespace = configuration.whitespace();
        Self {
            mode: configuration.mode(),
            binary_format: configuration.binary_format(),
            version: configuration.version(),
            encoder: base58::Encoder::new(alphabet),
            decoder: base58::Decoder::new(alphabet).with_whitespace(whitespace),
            check_encoder: base58_check::Encoder::new(alphabet, base58_check::Sha256d),
            check_decoder: base58_check::Decoder::new(alphabet, base58_check::Sha256d).with_whitespace(whitespace),
        }
    }

    fn read_binary(&self, line: &str) -> Result<Vec<u8>, Box<dyn error::Error>> {
        match self.binary_format {
            BinaryFormat::Hex => Ok(hex::decode(line.trim())?),
            BinaryFormat::Utf8 => Ok(line.as_bytes().to_vec()),
        }
    }

    fn write_binary(&self, bytes: Vec<u8>) -> Result<String, Box<dyn error::Error>> {
        match self.binary_format {
            BinaryFormat::Hex => Ok(hex::encode(bytes)),
            BinaryFormat::Utf8 => Ok(String::from_utf8(bytes)?),
        }
    }

    pub fn transcode(&self, line: &str) -> Result<String, Box<dyn error::Error>> {
        match (self.mode, self.version) {
            (Mode::Encode, _) => Ok(self.encoder.encode(self.read_binary(line)?)),
            (Mode::Decode, _) => self.write_binary(self.decoder.decode(line)?),
            (Mode::EncodeCheck, None) => Ok(self.check_encoder.encode(self.read_binary(line)?)),
            (Mode::EncodeCheck, Some(version)) => Ok(self.check_encoder.encode_versioned(version, self.read_binary(line)?)),
            (Mode::DecodeCheck, None) => self.write_binary(self.check_decoder.decode(line)?),
            (Mode::DecodeCheck, Some(expected_version)) => {
                let (version, payload) = self.check_decoder.decode_versioned(line)?;
                if version != expected_version {
                    return Err(Error::new(format!("Unexpected version {} ({} expected)", version, expected_version)).into());
                }
                self.write_binary(payload)
            }
        }
    }
}

#[derive(Serialize)]
struct Record<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Formats the result of one line for stdout. In text mode failures produce no stdout line.
pub fn render(
    output_format: OutputFormat,
    input: &str,
    result: &Result<String, Box<dyn error::Error>>,
) -> Result<Option<String>, serde_json::Error> {
    match output_format {
        OutputFormat::Text => Ok(result.as_ref().ok().cloned()),
        OutputFormat::Json => {
            let record = match result {
                Ok(output) => Record {
                    input,
                    output: Some(output.as_str()),
                    error: None,
                },
                Err(error) => Record {
                    input,
                    output: None,
                    error: Some(error.to_string()),
                },
            };
            serde_json::to_string(&record).map(Some)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{render, Transcoder};
    use crate::configuration::{Configuration, OutputFormat};
    use serde_json::{json, Value};
    use std::collections::HashMap;

    fn transcoder(vars: &[(&str, &str)]) -> Transcoder {
        let vars: HashMap<String, String> = vars.iter().map(|(key, value)| (key.to_string(), value.to_string())).collect();
        Transcoder::new(&Configuration::from_vars(|key| vars.get(key).cloned()).unwrap())
    }

    #[test]
    fn encode() {
        let transcoder = transcoder(&[]);
        assert_eq!(transcoder.transcode("0001").unwrap(), "12");
        assert_eq!(transcoder.transcode(" 000000 ").unwrap(), "111");
        assert!(transcoder.transcode("0g").is_err());

        let transcoder = self::transcoder(&[("BINARY_FORMAT", "utf8")]);
        assert_eq!(transcoder.transcode("hello world").unwrap(), "StV1DL6CwTryKyV");
    }

    #[test]
    fn decode() {
        let transcoder = transcoder(&[("MODE", "decode")]);
        assert_eq!(transcoder.transcode("12").unwrap(), "0001");
        assert_eq!(
            transcoder.transcode("0").unwrap_err().to_string(),
            "Invalid character '0' at index 0"
        );

        let transcoder = self::transcoder(&[("MODE", "decode"), ("BINARY_FORMAT", "utf8")]);
        assert_eq!(transcoder.transcode("StV1DL6CwTryKyV").unwrap(), "hello world");
        assert!(transcoder.transcode("5Q").is_err());
    }

    #[test]
    fn check() {
        let transcoder = transcoder(&[("MODE", "encode-check")]);
        assert_eq!(transcoder.transcode("00").unwrap(), "1Wh4bh");

        let transcoder = self::transcoder(&[("MODE", "decode-check")]);
        assert_eq!(transcoder.transcode("1Wh4bh").unwrap(), "00");
        assert_eq!(transcoder.transcode("12").unwrap_err().to_string(), "Decoded data too short for a checksum (2 bytes)");
    }

    #[test]
    fn versioned() {
        let transcoder = transcoder(&[("MODE", "encode-check"), ("VERSION", "5"), ("BINARY_FORMAT", "hex")]);
        assert_eq!(
            transcoder.transcode("1111111111111111111111111111111111111111").unwrap(),
            "33FFrcn4Tv1qgGEuXPkkPdr44DuWp3RzPo"
        );

        let transcoder = self::transcoder(&[("MODE", "decode-check"), ("VERSION", "0")]);
        assert_eq!(
            transcoder.transcode("33FFrcn4Tv1qgGEuXPkkPdr44DuWp3RzPo").unwrap_err().to_string(),
            "Unexpected version 5 (0 expected)"
        );
        assert_eq!(transcoder.transcode("12L5B5yqsf7vwb").unwrap(), "68656c6c6f");
    }

    #[test]
    fn ripple() {
        let transcoder = transcoder(&[("ALPHABET", "ripple"), ("BINARY_FORMAT", "utf8")]);
        assert_eq!(transcoder.transcode("a").unwrap(), "pg");
    }

    #[test]
    fn render_json() {
        let transcoder = transcoder(&[("MODE", "decode")]);
        let output = render(OutputFormat::Json, "12", &transcoder.transcode("12")).unwrap().unwrap();
        assert_eq!(serde_json::from_str::<Value>(&output).unwrap(), json!({"input": "12", "output": "0001"}));
        let output = render(OutputFormat::Json, "0", &transcoder.transcode("0")).unwrap().unwrap();
        assert_eq!(
            serde_json::from_str::<Value>(&output).unwrap(),
            json!({"input": "0", "error": "Invalid character '0' at index 0"})
        );
    }

    #[test]
    fn render_text() {
        let transcoder = transcoder(&[("MODE", "decode")]);
        assert_eq!(render(OutputFormat::Text, "12", &transcoder.transcode("12")).unwrap(), Some("0001".to_string()));
        assert_eq!(render(OutputFormat::Text, "0", &transcoder.transcode("0")).unwrap(), None);
    }
}
