use crate::error::Error;
use base58_codec::base58::{Alphabet, Whitespace, ALPHABET, RIPPLE_ALPHABET};
use std::{env, error, fmt, str::FromStr};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Mode {
    Encode,
    Decode,
    EncodeCheck,
    DecodeCheck,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Encode => write!(f, "encode"),
            Mode::Decode => write!(f, "decode"),
            Mode::EncodeCheck => write!(f, "encode-check"),
            Mode::DecodeCheck => write!(f, "decode-check"),
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Error> {
        match value {
            "encode" => Ok(Mode::Encode),
            "decode" => Ok(Mode::Decode),
            "encode-check" => Ok(Mode::EncodeCheck),
            "decode-check" => Ok(Mode::DecodeCheck),
            _ => Err(Error::new(format!("Unknown mode {}", value))),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AlphabetName {
    Bitcoin,
    Ripple,
}

impl AlphabetName {
    pub fn alphabet(&self) -> &'static Alphabet<58> {
        match self {
            AlphabetName::Bitcoin => &ALPHABET,
            AlphabetName::Ripple => &RIPPLE_ALPHABET,
        }
    }
}

impl FromStr for AlphabetName {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Error> {
        match value {
            "bitcoin" => Ok(AlphabetName::Bitcoin),
            "ripple" => Ok(AlphabetName::Ripple),
            _ => Err(Error::new(format!("Unknown alphabet {}", value))),
        }
    }
}

/// How raw bytes are spelled on the command line.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BinaryFormat {
    Hex,
    Utf8,
}

impl FromStr for BinaryFormat {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Error> {
        match value {
            "hex" => Ok(BinaryFormat::Hex),
            "utf8" => Ok(BinaryFormat::Utf8),
            _ => Err(Error::new(format!("Unknown binary format {}", value))),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Error> {
        match value {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(Error::new(format!("Unknown output format {}", value))),
        }
    }
}

fn parse_whitespace(value: &str) -> Result<Whitespace, Error> {
    match value {
        "skip" => Ok(Whitespace::Skip),
        "reject" => Ok(Whitespace::Reject),
        _ => Err(Error::new(format!("Unknown whitespace policy {}", value))),
    }
}

fn parse_bool(value: &str) -> Result<bool, Error> {
    match value {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(Error::new(format!("Not a boolean: {}", value))),
    }
}

#[derive(Debug, Clone)]
pub struct Configuration {
    mode: Mode,
    alphabet: AlphabetName,
    binary_format: BinaryFormat,
    version: Option<u8>,
    whitespace: Whitespace,
    output_format: OutputFormat,
    verbose: bool,
    log_interval: usize,
}

struct Vars<F> {
    lookup: F,
}

impl<F: Fn(&str) -> Option<String>> Vars<F> {
    fn var_map<T, E: error::Error>(&self, key: &str, f: impl FnOnce(&str) -> Result<T, E>, default: Option<T>) -> Result<T, Error> {
        match (self.lookup)(key) {
            Some(value) => f(&value).map_err(|error| Error::invalid_var(key, &value, error)),
            None => default.ok_or_else(|| Error::missing_var(key)),
        }
    }

    fn optional_map<T, E: error::Error>(&self, key: &str, f: impl FnOnce(&str) -> Result<T, E>) -> Result<Option<T>, Error> {
        match (self.lookup)(key) {
            Some(_) => self.var_map(key, f, None).map(Some),
            None => Ok(None),
        }
    }
}

impl Configuration {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let vars = Vars { lookup };
        let mode = vars.var_map("MODE", |mode| mode.parse(), Some(Mode::Encode))?;
        let alphabet = vars.var_map("ALPHABET", |alphabet| alphabet.parse(), Some(AlphabetName::Bitcoin))?;
        let binary_format = vars.var_map("BINARY_FORMAT", |format| format.parse(), Some(BinaryFormat::Hex))?;
        let version = vars.optional_map("VERSION", |version| version.parse::<u8>())?;
        let whitespace = vars.var_map("WHITESPACE", parse_whitespace, Some(Whitespace::Skip))?;
        let output_format = vars.var_map("OUTPUT", |format| format.parse(), Some(OutputFormat::Text))?;
        let verbose = vars.var_map("VERBOSE", parse_bool, Some(false))?;
        let log_interval = vars.var_map("LOG_INTERVAL", |interval| interval.parse(), Some(10000))?;
        if version.is_some() && !matches!(mode, Mode::EncodeCheck | Mode::DecodeCheck) {
            return Err(Error::new(format!("VERSION is not supported in mode {}", mode)));
        }
        Ok(Self {
            mode,
            alphabet,
            binary_format,
            version,
            whitespace,
            output_format,
            verbose,
            log_interval,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn alphabet(&self) -> AlphabetName {
        self.alphabet
    }

    pub fn binary_format(&self) -> BinaryFormat {
        self.binary_format
    }

    pub fn version(&self) -> Option<u8> {
        self.version
    }

    pub fn whitespace(&self) -> Whitespace {
        self.whitespace
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn log_interval(&self) -> usize {
        self.log_interval
    }
}

#[cfg(test)]
mod tests {
    use super::{AlphabetName, BinaryFormat, Configuration, Mode, OutputFormat};
    use base58_codec::base58::Whitespace;
    use std::collections::HashMap;

    fn configuration(vars: &[(&str, &str)]) -> Result<Configuration, crate::error::Error> {
        let vars: HashMap<String, String> = vars.iter().map(|(key, value)| (key.to_string(), value.to_string())).collect();
        Configuration::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let configuration = configuration(&[]).unwrap();
        assert_eq!(configuration.mode(), Mode::Encode);
        assert_eq!(configuration.alphabet(), AlphabetName::Bitcoin);
        assert_eq!(configuration.binary_format(), BinaryFormat::Hex);
        assert_eq!(configuration.version(), None);
        assert_eq!(configuration.whitespace(), Whitespace::Skip);
        assert_eq!(configuration.output_format(), OutputFormat::Text);
        assert!(!configuration.verbose());
        assert_eq!(configuration.log_interval(), 10000);
    }

    #[test]
    fn overrides() {
        let configuration = configuration(&[
            ("MODE", "decode-check"),
            ("ALPHABET", "ripple"),
            ("BINARY_FORMAT", "utf8"),
            ("VERSION", "5"),
            ("WHITESPACE", "reject"),
            ("OUTPUT", "json"),
            ("VERBOSE", "true"),
            ("LOG_INTERVAL", "10"),
        ])
        .unwrap();
        assert_eq!(configuration.mode(), Mode::DecodeCheck);
        assert_eq!(configuration.alphabet(), AlphabetName::Ripple);
        assert_eq!(configuration.binary_format(), BinaryFormat::Utf8);
        assert_eq!(configuration.version(), Some(5));
        assert_eq!(configuration.whitespace(), Whitespace::Reject);
        assert_eq!(configuration.output_format(), OutputFormat::Json);
        assert!(configuration.verbose());
        assert_eq!(configuration.log_interval(), 10);
    }

    #[test]
    fn invalid_values() {
        assert_eq!(
            configuration(&[("MODE", "compress")]).unwrap_err().message(),
            "Invalid MODE compress (Unknown mode compress)"
        );
        assert!(configuration(&[("MODE", "encode-check"), ("VERSION", "256")]).is_err());
        assert_eq!(
            configuration(&[("VERSION", "0")]).unwrap_err().message(),
            "VERSION is not supported in mode encode"
        );
    }
}
