use std::{error, fmt};

/// A command-line failure described by a message.
#[derive(Debug)]
pub struct Error {
    message: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn missing_var(key: &str) -> Self {
        Self::new(format!("Missing {}", key))
    }

    pub fn invalid_var(key: &str, value: &str, cause: impl fmt::Display) -> Self {
        Self::new(format!("Invalid {} {} ({})", key, value, cause))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", &self.message)
    }
}

impl error::Error for Error {}
