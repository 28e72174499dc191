use crate::pattern::{CompileOptions, DEFAULT_REGEX_DELIMITER};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouterOptions {
    pub regex_delimiter: char,
    pub validate_regex: bool,
    pub max_routes: Option<usize>,
    pub debug: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            regex_delimiter: DEFAULT_REGEX_DELIMITER,
            validate_regex: true,
            max_routes: None,
            debug: false,
        }
    }
}

impl RouterOptions {
    pub fn builder() -> RouterOptionsBuilder {
        RouterOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterOptionsError> {
        let delimiter = self.regex_delimiter;
        if !delimiter.is_ascii_punctuation() || matches!(delimiter, '/' | '*' | ':') {
            return Err(RouterOptionsError::InvalidRegexDelimiter { delimiter });
        }
        if self.max_routes == Some(0) {
            return Err(RouterOptionsError::MaxRoutesZero);
        }
        Ok(())
    }

    pub(crate) fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            regex_delimiter: self.regex_delimiter,
            validate_regex: self.validate_regex,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterOptionsBuilder {
    options: RouterOptions,
}

impl RouterOptionsBuilder {
    pub fn regex_delimiter(mut self, value: char) -> Self {
        self.options.regex_delimiter = value;
        self
    }

    pub fn validate_regex(mut self, value: bool) -> Self {
        self.options.validate_regex = value;
        self
    }

    pub fn max_routes(mut self, value: usize) -> Self {
        self.options.max_routes = Some(value);
        self
    }

    pub fn debug(mut self, value: bool) -> Self {
        self.options.debug = value;
        self
    }

    pub fn build(self) -> Result<RouterOptions, RouterOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterOptionsError {
    #[error("regex delimiter '{delimiter}' must be ASCII punctuation other than '/', '*' or ':'")]
    InvalidRegexDelimiter { delimiter: char },
    #[error("max_routes must be at least 1")]
    MaxRoutesZero,
}
