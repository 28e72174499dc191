use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("route pattern is empty")]
    Empty,
    #[error("regex pattern '{pattern}' does not compile")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("wildcard pattern '{pattern}' does not compile")]
    InvalidWildcard {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("parameter segment {index} of pattern '{pattern}' is missing a name")]
    ParameterMissingName { pattern: String, index: usize },
    #[error("parameter name '{name}' appears more than once in pattern '{pattern}'")]
    DuplicateParamName { pattern: String, name: String },
}

pub type PatternResult<T> = Result<T, PatternError>;
