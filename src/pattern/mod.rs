mod compiled;
mod error;
mod segment;

pub use compiled::{CompileOptions, CompiledPattern, DEFAULT_REGEX_DELIMITER, is_regex_form};
pub use error::{PatternError, PatternResult};
pub use segment::{NamedSegment, NamedSegments, parse_named_segments};
