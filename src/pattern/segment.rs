use smallvec::SmallVec;

use super::{PatternError, PatternResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamedSegment {
    Literal(String),
    Param { name: String },
}

pub type NamedSegments = SmallVec<[NamedSegment; 4]>;

#[tracing::instrument(level = "trace", skip(pattern), fields(pattern = %pattern))]
pub fn parse_named_segments(pattern: &str, strict: bool) -> PatternResult<NamedSegments> {
    let mut segments = NamedSegments::new();

    for (index, part) in pattern.split('/').skip(1).enumerate() {
        match part.strip_prefix(':') {
            Some(name) => {
                if strict {
                    if name.is_empty() {
                        return Err(PatternError::ParameterMissingName {
                            pattern: pattern.to_string(),
                            index,
                        });
                    }
                    let seen = segments.iter().any(|segment| {
                        matches!(segment, NamedSegment::Param { name: existing } if existing == name)
                    });
                    if seen {
                        return Err(PatternError::DuplicateParamName {
                            pattern: pattern.to_string(),
                            name: name.to_string(),
                        });
                    }
                }
                segments.push(NamedSegment::Param {
                    name: name.to_string(),
                });
            }
            None => segments.push(NamedSegment::Literal(part.to_string())),
        }
    }

    Ok(segments)
}
