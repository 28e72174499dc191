use regex::Regex;

use super::segment::{NamedSegments, parse_named_segments};
use super::{PatternError, PatternResult};

pub const DEFAULT_REGEX_DELIMITER: char = '#';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    pub regex_delimiter: char,
    pub validate_regex: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            regex_delimiter: DEFAULT_REGEX_DELIMITER,
            validate_regex: true,
        }
    }
}

/// A pattern is regex-form only when it both starts and ends with the delimiter.
#[inline]
pub fn is_regex_form(pattern: &str, delimiter: char) -> bool {
    pattern.len() >= 2 * delimiter.len_utf8()
        && pattern.starts_with(delimiter)
        && pattern.ends_with(delimiter)
}

#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    regex_form: bool,
    regex: Option<Regex>,
    wildcard: Option<Regex>,
    named: Option<NamedSegments>,
}

impl CompiledPattern {
    #[tracing::instrument(level = "trace", skip(pattern, options), fields(pattern = %pattern))]
    pub fn compile(pattern: &str, options: &CompileOptions) -> PatternResult<Self> {
        if pattern.is_empty() {
            return Err(PatternError::Empty);
        }

        let regex_form = is_regex_form(pattern, options.regex_delimiter);
        let regex = if regex_form {
            compile_regex_form(pattern, options)?
        } else {
            None
        };

        let wildcard = if memchr::memchr(b'*', pattern.as_bytes()).is_some() {
            Some(compile_wildcard(pattern)?)
        } else {
            None
        };

        let named = if memchr::memchr(b':', pattern.as_bytes()).is_some() {
            Some(parse_named_segments(pattern, !regex_form)?)
        } else {
            None
        };

        Ok(Self {
            source: pattern.to_string(),
            regex_form,
            regex,
            wildcard,
            named,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_regex_form(&self) -> bool {
        self.regex_form
    }

    pub fn regex(&self) -> Option<&Regex> {
        self.regex.as_ref()
    }

    pub fn wildcard(&self) -> Option<&Regex> {
        self.wildcard.as_ref()
    }

    pub fn named_segments(&self) -> Option<&NamedSegments> {
        self.named.as_ref()
    }
}

fn compile_regex_form(pattern: &str, options: &CompileOptions) -> PatternResult<Option<Regex>> {
    let width = options.regex_delimiter.len_utf8();
    let body = &pattern[width..pattern.len() - width];

    match Regex::new(body) {
        Ok(regex) => Ok(Some(regex)),
        Err(source) if options.validate_regex => Err(PatternError::InvalidRegex {
            pattern: pattern.to_string(),
            source,
        }),
        Err(source) => {
            tracing::event!(
                tracing::Level::WARN,
                pattern = %pattern,
                error = %source,
                "regex route pattern does not compile and will never match"
            );
            Ok(None)
        }
    }
}

fn compile_wildcard(pattern: &str) -> PatternResult<Regex> {
    let expanded = format!("^{}", regex::escape(pattern).replace("\\*", "(.*)"));

    Regex::new(&expanded).map_err(|source| PatternError::InvalidWildcard {
        pattern: pattern.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(pattern: &str) -> CompiledPattern {
        CompiledPattern::compile(pattern, &CompileOptions::default()).unwrap()
    }

    #[test]
    fn literal_pattern_prepares_no_strategies() {
        let compiled = compile("/users/list");
        assert!(!compiled.is_regex_form());
        assert!(compiled.regex().is_none());
        assert!(compiled.wildcard().is_none());
        assert!(compiled.named_segments().is_none());
    }

    #[test]
    fn regex_form_requires_delimiter_on_both_ends() {
        assert!(is_regex_form("#^/page/(\\d+)$#", '#'));
        assert!(!is_regex_form("/page#anchor", '#'));
        assert!(!is_regex_form("#/page", '#'));
        assert!(!is_regex_form("#", '#'));
        assert!(is_regex_form("##", '#'));
    }

    #[test]
    fn regex_form_compiles_interior() {
        let compiled = compile("#^/page/(\\d+)$#");
        let regex = compiled.regex().expect("regex should compile");
        assert!(regex.is_match("/page/42"));
        assert!(!regex.is_match("/page/abc"));
    }

    #[test]
    fn wildcard_is_anchored_at_start_only() {
        let compiled = compile("/files/*");
        let wildcard = compiled.wildcard().expect("wildcard should compile");
        assert_eq!(wildcard.as_str(), "^/files/(.*)");
        assert!(wildcard.is_match("/files/img/logo.png"));
        assert!(!wildcard.is_match("/static/files/x"));
    }

    #[test]
    fn wildcard_escapes_regex_metacharacters() {
        let compiled = compile("/v1.0/*");
        let wildcard = compiled.wildcard().expect("wildcard should compile");
        assert!(wildcard.is_match("/v1.0/a"));
        assert!(!wildcard.is_match("/v1x0/a"));
    }

    #[test]
    fn invalid_regex_is_rejected_when_validating() {
        let err = CompiledPattern::compile("#^/(unclosed$#", &CompileOptions::default())
            .expect_err("expected invalid regex error");
        assert!(matches!(err, PatternError::InvalidRegex { .. }));
    }

    #[test]
    fn invalid_regex_is_kept_without_matcher_when_not_validating() {
        let options = CompileOptions {
            validate_regex: false,
            ..Default::default()
        };
        let compiled = CompiledPattern::compile("#^/(unclosed$#", &options).unwrap();
        assert!(compiled.is_regex_form());
        assert!(compiled.regex().is_none());
    }

    #[test]
    fn regex_form_parses_colons_leniently() {
        let compiled = compile("#^/(?:a|b)/:$#");
        assert!(compiled.named_segments().is_some());
    }

    #[test]
    fn empty_pattern_is_rejected() {
        let err = CompiledPattern::compile("", &CompileOptions::default()).unwrap_err();
        assert!(matches!(err, PatternError::Empty));
    }
}
