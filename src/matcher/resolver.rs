use crate::pattern::{CompiledPattern, NamedSegment};

use super::RouteParams;

/// The strategy that produced a match, in the order strategies are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum MatchStrategy {
    Exact,
    Regex,
    Wildcard,
    Named,
}

/// `path` must already be normalized; `segments` excludes the leading empty one.
#[tracing::instrument(level = "trace", skip(pattern, path, segments), fields(pattern = %pattern.as_str(), path = %path))]
pub fn match_pattern(
    pattern: &CompiledPattern,
    path: &str,
    segments: &[&str],
) -> Option<(MatchStrategy, RouteParams)> {
    if pattern.as_str() == path {
        return Some((MatchStrategy::Exact, RouteParams::new()));
    }

    if let Some(regex) = pattern.regex()
        && let Some(captures) = regex.captures(path)
    {
        let list = captures
            .iter()
            .skip(1)
            .map(|group| group.map_or_else(String::new, |m| m.as_str().to_string()))
            .collect();
        return Some((MatchStrategy::Regex, RouteParams::with_captures(list)));
    }

    if let Some(wildcard) = pattern.wildcard()
        && let Some(captures) = wildcard.captures(path)
    {
        let list = captures
            .iter()
            .skip(1)
            .map(|group| group.map_or_else(String::new, |m| m.as_str().to_string()))
            .collect();
        return Some((MatchStrategy::Wildcard, RouteParams::with_args(list)));
    }

    if let Some(named) = pattern.named_segments() {
        return match_named(named, segments).map(|params| (MatchStrategy::Named, params));
    }

    None
}

fn match_named(named: &[NamedSegment], segments: &[&str]) -> Option<RouteParams> {
    if named.len() != segments.len() {
        return None;
    }

    let mut params = RouteParams::new();
    for (part, value) in named.iter().zip(segments) {
        match part {
            NamedSegment::Param { name } => params.bind(name, value),
            NamedSegment::Literal(literal) => {
                if literal.as_str() != *value {
                    return None;
                }
            }
        }
    }

    Some(params)
}
