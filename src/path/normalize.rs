use std::borrow::Cow;

/// Rewrites a request path so it begins with exactly one `/`.
#[inline]
#[tracing::instrument(level = "trace", skip(path), fields(path_len = path.len() as u64))]
pub fn normalize_request_path(path: &str) -> Cow<'_, str> {
    let trimmed = path.trim_start_matches('/');

    if trimmed.len() + 1 == path.len() {
        return Cow::Borrowed(path);
    }

    let mut output = String::with_capacity(trimmed.len() + 1);
    output.push('/');
    output.push_str(trimmed);
    Cow::Owned(output)
}

pub fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    let rest = path.strip_prefix('/').unwrap_or(path);
    rest.split('/')
}

pub fn strip_query_and_fragment(target: &str) -> &str {
    match memchr::memchr2(b'?', b'#', target.as_bytes()) {
        Some(end) => &target[..end],
        None => target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepends_slash_when_missing() {
        assert_eq!(normalize_request_path("users/list"), "/users/list");
    }

    #[test]
    fn collapses_leading_slashes_only() {
        let normalized = normalize_request_path("///files//img/");
        assert_eq!(normalized, "/files//img/");
    }

    #[test]
    fn borrows_when_already_normalized() {
        let normalized = normalize_request_path("/already/fine");
        assert!(matches!(normalized, Cow::Borrowed("/already/fine")));
    }

    #[test]
    fn empty_path_becomes_root() {
        assert_eq!(normalize_request_path(""), "/");
        assert_eq!(normalize_request_path("//"), "/");
    }

    #[test]
    fn segments_skip_leading_empty_segment() {
        let segments: Vec<_> = path_segments("/user/17/edit").collect();
        assert_eq!(segments, vec!["user", "17", "edit"]);
    }

    #[test]
    fn segments_keep_trailing_empty_segment() {
        let segments: Vec<_> = path_segments("/user/").collect();
        assert_eq!(segments, vec!["user", ""]);
    }

    #[test]
    fn root_has_single_empty_segment() {
        let segments: Vec<_> = path_segments("/").collect();
        assert_eq!(segments, vec![""]);
    }

    #[test]
    fn strips_query_and_fragment() {
        assert_eq!(strip_query_and_fragment("/a/b?x=1#top"), "/a/b");
        assert_eq!(strip_query_and_fragment("/a/b#top"), "/a/b");
        assert_eq!(strip_query_and_fragment("/a/b"), "/a/b");
    }
}
