use smallvec::SmallVec;

/// Reserved key under which regex-form captures are exposed.
pub const CAPTURE_KEY: &str = ":capture";
/// Reserved key under which wildcard captures are exposed.
pub const ARG_KEY: &str = ":arg";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    named: SmallVec<[(String, String); 4]>,
    captures: Option<Vec<String>>,
    args: Option<Vec<String>>,
}

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_captures(captures: Vec<String>) -> Self {
        Self {
            captures: Some(captures),
            ..Self::default()
        }
    }

    pub(crate) fn with_args(args: Vec<String>) -> Self {
        Self {
            args: Some(args),
            ..Self::default()
        }
    }

    /// Binds `name`, replacing an earlier binding of the same name.
    pub(crate) fn bind(&mut self, name: &str, value: &str) {
        match self.named.iter_mut().find(|(existing, _)| existing == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.named.push((name.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.named
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Looks up one of the reserved list keys, `:capture` or `:arg`.
    pub fn list(&self, key: &str) -> Option<&[String]> {
        match key {
            CAPTURE_KEY => self.captures(),
            ARG_KEY => self.args(),
            _ => None,
        }
    }

    /// Regex capture groups in order. A group that did not participate in the
    /// match is reported as `""`, trailing optional groups included.
    pub fn captures(&self) -> Option<&[String]> {
        self.captures.as_deref()
    }

    pub fn args(&self) -> Option<&[String]> {
        self.args.as_deref()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.named
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.named.len() + usize::from(self.captures.is_some()) + usize::from(self.args.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
