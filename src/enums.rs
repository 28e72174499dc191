use bitflags::bitflags;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const HTTP_METHOD_COUNT: usize = 7;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum HttpMethod {
    Get = 0,
    Post = 1,
    Put = 2,
    Delete = 3,
    Patch = 4,
    Head = 5,
    Options = 6,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; HTTP_METHOD_COUNT] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
        HttpMethod::Options,
        HttpMethod::Head,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }

    /// Parses a method token case-insensitively, for route registration.
    pub fn from_token(token: &str) -> Option<Self> {
        HttpMethod::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(token))
    }

    /// Parses a request method exactly as sent on the wire.
    pub fn from_request_token(token: &str) -> Option<Self> {
        HttpMethod::ALL
            .into_iter()
            .find(|method| method.as_str() == token)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpMethod::from_token(s).ok_or_else(|| UnknownMethod(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown HTTP method token '{0}'")]
pub struct UnknownMethod(pub String);

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MethodSet: u8 {
        const GET = 1 << HttpMethod::Get as u8;
        const POST = 1 << HttpMethod::Post as u8;
        const PUT = 1 << HttpMethod::Put as u8;
        const DELETE = 1 << HttpMethod::Delete as u8;
        const PATCH = 1 << HttpMethod::Patch as u8;
        const HEAD = 1 << HttpMethod::Head as u8;
        const OPTIONS = 1 << HttpMethod::Options as u8;
    }
}

impl MethodSet {
    pub fn contains_method(&self, method: HttpMethod) -> bool {
        self.contains(MethodSet::from(method))
    }

    pub fn methods(&self) -> impl Iterator<Item = HttpMethod> + '_ {
        HttpMethod::ALL
            .into_iter()
            .filter(|method| self.contains_method(*method))
    }
}

impl From<HttpMethod> for MethodSet {
    fn from(method: HttpMethod) -> Self {
        MethodSet::from_bits_retain(1 << method as u8)
    }
}

impl FromIterator<HttpMethod> for MethodSet {
    fn from_iter<I: IntoIterator<Item = HttpMethod>>(iter: I) -> Self {
        iter.into_iter()
            .fold(MethodSet::empty(), |set, method| set | MethodSet::from(method))
    }
}

impl From<&[HttpMethod]> for MethodSet {
    fn from(methods: &[HttpMethod]) -> Self {
        methods.iter().copied().collect()
    }
}

impl<const N: usize> From<[HttpMethod; N]> for MethodSet {
    fn from(methods: [HttpMethod; N]) -> Self {
        methods.into_iter().collect()
    }
}

impl From<Vec<HttpMethod>> for MethodSet {
    fn from(methods: Vec<HttpMethod>) -> Self {
        methods.into_iter().collect()
    }
}
