use crate::path::strip_query_and_fragment;

/// What the router needs from an incoming request.
pub trait RouteRequest {
    fn method(&self) -> &str;

    /// The path matched against route patterns, used as given.
    fn path(&self) -> &str;
}

/// A request built from a method and a raw request target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: String,
    target: String,
}

impl Request {
    pub fn new<M: Into<String>, T: Into<String>>(method: M, target: T) -> Self {
        Self {
            method: method.into(),
            target: target.into(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl RouteRequest for Request {
    fn method(&self) -> &str {
        &self.method
    }

    /// The target up to the first `?` or `#`.
    fn path(&self) -> &str {
        strip_query_and_fragment(&self.target)
    }
}

impl<R: RouteRequest + ?Sized> RouteRequest for &R {
    fn method(&self) -> &str {
        (**self).method()
    }

    fn path(&self) -> &str {
        (**self).path()
    }
}
