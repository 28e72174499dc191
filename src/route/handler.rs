use crate::types::StaticString;

pub const LOCATION_HEADER: StaticString = "Location";

/// What a matched route hands to the caller for invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteHandler<H> {
    Handler(H),
    Redirect(Redirect),
}

impl<H> RouteHandler<H> {
    pub fn as_handler(&self) -> Option<&H> {
        match self {
            RouteHandler::Handler(handler) => Some(handler),
            RouteHandler::Redirect(_) => None,
        }
    }

    pub fn as_redirect(&self) -> Option<&Redirect> {
        match self {
            RouteHandler::Handler(_) => None,
            RouteHandler::Redirect(redirect) => Some(redirect),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Redirect {
    location: String,
    status: u16,
}

impl Redirect {
    pub const DEFAULT_STATUS: u16 = 302;

    pub(crate) fn new(location: String, status: u16) -> Self {
        Self { location, status }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> [(StaticString, &str); 1] {
        [(LOCATION_HEADER, self.location.as_str())]
    }

    pub(crate) fn is_valid_status(status: u16) -> bool {
        (300..400).contains(&status)
    }
}
