use crate::pattern::PatternError;
use crate::router::RouterOptionsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("route list is empty; nothing to dispatch against")]
    EmptyRouteTable,
    #[error(transparent)]
    InvalidPattern(#[from] PatternError),
    #[error("unknown HTTP method token '{token}' for pattern '{pattern}'")]
    UnknownMethod { token: String, pattern: String },
    #[error("route '{pattern}' must accept at least one HTTP method")]
    EmptyMethodSet { pattern: String },
    #[error("route limit of {limit} reached; cannot register '{pattern}'")]
    MaxRoutesExceeded { limit: usize, pattern: String },
    #[error("redirect from '{from}' needs a 3xx status (got {status})")]
    InvalidRedirectStatus { from: String, status: u16 },
    #[error("no route matched for method {method} and path '{path}'")]
    RouteNotFound { method: String, path: String },
    #[error(transparent)]
    Options(#[from] RouterOptionsError),
}

pub type RouterResult<T> = Result<T, RouterError>;
