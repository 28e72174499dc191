mod options;
mod registrar;
mod request;
mod service;

pub use options::{RouterOptions, RouterOptionsBuilder, RouterOptionsError};
pub use registrar::RouteRegistrar;
pub use request::{Request, RouteRequest};
pub use service::{RouteMatch, Router};
