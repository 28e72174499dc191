mod definition;
mod group;
mod handler;

pub use definition::{OutputBuffering, Route};
pub use group::{GroupScope, RouteGroup};
pub(crate) use group::run_group;
pub use handler::{LOCATION_HEADER, Redirect, RouteHandler};
