pub mod enums;
pub mod errors;
pub mod matcher;
pub mod path;
pub mod pattern;
pub mod route;
pub mod router;
mod shared;
pub mod types;

pub use enums::{HttpMethod, MethodSet};
pub use errors::{RouterError, RouterResult};
pub use matcher::{ARG_KEY, CAPTURE_KEY, MatchStrategy, RouteParams};
pub use route::{GroupScope, OutputBuffering, Redirect, Route, RouteGroup, RouteHandler};
pub use router::{
    Request, RouteMatch, RouteRegistrar, RouteRequest, Router, RouterOptions,
    RouterOptionsBuilder, RouterOptionsError,
};
pub use shared::SharedRouter;
pub use types::{Priority, RouteId};
