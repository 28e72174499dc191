mod params;
pub mod resolver;

pub use params::{ARG_KEY, CAPTURE_KEY, RouteParams};
pub use resolver::{MatchStrategy, match_pattern};
