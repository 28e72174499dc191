mod normalize;

pub use normalize::{normalize_request_path, path_segments, strip_query_and_fragment};
