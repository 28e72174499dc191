pub type RouteId = u32;
pub type Priority = i32;
pub type StaticString = &'static str;
