//! HTTP request handlers for the drivers and videos API
//!
//! Every handler follows the same pipeline: parse the id, look the record up,
//! validate the body, mutate the store, map the result. Only the store
//! mutation has side effects; a rejected request leaves the store untouched.

pub mod drivers;
pub mod testing;
pub mod videos;

/// Liveness greeting at `GET /`
#[utoipa::path(get, path = "/", tag = "meta", responses((status = 200, body = String)))]
pub async fn hello() -> &'static str {
    "hello world!!!"
}

/// Path ids that are not integers can never match a record.
fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
