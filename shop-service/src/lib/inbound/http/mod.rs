pub mod access_policy;
pub mod api_docs;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod security;
