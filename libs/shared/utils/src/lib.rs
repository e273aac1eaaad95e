pub mod cors;

pub use cors::{origin_filter, AllowedOrigins};
