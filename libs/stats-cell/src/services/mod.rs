pub mod cache;
pub mod resolver;

pub use cache::{DatasetCache, DEFAULT_TTL};
pub use resolver::StatsResolver;
