//! Hint matrix construction, narrowing, and caching

mod cache;
mod matrix;

pub use cache::{
    CacheKey, CacheStatus, CacheStore, FsCacheStore, MemoryCacheStore, decode, encode,
    load_or_build,
};
pub use matrix::{HintMatrix, Row};
