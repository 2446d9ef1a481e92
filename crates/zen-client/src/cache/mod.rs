mod cache_entry;
mod ttl_cache;

pub use cache_entry::CacheEntry;
pub use ttl_cache::TtlCache;
