pub mod kv;
pub mod seed;
pub mod store;

pub use kv::{FileKv, KvStore, MemoryKv};
pub use store::{SiteStore, SITES_KEY};
