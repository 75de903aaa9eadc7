//! Infrastructure Layer
//!
//! Storage adapters for the session store.

pub mod kv;

pub use kv::KvSessionStore;
