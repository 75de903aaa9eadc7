//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Random code generation for identifiers and referral codes
//! - Durable key/value storage (in-memory and file-backed)

pub mod crypto;
pub mod storage;
