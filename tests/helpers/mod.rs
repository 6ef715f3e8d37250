//! Test helpers module
//!
//! Row fixtures, an in-memory store, and PostgreSQL setup shared by the
//! integration tests.

#![allow(dead_code)]

pub mod database_helper;
pub mod memory_store;
pub mod test_data;

pub use database_helper::*;
pub use memory_store::*;
pub use test_data::*;
