//! Domains module containing business logic organized by bounded contexts.
//!
//! The server exposes a single bounded context, market-data tools.

pub mod tools;
