//! Bookstore catalog service.
//!
//! The `books` module holds the record store and GraphQL schema; [`bootstrap`]
//! wires it into the kernel registry and HTTP server.

pub mod bootstrap;
pub mod modules;

pub use modules::*;
