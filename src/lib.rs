//! A read-only GraphQL API over a fixed catalog of books.
//!
//! The [`Catalog`] holds the records, the [`BookResolver`] trait answers the two supported
//! queries (`books` and `book(id)`), and [`schema`] binds both to an `async-graphql` schema. The
//! [`server`] module wraps that schema in an `axum` application.

// `reqwest` is only used by the integration tests.
#[cfg(test)]
use reqwest as _;

pub mod catalog;
pub use catalog::{Book, Catalog};

pub mod resolver;
pub use resolver::BookResolver;

pub mod schema;
pub use schema::{BookSchema, build_schema};

pub mod config;
pub use config::Config;

pub mod errors;
pub mod logging;
pub mod server;
