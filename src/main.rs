//! The `bookshelf` server binary.

use async_graphql as _;
use async_graphql_axum as _;
use axum as _;
use bookshelf::{Catalog, Config, build_schema, errors::ServeError, logging, schema, server::Server};
use clap::Parser as _;
#[cfg(test)]
use reqwest as _;
#[cfg(test)]
use serde_json as _;
use thiserror as _;
use tracing::info;
use tracing_subscriber as _;

#[tokio::main]
async fn main() -> Result<(), ServeError> {
    let config = Config::parse();

    if config.print_schema {
        println!("{}", schema::sdl());
        return Ok(());
    }

    logging::init(config.verbose);

    let catalog = Catalog::builtin();
    info!(books = catalog.len(), "Catalog loaded");

    Server::bind(config.socket_addr(), build_schema(catalog))
        .await?
        .run()
        .await
}
