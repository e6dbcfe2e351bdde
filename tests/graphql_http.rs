//! End-to-end tests of the GraphQL endpoint over HTTP.

// Silence unused-crate-dependencies lint for the test crate
use async_graphql as _;
use async_graphql_axum as _;
use axum as _;
use bookshelf as _;
use clap as _;
use reqwest as _;
use serde_json as _;
use thiserror as _;
use tokio as _;
use tracing as _;
use tracing_subscriber as _;

#[cfg(test)]
mod tests {
    use bookshelf::{Catalog, build_schema, server::Server};
    use reqwest::{Client, StatusCode, header::CONTENT_TYPE};
    use serde_json::{Value, json};
    use std::{
        future::pending,
        net::{IpAddr, Ipv4Addr, SocketAddr},
    };

    /// Start a server on a random port and return the URL of its endpoint.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot bind to a local port.
    async fn spawn_app() -> String {
        let server = Server::bind(
            SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0),
            build_schema(Catalog::builtin()),
        )
        .await
        .expect("Failed to bind random port");
        let url = server.url();
        drop(tokio::spawn(async move {
            server
                .run_until(pending())
                .await
                .expect("Server failed to start");
        }));

        url
    }

    /// Post a GraphQL request body and return the decoded JSON response.
    ///
    /// # Panics
    ///
    /// Panics if the request fails, the status is not 200 OK or the body is not JSON.
    async fn post(url: &str, body: Value) -> Value {
        let response = Client::new()
            .post(url)
            .json(&body)
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), StatusCode::OK);

        response
            .json()
            .await
            .expect("Failed to parse the response")
    }

    #[tokio::test]
    async fn list_books() {
        let url = spawn_app().await;
        let body = post(&url, json!({ "query": "{ books { id title } }" })).await;

        assert!(body.get("errors").is_none(), "{body}");
        let books = body["data"]["books"]
            .as_array()
            .expect("`books` is not a list");
        assert_eq!(books.len(), 9);
        assert_eq!(books[0], json!({ "id": "1", "title": "The Awakening" }));
        assert_eq!(
            books[8],
            json!({
                "id": "9",
                "title": "Ein paar Leute suchen das Glück und lachen sich tot",
            })
        );
    }

    #[tokio::test]
    async fn fetch_single_book() {
        let url = spawn_app().await;
        let body = post(
            &url,
            json!({ "query": r#"{ book(id: "3") { title author year } }"# }),
        )
        .await;

        assert_eq!(
            body["data"],
            json!({
                "book": {
                    "title": "Infinite Jest",
                    "author": "David Foster Wallace",
                    "year": 1996,
                }
            })
        );
    }

    #[tokio::test]
    async fn fetch_missing_book() {
        let url = spawn_app().await;
        let body = post(
            &url,
            json!({ "query": r#"{ book(id: "nonexistent") { title } }"# }),
        )
        .await;

        assert!(body.get("errors").is_none(), "{body}");
        assert_eq!(body["data"], json!({ "book": null }));
    }

    #[tokio::test]
    async fn fetch_with_variables() {
        let url = spawn_app().await;
        let body = post(
            &url,
            json!({
                "query": "query Find($id: ID!) { book(id: $id) { id year } }",
                "operationName": "Find",
                "variables": { "id": "7" },
            }),
        )
        .await;

        assert_eq!(body["data"], json!({ "book": { "id": "7", "year": 1943 } }));
    }

    #[tokio::test]
    async fn missing_argument_is_an_error() {
        let url = spawn_app().await;
        let body = post(&url, json!({ "query": "{ book { title } }" })).await;

        let errors = body["errors"].as_array().expect("Expected an error list");
        assert!(!errors.is_empty());
        assert!(errors[0]["message"].as_str().is_some_and(|m| m.contains("id")));
    }

    #[tokio::test]
    async fn landing_page() {
        let url = spawn_app().await;
        let response = reqwest::get(&url).await.expect("Failed to send request");
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned);
        assert!(content_type.is_some_and(|value| value.starts_with("text/html")));

        let body = response
            .text()
            .await
            .expect("Failed to retrieve response text");
        assert!(body.to_lowercase().contains("graphiql"));
    }
}
