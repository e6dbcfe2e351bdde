//! The HTTP layer: an `axum` application exposing the schema.
//!
//! A single path serves both the GraphQL endpoint (`POST`) and a GraphiQL landing page (`GET`)
//! that talks to it.

use crate::{errors::ServeError, schema::BookSchema};
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Router, extract::State, response::Html, routing::get, serve};
use std::{future::pending, net::SocketAddr};
use tokio::{net::TcpListener, signal::ctrl_c};
use tracing::{debug, info, warn};

/// The path of the GraphQL endpoint and landing page.
pub const ENDPOINT: &str = "/";

/// Execute a single GraphQL request.
async fn graphql_handler(
    State(schema): State<BookSchema>,
    graphql_request: GraphQLRequest,
) -> GraphQLResponse {
    let request = graphql_request.into_inner();
    debug!(
        operation = request.operation_name.as_deref().unwrap_or("<anonymous>"),
        "Executing GraphQL request"
    );
    let response = schema.execute(request).await;
    if response.is_err() {
        debug!(errors = response.errors.len(), "GraphQL request returned errors");
    }
    response.into()
}

/// Serve the GraphiQL IDE, pointed at [`ENDPOINT`].
async fn landing_page() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(ENDPOINT).finish())
}

/// Builder function for the router.
#[inline]
pub fn build_app(schema: BookSchema) -> Router {
    Router::new()
        .route(ENDPOINT, get(landing_page).post(graphql_handler))
        .with_state(schema)
}

/// Resolves once the process receives Ctrl-C. If the signal handler cannot be installed, it never
/// resolves.
#[inline]
pub async fn shutdown_signal() {
    match ctrl_c().await {
        Ok(()) => info!("Shutting down"),
        Err(err) => {
            warn!(%err, "Unable to listen for the shutdown signal");
            pending::<()>().await;
        },
    }
}

/// A bound, not yet running server.
#[derive(Debug)]
pub struct Server {
    /// The bound listener.
    listener: TcpListener,
    /// The application to serve.
    app: Router,
    /// The address actually bound, which differs from the requested one for port `0`.
    addr: SocketAddr,
}

impl Server {
    /// Bind a listener on `addr` serving `schema`.
    ///
    /// # Errors
    ///
    /// Returns [`ServeError::Bind`] if the address cannot be bound and
    /// [`ServeError::LocalAddr`] if the bound address cannot be read back.
    #[inline]
    pub async fn bind(addr: SocketAddr, schema: BookSchema) -> Result<Self, ServeError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServeError::Bind { addr, source })?;
        let local = listener
            .local_addr()
            .map_err(|source| ServeError::LocalAddr { addr, source })?;
        debug!(%local, "Listener bound");

        Ok(Self {
            listener,
            app: build_app(schema),
            addr: local,
        })
    }

    /// The address the listener is bound to.
    #[inline]
    #[must_use]
    pub const fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// The URL clients should use.
    #[inline]
    #[must_use]
    pub fn url(&self) -> String {
        format!("http://{}{ENDPOINT}", self.addr)
    }

    /// Serve requests until `shutdown` resolves, then finish in-flight requests and return.
    ///
    /// # Errors
    ///
    /// Returns [`ServeError::Serve`] if the server stops with an IO error.
    #[inline]
    pub async fn run_until<F>(self, shutdown: F) -> Result<(), ServeError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!("Server ready at {}", self.url());
        let addr = self.addr;
        serve(self.listener, self.app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|source| ServeError::Serve { addr, source })
    }

    /// Serve requests until the process receives Ctrl-C.
    ///
    /// # Errors
    ///
    /// Delegates errors returned by [`run_until`](Self::run_until).
    #[inline]
    pub async fn run(self) -> Result<(), ServeError> {
        self.run_until(shutdown_signal()).await
    }
}
