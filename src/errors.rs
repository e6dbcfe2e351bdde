//! Error types used when serving the API.
//!
//! The catalog and resolvers themselves cannot fail; only the HTTP layer around them can.

use std::{io::Error as IoError, net::SocketAddr};
use thiserror::Error;

/// Errors that may occur when starting or running the server.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ServeError {
    /// The listener could not be bound to the requested address.
    #[error("Unable to bind {addr}: {source}")]
    Bind {
        /// The address that was requested.
        addr: SocketAddr,
        /// The source error.
        #[source]
        source: IoError,
    },
    /// The listener was bound, but its local address could not be read.
    #[error("Unable to read the local address of the listener on {addr}: {source}")]
    LocalAddr {
        /// The address that was requested.
        addr: SocketAddr,
        /// The source error.
        #[source]
        source: IoError,
    },
    /// The server stopped with an error after it was started.
    #[error("The server on {addr} stopped unexpectedly: {source}")]
    Serve {
        /// The address the server was bound to.
        addr: SocketAddr,
        /// The source error.
        #[source]
        source: IoError,
    },
}
