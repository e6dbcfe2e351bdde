//! Command line and environment configuration.

use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Configuration of the `bookshelf` binary. Every option can also be given through the
/// environment.
#[derive(Clone, Debug, Parser, PartialEq, Eq)]
#[command(name = "bookshelf", version, about = "Serve a catalog of books over GraphQL")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "BOOKSHELF_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,
    /// Port to listen on. `0` picks any free port.
    #[arg(long, short, env = "BOOKSHELF_PORT", default_value_t = 4000)]
    pub port: u16,
    /// Log at debug level unless `RUST_LOG` says otherwise.
    #[arg(long, short, env = "BOOKSHELF_VERBOSE")]
    pub verbose: bool,
    /// Print the schema definition and exit instead of serving.
    #[arg(long)]
    pub print_schema: bool,
}

impl Config {
    /// The address the server should bind to.
    #[inline]
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
