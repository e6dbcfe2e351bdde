//! The GraphQL schema: the `Book` object type, the `Query` root and the schema builder.
//!
//! Every field of the schema is nullable, matching the published contract:
//!
//! ```graphql
//! type Book {
//!   id: String
//!   title: String
//!   author: String
//!   year: Int
//! }
//!
//! type Query {
//!   books: [Book]
//!   book(id: ID!): Book
//! }
//! ```
//!
//! The resolvers never actually produce a null where the schema allows one, except for a
//! `book` lookup miss.

use crate::{
    catalog::{Book, Catalog},
    resolver::BookResolver as _,
};
use async_graphql::{EmptyMutation, EmptySubscription, ID, Object, Schema};
use tracing::debug;

/// The executable schema served by the API.
pub type BookSchema = Schema<Query, EmptyMutation, EmptySubscription>;

// NOTE: Doc comments on the resolver methods would end up as descriptions in the SDL, so the
// object impls below only use plain comments.

#[Object]
impl Book {
    async fn id(&self) -> Option<&str> {
        Some(self.id)
    }

    async fn title(&self) -> Option<&str> {
        Some(self.title)
    }

    async fn author(&self) -> Option<&str> {
        Some(self.author)
    }

    async fn year(&self) -> Option<i32> {
        Some(self.year)
    }
}

/// The query root. Reads from a single [`Catalog`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Query {
    /// The books served by this root.
    catalog: Catalog,
}

impl Query {
    /// Create a query root over the given catalog.
    #[inline]
    #[must_use]
    pub const fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

#[Object]
impl Query {
    // `[Book]` allows a null list and null entries; neither is produced.
    async fn books(&self) -> Option<Vec<Option<Book>>> {
        Some(self.catalog.books().iter().copied().map(Some).collect())
    }

    // `ID` serializes as a string and is compared as one, even when it looks numeric.
    async fn book(&self, id: ID) -> Option<Book> {
        let book = self.catalog.book(&id).copied();
        debug!(id = %id.as_str(), found = book.is_some(), "resolved book");
        book
    }
}

/// Build the schema over the given catalog.
#[inline]
#[must_use]
pub fn build_schema(catalog: Catalog) -> BookSchema {
    Schema::build(Query::new(catalog), EmptyMutation, EmptySubscription).finish()
}

/// The schema definition language rendering of the schema.
#[inline]
#[must_use]
pub fn sdl() -> String {
    build_schema(Catalog::builtin()).sdl()
}
