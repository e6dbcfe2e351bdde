//! The book records served by the API and the [`Catalog`] holding them.

/// A single book. Immutable once constructed.
///
/// The `id` is opaque: it happens to look numeric for the built-in records, but it is only ever
/// compared as a string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Book {
    /// Identifier, unique within a catalog.
    pub id: &'static str,
    /// The title of the book.
    pub title: &'static str,
    /// The person who authored the book.
    pub author: &'static str,
    /// Year of publication. Not validated.
    pub year: i32,
}

/// The records served by [`Catalog::builtin`].
static BOOKS: [Book; 9] = [
    Book {
        id: "1",
        title: "The Awakening",
        author: "Kate Chopin",
        year: 1894,
    },
    Book {
        id: "2",
        title: "City of Glass",
        author: "Paul Auster",
        year: 1925,
    },
    Book {
        id: "3",
        title: "Infinite Jest",
        author: "David Foster Wallace",
        year: 1996,
    },
    Book {
        id: "4",
        title: "Pet Semetary",
        author: "Stephen King",
        year: 1989,
    },
    Book {
        id: "5",
        title: "Der Mann ohne Eigenschaften",
        author: "Robert Musil",
        year: 1930,
    },
    Book {
        id: "6",
        title: "Master i Margerita",
        author: "Mikhail Bulgakov",
        year: 1967,
    },
    Book {
        id: "7",
        title: "Die Schachnovelle",
        author: "Stefan Zweig",
        year: 1943,
    },
    Book {
        id: "8",
        title: "Le Petit Prince",
        author: "Antoine de Saint-Exupéry",
        year: 1943,
    },
    Book {
        id: "9",
        title: "Ein paar Leute suchen das Glück und lachen sich tot",
        author: "Sibylle Berg",
        year: 1997,
    },
];

/// An ordered, read-only collection of books.
///
/// A catalog only borrows its records, so copies are cheap and can be shared freely between
/// requests. Nothing can write through it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Catalog {
    /// The records, in insertion order.
    books: &'static [Book],
}

impl Catalog {
    /// The catalog of nine books the service is built around.
    #[inline]
    #[must_use]
    pub const fn builtin() -> Self {
        Self { books: &BOOKS }
    }

    /// Create a catalog over an arbitrary static slice of books. Uniqueness of ids is not
    /// checked.
    #[inline]
    #[must_use]
    pub const fn from_static(books: &'static [Book]) -> Self {
        Self { books }
    }

    /// All books, in insertion order. The same slice is returned on every call.
    #[inline]
    #[must_use]
    pub const fn all(&self) -> &'static [Book] {
        self.books
    }

    /// The number of books in the catalog.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalog holds no books at all.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl Default for Catalog {
    #[inline]
    fn default() -> Self {
        Self::builtin()
    }
}
