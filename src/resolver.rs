//! The [`BookResolver`] trait.

use crate::catalog::{Book, Catalog};

/// Answers the two query shapes the API supports.
///
/// Both methods are pure and synchronous. Neither can fail: a lookup miss is a normal outcome and
/// is represented by [`None`].
pub trait BookResolver {
    /// Every book, in catalog order.
    fn books(&self) -> &[Book];

    /// The first book whose id equals `id` exactly. Ids are compared as strings, so `"01"` does
    /// not match `"1"`.
    #[inline]
    fn book(&self, id: &str) -> Option<&Book> {
        self.books().iter().find(|book| book.id == id)
    }
}

impl BookResolver for Catalog {
    #[inline]
    fn books(&self) -> &[Book] {
        self.all()
    }
}
