//! Source catalog
//!
//! Discovers the book identifiers advertised by the root page's navigation
//! menus and maps document links to `Source` entries.
//!
//! The book list is fetched at most once per catalog: concurrent first
//! callers share a single in-flight root-page fetch and every caller sees
//! the same set afterwards. There is no invalidation.

mod books;
mod resolve;

pub use books::extract_book_ids;
pub use resolve::{book_segment, derive_source_key, resolve_source};

use crate::fetcher::Fetcher;
use crate::model::Source;
use crate::HarvestError;
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Catalog of books published in the reference document
#[derive(Debug)]
pub struct BookCatalog {
    fetcher: Arc<Fetcher>,
    menu_class: String,
    books: OnceCell<BTreeSet<String>>,
}

impl BookCatalog {
    /// Creates a catalog reading navigation menus marked with `menu_class`
    pub fn new(fetcher: Arc<Fetcher>, menu_class: impl Into<String>) -> Self {
        Self {
            fetcher,
            menu_class: menu_class.into(),
            books: OnceCell::new(),
        }
    }

    /// Returns the book identifiers linked from the root page
    ///
    /// The first call fetches the root document; later calls return the
    /// cached set. A failed fetch is not cached, so the next call retries.
    pub async fn list_books(&self) -> Result<&BTreeSet<String>, HarvestError> {
        self.books
            .get_or_try_init(|| async {
                let root = self.fetcher.fetch("").await?;
                let books = extract_book_ids(&root, &self.menu_class, self.fetcher.base_path());
                tracing::info!("Discovered {} books in the navigation menu", books.len());
                Ok::<_, HarvestError>(books)
            })
            .await
    }

    /// Returns true once the book list has been populated
    pub fn is_loaded(&self) -> bool {
        self.books.initialized()
    }

    /// Maps a document link to its source book
    ///
    /// See [`resolve_source`] for the rules.
    pub fn resolve_source(&self, href: &str) -> Result<Option<Source>, HarvestError> {
        resolve_source(href, self.fetcher.base_url())
    }
}
