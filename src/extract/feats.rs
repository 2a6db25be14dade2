use crate::catalog::BookCatalog;
use crate::extract::classify::{classify_source, classify_types, is_data_row};
use crate::fetcher::{child_elements, class_tokens, normalized_text, Fetcher, ParsedDocument};
use crate::loader::{EntityKind, EntityList, Loader};
use crate::model::{Entity, Feat};
use crate::HarvestError;
use async_trait::async_trait;
use scraper::ElementRef;
use std::sync::Arc;

/// Counters for one pass over the feat index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Table rows on the page
    pub rows_seen: usize,
    /// Header rows and rows of other tables
    pub rows_ignored: usize,
    /// Data rows that could not be turned into a feat
    pub rows_skipped: usize,
    /// Feats produced
    pub feats: usize,
    /// Row- and token-level problems recorded
    pub diagnostics: usize,
}

/// Result of parsing the feat index
#[derive(Debug, Default)]
pub struct FeatTable {
    /// Feats in document order
    pub feats: Vec<Feat>,
    /// Row-local problems, in the order they were found
    pub diagnostics: Vec<HarvestError>,
    pub stats: ExtractionStats,
}

/// Parses every feat row of the index document
///
/// # Row layout
///
/// | Column | Content |
/// |--------|---------|
/// | 1 | Feat name, usually wrapped in a link to the feat's page |
/// | 2 | Prerequisites (may be empty) |
/// | 3 | Short description |
///
/// Rows without a `link-book-*` class are not feat rows and are ignored.
/// Rows with fewer than three cells, or with a blank name or description,
/// are skipped with a `MalformedRow` diagnostic.
///
/// # Errors
///
/// Fails if the document cannot be queried, or if a row hits an error that
/// is not confined to that row.
pub fn parse_feat_table(
    document: &ParsedDocument,
    catalog: &BookCatalog,
) -> Result<FeatTable, HarvestError> {
    let rows = document.select("tr")?;
    let mut table = FeatTable::default();

    for (index, row) in rows.into_iter().enumerate() {
        table.stats.rows_seen += 1;

        let classes: Vec<&str> = class_tokens(row).collect();
        if !is_data_row(&classes) {
            table.stats.rows_ignored += 1;
            continue;
        }

        match parse_row(row, index + 1, &classes, catalog, &mut table.diagnostics) {
            Ok(feat) => table.feats.push(feat),
            Err(e) if !e.is_row_local() => return Err(e),
            Err(e) => {
                tracing::warn!("Skipping row: {}", e);
                table.stats.rows_skipped += 1;
                table.diagnostics.push(e);
            }
        }
    }

    table.stats.feats = table.feats.len();
    table.stats.diagnostics = table.diagnostics.len();
    Ok(table)
}

/// Converts one data row into a feat
fn parse_row(
    row: ElementRef<'_>,
    row_number: usize,
    classes: &[&str],
    catalog: &BookCatalog,
    diagnostics: &mut Vec<HarvestError>,
) -> Result<Feat, HarvestError> {
    let cells: Vec<ElementRef<'_>> = child_elements(row).take(3).collect();
    let &[name_cell, prerequisites_cell, description_cell] = cells.as_slice() else {
        return Err(HarvestError::MalformedRow {
            row: row_number,
            message: format!("expected 3 cells, found {}", cells.len()),
        });
    };

    let name = normalized_text(name_cell);
    let prerequisites = normalized_text(prerequisites_cell);
    let description = normalized_text(description_cell);

    let types = classify_types(classes, diagnostics);
    let source = classify_source(name_cell, classes, catalog, diagnostics);

    Feat::new(name, Some(prerequisites), description, types, source).map_err(|e| {
        HarvestError::MalformedRow {
            row: row_number,
            message: e.to_string(),
        }
    })
}

/// Loads all feats from the feat index page
#[derive(Debug, Clone)]
pub struct FeatExtractor {
    fetcher: Arc<Fetcher>,
    catalog: Arc<BookCatalog>,
    index_path: String,
}

impl FeatExtractor {
    /// Creates an extractor reading the index at `index_path` (relative to the base URL)
    pub fn new(
        fetcher: Arc<Fetcher>,
        catalog: Arc<BookCatalog>,
        index_path: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            catalog,
            index_path: index_path.into(),
        }
    }

    /// Fetches the index and parses it, returning feats and diagnostics
    ///
    /// Every call fetches the page again.
    pub async fn extract_table(&self) -> Result<FeatTable, HarvestError> {
        let document = self.fetcher.fetch(&self.index_path).await?;
        let table = parse_feat_table(&document, &self.catalog)?;

        let stats = &table.stats;
        tracing::info!(
            "Feat index: {} rows, {} feats, {} ignored, {} skipped, {} diagnostics",
            stats.rows_seen,
            stats.feats,
            stats.rows_ignored,
            stats.rows_skipped,
            stats.diagnostics
        );

        Ok(table)
    }

    /// Fetches the index and returns its feats in document order
    pub async fn extract_feats(&self) -> Result<Vec<Feat>, HarvestError> {
        Ok(self.extract_table().await?.feats)
    }
}

#[async_trait]
impl Loader for FeatExtractor {
    fn kind(&self) -> EntityKind {
        EntityKind::FEAT
    }

    /// Warms the book catalog so concurrent loaders share one root fetch
    ///
    /// Source resolution does not depend on the book list, so a failed
    /// warm-up is logged and loading proceeds.
    async fn initialize(&self) -> Result<(), HarvestError> {
        if let Err(e) = self.catalog.list_books().await {
            if matches!(e, HarvestError::Cancelled { .. }) {
                return Err(e);
            }
            tracing::warn!("Could not load book catalog: {}", e);
        }
        Ok(())
    }

    async fn load(&self) -> Result<EntityList, HarvestError> {
        let feats = self.extract_feats().await?;
        Ok(feats
            .into_iter()
            .map(|feat| Arc::new(feat) as Arc<dyn Entity>)
            .collect())
    }
}
