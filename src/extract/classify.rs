use crate::catalog::BookCatalog;
use crate::fetcher::first_child_element;
use crate::model::{FeatKind, Source};
use crate::HarvestError;
use scraper::ElementRef;
use std::collections::BTreeSet;

/// Class prefix marking a data row and naming its book, e.g. `link-book-apg`
pub const SOURCE_CLASS_PREFIX: &str = "link-book-";

/// Class prefix naming a feat type, e.g. `link-type-item-creation`
pub const TYPE_CLASS_PREFIX: &str = "link-type-";

/// Book code used by technology guide rows whose links are broken
pub const TECHNOLOGY_GUIDE_CODE: &str = "techguide";

/// Returns true if a row with these class tokens holds feat data
pub fn is_data_row(classes: &[&str]) -> bool {
    classes.iter().any(|c| c.starts_with(SOURCE_CLASS_PREFIX))
}

/// Maps every `link-type-*` token to a `FeatKind`
///
/// Unknown tokens are dropped with an `UnknownKindToken` diagnostic.
pub fn classify_types(
    classes: &[&str],
    diagnostics: &mut Vec<HarvestError>,
) -> BTreeSet<FeatKind> {
    let mut types = BTreeSet::new();

    for token in classes {
        let Some(suffix) = token.strip_prefix(TYPE_CLASS_PREFIX) else {
            continue;
        };
        match FeatKind::from_markup(suffix) {
            Some(kind) => {
                types.insert(kind);
            }
            None => {
                tracing::warn!("Unknown feat type token '{}'", token);
                diagnostics.push(HarvestError::UnknownKindToken(token.to_string()));
            }
        }
    }

    types
}

/// Determines the source book of a row
///
/// 1. The link in the name cell, resolved through the catalog
/// 2. The row's `link-book-*` class tokens
///
/// Returns None when neither yields a catalog entry.
pub fn classify_source(
    name_cell: ElementRef<'_>,
    classes: &[&str],
    catalog: &BookCatalog,
    diagnostics: &mut Vec<HarvestError>,
) -> Option<Source> {
    let href = first_child_element(name_cell).and_then(|link| link.value().attr("href"));

    if let Some(href) = href {
        match catalog.resolve_source(href) {
            Ok(Some(source)) => return Some(source),
            Ok(None) => {
                tracing::debug!("Link '{}' does not name a book", href);
            }
            Err(e) => {
                tracing::warn!("{}; trying row classes", e);
                diagnostics.push(e);
            }
        }
    }

    source_from_classes(classes, diagnostics)
}

/// Resolves a source from `link-book-*` class tokens
///
/// Only the technology guide code names a book directly. Any other code
/// is recorded as an unknown source and the source stays empty; the row's
/// link is the authority for every other book.
pub fn source_from_classes(
    classes: &[&str],
    diagnostics: &mut Vec<HarvestError>,
) -> Option<Source> {
    for token in classes {
        let Some(code) = token.strip_prefix(SOURCE_CLASS_PREFIX).map(str::trim) else {
            continue;
        };

        if code == TECHNOLOGY_GUIDE_CODE {
            return Some(Source::TechnologyGuide);
        }

        tracing::warn!("Unknown book code '{}'", code);
        diagnostics.push(HarvestError::UnknownSource {
            reference: token.to_string(),
            key: code.to_string(),
        });
    }

    None
}
