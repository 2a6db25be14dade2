use crate::catalog::book_segment;
use crate::fetcher::{child_elements, first_child_element, ParsedDocument};
use std::collections::BTreeSet;

/// Extracts book identifiers from the root page's navigation menus
///
/// # Menu structure
///
/// ```text
/// <ul class="level-2">
///   <li><a href="/pathfinderRPG/prd/coreRulebook/...">...</a></li>
///   ...
/// </ul>
/// ```
///
/// For every list item the first child element is taken as the link. Links
/// outside `base_path` are ignored; for the rest the identifier is the path
/// segment directly after `base_path`.
pub fn extract_book_ids(
    document: &ParsedDocument,
    menu_class: &str,
    base_path: &str,
) -> BTreeSet<String> {
    let mut books = BTreeSet::new();

    for menu in document.elements_with_class(menu_class) {
        for item in child_elements(menu) {
            let Some(link) = first_child_element(item) else {
                continue;
            };
            let Some(href) = link.value().attr("href") else {
                continue;
            };
            if let Some(book) = book_segment(href, base_path) {
                books.insert(book.to_string());
            }
        }
    }

    books
}
