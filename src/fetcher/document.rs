//! Parsed HTML document and element helpers
//!
//! Traversal is limited to two capabilities: lookup by CSS class in
//! document order, and ordered iteration over child elements.

use crate::HarvestError;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// An HTML page fetched from the reference document
pub struct ParsedDocument {
    url: Url,
    html: Html,
}

impl std::fmt::Debug for ParsedDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedDocument")
            .field("url", &self.url.as_str())
            .finish()
    }
}

impl ParsedDocument {
    /// Parses an HTML body fetched from `url`
    ///
    /// # Errors
    ///
    /// Returns `HarvestError::Parse` for an empty body. The HTML parser
    /// itself recovers from malformed markup.
    pub fn parse(url: Url, body: &str) -> Result<Self, HarvestError> {
        if body.trim().is_empty() {
            return Err(HarvestError::Parse {
                url: url.to_string(),
                message: "Empty document".to_string(),
            });
        }

        let html = Html::parse_document(body);
        if !html.errors.is_empty() {
            tracing::trace!("{} parse warnings in {}", html.errors.len(), url);
        }

        Ok(Self { url, html })
    }

    /// URL the document was fetched from
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// All elements carrying `class`, in document order
    pub fn elements_with_class<'a>(
        &'a self,
        class: &'a str,
    ) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(move |element| element.value().classes().any(|c| c == class))
    }

    /// Elements matching a CSS selector, in document order
    ///
    /// # Errors
    ///
    /// Returns `HarvestError::Parse` if the selector is invalid.
    pub fn select(&self, css: &str) -> Result<Vec<ElementRef<'_>>, HarvestError> {
        let selector = Selector::parse(css).map_err(|e| HarvestError::Parse {
            url: self.url.to_string(),
            message: format!("Invalid selector '{}': {:?}", css, e),
        })?;
        Ok(self.html.select(&selector).collect())
    }
}

/// Child elements of `element` in document order (text nodes skipped)
pub fn child_elements<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.children().filter_map(ElementRef::wrap)
}

/// First child element, if any
pub fn first_child_element(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    child_elements(element).next()
}

/// Whitespace-separated tokens of the `class` attribute
pub fn class_tokens<'a>(element: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    element
        .value()
        .attr("class")
        .unwrap_or_default()
        .split_whitespace()
}

/// Text content with runs of whitespace collapsed to single spaces
pub fn normalized_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
