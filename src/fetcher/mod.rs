//! Document fetching
//!
//! This module retrieves pages of the reference document:
//! - Building the HTTP client from configuration
//! - Resolving relative paths against the base URL
//! - Classifying transport failures
//! - Parsing responses into a traversable HTML document
//! - Cooperative cancellation of in-flight requests

mod cancel;
mod client;
mod document;

pub use cancel::{cancel_pair, CancelHandle, CancelSignal};
pub use client::{build_http_client, Fetcher};
pub use document::{
    child_elements, class_tokens, first_child_element, normalized_text, ParsedDocument,
};
