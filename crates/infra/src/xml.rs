// crates/infra/src/xml.rs
use std::path::Path;

use roxmltree::{Document, ParsingOptions};
use route_count_domain::ROUTE_ELEMENT;
use route_count_ports::xml::RouteCounter;
use route_count_shared_kernel::{InfrastructureError, Result, RouteCount};
use tracing::trace;

use crate::persistence::FileReader;

/// Counts elements named `route` anywhere in the document tree.
///
/// Only unqualified names match: an element in a namespace (prefixed or via a
/// default `xmlns`) is a different tag. Attributes and content are ignored.
pub fn count_route_elements(text: &str) -> std::result::Result<usize, roxmltree::Error> {
    let options = ParsingOptions { allow_dtd: true, ..ParsingOptions::default() };
    let doc = Document::parse_with_options(text, options)?;
    Ok(doc
        .descendants()
        .filter(|node| node.is_element())
        .filter(|node| {
            let name = node.tag_name();
            name.name() == ROUTE_ELEMENT && name.namespace().is_none()
        })
        .count())
}

/// `RouteCounter` backed by a full in-memory parse.
#[derive(Debug, Default, Clone, Copy)]
pub struct XmlRouteCounter;

impl XmlRouteCounter {
    pub fn new() -> Self {
        Self
    }
}

impl RouteCounter for XmlRouteCounter {
    fn count_routes(&self, file: &Path) -> Result<RouteCount> {
        let text = FileReader::read_document(file)?;
        trace!(file = %file.display(), bytes = text.len(), "parsing");
        let routes = count_route_elements(&text).map_err(|err| InfrastructureError::XmlParse {
            path: file.to_path_buf(),
            details: err.to_string(),
        })?;
        Ok(RouteCount::new(routes))
    }
}
