use crate::error::Result;
use std::collections::HashMap;

/// Extract fields from an HTML page.
///
/// Selector-driven extraction is not implemented yet; every page yields an
/// empty map.
pub fn parse_html(content: &str) -> Result<HashMap<String, String>> {
    tracing::debug!(bytes = content.len(), "Parsing HTML");
    Ok(HashMap::new())
}
