//! Array path navigation.
//!
//! Walks a sequence of object keys from the document root to the node the
//! query should run against.

use serde_json::Value;

use crate::error::ToolError;

/// Resolve `path` against `root`, descending through object keys only.
///
/// An empty path yields the root itself. Every key must name a member of an
/// object; hitting a non-object or a missing key fails with
/// [`ToolError::ArrayPathNotFound`]. The resolved node is not type-checked.
///
/// # Examples
/// ```
/// use markdown_writer::query::navigate;
/// use serde_json::json;
///
/// let doc = json!({"data": {"items": [1, 2]}});
/// let path = vec!["data".to_string(), "items".to_string()];
/// assert_eq!(navigate(&doc, &path).unwrap(), &json!([1, 2]));
/// ```
pub fn navigate<'a>(root: &'a Value, path: &[String]) -> Result<&'a Value, ToolError> {
    let mut current = root;
    for key in path {
        current = current
            .as_object()
            .and_then(|obj| obj.get(key))
            .ok_or(ToolError::ArrayPathNotFound)?;
    }
    Ok(current)
}
