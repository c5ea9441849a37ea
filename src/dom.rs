//! The narrow slice of DOM access the extractor needs.
//!
//! Table extraction is written against [`HtmlElement`] so it can run on any
//! tree that can answer these questions. The `dom_query` implementation is
//! the one the pipeline uses.

use std::hash::Hash;

use dom_query::{Document, Matcher, NodeRef, Selection};

use crate::error::GrabError;

pub trait HtmlElement: Sized {
    type Key: Eq + Hash;

    /// Identity of the underlying node, stable for the lifetime of the tree.
    fn node_key(&self) -> Self::Key;

    /// Descendants matching `selector`, in document order.
    fn find_all(&self, selector: &str) -> Vec<Self>;

    /// The next sibling that is an element, skipping text and comments.
    fn next_element(&self) -> Option<Self>;

    /// Concatenated text of the element and all its descendants.
    fn text_content(&self) -> String;

    fn attribute(&self, name: &str) -> Option<String>;
}

impl HtmlElement for NodeRef<'_> {
    type Key = dom_query::NodeId;

    fn node_key(&self) -> Self::Key {
        self.id
    }

    fn find_all(&self, selector: &str) -> Vec<Self> {
        Selection::from(*self).select(selector).nodes().to_vec()
    }

    fn next_element(&self) -> Option<Self> {
        let mut sibling = self.next_sibling();
        while let Some(node) = sibling {
            if node.is_element() {
                return Some(node);
            }
            sibling = node.next_sibling();
        }
        None
    }

    fn text_content(&self) -> String {
        Selection::from(*self).text().to_string()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        Selection::from(*self).attr(name).map(|value| value.to_string())
    }
}

/// Elements of `doc` matching `selector`, in document order.
///
/// An empty result is not an error; a selector that fails to parse is.
pub fn select_elements<'a>(
    doc: &'a Document,
    selector: &str,
) -> Result<Vec<NodeRef<'a>>, GrabError> {
    let matcher = Matcher::new(selector).map_err(|error| GrabError::InvalidSelector {
        selector: selector.to_string(),
        reason: format!("{error:?}"),
    })?;
    Ok(doc.select_matcher(&matcher).nodes().to_vec())
}
