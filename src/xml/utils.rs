//! Navigation helpers for the OOS document DOM.
//!
//! All typed sub-elements of a zakupki document live in the fixed OOS types
//! namespace, so every lookup here is namespace-qualified; elements from
//! other namespaces are never matched by path descent.

use roxmltree::Node;

use crate::config::OOS_TYPES_NAMESPACE;

/// Get the tag name without its namespace.
#[must_use]
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Get the qualified tag name in `{namespace}local` form.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use zakupki_extractor::xml::qualified_name;
///
/// let xml = r#"<n:contract xmlns:n="http://example.com/ns"/>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(qualified_name(doc.root_element()), "{http://example.com/ns}contract");
/// ```
#[must_use]
pub fn qualified_name(node: Node<'_, '_>) -> String {
    match node.tag_name().namespace() {
        Some(ns) => format!("{{{ns}}}{}", node.tag_name().name()),
        None => node.tag_name().name().to_string(),
    }
}

/// Check whether an element is a typed OOS element with the given local name.
fn is_oos_element(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == tag
        && node.tag_name().namespace() == Some(OOS_TYPES_NAMESPACE)
}

/// Find the first OOS child element with the given tag name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use zakupki_extractor::xml::find_child;
///
/// let xml = r#"<lot xmlns="http://zakupki.gov.ru/oos/types/1">
///     <subject>Бумага</subject>
/// </lot>"#;
/// let doc = Document::parse(xml).unwrap();
/// let root = doc.root_element();
///
/// assert!(find_child(root, "subject").is_some());
/// assert!(find_child(root, "missing").is_none());
/// ```
#[must_use]
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|child| is_oos_element(*child, tag))
}

/// Find all OOS child elements with the given tag name.
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| is_oos_element(*child, tag))
}

/// Find the first descendant matching a slash-separated path of tag names.
///
/// Takes the first match at every step; use [`collect_by_path`] when a step
/// can legitimately match multiple siblings.
#[must_use]
pub fn find_by_path<'a, 'input>(node: Node<'a, 'input>, path: &str) -> Option<Node<'a, 'input>> {
    let mut current = node;
    for part in path.split('/') {
        current = find_child(current, part)?;
    }
    Some(current)
}

/// Collect every descendant matching a slash-separated path of tag names.
///
/// Each path step fans out across all matching siblings, so e.g.
/// `"customerRequirements/customerRequirement/maxPrice"` yields one node per
/// requirement entry.
#[must_use]
pub fn collect_by_path<'a, 'input>(node: Node<'a, 'input>, path: &str) -> Vec<Node<'a, 'input>> {
    let mut current = vec![node];
    for part in path.split('/') {
        current = current
            .into_iter()
            .flat_map(|n| {
                n.children()
                    .filter(|child| is_oos_element(*child, part))
                    .collect::<Vec<_>>()
            })
            .collect();
        if current.is_empty() {
            break;
        }
    }
    current
}

/// Get all element children of a node, regardless of namespace.
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}
