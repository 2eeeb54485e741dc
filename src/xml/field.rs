//! The field extractor: one primitive shared by all four record extractors.
//!
//! [`extract`] selects the text nodes under a slash-separated path, runs a
//! transform over each match independently, and reduces the transformed list
//! to a single value through an explicit aggregation policy. The policy is a
//! first-class type so each field read states its multiplicity contract at
//! the call site.

use roxmltree::Node;

use super::transform;
use super::utils::{collect_by_path, get_tag_name};
use crate::error::{ExtractError, Result, ValueError};

/// Reduction policy applied to the transformed match list.
pub trait Aggregate<T> {
    /// Value produced by the reduction.
    type Output;

    /// Reduce the transformed values. `tag` and `path` identify the field
    /// for error attribution.
    fn reduce(self, tag: &str, path: &str, values: Vec<T>) -> Result<Self::Output>;
}

/// First match, extraction failure when there is none. For required fields.
pub struct Required;

impl<T> Aggregate<T> for Required {
    type Output = T;

    fn reduce(self, tag: &str, path: &str, mut values: Vec<T>) -> Result<T> {
        if values.is_empty() {
            return Err(ExtractError::MissingValue {
                tag: tag.to_string(),
                path: path.to_string(),
            });
        }
        Ok(values.remove(0))
    }
}

/// First match if any, `None` otherwise. For optional fields.
pub struct Optional;

impl<T> Aggregate<T> for Optional {
    type Output = Option<T>;

    fn reduce(self, _tag: &str, _path: &str, values: Vec<T>) -> Result<Option<T>> {
        Ok(values.into_iter().next())
    }
}

/// Numeric sum over all matches, `None` when there are none. Used for
/// `max_price`, which may carry one entry per customer requirement.
pub struct Sum;

impl Aggregate<f64> for Sum {
    type Output = Option<f64>;

    fn reduce(self, _tag: &str, _path: &str, values: Vec<f64>) -> Result<Option<f64>> {
        if values.is_empty() {
            return Ok(None);
        }
        Ok(Some(values.iter().sum()))
    }
}

/// Extract one field value from an element.
///
/// Selects the text content of every element matching `path` below `node`,
/// applies `transform` to each match independently (never to the empty
/// list), and reduces the results with `aggregate`. Elements without a text
/// child contribute no value.
///
/// # Errors
/// Transform rejections surface as [`ExtractError::Malformed`] and missing
/// required values as [`ExtractError::MissingValue`], both attributed to the
/// enclosing element's tag. Parse failures are never swallowed here.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use zakupki_extractor::xml::{extract, transform, Required, Sum};
///
/// let xml = r#"<lot xmlns="http://zakupki.gov.ru/oos/types/1">
///     <subject>Бумага</subject>
///     <prices><price>10.5</price><price>4.5</price></prices>
/// </lot>"#;
/// let doc = Document::parse(xml).unwrap();
/// let lot = doc.root_element();
///
/// let subject = extract(lot, "subject", transform::text, Required).unwrap();
/// assert_eq!(subject, "Бумага");
///
/// let total = extract(lot, "prices/price", transform::float, Sum).unwrap();
/// assert_eq!(total, Some(15.0));
/// ```
pub fn extract<T, A>(
    node: Node<'_, '_>,
    path: &str,
    transform: impl Fn(&str) -> std::result::Result<T, ValueError>,
    aggregate: A,
) -> Result<A::Output>
where
    A: Aggregate<T>,
{
    let tag = get_tag_name(node);
    let mut values = Vec::new();
    for matched in collect_by_path(node, path) {
        if let Some(raw) = matched.text() {
            values.push(transform(raw).map_err(|source| ExtractError::Malformed {
                tag: tag.to_string(),
                path: path.to_string(),
                source,
            })?);
        }
    }
    aggregate.reduce(tag, path, values)
}

/// Shorthand for the most common read: required trimmed text.
pub fn required_text(node: Node<'_, '_>, path: &str) -> Result<String> {
    extract(node, path, transform::text, Required)
}
