//! Configuration constants and file-name classification for the extractor.
//!
//! The zakupki.gov.ru export schema is a fixed, read-only contract: one
//! namespace URI for typed elements, a finite tag vocabulary for routable
//! documents, and a file-naming convention for the corpus. Everything here
//! is process-wide immutable configuration.

use regex::Regex;
use std::sync::LazyLock;

/// Namespace URI of the OOS types schema. All typed sub-elements read by the
/// extractors live in this namespace.
pub const OOS_TYPES_NAMESPACE: &str = "http://zakupki.gov.ru/oos/types/1";

/// Datetime format used by notification create/publish dates.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Date format used by contract sign dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Extension of extractable documents.
pub const DOCUMENT_EXTENSION: &str = ".xml";

/// Extension of archive containers holding extractable documents.
pub const ARCHIVE_EXTENSION: &str = ".zip";

/// File-name prefixes of the four document schemas, in corpus parse order:
/// organizations first so later records can be joined against them.
pub const SCHEMA_PREFIXES: [&str; 4] = ["organization", "notification", "protocol", "contract"];

/// Qualified tag of a routable notification document.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NOTIFICATION_TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\}notification(OK|EF|ZK|PO)$").expect("valid regex"));

/// Qualified tag of a routable protocol document.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PROTOCOL_TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\}protocol(OK1|EF3|ZK1|ZK5|PO1)$").expect("valid regex"));

/// Check whether a qualified tag name (`{namespace}local`) is one of the
/// notification document variants.
///
/// # Examples
/// ```
/// use zakupki_extractor::config::is_notification_tag;
///
/// assert!(is_notification_tag("{http://zakupki.gov.ru/oos/export/1}notificationOK"));
/// assert!(!is_notification_tag("{http://zakupki.gov.ru/oos/export/1}notificationCancel"));
/// ```
#[must_use]
pub fn is_notification_tag(qualified: &str) -> bool {
    NOTIFICATION_TAG_PATTERN.is_match(qualified)
}

/// Check whether a qualified tag name is one of the protocol document variants.
///
/// # Examples
/// ```
/// use zakupki_extractor::config::is_protocol_tag;
///
/// assert!(is_protocol_tag("{http://zakupki.gov.ru/oos/export/1}protocolEF3"));
/// assert!(!is_protocol_tag("{http://zakupki.gov.ru/oos/export/1}protocolEF2"));
/// ```
#[must_use]
pub fn is_protocol_tag(qualified: &str) -> bool {
    PROTOCOL_TAG_PATTERN.is_match(qualified)
}

/// Check whether a corpus file name should be handed to the extractor.
///
/// The name must contain one of the four schema prefixes and carry the
/// `.xml` extension; everything else is skipped upstream of the core.
///
/// # Examples
/// ```
/// use zakupki_extractor::config::is_extractable_name;
///
/// assert!(is_extractable_name("notification_Moscow_2013_001.xml"));
/// assert!(!is_extractable_name("notification_Moscow_2013_001.xml.sig"));
/// assert!(!is_extractable_name("readme.xml"));
/// ```
#[must_use]
pub fn is_extractable_name(name: &str) -> bool {
    name.ends_with(DOCUMENT_EXTENSION)
        && SCHEMA_PREFIXES.iter().any(|prefix| name.contains(prefix))
}

/// Corpus ordering key for a file name.
///
/// Files are processed in schema order (organization, notification,
/// protocol, contract) so referenced entities are emitted before records
/// that join against them. Names matching no schema sort last.
#[must_use]
pub fn parse_order(name: &str) -> usize {
    let lower = name.to_lowercase();
    SCHEMA_PREFIXES
        .iter()
        .position(|prefix| lower.starts_with(prefix))
        .unwrap_or(SCHEMA_PREFIXES.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_tag_variants() {
        for suffix in ["OK", "EF", "ZK", "PO"] {
            let tag = format!("{{http://zakupki.gov.ru/oos/export/1}}notification{suffix}");
            assert!(is_notification_tag(&tag), "{tag} should match");
        }
    }

    #[test]
    fn test_notification_tag_rejects_other_tags() {
        assert!(!is_notification_tag("{ns}notification"));
        assert!(!is_notification_tag("{ns}notificationOKextra"));
        assert!(!is_notification_tag("notificationOK")); // No namespace brace
    }

    #[test]
    fn test_protocol_tag_variants() {
        for suffix in ["OK1", "EF3", "ZK1", "ZK5", "PO1"] {
            let tag = format!("{{ns}}protocol{suffix}");
            assert!(is_protocol_tag(&tag), "{tag} should match");
        }
        assert!(!is_protocol_tag("{ns}protocolOK"));
        assert!(!is_protocol_tag("{ns}protocolEF1"));
    }

    #[test]
    fn test_is_extractable_name() {
        assert!(is_extractable_name("contract_Adygeja_Resp_2013.xml"));
        assert!(is_extractable_name("fcs_organization_001.xml"));
        assert!(!is_extractable_name("contract_Adygeja_Resp_2013.zip"));
        assert!(!is_extractable_name("index.xml"));
        assert!(!is_extractable_name(""));
    }

    #[test]
    fn test_parse_order() {
        assert_eq!(parse_order("organization_001.xml"), 0);
        assert_eq!(parse_order("Notification_001.xml"), 1);
        assert_eq!(parse_order("protocol_001.xml"), 2);
        assert_eq!(parse_order("contract_001.xml"), 3);
        assert_eq!(parse_order("unrelated.xml"), 4);
    }

    #[test]
    fn test_parse_order_is_case_insensitive() {
        assert_eq!(parse_order("CONTRACT_X.xml"), parse_order("contract_x.xml"));
    }
}
