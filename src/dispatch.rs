//! Document dispatcher: routes top-level elements to record extractors.
//!
//! Consumes the element stream one snippet at a time, classifies each
//! element's qualified tag name against the four known document shapes and
//! invokes the matching extractor. Unrecognized tags are ignored silently;
//! extractor failures are isolated per element: logged with the offending
//! document name and counted, never aborting the rest of the document.

use std::io::BufRead;

use roxmltree::Document;

use crate::config::{is_notification_tag, is_protocol_tag};
use crate::error::Result;
use crate::extract::{read_contract, read_customer, read_lots, read_protocol};
use crate::sink::RecordSink;
use crate::stream::ElementStream;
use crate::xml::qualified_name;

/// The four routable document shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Notification,
    Customer,
    Protocol,
    Contract,
}

impl DocumentKind {
    /// Classify a qualified tag name (`{namespace}local`), `None` for
    /// anything outside the four known shapes.
    #[must_use]
    pub fn classify(qualified: &str) -> Option<Self> {
        if is_notification_tag(qualified) {
            Some(Self::Notification)
        } else if qualified.ends_with("}organization") {
            Some(Self::Customer)
        } else if is_protocol_tag(qualified) {
            Some(Self::Protocol)
        } else if qualified.ends_with("}contract") {
            Some(Self::Contract)
        } else {
            None
        }
    }
}

/// Per-document extraction counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DocumentStats {
    /// Merged lot+notification records emitted.
    pub lots: usize,
    /// Customer records emitted.
    pub customers: usize,
    /// Contract records emitted.
    pub contracts: usize,
    /// Contracts dropped for an empty notification number.
    pub dropped_contracts: usize,
    /// (Supplier, contact, participant) triples emitted.
    pub participants: usize,
    /// Protocol participants skipped by the INN gate.
    pub skipped_participants: usize,
    /// Elements whose extraction failed and was isolated.
    pub failed_elements: usize,
}

impl DocumentStats {
    /// Fold another document's counters into this one.
    pub fn absorb(&mut self, other: DocumentStats) {
        self.lots += other.lots;
        self.customers += other.customers;
        self.contracts += other.contracts;
        self.dropped_contracts += other.dropped_contracts;
        self.participants += other.participants;
        self.skipped_participants += other.skipped_participants;
        self.failed_elements += other.failed_elements;
    }

    /// Total records handed to the sink.
    #[must_use]
    pub fn emitted(&self) -> usize {
        self.lots + self.customers + self.contracts + self.participants * 3
    }
}

/// Process one XML document: stream its top-level elements, route each to
/// its extractor and hand the records to `sink`.
///
/// `name` identifies the document in diagnostics (a path, or
/// `archive!entry` for archive members); it is never parsed.
///
/// # Errors
/// Only stream-level failures (unreadable input, malformed markup) abort
/// the document; per-element extraction failures are isolated and counted
/// in the returned stats.
pub fn process_document<R: BufRead>(
    source: R,
    name: &str,
    sink: &mut dyn RecordSink,
) -> Result<DocumentStats> {
    let mut stats = DocumentStats::default();

    for snippet in ElementStream::new(source) {
        let snippet = snippet?;
        if let Err(err) = handle_element(&snippet, sink, &mut stats) {
            stats.failed_elements += 1;
            tracing::warn!(document = name, error = %err, "element extraction failed");
        }
    }

    Ok(stats)
}

/// Parse one wrapped element snippet and route it.
fn handle_element(snippet: &str, sink: &mut dyn RecordSink, stats: &mut DocumentStats) -> Result<()> {
    let doc = Document::parse(snippet)?;
    let Some(element) = doc.root_element().first_element_child() else {
        return Ok(());
    };

    let qualified = qualified_name(element);
    let Some(kind) = DocumentKind::classify(&qualified) else {
        // Routing miss: not one of the four shapes, not an error.
        return Ok(());
    };

    match kind {
        DocumentKind::Notification => {
            for record in read_lots(element)? {
                sink.lot(&record)?;
                stats.lots += 1;
            }
        }
        DocumentKind::Customer => {
            sink.customer(&read_customer(element)?)?;
            stats.customers += 1;
        }
        DocumentKind::Protocol => {
            let records = read_protocol(element)?;
            stats.skipped_participants += records.skipped();
            for (supplier, contact, participant) in records.iter() {
                sink.participant(supplier, contact, participant)?;
                stats.participants += 1;
            }
        }
        DocumentKind::Contract => {
            let contract = read_contract(element)?;
            // A contract without a notification number cannot be joined to
            // anything downstream.
            if contract.notification_number.is_empty() {
                stats.dropped_contracts += 1;
                return Ok(());
            }
            sink.contract(&contract)?;
            stats.contracts += 1;
        }
    }

    Ok(())
}
