//! Record types emitted by the extractors.
//!
//! Every record is a flat, immutable-once-built value: constructed in a
//! single extractor call from one XML element and handed straight to the
//! sink. Nothing here is retained or mutated by the engine afterwards.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Notification-level fields shared by every lot of one notification.
///
/// `final_price`, `contract_sign_date` and `execution_date` are always
/// `None` at extraction time; a downstream reconciliation process fills
/// them in once contracts are matched to notifications.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    /// Notification number, the join key towards contracts and protocols.
    pub notification_number: String,

    /// Creation timestamp of the notification.
    pub create_date: NaiveDateTime,

    /// Publication timestamp of the notification.
    pub publish_date: NaiveDateTime,

    /// Order name as published.
    pub notification_name: String,

    /// Link to the notification on zakupki.gov.ru.
    pub href: String,

    /// Registration number of the placing organization.
    pub registration_number: i64,

    /// Reconciled downstream, never set here.
    pub final_price: Option<f64>,

    /// Reconciled downstream, never set here.
    pub contract_sign_date: Option<NaiveDate>,

    /// Reconciled downstream, never set here.
    pub execution_date: Option<NaiveDate>,
}

/// Lot-level fields of a single purchasable item within a notification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lot {
    /// Sum of the declared customer-requirement prices, absent when the
    /// lot declares none.
    pub max_price: Option<f64>,

    /// Lot subject line.
    pub lot_name: String,

    /// Position of the lot within its notification.
    pub ordinal_number: i64,
}

/// One emitted record per lot: the lot fields merged with the fields of the
/// notification it belongs to.
///
/// The two field sets are disjoint by construction, so the flattened
/// serialization never collides.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LotRecord {
    #[serde(flatten)]
    pub lot: Lot,

    #[serde(flatten)]
    pub notification: Notification,
}

/// A signed contract, joinable to a notification by number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contract {
    /// Referenced notification number; empty when the contract cites an
    /// "other" foundation without one. Empty-numbered contracts are dropped
    /// by the dispatcher before emission.
    pub notification_number: String,

    /// Referenced lot number; `1` for "other"-foundation contracts.
    pub lot_number: i64,

    /// Date the contract was signed.
    pub sign_date: NaiveDate,

    /// Contract price.
    pub price: f64,

    /// Current stage of the contract lifecycle.
    pub current_contract_stage: Option<String>,

    /// Execution period as `"{year}-{month}"`.
    pub execution: String,
}

/// A customer organization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    /// Registration number on zakupki.gov.ru.
    pub registration_number: i64,

    /// Taxpayer identification number.
    pub inn: i64,

    /// Administrative-territory code of the factual address.
    pub okato: i64,

    /// Full organization name.
    pub name: String,
}

/// A bidding supplier listed in a protocol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Supplier {
    /// Taxpayer identification number, the supplier join key.
    pub inn: i64,

    /// Organization form and name, space-joined; `None` when both are
    /// absent from the document.
    pub name: Option<String>,
}

/// Contact details of a bidding supplier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contact {
    /// Taxpayer identification number of the supplier this contact belongs to.
    pub inn: i64,

    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,

    pub email: Option<String>,

    /// Phone number, stripped of all non-alphanumeric characters.
    pub phone: Option<String>,

    /// Fax number, stripped of all non-alphanumeric characters.
    pub fax: Option<String>,
}

/// Join record linking a supplier to the lot it bid on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LotParticipant {
    /// Notification number of the enclosing protocol.
    pub notification_number: String,

    /// Lot number within that notification.
    pub lot_number: i64,

    /// INN of the bidding supplier.
    pub supplier_inn: i64,
}

/// Output of one protocol extraction: three index-aligned sequences, one
/// (supplier, contact, participant) triple per accepted bidder.
///
/// The fields are private and appended only through [`push`](Self::push),
/// which keeps the sequences the same length by construction.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProtocolRecords {
    suppliers: Vec<Supplier>,
    contacts: Vec<Contact>,
    participants: Vec<LotParticipant>,
    skipped: usize,
}

impl ProtocolRecords {
    /// Create an empty record set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one bidder's triple, preserving index alignment.
    pub fn push(&mut self, supplier: Supplier, contact: Contact, participant: LotParticipant) {
        self.suppliers.push(supplier);
        self.contacts.push(contact);
        self.participants.push(participant);
    }

    /// Record that a participant was skipped by the data-quality gate.
    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    /// Number of accepted bidders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.suppliers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suppliers.is_empty()
    }

    /// Number of participants skipped for lacking an INN.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    #[must_use]
    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    #[must_use]
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    #[must_use]
    pub fn participants(&self) -> &[LotParticipant] {
        &self.participants
    }

    /// Iterate the aligned triples in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&Supplier, &Contact, &LotParticipant)> {
        self.suppliers
            .iter()
            .zip(self.contacts.iter())
            .zip(self.participants.iter())
            .map(|((s, c), p)| (s, c, p))
    }
}
