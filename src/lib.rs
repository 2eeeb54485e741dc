//! Zakupki Extractor - Extract procurement records from zakupki.gov.ru exports.
//!
//! This crate turns the raw XML export files published by the Russian
//! public-procurement portal into flat, join-ready records: notification
//! lots, customer organizations, contracts and bid-protocol participants.
//!
//! # Example
//!
//! ```
//! use zakupki_extractor::config;
//!
//! // Classify routable document tags
//! assert!(config::is_notification_tag("{http://zakupki.gov.ru/oos/export/1}notificationEF"));
//! assert!(config::is_protocol_tag("{http://zakupki.gov.ru/oos/export/1}protocolZK5"));
//! ```
//!
//! # Architecture
//!
//! The extractor is organized into several modules:
//!
//! - [`config`]: Configuration constants and tag/file-name classification
//! - [`types`]: Output record types (LotRecord, Customer, Contract, etc.)
//! - [`error`]: Error types and Result alias
//! - [`stream`]: Incremental top-level element streaming
//! - [`xml`]: XML navigation, transforms and the field-extraction primitive
//! - [`extract`]: One record extractor per document schema
//! - [`dispatch`]: Element routing and per-document processing
//! - [`sink`]: Record sinks (JSON lines, in-memory)
//! - [`source`]: Corpus enumeration, plain files and zip archives
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod extract;
pub mod sink;
pub mod source;
pub mod stream;
pub mod types;
pub mod xml;

// Re-export main functions
pub use dispatch::process_document;
pub use source::{collect_corpus, process_file, process_tree};

// Re-export commonly used items
pub use dispatch::{DocumentKind, DocumentStats};
pub use error::{ExtractError, Result};
pub use sink::{JsonLinesSink, MemorySink, RecordSink};
pub use types::{
    Contact, Contract, Customer, Lot, LotParticipant, LotRecord, Notification, ProtocolRecords,
    Supplier,
};
