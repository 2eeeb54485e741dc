//! Schema-specific record extractors, one per routable document shape.
//!
//! Each extractor is a pure function from one parsed XML element to fully
//! built records; all field access goes through the shared field-extraction
//! primitive in [`crate::xml`].

mod contract;
mod customer;
mod notification;
mod protocol;

pub use contract::read_contract;
pub use customer::read_customer;
pub use notification::read_lots;
pub use protocol::read_protocol;
