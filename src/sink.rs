//! Record sinks: where extracted records go.
//!
//! The engine itself retains nothing; every record is handed to a
//! [`RecordSink`] the moment it is built.

use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::types::{Contact, Contract, Customer, LotParticipant, LotRecord, Supplier};

/// Consumer of extracted records.
///
/// Participant triples arrive through a single call so sinks can rely on
/// the supplier/contact/participant pairing without re-joining by index.
pub trait RecordSink {
    fn lot(&mut self, record: &LotRecord) -> Result<()>;

    fn customer(&mut self, record: &Customer) -> Result<()>;

    fn contract(&mut self, record: &Contract) -> Result<()>;

    fn participant(
        &mut self,
        supplier: &Supplier,
        contact: &Contact,
        participant: &LotParticipant,
    ) -> Result<()>;
}

/// Wrapper adding a record-kind discriminator to each emitted line.
#[derive(Serialize)]
struct Tagged<'a, T: Serialize> {
    kind: &'static str,
    #[serde(flatten)]
    record: &'a T,
}

/// Sink writing one JSON object per record line.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write<T: Serialize>(&mut self, kind: &'static str, record: &T) -> Result<()> {
        serde_json::to_writer(&mut self.writer, &Tagged { kind, record })?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

impl<W: Write> RecordSink for JsonLinesSink<W> {
    fn lot(&mut self, record: &LotRecord) -> Result<()> {
        self.write("lot", record)
    }

    fn customer(&mut self, record: &Customer) -> Result<()> {
        self.write("customer", record)
    }

    fn contract(&mut self, record: &Contract) -> Result<()> {
        self.write("contract", record)
    }

    fn participant(
        &mut self,
        supplier: &Supplier,
        contact: &Contact,
        participant: &LotParticipant,
    ) -> Result<()> {
        self.write("supplier", supplier)?;
        self.write("contact", contact)?;
        self.write("lot_participant", participant)
    }
}

/// Sink collecting records in memory, for tests and embedders.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub lots: Vec<LotRecord>,
    pub customers: Vec<Customer>,
    pub contracts: Vec<Contract>,
    pub participants: Vec<(Supplier, Contact, LotParticipant)>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordSink for MemorySink {
    fn lot(&mut self, record: &LotRecord) -> Result<()> {
        self.lots.push(record.clone());
        Ok(())
    }

    fn customer(&mut self, record: &Customer) -> Result<()> {
        self.customers.push(record.clone());
        Ok(())
    }

    fn contract(&mut self, record: &Contract) -> Result<()> {
        self.contracts.push(record.clone());
        Ok(())
    }

    fn participant(
        &mut self,
        supplier: &Supplier,
        contact: &Contact,
        participant: &LotParticipant,
    ) -> Result<()> {
        self.participants
            .push((supplier.clone(), contact.clone(), participant.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_lines_sink_tags_records() {
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.customer(&Customer {
            registration_number: 1,
            inn: 7710168360,
            okato: 45286585000,
            name: "Тест".to_string(),
        })
        .unwrap();

        let bytes = sink.into_inner().unwrap();
        let line = String::from_utf8(bytes).unwrap();
        let value: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(value["kind"], "customer");
        assert_eq!(value["inn"], 7710168360i64);
    }

    #[test]
    fn test_json_lines_sink_participant_is_three_lines() {
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.participant(
            &Supplier { inn: 1, name: None },
            &Contact {
                inn: 1,
                last_name: String::new(),
                first_name: String::new(),
                middle_name: String::new(),
                email: None,
                phone: None,
                fax: None,
            },
            &LotParticipant {
                notification_number: "N1".to_string(),
                lot_number: 1,
                supplier_inn: 1,
            },
        )
        .unwrap();

        let bytes = sink.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let kinds: Vec<String> = text
            .lines()
            .map(|l| {
                let v: serde_json::Value = serde_json::from_str(l).unwrap();
                v["kind"].as_str().unwrap().to_string()
            })
            .collect();
        assert_eq!(kinds, vec!["supplier", "contact", "lot_participant"]);
    }
}
