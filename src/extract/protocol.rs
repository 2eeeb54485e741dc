//! Protocol documents: suppliers, contacts and lot participation.

use roxmltree::Node;

use crate::error::{ExtractError, Result};
use crate::types::{Contact, LotParticipant, ProtocolRecords, Supplier};
use crate::xml::{
    element_children, extract, find_by_path, get_tag_name, required_text, transform, Optional,
    Required,
};

/// Read every bidder of a protocol element into index-aligned
/// (supplier, contact, participant) triples.
///
/// Walks `protocolLots` → `applications` → `applicationParticipants`; lots
/// and applications may be absent entirely. A participant without a numeric
/// INN cannot be joined to anything, so it is skipped with a diagnostic
/// rather than failing the document; this is the one deliberate
/// data-quality gate.
pub fn read_protocol(node: Node<'_, '_>) -> Result<ProtocolRecords> {
    let notification_number = required_text(node, "notificationNumber")?;
    let mut records = ProtocolRecords::new();

    let lots = find_by_path(node, "protocolLots")
        .into_iter()
        .flat_map(element_children);
    for lot in lots {
        let lot_number: i64 = extract(lot, "lotNumber", transform::integer, Required)?;

        let applications = find_by_path(lot, "applications")
            .into_iter()
            .flat_map(element_children);
        for application in applications {
            let participants =
                find_by_path(application, "applicationParticipants").ok_or_else(|| {
                    ExtractError::MissingValue {
                        tag: get_tag_name(application).to_string(),
                        path: "applicationParticipants".to_string(),
                    }
                })?;

            for participant in element_children(participants) {
                let inn = match extract(participant, "inn", transform::integer, Optional) {
                    Ok(Some(inn)) => inn,
                    Ok(None) => {
                        tracing::warn!(
                            notification_number,
                            lot_number,
                            "participant skipped: no INN"
                        );
                        records.record_skipped();
                        continue;
                    }
                    Err(err) => {
                        tracing::warn!(
                            notification_number,
                            lot_number,
                            error = %err,
                            "participant skipped: non-numeric INN"
                        );
                        records.record_skipped();
                        continue;
                    }
                };

                records.push(
                    read_supplier(participant, inn)?,
                    read_contact(participant, inn)?,
                    LotParticipant {
                        notification_number: notification_number.clone(),
                        lot_number,
                        supplier_inn: inn,
                    },
                );
            }
        }
    }

    Ok(records)
}

fn read_supplier(participant: Node<'_, '_>, inn: i64) -> Result<Supplier> {
    let form: Option<String> = extract(participant, "organizationForm", transform::text, Optional)?;
    let name: Option<String> = extract(participant, "organizationName", transform::text, Optional)?;
    Ok(Supplier {
        inn,
        name: join_present(form, name),
    })
}

fn read_contact(participant: Node<'_, '_>, inn: i64) -> Result<Contact> {
    Ok(Contact {
        inn,
        last_name: extract(participant, "contactInfo/lastName", transform::text, Optional)?
            .unwrap_or_default(),
        first_name: extract(participant, "contactInfo/firstName", transform::text, Optional)?
            .unwrap_or_default(),
        middle_name: extract(participant, "contactInfo/middleName", transform::text, Optional)?
            .unwrap_or_default(),
        email: extract(participant, "contactInfo/contactEMail", transform::text, Optional)?,
        phone: extract(participant, "contactInfo/contactPhone", transform::digits, Optional)?,
        fax: extract(participant, "contactInfo/contactFax", transform::digits, Optional)?,
    })
}

/// Space-join the values that are present and non-empty; `None` when none are.
fn join_present(form: Option<String>, name: Option<String>) -> Option<String> {
    let kept: Vec<String> = [form, name]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect();
    if kept.is_empty() {
        return None;
    }
    Some(kept.join(" "))
}
