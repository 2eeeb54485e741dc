//! Notification documents: one merged lot+notification record per lot.

use roxmltree::Node;

use crate::error::{ExtractError, Result};
use crate::types::{Lot, LotRecord, Notification};
use crate::xml::{element_children, extract, find_by_path, get_tag_name, required_text, transform, Required, Sum};

/// Read every lot of a notification element as a merged [`LotRecord`].
///
/// The notification-level fields are all required; a missing or malformed
/// one aborts record production for the whole document. A notification with
/// zero lots yields zero records, which is not an error.
pub fn read_lots(node: Node<'_, '_>) -> Result<Vec<LotRecord>> {
    let notification = read_notification(node)?;

    let lots = find_by_path(node, "lots").ok_or_else(|| ExtractError::MissingValue {
        tag: get_tag_name(node).to_string(),
        path: "lots".to_string(),
    })?;

    element_children(lots)
        .map(|lot| {
            Ok(LotRecord {
                lot: read_lot(lot)?,
                notification: notification.clone(),
            })
        })
        .collect()
}

/// Read the notification-level fields shared by all of its lots.
fn read_notification(node: Node<'_, '_>) -> Result<Notification> {
    Ok(Notification {
        notification_number: required_text(node, "notificationNumber")?,
        create_date: extract(node, "createDate", transform::datetime, Required)?,
        publish_date: extract(node, "publishDate", transform::datetime, Required)?,
        notification_name: required_text(node, "orderName")?,
        href: required_text(node, "href")?,
        registration_number: extract(node, "order/placer/regNum", transform::integer, Required)?,
        final_price: None,
        contract_sign_date: None,
        execution_date: None,
    })
}

/// Read one lot element.
fn read_lot(node: Node<'_, '_>) -> Result<Lot> {
    Ok(Lot {
        max_price: extract(
            node,
            "customerRequirements/customerRequirement/maxPrice",
            transform::float,
            Sum,
        )?,
        lot_name: required_text(node, "subject")?,
        ordinal_number: extract(node, "ordinalNumber", transform::integer, Required)?,
    })
}
