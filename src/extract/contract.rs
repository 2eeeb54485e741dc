//! Contract documents.

use roxmltree::Node;

use crate::error::Result;
use crate::types::Contract;
use crate::xml::{extract, required_text, transform, Optional, Required};

/// Lot number assumed when a contract cites an "other" foundation instead
/// of a notification or order.
const OTHER_FOUNDATION_LOT: i64 = 1;

/// Read one contract element.
///
/// The notification reference is resolved in two steps: a contract founded
/// on an order carries `foundation/order/notificationNumber` plus a required
/// lot number; otherwise the number is looked up under `foundation/other`
/// (empty when absent) and the lot number defaults to `1`. The caller drops
/// contracts whose resolved number is empty, since they cannot be joined to
/// any notification.
pub fn read_contract(node: Node<'_, '_>) -> Result<Contract> {
    let order_number: Option<String> =
        extract(node, "foundation/order/notificationNumber", transform::text, Optional)?;

    let (notification_number, lot_number) = match order_number.filter(|n| !n.is_empty()) {
        Some(number) => {
            let lot = extract(node, "foundation/order/lotNumber", transform::integer, Required)?;
            (number, lot)
        }
        None => {
            let number =
                extract(node, "foundation/other/notificationNumber", transform::text, Optional)?
                    .unwrap_or_default();
            (number, OTHER_FOUNDATION_LOT)
        }
    };

    Ok(Contract {
        notification_number,
        lot_number,
        sign_date: extract(node, "signDate", transform::date, Required)?,
        price: extract(node, "price", transform::float, Required)?,
        current_contract_stage: extract(node, "currentContractStage", transform::text, Optional)?,
        execution: format!(
            "{}-{}",
            required_text(node, "execution/year")?,
            required_text(node, "execution/month")?
        ),
    })
}
