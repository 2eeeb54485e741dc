//! Customer (organization) documents.

use roxmltree::Node;

use crate::error::Result;
use crate::types::Customer;
use crate::xml::{extract, required_text, transform, Required};

/// Read one customer organization element. Every field is required.
pub fn read_customer(node: Node<'_, '_>) -> Result<Customer> {
    Ok(Customer {
        registration_number: extract(node, "regNumber", transform::integer, Required)?,
        inn: extract(node, "inn", transform::integer, Required)?,
        okato: extract(node, "factualAddress/OKATO", transform::integer, Required)?,
        name: required_text(node, "fullName")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use roxmltree::Document;

    const NS: &str = "http://zakupki.gov.ru/oos/types/1";

    fn organization_xml() -> String {
        format!(
            r#"<organization xmlns="{NS}">
    <regNumber>01731000077</regNumber>
    <inn>7710168360</inn>
    <factualAddress><OKATO>45286585000</OKATO></factualAddress>
    <fullName>Министерство финансов Российской Федерации</fullName>
</organization>"#
        )
    }

    #[test]
    fn test_read_customer() {
        let xml = organization_xml();
        let doc = Document::parse(&xml).unwrap();
        let customer = read_customer(doc.root_element()).unwrap();

        assert_eq!(customer.registration_number, 1731000077);
        assert_eq!(customer.inn, 7710168360);
        assert_eq!(customer.okato, 45286585000);
        assert_eq!(customer.name, "Министерство финансов Российской Федерации");
    }

    #[test]
    fn test_missing_okato_fails() {
        let xml = organization_xml()
            .replace("<factualAddress><OKATO>45286585000</OKATO></factualAddress>", "");
        let doc = Document::parse(&xml).unwrap();
        assert!(read_customer(doc.root_element()).is_err());
    }

    #[test]
    fn test_non_numeric_inn_fails() {
        let xml = organization_xml().replace("7710168360", "unknown");
        let doc = Document::parse(&xml).unwrap();
        assert!(read_customer(doc.root_element()).is_err());
    }
}
