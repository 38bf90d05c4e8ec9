use transfer_types::{is_blank, Field, Finding, Severity, TransferRecord};

/// Section E transferor/seller certification (Q33-Q36)
///
/// Only enforced once a transfer date is recorded. The four seller-identity
/// fields of Q33 are reported together as one finding naming whichever are
/// missing.
pub fn check_seller_certification(record: &TransferRecord) -> Vec<Finding> {
    let mut findings = Vec::new();

    if record.transfer_date.is_none() {
        return findings;
    }

    if is_blank(record.transferor_name.as_deref()) {
        findings.push(Finding::new(
            "Q34",
            Severity::Warning,
            "Transferor/seller name (Q34) must be completed at the time of transfer.",
            [Field::TransferorName],
        ));
    }

    if is_blank(record.transferor_signature.as_deref()) {
        findings.push(Finding::new(
            "Q35",
            Severity::Warning,
            "Transferor/seller signature (Q35) must be completed at the time of transfer.",
            [Field::TransferorSignature],
        ));
    }

    let identity = [
        (Field::SellerTradeName, record.seller_trade_name.as_deref()),
        (Field::SellerStreetAddress, record.seller_street_address.as_deref()),
        (Field::SellerCityStateZip, record.seller_city_state_zip.as_deref()),
        (Field::SellerFflNumber, record.seller_ffl_number.as_deref()),
    ];
    let missing: Vec<Field> = identity
        .iter()
        .filter(|(_, value)| is_blank(*value))
        .map(|(field, _)| *field)
        .collect();

    if !missing.is_empty() {
        findings.push(Finding::new(
            "Q33",
            Severity::Warning,
            "Seller trade name, address, and FFL number (Q33) must be completed for transfer.",
            missing,
        ));
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{clean_record, closed_record};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_open_record_is_not_checked() {
        let mut record = clean_record();
        record.transferor_name = None;
        record.seller_ffl_number = None;
        assert!(check_seller_certification(&record).is_empty());
    }

    #[test]
    fn test_fully_closed_record_passes() {
        assert!(check_seller_certification(&closed_record()).is_empty());
    }

    #[test]
    fn test_name_and_signature_reported_separately() {
        let mut record = closed_record();
        record.transferor_name = Some(String::new());
        record.transferor_signature = None;

        let findings = check_seller_certification(&record);
        assert_eq!(findings.len(), 2);
        assert!(findings[0].references_only(Field::TransferorName));
        assert!(findings[1].references_only(Field::TransferorSignature));
    }

    #[test]
    fn test_seller_identity_is_one_aggregate_finding() {
        let mut record = closed_record();
        record.seller_trade_name = None;
        record.seller_ffl_number = Some("  ".to_string());

        let findings = check_seller_certification(&record);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule_code, "Q33");
        assert_eq!(findings[0].fields, vec!["SellerTradeName", "SellerFFLNumber"]);
    }

    #[test]
    fn test_all_identity_fields_missing() {
        let mut record = closed_record();
        record.seller_trade_name = None;
        record.seller_street_address = None;
        record.seller_city_state_zip = None;
        record.seller_ffl_number = None;

        let findings = check_seller_certification(&record);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].fields.len(), 4);
    }
}
