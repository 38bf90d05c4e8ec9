use transfer_types::{is_blank, Field, Finding, Severity, TransferRecord};

/// Section D recertification (Q30, Q31)
///
/// Needed only when the transfer happens on a different calendar day than the
/// original certification. The recertification date must be the transfer date.
pub fn check_recertification(record: &TransferRecord) -> Vec<Finding> {
    let mut findings = Vec::new();

    let Some(transfer_date) = record.transfer_date else {
        return findings;
    };
    if transfer_date == record.certification_date {
        return findings;
    }

    if is_blank(record.transferee_recert_signature.as_deref()) {
        findings.push(Finding::new(
            "Q30",
            Severity::Warning,
            "Transferee must recertify (Q30 signature) when the transfer date differs from the certification date (Q23).",
            [Field::TransfereeRecertSignature],
        ));
    }

    match record.transferee_recert_date {
        None => findings.push(Finding::new(
            "Q31",
            Severity::Warning,
            "Recertification date (Q31) is required when the transfer date differs from the certification date (Q23).",
            [Field::TransfereeRecertDate],
        )),
        Some(recert_date) if recert_date != transfer_date => findings.push(Finding::new(
            "Q31",
            Severity::Warning,
            format!(
                "Recertification date (Q31) {} must match the transfer date (Q36) {}.",
                recert_date, transfer_date
            ),
            [Field::TransfereeRecertDate],
        )),
        Some(_) => {}
    }

    findings
}
