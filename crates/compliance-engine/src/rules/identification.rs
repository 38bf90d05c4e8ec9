use chrono::NaiveDate;
use transfer_types::{Field, Finding, Severity, TransferRecord};

/// Identification document must not be expired (Q26.a)
///
/// An ID that expires today is still valid today.
pub fn check_identification(record: &TransferRecord, today: NaiveDate) -> Vec<Finding> {
    let mut findings = Vec::new();

    if record.identification_exp_date < today {
        findings.push(Finding::new(
            "Q26.a",
            Severity::Warning,
            format!(
                "Identification document (Q26.a) expired on {}.",
                record.identification_exp_date
            ),
            [Field::IdentificationExpDate],
        ));
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{clean_record, today};

    #[test]
    fn test_expiring_today_is_valid() {
        let mut record = clean_record();
        record.identification_exp_date = today();
        assert!(check_identification(&record, today()).is_empty());
    }

    #[test]
    fn test_expired_yesterday() {
        let mut record = clean_record();
        record.identification_exp_date = today().pred_opt().unwrap();

        let findings = check_identification(&record, today());
        assert_eq!(findings.len(), 1);
        assert!(findings[0].references_only(Field::IdentificationExpDate));
    }
}
