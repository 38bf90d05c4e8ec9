use chrono::NaiveDate;
use uuid::Uuid;

/// Anything a [`Finding`] can point at.
///
/// Implemented by the field enums of each record kind so a finding can carry
/// stable, form-level names without tying `Finding` to one record type.
pub trait FieldName {
    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Finding {
    pub rule_code: String, // e.g., "Q21.c" or "27 CFR 478.102(c)"
    pub severity: Severity,
    pub message: String,
    pub fields: Vec<String>, // Ordered, no duplicates
}

impl Finding {
    pub fn new<F, I>(rule_code: &str, severity: Severity, message: impl Into<String>, fields: I) -> Self
    where
        F: FieldName,
        I: IntoIterator<Item = F>,
    {
        let mut names: Vec<String> = Vec::new();
        for field in fields {
            let name = field.name();
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }

        Self {
            rule_code: rule_code.to_string(),
            severity,
            message: message.into(),
            fields: names,
        }
    }

    /// True when this finding implicates `field`.
    pub fn references(&self, field: impl FieldName) -> bool {
        let name = field.name();
        self.fields.iter().any(|f| f == name)
    }

    /// True when `field` is the only field this finding implicates.
    pub fn references_only(&self, field: impl FieldName) -> bool {
        self.fields.len() == 1 && self.references(field)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Severity {
    /// The answer or outcome prohibits the transfer outright
    Critical,
    /// Required information is missing or inconsistent
    Warning,
    Info,
}

/// Outcome of one full evaluation pass over a transfer record
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TransferReport {
    pub record_id: Option<Uuid>,
    pub findings: Vec<Finding>,
    pub evaluated_on: NaiveDate,
}

impl TransferReport {
    /// A record may proceed only when the full pass produced no findings.
    pub fn is_transfer_eligible(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn critical_findings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Critical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Clone, Copy)]
    enum TestField {
        Alpha,
        Beta,
    }

    impl FieldName for TestField {
        fn name(&self) -> &'static str {
            match self {
                TestField::Alpha => "Alpha",
                TestField::Beta => "Beta",
            }
        }
    }

    #[test]
    fn test_finding_fields_keep_order_and_drop_duplicates() {
        let finding = Finding::new(
            "X",
            Severity::Warning,
            "msg",
            [TestField::Beta, TestField::Alpha, TestField::Beta],
        );
        assert_eq!(finding.fields, vec!["Beta".to_string(), "Alpha".to_string()]);
        assert!(finding.references(TestField::Alpha));
        assert!(!finding.references_only(TestField::Alpha));
    }

    #[test]
    fn test_report_eligibility() {
        let mut report = TransferReport {
            record_id: None,
            findings: Vec::new(),
            evaluated_on: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        assert!(report.is_transfer_eligible());

        report.findings.push(Finding::new(
            "Q21.c",
            Severity::Critical,
            "prohibited",
            [TestField::Alpha],
        ));
        assert!(!report.is_transfer_eligible());
        assert_eq!(report.critical_findings().count(), 1);
    }
}
