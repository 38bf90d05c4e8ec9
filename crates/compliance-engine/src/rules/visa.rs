use transfer_types::{is_blank, Field, Finding, Severity, TransferRecord};

/// Nonimmigrant visa exception (Q21.m.1, Q21.m.2, Q26.d)
///
/// The exception answer only matters when the visa answer is "yes". At most
/// one finding is produced.
pub fn check_nonimmigrant_visa(record: &TransferRecord) -> Vec<Finding> {
    let mut findings = Vec::new();

    if record.declarations.non_immigrant_visa != Some(true) {
        return findings;
    }

    match record.non_immigrant_visa_exception {
        None => findings.push(Finding::new(
            "Q21.m.2",
            Severity::Warning,
            "Q21.m.2 must be answered when Q21.m.1 is 'Yes'.",
            [Field::NonImmigrantVisaException],
        )),
        Some(false) => findings.push(Finding::new(
            "Q21.m.2",
            Severity::Critical,
            "Transferee answered 'No' to Q21.m.2 while answering 'Yes' to Q21.m.1. This is prohibited.",
            [Field::NonImmigrantVisaException],
        )),
        Some(true) => {
            if is_blank(record.non_immigrant_exception_documentation.as_deref()) {
                findings.push(Finding::new(
                    "Q26.d",
                    Severity::Warning,
                    "Nonimmigrant alien exception (Q21.m.2) requires supporting documentation (Q26.d).",
                    [Field::NonImmigrantExceptionDocumentation],
                ));
            }
        }
    }

    findings
}
