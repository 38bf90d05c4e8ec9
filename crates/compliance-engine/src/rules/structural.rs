// Structural and completeness checks, Sections A and B
use chrono::NaiveDate;
use transfer_types::{is_blank, Field, Finding, Severity, TransferRecord};

/// Race selection, pawn-redemption lines, and a plausible birth date
pub fn check_structural(record: &TransferRecord, today: NaiveDate) -> Vec<Finding> {
    let mut findings = Vec::new();

    // Q18.b: at least one race box
    if !record.race.any_selected() {
        findings.push(Finding::new(
            "Q18.b",
            Severity::Warning,
            "At least one race must be selected in Question 18.b.",
            Field::RACE,
        ));
    }

    // Q7: pawn redemption needs the Q1 line numbers
    if record.is_pawn_redemption && is_blank(record.pawn_redemption_line_numbers.as_deref()) {
        findings.push(Finding::new(
            "Q7",
            Severity::Warning,
            "When the transaction is a pawn redemption (Q7), the line number(s) from Question 1 must be recorded.",
            [Field::PawnRedemptionLineNumbers],
        ));
    }

    // Q15
    if record.date_of_birth > today {
        findings.push(Finding::new(
            "Q15",
            Severity::Warning,
            "Date of birth cannot be in the future.",
            [Field::DateOfBirth],
        ));
    }

    findings
}
