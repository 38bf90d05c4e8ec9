//! NICS exemption resolver (Section C, Q27-Q29)
//!
//! Decides whether a live background check was required, which exemption (if
//! any) the record claims, and whether that claim holds up. Straight-line
//! comparisons only.
//!
//! When no transfer date is recorded the 30-day validity window is measured
//! against the caller's reference date, so a stale draft starts reporting
//! expiry once enough days pass. That is intended: an open draft must be
//! re-checked before it can be completed.

use chrono::NaiveDate;
use transfer_types::{is_blank, ExemptionClaim, Field, Finding, NicsOutcome, Severity, TransferRecord};

use crate::age::elapsed_days;
use crate::config::EngineConfig;

pub fn resolve(record: &TransferRecord, today: NaiveDate, config: &EngineConfig) -> Vec<Finding> {
    let mut findings = Vec::new();

    let claim = match record.exemption_claim() {
        Some(claim) => claim,
        None => {
            findings.push(Finding::new(
                "Q28/Q29",
                Severity::Warning,
                "Only one NICS exemption may be claimed: either a prior NFA check (Q28) or a state permit (Q29), not both.",
                [Field::IsNfaBackgroundCheckAlready, Field::IsStatePermitExemption],
            ));
            // The permit is still the one with checkable prerequisites
            ExemptionClaim::StatePermit
        }
    };

    match claim {
        ExemptionClaim::None => findings.extend(check_live_nics(record, today, config)),
        ExemptionClaim::StatePermit => findings.extend(check_state_permit(record, today)),
        // Approved NFA paperwork lives outside this record
        ExemptionClaim::NfaPriorCheck => {}
    }

    findings
}

fn check_live_nics(record: &TransferRecord, today: NaiveDate, config: &EngineConfig) -> Vec<Finding> {
    let mut findings = Vec::new();

    if record.nics_check_initiated_date.is_none() {
        findings.push(Finding::new(
            "Q27.a",
            Severity::Warning,
            "NICS check is required unless an NFA (Q28) or state permit (Q29) exemption applies. The date the check was initiated must be recorded (Q27.a).",
            [Field::NicsCheckInitiatedDate],
        ));
    }

    match record.initial_nics_response {
        NicsOutcome::NotChecked => findings.push(Finding::new(
            "Q27.c",
            Severity::Warning,
            "The initial NICS response (Q27.c) must be recorded when no NFA or permit exemption is claimed.",
            [Field::InitialNicsResponse],
        )),
        outcome if outcome.prohibits_transfer() => findings.push(Finding::new(
            "Q27.c",
            Severity::Critical,
            format!("Initial NICS response was {:?}. Transfer is prohibited.", outcome),
            [Field::InitialNicsResponse],
        )),
        NicsOutcome::Delayed => match record.nics_delayed_eligible_date {
            None => findings.push(Finding::new(
                "Q27.c",
                Severity::Warning,
                "A delayed NICS response requires the date the firearm may be transferred to be recorded (Q27.c).",
                [Field::NicsDelayedEligibleDate],
            )),
            Some(eligible) => {
                if let Some(transfer_date) = record.transfer_date {
                    if transfer_date < eligible {
                        findings.push(Finding::new(
                            "Q27.c",
                            Severity::Critical,
                            format!(
                                "Transfer on {} precedes the delayed-response eligible date {}.",
                                transfer_date, eligible
                            ),
                            [Field::TransferDate, Field::NicsDelayedEligibleDate],
                        ));
                    }
                }
            }
        },
        // Proceed and Overturned need nothing further
        _ => {}
    }

    if let Some(initiated) = record.nics_check_initiated_date {
        let comparison = record.transfer_date.unwrap_or(today);
        let elapsed = elapsed_days(initiated, comparison);
        if elapsed >= config.nics_validity_days {
            findings.push(Finding::new(
                "27 CFR 478.102(c)",
                Severity::Critical,
                format!(
                    "A NICS check is valid for {} calendar days. The check initiated on {} has expired ({} days). A new check is required.",
                    config.nics_validity_days, initiated, elapsed
                ),
                [Field::NicsCheckInitiatedDate],
            ));
        }
    }

    findings
}

fn check_state_permit(record: &TransferRecord, today: NaiveDate) -> Vec<Finding> {
    let mut findings = Vec::new();

    if is_blank(record.state_permit_type.as_deref()) {
        findings.push(Finding::new(
            "Q29",
            Severity::Warning,
            "State permit type must be specified when claiming the permit exemption (Q29).",
            [Field::StatePermitType],
        ));
    }

    match record.state_permit_expiration_date {
        None => findings.push(Finding::new(
            "Q29",
            Severity::Warning,
            "State permit expiration date must be specified when claiming the permit exemption (Q29).",
            [Field::StatePermitExpirationDate],
        )),
        Some(expires) if expires < today => findings.push(Finding::new(
            "Q29",
            Severity::Critical,
            format!(
                "State permit (Q29) expired on {}; the exemption cannot be claimed.",
                expires
            ),
            [Field::StatePermitExpirationDate],
        )),
        Some(_) => {}
    }

    findings
}
