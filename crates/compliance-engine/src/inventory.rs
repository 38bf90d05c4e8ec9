//! Inventory record checks
//!
//! Validates firearms held in inventory and their acquisition, disposition,
//! recovery, and serial-number history. Findings use the same shape as the
//! transfer-record rules, with [`InventoryField`] references.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;
use transfer_types::{
    is_blank, Acquisition, Disposition, Finding, Firearm, FirearmDetails, FirearmType,
    HistoryIndex, InventoryField, Recovery, SerialNumberChange, Severity,
};

lazy_static! {
    /// Serial numbers: letters, digits, and `.`, `-`, `/`
    static ref SERIAL_NUMBER_PATTERN: Regex = Regex::new(r"^[A-Za-z0-9.\-/]+$").unwrap();
}

const MIN_SERIAL_LENGTH: usize = 3;

/// Check one firearm's own data
pub fn check_firearm(firearm: &Firearm, today: NaiveDate) -> Vec<Finding> {
    let mut findings = Vec::new();

    if firearm.manufacture_date > today {
        findings.push(Finding::new(
            "27 CFR 478.125(e)",
            Severity::Warning,
            "Manufacture date cannot be in the future.",
            [InventoryField::ManufactureDate],
        ));
    }

    if firearm.is_imported {
        findings.extend(check_import(firearm));
    }

    findings.extend(check_serial(&firearm.serial_number, InventoryField::SerialNumber));

    if firearm.firearm_type == FirearmType::Other
        && is_blank(firearm.other_type_description.as_deref())
    {
        findings.push(Finding::new(
            "27 CFR 478.125(e)",
            Severity::Warning,
            "A description is required when the firearm type is 'Other'.",
            [InventoryField::OtherTypeDescription],
        ));
    }

    findings.extend(check_details(firearm));

    findings
}

fn check_import(firearm: &Firearm) -> Vec<Finding> {
    let mut findings = Vec::new();

    let importer_complete = firearm.importer.as_ref().map_or(false, |importer| {
        !importer.name.trim().is_empty()
            && !importer.city.trim().is_empty()
            && !importer.state.trim().is_empty()
    });
    if !importer_complete {
        findings.push(Finding::new(
            "27 CFR 478.92",
            Severity::Warning,
            "Importer name, city, and state are required for imported firearms.",
            [InventoryField::Importer],
        ));
    }

    let origin = firearm.country_of_origin.trim();
    if origin.eq_ignore_ascii_case("usa") || origin.eq_ignore_ascii_case("united states") {
        findings.push(Finding::new(
            "27 CFR 478.92",
            Severity::Warning,
            "Imported firearms cannot list the USA as country of origin.",
            [InventoryField::CountryOfOrigin],
        ));
    }

    findings
}

fn check_serial(serial: &str, field: InventoryField) -> Vec<Finding> {
    let mut findings = Vec::new();
    let serial = serial.trim();

    if serial.chars().count() < MIN_SERIAL_LENGTH {
        findings.push(Finding::new(
            "27 CFR 478.92",
            Severity::Warning,
            format!(
                "Serial number must be at least {} characters long.",
                MIN_SERIAL_LENGTH
            ),
            [field],
        ));
    } else if !SERIAL_NUMBER_PATTERN.is_match(serial) {
        findings.push(Finding::new(
            "27 CFR 478.92",
            Severity::Warning,
            "Serial number may contain only letters, digits, '.', '-', and '/'.",
            [field],
        ));
    }

    findings
}

/// The details variant must be the one the firearm type calls for, and its
/// measurements must be in range.
fn check_details(firearm: &Firearm) -> Vec<Finding> {
    let mut findings = Vec::new();

    let expected = firearm.firearm_type.category();
    if firearm.category() != expected {
        findings.push(Finding::new(
            "27 CFR 478.125(e)",
            Severity::Warning,
            format!(
                "Firearm type {:?} requires {:?} details, found {:?}.",
                firearm.firearm_type,
                expected,
                firearm.category()
            ),
            [InventoryField::Details],
        ));
    }

    match &firearm.details {
        FirearmDetails::Handgun {
            barrel_length_inches,
        } => {
            if !(1.0..=20.0).contains(barrel_length_inches) {
                findings.push(out_of_range(
                    "Handgun barrel length",
                    *barrel_length_inches,
                    1.0,
                    20.0,
                    InventoryField::BarrelLengthInches,
                ));
            }
        }
        FirearmDetails::LongGun {
            barrel_length_inches,
            overall_length_inches,
        } => {
            if !(10.0..=60.0).contains(barrel_length_inches) {
                findings.push(out_of_range(
                    "Long gun barrel length",
                    *barrel_length_inches,
                    10.0,
                    60.0,
                    InventoryField::BarrelLengthInches,
                ));
            }
            if !(20.0..=120.0).contains(overall_length_inches) {
                findings.push(out_of_range(
                    "Long gun overall length",
                    *overall_length_inches,
                    20.0,
                    120.0,
                    InventoryField::OverallLengthInches,
                ));
            }
        }
        FirearmDetails::Nfa(registration) => {
            if registration.registry_id.trim().is_empty() {
                findings.push(Finding::new(
                    "26 U.S.C. § 5841",
                    Severity::Warning,
                    "NFA items require a registry id.",
                    [InventoryField::NfaRegistryId],
                ));
            }
            if registration.form_type.trim().is_empty() {
                findings.push(Finding::new(
                    "26 U.S.C. § 5841",
                    Severity::Warning,
                    "NFA items require the registration form type (Form 1-5).",
                    [InventoryField::RegistrationFormType],
                ));
            }
        }
        FirearmDetails::Other => {}
    }

    findings
}

fn out_of_range(what: &str, value: f64, min: f64, max: f64, field: InventoryField) -> Finding {
    Finding::new(
        "27 CFR 478.125(e)",
        Severity::Warning,
        format!(
            "{} of {} inches is outside the accepted range of {}-{} inches.",
            what, value, min, max
        ),
        [field],
    )
}

/// Inbound record must identify the transferor by FFL number or full address
pub fn check_acquisition(acquisition: &Acquisition) -> Vec<Finding> {
    let mut findings = Vec::new();

    let has_address = acquisition
        .transferor_address
        .as_ref()
        .map_or(false, |a| a.is_complete());
    if is_blank(acquisition.transferor_ffl_number.as_deref()) && !has_address {
        findings.push(Finding::new(
            "27 CFR 478.125(e)",
            Severity::Warning,
            "Either the transferor FFL number or a full address must be provided.",
            [InventoryField::TransferorFflNumber],
        ));
    }

    findings
}

/// Outbound record must identify the transferee; non-licensees need the 4473
/// serial number
pub fn check_disposition(disposition: &Disposition) -> Vec<Finding> {
    let mut findings = Vec::new();

    let no_ffl = is_blank(disposition.transferee_ffl_number.as_deref());
    let has_address = disposition
        .transferee_address
        .as_ref()
        .map_or(false, |a| a.is_complete());

    if no_ffl && !has_address {
        findings.push(Finding::new(
            "27 CFR 478.125(e)",
            Severity::Warning,
            "Either the transferee FFL number or a full address must be provided.",
            [InventoryField::TransfereeFflNumber],
        ));
    }

    if no_ffl && is_blank(disposition.form_4473_serial_number.as_deref()) {
        findings.push(Finding::new(
            "27 CFR 478.125(e)",
            Severity::Warning,
            "Form 4473 serial number is required for dispositions to non-licensees.",
            [InventoryField::Form4473SerialNumber],
        ));
    }

    findings
}

/// Loss, theft, and seizure must carry the reporting agency and case number
pub fn check_recovery(recovery: &Recovery) -> Vec<Finding> {
    let mut findings = Vec::new();

    if !recovery.event_type.requires_law_enforcement() {
        return findings;
    }

    if is_blank(recovery.agency.as_deref()) {
        findings.push(Finding::new(
            "27 CFR 478.39a",
            Severity::Warning,
            format!(
                "Law-enforcement agency is required for a {:?} event.",
                recovery.event_type
            ),
            [InventoryField::Agency],
        ));
    }
    if is_blank(recovery.report_number.as_deref()) {
        findings.push(Finding::new(
            "27 CFR 478.39a",
            Severity::Warning,
            format!(
                "Report or case number is required for a {:?} event.",
                recovery.event_type
            ),
            [InventoryField::ReportNumber],
        ));
    }

    findings
}

pub fn check_serial_change(change: &SerialNumberChange) -> Vec<Finding> {
    let mut findings = Vec::new();

    if change
        .previous_serial
        .trim()
        .eq_ignore_ascii_case(change.new_serial.trim())
    {
        findings.push(Finding::new(
            "27 CFR 478.92",
            Severity::Warning,
            "New serial number must differ from the previous serial number.",
            [InventoryField::NewSerial],
        ));
    }

    findings.extend(check_serial(&change.new_serial, InventoryField::NewSerial));

    findings
}

/// Firearm checks followed by every history entry recorded against it:
/// acquisitions, dispositions, recoveries, then serial changes.
pub fn check_history(firearm: &Firearm, index: &HistoryIndex<'_>, today: NaiveDate) -> Vec<Finding> {
    let mut findings = check_firearm(firearm, today);
    let history = index.for_firearm(firearm.id);

    for acquisition in &history.acquisitions {
        findings.extend(check_acquisition(acquisition));
    }
    for disposition in &history.dispositions {
        findings.extend(check_disposition(disposition));
    }
    if history.dispositions.len() > history.acquisitions.len() {
        findings.push(Finding::new(
            "27 CFR 478.125(e)",
            Severity::Warning,
            format!(
                "Firearm {} has {} dispositions but only {} acquisitions.",
                firearm.id,
                history.dispositions.len(),
                history.acquisitions.len()
            ),
            [InventoryField::FirearmId],
        ));
    }
    for recovery in &history.recoveries {
        findings.extend(check_recovery(recovery));
    }
    for change in &history.serial_changes {
        findings.extend(check_serial_change(change));
    }

    debug!(
        firearm_id = %firearm.id,
        category = ?firearm.category(),
        findings = findings.len(),
        "inventory history checked"
    );

    findings
}
