//! Minimum age per 18 U.S.C. § 922(b)(1)
//!
//! Age is taken at the certification date (Q23), not the evaluation date:
//! the form certifies eligibility as of the day it was signed.

use transfer_types::{Field, Finding, FirearmLine, Severity, TransferRecord};

use crate::age::completed_years;
use crate::config::EngineConfig;
use crate::patterns::{transfer_category, TransferCategory};

pub fn check_age_eligibility(
    record: &TransferRecord,
    lines: &[FirearmLine],
    config: &EngineConfig,
) -> Vec<Finding> {
    let mut findings = Vec::new();

    let age = completed_years(record.date_of_birth, record.certification_date);

    match transfer_category(record, lines, &config.category_keywords) {
        TransferCategory::HandgunOrOther => {
            if age < config.handgun_min_age {
                findings.push(Finding::new(
                    "18 U.S.C. § 922(b)(1)",
                    Severity::Critical,
                    format!(
                        "Transferee must be {} or older to receive a handgun or 'other' firearm (age {} at certification).",
                        config.handgun_min_age, age
                    ),
                    [Field::DateOfBirth],
                ));
            }
        }
        TransferCategory::LongGun => {
            if age < config.long_gun_min_age {
                findings.push(Finding::new(
                    "18 U.S.C. § 922(b)(1)",
                    Severity::Critical,
                    format!(
                        "Transferee must be {} or older to receive a rifle or shotgun (age {} at certification).",
                        config.long_gun_min_age, age
                    ),
                    [Field::DateOfBirth],
                ));
            }
        }
    }

    findings
}
