//! Record fixtures shared by the unit tests

use chrono::{Duration, NaiveDate};
use transfer_types::{Declarations, FirearmLine, NicsOutcome, RaceIndicators, TransferRecord};

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub(crate) fn today() -> NaiveDate {
    date(2024, 6, 15)
}

pub(crate) fn rifle_line() -> FirearmLine {
    FirearmLine {
        manufacturer_or_pmf: "Ruger".to_string(),
        model: Some("10/22".to_string()),
        serial_number: "0001-23456".to_string(),
        firearm_type: "Rifle".to_string(),
        caliber_or_gauge: ".22 LR".to_string(),
    }
}

/// Adult long-gun purchase certified today, NICS Proceed ten days ago, not
/// yet transferred. Produces no findings.
pub(crate) fn clean_record() -> TransferRecord {
    TransferRecord {
        firearm_lines: Some(vec![rifle_line()]),
        total_number_of_firearms: "1".to_string(),
        transferee_last_name: "Doe".to_string(),
        transferee_first_name: "John".to_string(),
        date_of_birth: date(1990, 5, 1),
        race: RaceIndicators {
            white: true,
            ..RaceIndicators::default()
        },
        country_of_citizenship: "United States of America".to_string(),
        declarations: Declarations::all_clear(),
        transferee_signature: "John Doe".to_string(),
        certification_date: today(),
        category_long_gun: true,
        identification_type: "Driver's License".to_string(),
        identification_number: "D123-456-78-901-0".to_string(),
        identification_exp_date: date(2027, 1, 1),
        nics_check_initiated_date: Some(today() - Duration::days(10)),
        nics_or_state_transaction_number: Some("100ABC1DE".to_string()),
        initial_nics_response: NicsOutcome::Proceed,
        ..TransferRecord::default()
    }
}

/// [`clean_record`] transferred the same day it was certified, with the
/// seller section completed.
pub(crate) fn closed_record() -> TransferRecord {
    TransferRecord {
        transfer_date: Some(today()),
        transferor_name: Some("Sam Seller".to_string()),
        transferor_signature: Some("Sam Seller".to_string()),
        seller_trade_name: Some("Main Street Arms".to_string()),
        seller_street_address: Some("12 Main Street".to_string()),
        seller_city_state_zip: Some("Orlando, FL 32801".to_string()),
        seller_ffl_number: Some("1-59-000-01-2B-00001".to_string()),
        ..clean_record()
    }
}
