//! Record builders shared by the integration tests
#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use transfer_types::{
    Declarations, Firearm, FirearmDetails, FirearmLine, FirearmType, NicsOutcome,
    RaceIndicators, TransferRecord,
};
use uuid::Uuid;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Reference date every scenario is evaluated against
pub fn today() -> NaiveDate {
    date(2024, 6, 15)
}

pub fn line(firearm_type: &str) -> FirearmLine {
    FirearmLine {
        manufacturer_or_pmf: "Smith & Wesson".to_string(),
        model: Some("M&P".to_string()),
        serial_number: "ABC1234".to_string(),
        firearm_type: firearm_type.to_string(),
        caliber_or_gauge: "9mm".to_string(),
    }
}

/// Adult long-gun purchase, NICS Proceed ten days before [`today`], no
/// transfer date yet
pub fn eligible_long_gun_record() -> TransferRecord {
    TransferRecord {
        id: Some(Uuid::new_v4()),
        firearm_lines: Some(vec![line("Shotgun")]),
        total_number_of_firearms: "1".to_string(),
        transferee_last_name: "Rivera".to_string(),
        transferee_first_name: "Alex".to_string(),
        date_of_birth: date(1985, 11, 20),
        race: RaceIndicators {
            asian: true,
            ..RaceIndicators::default()
        },
        country_of_citizenship: "United States of America".to_string(),
        declarations: Declarations::all_clear(),
        transferee_signature: "Alex Rivera".to_string(),
        certification_date: today(),
        category_long_gun: true,
        identification_type: "Driver's License".to_string(),
        identification_number: "R123-456-85-900-0".to_string(),
        identification_exp_date: date(2028, 11, 20),
        nics_check_initiated_date: Some(today() - Duration::days(10)),
        nics_or_state_transaction_number: Some("100XYZ9AB".to_string()),
        initial_nics_response: NicsOutcome::Proceed,
        ..TransferRecord::default()
    }
}

/// Same buyer picking up a handgun on the day of certification
pub fn completed_handgun_record() -> TransferRecord {
    TransferRecord {
        firearm_lines: Some(vec![line("Pistol")]),
        category_handgun: true,
        category_long_gun: false,
        transfer_date: Some(today()),
        transferor_name: Some("Pat Counter".to_string()),
        transferor_signature: Some("Pat Counter".to_string()),
        seller_trade_name: Some("Riverside Outfitters".to_string()),
        seller_street_address: Some("400 River Road".to_string()),
        seller_city_state_zip: Some("Tampa, FL 33602".to_string()),
        seller_ffl_number: Some("1-59-000-01-2B-00002".to_string()),
        ..eligible_long_gun_record()
    }
}

pub fn pistol() -> Firearm {
    Firearm {
        id: Uuid::new_v4(),
        manufacturer: "Glock".to_string(),
        maker_name: None,
        manufacturer_city: "Smyrna".to_string(),
        manufacturer_state: "GA".to_string(),
        importer: None,
        model: "19".to_string(),
        serial_number: "BXYZ123".to_string(),
        additional_markings: None,
        is_serial_obliterated: false,
        caliber: "9mm".to_string(),
        firearm_type: FirearmType::Pistol,
        other_type_description: None,
        details: FirearmDetails::Handgun {
            barrel_length_inches: 4.02,
        },
        manufacture_date: date(2022, 8, 1),
        country_of_origin: "USA".to_string(),
        is_antique: false,
        is_imported: false,
        is_multi_piece_frame: false,
    }
}
