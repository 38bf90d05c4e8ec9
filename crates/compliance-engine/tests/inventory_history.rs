//! Inventory checks over a small multi-firearm book
//!
//! Run with: cargo test -p compliance-engine --test inventory_history

#[path = "common/fixtures.rs"]
mod fixtures;

use compliance_engine::inventory::{check_firearm, check_history};
use fixtures::{date, pistol, today};
use pretty_assertions::assert_eq;
use transfer_types::{
    Acquisition, Address, Disposition, FirearmDetails, FirearmType, HistoryIndex, InventoryField,
    NfaRegistration, Recovery, RecoveryEventType, SerialChangeReason, SerialNumberChange,
};
use uuid::Uuid;

fn acquisition(firearm_id: Uuid) -> Acquisition {
    Acquisition {
        id: Uuid::new_v4(),
        firearm_id,
        date: date(2024, 1, 10),
        transferor_name: "Lipsey's".to_string(),
        transferor_ffl_number: Some("5-72-000-01-2A-00003".to_string()),
        transferor_address: None,
    }
}

fn retail_sale(firearm_id: Uuid) -> Disposition {
    Disposition {
        id: Uuid::new_v4(),
        firearm_id,
        date: date(2024, 3, 2),
        transferee_name: "Alex Rivera".to_string(),
        transferee_ffl_number: None,
        transferee_address: Some(Address {
            line1: "9 Elm Street".to_string(),
            line2: Some("Apt 2".to_string()),
            city: "Tampa".to_string(),
            state: Some("FL".to_string()),
            zip: "33602".to_string(),
        }),
        form_4473_serial_number: Some("2024-0117".to_string()),
    }
}

#[test]
fn clean_book_has_no_findings() {
    let sold = pistol();
    let stocked = pistol();

    let acquisitions = vec![acquisition(sold.id), acquisition(stocked.id)];
    let dispositions = vec![retail_sale(sold.id)];
    let index = HistoryIndex::build(&acquisitions, &dispositions, &[], &[]);

    assert!(check_history(&sold, &index, today()).is_empty());
    assert!(check_history(&stocked, &index, today()).is_empty());
    assert!(index.for_firearm(stocked.id).is_in_inventory());
    assert!(!index.for_firearm(sold.id).is_in_inventory());
}

#[test]
fn history_findings_come_in_entry_order() {
    let firearm = pistol();

    let mut bad_acquisition = acquisition(firearm.id);
    bad_acquisition.transferor_ffl_number = None;
    let mut bad_sale = retail_sale(firearm.id);
    bad_sale.form_4473_serial_number = None;
    let recoveries = vec![Recovery {
        id: Uuid::new_v4(),
        firearm_id: firearm.id,
        event_type: RecoveryEventType::Lost,
        event_date: date(2024, 5, 1),
        agency: Some("Tampa PD".to_string()),
        report_number: None,
        notes: None,
    }];
    let serial_changes = vec![SerialNumberChange {
        id: Uuid::new_v4(),
        firearm_id: firearm.id,
        previous_serial: firearm.serial_number.clone(),
        new_serial: "X!".to_string(),
        change_date: date(2024, 5, 20),
        reason: SerialChangeReason::AtfVariance,
        document_id: None,
        notes: None,
    }];

    let acquisitions = vec![bad_acquisition];
    let dispositions = vec![bad_sale];
    let index = HistoryIndex::build(&acquisitions, &dispositions, &recoveries, &serial_changes);

    let findings = check_history(&firearm, &index, today());
    let fields: Vec<&str> = findings.iter().map(|f| f.fields[0].as_str()).collect();
    assert_eq!(
        fields,
        vec!["TransferorFFLNumber", "Form4473SerialNumber", "ReportNumber", "NewSerial"]
    );
}

#[test]
fn nfa_item_with_registration_passes() {
    let mut firearm = pistol();
    firearm.firearm_type = FirearmType::ShortBarreledRifle;
    firearm.details = FirearmDetails::Nfa(NfaRegistration {
        registry_id: "NFRTR-000123".to_string(),
        registration_date: date(2023, 2, 14),
        form_type: "Form4".to_string(),
        tax_stamp_number: Some("TS-88812".to_string()),
    });

    assert!(firearm.is_nfa());
    assert!(check_firearm(&firearm, today()).is_empty());
}

#[test]
fn handgun_type_with_long_gun_details_is_flagged() {
    let mut firearm = pistol();
    firearm.details = FirearmDetails::LongGun {
        barrel_length_inches: 16.0,
        overall_length_inches: 30.0,
    };

    let findings = check_firearm(&firearm, today());
    assert_eq!(findings.len(), 1);
    assert!(findings[0].references_only(InventoryField::Details));
}

#[test]
fn history_json_round_trips_through_index() -> anyhow::Result<()> {
    let firearm = pistol();
    let json = serde_json::to_string(&vec![acquisition(firearm.id)])?;
    let acquisitions: Vec<Acquisition> = serde_json::from_str(&json)?;

    let index = HistoryIndex::build(&acquisitions, &[], &[], &[]);
    assert_eq!(index.firearm_ids(), vec![firearm.id]);
    Ok(())
}
