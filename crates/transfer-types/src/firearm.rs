//! Inventory firearm model
//!
//! A firearm's category-specific data lives in one closed variant,
//! [`FirearmDetails`], whose discriminant is the category tag. NFA status is
//! derived from [`FirearmType`] each time it is asked for and is never stored
//! next to the type, so the two cannot disagree.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::FieldName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirearmType {
    Pistol,
    Revolver,
    Rifle,
    Shotgun,
    Receiver,
    ShortBarreledRifle,
    ShortBarreledShotgun,
    MachineGun,
    Silencer,
    DestructiveDevice,
    Other,
}

/// National Firearms Act classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NfaClass {
    ShortBarreledRifle,
    ShortBarreledShotgun,
    MachineGun,
    Silencer,
    DestructiveDevice,
}

/// Category tag selecting which [`FirearmDetails`] variant applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirearmCategory {
    Handgun,
    LongGun,
    Nfa,
    Other,
}

impl FirearmType {
    pub fn nfa_class(self) -> Option<NfaClass> {
        match self {
            FirearmType::ShortBarreledRifle => Some(NfaClass::ShortBarreledRifle),
            FirearmType::ShortBarreledShotgun => Some(NfaClass::ShortBarreledShotgun),
            FirearmType::MachineGun => Some(NfaClass::MachineGun),
            FirearmType::Silencer => Some(NfaClass::Silencer),
            FirearmType::DestructiveDevice => Some(NfaClass::DestructiveDevice),
            FirearmType::Pistol
            | FirearmType::Revolver
            | FirearmType::Rifle
            | FirearmType::Shotgun
            | FirearmType::Receiver
            | FirearmType::Other => None,
        }
    }

    pub fn is_nfa(self) -> bool {
        self.nfa_class().is_some()
    }

    pub fn is_frame_or_receiver(self) -> bool {
        self == FirearmType::Receiver
    }

    /// Category whose details this type must carry
    pub fn category(self) -> FirearmCategory {
        match self {
            FirearmType::Pistol | FirearmType::Revolver => FirearmCategory::Handgun,
            FirearmType::Rifle | FirearmType::Shotgun => FirearmCategory::LongGun,
            FirearmType::ShortBarreledRifle
            | FirearmType::ShortBarreledShotgun
            | FirearmType::MachineGun
            | FirearmType::Silencer
            | FirearmType::DestructiveDevice => FirearmCategory::Nfa,
            FirearmType::Receiver | FirearmType::Other => FirearmCategory::Other,
        }
    }
}

/// NFA registration data (Forms 1-5)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NfaRegistration {
    pub registry_id: String,
    pub registration_date: NaiveDate,
    /// "Form1" through "Form5"
    pub form_type: String,
    pub tax_stamp_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum FirearmDetails {
    Handgun {
        barrel_length_inches: f64,
    },
    LongGun {
        barrel_length_inches: f64,
        overall_length_inches: f64,
    },
    Nfa(NfaRegistration),
    Other,
}

impl FirearmDetails {
    pub fn category(&self) -> FirearmCategory {
        match self {
            FirearmDetails::Handgun { .. } => FirearmCategory::Handgun,
            FirearmDetails::LongGun { .. } => FirearmCategory::LongGun,
            FirearmDetails::Nfa(_) => FirearmCategory::Nfa,
            FirearmDetails::Other => FirearmCategory::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Importer {
    pub name: String,
    pub city: String,
    pub state: String,
}

/// One firearm in the licensee's inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Firearm {
    pub id: Uuid,
    pub manufacturer: String,
    pub maker_name: Option<String>,
    pub manufacturer_city: String,
    pub manufacturer_state: String,
    pub importer: Option<Importer>,
    pub model: String,
    pub serial_number: String,
    pub additional_markings: Option<String>,
    pub is_serial_obliterated: bool,
    pub caliber: String,
    pub firearm_type: FirearmType,
    pub other_type_description: Option<String>,
    pub details: FirearmDetails,
    pub manufacture_date: NaiveDate,
    pub country_of_origin: String,
    pub is_antique: bool,
    pub is_imported: bool,
    pub is_multi_piece_frame: bool,
}

impl Firearm {
    pub fn nfa_class(&self) -> Option<NfaClass> {
        self.firearm_type.nfa_class()
    }

    pub fn is_nfa(&self) -> bool {
        self.firearm_type.is_nfa()
    }

    pub fn category(&self) -> FirearmCategory {
        self.details.category()
    }
}

/// Field references used in inventory findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InventoryField {
    ManufactureDate,
    Importer,
    CountryOfOrigin,
    SerialNumber,
    OtherTypeDescription,
    Details,
    BarrelLengthInches,
    OverallLengthInches,
    NfaRegistryId,
    RegistrationFormType,
    TransferorFflNumber,
    TransfereeFflNumber,
    Form4473SerialNumber,
    Agency,
    ReportNumber,
    NewSerial,
    FirearmId,
}

impl FieldName for InventoryField {
    fn name(&self) -> &'static str {
        match self {
            InventoryField::ManufactureDate => "ManufactureDate",
            InventoryField::Importer => "Importer",
            InventoryField::CountryOfOrigin => "CountryOfOrigin",
            InventoryField::SerialNumber => "SerialNumber",
            InventoryField::OtherTypeDescription => "OtherTypeDescription",
            InventoryField::Details => "Details",
            InventoryField::BarrelLengthInches => "BarrelLengthInches",
            InventoryField::OverallLengthInches => "OverallLengthInches",
            InventoryField::NfaRegistryId => "NfaRegistryId",
            InventoryField::RegistrationFormType => "RegistrationFormType",
            InventoryField::TransferorFflNumber => "TransferorFFLNumber",
            InventoryField::TransfereeFflNumber => "TransfereeFFLNumber",
            InventoryField::Form4473SerialNumber => "Form4473SerialNumber",
            InventoryField::Agency => "Agency",
            InventoryField::ReportNumber => "ReportNumber",
            InventoryField::NewSerial => "NewSerial",
            InventoryField::FirearmId => "FirearmId",
        }
    }
}
