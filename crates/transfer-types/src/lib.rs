pub mod firearm;
pub mod history;
pub mod record;
pub mod types;

pub use firearm::{
    Firearm, FirearmCategory, FirearmDetails, FirearmType, Importer, InventoryField, NfaClass,
    NfaRegistration,
};
pub use history::{
    Acquisition, Address, Disposition, FirearmHistory, HistoryIndex, Recovery, RecoveryEventType,
    SerialChangeReason, SerialNumberChange,
};
pub use record::{
    is_blank, Declaration, Declarations, ExemptionClaim, Field, FirearmLine, NicsOutcome,
    RaceIndicators, TransferRecord,
};
pub use types::{FieldName, Finding, Severity, TransferReport};
