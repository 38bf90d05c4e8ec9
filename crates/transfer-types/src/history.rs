//! Acquisition, disposition, recovery, and serial-number history
//!
//! Entries point at their firearm by id only. Looking up a firearm's history
//! goes through [`HistoryIndex`], built once from the entry lists.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub state: Option<String>,
    pub zip: String,
}

impl Address {
    /// Street, city, state and ZIP all present
    pub fn is_complete(&self) -> bool {
        !self.line1.trim().is_empty()
            && !self.city.trim().is_empty()
            && self.state.as_deref().map_or(false, |s| !s.trim().is_empty())
            && !self.zip.trim().is_empty()
    }
}

/// Inbound transfer to the licensee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acquisition {
    pub id: Uuid,
    pub firearm_id: Uuid,
    pub date: NaiveDate,
    pub transferor_name: String,
    pub transferor_ffl_number: Option<String>,
    pub transferor_address: Option<Address>,
}

/// Outbound transfer from the licensee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disposition {
    pub id: Uuid,
    pub firearm_id: Uuid,
    pub date: NaiveDate,
    pub transferee_name: String,
    pub transferee_ffl_number: Option<String>,
    pub transferee_address: Option<Address>,
    pub form_4473_serial_number: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecoveryEventType {
    Lost,
    Stolen,
    Seized,
    Recovered,
    Destroyed,
}

impl RecoveryEventType {
    /// Events that must be reported to law enforcement
    pub fn requires_law_enforcement(self) -> bool {
        matches!(
            self,
            RecoveryEventType::Lost | RecoveryEventType::Stolen | RecoveryEventType::Seized
        )
    }
}

/// Loss, theft, seizure, or recovery of a firearm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recovery {
    pub id: Uuid,
    pub firearm_id: Uuid,
    pub event_type: RecoveryEventType,
    pub event_date: NaiveDate,
    pub agency: Option<String>,
    pub report_number: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SerialChangeReason {
    ClericalCorrection,
    AtfVariance,
    ManufacturerRecall,
    ReplacementReceiver,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialNumberChange {
    pub id: Uuid,
    pub firearm_id: Uuid,
    pub previous_serial: String,
    pub new_serial: String,
    pub change_date: NaiveDate,
    pub reason: SerialChangeReason,
    pub document_id: Option<Uuid>,
    pub notes: Option<String>,
}

/// Everything recorded against one firearm, borrowed from the index
#[derive(Debug, Clone, Default)]
pub struct FirearmHistory<'a> {
    pub acquisitions: Vec<&'a Acquisition>,
    pub dispositions: Vec<&'a Disposition>,
    pub recoveries: Vec<&'a Recovery>,
    pub serial_changes: Vec<&'a SerialNumberChange>,
}

impl FirearmHistory<'_> {
    pub fn is_empty(&self) -> bool {
        self.acquisitions.is_empty()
            && self.dispositions.is_empty()
            && self.recoveries.is_empty()
            && self.serial_changes.is_empty()
    }

    /// In the licensee's possession: more acquisitions than dispositions
    pub fn is_in_inventory(&self) -> bool {
        self.acquisitions.len() > self.dispositions.len()
    }
}

/// Reverse lookup from firearm id to its history entries
#[derive(Debug, Default)]
pub struct HistoryIndex<'a> {
    acquisitions: HashMap<Uuid, Vec<&'a Acquisition>>,
    dispositions: HashMap<Uuid, Vec<&'a Disposition>>,
    recoveries: HashMap<Uuid, Vec<&'a Recovery>>,
    serial_changes: HashMap<Uuid, Vec<&'a SerialNumberChange>>,
}

impl<'a> HistoryIndex<'a> {
    pub fn build(
        acquisitions: &'a [Acquisition],
        dispositions: &'a [Disposition],
        recoveries: &'a [Recovery],
        serial_changes: &'a [SerialNumberChange],
    ) -> Self {
        let mut index = Self::default();
        for entry in acquisitions {
            index.acquisitions.entry(entry.firearm_id).or_default().push(entry);
        }
        for entry in dispositions {
            index.dispositions.entry(entry.firearm_id).or_default().push(entry);
        }
        for entry in recoveries {
            index.recoveries.entry(entry.firearm_id).or_default().push(entry);
        }
        for entry in serial_changes {
            index
                .serial_changes
                .entry(entry.firearm_id)
                .or_default()
                .push(entry);
        }
        index
    }

    /// History entries for `firearm_id`, each list in input order
    pub fn for_firearm(&self, firearm_id: Uuid) -> FirearmHistory<'a> {
        FirearmHistory {
            acquisitions: self
                .acquisitions
                .get(&firearm_id)
                .cloned()
                .unwrap_or_default(),
            dispositions: self
                .dispositions
                .get(&firearm_id)
                .cloned()
                .unwrap_or_default(),
            recoveries: self.recoveries.get(&firearm_id).cloned().unwrap_or_default(),
            serial_changes: self
                .serial_changes
                .get(&firearm_id)
                .cloned()
                .unwrap_or_default(),
        }
    }

    /// Ids of every firearm with at least one entry
    pub fn firearm_ids(&self) -> Vec<Uuid> {
        let mut ids: Vec<Uuid> = self
            .acquisitions
            .keys()
            .chain(self.dispositions.keys())
            .chain(self.recoveries.keys())
            .chain(self.serial_changes.keys())
            .copied()
            .collect();
        ids.sort();
        ids.dedup();
        ids
    }
}
