pub mod age;
pub mod config;
pub mod error;
pub mod findings;
pub mod inventory;
pub mod nics;
pub mod patterns;
pub mod rules;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{CategoryKeyword, EngineConfig, MatchMode};
pub use error::{ConfigError, ContractViolation};
pub use findings::FindingCollector;

use chrono::NaiveDate;
use tracing::{debug, info, warn};
use transfer_types::{Finding, TransferRecord, TransferReport};

/// ComplianceEngine entry point
///
/// Holds only an immutable [`EngineConfig`], so one engine can be shared
/// across threads and reused for any number of records.
#[derive(Debug, Clone, Default)]
pub struct ComplianceEngine {
    config: EngineConfig,
}

impl ComplianceEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run every rule group against `record` as of `today`.
    ///
    /// All groups run regardless of what earlier groups found, so one call
    /// returns the complete list of corrections. An empty list means the
    /// transfer may proceed.
    pub fn evaluate(
        &self,
        record: &TransferRecord,
        today: NaiveDate,
    ) -> Result<Vec<Finding>, ContractViolation> {
        let Some(lines) = record.firearm_lines.as_deref() else {
            warn!(record_id = ?record.id, "transfer record has no firearm-line collection");
            return Err(ContractViolation::MissingFirearmLines);
        };

        let mut collector = FindingCollector::new();

        // Section A/B completeness
        let added = collector.extend(rules::structural::check_structural(record, today));
        debug!(group = "structural", findings = added);

        let added = collector.extend(rules::prohibited::check_prohibiting_declarations(
            &record.declarations,
        ));
        debug!(group = "prohibited_declarations", findings = added);

        let added = collector.extend(rules::visa::check_nonimmigrant_visa(record));
        debug!(group = "nonimmigrant_visa", findings = added);

        let added = collector.extend(rules::age_eligibility::check_age_eligibility(
            record,
            lines,
            &self.config,
        ));
        debug!(group = "age_eligibility", findings = added);

        let added = collector.extend(rules::identification::check_identification(record, today));
        debug!(group = "identification", findings = added);

        let added = collector.extend(nics::resolve(record, today, &self.config));
        debug!(group = "nics", findings = added);

        let added = collector.extend(rules::recertification::check_recertification(record));
        debug!(group = "recertification", findings = added);

        let added = collector.extend(rules::seller::check_seller_certification(record));
        debug!(group = "seller_certification", findings = added);

        info!(
            record_id = ?record.id,
            findings = collector.len(),
            eligible = collector.is_transfer_eligible(),
            "transfer record evaluated"
        );

        Ok(collector.into_findings())
    }

    /// [`evaluate`](Self::evaluate) wrapped into a report
    pub fn check_record(
        &self,
        record: &TransferRecord,
        today: NaiveDate,
    ) -> Result<TransferReport, ContractViolation> {
        let findings = self.evaluate(record, today)?;
        Ok(TransferReport {
            record_id: record.id,
            findings,
            evaluated_on: today,
        })
    }

    /// Decode a record from JSON and check it. A JSON `null` is a missing
    /// record, not an empty one.
    pub fn evaluate_json(
        &self,
        json: &str,
        today: NaiveDate,
    ) -> Result<TransferReport, ContractViolation> {
        let record: Option<TransferRecord> = serde_json::from_str(json).map_err(|err| {
            warn!(error = %err, "transfer record JSON could not be decoded");
            ContractViolation::from(err)
        })?;

        match record {
            Some(record) => self.check_record(&record, today),
            None => {
                warn!("no transfer record supplied");
                Err(ContractViolation::MissingRecord)
            }
        }
    }
}
