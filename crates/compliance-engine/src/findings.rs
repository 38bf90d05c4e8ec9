use transfer_types::Finding;

/// Ordered accumulator for one evaluation pass.
///
/// Findings keep the order they were added in; a record is transfer-eligible
/// only when nothing was collected.
#[derive(Debug, Default)]
pub struct FindingCollector {
    findings: Vec<Finding>,
}

impl FindingCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// Append a rule group's findings, returning how many were added
    pub fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) -> usize {
        let before = self.findings.len();
        self.findings.extend(findings);
        self.findings.len() - before
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn is_transfer_eligible(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn into_findings(self) -> Vec<Finding> {
        self.findings
    }
}
