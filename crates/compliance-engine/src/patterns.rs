//! Firearm-type keyword lists and category detection

use transfer_types::{FirearmLine, TransferRecord};

use crate::config::CategoryKeyword;

/// Line types written exactly as a handgun or frame/receiver
pub const HANDGUN_OR_RECEIVER_TYPES: &[&str] = &["pistol", "revolver", "receiver", "frame"];

/// Fragments that mark an "other" firearm anywhere in the type text
pub const OTHER_TYPE_FRAGMENTS: &[&str] = &["other"];

/// Default keyword list. Deployments extend it through `EngineConfig`;
/// it is not assumed to be complete.
pub fn default_category_keywords() -> Vec<CategoryKeyword> {
    HANDGUN_OR_RECEIVER_TYPES
        .iter()
        .map(|term| CategoryKeyword::exact(term))
        .chain(
            OTHER_TYPE_FRAGMENTS
                .iter()
                .map(|term| CategoryKeyword::contains(term)),
        )
        .collect()
}

/// Age-threshold category of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferCategory {
    /// Handgun, frame/receiver, or "other" firearm (21+)
    HandgunOrOther,
    /// Rifles and shotguns only (18+)
    LongGun,
}

/// True when the line's type text matches any keyword (case-insensitive)
pub fn line_is_handgun_or_other(line: &FirearmLine, keywords: &[CategoryKeyword]) -> bool {
    let type_lower = line.firearm_type.trim().to_lowercase();
    keywords.iter().any(|keyword| keyword.matches(&type_lower))
}

/// Category from the summary flags (question 24) and the firearm lines.
///
/// With no lines the flags alone decide; no lines is not an error.
pub fn transfer_category(
    record: &TransferRecord,
    lines: &[FirearmLine],
    keywords: &[CategoryKeyword],
) -> TransferCategory {
    if record.category_handgun
        || record.category_other
        || lines
            .iter()
            .any(|line| line_is_handgun_or_other(line, keywords))
    {
        TransferCategory::HandgunOrOther
    } else {
        TransferCategory::LongGun
    }
}
