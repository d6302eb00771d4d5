// Merge a single updated record back into the canonical collection by id.
//
// Purpose
// - Replace the matching record in place after a successful partial update.
//
// Responsibilities
// - Keep the position of the replaced record and leave every other record untouched.
// - Report a missing target or a duplicated id as an integrity warning instead of failing.
// - When ids are duplicated, act on the first match only.

use crate::modules::events::core::event_record::{EventId, EventRecord};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntegrityWarning {
    #[error("merge target {id} is not in the canonical collection")]
    MissingMergeTarget { id: EventId },
    #[error("id {id} appears {occurrences} times in the canonical collection")]
    DuplicateId { id: EventId, occurrences: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    pub collection: Vec<EventRecord>,
    pub warnings: Vec<IntegrityWarning>,
}

pub fn merge_registration(collection: &[EventRecord], updated: EventRecord) -> MergeOutcome {
    let matches: Vec<usize> = collection
        .iter()
        .enumerate()
        .filter(|(_, record)| record.id == updated.id)
        .map(|(index, _)| index)
        .collect();

    let Some(&target) = matches.first() else {
        return MergeOutcome {
            collection: collection.to_vec(),
            warnings: vec![IntegrityWarning::MissingMergeTarget { id: updated.id }],
        };
    };

    let mut warnings = Vec::new();
    if matches.len() > 1 {
        warnings.push(IntegrityWarning::DuplicateId {
            id: updated.id.clone(),
            occurrences: matches.len(),
        });
    }

    let mut merged = collection.to_vec();
    merged[target] = updated;
    MergeOutcome {
        collection: merged,
        warnings,
    }
}

/// One warning per id that occurs more than once, in order of first appearance.
pub fn find_duplicate_ids(collection: &[EventRecord]) -> Vec<IntegrityWarning> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in collection {
        *counts.entry(record.id.as_str()).or_default() += 1;
    }

    let mut warnings = Vec::new();
    for record in collection {
        if let Some(occurrences) = counts.remove(record.id.as_str()) {
            if occurrences > 1 {
                warnings.push(IntegrityWarning::DuplicateId {
                    id: record.id.clone(),
                    occurrences,
                });
            }
        }
    }
    warnings
}
