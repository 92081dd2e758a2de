//! Grouping of extracted records by division

use std::collections::HashMap;

use super::{DivisionGroup, StandingRecord};

/// Groups records by division
///
/// Divisions are ordered by first appearance and teams keep their input order
/// within each division. Teams with no division form a group named `""`.
pub fn group_by_division(records: Vec<StandingRecord>) -> Vec<DivisionGroup> {
    let mut groups: Vec<DivisionGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let slot = *index.entry(record.division.clone()).or_insert_with(|| {
            groups.push(DivisionGroup {
                name: record.division.clone(),
                teams: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].teams.push(record);
    }

    groups
}
