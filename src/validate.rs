use crate::ir::NodeRecord;
use indexmap::IndexMap;
use std::collections::HashMap;

/// A data problem the lenient assembler would silently paper over.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordIssue {
    #[error("duplicate id `{id}` at records {first} and {second}; the later record wins")]
    DuplicateIdentifier {
        id: String,
        first: usize,
        second: usize,
    },
    #[error("record `{id}` references unknown parent `{parent_id}`; promoted to root")]
    DanglingParentReference { id: String, parent_id: String },
    #[error("record `{id}` is part of a parent cycle and is unreachable from any root")]
    SelfOrCyclicParentage { id: String },
}

impl RecordIssue {
    pub fn id(&self) -> &str {
        match self {
            RecordIssue::DuplicateIdentifier { id, .. }
            | RecordIssue::DanglingParentReference { id, .. }
            | RecordIssue::SelfOrCyclicParentage { id } => id,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    Fresh,
    OnPath,
    Done,
}

/// Checks `records` for duplicate ids, unresolvable parents and parent
/// cycles. Issues come back ordered by the index of the record they concern.
pub fn validate_records<R: NodeRecord>(records: &[R]) -> Vec<RecordIssue> {
    let mut found: Vec<(usize, RecordIssue)> = Vec::new();

    let mut first_seen: HashMap<&str, usize> = HashMap::with_capacity(records.len());
    // Mirrors the assembler: position of first occurrence, last record wins.
    let mut retained: IndexMap<&str, usize> = IndexMap::with_capacity(records.len());
    for (idx, record) in records.iter().enumerate() {
        let id = record.id();
        if let Some(&first) = first_seen.get(id) {
            found.push((
                idx,
                RecordIssue::DuplicateIdentifier {
                    id: id.to_string(),
                    first,
                    second: idx,
                },
            ));
        } else {
            first_seen.insert(id, idx);
        }
        retained.insert(id, idx);
    }

    for (idx, record) in records.iter().enumerate() {
        if let Some(parent_id) = record.parent_id()
            && !retained.contains_key(parent_id)
        {
            found.push((
                idx,
                RecordIssue::DanglingParentReference {
                    id: record.id().to_string(),
                    parent_id: parent_id.to_string(),
                },
            ));
        }
    }

    let parent_of = |pos: usize| -> Option<usize> {
        let record = &records[retained[pos]];
        record
            .parent_id()
            .and_then(|parent_id| retained.get_index_of(parent_id))
    };
    let mut state = vec![Visit::Fresh; retained.len()];
    let mut cyclic = vec![false; retained.len()];
    let mut path: Vec<usize> = Vec::new();
    for start in 0..retained.len() {
        if state[start] != Visit::Fresh {
            continue;
        }
        let mut cursor = Some(start);
        while let Some(pos) = cursor {
            match state[pos] {
                Visit::Fresh => {
                    state[pos] = Visit::OnPath;
                    path.push(pos);
                    cursor = parent_of(pos);
                }
                Visit::OnPath => {
                    if let Some(loop_start) = path.iter().position(|&p| p == pos) {
                        for &member in &path[loop_start..] {
                            cyclic[member] = true;
                        }
                    }
                    break;
                }
                Visit::Done => break,
            }
        }
        for pos in path.drain(..) {
            state[pos] = Visit::Done;
        }
    }
    for (pos, (id, &idx)) in retained.iter().enumerate() {
        if cyclic[pos] {
            found.push((idx, RecordIssue::SelfOrCyclicParentage { id: id.to_string() }));
        }
    }

    found.sort_by_key(|(idx, _)| *idx);
    found.into_iter().map(|(_, issue)| issue).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Record;

    fn rec(id: &str, parent: Option<&str>) -> Record {
        Record::new(id, parent)
    }

    #[test]
    fn clean_input_has_no_issues() {
        let records = vec![rec("a", None), rec("b", Some("a")), rec("c", Some("b"))];
        assert!(validate_records(&records).is_empty());
        assert!(validate_records::<Record>(&[]).is_empty());
    }

    #[test]
    fn reports_duplicates_with_both_indices() {
        let records = vec![rec("a", None), rec("b", Some("a")), rec("a", None)];
        let issues = validate_records(&records);
        assert_eq!(
            issues,
            vec![RecordIssue::DuplicateIdentifier {
                id: "a".to_string(),
                first: 0,
                second: 2,
            }]
        );
    }

    #[test]
    fn reports_dangling_parents() {
        let records = vec![rec("a", None), rec("b", Some("ghost"))];
        let issues = validate_records(&records);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].id(), "b");
        assert!(matches!(
            &issues[0],
            RecordIssue::DanglingParentReference { parent_id, .. } if parent_id == "ghost"
        ));
    }

    #[test]
    fn reports_self_parenting() {
        let records = vec![rec("a", None), rec("loop", Some("loop"))];
        let issues = validate_records(&records);
        assert_eq!(
            issues,
            vec![RecordIssue::SelfOrCyclicParentage {
                id: "loop".to_string()
            }]
        );
    }

    #[test]
    fn reports_only_cycle_members_not_their_descendants() {
        let records = vec![
            rec("x", Some("z")),
            rec("y", Some("x")),
            rec("z", Some("y")),
            rec("tail", Some("x")),
            rec("root", None),
        ];
        let ids: Vec<String> = validate_records(&records)
            .iter()
            .map(|issue| issue.id().to_string())
            .collect();
        assert_eq!(ids, vec!["x", "y", "z"]);
    }

    #[test]
    fn issues_are_ordered_by_record_index() {
        let records = vec![
            rec("a", Some("missing")),
            rec("b", Some("b")),
            rec("a", None),
        ];
        let issues = validate_records(&records);
        assert_eq!(issues.len(), 3);
        assert!(matches!(issues[0], RecordIssue::DanglingParentReference { .. }));
        assert!(matches!(issues[1], RecordIssue::SelfOrCyclicParentage { .. }));
        assert!(matches!(issues[2], RecordIssue::DuplicateIdentifier { .. }));
    }
}
