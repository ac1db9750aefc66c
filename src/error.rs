use crate::validate::RecordIssue;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{} invalid record(s); first: {}", .0.len(), first_issue(.0))]
    InvalidRecords(Vec<RecordIssue>),
}

fn first_issue(issues: &[RecordIssue]) -> String {
    issues
        .first()
        .map(ToString::to_string)
        .unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, Error>;
