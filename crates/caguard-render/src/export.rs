use caguard_types::{ExportPolicy, Policy};
use thiserror::Error;

/// Which policies to export. `Single` is a 0-based index into the fetched
/// snapshot; operator-facing 1-based menu indices are converted before
/// reaching this layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    All,
    Single(usize),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("selection {index} is out of range for {count} policies")]
    InvalidSelection { index: usize, count: usize },
    #[error("failed to serialize export document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Serialize the selected policies as the portable five-key projection.
///
/// The output is an ordered JSON array mirroring fetch order (or a single
/// element for `Single`).
pub fn export_json(policies: &[Policy], selection: Selection) -> Result<Vec<u8>, ExportError> {
    let projected: Vec<ExportPolicy> = match selection {
        Selection::All => policies.iter().map(ExportPolicy::from).collect(),
        Selection::Single(index) => {
            let policy = policies
                .get(index)
                .ok_or(ExportError::InvalidSelection {
                    index,
                    count: policies.len(),
                })?;
            vec![ExportPolicy::from(policy)]
        }
    };

    Ok(serde_json::to_vec_pretty(&projected)?)
}
