//! The built-in furniture sample data.

use crate::{GroupRecord, Result};

const SAMPLE_CATALOG: &str = include_str!("../data/sample_catalog.json");

/// Parses the embedded sample catalog.
pub(crate) fn sample_records() -> Result<Vec<GroupRecord>> {
    Ok(serde_json::from_str(SAMPLE_CATALOG)?)
}
