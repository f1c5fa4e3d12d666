use std::path::Path;

use crate::error::Result;
use crate::models::Expectations;

/// Load expectations from a JSON file of `{ test: { digest: label } }`.
pub fn load_expectations<P: AsRef<Path>>(path: P) -> Result<Expectations> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    let expectations: Expectations = serde_json::from_str(&contents)?;
    tracing::info!(
        "Loaded {} expectations from {}",
        expectations.len(),
        path.as_ref().display()
    );
    Ok(expectations)
}
