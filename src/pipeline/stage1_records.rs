use std::collections::HashSet;

use crate::error::QcError;
use crate::model::record::ScoreRecord;

pub fn build_records(pairs: &[(&str, f64)]) -> Result<Vec<ScoreRecord>, QcError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(pairs.len());
    let mut out = Vec::with_capacity(pairs.len());

    for (idx, &(category, score)) in pairs.iter().enumerate() {
        if category.trim().is_empty() {
            return Err(QcError::EmptyCategory { index: idx + 1 });
        }
        if !seen.insert(category) {
            return Err(QcError::DuplicateCategory {
                category: category.to_string(),
            });
        }
        out.push(ScoreRecord::new(category, score)?);
    }

    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_records.rs"]
mod tests;
