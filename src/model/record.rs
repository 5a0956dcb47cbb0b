use crate::error::QcError;

/// One named score. Fields are private so a record can only exist once its
/// score has been checked to be finite.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRecord {
    category: String,
    score: f64,
}

impl ScoreRecord {
    pub fn new(category: impl Into<String>, score: f64) -> Result<Self, QcError> {
        let category = category.into();
        if !score.is_finite() {
            return Err(QcError::InvalidScore { category, score });
        }
        Ok(Self { category, score })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/record.rs"]
mod tests;
