use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::rubric::{find_attribute, RUBRIC};
use crate::catalog::{ModelRecord, MAX_SCORE};
use crate::error::{ArenaError, Result};

/// Lowest score a rating slider accepts
pub const MIN_RATING: u8 = 1;
/// Score every slider starts at
pub const DEFAULT_RATING: u8 = 50;
/// Maximum review length, in characters
pub const DEFAULT_REVIEW_MAX_CHARS: usize = 5000;

/// Bounds applied to a rating draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingLimits {
    pub review_max_chars: usize,
    pub default_score: u8,
}

impl Default for RatingLimits {
    fn default() -> Self {
        Self {
            review_max_chars: DEFAULT_REVIEW_MAX_CHARS,
            default_score: DEFAULT_RATING,
        }
    }
}

/// Current score for one rubric attribute.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct AttributeRating {
    pub code: &'static str,
    pub score: u8,
}

/// In-progress rating for one model.
///
/// Scores stay within `MIN_RATING..=100` and the review never exceeds
/// `review_max_chars` characters; out-of-range input is clamped or cut
/// rather than reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingDraft {
    model_id: u32,
    model_name: String,
    scores: Vec<AttributeRating>,
    review: String,
    review_max_chars: usize,
}

impl RatingDraft {
    pub fn new(model: &ModelRecord, limits: RatingLimits) -> Self {
        let start = clamp_score(i64::from(limits.default_score));
        Self {
            model_id: model.id,
            model_name: model.name.clone(),
            scores: RUBRIC
                .iter()
                .map(|attr| AttributeRating {
                    code: attr.code,
                    score: start,
                })
                .collect(),
            review: String::new(),
            review_max_chars: limits.review_max_chars,
        }
    }

    pub fn model_id(&self) -> u32 {
        self.model_id
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Scores in rubric order.
    pub fn scores(&self) -> &[AttributeRating] {
        &self.scores
    }

    pub fn score(&self, code: &str) -> Option<u8> {
        self.scores
            .iter()
            .find(|s| s.code.eq_ignore_ascii_case(code))
            .map(|s| s.score)
    }

    /// Sets one attribute, clamping `value` into `1..=100`.
    ///
    /// Returns the stored score.
    pub fn set_score(&mut self, key: &str, value: i64) -> Result<u8> {
        let attr =
            find_attribute(key).ok_or_else(|| ArenaError::UnknownAttribute(key.to_string()))?;
        let score = clamp_score(value);
        if let Some(slot) = self.scores.iter_mut().find(|s| s.code == attr.code) {
            slot.score = score;
        }
        Ok(score)
    }

    pub fn review(&self) -> &str {
        &self.review
    }

    /// Replaces the review text, keeping at most `review_max_chars`
    /// characters. Returns the stored length in characters.
    pub fn set_review(&mut self, text: &str) -> usize {
        self.review = text.chars().take(self.review_max_chars).collect();
        self.review_len()
    }

    pub fn review_len(&self) -> usize {
        self.review.chars().count()
    }

    pub fn review_max_chars(&self) -> usize {
        self.review_max_chars
    }

    /// Finalizes the draft into a submission stamped with a fresh id.
    pub fn into_submission(self) -> RatingSubmission {
        RatingSubmission {
            id: Uuid::new_v4(),
            model_id: self.model_id,
            model_name: self.model_name,
            scores: self.scores,
            review: self.review,
            submitted_at: Utc::now(),
        }
    }
}

fn clamp_score(value: i64) -> u8 {
    // Bounded by MAX_SCORE so the cast cannot truncate.
    value.clamp(i64::from(MIN_RATING), i64::from(MAX_SCORE)) as u8
}

/// A finished rating handed to a submission sink.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RatingSubmission {
    pub id: Uuid,
    pub model_id: u32,
    pub model_name: String,
    pub scores: Vec<AttributeRating>,
    pub review: String,
    pub submitted_at: DateTime<Utc>,
}

impl RatingSubmission {
    pub fn score(&self, code: &str) -> Option<u8> {
        self.scores
            .iter()
            .find(|s| s.code.eq_ignore_ascii_case(code))
            .map(|s| s.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn draft() -> RatingDraft {
        let catalog = Catalog::embedded().unwrap();
        RatingDraft::new(catalog.get(3).unwrap(), RatingLimits::default())
    }

    #[test]
    fn test_new_draft_starts_at_midpoint() {
        let draft = draft();
        assert_eq!(draft.model_id(), 3);
        assert_eq!(draft.scores().len(), 8);
        assert!(draft.scores().iter().all(|s| s.score == DEFAULT_RATING));
        assert_eq!(draft.review(), "");
    }

    #[test]
    fn test_set_score_clamps() {
        let mut draft = draft();
        assert_eq!(draft.set_score("RL", 0).unwrap(), 1);
        assert_eq!(draft.set_score("rl", 250).unwrap(), 100);
        assert_eq!(draft.set_score("Safety & Alignment", -3).unwrap(), 1);
        assert_eq!(draft.score("RL"), Some(100));
        assert_eq!(draft.score("SA"), Some(1));
        assert_eq!(draft.score("CG"), Some(DEFAULT_RATING));
    }

    #[test]
    fn test_set_score_unknown_attribute() {
        let mut draft = draft();
        let err = draft.set_score("XX", 10).unwrap_err();
        assert!(matches!(err, ArenaError::UnknownAttribute(code) if code == "XX"));
    }

    #[test]
    fn test_review_is_truncated_by_characters() {
        let mut draft = draft();
        let text: String = "é".repeat(DEFAULT_REVIEW_MAX_CHARS + 1);
        assert_eq!(draft.set_review(&text), DEFAULT_REVIEW_MAX_CHARS);
        assert_eq!(draft.review().chars().count(), DEFAULT_REVIEW_MAX_CHARS);
    }

    #[test]
    fn test_custom_limits() {
        let catalog = Catalog::embedded().unwrap();
        let limits = RatingLimits {
            review_max_chars: 4,
            default_score: 70,
        };
        let mut draft = RatingDraft::new(catalog.get(1).unwrap(), limits);
        assert_eq!(draft.score("CE"), Some(70));
        assert_eq!(draft.set_review("abcdef"), 4);
        assert_eq!(draft.review(), "abcd");
    }

    #[test]
    fn test_into_submission_keeps_scores() {
        let mut draft = draft();
        draft.set_score("TU", 12).unwrap();
        draft.set_review("solid");
        let submission = draft.into_submission();
        assert_eq!(submission.model_id, 3);
        assert_eq!(submission.model_name, "Gemini 2.5 Pro");
        assert_eq!(submission.score("TU"), Some(12));
        assert_eq!(submission.review, "solid");
    }
}
