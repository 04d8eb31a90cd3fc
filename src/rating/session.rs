use tracing::{debug, info};

use super::draft::{RatingDraft, RatingLimits, RatingSubmission};
use super::sink::SubmissionSink;
use crate::catalog::ModelRecord;
use crate::error::{ArenaError, Result};

/// The rating modal: closed, or open with exactly one draft.
#[derive(Debug, Default)]
pub struct RatingModal {
    draft: Option<RatingDraft>,
    limits: RatingLimits,
}

impl RatingModal {
    pub fn new(limits: RatingLimits) -> Self {
        Self { draft: None, limits }
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    /// Opens a session for `model`.
    ///
    /// A draft that is already open is dropped without being submitted and
    /// returned to the caller.
    pub fn open(&mut self, model: &ModelRecord) -> Option<RatingDraft> {
        let replaced = self.draft.replace(RatingDraft::new(model, self.limits));
        if let Some(previous) = &replaced {
            debug!(
                "Discarding unsubmitted rating for model {} to rate model {}",
                previous.model_id(),
                model.id
            );
        }
        info!("Rating opened for model {} ({})", model.id, model.name);
        replaced
    }

    pub fn draft(&self) -> Result<&RatingDraft> {
        self.draft.as_ref().ok_or(ArenaError::NoActiveRating)
    }

    pub fn draft_mut(&mut self) -> Result<&mut RatingDraft> {
        self.draft.as_mut().ok_or(ArenaError::NoActiveRating)
    }

    /// Sets one attribute on the open draft. Returns the stored score.
    pub fn set_score(&mut self, code: &str, value: i64) -> Result<u8> {
        self.draft_mut()?.set_score(code, value)
    }

    /// Sets the review on the open draft. Returns the stored length.
    pub fn set_review(&mut self, text: &str) -> Result<usize> {
        Ok(self.draft_mut()?.set_review(text))
    }

    /// Hands the open draft to `sink` and closes the modal.
    pub fn submit(&mut self, sink: &dyn SubmissionSink) -> Result<RatingSubmission> {
        let draft = self.draft.take().ok_or(ArenaError::NoActiveRating)?;
        let submission = draft.into_submission();
        sink.submit(&submission);
        info!(
            "Rating {} submitted for model {}",
            submission.id, submission.model_id
        );
        Ok(submission)
    }

    /// Closes the modal without submitting. Returns false if it was closed.
    pub fn cancel(&mut self) -> bool {
        match self.draft.take() {
            Some(draft) => {
                info!("Rating cancelled for model {}", draft.model_id());
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::rating::{MemorySink, DEFAULT_RATING};

    #[test]
    fn test_submit_emits_and_closes() {
        let catalog = Catalog::embedded().unwrap();
        let sink = MemorySink::new();
        let mut modal = RatingModal::default();

        modal.open(catalog.get(2).unwrap());
        modal.set_score("RL", 87).unwrap();
        let submission = modal.submit(&sink).unwrap();

        assert!(!modal.is_open());
        assert_eq!(sink.submissions(), vec![submission.clone()]);
        assert_eq!(submission.model_id, 2);
        assert_eq!(submission.score("RL"), Some(87));
        let unchanged = submission.scores.iter().filter(|s| s.code != "RL");
        assert!(unchanged.clone().all(|s| s.score == DEFAULT_RATING));
        assert_eq!(unchanged.count(), 7);
    }

    #[test]
    fn test_cancel_emits_nothing() {
        let catalog = Catalog::embedded().unwrap();
        let sink = MemorySink::new();
        let mut modal = RatingModal::default();

        modal.open(catalog.get(1).unwrap());
        modal.set_score("CE", 99).unwrap();
        assert!(modal.cancel());
        assert!(!modal.cancel());
        assert!(matches!(modal.submit(&sink), Err(ArenaError::NoActiveRating)));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_open_replaces_previous_draft() {
        let catalog = Catalog::embedded().unwrap();
        let mut modal = RatingModal::default();

        assert!(modal.open(catalog.get(1).unwrap()).is_none());
        modal.set_score("ES", 5).unwrap();
        let replaced = modal.open(catalog.get(4).unwrap()).unwrap();

        assert_eq!(replaced.model_id(), 1);
        assert_eq!(replaced.score("ES"), Some(5));
        let draft = modal.draft().unwrap();
        assert_eq!(draft.model_id(), 4);
        assert_eq!(draft.score("ES"), Some(DEFAULT_RATING));
    }

    #[test]
    fn test_actions_require_open_session() {
        let mut modal = RatingModal::default();
        assert!(matches!(modal.set_score("RL", 10), Err(ArenaError::NoActiveRating)));
        assert!(matches!(modal.set_review("hi"), Err(ArenaError::NoActiveRating)));
    }
}
