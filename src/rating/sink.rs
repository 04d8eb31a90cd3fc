use std::sync::Mutex;

use colored::*;
use tracing::{info, warn};

use super::draft::RatingSubmission;

/// Receives finished ratings. Delivery is fire-and-forget.
pub trait SubmissionSink: Send + Sync {
    fn submit(&self, submission: &RatingSubmission);
}

/// Writes each submission to the log and echoes it on the console.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink {
    /// Also print the submission to stdout
    pub echo: bool,
}

impl LogSink {
    pub fn new(echo: bool) -> Self {
        Self { echo }
    }
}

impl SubmissionSink for LogSink {
    fn submit(&self, submission: &RatingSubmission) {
        let payload = match serde_json::to_string(submission) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Failed to serialize rating submission: {}", e);
                return;
            }
        };
        info!(
            submission_id = %submission.id,
            model_id = submission.model_id,
            review_chars = submission.review.chars().count(),
            "Rating submitted: {}",
            payload
        );
        if self.echo {
            println!(
                "{} {} {}",
                "Submitted ratings for".bright_black(),
                submission.model_name.bold(),
                payload.bright_black()
            );
        }
    }
}

/// Keeps submissions in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    submissions: Mutex<Vec<RatingSubmission>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies of everything received so far, oldest first.
    pub fn submissions(&self) -> Vec<RatingSubmission> {
        match self.submissions.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.submissions().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SubmissionSink for MemorySink {
    fn submit(&self, submission: &RatingSubmission) {
        match self.submissions.lock() {
            Ok(mut guard) => guard.push(submission.clone()),
            Err(poisoned) => poisoned.into_inner().push(submission.clone()),
        }
    }
}
