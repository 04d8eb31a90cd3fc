mod draft;
mod rubric;
mod session;
mod sink;

pub use draft::{
    AttributeRating, RatingDraft, RatingLimits, RatingSubmission, DEFAULT_RATING,
    DEFAULT_REVIEW_MAX_CHARS, MIN_RATING,
};
pub use rubric::{find_attribute, RubricAttribute, RUBRIC};
pub use session::RatingModal;
pub use sink::{LogSink, MemorySink, SubmissionSink};
