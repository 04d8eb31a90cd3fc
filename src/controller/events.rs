use crate::audio::ToggleState;
use crate::filter::Category;
use crate::rating::RatingSubmission;

/// User input understood by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Filter bar click
    SelectFilter(Category),
    /// Search box contents changed
    Search(String),
    /// "Rate Model" on a card
    Rate(u32),
    /// "View Details" on a card
    Details(u32),
    /// Slider moved in the rating form
    SetScore { code: String, value: i64 },
    /// Review text changed in the rating form
    Review(String),
    Submit,
    /// Cancel button, close button or a click outside the form
    Cancel,
    /// Music button
    ToggleMusic,
}

/// What the presentation layer has to redraw after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Render {
    /// Filter bar and card grid changed
    Cards,
    /// Rating form opened or changed
    Modal,
    /// Rating form closed after a submission
    Submitted(RatingSubmission),
    /// Rating form closed without a submission
    ModalClosed,
    /// Show a message and leave the view as it is
    Notice(String),
    /// Music button changed
    Music(ToggleState),
    /// Nothing changed
    Nothing,
}
