mod cards;
mod modal;
mod node;
pub mod palette;
mod table;
mod terminal;

pub use cards::{
    render_card, render_cards, render_filter_bar, truncate_description, CARD_ATTRIBUTES,
    DESCRIPTION_MAX_CHARS, DETAILS_NOT_IMPLEMENTED, NO_RESULTS,
};
pub use modal::{char_count, render_rating_modal};
pub use node::{Action, DisplayNode, NodeKind};
pub use palette::{company_color, score_color, HexColor, ScoreTier};
pub use table::models_table;
pub use terminal::paint;
