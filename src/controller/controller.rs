use std::sync::Arc;

use tracing::{debug, info};

use super::events::{Render, UiEvent};
use crate::audio::{AudioToggle, Playback};
use crate::catalog::{Catalog, ModelRecord};
use crate::error::Result;
use crate::filter::{select_visible, Category, FilterState};
use crate::rating::{RatingLimits, RatingModal, SubmissionSink};
use crate::render::{
    render_cards, render_filter_bar, render_rating_modal, DisplayNode, DETAILS_NOT_IMPLEMENTED,
};

/// Owns all interactive state of one browsing session.
///
/// Every input goes through [`ArenaController::dispatch`], which applies
/// the state transition and tells the caller what to redraw.
pub struct ArenaController {
    catalog: Arc<Catalog>,
    filter: FilterState,
    modal: RatingModal,
    music: AudioToggle<Box<dyn Playback>>,
    sink: Arc<dyn SubmissionSink>,
    start_music_on_gesture: bool,
}

impl ArenaController {
    pub fn new(
        catalog: Arc<Catalog>,
        limits: RatingLimits,
        sink: Arc<dyn SubmissionSink>,
        music: AudioToggle<Box<dyn Playback>>,
    ) -> Self {
        Self {
            catalog,
            filter: FilterState::default(),
            modal: RatingModal::new(limits),
            music,
            sink,
            start_music_on_gesture: false,
        }
    }

    /// Try to start the music on the first event that is not the music button.
    pub fn with_music_on_gesture(mut self, enabled: bool) -> Self {
        self.start_music_on_gesture = enabled;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn modal(&self) -> &RatingModal {
        &self.modal
    }

    pub fn music(&self) -> &AudioToggle<Box<dyn Playback>> {
        &self.music
    }

    /// Applies one event.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<Render> {
        debug!("Dispatching {:?}", event);
        if self.start_music_on_gesture && event != UiEvent::ToggleMusic {
            self.music.on_gesture();
        }

        match event {
            UiEvent::SelectFilter(category) => Ok(self.select_filter(category)),
            UiEvent::Search(term) => Ok(self.search(term)),
            UiEvent::Rate(id) => self.open_rating(id),
            UiEvent::Details(id) => self.details(id),
            UiEvent::SetScore { code, value } => {
                self.modal.set_score(&code, value)?;
                Ok(Render::Modal)
            }
            UiEvent::Review(text) => {
                self.modal.set_review(&text)?;
                Ok(Render::Modal)
            }
            UiEvent::Submit => {
                let submission = self.modal.submit(self.sink.as_ref())?;
                Ok(Render::Submitted(submission))
            }
            UiEvent::Cancel => Ok(if self.modal.cancel() {
                Render::ModalClosed
            } else {
                Render::Nothing
            }),
            UiEvent::ToggleMusic => Ok(Render::Music(self.music.toggle())),
        }
    }

    fn select_filter(&mut self, category: Category) -> Render {
        info!("Filter set to {}", category);
        self.filter.category = category;
        Render::Cards
    }

    fn search(&mut self, term: String) -> Render {
        info!("Search term set to {:?}", term);
        self.filter.search = term;
        Render::Cards
    }

    fn open_rating(&mut self, id: u32) -> Result<Render> {
        let model = self.catalog.get(id)?;
        self.modal.open(model);
        Ok(Render::Modal)
    }

    fn details(&self, id: u32) -> Result<Render> {
        self.catalog.get(id)?;
        Ok(Render::Notice(DETAILS_NOT_IMPLEMENTED.to_string()))
    }

    /// Records visible under the current filter, in catalog order.
    pub fn visible(&self) -> Vec<&ModelRecord> {
        select_visible(self.catalog.models(), &self.filter)
    }

    pub fn filter_bar_view(&self) -> DisplayNode {
        render_filter_bar(&self.filter.category)
    }

    pub fn cards_view(&self) -> DisplayNode {
        render_cards(&self.visible())
    }

    /// The rating form, if one is open.
    pub fn modal_view(&self) -> Option<DisplayNode> {
        self.modal.draft().ok().map(render_rating_modal)
    }
}
