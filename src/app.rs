use crate::api::FetchError;
use crate::fetch::{FetchRequest, FetchResponse, Payload, Query, Target};
use crate::modal::{Modal, ModalId, ModalState, Resolution};
use crate::render;
use ratatui::layout::Rect;

/// Input mode for the search bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Main application state.
pub struct App {
    pub should_quit: bool,
    pub show_help: bool,

    pub search_input: String,
    pub input_mode: InputMode,

    // Inline list filled once at startup
    pub top_slots: Vec<String>,
    top_token: u64,
    top_pending: bool,

    // Query of the latest search, for the progress note
    pending_query: String,

    search: Modal,
    show_all: Modal,
    // Visible modals, bottom to top
    stack: Vec<ModalId>,

    /// Last known terminal area, used for mouse hit-testing.
    pub viewport: Rect,

    pub status_msg: String,
}

impl App {
    pub fn new(top_count: usize) -> Self {
        Self {
            should_quit: false,
            show_help: false,

            search_input: String::new(),
            input_mode: InputMode::Normal,

            top_slots: vec![String::new(); top_count],
            top_token: 0,
            top_pending: false,

            pending_query: String::new(),

            search: Modal::new(),
            show_all: Modal::new(),
            stack: Vec::new(),

            viewport: Rect::default(),

            status_msg: "Loading top resorts...".to_string(),
        }
    }

    pub fn modal(&self, id: ModalId) -> &Modal {
        match id {
            ModalId::Search => &self.search,
            ModalId::ShowAll => &self.show_all,
        }
    }

    fn modal_mut(&mut self, id: ModalId) -> &mut Modal {
        match id {
            ModalId::Search => &mut self.search,
            ModalId::ShowAll => &mut self.show_all,
        }
    }

    /// Visible modals in drawing order (topmost last).
    pub fn visible_modals(&self) -> impl Iterator<Item = ModalId> + '_ {
        self.stack
            .iter()
            .copied()
            .filter(|id| self.modal(*id).is_visible())
    }

    pub fn topmost(&self) -> Option<ModalId> {
        self.visible_modals().last()
    }

    fn raise(&mut self, id: ModalId) {
        self.stack.retain(|m| *m != id);
        self.stack.push(id);
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Rect::new(0, 0, width, height);
    }

    /// The one-off list request issued at startup.
    pub fn startup_request(&mut self) -> FetchRequest {
        self.top_token += 1;
        self.top_pending = true;
        FetchRequest {
            target: Target::TopList,
            token: self.top_token,
            query: Query::ListAll,
        }
    }

    /// Activate the search button with the current input.
    ///
    /// Blank input is rejected here and never reaches the network.
    pub fn submit_search(&mut self) -> Option<FetchRequest> {
        let name = self.search_input.trim().to_string();
        if name.is_empty() {
            let err = FetchError::EmptyInput;
            tracing::warn!(kind = err.kind(), "{err}");
            return None;
        }

        self.input_mode = InputMode::Normal;
        let token = self.search.begin();
        self.raise(ModalId::Search);
        self.pending_query = name.clone();
        self.status_msg = self.progress_note().unwrap_or_default();
        tracing::info!(query = %name, token, "search requested");
        Some(FetchRequest {
            target: Target::Modal(ModalId::Search),
            token,
            query: Query::Search(name),
        })
    }

    /// Activate the "show all" button.
    pub fn request_show_all(&mut self) -> FetchRequest {
        let token = self.show_all.begin();
        self.raise(ModalId::ShowAll);
        self.status_msg = self.progress_note().unwrap_or_default();
        tracing::info!(token, "show all requested");
        FetchRequest {
            target: Target::Modal(ModalId::ShowAll),
            token,
            query: Query::ListAll,
        }
    }

    /// Progress note for the topmost request still in flight.
    fn progress_note(&self) -> Option<String> {
        let loading = self
            .stack
            .iter()
            .rev()
            .find(|id| matches!(self.modal(**id).state(), ModalState::Loading { .. }));
        match loading {
            Some(ModalId::Search) => Some(format!("Searching \"{}\"...", self.pending_query)),
            Some(ModalId::ShowAll) => Some("Loading all resorts...".to_string()),
            None if self.top_pending => Some("Loading top resorts...".to_string()),
            None => None,
        }
    }

    /// Route a finished request to the panel it was issued for.
    pub fn apply(&mut self, response: FetchResponse) {
        match response.target {
            Target::TopList => self.apply_top_list(response),
            Target::Modal(id) => self.apply_modal(id, response),
        }
    }

    fn apply_top_list(&mut self, response: FetchResponse) {
        if response.token != self.top_token {
            tracing::debug!(token = response.token, "stale top list response");
            return;
        }
        self.top_pending = false;
        let summary = match response.outcome {
            Ok(Payload::Summaries(resorts)) => {
                self.top_slots = render::top_slots(&resorts, self.top_slots.len());
                Some(format!("{} resorts ranked", resorts.len()))
            }
            Ok(Payload::Detail(_)) => {
                tracing::warn!("top list received a search result; ignoring");
                None
            }
            Err(_) => None,
        };
        self.status_msg = self.progress_note().or(summary).unwrap_or_default();
    }

    fn apply_modal(&mut self, id: ModalId, response: FetchResponse) {
        let table = match &response.outcome {
            Ok(Payload::Summaries(resorts)) => Some(render::show_all_table(resorts)),
            Ok(Payload::Detail(detail)) => Some(render::search_table(detail)),
            Err(_) => None,
        };
        let rows = table.as_ref().map_or(0, |t| t.rows.len());

        match self.modal_mut(id).resolve(response.token, table) {
            Resolution::Opened => {
                self.raise(id);
                self.status_msg = self
                    .progress_note()
                    .unwrap_or_else(|| format!("{}: {} row(s)", id.title(), rows));
                tracing::info!(modal = ?id, token = response.token, rows, "modal opened");
            }
            Resolution::Failed => {
                self.status_msg = self.progress_note().unwrap_or_default();
                tracing::debug!(modal = ?id, token = response.token, "modal stays closed");
            }
            Resolution::Stale => {
                tracing::debug!(modal = ?id, token = response.token, "discarding stale response");
            }
        }
    }

    pub fn close_modal(&mut self, id: ModalId) {
        let abandoned = matches!(self.modal(id).state(), ModalState::Loading { .. });
        self.modal_mut(id).close();
        if abandoned {
            self.status_msg = self.progress_note().unwrap_or_default();
        }
        tracing::debug!(modal = ?id, abandoned, "modal closed");
    }

    /// Close the topmost modal. Returns false if none is visible.
    pub fn close_topmost(&mut self) -> bool {
        match self.topmost() {
            Some(id) => {
                self.close_modal(id);
                true
            }
            None => false,
        }
    }

    /// Forward a click to the topmost modal.
    pub fn click_topmost(&mut self, inside: bool) {
        if let Some(id) = self.topmost() {
            self.modal_mut(id).click(inside);
        }
    }

    pub fn scroll_topmost(&mut self, delta: isize) {
        if let Some(id) = self.topmost() {
            self.modal_mut(id).scroll_by(delta);
        }
    }
}
