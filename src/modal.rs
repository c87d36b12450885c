use crate::render::TableView;

/// The two independent overlay panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalId {
    Search,
    ShowAll,
}

impl ModalId {
    pub fn title(self) -> &'static str {
        match self {
            Self::Search => "Search Result",
            Self::ShowAll => "All Resorts",
        }
    }
}

/// Visibility of a modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    /// Waiting for the response carrying `token`.
    Loading { token: u64 },
    Open,
}

/// What happened when a response reached a modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Opened,
    Failed,
    /// The response belongs to a superseded or abandoned request.
    Stale,
}

/// One modal: its state, the latest request token and the bound table.
#[derive(Debug)]
pub struct Modal {
    state: ModalState,
    last_token: u64,
    table: Option<TableView>,
    scroll: usize,
}

impl Default for Modal {
    fn default() -> Self {
        Self::new()
    }
}

impl Modal {
    pub fn new() -> Self {
        Self {
            state: ModalState::Closed,
            last_token: 0,
            table: None,
            scroll: 0,
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state != ModalState::Closed
    }

    pub fn table(&self) -> Option<&TableView> {
        self.table.as_ref()
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Start a new request for this modal and return its token.
    ///
    /// Any request still in flight for this modal is superseded.
    pub fn begin(&mut self) -> u64 {
        self.last_token += 1;
        self.state = ModalState::Loading {
            token: self.last_token,
        };
        self.last_token
    }

    /// Apply the outcome of the request identified by `token`.
    ///
    /// `Some(table)` replaces the bound table and opens the modal; `None`
    /// closes it.
    pub fn resolve(&mut self, token: u64, table: Option<TableView>) -> Resolution {
        if self.state != (ModalState::Loading { token }) {
            return Resolution::Stale;
        }
        match table {
            Some(table) => {
                self.table = Some(table);
                self.scroll = 0;
                self.state = ModalState::Open;
                Resolution::Opened
            }
            None => {
                self.state = ModalState::Closed;
                Resolution::Failed
            }
        }
    }

    /// Close the modal, abandoning any pending request.
    pub fn close(&mut self) {
        self.state = ModalState::Closed;
    }

    /// A click on this modal: outside its content box closes it.
    pub fn click(&mut self, inside: bool) {
        if !inside {
            self.close();
        }
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let rows = self.table.as_ref().map_or(0, |t| t.rows.len());
        let max = rows.saturating_sub(1);
        self.scroll = self.scroll.saturating_add_signed(delta).min(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::show_all_table;

    fn table(rows: usize) -> TableView {
        TableView {
            headers: vec!["A"],
            rows: (0..rows).map(|i| vec![i.to_string()]).collect(),
        }
    }

    #[test]
    fn test_initial_state_is_closed() {
        let modal = Modal::new();
        assert_eq!(modal.state(), ModalState::Closed);
        assert!(!modal.is_visible());
        assert!(modal.table().is_none());
    }

    #[test]
    fn test_success_opens() {
        let mut modal = Modal::new();
        let token = modal.begin();
        assert_eq!(modal.state(), ModalState::Loading { token });
        assert_eq!(modal.resolve(token, Some(table(2))), Resolution::Opened);
        assert_eq!(modal.state(), ModalState::Open);
        assert_eq!(modal.table().unwrap().rows.len(), 2);
    }

    #[test]
    fn test_failure_closes() {
        let mut modal = Modal::new();
        let token = modal.begin();
        assert_eq!(modal.resolve(token, None), Resolution::Failed);
        assert_eq!(modal.state(), ModalState::Closed);
    }

    #[test]
    fn test_outside_click_closes_inside_click_keeps_open() {
        let mut modal = Modal::new();
        let token = modal.begin();
        modal.resolve(token, Some(table(1)));

        modal.click(true);
        assert_eq!(modal.state(), ModalState::Open);
        modal.click(false);
        assert_eq!(modal.state(), ModalState::Closed);
    }

    #[test]
    fn test_superseded_response_is_discarded() {
        let mut modal = Modal::new();
        let first = modal.begin();
        let second = modal.begin();

        assert_eq!(modal.resolve(first, Some(table(9))), Resolution::Stale);
        assert_eq!(modal.state(), ModalState::Loading { token: second });
        assert!(modal.table().is_none());

        assert_eq!(modal.resolve(second, Some(table(3))), Resolution::Opened);
        assert_eq!(modal.table().unwrap().rows.len(), 3);

        // Late arrival after the newer request already opened the modal.
        assert_eq!(modal.resolve(first, Some(table(9))), Resolution::Stale);
        assert_eq!(modal.table().unwrap().rows.len(), 3);
    }

    #[test]
    fn test_close_while_loading_abandons_request() {
        let mut modal = Modal::new();
        let token = modal.begin();
        modal.close();
        assert_eq!(modal.resolve(token, Some(table(1))), Resolution::Stale);
        assert_eq!(modal.state(), ModalState::Closed);
    }

    #[test]
    fn test_new_result_replaces_previous_rows() {
        let mut modal = Modal::new();
        let token = modal.begin();
        modal.resolve(token, Some(table(5)));
        let token = modal.begin();
        modal.resolve(token, Some(show_all_table(&[])));
        assert!(modal.table().unwrap().rows.is_empty());
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut modal = Modal::new();
        let token = modal.begin();
        modal.resolve(token, Some(table(4)));
        modal.scroll_by(10);
        assert_eq!(modal.scroll(), 3);
        modal.scroll_by(-20);
        assert_eq!(modal.scroll(), 0);
    }
}
