//! Application state management.
//!
//! Owns the candidate master list, the query state, the derived display
//! list, selection, and UI mode.

use crate::backend::{CandidateRecord, IdeaRecord};
use crate::query::{self, QueryState, SortOrder};
use std::cmp;

/// Application state and UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Normal list view
    List,
    /// Search input mode
    Search,
    /// Filters mode
    Filters,
}

/// Tab mode for the two browsing views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// Candidate Query View (search, skill filter, name sort)
    Candidates,
    /// Startup ideas, read-only
    Ideas,
}

/// Load state of a fetched collection.
///
/// A failed fetch is terminal for the run: the view shows the error and no
/// derivation happens for that tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Initial fetch not yet resolved
    Loading,
    /// Collection fetched and held in memory
    Loaded,
    /// Fetch failed; message is shown verbatim
    Failed(String),
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// Full candidate collection, sorted by submission time descending at fetch
    pub master_list: Vec<CandidateRecord>,
    /// Derived display list (filtered and sorted per the query state)
    pub displayed: Vec<CandidateRecord>,
    /// Selectable skill tags, derived from the master list
    pub skill_options: Vec<String>,
    /// Current query controls
    pub query: QueryState,
    /// Startup ideas, newest first
    pub ideas: Vec<IdeaRecord>,
    /// Load state of the candidates collection
    pub candidates_state: LoadState,
    /// Load state of the ideas collection
    pub ideas_state: LoadState,
    /// Currently selected index (in the active tab's list)
    pub selected_index: usize,
    /// Current UI mode
    pub mode: UiMode,
    /// Active tab
    active_tab: Tab,
    /// Status message to display
    pub status_message: Option<String>,
}

impl App {
    /// Create a new application state with both collections loading.
    pub fn new() -> Self {
        Self {
            master_list: Vec::new(),
            displayed: Vec::new(),
            skill_options: Vec::new(),
            query: QueryState::default(),
            ideas: Vec::new(),
            candidates_state: LoadState::Loading,
            ideas_state: LoadState::Loading,
            selected_index: 0,
            mode: UiMode::List,
            active_tab: Tab::Candidates,
            status_message: None,
        }
    }

    /// Set the master candidate list and re-derive the view.
    ///
    /// # Arguments
    /// * `records` - Fetched candidates, already in fetch-time order
    ///
    /// # Details
    /// Recomputes the skill vocabulary (a function of the master list alone)
    /// and the displayed list under the current query.
    pub fn set_candidates(&mut self, records: Vec<CandidateRecord>) {
        self.master_list = records;
        self.skill_options = query::skill_vocabulary(&self.master_list);
        self.candidates_state = LoadState::Loaded;
        self.rederive();
    }

    /// Put the candidates view into its terminal error state.
    pub fn set_candidates_error(&mut self, message: String) {
        self.candidates_state = LoadState::Failed(message);
        self.master_list.clear();
        self.displayed.clear();
        self.skill_options.clear();
    }

    /// Set the idea list.
    pub fn set_ideas(&mut self, records: Vec<IdeaRecord>) {
        self.ideas = records;
        self.ideas_state = LoadState::Loaded;
        if self.active_tab == Tab::Ideas {
            self.selected_index = 0;
        }
    }

    /// Put the ideas view into its terminal error state.
    pub fn set_ideas_error(&mut self, message: String) {
        self.ideas_state = LoadState::Failed(message);
        self.ideas.clear();
    }

    /// Re-run the pure derivation and clamp the selection.
    ///
    /// # Details
    /// Called after every query mutation or master list replacement. The
    /// master list is never touched; `displayed` is a fresh sequence.
    pub fn rederive(&mut self) {
        self.displayed = query::derive(&self.master_list, &self.query);
        self.selected_index = cmp::min(
            self.selected_index,
            self.displayed.len().saturating_sub(1),
        );
    }

    /// Add a character to the search term.
    ///
    /// # Details
    /// Only works in Search mode. Re-derives after each keystroke.
    pub fn add_search_char(&mut self, ch: char) {
        if self.mode == UiMode::Search {
            self.query.search_term.push(ch);
            self.rederive();
        }
    }

    /// Remove the last character from the search term.
    ///
    /// # Details
    /// Only works in Search mode. Re-derives after the edit.
    pub fn remove_search_char(&mut self) {
        if self.mode == UiMode::Search {
            self.query.search_term.pop();
            self.rederive();
        }
    }

    /// Cycle to the next sort directive.
    ///
    /// # Details
    /// Unsorted -> Name A-Z -> Name Z-A -> Unsorted.
    pub fn cycle_sort_order(&mut self) {
        self.query.sort_order = match self.query.sort_order {
            SortOrder::Unsorted => SortOrder::NameAsc,
            SortOrder::NameAsc => SortOrder::NameDesc,
            SortOrder::NameDesc => SortOrder::Unsorted,
        };
        self.rederive();
    }

    /// Get the current sort directive as a string.
    pub fn sort_order_name(&self) -> &str {
        match self.query.sort_order {
            SortOrder::Unsorted => "Newest first",
            SortOrder::NameAsc => "Name A-Z",
            SortOrder::NameDesc => "Name Z-A",
        }
    }

    /// Cycle the skill filter through the vocabulary.
    ///
    /// # Details
    /// None -> first tag -> ... -> last tag -> None. The vocabulary always
    /// reflects the full master list, so options never shrink while filters
    /// are active.
    pub fn cycle_skill_filter(&mut self) {
        self.query.selected_skill = match self.query.selected_skill.take() {
            None => self.skill_options.first().cloned(),
            Some(current) => {
                let pos = self.skill_options.iter().position(|s| *s == current);
                match pos {
                    Some(i) => self.skill_options.get(i + 1).cloned(),
                    None => None,
                }
            }
        };
        self.rederive();
    }

    /// Get the current skill filter as a display string.
    pub fn skill_filter_name(&self) -> &str {
        self.query
            .selected_skill
            .as_deref()
            .unwrap_or("All skills")
    }

    /// Reset search term, skill filter, and sort directive in one step.
    ///
    /// # Details
    /// The single re-derivation afterwards falls back to the fetch-time
    /// order of the master list.
    pub fn reset_query(&mut self) {
        self.query = QueryState::default();
        self.rederive();
    }

    /// Move selection up, wrapping to the bottom at the top.
    pub fn move_up(&mut self) {
        let len = self.current_list_len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Move selection down, wrapping to the top at the bottom.
    pub fn move_down(&mut self) {
        let len = self.current_list_len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Length of the active tab's list.
    pub fn current_list_len(&self) -> usize {
        match self.active_tab {
            Tab::Candidates => self.displayed.len(),
            Tab::Ideas => self.ideas.len(),
        }
    }

    /// Switch to a different tab and reset the selection.
    pub fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.selected_index = 0;
    }

    /// Get the currently active tab.
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Get the currently selected candidate, if the candidates tab has one.
    pub fn selected_candidate(&self) -> Option<&CandidateRecord> {
        self.displayed.get(self.selected_index)
    }

    /// Set the status message.
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
