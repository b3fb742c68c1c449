use serde::Serialize;

use super::{GenreId, Movie};

/// Query mode of the search screen, derived from [`SearchState`]
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// No query and no genre; results are empty
    Idle,
    /// A free-text query is active
    Searching,
    /// A genre filter is active
    Filtering,
}

/// State owned by the search controller
///
/// Rendering code only ever sees clones of this value. A non-empty
/// `query` with `search_active` set and a `selected_genre_id` never
/// coexist: each transition that sets one clears the other.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub selected_genre_id: Option<GenreId>,
    pub movies: Vec<Movie>,
    pub loading: bool,
    pub search_active: bool,
}

/// What the results area should display for a given state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultsView<'a> {
    Loading,
    Empty,
    Movies(&'a [Movie]),
}

impl<'a> ResultsView<'a> {
    pub const EMPTY_MESSAGE: &'static str = "No movies found.";

    pub fn kind(&self) -> &'static str {
        match self {
            ResultsView::Loading => "loading",
            ResultsView::Empty => "empty",
            ResultsView::Movies(_) => "movies",
        }
    }
}

impl SearchState {
    pub fn mode(&self) -> SearchMode {
        if self.search_active && !self.query.is_empty() {
            SearchMode::Searching
        } else if self.selected_genre_id.is_some() {
            SearchMode::Filtering
        } else {
            SearchMode::Idle
        }
    }

    pub fn results_view(&self) -> ResultsView<'_> {
        if self.loading {
            ResultsView::Loading
        } else if self.movies.is_empty() {
            ResultsView::Empty
        } else {
            ResultsView::Movies(&self.movies)
        }
    }

    /// True when the text query and the genre filter are not both claimed
    pub fn is_mode_exclusive(&self) -> bool {
        !(self.search_active && self.selected_genre_id.is_some())
    }
}
