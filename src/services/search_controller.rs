/// Search screen controller
///
/// Coordinates the three query modes of the search screen (idle, free-text
/// search, genre filter) against a [`MovieApi`] and publishes every state
/// change on a `watch` channel for whatever renders it.
///
/// Handlers never block: they update state immediately and dispatch the fetch
/// as a task. Fetches are never canceled once dispatched. Instead every
/// transition that replaces the result set bumps a request generation, and a
/// response is applied only while its generation is still current.
use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::{
    error::AppResult,
    models::{Genre, GenreId, GenreOption, Movie, SearchState},
    services::{debounce::Debouncer, providers::MovieApi},
};

/// Default quiet window for free-text input
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

pub struct SearchController {
    inner: Arc<Inner>,
    debouncer: Debouncer,
    genres: Vec<Genre>,
}

struct Inner {
    api: Arc<dyn MovieApi>,
    state: watch::Sender<SearchState>,
    generation: AtomicU64,
}

#[derive(Debug, Clone)]
enum MovieRequest {
    Search(String),
    Genre(GenreId),
}

impl Display for MovieRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MovieRequest::Search(query) => write!(f, "search:{}", query),
            MovieRequest::Genre(id) => write!(f, "genre:{}", id),
        }
    }
}

impl SearchController {
    /// Creates the controller and loads the genre list
    ///
    /// The genre list is fetched exactly once. A failed fetch leaves it
    /// empty, which only disables genre filtering.
    pub async fn mount(api: Arc<dyn MovieApi>, debounce: Duration) -> Self {
        let genres = match api.fetch_genres().await {
            Ok(genres) => genres,
            Err(e) => {
                tracing::error!(error = %e, provider = api.name(), "Error fetching genres");
                Vec::new()
            }
        };

        tracing::info!(
            genres = genres.len(),
            debounce_ms = debounce.as_millis() as u64,
            "Search controller mounted"
        );

        let (state, _) = watch::channel(SearchState::default());

        Self {
            inner: Arc::new(Inner {
                api,
                state,
                generation: AtomicU64::new(0),
            }),
            debouncer: Debouncer::new(debounce),
            genres,
        }
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    /// Genre picker entries, led by "All genres"
    pub fn genre_options(&self) -> Vec<GenreOption> {
        GenreOption::list(&self.genres)
    }

    /// Current state snapshot
    pub fn snapshot(&self) -> SearchState {
        self.inner.state.borrow().clone()
    }

    /// Stream of state snapshots, one notification per transition
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.inner.state.subscribe()
    }

    /// Handles a change of the free-text input
    ///
    /// Only the last value of a burst reaches the API, after the debounce
    /// window has passed with no further input.
    pub fn search(&self, text: impl Into<String>) {
        let query = text.into();
        let inner = Arc::clone(&self.inner);
        self.debouncer.trigger(async move {
            inner.apply_query(query);
        });
    }

    /// Selects a genre filter, or clears it with `None` ("All genres")
    pub fn select_genre(&self, genre_id: Option<GenreId>) {
        match genre_id {
            Some(id) => self.inner.filter_by_genre(id),
            None => self.inner.clear_genre(),
        }
    }

    /// Selects `genre_id`, or clears the filter if it is already selected
    pub fn toggle_genre(&self, genre_id: GenreId) {
        let selected = self.inner.state.borrow().selected_genre_id;
        if selected == Some(genre_id) {
            self.select_genre(None);
        } else {
            self.select_genre(Some(genre_id));
        }
    }
}

impl Inner {
    /// Claims a new request generation; must run under the state lock
    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn apply_query(self: &Arc<Self>, query: String) {
        if query.is_empty() {
            // Reading the selected genre and claiming the refilter happen in one write.
            let mut refilter = None;
            self.state.send_modify(|state| {
                let generation = self.next_generation();
                state.query.clear();
                state.search_active = false;
                match state.selected_genre_id {
                    Some(id) => {
                        state.loading = true;
                        refilter = Some((generation, id));
                    }
                    None => {
                        state.movies.clear();
                        state.loading = false;
                    }
                }
            });

            if let Some((generation, id)) = refilter {
                self.dispatch(generation, MovieRequest::Genre(id));
            }
            return;
        }

        let mut generation = 0;
        self.state.send_modify(|state| {
            generation = self.next_generation();
            state.query = query.clone();
            state.loading = true;
            state.search_active = true;
            state.selected_genre_id = None;
        });

        self.dispatch(generation, MovieRequest::Search(query));
    }

    fn filter_by_genre(self: &Arc<Self>, genre_id: GenreId) {
        let mut generation = 0;
        self.state.send_modify(|state| {
            generation = self.next_generation();
            state.query.clear();
            state.loading = true;
            state.search_active = false;
            state.selected_genre_id = Some(genre_id);
        });

        self.dispatch(generation, MovieRequest::Genre(genre_id));
    }

    fn clear_genre(&self) {
        self.state.send_modify(|state| {
            self.next_generation();
            state.movies.clear();
            state.selected_genre_id = None;
            state.loading = false;
        });
    }

    fn dispatch(self: &Arc<Self>, generation: u64, request: MovieRequest) {
        let inner = Arc::clone(self);
        tokio::spawn(async move {
            let result = match &request {
                MovieRequest::Search(query) => inner.api.search_movies(query).await,
                MovieRequest::Genre(id) => inner.api.discover_movies(*id).await,
            };
            inner.settle(generation, &request, result);
        });
    }

    /// Replaces the result set unless a newer request has superseded this one
    fn settle(&self, generation: u64, request: &MovieRequest, result: AppResult<Vec<Movie>>) {
        self.state.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != generation {
                tracing::debug!(request = %request, generation, "Dropping superseded response");
                return false;
            }

            state.movies = match result {
                Ok(movies) => movies,
                Err(e) => {
                    tracing::error!(error = %e, request = %request, "Error fetching movies");
                    Vec::new()
                }
            };
            state.loading = false;
            true
        });
    }
}
