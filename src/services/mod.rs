pub mod debounce;
pub mod providers;
pub mod search_controller;

pub use debounce::Debouncer;
pub use providers::{MovieApi, TmdbClient};
pub use search_controller::{SearchController, SEARCH_DEBOUNCE};
