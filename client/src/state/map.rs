//! Map Selector state: address search plus the committed marker position.
//!
//! DESIGN
//! ======
//! Each query change cancels the previous [`CancelToken`] and issues a new
//! one. The component waits the debounce interval, searches only if its
//! token is still live, and hands the result back through
//! [`MapState::apply_results`], which ignores anything from a cancelled
//! token. Unmounting calls [`MapState::dispose`].

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use gyms::geocode::{CancelToken, Coordinates, DEFAULT_CENTER, GeocodeError, Suggestion, should_search};

#[derive(Clone, Debug)]
pub struct MapState {
    pub query: String,
    pub suggestions: Vec<Suggestion>,
    pub searching: bool,
    /// The committed marker position the parent form consumes.
    pub position: Coordinates,
    /// Where the tile grid is centered.
    pub view_center: Coordinates,
    token: CancelToken,
}

impl MapState {
    #[must_use]
    pub fn new(initial: Option<Coordinates>) -> Self {
        let position = initial.filter(|c| c.is_valid()).unwrap_or(DEFAULT_CENTER);
        Self {
            query: String::new(),
            suggestions: Vec::new(),
            searching: false,
            position,
            view_center: position,
            token: CancelToken::new(),
        }
    }

    /// Record a keystroke. Returns the token to debounce and search with,
    /// or `None` when the query is too short to search.
    pub fn set_query(&mut self, query: &str) -> Option<CancelToken> {
        self.token.cancel();
        self.token = CancelToken::new();
        self.query = query.to_owned();
        if should_search(query) {
            self.searching = true;
            Some(self.token.clone())
        } else {
            self.searching = false;
            self.suggestions.clear();
            None
        }
    }

    /// Apply a finished search. Returns `false` if it was superseded.
    pub fn apply_results(&mut self, token: &CancelToken, result: Result<Vec<Suggestion>, GeocodeError>) -> bool {
        if token.is_cancelled() {
            return false;
        }
        self.searching = false;
        self.suggestions = result.unwrap_or_default();
        true
    }

    /// Commit the suggestion at `index` and recenter on it.
    pub fn select(&mut self, index: usize) -> Option<Coordinates> {
        let suggestion = self.suggestions.get(index)?;
        let coords = suggestion.coordinates()?;
        self.query.clone_from(&suggestion.display_name);
        self.token.cancel();
        self.suggestions.clear();
        self.searching = false;
        self.position = coords;
        self.view_center = coords;
        Some(coords)
    }

    /// Commit a map click without moving the view.
    pub fn click(&mut self, coords: Coordinates) -> Coordinates {
        self.position = coords;
        self.suggestions.clear();
        coords
    }

    /// Cancel any pending search.
    pub fn dispose(&mut self) {
        self.token.cancel();
        self.searching = false;
    }
}
