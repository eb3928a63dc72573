//! Turnstile Manager state for the selected gym.
//!
//! DESIGN
//! ======
//! Every fetch is tagged with the gym and sort it was issued for. When the
//! user switches gym or order before it lands, the response no longer
//! matches and is dropped. Deletes are confirmed first and the row is only
//! removed once the server has accepted the DELETE.

#[cfg(test)]
#[path = "turnstiles_test.rs"]
mod turnstiles_test;

use gyms::{ApiError, Gym, SortOrder, Turnstile};

pub const NO_GYM_SELECTED: &str = "Please select a gym";
pub const FETCH_ERROR: &str = "Failed to fetch turnstiles. Please try again.";

/// Parameters for one `GET /gyms/{id}/turnstiles` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnstileFetch {
    pub gym_id: String,
    pub sort: SortOrder,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnstileOutcome {
    Applied,
    Stale,
    Failed,
    SessionExpired,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TurnstileState {
    pub gym_id: Option<String>,
    pub sort: SortOrder,
    pub items: Vec<Turnstile>,
    pub loading: bool,
    pub adding: bool,
    pub error: Option<String>,
    pub pending_delete: Option<String>,
    pub deleting: Option<String>,
    /// Turnstile whose QR dialog is open.
    pub qr_view: Option<Turnstile>,
}

impl TurnstileState {
    /// Switch to `gym_id`. Returns the fetch to issue when the selection changed.
    pub fn select_gym(&mut self, gym_id: Option<String>) -> Option<TurnstileFetch> {
        if gym_id == self.gym_id {
            return None;
        }
        self.gym_id = gym_id;
        self.items.clear();
        self.pending_delete = None;
        self.qr_view = None;
        self.error = None;
        self.begin_fetch()
    }

    /// Keep the selection valid against the current gym list, defaulting to the first gym.
    pub fn sync_with(&mut self, gyms: &[Gym]) -> Option<TurnstileFetch> {
        let still_listed = self.gym_id.as_ref().is_some_and(|id| gyms.iter().any(|g| &g.id == id));
        if still_listed {
            return None;
        }
        self.select_gym(gyms.first().map(|g| g.id.clone()))
    }

    pub fn set_sort(&mut self, sort: SortOrder) -> Option<TurnstileFetch> {
        if sort == self.sort {
            return None;
        }
        self.sort = sort;
        self.begin_fetch()
    }

    /// Fetch for the current gym, if any. Without a gym nothing is loading.
    pub fn begin_fetch(&mut self) -> Option<TurnstileFetch> {
        let Some(gym_id) = self.gym_id.clone() else {
            self.loading = false;
            return None;
        };
        self.loading = true;
        Some(TurnstileFetch { gym_id, sort: self.sort })
    }

    fn is_current(&self, fetch: &TurnstileFetch) -> bool {
        self.gym_id.as_deref() == Some(fetch.gym_id.as_str()) && self.sort == fetch.sort
    }

    pub fn finish_fetch(&mut self, fetch: &TurnstileFetch, result: Result<Vec<Turnstile>, ApiError>) -> TurnstileOutcome {
        if !self.is_current(fetch) {
            return TurnstileOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
                TurnstileOutcome::Applied
            }
            Err(e) if e.is_session_expired() => self.fail(&e, "fetch turnstiles"),
            Err(_) => {
                self.error = Some(FETCH_ERROR.to_owned());
                TurnstileOutcome::Failed
            }
        }
    }

    /// Start adding a turnstile to the selected gym.
    pub fn begin_add(&mut self) -> Option<String> {
        if self.adding {
            return None;
        }
        let Some(gym_id) = self.gym_id.clone() else {
            self.error = Some(NO_GYM_SELECTED.to_owned());
            return None;
        };
        self.adding = true;
        self.error = None;
        Some(gym_id)
    }

    /// Apply a create result. On success the list is refetched.
    pub fn finish_add(&mut self, result: Result<Turnstile, ApiError>) -> (TurnstileOutcome, Option<TurnstileFetch>) {
        self.adding = false;
        match result {
            Ok(_) => (TurnstileOutcome::Applied, self.begin_fetch()),
            Err(e) => (self.fail(&e, "add turnstile"), None),
        }
    }

    pub fn request_delete(&mut self, turnstile_id: &str) {
        self.pending_delete = Some(turnstile_id.to_owned());
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn confirm_delete(&mut self) -> Option<String> {
        let id = self.pending_delete.take()?;
        self.deleting = Some(id.clone());
        self.error = None;
        Some(id)
    }

    /// Apply a DELETE result; the row is removed only on success.
    pub fn finish_delete(&mut self, turnstile_id: &str, result: Result<(), ApiError>) -> TurnstileOutcome {
        if self.deleting.as_deref() == Some(turnstile_id) {
            self.deleting = None;
        }
        match result {
            Ok(()) => {
                self.items.retain(|t| t.id != turnstile_id);
                if self.qr_view.as_ref().is_some_and(|t| t.id == turnstile_id) {
                    self.qr_view = None;
                }
                TurnstileOutcome::Applied
            }
            Err(e) => self.fail(&e, "delete turnstile"),
        }
    }

    pub fn open_qr(&mut self, turnstile_id: &str) {
        self.qr_view = self.items.iter().find(|t| t.id == turnstile_id).cloned();
    }

    pub fn close_qr(&mut self) {
        self.qr_view = None;
    }

    fn fail(&mut self, e: &ApiError, action: &str) -> TurnstileOutcome {
        self.error = Some(e.user_message(action));
        if e.is_session_expired() { TurnstileOutcome::SessionExpired } else { TurnstileOutcome::Failed }
    }
}
