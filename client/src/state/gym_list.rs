//! Gym List Controller state.
//!
//! DESIGN
//! ======
//! The backend pages `GET /user/gyms` in fixed pages of [`PAGE_SIZE`] and
//! never reports a total, so `has_more` is true exactly when the last page
//! came back full. Every fetch replaces the held items; "load more" moves
//! to the next page instead of accumulating pages. `page` always names the
//! page on screen, so a failed "load more" can simply be retried.
//!
//! Each `begin_*` call bumps a sequence number and hands back a
//! [`FetchRequest`]. A response is only applied if its request is still the
//! latest one, so a slow page-1 answer cannot clobber a newer sort.
//!
//! Search is purely in-memory over the held page.

#[cfg(test)]
#[path = "gym_list_test.rs"]
mod gym_list_test;

use gyms::{ApiError, Gym, PAGE_SIZE, SortOrder};

pub const FETCH_ERROR: &str = "Failed to fetch your gyms. Please try again.";

/// Parameters for one `GET /user/gyms` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub page: u32,
    pub sort: SortOrder,
    seq: u64,
}

/// What a finished request did to the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListOutcome {
    Applied,
    /// A newer request superseded this one; nothing changed.
    Stale,
    Failed,
    /// The caller must expire the session.
    SessionExpired,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GymListState {
    pub items: Vec<Gym>,
    pub page: u32,
    pub has_more: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub sort: SortOrder,
    pub search: String,
    /// Gym awaiting delete confirmation.
    pub pending_delete: Option<String>,
    /// Gym whose DELETE is in flight.
    pub deleting: Option<String>,
    seq: u64,
}

impl Default for GymListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            has_more: false,
            loading: false,
            error: None,
            sort: SortOrder::default(),
            search: String::new(),
            pending_delete: None,
            deleting: None,
            seq: 0,
        }
    }
}

impl GymListState {
    /// Start fetching the current page.
    pub fn begin_fetch(&mut self) -> FetchRequest {
        self.request_page(self.page)
    }

    fn request_page(&mut self, page: u32) -> FetchRequest {
        self.seq += 1;
        self.loading = true;
        self.error = None;
        FetchRequest { page, sort: self.sort, seq: self.seq }
    }

    /// Apply a page response. Failures keep the held items.
    pub fn finish_fetch(&mut self, request: FetchRequest, result: Result<Vec<Gym>, ApiError>) -> ListOutcome {
        if request.seq != self.seq {
            return ListOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(gyms) => {
                self.page = request.page;
                self.has_more = gyms.len() == PAGE_SIZE;
                self.items = gyms;
                ListOutcome::Applied
            }
            Err(e) if e.is_session_expired() => {
                self.error = Some(e.user_message("fetch gyms"));
                ListOutcome::SessionExpired
            }
            Err(_) => {
                self.error = Some(FETCH_ERROR.to_owned());
                ListOutcome::Failed
            }
        }
    }

    /// Request the page after the one on screen. `None` when there is nothing
    /// more or a fetch is running. `page` only advances once that page lands.
    pub fn load_more(&mut self) -> Option<FetchRequest> {
        if !self.has_more || self.loading {
            return None;
        }
        Some(self.request_page(self.page + 1))
    }

    /// Back to page 1 with an empty list. Used after a create or edit.
    pub fn restart(&mut self) -> FetchRequest {
        self.page = 1;
        self.items.clear();
        self.has_more = false;
        self.begin_fetch()
    }

    /// Change the sort order and refetch from page 1. `None` if unchanged.
    pub fn set_sort(&mut self, sort: SortOrder) -> Option<FetchRequest> {
        if sort == self.sort {
            return None;
        }
        self.sort = sort;
        self.page = 1;
        Some(self.begin_fetch())
    }

    /// The loaded gyms, or `None` while a fetch is replacing them.
    #[must_use]
    pub fn settled_items(&self) -> Option<&[Gym]> {
        (!self.loading).then_some(self.items.as_slice())
    }

    pub fn set_search(&mut self, search: &str) {
        self.search = search.to_owned();
    }

    /// Items after the in-memory search filter and sort.
    #[must_use]
    pub fn visible(&self) -> Vec<Gym> {
        let needle = self.search.trim().to_lowercase();
        let mut out: Vec<Gym> = self.items.iter().filter(|g| matches_search(g, &needle)).cloned().collect();
        out.sort_by(|a, b| {
            let ord = a.created_at.cmp(&b.created_at).then_with(|| a.title.cmp(&b.title));
            match self.sort {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        });
        out
    }

    // ---- Delete ----

    pub fn request_delete(&mut self, gym_id: &str) {
        self.pending_delete = Some(gym_id.to_owned());
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Confirm the pending delete and return the id to send.
    pub fn confirm_delete(&mut self) -> Option<String> {
        let id = self.pending_delete.take()?;
        self.deleting = Some(id.clone());
        self.error = None;
        Some(id)
    }

    /// Apply a DELETE result. The row goes away only on success.
    pub fn finish_delete(&mut self, gym_id: &str, result: Result<(), ApiError>) -> ListOutcome {
        if self.deleting.as_deref() == Some(gym_id) {
            self.deleting = None;
        }
        match result {
            Ok(()) => {
                self.items.retain(|g| g.id != gym_id);
                ListOutcome::Applied
            }
            Err(e) => {
                self.error = Some(e.user_message("delete gym"));
                if e.is_session_expired() { ListOutcome::SessionExpired } else { ListOutcome::Failed }
            }
        }
    }
}

fn matches_search(gym: &Gym, needle: &str) -> bool {
    needle.is_empty()
        || gym.title.to_lowercase().contains(needle)
        || gym.description.to_lowercase().contains(needle)
        || gym.phone.contains(needle)
}
