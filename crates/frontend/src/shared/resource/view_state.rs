//! Request lifecycle of one resource collection.
//!
//! A page owns one [`ListState`] per collection. Loads and mutations move it
//! through [`Phase`]s; outcome messages live in a single [`Banner`] slot.

use super::dispatcher::ActionMessages;
use crate::shared::action_error::ActionError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    pub fn css_modifier(&self) -> &'static str {
        match self {
            BannerKind::Success => "banner--success",
            BannerKind::Error => "banner--error",
        }
    }
}

/// Transient outcome message. `id` increases with every banner shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub id: u64,
    pub text: String,
    pub kind: BannerKind,
}

/// Sequence number of an issued load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub phase: Phase,
    /// Last load failure, shown in place of the table.
    pub error: Option<String>,
    pub banner: Option<Banner>,
    /// True once any load has succeeded.
    pub is_loaded: bool,
    pending: usize,
    last_load: u64,
    last_banner: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            phase: Phase::Idle,
            error: None,
            banner: None,
            is_loaded: false,
            pending: 0,
            last_load: 0,
            last_banner: 0,
        }
    }
}

impl<T> ListState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while any request of this collection is outstanding.
    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    pub(super) fn begin_request(&mut self) {
        self.pending += 1;
        self.phase = Phase::Loading;
    }

    pub(super) fn end_request(&mut self) {
        self.pending = self.pending.saturating_sub(1);
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.last_load += 1;
        self.error = None;
        self.begin_request();
        LoadTicket(self.last_load)
    }

    /// Applies a load result unless a newer load was issued meanwhile.
    /// Returns whether the result was applied.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<T>, ActionError>,
        messages: &ActionMessages,
    ) -> bool {
        self.end_request();
        if ticket.0 != self.last_load {
            log::debug!("dropping stale load #{} (latest #{})", ticket.0, self.last_load);
            return false;
        }
        match result {
            Ok(items) => {
                self.items = items;
                self.is_loaded = true;
                self.phase = Phase::Success;
            }
            Err(err) => {
                log::warn!("load failed: {}", err);
                self.error = Some(messages.failure_text(&err));
                self.phase = Phase::Failure;
            }
        }
        true
    }

    /// Refuses an action before any request is made. Returns the banner id.
    pub fn reject(&mut self, err: &ActionError, messages: &ActionMessages) -> u64 {
        self.show_banner(messages.failure_text(err), BannerKind::Error)
    }

    pub fn show_banner(&mut self, text: impl Into<String>, kind: BannerKind) -> u64 {
        self.last_banner += 1;
        self.banner = Some(Banner {
            id: self.last_banner,
            text: text.into(),
            kind,
        });
        self.last_banner
    }

    /// Clears the banner only if it is still the one with `id`.
    pub fn dismiss_banner(&mut self, id: u64) -> bool {
        if self.banner.as_ref().map(|b| b.id) == Some(id) {
            self.banner = None;
            true
        } else {
            false
        }
    }

    pub fn clear_banner(&mut self) {
        self.banner = None;
    }
}
