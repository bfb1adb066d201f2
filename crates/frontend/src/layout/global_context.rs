use leptos::prelude::*;

use crate::layout::navigation::{navigation_items, NavItem};
use crate::system::session::SessionState;

/// Shell-wide reactive state, provided once by `App`.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub session: RwSignal<SessionState>,
    pub sidebar_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(SessionState::default()),
            sidebar_open: RwSignal::new(false),
        }
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }

    pub fn close_sidebar(&self) {
        self.sidebar_open.set(false);
    }

    pub fn nav_items(&self) -> Vec<NavItem> {
        self.session.with(|s| navigation_items(s.app_user.as_ref()))
    }

    pub fn platform_available(&self) -> bool {
        self.session.with(|s| s.platform_available())
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
