//! Tab-wide profile state.

use leptos::prelude::*;
use tracing::warn;

use crate::storage::profile::{current_profile, profile_choices, switch_profile};
use crate::storage::LocalStore;

#[derive(Debug, Clone, Copy)]
pub struct ProfileContext {
    name: RwSignal<String>,
}

impl ProfileContext {
    pub fn name(&self) -> Signal<String> {
        self.name.into()
    }

    /// Names offered by the profile switcher, `default` first.
    pub fn choices(&self) -> Vec<String> {
        profile_choices(&LocalStore)
    }

    /// Persist the new profile and reload the page so nothing keyed to the
    /// old profile survives.
    pub fn switch_user(&self, name: &str) {
        let stored = switch_profile(&LocalStore, name);
        self.name.set(stored);
        reload_page();
    }
}

/// Read the stored profile once and make it available to descendants.
pub fn provide_profile() -> ProfileContext {
    let context = ProfileContext {
        name: RwSignal::new(current_profile(&LocalStore)),
    };
    provide_context(context);
    context
}

/// Panics when called outside the subtree below [`provide_profile`].
pub fn use_profile() -> ProfileContext {
    expect_context::<ProfileContext>()
}

pub fn reload_page() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().reload() {
        warn!(error = ?e, "Page reload failed");
    }
}
