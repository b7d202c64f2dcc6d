//! Profile identity and the history of names used on this browser.

use tracing::info;

use super::{KeyValueStore, STORAGE_SAVED_USERS, STORAGE_USERNAME};

pub const DEFAULT_PROFILE: &str = "default";
pub const DEFAULT_SAVED_PROFILES: [&str; 3] = ["Dad", "Mom", "Kid"];

/// Trim `name`, falling back to [`DEFAULT_PROFILE`] when nothing is left.
pub fn normalize_profile(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        DEFAULT_PROFILE.to_string()
    } else {
        trimmed.to_string()
    }
}

/// The active profile name, read fresh from storage.
pub fn current_profile<S: KeyValueStore>(store: &S) -> String {
    let Some(raw) = store.get_raw(STORAGE_USERNAME) else {
        return DEFAULT_PROFILE.to_string();
    };
    // Older builds stored the bare name rather than a JSON string.
    let name = serde_json::from_str::<String>(&raw).unwrap_or(raw);
    normalize_profile(&name)
}

/// Default names first, then stored history, without duplicates.
pub fn saved_profiles<S: KeyValueStore>(store: &S) -> Vec<String> {
    let stored: Vec<String> = store.load(STORAGE_SAVED_USERS).unwrap_or_default();
    let mut names: Vec<String> = Vec::with_capacity(DEFAULT_SAVED_PROFILES.len() + stored.len());
    for name in DEFAULT_SAVED_PROFILES
        .iter()
        .map(|s| s.to_string())
        .chain(stored)
    {
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

/// Names offered when switching profile: `default`, then [`saved_profiles`].
pub fn profile_choices<S: KeyValueStore>(store: &S) -> Vec<String> {
    let mut names = vec![DEFAULT_PROFILE.to_string()];
    names.extend(saved_profiles(store).into_iter().filter(|n| n != DEFAULT_PROFILE));
    names
}

/// Append `name` to the history unless it is already there.
pub fn remember_profile<S: KeyValueStore>(store: &S, name: &str) {
    let mut names = saved_profiles(store);
    if names.iter().any(|n| n == name) {
        return;
    }
    names.push(name.to_string());
    store.save(STORAGE_SAVED_USERS, &names);
}

/// Persist `name` as the active profile and return what was stored.
pub fn switch_profile<S: KeyValueStore>(store: &S, name: &str) -> String {
    let name = normalize_profile(name);
    if name != DEFAULT_PROFILE {
        remember_profile(store, &name);
    }
    store.save(STORAGE_USERNAME, &name);
    info!(profile = %name, "Switched profile");
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_unset_profile_is_default() {
        let store = MemoryStore::default();
        assert_eq!(current_profile(&store), "default");
    }

    #[test]
    fn test_whitespace_name_stores_default() {
        let store = MemoryStore::default();
        assert_eq!(switch_profile(&store, "   "), "default");
        assert_eq!(current_profile(&store), "default");
        assert_eq!(store.get_raw(STORAGE_USERNAME).unwrap(), r#""default""#);
    }

    #[test]
    fn test_switch_trims_name() {
        let store = MemoryStore::default();
        switch_profile(&store, "  Ann ");
        assert_eq!(current_profile(&store), "Ann");
    }

    #[test]
    fn test_new_name_appended_once() {
        let store = MemoryStore::default();
        switch_profile(&store, "Ann");
        switch_profile(&store, "Ann");
        switch_profile(&store, " Ann");

        let names = saved_profiles(&store);
        assert_eq!(names, vec!["Dad", "Mom", "Kid", "Ann"]);
    }

    #[test]
    fn test_existing_name_not_duplicated() {
        let store = MemoryStore::default();
        switch_profile(&store, "Mom");
        assert_eq!(saved_profiles(&store), vec!["Dad", "Mom", "Kid"]);
        assert_eq!(current_profile(&store), "Mom");
    }

    #[test]
    fn test_saved_profiles_merges_defaults_with_history() {
        let store = MemoryStore::default();
        store.save(STORAGE_SAVED_USERS, &["Kid", "Zoe", "Zoe"]);
        assert_eq!(saved_profiles(&store), vec!["Dad", "Mom", "Kid", "Zoe"]);
    }

    #[test]
    fn test_corrupt_history_falls_back_to_defaults() {
        let store = MemoryStore::default();
        store.set_raw(STORAGE_SAVED_USERS, "Dad,Mom");
        assert_eq!(saved_profiles(&store), vec!["Dad", "Mom", "Kid"]);
    }

    #[test]
    fn test_choices_start_with_default() {
        let store = MemoryStore::default();
        store.save(STORAGE_SAVED_USERS, &["default", "Zoe"]);
        assert_eq!(profile_choices(&store), vec!["default", "Dad", "Mom", "Kid", "Zoe"]);
    }

    #[test]
    fn test_stored_whitespace_reads_as_default() {
        let store = MemoryStore::default();
        store.set_raw(STORAGE_USERNAME, r#""  ""#);
        assert_eq!(current_profile(&store), "default");

        store.set_raw(STORAGE_USERNAME, r#"" Ann ""#);
        assert_eq!(current_profile(&store), "Ann");
    }

    #[test]
    fn test_legacy_bare_username_is_accepted() {
        let store = MemoryStore::default();
        store.set_raw(STORAGE_USERNAME, "Dad");
        assert_eq!(current_profile(&store), "Dad");
    }
}
