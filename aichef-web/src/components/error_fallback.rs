//! Fallback shown by the shell's error boundary.

use std::collections::HashSet;
use std::hash::Hash;

use leptos::prelude::*;
use tracing::error;

use crate::profile::reload_page;

/// Values whose key has not been seen before, recording the new keys.
fn newly_seen<K: Hash + Eq, V>(
    seen: &mut HashSet<K>,
    entries: impl IntoIterator<Item = (K, V)>,
) -> Vec<V> {
    entries
        .into_iter()
        .filter_map(|(key, value)| seen.insert(key).then_some(value))
        .collect()
}

#[component]
pub fn ErrorFallback(errors: ArcRwSignal<Errors>) -> impl IntoView {
    let logged = errors.clone();
    Effect::new(move |prev: Option<HashSet<_>>| {
        let mut seen = prev.unwrap_or_default();
        for e in newly_seen(&mut seen, logged.get()) {
            error!(error = %e, "Uncaught view error");
        }
        seen
    });

    view! {
        <div class="error-screen">
            <h1>"Something went wrong."</h1>
            <pre class="error-details">
                {move || {
                    errors
                        .get()
                        .into_iter()
                        .map(|(_, e)| e.to_string())
                        .collect::<Vec<_>>()
                        .join("\n")
                }}
            </pre>
            <button class="primary-btn" on:click=move |_| reload_page()>
                "Reload Page"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_new_errors_are_reported() {
        let mut seen = HashSet::new();
        assert_eq!(newly_seen(&mut seen, vec![(1, "a")]), vec!["a"]);
        assert_eq!(newly_seen(&mut seen, vec![(1, "a"), (2, "b")]), vec!["b"]);
        assert!(newly_seen(&mut seen, vec![(2, "b"), (1, "a")]).is_empty());
    }
}
