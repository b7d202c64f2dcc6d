//! Search entry page.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::ProfileSwitch;
use crate::routes::{results_path, FAVORITES};

pub struct Category {
    pub name: &'static str,
    pub query: &'static str,
}

pub const CATEGORIES: [Category; 4] = [
    Category { name: "Signature Meats", query: "肉类料理" },
    Category { name: "Ocean Fresh", query: "海鲜" },
    Category { name: "Garden Greens", query: "素食" },
    Category { name: "Morning Delights", query: "早餐" },
];

/// Results route for a submitted query, or `None` for a blank one.
pub fn search_target(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        None
    } else {
        Some(results_path(query))
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let navigate = use_navigate();

    let on_search = {
        let navigate = navigate.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            if let Some(target) = search_target(&query.get_untracked()) {
                navigate(&target, Default::default());
            }
        }
    };

    let to_favorites = {
        let navigate = navigate.clone();
        move |_| navigate(FAVORITES, Default::default())
    };

    view! {
        <div class="home-page">
            <nav class="home-nav">
                <ProfileSwitch align_left=true />
                <button class="nav-btn" on:click=to_favorites>"MY COLLECTION"</button>
            </nav>

            <div class="home-hero">
                <h1 class="app-title">"AIChef" <span class="accent">"."</span></h1>
                <p class="tagline">
                    "Your personal culinary consultant. Turn simple ingredients into gourmet experiences."
                </p>

                <form class="search-form" on:submit=on_search>
                    <input
                        type="text"
                        class="search-input"
                        placeholder="Enter your available ingredients..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    <button type="submit" class="primary-btn">"Consult"</button>
                </form>

                <div class="category-grid">
                    {CATEGORIES.iter().map(|cat| {
                        let navigate = navigate.clone();
                        let target = results_path(cat.query);
                        view! {
                            <button
                                class="category-btn"
                                on:click=move |_| navigate(&target, Default::default())
                            >
                                {cat.name}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>

            <footer class="app-footer">"Fine Dining at Home"</footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_does_not_navigate() {
        assert_eq!(search_target(""), None);
        assert_eq!(search_target("   "), None);
    }

    #[test]
    fn test_query_navigates_to_results() {
        assert_eq!(search_target("egg").as_deref(), Some("/results?q=egg"));
    }

    #[test]
    fn test_categories_have_queries() {
        assert!(CATEGORIES.iter().all(|c| !c.query.is_empty()));
        assert_eq!(CATEGORIES[1].name, "Ocean Fresh");
    }
}
