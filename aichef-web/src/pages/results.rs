//! Candidate list for a search query.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use tracing::info;

use crate::api::ApiClient;
use crate::components::{ProfileSwitch, RecipeCard};
use crate::error::{ApiError, ViewError};
use crate::models::{Recipe, RecipeResponse};
use crate::routes::{recipe_path, with_recipe, HOME};

#[component]
pub fn ResultsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let query = use_query_map();
    let navigate = use_navigate();

    let search = LocalResource::new(move || {
        let api = api.clone();
        let q = query.get().get("q").unwrap_or_default();
        async move {
            if q.trim().is_empty() {
                return Err(ViewError::MissingQuery);
            }
            info!(query = %q, "Searching recipes");
            let limit = api.config().search_limit;
            let outcome = api.search(&q, limit).await;
            Ok((q, outcome))
        }
    });

    let on_open = Callback::new(move |recipe: Recipe| {
        navigate(&recipe_path(&recipe.recipe_id), with_recipe(&recipe));
    });

    view! {
        <div class="results-page">
            <header class="page-header">
                <a href=HOME class="back-link">"Back"</a>
                <h1 class="page-title">"Chef's Selection"</h1>
                <ProfileSwitch />
            </header>
            <main class="page-content">
                {move || Suspend::new(async move {
                    search.await.map(|(q, outcome)| view! {
                        <SearchOutcome query=q outcome=outcome on_open=on_open />
                    })
                })}
            </main>
        </div>
    }
}

#[component]
fn SearchOutcome(
    query: String,
    outcome: Result<RecipeResponse, ApiError>,
    on_open: Callback<Recipe>,
) -> impl IntoView {
    match outcome {
        Err(e) if e.is_not_found() => view! {
            <div class="empty-state">
                <h2>"No recipes found"</h2>
                <p>{e.user_message()}</p>
                <a href=HOME class="primary-btn">"Try another search"</a>
            </div>
        }
        .into_any(),
        Err(e) => view! {
            <div class="empty-state">
                <h2>"The chef is unavailable"</h2>
                <p class="status-message error">{e.to_string()}</p>
            </div>
        }
        .into_any(),
        Ok(response) if response.candidates.is_empty() => view! {
            <div class="empty-state">
                <h2>"No recipes found"</h2>
                <p>{format!("Nothing matched \"{}\".", query)}</p>
            </div>
        }
        .into_any(),
        Ok(response) => view! {
            <p class="results-query">{format!("Results for \"{}\"", query)}</p>
            {response.ai_message.filter(|m| !m.is_empty()).map(|msg| view! {
                <div class="consultant-note">
                    <h3>"Chef's Consultant Note"</h3>
                    <p>{msg}</p>
                </div>
            })}
            <div class="recipe-grid">
                {response.candidates.into_iter().map(|recipe| view! {
                    <RecipeCard recipe=recipe on_open=on_open />
                }).collect_view()}
            </div>
        }
        .into_any(),
    }
}
