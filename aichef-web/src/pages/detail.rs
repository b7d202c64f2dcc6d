//! Recipe detail page.
//!
//! The recipe only arrives as navigation state from the results or favorites
//! page; there is no fetch-by-id endpoint, so a direct load shows a
//! not-found view.

use leptos::prelude::*;
use tracing::warn;

use crate::components::ChefChat;
use crate::models::Recipe;
use crate::routes::recipe_from_location;
use crate::storage::favorites::{is_favorite, toggle_favorite};
use crate::storage::LocalStore;

#[component]
pub fn DetailPage() -> impl IntoView {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }

    recipe_from_location().map(|found| match found {
        Some(recipe) => view! { <RecipeDetail recipe=recipe /> }.into_any(),
        None => view! { <div class="not-found">"Recipe not found."</div> }.into_any(),
    })
}

fn go_back() {
    let history = web_sys::window().and_then(|w| w.history().ok());
    if let Some(Err(e)) = history.map(|h| h.back()) {
        warn!(error = ?e, "History navigation failed");
    }
}

#[component]
fn RecipeDetail(recipe: Recipe) -> impl IntoView {
    let favorited = RwSignal::new(is_favorite(&LocalStore, &recipe.recipe_id));
    let toggled = recipe.clone();
    let on_toggle = move |_| favorited.set(toggle_favorite(&LocalStore, &toggled));

    let chat_recipe = recipe.clone();
    let name = recipe.recipe_name.clone();
    let note = (!recipe.message.is_empty()).then(|| recipe.message.clone());

    view! {
        <div class="detail-page">
            <div class="detail-hero">
                <div class="detail-actions">
                    <button class="icon-btn" on:click=move |_| go_back()>"Back"</button>
                    <button
                        class="icon-btn favorite-btn"
                        class:favorited=move || favorited.get()
                        on:click=on_toggle
                        title=move || if favorited.get() { "Remove from collection" } else { "Save to collection" }
                    >
                        {move || if favorited.get() { "Saved" } else { "Save" }}
                    </button>
                </div>
                {match recipe.cover_image.clone() {
                    Some(src) => view! { <img class="detail-cover" src=src alt=name.clone() /> }.into_any(),
                    None => view! { <div class="cover-placeholder">"No Image Available"</div> }.into_any(),
                }}
                <div class="detail-heading">
                    <h1>{name.clone()}</h1>
                    <div class="detail-tags">
                        {recipe.tags.iter().cloned().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
                    </div>
                </div>
            </div>

            <main class="detail-content">
                {note.map(|msg| view! {
                    <div class="consultant-note">
                        <h3>"Chef's Consultant Note"</h3>
                        <p>{msg}</p>
                    </div>
                })}

                <div class="detail-columns">
                    <section class="detail-steps">
                        <h2 class="section-title">"Instructions"</h2>
                        {recipe.ordered_steps().into_iter().map(|step| {
                            let label = format!("Step {}", step.step_index);
                            view! {
                                <div class="step">
                                    <h3 class="step-label">{label.clone()}</h3>
                                    <p class="step-text">{step.description}</p>
                                    {match step.image_url {
                                        Some(src) => view! { <img class="step-image" src=src alt=label /> }.into_any(),
                                        None => view! { <div class="step-placeholder">"Cooking..."</div> }.into_any(),
                                    }}
                                </div>
                            }
                        }).collect_view()}
                    </section>

                    <aside class="detail-info">
                        <h3 class="section-title">"Recipe Info"</h3>
                        <InfoRow label="Cook Time" value=recipe.cooking_time.clone() />
                        <InfoRow label="Difficulty" value=recipe.difficulty.clone() />
                        <InfoRow label="Steps" value=Some(recipe.steps.len().to_string()) />
                    </aside>
                </div>

                <ChefChat recipe=chat_recipe />
            </main>
        </div>
    }
}

#[component]
fn InfoRow(label: &'static str, value: Option<String>) -> impl IntoView {
    view! {
        <div class="info-row">
            <span class="info-label">{label}</span>
            <span class="info-value">{value.unwrap_or_else(|| "-".to_string())}</span>
        </div>
    }
}
