//! Card used by the results grid and the favorites collection.

use leptos::prelude::*;

use crate::models::Recipe;

/// Scores at or below 1.0 are fractions; anything larger is already a percentage.
pub fn match_label(score: f64) -> String {
    let percent = if score <= 1.0 { score * 100.0 } else { score };
    format!("{:.0}% match", percent)
}

#[component]
pub fn RecipeCard(
    recipe: Recipe,
    /// Show the "Saved" badge.
    #[prop(optional)]
    saved: bool,
    #[prop(into)] on_open: Callback<Recipe>,
) -> impl IntoView {
    let name = recipe.recipe_name.clone();
    let tags: Vec<String> = recipe.tags.iter().take(2).cloned().collect();
    let cover = recipe.cover_image.clone();
    let score = recipe.match_score.map(match_label);
    let cooking_time = recipe.cooking_time.clone();
    let difficulty = recipe.difficulty.clone();

    view! {
        <div class="recipe-card" on:click=move |_| on_open.run(recipe.clone())>
            <div class="recipe-card-cover">
                {match cover {
                    Some(src) => view! { <img src=src alt=name.clone() /> }.into_any(),
                    None => view! { <div class="cover-placeholder">"No Image"</div> }.into_any(),
                }}
                {saved.then(|| view! { <span class="recipe-card-badge">"Saved"</span> })}
                {score.map(|s| view! { <span class="recipe-card-score">{s}</span> })}
            </div>
            <div class="recipe-card-body">
                <h3 class="recipe-card-title">{name.clone()}</h3>
                <div class="recipe-card-tags">
                    {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
                </div>
                <div class="recipe-card-meta">
                    <span>{cooking_time.unwrap_or_else(|| "Time varies".to_string())}</span>
                    {difficulty.map(|d| view! { <span>{d}</span> })}
                    <span class="recipe-card-link">"Full Recipe"</span>
                </div>
            </div>
        </div>
    }
}
