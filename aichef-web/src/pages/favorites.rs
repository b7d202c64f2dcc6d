//! Saved recipe collection.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::{ProfileSwitch, RecipeCard};
use crate::models::Recipe;
use crate::routes::{recipe_path, with_recipe, HOME};
use crate::storage::favorites::list_favorites;
use crate::storage::LocalStore;

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let navigate = use_navigate();
    let saved = LocalResource::new(|| async { list_favorites(&LocalStore) });

    let on_open = Callback::new(move |recipe: Recipe| {
        navigate(&recipe_path(&recipe.recipe_id), with_recipe(&recipe));
    });

    view! {
        <div class="favorites-page">
            <header class="page-header">
                <a href=HOME class="back-link">"Back"</a>
                <h1 class="page-title">"MY COLLECTION"</h1>
                <ProfileSwitch />
            </header>
            <main class="page-content">
                {move || Suspend::new(async move {
                    let recipes = saved.await;
                    if recipes.is_empty() {
                        view! {
                            <div class="empty-state">
                                <h2>"No Favorites Yet"</h2>
                                <p>"Start exploring recipes and save your best culinary discoveries here."</p>
                                <a href=HOME class="primary-btn">"Explore Recipes"</a>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="recipe-grid">
                                {recipes.into_iter().map(|recipe| view! {
                                    <RecipeCard recipe=recipe saved=true on_open=on_open />
                                }).collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                })}
            </main>
        </div>
    }
}
