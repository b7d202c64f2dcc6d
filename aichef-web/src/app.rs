use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::api::ApiClient;
use crate::components::ErrorFallback;
use crate::config::ClientConfig;
use crate::pages::{DetailPage, FavoritesPage, HomePage, ResultsPage};
use crate::profile::provide_profile;
use crate::storage::LocalStore;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_context(ApiClient::new(config, LocalStore));
    provide_profile();

    view! {
        <ErrorBoundary fallback=|errors| view! { <ErrorFallback errors=errors /> }>
            <Router>
                // One placeholder for every route still resolving its data.
                <Suspense fallback=|| view! { <div class="loading-screen">"Loading..."</div> }>
                    <Routes fallback=|| view! { <div class="not-found">"Page not found."</div> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/results") view=ResultsPage />
                        <Route path=path!("/recipe/:id") view=DetailPage />
                        <Route path=path!("/favorites") view=FavoritesPage />
                    </Routes>
                </Suspense>
            </Router>
        </ErrorBoundary>
    }
}
