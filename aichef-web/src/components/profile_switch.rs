//! Dropdown for switching between local profiles.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::profile::use_profile;

#[component]
pub fn ProfileSwitch(
    /// Open the dropdown towards the left edge instead of the right.
    #[prop(optional)]
    align_left: bool,
) -> impl IntoView {
    let profile = use_profile();
    let name = profile.name();
    let is_open = RwSignal::new(false);
    let new_name = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let entered = new_name.get_untracked();
        if entered.trim().is_empty() {
            return;
        }
        is_open.set(false);
        new_name.set(String::new());
        profile.switch_user(&entered);
    };

    view! {
        <div class="profile-switch">
            <button class="profile-btn" on:click=move |_| is_open.update(|o| *o = !*o)>
                <span class="profile-avatar">"@"</span>
                <span class="profile-name">{move || name.get()}</span>
            </button>

            <Show when=move || is_open.get()>
                <div class="profile-menu" class:profile-menu-left=align_left>
                    <h3 class="section-title">"Switch Profile"</h3>
                    <div class="profile-list">
                        {profile.choices().into_iter().map(|choice| {
                            let label = choice.clone();
                            let target = choice.clone();
                            let is_active = move || name.get() == choice;
                            view! {
                                <button
                                    class="profile-option"
                                    class:active=is_active
                                    on:click=move |_| profile.switch_user(&target)
                                >
                                    {label}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                    <form class="profile-form" on:submit=on_submit>
                        <label for="profile-new">"Or enter new name:"</label>
                        <div class="profile-form-row">
                            <input
                                id="profile-new"
                                type="text"
                                placeholder="Name..."
                                prop:value=move || new_name.get()
                                on:input=move |ev| new_name.set(event_target_value(&ev))
                            />
                            <button type="submit">"Go"</button>
                        </div>
                    </form>
                </div>
            </Show>
        </div>
    }
}
