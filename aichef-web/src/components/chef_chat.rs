//! "Ask the chef" panel on the recipe page.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use crate::api::{ApiClient, ChatTurn, ConsultRequest};
use crate::models::Recipe;

/// Turns sent as history with each question.
const HISTORY_TURNS: usize = 4;

/// Build the consult request for `question`, given the conversation so far.
pub fn consult_request(recipe: &Recipe, history: &[ChatTurn], question: &str) -> ConsultRequest {
    let start = history.len().saturating_sub(HISTORY_TURNS);
    ConsultRequest {
        query: question.trim().to_string(),
        context: recipe.consult_context(),
        history: history[start..].to_vec(),
    }
}

/// Drop the unanswered question at the end of the log after a failed call.
pub fn rollback_question(turns: &mut Vec<ChatTurn>, question: &str) {
    if turns.last().is_some_and(|t| t.role == "user" && t.content == question) {
        turns.pop();
    }
}

#[component]
pub fn ChefChat(recipe: Recipe) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let turns = RwSignal::new(Vec::<ChatTurn>::new());
    let question = RwSignal::new(String::new());
    let is_pending = RwSignal::new(false);
    let error_message = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let asked = question.get_untracked();
        if asked.trim().is_empty() || is_pending.get_untracked() {
            return;
        }

        let request = consult_request(&recipe, &turns.get_untracked(), &asked);
        turns.update(|t| t.push(ChatTurn::user(request.query.clone())));
        question.set(String::new());
        error_message.set(None);
        is_pending.set(true);

        let api = api.clone();
        spawn_local(async move {
            let result = api.consult(&request).await;
            // The page may have been left while the request was in flight.
            if is_pending.try_set(false).is_some() {
                return;
            }
            match result {
                Ok(response) => {
                    turns.try_update(|t| t.push(ChatTurn::assistant(response.reply)));
                }
                Err(e) => {
                    warn!(error = %e, "Chef consult failed");
                    turns.try_update(|t| rollback_question(t, &request.query));
                    if question.try_get_untracked().is_some_and(|q| q.is_empty()) {
                        question.try_set(request.query.clone());
                    }
                    error_message.try_set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <section class="chef-chat">
            <h2 class="section-title">"Ask the Chef"</h2>
            <div class="chef-chat-log">
                {move || turns.get().into_iter().map(|turn| {
                    let class = if turn.role == "user" { "chat-turn chat-user" } else { "chat-turn chat-chef" };
                    view! { <p class=class>{turn.content}</p> }
                }).collect_view()}
                <Show when=move || is_pending.get()>
                    <p class="chat-turn chat-chef chat-pending">"Thinking..."</p>
                </Show>
            </div>
            {move || error_message.get().map(|msg| view! { <div class="status-message error">{msg}</div> })}
            <form class="chef-chat-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Ask about substitutions, timing, technique..."
                    prop:value=move || question.get()
                    on:input=move |ev| question.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || is_pending.get()>"Ask"</button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_recipe;

    #[test]
    fn test_request_keeps_recent_history_only() {
        let history: Vec<ChatTurn> = (0..6).map(|i| ChatTurn::user(format!("q{}", i))).collect();
        let request = consult_request(&sample_recipe("r1"), &history, "  more salt? ");

        assert_eq!(request.query, "more salt?");
        assert_eq!(request.history.len(), HISTORY_TURNS);
        assert_eq!(request.history[0].content, "q2");
        assert!(request.context.contains("Recipe r1"));
    }

    #[test]
    fn test_failed_question_is_rolled_back() {
        let mut turns = vec![
            ChatTurn::user("q1"),
            ChatTurn::assistant("a1"),
            ChatTurn::user("q2"),
        ];
        rollback_question(&mut turns, "q2");
        assert_eq!(turns.len(), 2);

        // Never removes an answered turn.
        rollback_question(&mut turns, "q2");
        assert_eq!(turns.last().unwrap().content, "a1");

        let next = consult_request(&sample_recipe("r1"), &turns, "q2");
        assert_eq!(next.history.last().unwrap().role, "assistant");
    }

    #[test]
    fn test_request_with_empty_history() {
        let request = consult_request(&sample_recipe("r1"), &[], "hi");
        assert!(request.history.is_empty());
    }
}
