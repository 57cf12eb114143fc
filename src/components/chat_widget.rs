//! Floating chat widget: launcher button plus a compact conversation panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! The widget owns a transcript and conversation id entirely independent of
//! the full chat page; only the open/closed flag lives in shared UI state.
//! Suggestion seeds fill the empty-transcript view and click through into
//! the input.

use leptos::prelude::*;

use crate::components::message_bubble::MessageBubble;
use crate::net::chat_client;
use crate::state::chat::ChatState;
use crate::state::ui::UiState;

/// Floating chat assistant available on every route.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let chat = RwSignal::new(ChatState::default());
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let suggestions = chat_client::suggested_questions(None, None);

    // Keep the newest message visible.
    Effect::new(move || {
        let state = chat.get();
        let _ = state.messages.len();
        let _ = state.sending();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get();
        if text.trim().is_empty() || chat.get().sending() {
            return;
        }
        chat_client::submit_turn(chat, &text, None, None);
        input.set(String::new());
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty() && !chat.get().sending();

    view! {
        <Show when=move || !ui.get().widget_open>
            <button
                class="chat-launcher"
                title="Ask the assistant"
                on:click=move |_| ui.update(|u| u.widget_open = true)
            >
                "💬"
            </button>
        </Show>

        <Show when=move || ui.get().widget_open>
            <div class="chat-widget">
                <div class="chat-widget__header">
                    <div>
                        <h3 class="chat-widget__title">"AuditIQ Assistant"</h3>
                        <p class="chat-widget__subtitle">"Compliance Q&A"</p>
                    </div>
                    <button
                        class="chat-widget__close"
                        on:click=move |_| ui.update(|u| u.widget_open = false)
                    >
                        "✕"
                    </button>
                </div>

                <div class="chat-widget__messages" node_ref=messages_ref>
                    {move || {
                        let messages = chat.get().messages;
                        if messages.is_empty() {
                            return view! {
                                <div class="chat-widget__empty">"Ask me anything about compliance!"</div>
                            }
                                .into_any();
                        }
                        messages
                            .into_iter()
                            .map(|message| view! { <MessageBubble message=message/> })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}

                    {move || {
                        chat.get()
                            .sending()
                            .then(|| view! { <div class="chat-widget__pending">"AI is thinking..."</div> })
                    }}
                </div>

                <Show when=move || chat.get().messages.is_empty()>
                    <div class="chat-widget__suggestions">
                        <p class="chat-widget__suggestions-label">"Suggested questions:"</p>
                        {suggestions
                            .clone()
                            .into_iter()
                            .map(|suggestion| {
                                let question = suggestion.question.clone();
                                view! {
                                    <button
                                        class="chat-widget__suggestion"
                                        on:click=move |_| input.set(question.clone())
                                    >
                                        <span class="chat-widget__suggestion-icon">{suggestion.icon}</span>
                                        {suggestion.question}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </Show>

                <div class="chat-widget__input-row">
                    <input
                        class="chat-widget__input"
                        type="text"
                        placeholder="Ask about compliance..."
                        disabled=move || chat.get().sending()
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                    <button
                        class="btn btn--primary chat-widget__send"
                        on:click=on_click
                        disabled=move || !can_send()
                    >
                        "Send"
                    </button>
                </div>
            </div>
        </Show>
    }
}
