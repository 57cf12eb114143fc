//! Full-page chat assistant with standard selection and quick questions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns its own transcript and conversation id, entirely separate from the
//! floating widget's. Turns are submitted through the conversation client;
//! input is disabled while one is outstanding.

use leptos::prelude::*;

use crate::components::message_bubble::MessageBubble;
use crate::net::chat_client;
use crate::state::chat::{ChatMessage, ChatState, Role};
use crate::util::standards::COMPLIANCE_STANDARDS;

const WELCOME: &str = "👋 Welcome! I can help with:\n\n\
- **Compliance Q&A** - ISO 27001, GDPR, HIPAA and more\n\
- **Policy Writing** - Create audit-ready policies and procedures\n\
- **Quick Guidance** - Remediation steps and implementation advice\n\n\
What would you like help with today?";

/// Route-level chat assistant page.
#[component]
pub fn ChatPage() -> impl IntoView {
    let chat = RwSignal::new(ChatState::default());
    let input = RwSignal::new(String::new());
    let standard = RwSignal::new("ISO_27001".to_owned());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Seed a local welcome message into the empty transcript.
    let seeded = RwSignal::new(false);
    Effect::new(move || {
        if seeded.get() {
            return;
        }
        seeded.set(true);
        chat.update(|c| {
            c.messages.push(ChatMessage {
                id: uuid::Uuid::new_v4().to_string(),
                role: Role::Assistant,
                content: WELCOME.to_owned(),
                timestamp: crate::util::time::now_iso(),
            });
        });
    });

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
        let selected = standard.get();
        chat_client::submit_turn(chat, &text, Some("chat-page"), Some(&selected));
        input.set(String::new());
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty() && !chat.get().sending();

    // Quick questions only seed a fresh conversation (welcome message only).
    let show_quick_questions = move || chat.get().messages.len() <= 1;

    view! {
        <div class="chat-page">
            <header class="chat-page__header">
                <h1>"Compliance Assistant"</h1>
                <label class="chat-page__standard">
                    "Standard"
                    <select
                        prop:value=move || standard.get()
                        on:change=move |ev| standard.set(event_target_value(&ev))
                    >
                        {COMPLIANCE_STANDARDS
                            .iter()
                            .map(|option| {
                                view! { <option value=option.value>{option.label}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <button class="btn" on:click=move |_| chat.update(ChatState::reset)>
                    "Clear conversation"
                </button>
            </header>

            <div class="chat-page__messages" node_ref=messages_ref>
                {move || {
                    chat.get()
                        .messages
                        .into_iter()
                        .map(|message| view! { <MessageBubble message=message/> })
                        .collect::<Vec<_>>()
                }}

                {move || {
                    chat.get()
                        .sending()
                        .then(|| view! { <div class="chat-page__pending">"AI is thinking..."</div> })
                }}
            </div>

            <Show when=show_quick_questions>
                <div class="chat-page__quick">
                    {move || {
                        chat_client::suggested_questions(Some("chat-page"), Some(&standard.get()))
                            .into_iter()
                            .map(|suggestion| {
                                let question = suggestion.question.clone();
                                view! {
                                    <button
                                        class="chat-page__quick-question"
                                        on:click=move |_| input.set(question.clone())
                                    >
                                        <span>{suggestion.icon}</span>
                                        {suggestion.question}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>

            <div class="chat-page__input-row">
                <input
                    class="chat-page__input"
                    type="text"
                    placeholder="Ask about compliance requirements, controls, policies..."
                    disabled=move || chat.get().sending()
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary" on:click=move |_| do_send() disabled=move || !can_send()>
                    "Send"
                </button>
            </div>
        </div>
    }
}
