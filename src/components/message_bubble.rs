//! Chat transcript bubble shared by the chat page and the floating widget.

#[cfg(test)]
#[path = "message_bubble_test.rs"]
mod message_bubble_test;

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::state::chat::{ChatMessage, Role};

/// One transcript entry: user text plain, assistant text as markdown.
#[component]
pub fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let is_assistant = message.role == Role::Assistant;
    let time = crate::util::time::short_time(&message.timestamp);
    let content = message.content;

    view! {
        <div
            class="chat-message"
            class:chat-message--assistant=is_assistant
            class:chat-message--user=!is_assistant
        >
            <div class="chat-message__bubble">
                {if is_assistant {
                    let rendered = render_markdown_html(&content);
                    view! { <div class="chat-message__markdown" inner_html=rendered></div> }.into_any()
                } else {
                    view! { <span class="chat-message__text">{content}</span> }.into_any()
                }}
            </div>
            <span class="chat-message__time">{time}</span>
        </div>
    }
}

/// Render assistant markdown to HTML with raw HTML events dropped.
fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    // Safety: drop inline/block raw HTML from model output before rendering.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
