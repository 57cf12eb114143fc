//! Top navigation bar with active-route highlighting.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// App-wide navigation bar.
#[component]
pub fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;
    let is_active = move |path: &'static str| {
        let current = pathname.get();
        if path == "/" { current == "/" } else { current.starts_with(path) }
    };

    let link = move |path: &'static str, label: &'static str| {
        view! {
            <a class="navbar__link" class:navbar__link--active=move || is_active(path) href=path>
                {label}
            </a>
        }
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                "Audit" <span class="navbar__brand-accent">"IQ"</span>
            </a>
            <div class="navbar__links">
                {link("/", "Dashboard")}
                {link("/documents", "Documents")}
                {link("/analyze", "Analyze")}
                {link("/findings", "Findings")}
                {link("/checklists", "Checklists")}
                {link("/grammar", "Grammar")}
                {link("/chat", "Assistant")}
            </div>
        </nav>
    }
}
