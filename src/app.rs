//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::chat_widget::ChatWidget;
use crate::components::navbar::Navbar;
use crate::components::toast_tray::ToastTray;
use crate::pages::{
    analyzer::AnalyzerPage, chat::ChatPage, checklists::ChecklistsPage, dashboard::DashboardPage,
    document_viewer::DocumentViewerPage, documents::DocumentsPage, findings::FindingsPage,
    grammar::GrammarPage, risk::RiskPage,
};
use crate::state::session::Session;
use crate::state::ui::UiState;

/// Root application component.
///
/// Provides the session and UI-chrome contexts and sets up client-side
/// routing. The session is loaded from storage once here and persisted on
/// every change; chat transcripts are deliberately not provided as context
/// (each surface owns its own).
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session: RwSignal<Session> = RwSignal::new(crate::util::session::load());
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(ui);

    // Persist the session at the change boundary.
    Effect::new(move || {
        let current = session.get();
        crate::util::session::save(&current);
    });

    view! {
        <Title text="AuditIQ"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("documents") view=DocumentsPage/>
                    <Route path=(StaticSegment("document"), ParamSegment("id")) view=DocumentViewerPage/>
                    <Route path=StaticSegment("analyze") view=AnalyzerPage/>
                    <Route path=StaticSegment("findings") view=FindingsPage/>
                    <Route path=StaticSegment("checklists") view=ChecklistsPage/>
                    <Route path=StaticSegment("grammar") view=GrammarPage/>
                    <Route path=(StaticSegment("risk"), ParamSegment("id")) view=RiskPage/>
                    <Route path=StaticSegment("chat") view=ChatPage/>
                </Routes>
            </main>
            <ToastTray/>
            <ChatWidget/>
        </Router>
    }
}
