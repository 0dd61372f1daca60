//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    dashboard::DashboardPage, diagnosis::DiagnosisPage, suggested_tests::SuggestedTestsPage, summary::SummaryPage,
};
use crate::state::wizard::WizardHandoff;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the wizard handoff so step output survives route changes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let handoff = RwSignal::new(WizardHandoff::default());
    provide_context(handoff);

    let tests_view = move || {
        let on_complete = Callback::new(move |receipt: serde_json::Value| {
            handoff.update(|h| h.receipt = Some(receipt));
        });
        view! { <SuggestedTestsPage on_complete=on_complete/> }
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/sdx.css"/>
        <Title text="Clinical Evaluation"/>

        <Router>
            <main class="app-shell">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("diagnosis") view=DiagnosisPage/>
                    <Route path=StaticSegment("tests") view=tests_view/>
                    <Route path=StaticSegment("summary") view=SummaryPage/>
                </Routes>
            </main>
        </Router>
    }
}
