//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::{PAGE_TITLE, TAGLINE};
use crate::pages::portfolio::PortfolioPage;
use crate::state::section::ActiveSection;
use crate::state::theme::ThemePreference;
use crate::state::ui::UiState;
use crate::util::storage::BrowserStorage;
use crate::util::theme::{self, ThemeStore};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The root element starts in the default theme; the stored preference is
/// applied on hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let theme = ThemePreference::default().as_str();
    view! {
        <!DOCTYPE html>
        <html lang="en" class=theme data-theme=theme>
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
/// Provides shared state contexts, loads the theme preference once the page
/// is interactive, and keeps the root element's theme flag in sync.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let active = RwSignal::new(ActiveSection::default());
    let theme_store = StoredValue::new(ThemeStore::new(BrowserStorage));

    provide_context(ui);
    provide_context(active);
    provide_context(theme_store);

    // Effects only run in the browser, so SSR keeps the default theme.
    Effect::new(move || {
        let mut loaded = ThemePreference::default();
        theme_store.update_value(|s| loaded = s.load());
        ui.update(|u| u.theme = loaded);
    });
    let current_theme = Memo::new(move |_| ui.with(|u| u.theme));
    Effect::new(move || theme::apply(current_theme.get()));

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text=PAGE_TITLE/>
        <Meta name="description" content=TAGLINE/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=PortfolioPage/>
            </Routes>
        </Router>
    }
}
