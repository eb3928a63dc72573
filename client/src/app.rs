//! Root application component with routing and context providers.

use gyms::ClientConfig;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{auth_error::AuthErrorPage, dashboard::DashboardPage, home::HomePage};
use crate::state::session::SessionState;

/// Browser configuration, `None` until `/api/config` answers.
pub type ConfigSignal = RwSignal<Option<ClientConfig>>;

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
/// Acts as the Session Provider: resolves the session cookie and the client
/// config once, then exposes both as context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let config: ConfigSignal = RwSignal::new(None);
    provide_context(session);
    provide_context(config);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        config.set(crate::net::api::fetch_config().await);
        let resolved = crate::net::api::fetch_session().await;
        session.update(|s| s.resolve(resolved));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/gymdesk.css"/>
        <Title text="GymDesk"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("error")) view=AuthErrorPage/>
            </Routes>
        </Router>
    }
}
