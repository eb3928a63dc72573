//! Authentication error page. Returns home after a short countdown.

#[cfg(test)]
#[path = "auth_error_test.rs"]
mod auth_error_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

pub const REDIRECT_AFTER_SECS: u32 = 5;

#[must_use]
pub fn countdown_label(remaining: u32) -> String {
    match remaining {
        0 => "Redirecting...".to_owned(),
        1 => "Redirecting to the home page in 1 second...".to_owned(),
        n => format!("Redirecting to the home page in {n} seconds..."),
    }
}

#[component]
pub fn AuthErrorPage() -> impl IntoView {
    let remaining = RwSignal::new(REDIRECT_AFTER_SECS);

    #[cfg(feature = "hydrate")]
    {
        let navigate = use_navigate();
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            while remaining.get_untracked() > 0 {
                gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                remaining.update(|n| *n = n.saturating_sub(1));
            }
            navigate("/", NavigateOptions::default());
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <div class="home-page">
            <div class="home-card">
                <h1>"Authentication Error"</h1>
                <p>"Something went wrong while signing you in. Please try again."</p>
                <p class="home-card__subtitle">{move || countdown_label(remaining.get())}</p>
                <a class="btn btn--primary" href="/">
                    "Back to Home"
                </a>
            </div>
        </div>
    }
}
