//! Landing page with login and register modals.

use gyms::error::SESSION_EXPIRED_MESSAGE;
use leptos::prelude::*;

use crate::components::login_form::LoginForm;
use crate::components::modal::Modal;
use crate::components::register_form::RegisterForm;
use crate::state::session::{SessionState, SessionStatus};

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let show_login = RwSignal::new(false);
    let show_register = RwSignal::new(false);

    let close_login = Callback::new(move |()| show_login.set(false));
    let close_register = Callback::new(move |()| show_register.set(false));

    let on_logout = move |_| {
        session.update(SessionState::sign_out);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(crate::net::api::logout());
    };

    let status = move || session.get().status();
    let email = move || session.get().email().unwrap_or_default().to_owned();

    view! {
        <div class="home-page">
            <div class="home-card">
                <h1>"GymDesk"</h1>
                <p class="home-card__subtitle">"Manage your gyms and their access turnstiles."</p>
                <Show when=move || session.get().expired>
                    <p class="home-card__notice">{SESSION_EXPIRED_MESSAGE}</p>
                </Show>
                <Show
                    when=move || status() == SessionStatus::Authenticated
                    fallback=move || {
                        view! {
                            <div class="home-card__actions">
                                <button
                                    class="btn btn--primary"
                                    disabled=move || status() == SessionStatus::Loading
                                    on:click=move |_| show_login.set(true)
                                >
                                    "Login"
                                </button>
                                <button class="btn" on:click=move |_| show_register.set(true)>
                                    "Register"
                                </button>
                            </div>
                        }
                    }
                >
                    <p class="home-card__welcome">"Signed in as " {email}</p>
                    <div class="home-card__actions">
                        <a class="btn btn--primary" href="/dashboard">
                            "Go to Dashboard"
                        </a>
                        <button class="btn btn--danger" on:click=on_logout>
                            "Logout"
                        </button>
                    </div>
                </Show>
            </div>

            <Show when=move || show_login.get()>
                <Modal title="Login" on_close=close_login>
                    <LoginForm on_success=close_login/>
                </Modal>
            </Show>
            <Show when=move || show_register.get()>
                <Modal title="Register" on_close=close_register>
                    <RegisterForm on_close=close_register/>
                </Modal>
            </Show>
        </div>
    }
}
