//! Dashboard page: the owner's gyms, the gym form, and the turnstile panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated route. The first gym page is requested once
//! both the session and the client config are available. Creates and edits
//! restart the list from page 1; deletes remove the row once the backend
//! answers 204.

use gyms::Gym;
use gyms::SortOrder;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::ConfigSignal;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::gym_card::GymCard;
use crate::components::gym_form_dialog::GymFormDialog;
use crate::components::turnstile_panel::{TurnstilePanel, fetch_turnstiles};
use crate::state::gym_form::GymFormState;
use crate::state::gym_list::{FetchRequest, GymListState};
use crate::state::session::{SessionState, SessionStatus};
use crate::state::turnstiles::TurnstileState;
use crate::util::auth::install_unauth_redirect;

#[cfg(feature = "hydrate")]
fn expire_on(outcome: Option<crate::state::gym_list::ListOutcome>, session: RwSignal<SessionState>) {
    if outcome == Some(crate::state::gym_list::ListOutcome::SessionExpired) {
        crate::util::auth::expire_session(session);
    }
}

fn run_fetch(
    list: RwSignal<GymListState>,
    session: RwSignal<SessionState>,
    config: ConfigSignal,
    request: Option<FetchRequest>,
) {
    let Some(request) = request else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        let Some(api) = crate::net::api::session_backend(config, session) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = api.list_gyms(request.page, request.sort).await;
            if let Err(e) = &result {
                log::warn!("gym list fetch failed: {e}");
            }
            expire_on(list.try_update(|l| l.finish_fetch(request, result)), session);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (list, session, config, request);
    }
}

/// Dashboard page. Redirects to `/` when there is no session.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<ConfigSignal>();
    install_unauth_redirect(session, use_navigate());

    let list = RwSignal::new(GymListState::default());
    let turnstiles = RwSignal::new(TurnstileState::default());
    let form = RwSignal::new(GymFormState::create());
    let form_open = RwSignal::new(false);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get_untracked() {
            return;
        }
        if session.get().status() != SessionStatus::Authenticated || config.get().is_none() {
            return;
        }
        requested.set(true);
        let request = list.try_update(GymListState::restart);
        run_fetch(list, session, config, request);
    });

    // Hold the last settled list so a reload does not reset the turnstile selection.
    let gyms = Memo::new(move |prev: Option<&Vec<Gym>>| {
        list.with(|l| match l.settled_items() {
            Some(items) => items.to_vec(),
            None => prev.cloned().unwrap_or_default(),
        })
    });
    let new_layout = move || config.get().is_some_and(|c| c.features.new_dashboard_layout);

    let on_create = move |_| {
        form.set(GymFormState::create());
        form_open.set(true);
    };
    let on_edit = Callback::new(move |gym: Gym| {
        form.set(GymFormState::edit(&gym));
        form_open.set(true);
    });
    let on_form_close = Callback::new(move |()| form_open.set(false));
    let on_saved = Callback::new(move |_: Gym| {
        form_open.set(false);
        let request = list.try_update(GymListState::restart);
        run_fetch(list, session, config, request);
    });

    let on_select = Callback::new(move |id: String| {
        let fetch = turnstiles.try_update(|t| t.select_gym(Some(id))).flatten();
        fetch_turnstiles(turnstiles, session, config, fetch);
    });

    let on_delete_request = Callback::new(move |id: String| list.update(|l| l.request_delete(&id)));
    let on_delete_cancel = Callback::new(move |()| list.update(GymListState::cancel_delete));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(id) = list.try_update(GymListState::confirm_delete).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let Some(api) = crate::net::api::session_backend(config, session) else {
                return;
            };
            leptos::task::spawn_local(async move {
                let result = api.delete_gym(&id).await;
                expire_on(list.try_update(|l| l.finish_delete(&id, result)), session);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_load_more = Callback::new(move |()| {
        let request = list.try_update(GymListState::load_more).flatten();
        run_fetch(list, session, config, request);
    });
    let on_sort = Callback::new(move |()| {
        let next = list.get_untracked().sort.toggled();
        let request = list.try_update(|l| l.set_sort(next)).flatten();
        run_fetch(list, session, config, request);
    });

    let on_logout = move |_| {
        session.update(SessionState::sign_out);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(crate::net::api::logout());
    };

    view! {
        <Show
            when=move || session.get().status() == SessionStatus::Authenticated
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>
                            {move || {
                                if session.get().loading { "Loading..." } else { "Redirecting..." }
                            }}
                        </p>
                    </div>
                }
                    .into_any()
            }
        >
            <div class="dashboard-page" class:dashboard-page--grid=new_layout>
                <header class="dashboard-page__header toolbar">
                    <span class="toolbar__title">"Dashboard"</span>
                    <span class="toolbar__divider" aria-hidden="true"></span>
                    <span class="toolbar__self">
                        "Welcome, " {move || session.get().email().unwrap_or_default().to_owned()} "!"
                    </span>
                    <span class="toolbar__spacer"></span>
                    <button class="btn btn--primary" on:click=on_create>
                        "Create New Gym"
                    </button>
                    <button class="btn btn--danger" on:click=on_logout>
                        "Logout"
                    </button>
                </header>

                <GymSection
                    list=list
                    turnstiles=turnstiles
                    on_edit=on_edit
                    on_delete=on_delete_request
                    on_select=on_select
                    on_sort=on_sort
                    on_load_more=on_load_more
                />

                <TurnstilePanel state=turnstiles gyms=gyms/>

                <Show when=move || form_open.get()>
                    <GymFormDialog form=form on_saved=on_saved on_close=on_form_close/>
                </Show>
                <Show when=move || list.get().pending_delete.is_some()>
                    <ConfirmDialog
                        title="Delete Gym"
                        message="Are you sure you want to delete this gym? This action cannot be undone."
                        on_confirm=on_delete_confirm
                        on_cancel=on_delete_cancel
                    />
                </Show>
            </div>
        </Show>
    }
}

/// Search, sort, and the paginated gym cards.
#[component]
fn GymSection(
    list: RwSignal<GymListState>,
    turnstiles: RwSignal<TurnstileState>,
    on_edit: Callback<Gym>,
    on_delete: Callback<String>,
    on_select: Callback<String>,
    on_sort: Callback<()>,
    on_load_more: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="dashboard-page__gyms">
            <div class="dashboard-page__gyms-header">
                <h2>"Your Gyms"</h2>
                <input
                    class="dialog__input dashboard-page__search"
                    type="search"
                    placeholder="Search gyms"
                    prop:value=move || list.get().search
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        list.update(|l| l.set_search(&v));
                    }
                />
                <button class="btn btn--small" on:click=move |_| on_sort.run(()) title="Toggle sort order">
                    {move || match list.get().sort {
                        SortOrder::Asc => "Oldest first",
                        SortOrder::Desc => "Newest first",
                    }}
                </button>
            </div>
            <Show when=move || list.get().error.is_some()>
                <p class="form-error">{move || list.get().error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !list.get().loading
                fallback=move || view! { <p>"Loading gyms..."</p> }.into_any()
            >
                <Show
                    when=move || !list.get().items.is_empty()
                    fallback=move || {
                        view! {
                            <p class="dashboard-page__empty">
                                "You don't have any gyms yet. Click Create New Gym to add one!"
                            </p>
                        }
                            .into_any()
                    }
                >
                    <ul class="dashboard-page__cards">
                        {move || {
                            let selected = turnstiles.get().gym_id;
                            list.get()
                                .visible()
                                .into_iter()
                                .map(|gym| {
                                    let is_selected = selected.as_deref() == Some(gym.id.as_str());
                                    view! {
                                        <GymCard
                                            gym=gym
                                            selected=is_selected
                                            on_edit=on_edit
                                            on_delete=on_delete
                                            on_select=on_select
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                    <Show when=move || list.get().has_more>
                        <button class="btn dashboard-page__more" on:click=move |_| on_load_more.run(())>
                            "Load More"
                        </button>
                    </Show>
                </Show>
            </Show>
        </section>
    }
    .into_any()
}
