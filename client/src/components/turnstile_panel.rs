//! Turnstile Manager panel for the selected gym.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard owns the `TurnstileState` signal so that clicking a gym
//! card selects it here. This panel keeps the selection valid against the
//! current gym list and runs the list/add/delete calls.

use gyms::{Gym, SortOrder};
use leptos::prelude::*;

use crate::app::ConfigSignal;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::qr_dialog::QrDialog;
use crate::state::session::SessionState;
use crate::state::turnstiles::{TurnstileFetch, TurnstileState};

#[cfg(feature = "hydrate")]
fn expire_on(outcome: Option<crate::state::turnstiles::TurnstileOutcome>, session: RwSignal<SessionState>) {
    if outcome == Some(crate::state::turnstiles::TurnstileOutcome::SessionExpired) {
        crate::util::auth::expire_session(session);
    }
}

/// Issue `fetch` (if any) and apply the result to `state`.
pub fn fetch_turnstiles(
    state: RwSignal<TurnstileState>,
    session: RwSignal<SessionState>,
    config: ConfigSignal,
    fetch: Option<TurnstileFetch>,
) {
    let Some(fetch) = fetch else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        let Some(api) = crate::net::api::session_backend(config, session) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = api.list_turnstiles(&fetch.gym_id, fetch.sort).await;
            expire_on(state.try_update(|s| s.finish_fetch(&fetch, result)), session);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (state, session, config, fetch);
    }
}

#[component]
pub fn TurnstilePanel(state: RwSignal<TurnstileState>, gyms: Memo<Vec<Gym>>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<ConfigSignal>();

    Effect::new(move || {
        let list = gyms.get();
        let fetch = state.try_update(|s| s.sync_with(&list)).flatten();
        fetch_turnstiles(state, session, config, fetch);
    });

    let on_gym_change = move |ev: leptos::ev::Event| {
        let id = event_target_value(&ev);
        let fetch = state.try_update(|s| s.select_gym(Some(id))).flatten();
        fetch_turnstiles(state, session, config, fetch);
    };

    let on_sort = move |_| {
        let next = state.get_untracked().sort.toggled();
        let fetch = state.try_update(|s| s.set_sort(next)).flatten();
        fetch_turnstiles(state, session, config, fetch);
    };

    let on_add = move |_| {
        let Some(gym_id) = state.try_update(TurnstileState::begin_add).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let Some(api) = crate::net::api::session_backend(config, session) else {
                return;
            };
            leptos::task::spawn_local(async move {
                let result = api.create_turnstile(&gym_id).await;
                if let Some((outcome, refetch)) = state.try_update(|s| s.finish_add(result)) {
                    expire_on(Some(outcome), session);
                    fetch_turnstiles(state, session, config, refetch);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = gym_id;
        }
    };

    let on_delete_confirm = Callback::new(move |()| {
        let Some(id) = state.try_update(TurnstileState::confirm_delete).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let Some(api) = crate::net::api::session_backend(config, session) else {
                return;
            };
            leptos::task::spawn_local(async move {
                let result = api.delete_turnstile(&id).await;
                expire_on(state.try_update(|s| s.finish_delete(&id, result)), session);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });
    let on_delete_cancel = Callback::new(move |()| state.update(TurnstileState::cancel_delete));
    let on_qr_close = Callback::new(move |()| state.update(TurnstileState::close_qr));

    view! {
        <section class="turnstile-panel">
            <header class="turnstile-panel__header">
                <h2>"Turnstiles"</h2>
                <select
                    class="dialog__input turnstile-panel__gym"
                    prop:value=move || state.get().gym_id.unwrap_or_default()
                    on:change=on_gym_change
                >
                    <option value="" disabled=true>"Select a gym"</option>
                    {move || {
                        gyms.get()
                            .into_iter()
                            .map(|g| view! { <option value=g.id.clone()>{g.title}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
                <button class="btn btn--small" on:click=on_sort title="Toggle sort order">
                    {move || match state.get().sort {
                        SortOrder::Asc => "Oldest first",
                        SortOrder::Desc => "Newest first",
                    }}
                </button>
                <button class="btn btn--primary btn--small" on:click=on_add disabled=move || state.get().adding>
                    {move || if state.get().adding { "Adding..." } else { "Add Turnstile" }}
                </button>
            </header>

            <Show when=move || state.get().error.is_some()>
                <p class="form-error">{move || state.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !state.get().loading
                fallback=move || view! { <p>"Loading turnstiles..."</p> }
            >
                <Show
                    when=move || !state.get().items.is_empty()
                    fallback=move || view! { <p class="turnstile-panel__empty">"No turnstiles yet."</p> }
                >
                    <ul class="turnstile-panel__list">
                        {move || {
                            let deleting = state.get().deleting;
                            state
                                .get()
                                .items
                                .into_iter()
                                .map(|t| {
                                    let busy = deleting.as_deref() == Some(t.id.as_str());
                                    let view_id = t.id.clone();
                                    let delete_id = t.id.clone();
                                    view! {
                                        <li class="turnstile-row">
                                            <span class="turnstile-row__id">{t.id}</span>
                                            <code class="turnstile-row__qr">{t.qr_code}</code>
                                            <button
                                                class="btn btn--small"
                                                on:click=move |_| state.update(|s| s.open_qr(&view_id))
                                            >
                                                "View QR"
                                            </button>
                                            <button
                                                class="btn btn--small btn--danger"
                                                disabled=busy
                                                on:click=move |_| state.update(|s| s.request_delete(&delete_id))
                                            >
                                                {if busy { "Deleting..." } else { "Delete" }}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </Show>

            <Show when=move || state.get().pending_delete.is_some()>
                <ConfirmDialog
                    title="Delete Turnstile"
                    message="Are you sure you want to delete this turnstile?"
                    on_confirm=on_delete_confirm
                    on_cancel=on_delete_cancel
                />
            </Show>
            {move || {
                state
                    .get()
                    .qr_view
                    .map(|t| view! { <QrDialog turnstile=t on_close=on_qr_close/> })
            }}
        </section>
    }
}
