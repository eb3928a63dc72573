//! Create/edit gym dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opened by the dashboard with a fresh `GymFormState`. On a successful save
//! it hands the saved gym to `on_saved`, and the dashboard closes the dialog
//! and restarts the list from page 1.

use gyms::Gym;
use gyms::geocode::Coordinates;
use gyms::validate::format_phone;
use leptos::prelude::*;

use crate::app::ConfigSignal;
use crate::components::map_selector::MapSelector;
use crate::components::modal::Modal;
#[cfg(feature = "hydrate")]
use crate::state::gym_form::{FormMode, SubmitOutcome};
use crate::state::gym_form::{GymFormState, WizardStep};
use crate::state::session::SessionState;

#[component]
pub fn GymFormDialog(form: RwSignal<GymFormState>, on_saved: Callback<Gym>, on_close: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<ConfigSignal>();
    let title = if form.get_untracked().is_wizard() { "Create New Gym" } else { "Edit Gym" };

    let submit = move || {
        let Some(request) = form.try_update(GymFormState::begin_submit).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let Some(api) = crate::net::api::session_backend(config, session) else {
                form.update(|f| {
                    f.finish_submit(Err(gyms::TransportError("configuration not loaded".to_owned()).into()));
                });
                return;
            };
            leptos::task::spawn_local(async move {
                let result = match &request.mode {
                    FormMode::Create => api.create_gym(&request.draft).await,
                    FormMode::Edit { gym_id } => api.update_gym(gym_id, &request.draft).await,
                };
                match form.try_update(|f| f.finish_submit(result)) {
                    Some(SubmitOutcome::Saved(gym)) => on_saved.run(gym),
                    Some(SubmitOutcome::SessionExpired) => crate::util::auth::expire_session(session),
                    _ => {}
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, config, session, on_saved);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.get_untracked().is_last_step() {
            submit();
        } else {
            form.update(|f| {
                f.next_step();
            });
        }
    };

    let shows = move |step: WizardStep| {
        let f = form.get();
        !f.is_wizard() || f.step == step
    };
    let on_location = Callback::new(move |coords: Coordinates| form.update(|f| f.set_location(coords)));

    view! {
        <Modal title=title on_close=on_close wide=true>
            <Show when=move || form.get().is_wizard()>
                <ol class="wizard-steps">
                    {WizardStep::ALL
                        .into_iter()
                        .map(|step| {
                            view! {
                                <li
                                    class="wizard-steps__item"
                                    class:wizard-steps__item--active=move || form.get().step == step
                                >
                                    {format!("{}. {}", step.number(), step.title())}
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ol>
            </Show>
            <form class="gym-form" on:submit=on_submit>
                <Show when=move || form.get().error.is_some()>
                    <p class="form-error">{move || form.get().error.unwrap_or_default()}</p>
                </Show>

                <Show when=move || shows(WizardStep::Details)>
                    <label class="dialog__label">
                        "Title"
                        <input
                            class="dialog__input"
                            type="text"
                            maxlength="200"
                            prop:value=move || form.get().fields.title
                            on:input=move |ev| {
                                let v = event_target_value(&ev);
                                form.update(|f| f.fields.title = v);
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "Description"
                        <textarea
                            class="dialog__input dialog__input--multiline"
                            maxlength="2000"
                            prop:value=move || form.get().fields.description
                            on:input=move |ev| {
                                let v = event_target_value(&ev);
                                form.update(|f| f.fields.description = v);
                            }
                        ></textarea>
                    </label>
                </Show>

                <Show when=move || shows(WizardStep::Contact)>
                    <label class="dialog__label">
                        "Phone"
                        <input
                            class="dialog__input"
                            type="tel"
                            placeholder="(11) 98765-4321"
                            prop:value=move || format_phone(&form.get().fields.phone)
                            on:input=move |ev| {
                                let v = event_target_value(&ev);
                                form.update(|f| f.fields.phone = v);
                            }
                        />
                    </label>
                </Show>

                <Show when=move || shows(WizardStep::Location)>
                    <div class="gym-form__coords">
                        <label class="dialog__label">
                            "Latitude"
                            <input
                                class="dialog__input"
                                type="text"
                                inputmode="decimal"
                                prop:value=move || form.get().fields.latitude
                                on:input=move |ev| {
                                    let v = event_target_value(&ev);
                                    form.update(|f| f.fields.latitude = v);
                                }
                            />
                        </label>
                        <label class="dialog__label">
                            "Longitude"
                            <input
                                class="dialog__input"
                                type="text"
                                inputmode="decimal"
                                prop:value=move || form.get().fields.longitude
                                on:input=move |ev| {
                                    let v = event_target_value(&ev);
                                    form.update(|f| f.fields.longitude = v);
                                }
                            />
                        </label>
                    </div>
                    <MapSelector initial=form.get_untracked().coordinates() on_change=on_location/>
                </Show>

                <div class="dialog__actions">
                    <Show
                        when=move || form.get().is_wizard() && form.get().step != WizardStep::Details
                        fallback=move || {
                            view! {
                                <button type="button" class="btn" on:click=move |_| on_close.run(())>
                                    "Cancel"
                                </button>
                            }
                        }
                    >
                        <button type="button" class="btn" on:click=move |_| form.update(GymFormState::prev_step)>
                            "Back"
                        </button>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || form.get().submitting>
                        {move || {
                            let f = form.get();
                            if f.submitting {
                                "Saving..."
                            } else if !f.is_last_step() {
                                "Next"
                            } else if f.is_wizard() {
                                "Create Gym"
                            } else {
                                "Save Changes"
                            }
                        }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
