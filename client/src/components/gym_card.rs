//! Card for one gym in the dashboard list.

use gyms::Gym;
use gyms::validate::format_phone;
use leptos::prelude::*;

#[component]
pub fn GymCard(
    gym: Gym,
    #[prop(optional)] selected: bool,
    on_edit: Callback<Gym>,
    on_delete: Callback<String>,
    on_select: Callback<String>,
) -> impl IntoView {
    let id = gym.id.clone();
    let phone = format_phone(&gym.phone);
    let coords = format!("{:.5}, {:.5}", gym.latitude, gym.longitude);
    let on_edit_click = {
        let gym = gym.clone();
        move |_| on_edit.run(gym.clone())
    };
    let on_delete_click = {
        let id = id.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            on_delete.run(id.clone());
        }
    };
    let on_select_click = move |_| on_select.run(id.clone());

    view! {
        <li class="gym-card" class:gym-card--selected=selected on:click=on_select_click>
            <h3 class="gym-card__title">{gym.title}</h3>
            <p class="gym-card__description">{gym.description}</p>
            <p class="gym-card__meta">"Phone: " {phone}</p>
            <p class="gym-card__meta gym-card__meta--mono">{coords}</p>
            <div class="gym-card__actions">
                <button class="btn btn--small" on:click=on_edit_click>
                    "Edit"
                </button>
                <button class="btn btn--small btn--danger" on:click=on_delete_click>
                    "Delete"
                </button>
            </div>
        </li>
    }
}
