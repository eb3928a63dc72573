//! Location picker: address search plus a clickable OpenStreetMap grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! Embedded in the gym form's location step. Every committed position is
//! reported through `on_change`; the form owns the latitude/longitude text.
//! Searches are debounced and cancelled through `MapState`'s token, and the
//! pending one is cancelled when the selector unmounts.

use gyms::geocode::Coordinates;
use leptos::prelude::*;

use crate::app::ConfigSignal;
use crate::state::map::MapState;
use crate::util::tiles::{DEFAULT_ZOOM, TileGrid};

#[component]
pub fn MapSelector(initial: Option<Coordinates>, on_change: Callback<Coordinates>) -> impl IntoView {
    let config = expect_context::<ConfigSignal>();
    let map = RwSignal::new(MapState::new(initial));
    on_cleanup(move || {
        let _ = map.try_update(MapState::dispose);
    });

    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        let token = map.try_update(|m| m.set_query(&text)).flatten();

        #[cfg(feature = "hydrate")]
        if let (Some(token), Some(cfg)) = (token, config.get_untracked()) {
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(gyms::geocode::DEBOUNCE_MS).await;
                if token.is_cancelled() {
                    return;
                }
                let result = crate::net::api::geocoder(&cfg).search(&text, &token).await;
                if let Err(gyms::geocode::GeocodeError::Failed(e)) = &result {
                    log::warn!("geocoder search failed: {e}");
                }
                let _ = map.try_update(|m| m.apply_results(&token, result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, config);
        }
    };

    let on_pick = move |index: usize| {
        if let Some(coords) = map.try_update(|m| m.select(index)).flatten() {
            on_change.run(coords);
        }
    };

    let on_map_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;
            let Some(el) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            let Some(local) = crate::util::tiles::scale_to_grid(
                f64::from(ev.client_x()) - rect.left(),
                f64::from(ev.client_y()) - rect.top(),
                rect.width(),
                rect.height(),
            ) else {
                return;
            };
            let grid = TileGrid::centered_on(map.get_untracked().view_center, DEFAULT_ZOOM);
            let coords = grid.coordinates_at(local);
            map.update(|m| {
                m.click(coords);
            });
            on_change.run(coords);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let grid = Memo::new(move |_| TileGrid::centered_on(map.get().view_center, DEFAULT_ZOOM));
    let marker_style = move || {
        let offset = grid.get().offset_of(map.get().position);
        let size = TileGrid::size_px();
        format!("left: {:.3}%; top: {:.3}%;", offset.x / size * 100.0, offset.y / size * 100.0)
    };

    view! {
        <div class="map-selector">
            <div class="map-selector__search">
                <input
                    class="dialog__input"
                    type="search"
                    placeholder="Search for an address"
                    prop:value=move || map.get().query
                    on:input=on_input
                />
                <Show when=move || map.get().searching>
                    <span class="map-selector__spinner">"Searching..."</span>
                </Show>
                <Show when=move || !map.get().suggestions.is_empty()>
                    <ul class="map-selector__suggestions">
                        {move || {
                            map.get()
                                .suggestions
                                .into_iter()
                                .enumerate()
                                .map(|(index, s)| {
                                    view! {
                                        <li>
                                            <button
                                                type="button"
                                                class="map-selector__suggestion"
                                                on:click=move |_| on_pick(index)
                                            >
                                                {s.display_name}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </div>
            <div class="map-selector__viewport" on:click=on_map_click>
                {move || {
                    grid.get()
                        .tiles()
                        .into_iter()
                        .map(|tile| {
                            let (left, top) = tile.position_percent();
                            let style = format!("left: {left:.4}%; top: {top:.4}%;");
                            view! { <img class="map-selector__tile" src=tile.url() style=style alt="" draggable="false"/> }
                        })
                        .collect::<Vec<_>>()
                }}
                <span class="map-selector__marker" style=marker_style aria-hidden="true"></span>
            </div>
            <p class="map-selector__coords">
                {move || {
                    let p = map.get().position;
                    format!("{:.6}, {:.6}", p.lat, p.lng)
                }}
            </p>
            <p class="map-selector__attribution">"© OpenStreetMap contributors"</p>
        </div>
    }
}
