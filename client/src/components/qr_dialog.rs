//! QR code view for one turnstile with a PNG download link.

use gyms::Turnstile;
use gyms::qr::{download_filename, png_data_url, render_svg};
use leptos::prelude::*;

use crate::components::modal::Modal;

#[component]
pub fn QrDialog(turnstile: Turnstile, on_close: Callback<()>) -> impl IntoView {
    let svg = render_svg(&turnstile.qr_code);
    let error = svg.as_ref().err().map(ToString::to_string);
    let svg = svg.unwrap_or_default();
    let filename = download_filename(&turnstile.id);
    let download_error = RwSignal::new(None::<String>);
    let payload = turnstile.qr_code.clone();

    let on_download = move |ev: leptos::ev::MouseEvent| {
        // Rasterize on demand; a failure stays in the dialog.
        match png_data_url(&payload) {
            Ok(url) => {
                #[cfg(feature = "hydrate")]
                {
                    use wasm_bindgen::JsCast as _;
                    if let Some(anchor) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::HtmlAnchorElement>().ok()) {
                        anchor.set_href(&url);
                    }
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (ev, url);
                }
            }
            Err(e) => {
                ev.prevent_default();
                download_error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <Modal title="Turnstile QR Code" on_close=on_close>
            <div class="qr-dialog">
                {match error {
                    Some(msg) => view! { <p class="form-error">{msg}</p> }.into_any(),
                    None => view! { <div class="qr-dialog__code" inner_html=svg></div> }.into_any(),
                }}
                <p class="qr-dialog__id">"Turnstile " {turnstile.id}</p>
                <Show when=move || download_error.get().is_some()>
                    <p class="form-error">{move || download_error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <a class="btn btn--primary" href="#" download=filename on:click=on_download>
                        "Download PNG"
                    </a>
                </div>
            </div>
        </Modal>
    }
}
