//! QR Modal
//!
//! Overlay showing a QR code for the card's website. The image is loaded from
//! the rendering endpoint; if that fails the locally rendered SVG is swapped in.

use cardgen_core::QrRequest;
use cardgen_ui::CloseButton;
use dioxus::prelude::*;

#[component]
pub fn QrModal(request: QrRequest, on_close: EventHandler<()>) -> Element {
    let mut use_fallback = use_signal(|| false);

    let src = if use_fallback() {
        match request.fallback_data_uri() {
            Ok(uri) => uri,
            Err(e) => {
                tracing::warn!("Local QR rendering failed: {}", e);
                String::new()
            }
        }
    } else {
        request.url.clone()
    };

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),

            div {
                class: "modal qr-modal",
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-header",
                    h3 { "Scan to visit" }
                    CloseButton { onclick: move |_| on_close.call(()) }
                }

                div { class: "qr-code",
                    if src.is_empty() {
                        p { class: "qr-error", "QR code unavailable" }
                    } else {
                        img {
                            src: "{src}",
                            alt: "QR code",
                            width: "200",
                            height: "200",
                            onerror: move |_| {
                                if !use_fallback() {
                                    tracing::debug!("Remote QR image failed, rendering locally");
                                    use_fallback.set(true);
                                }
                            },
                        }
                    }
                }

                p { class: "qr-data", "{request.data}" }
            }
        }
    }
}
