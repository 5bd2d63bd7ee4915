use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;

/// WhatsApp deep link plus a scroll-to-top button that appears once the
/// page has been scrolled past the hero.
#[function_component(FloatingActions)]
pub fn floating_actions() -> Html {
    let show_scroll_top = use_state(|| false);

    {
        let show_scroll_top = show_scroll_top.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = window_clone.scroll_y().unwrap_or(0.0);
                    show_scroll_top.set(offset > 300.0);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let scroll_to_top = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    let whatsapp_href = format!(
        "https://wa.me/{}?text={}",
        config::WHATSAPP_NUMBER,
        urlencoding::encode(config::WHATSAPP_GREETING)
    );

    html! {
        <div class="floating-actions">
            <a
                class="floating-button whatsapp"
                href={whatsapp_href}
                target="_blank"
                rel="noopener noreferrer"
                aria-label="Chat WhatsApp"
            >
                {"\u{2706}"}
            </a>
            {
                if *show_scroll_top {
                    html! {
                        <button class="floating-button scroll-top" onclick={scroll_to_top} aria-label="Kembali ke atas">
                            {"\u{2191}"}
                        </button>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .floating-actions {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    z-index: 90;
                }
                .floating-button {
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 50%;
                    border: none;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.4rem;
                    cursor: pointer;
                    text-decoration: none;
                    box-shadow: 0 4px 14px rgba(0, 0, 0, 0.25);
                    transition: transform 0.2s ease;
                }
                .floating-button:hover {
                    transform: scale(1.08);
                }
                .floating-button.whatsapp {
                    background: #25d366;
                    color: #ffffff;
                }
                .floating-button.scroll-top {
                    background: #f59e0b;
                    color: #1a1a1a;
                }
                "#}
            </style>
        </div>
    }
}
