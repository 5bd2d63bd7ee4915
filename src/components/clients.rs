use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;
use crate::content::fetch;
use crate::content::model::ClientLogo;

/// Logo strip shown on the home page. Refreshes on a fixed interval so
/// newly published clients appear without a reload; at most one request
/// is in flight, and a superseded request's late result is ignored.
#[function_component(Clients)]
pub fn clients() -> Html {
    let clients = use_state(Vec::<ClientLogo>::new);
    let loading = use_state(|| true);

    {
        let clients = clients.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                let alive = Rc::new(Cell::new(true));
                let in_flight = Rc::new(Cell::new(false));
                let generation = Rc::new(Cell::new(0u32));

                let refresh = {
                    let alive = alive.clone();
                    move || {
                        if in_flight.get() {
                            // Previous refresh has not resolved yet
                            return;
                        }
                        in_flight.set(true);
                        let current = generation.get() + 1;
                        generation.set(current);

                        let clients = clients.clone();
                        let loading = loading.clone();
                        let alive = alive.clone();
                        let in_flight = in_flight.clone();
                        let generation = generation.clone();
                        spawn_local(async move {
                            let fetched = fetch::client_logos().await;
                            in_flight.set(false);
                            if alive.get() && generation.get() == current {
                                clients.set(fetched);
                                loading.set(false);
                            }
                        });
                    }
                };

                refresh();
                let interval =
                    gloo_timers::callback::Interval::new(config::CLIENTS_REFRESH_MS, refresh);

                move || {
                    alive.set(false);
                    drop(interval);
                }
            },
            (),
        );
    }

    html! {
        <section class="clients-section">
            <div class="clients-inner">
                <h2>{"Klien Kami"}</h2>
                <p class="clients-subtitle">
                    {"Berikut beberapa klien yang pernah bekerja sama dengan kami."}
                </p>
                {
                    if *loading {
                        html! {
                            <div class="clients-grid">
                                { for (0..6).map(|i| html! {
                                    <div key={i} class="client-placeholder"></div>
                                }) }
                            </div>
                        }
                    } else if clients.is_empty() {
                        html! { <p class="clients-empty">{"Belum ada klien."}</p> }
                    } else {
                        html! {
                            <div class="clients-grid">
                                { for clients.iter().enumerate().map(|(idx, client)| html! {
                                    <div key={idx} class="client-logo" title={client.label().to_string()}>
                                        <img src={client.logo.clone()} alt={client.label().to_string()} loading="lazy" />
                                    </div>
                                }) }
                            </div>
                        }
                    }
                }
            </div>
            <style>
                {r#"
                .clients-section {
                    padding: 4rem 2rem;
                    background: #f8fafc;
                }
                .clients-inner {
                    max-width: 1100px;
                    margin: 0 auto;
                    text-align: center;
                }
                .clients-inner h2 {
                    font-size: 2.25rem;
                    color: #0d1b3e;
                    margin-bottom: 0.75rem;
                }
                .clients-subtitle {
                    color: #64748b;
                    margin-bottom: 2.5rem;
                }
                .clients-grid {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1.5rem;
                }
                .client-logo, .client-placeholder {
                    width: 9rem;
                    height: 9rem;
                    background: #ffffff;
                    border-radius: 12px;
                    box-shadow: 0 2px 8px rgba(13, 27, 62, 0.08);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                }
                .client-logo img {
                    max-width: 100%;
                    max-height: 100%;
                    object-fit: contain;
                    filter: grayscale(1);
                    transition: filter 0.3s ease;
                }
                .client-logo:hover img {
                    filter: grayscale(0);
                }
                .client-placeholder {
                    animation: pulse 1.2s ease-in-out infinite;
                }
                .clients-empty {
                    color: #475569;
                    padding: 2rem 0;
                }
                @keyframes pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.45; }
                }
                "#}
            </style>
        </section>
    }
}
