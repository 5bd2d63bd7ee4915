use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::fetch;
use crate::content::list::{categories, present, ListState};
use crate::content::model::PortfolioEntry;
use crate::Route;

const ALL_CATEGORIES: &str = "Semua";

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let entries = use_state(Vec::<PortfolioEntry>::new);
    let loading = use_state(|| true);
    let list_state = use_state(ListState::default);
    let navigator = use_navigator().unwrap();

    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    {
        let entries = entries.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                let alive = Rc::new(Cell::new(true));
                let alive_task = alive.clone();
                spawn_local(async move {
                    let fetched = fetch::portfolio_entries().await;
                    if alive_task.get() {
                        entries.set(fetched);
                        loading.set(false);
                    }
                });
                move || alive.set(false)
            },
            (),
        );
    }

    if *loading {
        return html! {
            <div class="portfolio-page">
                <div class="page-loading"><div class="spinner"></div></div>
                <style>
                    {r#"
                    .page-loading {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .spinner {
                        width: 3rem;
                        height: 3rem;
                        border: 4px solid rgba(13, 27, 62, 0.15);
                        border-top-color: #0d1b3e;
                        border-radius: 50%;
                        animation: spin 0.8s linear infinite;
                    }
                    @keyframes spin {
                        to { transform: rotate(360deg); }
                    }
                    "#}
                </style>
            </div>
        };
    }

    let view = present(&entries, &list_state, config::PAGE_SIZE, false);

    let mut chips = vec![ALL_CATEGORIES.to_string()];
    chips.extend(categories(&*entries));

    let chip_buttons = chips
        .iter()
        .map(|chip| {
            let list_state_handle = list_state.clone();
            let current = (*list_state).clone();
            let value = chip.clone();
            let active = match &list_state.filter {
                Some(filter) => filter == chip,
                None => chip == ALL_CATEGORIES,
            };
            let onclick = Callback::from(move |_: MouseEvent| {
                let filter = if value == ALL_CATEGORIES {
                    None
                } else {
                    Some(value.clone())
                };
                list_state_handle.set(current.clone().with_filter(filter));
            });
            let class = if active { "filter-chip active" } else { "filter-chip" };
            html! { <button key={chip.clone()} {class} {onclick}>{chip}</button> }
        })
        .collect::<Html>();

    let page_buttons = (1..=view.total_pages)
        .map(|page| {
            let list_state_handle = list_state.clone();
            let current = (*list_state).clone();
            let onclick = Callback::from(move |_: MouseEvent| {
                list_state_handle.set(current.clone().with_page(page));
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
            });
            let class = if page == view.page { "page-button active" } else { "page-button" };
            html! { <button key={page} {class} {onclick}>{page}</button> }
        })
        .collect::<Html>();

    html! {
        <div class="portfolio-page">
            <section class="portfolio-hero">
                <h1>{"Portfolio Kami"}</h1>
                <p>{"Lihat berbagai proyek sukses yang telah kami kerjakan untuk klien kami"}</p>
            </section>
            <section class="filter-section">
                <div class="filter-chips">{chip_buttons}</div>
            </section>
            <section class="project-grid-section">
                {
                    if view.items.is_empty() {
                        html! { <p class="empty-state">{"Belum ada proyek untuk kategori ini."}</p> }
                    } else {
                        html! {
                            <div class="project-grid">
                                { for view.items.iter().map(|entry| {
                                    let navigator = navigator.clone();
                                    let id = entry.id.clone();
                                    let onclick = Callback::from(move |_: MouseEvent| {
                                        navigator.push(&Route::PortfolioDetail { id: id.clone() });
                                    });
                                    html! {
                                        <div key={entry.id.clone()} class="project-card" onclick={onclick}>
                                            {
                                                if let Some(image) = &entry.image {
                                                    html! { <img src={image.clone()} alt={entry.title.clone()} loading="lazy" /> }
                                                } else {
                                                    html! {}
                                                }
                                            }
                                            <div class="project-card-body">
                                                <span class="project-category">{&entry.category}</span>
                                                <h3>{&entry.title}</h3>
                                                <p>{&entry.description}</p>
                                            </div>
                                        </div>
                                    }
                                }) }
                            </div>
                        }
                    }
                }
                {
                    if view.total_pages > 1 {
                        html! { <div class="pagination">{page_buttons}</div> }
                    } else {
                        html! {}
                    }
                }
            </section>
            <style>
                {r#"
                .portfolio-page {
                    min-height: 100vh;
                    background: #f8fafc;
                    padding-bottom: 4rem;
                }
                .page-loading {
                    min-height: 60vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .spinner {
                    width: 3rem;
                    height: 3rem;
                    border: 4px solid rgba(13, 27, 62, 0.15);
                    border-top-color: #0d1b3e;
                    border-radius: 50%;
                    animation: spin 0.8s linear infinite;
                }
                @keyframes spin {
                    to { transform: rotate(360deg); }
                }
                .portfolio-hero {
                    padding: 8rem 2rem 5rem;
                    text-align: center;
                    background: linear-gradient(135deg, #0d1b3e, #16295e);
                    color: #ffffff;
                }
                .portfolio-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }
                .portfolio-hero p {
                    font-size: 1.2rem;
                    opacity: 0.9;
                }
                .filter-section {
                    padding: 2.5rem 2rem 0;
                }
                .filter-chips {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                }
                .filter-chip {
                    padding: 0.5rem 1.5rem;
                    border-radius: 999px;
                    border: 1px solid #cbd5e1;
                    background: #ffffff;
                    color: #475569;
                    font-size: 0.9rem;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }
                .filter-chip:hover {
                    border-color: #f59e0b;
                    color: #b45309;
                }
                .filter-chip.active {
                    background: #f59e0b;
                    border-color: #f59e0b;
                    color: #1a1a1a;
                    font-weight: 600;
                }
                .project-grid-section {
                    max-width: 1200px;
                    margin: 3rem auto 0;
                    padding: 0 2rem;
                }
                .project-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
                    gap: 2rem;
                }
                .project-card {
                    background: #ffffff;
                    border-radius: 12px;
                    overflow: hidden;
                    box-shadow: 0 2px 10px rgba(13, 27, 62, 0.08);
                    cursor: pointer;
                    transition: transform 0.25s ease, box-shadow 0.25s ease;
                }
                .project-card:hover {
                    transform: translateY(-4px);
                    box-shadow: 0 8px 24px rgba(13, 27, 62, 0.14);
                }
                .project-card img {
                    width: 100%;
                    aspect-ratio: 16 / 9;
                    object-fit: cover;
                }
                .project-card-body {
                    padding: 1.5rem;
                }
                .project-category {
                    color: #b45309;
                    font-size: 0.85rem;
                    font-weight: 600;
                }
                .project-card-body h3 {
                    margin: 0.5rem 0;
                    color: #0d1b3e;
                    font-size: 1.2rem;
                }
                .project-card-body p {
                    color: #64748b;
                    font-size: 0.9rem;
                    margin: 0;
                }
                .pagination {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 2.5rem;
                }
                .page-button {
                    min-width: 2.5rem;
                    height: 2.5rem;
                    border: 1px solid #cbd5e1;
                    background: #ffffff;
                    border-radius: 8px;
                    cursor: pointer;
                    color: #0d1b3e;
                }
                .page-button.active {
                    background: #0d1b3e;
                    color: #ffffff;
                    border-color: #0d1b3e;
                }
                .empty-state {
                    text-align: center;
                    color: #64748b;
                    padding: 3rem 0;
                }
                @media (max-width: 768px) {
                    .portfolio-hero h1 {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
