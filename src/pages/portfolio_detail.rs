use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::detail::DetailState;
use crate::content::fetch;
use crate::content::model::{format_month_year_id, PortfolioEntry};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct PortfolioDetailProps {
    pub id: String,
}

#[function_component(PortfolioDetail)]
pub fn portfolio_detail(props: &PortfolioDetailProps) -> Html {
    let state = use_state(|| DetailState::<PortfolioEntry>::Loading);
    let selected_image = use_state(|| None::<usize>);
    let navigator = use_navigator().unwrap();

    {
        let state = state.clone();
        let id = props.id.clone();
        use_effect_with_deps(
            move |_| {
                state.set(DetailState::Loading);
                let alive = Rc::new(Cell::new(true));
                let alive_task = alive.clone();
                spawn_local(async move {
                    let resolved = fetch::portfolio_entry(&id).await;
                    if alive_task.get() {
                        state.set(resolved);
                    }
                });
                move || alive.set(false)
            },
            props.id.clone(),
        );
    }

    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            props.id.clone(),
        );
    }

    let back_to_portfolio = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            navigator.push(&Route::Portfolio);
        })
    };

    let body = match &*state {
        DetailState::Loading => html! {
            <div class="page-loading"><div class="spinner"></div></div>
        },
        DetailState::NotFound => html! {
            <div class="detail-message">
                <h1>{"Project tidak ditemukan"}</h1>
                <button class="back-button" onclick={back_to_portfolio.clone()}>
                    {"← Kembali ke Portfolio"}
                </button>
            </div>
        },
        DetailState::Error => html! {
            <div class="detail-message">
                <h1>{"Terjadi Kesalahan"}</h1>
                <p>{"Project tidak dapat dimuat saat ini, silakan coba lagi nanti."}</p>
                <button class="back-button" onclick={back_to_portfolio.clone()}>
                    {"← Kembali ke Portfolio"}
                </button>
            </div>
        },
        DetailState::Found(project) => {
            let close_lightbox = {
                let selected_image = selected_image.clone();
                Callback::from(move |_: MouseEvent| selected_image.set(None))
            };
            html! {
                <>
                <section class="project-hero">
                    <div class="breadcrumbs">
                        <button onclick={{
                            let navigator = navigator.clone();
                            Callback::from(move |_: MouseEvent| navigator.push(&Route::Home))
                        }}>{"Home"}</button>
                        <span>{"›"}</span>
                        <button onclick={back_to_portfolio.clone()}>{"Portfolio"}</button>
                        <span>{"›"}</span>
                    </div>
                    <h1>{&project.title}</h1>
                    <div class="project-meta">
                        <span>{&project.category}</span>
                        {
                            if let Some(client) = &project.client {
                                html! { <span>{client}</span> }
                            } else {
                                html! {}
                            }
                        }
                        {
                            if let Some(date) = &project.date {
                                html! { <span>{format_month_year_id(date)}</span> }
                            } else {
                                html! {}
                            }
                        }
                        {
                            if let Some(duration) = &project.duration {
                                html! { <span>{duration}</span> }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </section>
                {
                    if let Some(image) = &project.image {
                        let open_lightbox = {
                            let selected_image = selected_image.clone();
                            Callback::from(move |_: MouseEvent| selected_image.set(Some(0)))
                        };
                        html! {
                            <section class="main-image-section">
                                <img src={image.clone()} alt={project.title.clone()} onclick={open_lightbox} />
                            </section>
                        }
                    } else {
                        html! {}
                    }
                }
                <section class="project-info">
                    <div class="info-main">
                        <div class="info-block">
                            <h2>{"Tentang Project"}</h2>
                            <p class="description">{&project.description}</p>
                        </div>
                        {
                            if let Some(challenge) = &project.challenge {
                                html! {
                                    <div class="info-block">
                                        <h3>{"Tantangan"}</h3>
                                        <p>{challenge}</p>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                        {
                            if let Some(solution) = &project.solution {
                                html! {
                                    <div class="info-block">
                                        <h3>{"Solusi Kami"}</h3>
                                        <p>{solution}</p>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                        {
                            if !project.results.is_empty() {
                                html! {
                                    <div class="info-block">
                                        <h3>{"Hasil yang Dicapai"}</h3>
                                        <ul class="results-list">
                                            { for project.results.iter().map(|result| html! {
                                                <li>{result}</li>
                                            }) }
                                        </ul>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                    <div class="info-side">
                        <div class="side-card">
                            <h3>{"Detail Project"}</h3>
                            <dl>
                                {
                                    if let Some(client) = &project.client {
                                        html! {
                                            <>
                                            <dt>{"Klien"}</dt>
                                            <dd>{client}</dd>
                                            </>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                                {
                                    if let Some(date) = &project.date {
                                        html! {
                                            <>
                                            <dt>{"Tanggal"}</dt>
                                            <dd>{format_month_year_id(date)}</dd>
                                            </>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                                {
                                    if let Some(duration) = &project.duration {
                                        html! {
                                            <>
                                            <dt>{"Durasi"}</dt>
                                            <dd>{duration}</dd>
                                            </>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                                <dt>{"Kategori"}</dt>
                                <dd>{&project.category}</dd>
                            </dl>
                        </div>
                        {
                            if !project.technologies.is_empty() {
                                html! {
                                    <div class="side-card">
                                        <h3>{"Teknologi Digunakan"}</h3>
                                        <div class="tech-tags">
                                            { for project.technologies.iter().map(|tech| html! {
                                                <span class="tech-tag">{tech}</span>
                                            }) }
                                        </div>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                        {
                            if let Some(link) = &project.link {
                                html! {
                                    <a class="live-link" href={link.clone()} target="_blank" rel="noopener noreferrer">
                                        {"Lihat Website Live"}
                                    </a>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </section>
                {
                    if project.images.len() > 1 {
                        html! {
                            <section class="gallery-section">
                                <h2>{"Galeri Project"}</h2>
                                <div class="gallery-grid">
                                    { for project.images.iter().enumerate().map(|(index, image)| {
                                        let selected_image = selected_image.clone();
                                        let onclick = Callback::from(move |_: MouseEvent| {
                                            selected_image.set(Some(index));
                                        });
                                        html! {
                                            <img key={index} src={image.clone()}
                                                alt={format!("{} - {}", project.title, index + 1)}
                                                onclick={onclick} loading="lazy" />
                                        }
                                    }) }
                                </div>
                            </section>
                        }
                    } else {
                        html! {}
                    }
                }
                {
                    if let Some(index) = *selected_image {
                        let total = project.images.len();
                        let prev = {
                            let selected_image = selected_image.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.stop_propagation();
                                selected_image.set(Some(if index == 0 { total - 1 } else { index - 1 }));
                            })
                        };
                        let next = {
                            let selected_image = selected_image.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.stop_propagation();
                                selected_image.set(Some(if index + 1 == total { 0 } else { index + 1 }));
                            })
                        };
                        html! {
                            <div class="lightbox" onclick={close_lightbox.clone()}>
                                <img src={project.images[index].clone()} alt="Galeri" />
                                {
                                    if total > 1 {
                                        html! {
                                            <div class="lightbox-controls">
                                                <button onclick={prev}>{"←"}</button>
                                                <span>{format!("{} / {}", index + 1, total)}</span>
                                                <button onclick={next}>{"→"}</button>
                                            </div>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                </>
            }
        }
    };

    html! {
        <div class="portfolio-detail-page">
            { body }
            <style>
                {r#"
                .portfolio-detail-page {
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
                .detail-message {
                    max-width: 600px;
                    margin: 10rem auto;
                    text-align: center;
                }
                .detail-message h1 {
                    font-size: 2.25rem;
                    color: #0d1b3e;
                    margin-bottom: 1rem;
                }
                .detail-message p {
                    color: #64748b;
                    margin-bottom: 1.5rem;
                }
                .back-button {
                    background: #0d1b3e;
                    color: #ffffff;
                    border: none;
                    padding: 0.7rem 1.75rem;
                    border-radius: 8px;
                    cursor: pointer;
                    font-size: 1rem;
                }
                .project-hero {
                    padding: 7rem 2rem 3rem;
                    background: linear-gradient(135deg, #0d1b3e, #16295e);
                    color: #ffffff;
                }
                .breadcrumbs {
                    max-width: 1100px;
                    margin: 0 auto 1rem;
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.9rem;
                }
                .breadcrumbs button {
                    background: none;
                    border: none;
                    color: rgba(255, 255, 255, 0.75);
                    cursor: pointer;
                    padding: 0;
                }
                .breadcrumbs button:hover {
                    color: #ffffff;
                }
                .breadcrumbs span {
                    color: rgba(255, 255, 255, 0.4);
                }
                .project-hero h1 {
                    max-width: 1100px;
                    margin: 0 auto 1rem;
                    font-size: 2.75rem;
                }
                .project-meta {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                    opacity: 0.9;
                }
                .main-image-section {
                    max-width: 1100px;
                    margin: 3rem auto 0;
                    padding: 0 2rem;
                }
                .main-image-section img {
                    width: 100%;
                    max-height: 560px;
                    object-fit: cover;
                    border-radius: 14px;
                    box-shadow: 0 8px 30px rgba(13, 27, 62, 0.2);
                    cursor: pointer;
                }
                .project-info {
                    max-width: 1100px;
                    margin: 3rem auto 0;
                    padding: 0 2rem;
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 2.5rem;
                    align-items: start;
                }
                .info-main {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .info-block h2 {
                    font-size: 1.75rem;
                    color: #0d1b3e;
                    margin: 0 0 0.75rem;
                }
                .info-block h3 {
                    font-size: 1.3rem;
                    color: #0d1b3e;
                    margin: 0 0 0.5rem;
                }
                .info-block p {
                    color: #475569;
                    line-height: 1.8;
                    margin: 0;
                }
                .description {
                    border-left: 4px solid #f59e0b;
                    padding-left: 1.25rem;
                }
                .results-list {
                    margin: 0;
                    padding-left: 1.25rem;
                    color: #475569;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .info-side {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .side-card {
                    background: #ffffff;
                    border-radius: 12px;
                    padding: 1.5rem;
                    box-shadow: 0 2px 10px rgba(13, 27, 62, 0.08);
                }
                .side-card h3 {
                    margin: 0 0 1rem;
                    color: #0d1b3e;
                }
                .side-card dl {
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.25rem;
                }
                .side-card dt {
                    color: #94a3b8;
                    font-size: 0.85rem;
                }
                .side-card dd {
                    margin: 0 0 0.75rem;
                    color: #0d1b3e;
                    font-weight: 600;
                }
                .tech-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .tech-tag {
                    background: rgba(245, 158, 11, 0.15);
                    color: #b45309;
                    padding: 0.35rem 0.9rem;
                    border-radius: 999px;
                    font-size: 0.85rem;
                }
                .live-link {
                    display: block;
                    text-align: center;
                    background: #0d1b3e;
                    color: #ffffff;
                    padding: 0.8rem;
                    border-radius: 10px;
                    text-decoration: none;
                    font-weight: 600;
                }
                .gallery-section {
                    max-width: 1100px;
                    margin: 3.5rem auto 0;
                    padding: 0 2rem;
                }
                .gallery-section h2 {
                    font-size: 1.75rem;
                    color: #0d1b3e;
                    margin-bottom: 1.5rem;
                }
                .gallery-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                    gap: 1.5rem;
                }
                .gallery-grid img {
                    width: 100%;
                    height: 16rem;
                    object-fit: cover;
                    border-radius: 12px;
                    cursor: pointer;
                    transition: transform 0.25s ease;
                }
                .gallery-grid img:hover {
                    transform: scale(1.03);
                }
                .lightbox {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.85);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    z-index: 200;
                    cursor: pointer;
                }
                .lightbox img {
                    max-width: 90vw;
                    max-height: 80vh;
                    object-fit: contain;
                }
                .lightbox-controls {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    background: rgba(255, 255, 255, 0.12);
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    color: #ffffff;
                }
                .lightbox-controls button {
                    background: none;
                    border: none;
                    color: #ffffff;
                    font-size: 1.25rem;
                    cursor: pointer;
                }
                @media (max-width: 900px) {
                    .project-info {
                        grid-template-columns: 1fr;
                    }
                    .project-hero h1 {
                        font-size: 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
