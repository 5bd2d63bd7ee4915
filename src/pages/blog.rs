use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::fetch;
use crate::content::list::{present, ListState};
use crate::content::model::{format_date_id, BlogPost};
use crate::Route;

#[function_component(Blog)]
pub fn blog() -> Html {
    let posts = use_state(Vec::<BlogPost>::new);
    let loading = use_state(|| true);
    let list_state = use_state(ListState::default);
    let navigator = use_navigator().unwrap();

    // Scroll to top only on initial mount
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
        let posts = posts.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                let alive = Rc::new(Cell::new(true));
                let alive_task = alive.clone();
                spawn_local(async move {
                    let fetched = fetch::blog_posts().await;
                    if alive_task.get() {
                        posts.set(fetched);
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
            <div class="blog-page">
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

    let view = present(&posts, &list_state, config::PAGE_SIZE, true);

    let open_post = |id: String| {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            navigator.push(&Route::BlogDetail { id: id.clone() });
        })
    };

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
        <div class="blog-page">
            <section class="blog-hero">
                <h1>{"Blog & Berita"}</h1>
                <p>{"Tips, panduan, dan insight terbaru seputar teknologi dan bisnis digital"}</p>
            </section>
            {
                if let Some(featured) = &view.featured {
                    let onclick = open_post(featured.id.clone());
                    html! {
                        <section class="featured-section">
                            <div class="featured-card" onclick={onclick.clone()}>
                                {
                                    if let Some(image) = &featured.image {
                                        html! { <img src={image.clone()} alt={featured.title.clone()} /> }
                                    } else {
                                        html! {}
                                    }
                                }
                                <div class="featured-body">
                                    <span class="category-badge">{&featured.category}</span>
                                    <h2>{&featured.title}</h2>
                                    <p>{&featured.excerpt}</p>
                                    <div class="post-meta">
                                        {
                                            if let Some(date) = &featured.created_at {
                                                html! { <span>{format_date_id(date)}</span> }
                                            } else {
                                                html! {}
                                            }
                                        }
                                        {
                                            if !featured.author.is_empty() {
                                                html! { <span>{&featured.author}</span> }
                                            } else {
                                                html! {}
                                            }
                                        }
                                    </div>
                                    <button class="read-more" onclick={onclick}>{"Baca Selengkapnya →"}</button>
                                </div>
                            </div>
                        </section>
                    }
                } else {
                    html! {
                        <section class="featured-section">
                            <p class="empty-state">{"Belum ada artikel."}</p>
                        </section>
                    }
                }
            }
            {
                if !view.items.is_empty() {
                    html! {
                        <section class="post-grid-section">
                            <h2>{"Artikel Lainnya"}</h2>
                            <div class="post-grid">
                                { for view.items.iter().map(|post| {
                                    let onclick = open_post(post.id.clone());
                                    html! {
                                        <div key={post.id.clone()} class="post-card" onclick={onclick}>
                                            {
                                                if let Some(image) = &post.image {
                                                    html! { <img src={image.clone()} alt={post.title.clone()} loading="lazy" /> }
                                                } else {
                                                    html! {}
                                                }
                                            }
                                            <div class="post-card-body">
                                                <span class="category-badge">{&post.category}</span>
                                                <h3>{&post.title}</h3>
                                                <p>{&post.excerpt}</p>
                                                {
                                                    if let Some(date) = &post.created_at {
                                                        html! { <span class="post-date">{format_date_id(date)}</span> }
                                                    } else {
                                                        html! {}
                                                    }
                                                }
                                            </div>
                                        </div>
                                    }
                                }) }
                            </div>
                            {
                                if view.total_pages > 1 {
                                    html! { <div class="pagination">{page_buttons}</div> }
                                } else {
                                    html! {}
                                }
                            }
                        </section>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .blog-page {
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
                .blog-hero {
                    padding: 8rem 2rem 5rem;
                    text-align: center;
                    background: linear-gradient(135deg, #0d1b3e, #16295e);
                    color: #ffffff;
                }
                .blog-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }
                .blog-hero p {
                    font-size: 1.2rem;
                    opacity: 0.9;
                }
                .featured-section {
                    max-width: 1000px;
                    margin: 3rem auto 0;
                    padding: 0 2rem;
                }
                .featured-card {
                    display: grid;
                    grid-template-columns: 2fr 3fr;
                    background: #ffffff;
                    border-radius: 14px;
                    overflow: hidden;
                    box-shadow: 0 4px 20px rgba(13, 27, 62, 0.1);
                    cursor: pointer;
                }
                .featured-card img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .featured-body {
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .featured-body h2 {
                    font-size: 1.75rem;
                    color: #0d1b3e;
                    margin: 0;
                }
                .featured-body p {
                    color: #64748b;
                    margin: 0;
                }
                .category-badge {
                    align-self: flex-start;
                    background: rgba(245, 158, 11, 0.15);
                    color: #b45309;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    font-size: 0.8rem;
                    font-weight: 600;
                }
                .post-meta {
                    display: flex;
                    gap: 1rem;
                    color: #94a3b8;
                    font-size: 0.85rem;
                }
                .read-more {
                    align-self: flex-end;
                    margin-top: auto;
                    background: #0d1b3e;
                    color: #ffffff;
                    border: none;
                    padding: 0.6rem 1.25rem;
                    border-radius: 8px;
                    cursor: pointer;
                }
                .post-grid-section {
                    max-width: 1200px;
                    margin: 4rem auto 0;
                    padding: 0 2rem;
                }
                .post-grid-section h2 {
                    font-size: 2rem;
                    color: #0d1b3e;
                    margin-bottom: 2rem;
                }
                .post-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                    gap: 2rem;
                }
                .post-card {
                    background: #ffffff;
                    border-radius: 12px;
                    overflow: hidden;
                    box-shadow: 0 2px 10px rgba(13, 27, 62, 0.08);
                    cursor: pointer;
                    transition: transform 0.25s ease, box-shadow 0.25s ease;
                }
                .post-card:hover {
                    transform: translateY(-4px);
                    box-shadow: 0 8px 24px rgba(13, 27, 62, 0.14);
                }
                .post-card img {
                    width: 100%;
                    aspect-ratio: 16 / 9;
                    object-fit: cover;
                }
                .post-card-body {
                    padding: 1.25rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .post-card-body h3 {
                    font-size: 1.15rem;
                    color: #0d1b3e;
                    margin: 0;
                }
                .post-card-body p {
                    color: #64748b;
                    font-size: 0.9rem;
                    margin: 0;
                }
                .post-date {
                    color: #94a3b8;
                    font-size: 0.8rem;
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
                    .featured-card {
                        grid-template-columns: 1fr;
                    }
                    .blog-hero h1 {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
