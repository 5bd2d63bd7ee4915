use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::{spawn_local, JsFuture};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::detail::{reading_time_label, related, DetailState};
use crate::content::fetch;
use crate::content::likes::LikeStore;
use crate::content::model::{format_date_id, BlogPost};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct BlogDetailProps {
    pub id: String,
}

#[function_component(BlogDetail)]
pub fn blog_detail(props: &BlogDetailProps) -> Html {
    let state = use_state(|| DetailState::<BlogPost>::Loading);
    let recent = use_state(Vec::<BlogPost>::new);
    let liked = use_state(|| false);
    let like_count = use_state(|| 0u32);
    let share_note = use_state(|| None::<String>);
    let navigator = use_navigator().unwrap();

    // Primary record; one attempt per navigation.
    {
        let state = state.clone();
        let id = props.id.clone();
        use_effect_with_deps(
            move |_| {
                state.set(DetailState::Loading);
                let alive = Rc::new(Cell::new(true));
                let alive_task = alive.clone();
                spawn_local(async move {
                    let resolved = fetch::blog_post(&id).await;
                    if alive_task.get() {
                        state.set(resolved);
                    }
                });
                move || alive.set(false)
            },
            props.id.clone(),
        );
    }

    // Recent-posts sidebar, fetched independently so a failure on either
    // side never blanks the other.
    {
        let recent = recent.clone();
        let id = props.id.clone();
        use_effect_with_deps(
            move |_| {
                let alive = Rc::new(Cell::new(true));
                let alive_task = alive.clone();
                spawn_local(async move {
                    let posts = fetch::blog_posts().await;
                    if alive_task.get() {
                        recent.set(related(&posts, &id, config::RELATED_LIMIT));
                    }
                });
                move || alive.set(false)
            },
            props.id.clone(),
        );
    }

    {
        let liked = liked.clone();
        let like_count = like_count.clone();
        use_effect_with_deps(
            move |id: &String| {
                let likes = LikeStore::browser("blog");
                liked.set(likes.is_liked(id));
                like_count.set(likes.count(id));
                || ()
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

    let back_to_blog = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            navigator.push(&Route::Blog);
        })
    };

    let toggle_like = {
        let liked = liked.clone();
        let like_count = like_count.clone();
        let id = props.id.clone();
        Callback::from(move |_: MouseEvent| {
            let (now_liked, count) = LikeStore::browser("blog").toggle(&id);
            liked.set(now_liked);
            like_count.set(count);
        })
    };

    // Copy the article link; failure is a soft note, nothing blocking.
    let share = {
        let share_note = share_note.clone();
        Callback::from(move |_: MouseEvent| {
            let share_note = share_note.clone();
            let window = match web_sys::window() {
                Some(window) => window,
                None => return,
            };
            let href = window.location().href().unwrap_or_default();
            let clipboard = window.navigator().clipboard();
            spawn_local(async move {
                let note = match JsFuture::from(clipboard.write_text(&href)).await {
                    Ok(_) => "Tautan disalin!",
                    Err(_) => "Gagal menyalin tautan",
                };
                share_note.set(Some(note.to_string()));
                gloo_timers::future::TimeoutFuture::new(2_000).await;
                share_note.set(None);
            });
        })
    };

    let body = match &*state {
        DetailState::Loading => html! {
            <div class="page-loading"><div class="spinner"></div></div>
        },
        DetailState::NotFound => html! {
            <div class="detail-message">
                <h1>{"Artikel Tidak Ditemukan"}</h1>
                <button class="back-button" onclick={back_to_blog.clone()}>{"Kembali"}</button>
            </div>
        },
        DetailState::Error => html! {
            <div class="detail-message">
                <h1>{"Terjadi Kesalahan"}</h1>
                <p>{"Artikel tidak dapat dimuat saat ini, silakan coba lagi nanti."}</p>
                <button class="back-button" onclick={back_to_blog.clone()}>{"Kembali"}</button>
            </div>
        },
        DetailState::Found(post) => {
            let content = Html::from_html_unchecked(AttrValue::from(post.content.clone()));
            html! {
                <div class="detail-layout">
                    <article class="detail-article">
                        <button class="back-link" onclick={back_to_blog.clone()}>{"← Kembali ke Blog"}</button>
                        {
                            if let Some(image) = &post.image {
                                html! { <img class="detail-image" src={image.clone()} alt={post.title.clone()} /> }
                            } else {
                                html! {}
                            }
                        }
                        <span class="category-badge">{&post.category}</span>
                        <h1>{&post.title}</h1>
                        <div class="detail-meta">
                            {
                                if let Some(date) = &post.created_at {
                                    html! { <span>{format_date_id(date)}</span> }
                                } else {
                                    html! {}
                                }
                            }
                            {
                                if !post.author.is_empty() {
                                    html! { <span>{&post.author}</span> }
                                } else {
                                    html! {}
                                }
                            }
                            <span>{reading_time_label(&post.content)}</span>
                        </div>
                        <div class="detail-actions">
                            <button class={classes!("like-button", (*liked).then(|| "liked"))} onclick={toggle_like}>
                                { if *liked { "♥" } else { "♡" } }
                                <span>{*like_count}</span>
                            </button>
                            <button class="share-button" onclick={share}>{"Bagikan"}</button>
                            {
                                if let Some(note) = &*share_note {
                                    html! { <span class="share-note">{note}</span> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                        <div class="detail-content">{content}</div>
                    </article>
                    <aside class="detail-sidebar">
                        <h3>{"Artikel Terbaru"}</h3>
                        {
                            if recent.is_empty() {
                                html! { <p class="sidebar-empty">{"Belum ada artikel lain."}</p> }
                            } else {
                                html! {
                                    <ul>
                                        { for recent.iter().map(|item| {
                                            let navigator = navigator.clone();
                                            let id = item.id.clone();
                                            let onclick = Callback::from(move |_: MouseEvent| {
                                                navigator.push(&Route::BlogDetail { id: id.clone() });
                                            });
                                            html! {
                                                <li key={item.id.clone()} onclick={onclick}>
                                                    <span class="sidebar-title">{&item.title}</span>
                                                    {
                                                        if let Some(date) = &item.created_at {
                                                            html! { <span class="sidebar-date">{format_date_id(date)}</span> }
                                                        } else {
                                                            html! {}
                                                        }
                                                    }
                                                </li>
                                            }
                                        }) }
                                    </ul>
                                }
                            }
                        }
                    </aside>
                </div>
            }
        }
    };

    html! {
        <div class="blog-detail-page">
            { body }
            <style>
                {r#"
                .blog-detail-page {
                    min-height: 100vh;
                    background: #f8fafc;
                    padding: 7rem 2rem 4rem;
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
                    margin: 6rem auto;
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
                .detail-layout {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 3fr 1fr;
                    gap: 2.5rem;
                    align-items: start;
                }
                .detail-article {
                    background: #ffffff;
                    border-radius: 14px;
                    padding: 2rem;
                    box-shadow: 0 4px 20px rgba(13, 27, 62, 0.08);
                }
                .back-link {
                    background: none;
                    border: none;
                    color: #0d1b3e;
                    cursor: pointer;
                    padding: 0;
                    margin-bottom: 1.5rem;
                    font-size: 0.95rem;
                }
                .detail-image {
                    width: 100%;
                    max-height: 420px;
                    object-fit: cover;
                    border-radius: 10px;
                    margin-bottom: 1.5rem;
                }
                .category-badge {
                    background: rgba(245, 158, 11, 0.15);
                    color: #b45309;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    font-size: 0.8rem;
                    font-weight: 600;
                }
                .detail-article h1 {
                    font-size: 2.25rem;
                    color: #0d1b3e;
                    margin: 1rem 0;
                }
                .detail-meta {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.25rem;
                    color: #94a3b8;
                    font-size: 0.9rem;
                    margin-bottom: 1.25rem;
                }
                .detail-actions {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    border-top: 1px solid #e2e8f0;
                    border-bottom: 1px solid #e2e8f0;
                    padding: 0.75rem 0;
                    margin-bottom: 1.5rem;
                }
                .like-button {
                    display: flex;
                    align-items: center;
                    gap: 0.4rem;
                    background: none;
                    border: 1px solid #cbd5e1;
                    border-radius: 999px;
                    padding: 0.4rem 1rem;
                    cursor: pointer;
                    color: #475569;
                    font-size: 1rem;
                }
                .like-button.liked {
                    color: #dc2626;
                    border-color: #dc2626;
                }
                .share-button {
                    background: none;
                    border: 1px solid #cbd5e1;
                    border-radius: 999px;
                    padding: 0.4rem 1rem;
                    cursor: pointer;
                    color: #475569;
                }
                .share-note {
                    color: #16a34a;
                    font-size: 0.85rem;
                }
                .detail-content {
                    color: #475569;
                    line-height: 1.9;
                }
                .detail-sidebar {
                    background: #ffffff;
                    border-radius: 14px;
                    padding: 1.5rem;
                    box-shadow: 0 4px 20px rgba(13, 27, 62, 0.08);
                }
                .detail-sidebar h3 {
                    margin: 0 0 1rem;
                    color: #0d1b3e;
                }
                .detail-sidebar ul {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .detail-sidebar li {
                    cursor: pointer;
                    display: flex;
                    flex-direction: column;
                    gap: 0.2rem;
                }
                .sidebar-title {
                    color: #0d1b3e;
                    font-size: 0.95rem;
                }
                .detail-sidebar li:hover .sidebar-title {
                    color: #b45309;
                }
                .sidebar-date {
                    color: #94a3b8;
                    font-size: 0.8rem;
                }
                .sidebar-empty {
                    color: #64748b;
                    font-size: 0.9rem;
                }
                @media (max-width: 900px) {
                    .detail-layout {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
