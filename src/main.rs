use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content {
    pub mod model;
    pub mod fetch;
    pub mod list;
    pub mod detail;
    pub mod likes;
}
mod components {
    pub mod clients;
    pub mod floating_actions;
    pub mod footer;
}
mod pages {
    pub mod home;
    pub mod about;
    pub mod services;
    pub mod portfolio;
    pub mod portfolio_detail;
    pub mod blog;
    pub mod blog_detail;
    pub mod faq;
    pub mod contact;
    pub mod not_found;
}

use components::floating_actions::FloatingActions;
use components::footer::Footer;
use pages::{
    about::About,
    blog::Blog,
    blog_detail::BlogDetail,
    contact::Contact,
    faq::Faq,
    home::Home,
    not_found::NotFound,
    portfolio::Portfolio,
    portfolio_detail::PortfolioDetail,
    services::Services,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/tentang")]
    About,
    #[at("/layanan")]
    Services,
    #[at("/portfolio")]
    Portfolio,
    #[at("/portfolio/:id")]
    PortfolioDetail { id: String },
    #[at("/blog")]
    Blog,
    #[at("/blog/:id")]
    BlogDetail { id: String },
    #[at("/faq")]
    Faq,
    #[at("/kontak")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        }
        Route::Portfolio => {
            info!("Rendering Portfolio page");
            html! { <Portfolio /> }
        }
        Route::PortfolioDetail { id } => {
            info!("Rendering PortfolioDetail page");
            html! { <PortfolioDetail {id} /> }
        }
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        }
        Route::BlogDetail { id } => {
            info!("Rendering BlogDetail page");
            html! { <BlogDetail {id} /> }
        }
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 40);
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

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let links = [
        (Route::Home, "Beranda"),
        (Route::About, "Tentang"),
        (Route::Services, "Layanan"),
        (Route::Portfolio, "Portfolio"),
        (Route::Blog, "Blog"),
        (Route::Faq, "FAQ"),
    ];

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"ArtDevata"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        links.iter().map(|(route, label)| html! {
                            <div onclick={close_menu.clone()}>
                                <Link<Route> to={route.clone()} classes="nav-link">
                                    {*label}
                                </Link<Route>>
                            </div>
                        }).collect::<Html>()
                    }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-contact-button">
                            {"Hubungi Kami"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 100;
                    background: transparent;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(13, 27, 62, 0.95);
                    backdrop-filter: blur(8px);
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.25);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #ffffff;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-link {
                    color: rgba(255, 255, 255, 0.85);
                    text-decoration: none;
                    font-size: 0.95rem;
                    transition: color 0.2s ease;
                }
                .nav-link:hover {
                    color: #ffffff;
                }
                .nav-contact-button {
                    background: #f59e0b;
                    color: #1a1a1a;
                    padding: 0.5rem 1.25rem;
                    border-radius: 999px;
                    text-decoration: none;
                    font-weight: 600;
                    font-size: 0.95rem;
                }
                .nav-contact-button:hover {
                    background: #fbbf24;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 6px;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #ffffff;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        width: 100%;
                        flex-direction: column;
                        background: rgba(13, 27, 62, 0.98);
                        padding: 1.5rem 2rem;
                        gap: 1.25rem;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
            <FloatingActions />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
