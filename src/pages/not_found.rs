use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <div class="not-found-card">
                <span class="code">{"404"}</span>
                <h1>{"Halaman Tidak Ditemukan"}</h1>
                <p>{"Halaman yang Anda cari tidak tersedia atau sudah dipindahkan."}</p>
                <Link<Route> to={Route::Home} classes="home-link">
                    {"Kembali ke Beranda"}
                </Link<Route>>
            </div>
            <style>
                {r#"
                .not-found-page {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(135deg, #0d1b3e, #16295e);
                    padding: 2rem;
                }
                .not-found-card {
                    text-align: center;
                    color: #ffffff;
                }
                .code {
                    font-size: 6rem;
                    font-weight: 700;
                    color: #f59e0b;
                }
                .not-found-card h1 {
                    font-size: 2rem;
                    margin: 1rem 0;
                }
                .not-found-card p {
                    opacity: 0.85;
                    margin-bottom: 2rem;
                }
                .home-link {
                    display: inline-block;
                    background: #f59e0b;
                    color: #1a1a1a;
                    padding: 0.75rem 2rem;
                    border-radius: 999px;
                    text-decoration: none;
                    font-weight: 600;
                }
                "#}
            </style>
        </div>
    }
}
