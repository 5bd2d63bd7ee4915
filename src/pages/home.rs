use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::clients::Clients;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
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

    let highlights = [
        (
            "Website Development",
            "Website modern, cepat, dan siap mendukung pertumbuhan bisnis Anda.",
        ),
        (
            "Instalasi CCTV",
            "Sistem keamanan profesional dengan monitoring jarak jauh.",
        ),
        (
            "IT Support",
            "Tim teknis yang siap menjaga operasional IT Anda setiap hari.",
        ),
    ];

    html! {
        <div class="home-page">
            <section class="hero">
                <h1>{"Solusi IT Terpadu untuk Bisnis Anda"}</h1>
                <p>
                    {"ArtDevata membantu bisnis bertumbuh melalui website profesional, infrastruktur andal, dan dukungan teknis menyeluruh."}
                </p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Contact} classes="hero-button primary">
                        {"Konsultasi Gratis"}
                    </Link<Route>>
                    <Link<Route> to={Route::Portfolio} classes="hero-button secondary">
                        {"Lihat Portfolio"}
                    </Link<Route>>
                </div>
            </section>
            <section class="highlights-section">
                <h2>{"Apa yang Kami Kerjakan"}</h2>
                <div class="highlights-grid">
                    { for highlights.iter().map(|(title, description)| html! {
                        <div key={*title} class="highlight-card">
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </div>
                    }) }
                </div>
                <Link<Route> to={Route::Services} classes="see-all-link">
                    {"Lihat semua layanan →"}
                </Link<Route>>
            </section>
            <Clients />
            <section class="home-cta">
                <h2>{"Siap Memulai Project Anda?"}</h2>
                <p>{"Ceritakan kebutuhan Anda dan kami akan menyiapkan solusinya."}</p>
                <Link<Route> to={Route::Contact} classes="cta-button">
                    {"Hubungi Kami"}
                </Link<Route>>
            </section>
            <style>
                {r#"
                .home-page {
                    min-height: 100vh;
                    background: #f8fafc;
                }
                .hero {
                    padding: 10rem 2rem 7rem;
                    text-align: center;
                    background: linear-gradient(135deg, #0d1b3e, #16295e);
                    color: #ffffff;
                }
                .hero h1 {
                    font-size: 3.25rem;
                    max-width: 800px;
                    margin: 0 auto 1.25rem;
                }
                .hero p {
                    font-size: 1.2rem;
                    max-width: 640px;
                    margin: 0 auto 2rem;
                    opacity: 0.9;
                }
                .hero-actions {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    flex-wrap: wrap;
                }
                .hero-button {
                    padding: 0.8rem 2rem;
                    border-radius: 999px;
                    text-decoration: none;
                    font-weight: 600;
                }
                .hero-button.primary {
                    background: #f59e0b;
                    color: #1a1a1a;
                }
                .hero-button.secondary {
                    border: 1px solid rgba(255, 255, 255, 0.5);
                    color: #ffffff;
                }
                .highlights-section {
                    max-width: 1100px;
                    margin: 4rem auto;
                    padding: 0 2rem;
                    text-align: center;
                }
                .highlights-section h2 {
                    font-size: 2.25rem;
                    color: #0d1b3e;
                    margin-bottom: 2rem;
                }
                .highlights-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                }
                .highlight-card {
                    background: #ffffff;
                    border-radius: 12px;
                    padding: 2rem;
                    box-shadow: 0 2px 10px rgba(13, 27, 62, 0.08);
                    text-align: left;
                }
                .highlight-card h3 {
                    color: #0d1b3e;
                    margin: 0 0 0.5rem;
                }
                .highlight-card p {
                    color: #64748b;
                    margin: 0;
                    line-height: 1.7;
                }
                .see-all-link {
                    display: inline-block;
                    margin-top: 2rem;
                    color: #b45309;
                    text-decoration: none;
                    font-weight: 600;
                }
                .home-cta {
                    max-width: 800px;
                    margin: 0 auto 4rem;
                    padding: 3rem 2rem;
                    text-align: center;
                    background: #0d1b3e;
                    border-radius: 16px;
                    color: #ffffff;
                }
                .home-cta h2 {
                    margin: 0 0 0.75rem;
                }
                .home-cta p {
                    opacity: 0.85;
                    margin: 0 0 1.5rem;
                }
                .cta-button {
                    display: inline-block;
                    background: #f59e0b;
                    color: #1a1a1a;
                    padding: 0.75rem 2rem;
                    border-radius: 999px;
                    text-decoration: none;
                    font-weight: 600;
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
