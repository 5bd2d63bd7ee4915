use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::fetch;
use crate::content::model::ServiceOffering;
use crate::Route;

/// Baseline catalogue shown when the CMS has no service records yet.
fn default_services() -> Vec<ServiceOffering> {
    let catalogue = [
        (
            "website",
            "Website Development",
            "Pengembangan website custom dengan teknologi modern dan desain responsif.",
            vec![
                "Desain UI/UX Modern",
                "Responsive & Mobile-Friendly",
                "SEO Optimized",
                "CMS Integration",
                "E-commerce Solutions",
                "Progressive Web Apps",
            ],
        ),
        (
            "hosting",
            "Hosting & Domain",
            "Layanan hosting handal dengan uptime terjamin dan pengelolaan domain mudah.",
            vec![
                "99.9% Uptime Guarantee",
                "SSD Storage",
                "Free SSL Certificate",
                "Daily Backup",
                "24/7 Monitoring",
                "Domain Management",
            ],
        ),
        (
            "cctv",
            "Instalasi CCTV",
            "Sistem keamanan CCTV profesional dengan teknologi monitoring terkini.",
            vec![
                "HD/4K Resolution",
                "Remote Monitoring",
                "Night Vision",
                "Motion Detection",
                "Cloud Storage",
                "Professional Installation",
            ],
        ),
        (
            "support",
            "IT Support",
            "Dukungan teknis komprehensif untuk sistem IT bisnis Anda.",
            vec![
                "24/7 Technical Support",
                "System Maintenance",
                "Troubleshooting",
                "Network Management",
                "Software Updates",
                "Security Monitoring",
            ],
        ),
        (
            "cloud",
            "Cloud Solutions",
            "Solusi cloud computing untuk skalabilitas dan efisiensi bisnis.",
            vec![
                "Cloud Migration",
                "Data Backup & Recovery",
                "Scalable Infrastructure",
                "Cost Optimization",
                "Security & Compliance",
                "Hybrid Cloud Setup",
            ],
        ),
        (
            "security",
            "Keamanan Jaringan",
            "Perlindungan menyeluruh untuk jaringan dan data perusahaan Anda.",
            vec![
                "Firewall Setup",
                "Security Audit",
                "Penetration Testing",
                "VPN Configuration",
                "Endpoint Protection",
                "Incident Response",
            ],
        ),
    ];

    catalogue
        .into_iter()
        .map(|(id, title, description, features)| ServiceOffering {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            features: features.into_iter().map(str::to_string).collect(),
            icon: String::new(),
        })
        .collect()
}

#[function_component(Services)]
pub fn services() -> Html {
    let offerings = use_state(Vec::<ServiceOffering>::new);
    let loading = use_state(|| true);

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
        let offerings = offerings.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                let alive = Rc::new(Cell::new(true));
                let alive_task = alive.clone();
                spawn_local(async move {
                    let mut fetched = fetch::service_offerings().await;
                    if fetched.is_empty() {
                        fetched = default_services();
                    }
                    if alive_task.get() {
                        offerings.set(fetched);
                        loading.set(false);
                    }
                });
                move || alive.set(false)
            },
            (),
        );
    }

    html! {
        <div class="services-page">
            <section class="services-hero">
                <h1>{"Layanan Kami"}</h1>
                <p>{"Solusi IT lengkap untuk mendukung transformasi digital bisnis Anda"}</p>
            </section>
            <section class="services-grid-section">
                {
                    if *loading {
                        html! { <div class="page-loading"><div class="spinner"></div></div> }
                    } else {
                        html! {
                            <div class="services-grid">
                                { for offerings.iter().map(|service| html! {
                                    <div key={service.id.clone()} class="service-card">
                                        {
                                            if !service.icon.is_empty() {
                                                html! { <img class="service-icon" src={service.icon.clone()} alt="" loading="lazy" /> }
                                            } else {
                                                html! {}
                                            }
                                        }
                                        <h3>{&service.title}</h3>
                                        <p>{&service.description}</p>
                                        {
                                            if !service.features.is_empty() {
                                                html! {
                                                    <ul>
                                                        { for service.features.iter().map(|feature| html! {
                                                            <li>{feature}</li>
                                                        }) }
                                                    </ul>
                                                }
                                            } else {
                                                html! {}
                                            }
                                        }
                                    </div>
                                }) }
                            </div>
                        }
                    }
                }
            </section>
            <section class="services-cta">
                <h2>{"Butuh layanan khusus?"}</h2>
                <p>{"Konsultasikan kebutuhan IT Anda dengan tim kami, gratis."}</p>
                <Link<Route> to={Route::Contact} classes="cta-button">
                    {"Hubungi Kami"}
                </Link<Route>>
            </section>
            <style>
                {r#"
                .services-page {
                    min-height: 100vh;
                    background: #f8fafc;
                    padding-bottom: 4rem;
                }
                .services-hero {
                    padding: 8rem 2rem 5rem;
                    text-align: center;
                    background: linear-gradient(135deg, #0d1b3e, #16295e);
                    color: #ffffff;
                }
                .services-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }
                .services-hero p {
                    font-size: 1.2rem;
                    opacity: 0.9;
                }
                .page-loading {
                    min-height: 40vh;
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
                .services-grid-section {
                    max-width: 1200px;
                    margin: 3rem auto 0;
                    padding: 0 2rem;
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
                    gap: 2rem;
                }
                .service-card {
                    background: #ffffff;
                    border-radius: 12px;
                    padding: 2rem;
                    box-shadow: 0 2px 10px rgba(13, 27, 62, 0.08);
                    transition: transform 0.25s ease, box-shadow 0.25s ease;
                }
                .service-card:hover {
                    transform: translateY(-4px);
                    box-shadow: 0 8px 24px rgba(13, 27, 62, 0.14);
                }
                .service-icon {
                    width: 3rem;
                    height: 3rem;
                    object-fit: contain;
                    margin-bottom: 1rem;
                }
                .service-card h3 {
                    color: #0d1b3e;
                    font-size: 1.3rem;
                    margin: 0 0 0.75rem;
                }
                .service-card p {
                    color: #64748b;
                    margin: 0 0 1rem;
                    line-height: 1.7;
                }
                .service-card ul {
                    margin: 0;
                    padding-left: 1.25rem;
                    color: #475569;
                    font-size: 0.9rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.35rem;
                }
                .services-cta {
                    max-width: 800px;
                    margin: 4rem auto 0;
                    padding: 3rem 2rem;
                    text-align: center;
                    background: #0d1b3e;
                    border-radius: 16px;
                    color: #ffffff;
                }
                .services-cta h2 {
                    margin: 0 0 0.75rem;
                }
                .services-cta p {
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
                    .services-hero h1 {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
