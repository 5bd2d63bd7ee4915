use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-column">
                    <h3>{"ArtDevata"}</h3>
                    <p>
                        {"Penyedia solusi IT terpadu untuk website, hosting, CCTV, dan dukungan teknis bisnis Anda."}
                    </p>
                </div>
                <div class="footer-column">
                    <h4>{"Navigasi"}</h4>
                    <Link<Route> to={Route::Home}>{"Beranda"}</Link<Route>>
                    <Link<Route> to={Route::About}>{"Tentang"}</Link<Route>>
                    <Link<Route> to={Route::Services}>{"Layanan"}</Link<Route>>
                    <Link<Route> to={Route::Portfolio}>{"Portfolio"}</Link<Route>>
                    <Link<Route> to={Route::Blog}>{"Blog"}</Link<Route>>
                </div>
                <div class="footer-column">
                    <h4>{"Layanan"}</h4>
                    <span>{"Website Development"}</span>
                    <span>{"Hosting & Domain"}</span>
                    <span>{"Instalasi CCTV"}</span>
                    <span>{"IT Support"}</span>
                    <span>{"Cloud Solutions"}</span>
                </div>
                <div class="footer-column">
                    <h4>{"Kontak"}</h4>
                    <a href="mailto:artdevata@gmail.com">{"artdevata@gmail.com"}</a>
                    <a href="tel:+6281234567890">{"+62 812-3456-7890"}</a>
                    <span>{"Bali, Indonesia"}</span>
                    <span>{"Senin - Jumat: 09:00 - 17:00"}</span>
                </div>
            </div>
            <div class="footer-bottom">
                {"© 2025 ArtDevata. Seluruh hak cipta dilindungi."}
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #0d1b3e;
                    color: rgba(255, 255, 255, 0.85);
                    padding: 3rem 2rem 1.5rem;
                }
                .footer-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 2rem;
                }
                .footer-column {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .footer-column h3 {
                    font-size: 1.4rem;
                    color: #ffffff;
                    margin: 0 0 0.5rem;
                }
                .footer-column h4 {
                    font-size: 1rem;
                    color: #ffffff;
                    margin: 0 0 0.5rem;
                }
                .footer-column p {
                    margin: 0;
                    font-size: 0.9rem;
                    line-height: 1.6;
                    color: rgba(255, 255, 255, 0.65);
                }
                .footer-column a, .footer-column span {
                    color: rgba(255, 255, 255, 0.65);
                    text-decoration: none;
                    font-size: 0.9rem;
                }
                .footer-column a:hover {
                    color: #f59e0b;
                }
                .footer-bottom {
                    max-width: 1200px;
                    margin: 2rem auto 0;
                    padding-top: 1.25rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.12);
                    text-align: center;
                    font-size: 0.85rem;
                    color: rgba(255, 255, 255, 0.5);
                }
                "#}
            </style>
        </footer>
    }
}
