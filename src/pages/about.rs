use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
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

    let values = [
        (
            "Kolaborasi",
            "Kami bekerja berdampingan dengan klien di setiap tahap project.",
        ),
        (
            "Inovasi",
            "Teknologi terbaru kami terapkan untuk solusi yang relevan dan tahan lama.",
        ),
        (
            "Kualitas",
            "Setiap deliverable melewati standar pengujian yang ketat.",
        ),
        (
            "Dedikasi",
            "Dukungan tidak berhenti saat project selesai; kami menemani pertumbuhan Anda.",
        ),
    ];

    html! {
        <div class="about-page">
            <section class="about-hero">
                <h1>{"Tentang ArtDevata"}</h1>
                <p>{"Partner transformasi digital untuk bisnis di Bali dan sekitarnya"}</p>
            </section>
            <section class="about-story">
                <h2>{"Siapa Kami"}</h2>
                <p>
                    {"ArtDevata adalah penyedia solusi IT terpadu yang berfokus pada pengembangan website, \
                      hosting & domain, instalasi CCTV, dan dukungan teknis. Berangkat dari keyakinan bahwa \
                      teknologi harus mudah diakses oleh bisnis skala apa pun, kami menemani UMKM hingga \
                      perusahaan enterprise membangun fondasi digital mereka."}
                </p>
                <p>
                    {"Tim kami menggabungkan pengalaman teknis dengan pemahaman bisnis lokal, sehingga setiap \
                      solusi yang kami rancang menjawab kebutuhan nyata, bukan sekadar mengikuti tren."}
                </p>
            </section>
            <section class="about-values">
                <h2>{"Nilai yang Kami Pegang"}</h2>
                <div class="values-grid">
                    { for values.iter().map(|(title, description)| html! {
                        <div key={*title} class="value-card">
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </div>
                    }) }
                </div>
            </section>
            <style>
                {r#"
                .about-page {
                    min-height: 100vh;
                    background: #f8fafc;
                    padding-bottom: 4rem;
                }
                .about-hero {
                    padding: 8rem 2rem 5rem;
                    text-align: center;
                    background: linear-gradient(135deg, #0d1b3e, #16295e);
                    color: #ffffff;
                }
                .about-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }
                .about-hero p {
                    font-size: 1.2rem;
                    opacity: 0.9;
                }
                .about-story {
                    max-width: 800px;
                    margin: 3.5rem auto 0;
                    padding: 0 2rem;
                }
                .about-story h2 {
                    font-size: 2rem;
                    color: #0d1b3e;
                    margin-bottom: 1.25rem;
                }
                .about-story p {
                    color: #475569;
                    line-height: 1.9;
                    margin-bottom: 1.25rem;
                }
                .about-values {
                    max-width: 1100px;
                    margin: 3.5rem auto 0;
                    padding: 0 2rem;
                    text-align: center;
                }
                .about-values h2 {
                    font-size: 2rem;
                    color: #0d1b3e;
                    margin-bottom: 2rem;
                }
                .values-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                }
                .value-card {
                    background: #ffffff;
                    border-radius: 12px;
                    padding: 1.75rem;
                    box-shadow: 0 2px 10px rgba(13, 27, 62, 0.08);
                    text-align: left;
                }
                .value-card h3 {
                    color: #0d1b3e;
                    margin: 0 0 0.5rem;
                }
                .value-card p {
                    color: #64748b;
                    margin: 0;
                    line-height: 1.7;
                }
                @media (max-width: 768px) {
                    .about-hero h1 {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
