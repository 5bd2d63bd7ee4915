use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    answer: String,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            {
                if *is_open {
                    html! { <div class="faq-answer"><p>{&props.answer}</p></div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
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

    let faqs = [
        (
            "Apa itu ArtDevata?",
            "ArtDevata adalah penyedia solusi IT terpadu yang menyediakan layanan pengembangan website, hosting & domain, instalasi CCTV, dan IT support untuk mendukung transformasi digital bisnis Anda.",
        ),
        (
            "Berapa lama waktu pengerjaan website?",
            "Waktu pengerjaan website bervariasi tergantung kompleksitas proyek. Untuk website company profile standar, biasanya memakan waktu 2-4 minggu. Website e-commerce atau custom aplikasi web bisa memakan waktu 1-3 bulan.",
        ),
        (
            "Apakah ada garansi untuk layanan yang diberikan?",
            "Ya, kami memberikan garansi untuk semua layanan kami. Untuk pengembangan website, kami memberikan garansi 3 bulan untuk bug fixing. Untuk instalasi CCTV, kami memberikan garansi 1 tahun untuk hardware dan instalasi.",
        ),
        (
            "Apakah bisa konsultasi gratis?",
            "Tentu! Kami menyediakan konsultasi gratis untuk semua calon klien. Anda bisa menghubungi kami melalui WhatsApp, email, atau mengisi form kontak di website kami.",
        ),
        (
            "Bagaimana cara pemesanan layanan?",
            "Anda bisa menghubungi kami melalui form kontak, WhatsApp, atau email. Tim kami akan segera merespons dan melakukan diskusi mengenai kebutuhan Anda. Setelah itu, kami akan memberikan proposal dan penawaran harga.",
        ),
        (
            "Apakah ada paket bundling untuk beberapa layanan?",
            "Ya, kami menyediakan paket bundling yang lebih hemat untuk klien yang mengambil lebih dari satu layanan. Misalnya, paket website + hosting, atau CCTV + IT support.",
        ),
        (
            "Apakah tersedia layanan maintenance?",
            "Ya, kami menyediakan layanan maintenance bulanan untuk website, hosting, dan CCTV. Layanan ini mencakup monitoring, update, backup rutin, dan support teknis prioritas.",
        ),
    ];

    html! {
        <div class="faq-page">
            <section class="faq-hero">
                <h1>{"Pertanyaan yang Sering Diajukan"}</h1>
                <p>{"Jawaban atas hal-hal yang paling sering ditanyakan klien kami"}</p>
            </section>
            <section class="faq-section">
                { for faqs.iter().map(|(question, answer)| html! {
                    <FaqItem key={*question} question={question.to_string()} answer={answer.to_string()} />
                }) }
            </section>
            <style>
                {r#"
                .faq-page {
                    min-height: 100vh;
                    background: #f8fafc;
                    padding-bottom: 4rem;
                }
                .faq-hero {
                    padding: 8rem 2rem 5rem;
                    text-align: center;
                    background: linear-gradient(135deg, #0d1b3e, #16295e);
                    color: #ffffff;
                }
                .faq-hero h1 {
                    font-size: 2.75rem;
                    margin-bottom: 1rem;
                }
                .faq-hero p {
                    font-size: 1.15rem;
                    opacity: 0.9;
                }
                .faq-section {
                    max-width: 800px;
                    margin: 3rem auto 0;
                    padding: 0 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .faq-item {
                    background: #ffffff;
                    border-radius: 12px;
                    box-shadow: 0 2px 10px rgba(13, 27, 62, 0.08);
                    overflow: hidden;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    background: none;
                    border: none;
                    padding: 1.25rem 1.5rem;
                    cursor: pointer;
                    text-align: left;
                }
                .question-text {
                    color: #0d1b3e;
                    font-size: 1.05rem;
                    font-weight: 600;
                }
                .toggle-icon {
                    color: #b45309;
                    font-size: 1.4rem;
                }
                .faq-answer {
                    padding: 0 1.5rem 1.25rem;
                }
                .faq-answer p {
                    margin: 0;
                    color: #475569;
                    line-height: 1.8;
                }
                @media (max-width: 768px) {
                    .faq-hero h1 {
                        font-size: 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
