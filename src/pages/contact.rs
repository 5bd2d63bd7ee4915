use gloo_net::http::Request;
use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;

#[derive(Serialize)]
struct ContactRequest {
    name: String,
    email: String,
    phone: String,
    service: String,
    message: String,
    #[serde(rename = "_subject")]
    subject: String,
    #[serde(rename = "_template")]
    template: String,
}

const SERVICE_OPTIONS: [(&str, &str); 6] = [
    ("website", "Website Development"),
    ("hosting", "Hosting & Domain"),
    ("cctv", "CCTV Installation"),
    ("support", "IT Support"),
    ("cloud", "Cloud Solutions"),
    ("other", "Lainnya"),
];

#[function_component(Contact)]
pub fn contact() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let service = use_state(String::new);
    let message = use_state(String::new);
    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);

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

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let service = service.clone();
        let message = message.clone();
        let submitting = submitting.clone();
        let error_setter = error.clone();
        let success_setter = success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let name_value = (*name).clone();
            let email_value = (*email).clone();
            let phone_value = (*phone).clone();
            let service_value = (*service).clone();
            let message_value = (*message).clone();

            if name_value.trim().is_empty()
                || email_value.trim().is_empty()
                || message_value.trim().is_empty()
            {
                error_setter.set(Some(
                    "Mohon lengkapi nama, email, dan pesan Anda.".to_string(),
                ));
                return;
            }

            submitting.set(true);
            let name = name.clone();
            let email = email.clone();
            let phone = phone.clone();
            let service = service.clone();
            let message = message.clone();
            let submitting = submitting.clone();
            let error_setter = error_setter.clone();
            let success_setter = success_setter.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let body = ContactRequest {
                    subject: format!("Pesan Baru dari {} - Art Devata", name_value),
                    template: "table".to_string(),
                    name: name_value,
                    email: email_value,
                    phone: phone_value,
                    service: service_value,
                    message: message_value,
                };
                match Request::post(config::get_form_relay_url())
                    .header("Accept", "application/json")
                    .json(&body)
                    .unwrap()
                    .send()
                    .await
                {
                    Ok(response) if response.ok() => {
                        error_setter.set(None);
                        success_setter.set(Some(
                            "Pesan terkirim! Terima kasih, kami akan segera menghubungi Anda."
                                .to_string(),
                        ));
                        name.set(String::new());
                        email.set(String::new());
                        phone.set(String::new());
                        service.set(String::new());
                        message.set(String::new());
                    }
                    Ok(response) => {
                        gloo_console::error!("Form relay rejected request:", response.status());
                        success_setter.set(None);
                        error_setter.set(Some(
                            "Gagal mengirim pesan, silakan coba lagi atau hubungi kami langsung."
                                .to_string(),
                        ));
                    }
                    Err(e) => {
                        gloo_console::error!("Form relay request failed:", e.to_string());
                        success_setter.set(None);
                        error_setter.set(Some(
                            "Terjadi kesalahan jaringan, silakan coba lagi nanti.".to_string(),
                        ));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="contact-page">
            <section class="contact-hero">
                <h1>{"Hubungi Kami"}</h1>
                <p>{"Mari diskusikan bagaimana kami dapat membantu bisnis Anda berkembang"}</p>
            </section>
            <section class="contact-layout">
                <div class="contact-form-card">
                    <h2>{"Kirim Pesan"}</h2>
                    {
                        if let Some(error_message) = (*error).as_ref() {
                            html! { <div class="form-note error">{error_message}</div> }
                        } else if let Some(success_message) = (*success).as_ref() {
                            html! { <div class="form-note success">{success_message}</div> }
                        } else {
                            html! {}
                        }
                    }
                    <form onsubmit={onsubmit}>
                        <input
                            type="text"
                            placeholder="Nama Lengkap"
                            value={(*name).clone()}
                            onchange={let name = name.clone(); move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                name.set(input.value());
                            }}
                        />
                        <input
                            type="email"
                            placeholder="Email"
                            value={(*email).clone()}
                            onchange={let email = email.clone(); move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                email.set(input.value());
                            }}
                        />
                        <input
                            type="tel"
                            placeholder="Nomor Telepon"
                            value={(*phone).clone()}
                            onchange={let phone = phone.clone(); move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                phone.set(input.value());
                            }}
                        />
                        <select
                            onchange={let service = service.clone(); move |e: Event| {
                                let select: HtmlSelectElement = e.target_unchecked_into();
                                service.set(select.value());
                            }}
                        >
                            <option value="" selected={service.is_empty()}>{"Pilih Layanan"}</option>
                            { for SERVICE_OPTIONS.iter().map(|(value, label)| html! {
                                <option value={*value} selected={*service == *value}>{*label}</option>
                            }) }
                        </select>
                        <textarea
                            placeholder="Ceritakan tentang project Anda..."
                            value={(*message).clone()}
                            onchange={let message = message.clone(); move |e: Event| {
                                let area: HtmlTextAreaElement = e.target_unchecked_into();
                                message.set(area.value());
                            }}
                        />
                        <button type="submit" disabled={*submitting}>
                            { if *submitting { "Mengirim..." } else { "Kirim Pesan" } }
                        </button>
                    </form>
                </div>
                <div class="contact-info">
                    <h2>{"Informasi Kontak"}</h2>
                    <p>
                        {"Kami siap membantu mewujudkan visi digital Anda. Hubungi kami melalui berbagai channel yang tersedia."}
                    </p>
                    <div class="info-cards">
                        <div class="info-card">
                            <h3>{"Email"}</h3>
                            <a href="mailto:artdevata@gmail.com">{"artdevata@gmail.com"}</a>
                        </div>
                        <div class="info-card">
                            <h3>{"Telepon"}</h3>
                            <a href="tel:+6281234567890">{"+62 812-3456-7890"}</a>
                        </div>
                        <div class="info-card">
                            <h3>{"Alamat"}</h3>
                            <span>{"Bali, Indonesia"}</span>
                        </div>
                        <div class="info-card">
                            <h3>{"Jam Kerja"}</h3>
                            <span>{"Senin - Jumat: 09:00 - 17:00"}</span>
                        </div>
                    </div>
                </div>
            </section>
            <style>
                {r#"
                .contact-page {
                    min-height: 100vh;
                    background: #f8fafc;
                    padding-bottom: 4rem;
                }
                .contact-hero {
                    padding: 8rem 2rem 5rem;
                    text-align: center;
                    background: linear-gradient(135deg, #0d1b3e, #16295e);
                    color: #ffffff;
                }
                .contact-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }
                .contact-hero p {
                    font-size: 1.2rem;
                    opacity: 0.9;
                }
                .contact-layout {
                    max-width: 1100px;
                    margin: 3rem auto 0;
                    padding: 0 2rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2.5rem;
                    align-items: start;
                }
                .contact-form-card {
                    background: #ffffff;
                    border-radius: 14px;
                    padding: 2rem;
                    box-shadow: 0 4px 20px rgba(13, 27, 62, 0.08);
                }
                .contact-form-card h2 {
                    color: #0d1b3e;
                    margin: 0 0 1.25rem;
                }
                .form-note {
                    padding: 0.75rem 1rem;
                    border-radius: 8px;
                    margin-bottom: 1rem;
                    font-size: 0.9rem;
                }
                .form-note.error {
                    background: rgba(220, 38, 38, 0.1);
                    color: #b91c1c;
                }
                .form-note.success {
                    background: rgba(22, 163, 74, 0.1);
                    color: #15803d;
                }
                .contact-form-card form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .contact-form-card input,
                .contact-form-card select,
                .contact-form-card textarea {
                    border: 1px solid #cbd5e1;
                    border-radius: 8px;
                    padding: 0.75rem 1rem;
                    font-size: 0.95rem;
                    color: #0f172a;
                    background: #ffffff;
                }
                .contact-form-card textarea {
                    min-height: 150px;
                    resize: none;
                }
                .contact-form-card button {
                    background: #0d1b3e;
                    color: #ffffff;
                    border: none;
                    padding: 0.8rem;
                    border-radius: 8px;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .contact-form-card button:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }
                .contact-info h2 {
                    color: #0d1b3e;
                    margin: 0 0 0.75rem;
                }
                .contact-info > p {
                    color: #64748b;
                    line-height: 1.8;
                    margin-bottom: 1.5rem;
                }
                .info-cards {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .info-card {
                    background: #ffffff;
                    border-radius: 12px;
                    padding: 1.25rem;
                    box-shadow: 0 2px 10px rgba(13, 27, 62, 0.08);
                }
                .info-card h3 {
                    margin: 0 0 0.4rem;
                    font-size: 0.95rem;
                    color: #0d1b3e;
                }
                .info-card a, .info-card span {
                    color: #64748b;
                    font-size: 0.9rem;
                    text-decoration: none;
                }
                .info-card a:hover {
                    color: #b45309;
                }
                @media (max-width: 900px) {
                    .contact-layout {
                        grid-template-columns: 1fr;
                    }
                    .contact-hero h1 {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
