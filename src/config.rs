#[cfg(debug_assertions)]
pub fn get_api_url() -> &'static str {
    "http://localhost:8000/api"  // Local CMS when developing
}

#[cfg(not(debug_assertions))]
pub fn get_api_url() -> &'static str {
    "https://admin.artdevata.net/api"
}

#[cfg(debug_assertions)]
pub fn get_storage_url() -> &'static str {
    "http://localhost:8000/storage/"
}

#[cfg(not(debug_assertions))]
pub fn get_storage_url() -> &'static str {
    "https://admin.artdevata.net/storage/"
}

pub fn get_form_relay_url() -> &'static str {
    "https://formsubmit.co/ajax/artdevata@gmail.com"
}

pub const PAGE_SIZE: usize = 9;
pub const WORDS_PER_MINUTE: usize = 200;
pub const RELATED_LIMIT: usize = 5;
pub const CLIENTS_REFRESH_MS: u32 = 30_000;

pub const WHATSAPP_NUMBER: &str = "6281234567890";
pub const WHATSAPP_GREETING: &str = "Halo, saya tertarik dengan layanan ArtDevata";
