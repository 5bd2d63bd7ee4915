use gloo_net::http::Request;
use serde_json::Value;

use super::detail::DetailState;
use super::model::{self, BlogPost, ClientLogo, PortfolioEntry, ServiceOffering};
use crate::config;

enum FetchError {
    Missing,
    Transport,
}

/// Single attempt, no retry. Transport problems and undecodable bodies
/// are logged here and never surface past this module as errors.
async fn get_json(url: &str) -> Result<Value, FetchError> {
    match Request::get(url).send().await {
        Ok(response) => {
            if response.status() == 404 {
                return Err(FetchError::Missing);
            }
            if !response.ok() {
                gloo_console::error!("Content request failed with status:", response.status());
                return Err(FetchError::Transport);
            }
            match response.json::<Value>().await {
                Ok(json) => Ok(json),
                Err(e) => {
                    gloo_console::error!("Content response was not valid JSON:", e.to_string());
                    Err(FetchError::Transport)
                }
            }
        }
        Err(e) => {
            gloo_console::error!("Content request failed:", e.to_string());
            Err(FetchError::Transport)
        }
    }
}

async fn collection<T>(url: &str, from: fn(&Value) -> Option<T>) -> Vec<T> {
    match get_json(url).await {
        Ok(json) => model::normalize_collection(&json, from),
        Err(_) => Vec::new(),
    }
}

async fn detail<T>(url: &str, from: fn(&Value) -> Option<T>) -> DetailState<T> {
    match get_json(url).await {
        Ok(json) => {
            let record = model::unwrap_record(&json);
            match from(&record) {
                Some(item) => DetailState::Found(item),
                None => DetailState::NotFound,
            }
        }
        Err(FetchError::Missing) => DetailState::NotFound,
        Err(FetchError::Transport) => DetailState::Error,
    }
}

pub async fn blog_posts() -> Vec<BlogPost> {
    collection(
        &format!("{}/blogs", config::get_api_url()),
        BlogPost::from_value,
    )
    .await
}

pub async fn blog_post(id: &str) -> DetailState<BlogPost> {
    detail(
        &format!("{}/blogs/{}", config::get_api_url(), id),
        BlogPost::from_value,
    )
    .await
}

pub async fn portfolio_entries() -> Vec<PortfolioEntry> {
    collection(
        &format!("{}/portfolios", config::get_api_url()),
        PortfolioEntry::from_value,
    )
    .await
}

pub async fn portfolio_entry(id: &str) -> DetailState<PortfolioEntry> {
    detail(
        &format!("{}/portfolios/{}", config::get_api_url(), id),
        PortfolioEntry::from_value,
    )
    .await
}

pub async fn service_offerings() -> Vec<ServiceOffering> {
    collection(
        &format!("{}/services", config::get_api_url()),
        ServiceOffering::from_value,
    )
    .await
}

pub async fn client_logos() -> Vec<ClientLogo> {
    collection(
        &format!("{}/clients", config::get_api_url()),
        ClientLogo::from_value,
    )
    .await
}
