//! Remote expert and project data. Every call has a bundled fallback so the
//! marketing pages still render when the API is down.

use gloo_net::http::Request;
use log::warn;
use serde::Deserialize;
use thiserror::Error;

use crate::config;
use crate::data::{self, ProjectSummary};
use crate::listing::OpinionRecord;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("server responded with status {0}")]
    Status(u16),
}

#[derive(Deserialize)]
struct Page<T> {
    data: Vec<T>,
}

#[derive(Deserialize)]
struct ExpertResponse {
    id: i32,
    name: String,
    #[serde(default)]
    title: String,
    opinion: Option<String>,
    bio: Option<String>,
    photo: Option<String>,
}

impl From<ExpertResponse> for OpinionRecord {
    fn from(expert: ExpertResponse) -> Self {
        OpinionRecord {
            id: expert.id,
            name: expert.name,
            title: expert.title,
            opinion: expert.opinion.or(expert.bio).unwrap_or_default(),
            image: expert.photo.unwrap_or_default(),
        }
    }
}

async fn get_page<T: for<'de> Deserialize<'de>>(path: &str) -> Result<Vec<T>, ApiError> {
    let response = Request::get(&format!("{}{}", config::get_backend_url(), path))
        .send()
        .await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    let page: Page<T> = response.json().await?;
    Ok(page.data)
}

pub async fn fetch_experts(limit: usize) -> Result<Vec<OpinionRecord>, ApiError> {
    let experts: Vec<ExpertResponse> = get_page(&format!("/api/experts?limit={}", limit)).await?;
    Ok(experts.into_iter().map(OpinionRecord::from).collect())
}

pub async fn fetch_trending_projects() -> Result<Vec<ProjectSummary>, ApiError> {
    get_page("/api/projects/trending").await
}

/// Fetched experts, or the bundled featured opinions when the call fails or
/// comes back empty.
pub async fn experts_or_bundled(limit: usize) -> Vec<OpinionRecord> {
    let fetched = fetch_experts(limit).await;
    or_bundled(fetched, "experts", || {
        data::featured_opinions().into_iter().take(limit).collect()
    })
}

pub async fn trending_projects_or_bundled() -> Vec<ProjectSummary> {
    let fetched = fetch_trending_projects().await;
    or_bundled(fetched, "trending projects", data::trending_projects)
}

fn or_bundled<T>(
    fetched: Result<Vec<T>, ApiError>,
    what: &str,
    bundled: impl FnOnce() -> Vec<T>,
) -> Vec<T> {
    match fetched {
        Ok(items) if !items.is_empty() => items,
        Ok(_) => bundled(),
        Err(e) => {
            warn!("Failed to load {}: {}, using bundled data", what, e);
            bundled()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expert_payload_maps_to_records() {
        let page: Page<ExpertResponse> = serde_json::from_str(
            r#"{"data":[
                {"id":11,"name":"Ada","title":"Rail","opinion":"<p>Build</p>","photo":"/a.jpg"},
                {"id":12,"name":"Obi","bio":"Engineer"}
            ]}"#,
        )
        .expect("valid payload");
        let records: Vec<OpinionRecord> = page.data.into_iter().map(OpinionRecord::from).collect();

        assert_eq!(records[0].opinion, "<p>Build</p>");
        assert_eq!(records[0].image, "/a.jpg");
        assert_eq!(records[1].opinion, "Engineer");
        assert_eq!(records[1].title, "");
        assert_eq!(records[1].image, "");
    }

    #[test]
    fn empty_or_failed_fetch_uses_bundled_data() {
        let bundled = || vec![1, 2];
        assert_eq!(or_bundled(Ok(vec![7]), "numbers", bundled), vec![7]);
        assert_eq!(or_bundled(Ok(Vec::new()), "numbers", bundled), vec![1, 2]);
        assert_eq!(
            or_bundled(Err(ApiError::Status(503)), "numbers", bundled),
            vec![1, 2]
        );
    }
}
