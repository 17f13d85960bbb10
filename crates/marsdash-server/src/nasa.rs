//! NASA API client.
//!
//! One struct over the shared HTTP client, holding the API key and base URL.
//! The base is overridable via `NASA_API_URL` so tests and local stubs can
//! point it elsewhere. Query strings are composed by hand in the parameter
//! order the Mars Photos API documents: sol, page, api_key, then filters.

use marsdash_core::RouteParams;
use marsdash_types::{Apod, MarsPhotosResponse, Photo};

use crate::error::AppError;

pub const NASA_API: &str = "https://api.nasa.gov";

/// Rovers the Mars Photos endpoint accepts.
pub const ROVERS: [&str; 3] = ["curiosity", "opportunity", "spirit"];

/// The gallery is pinned to this Martian day; filters narrow it further.
const SOL: u64 = 1000;

pub struct NasaClient {
    http: reqwest::Client,
    api_key: String,
    base: String,
}

impl NasaClient {
    pub fn new(http: reqwest::Client, api_key: String, base: String) -> Self {
        Self { http, api_key, base }
    }

    fn apod_url(&self) -> String {
        format!("{}/planetary/apod?api_key={}", self.base, self.api_key)
    }

    fn photos_url(&self, rover: &str, params: &RouteParams) -> String {
        let mut url = format!(
            "{}/mars-photos/api/v1/rovers/{}/photos?sol={}&page={}&api_key={}",
            self.base, rover, SOL, params.page_number, self.api_key
        );
        if let Some(camera) = &params.camera {
            url.push_str("&camera=");
            url.push_str(camera);
        }
        if let Some(date) = &params.earth_date {
            url.push_str("&earth_date=");
            url.push_str(date);
        }
        url
    }

    /// Fetch today's Astronomy Picture of the Day.
    pub async fn apod(&self) -> Result<Apod, AppError> {
        let resp = self.http.get(self.apod_url()).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!("nasa apod: {} {}", status, text)));
        }

        resp.json()
            .await
            .map_err(|e| AppError::Upstream(format!("nasa apod parse: {}", e)))
    }

    /// Fetch one page of rover photos. `rover` must already be lowercased.
    pub async fn photos(&self, rover: &str, params: &RouteParams) -> Result<Vec<Photo>, AppError> {
        let resp = self.http.get(self.photos_url(rover, params)).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "nasa photos ({}): {} {}",
                rover, status, text
            )));
        }

        let body: MarsPhotosResponse = resp
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("nasa photos parse: {}", e)))?;
        Ok(body.photos)
    }
}
