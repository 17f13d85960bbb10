//! marsdash-types — Shared NASA wire types for the marsdash crates
//!
//! This crate defines the canonical Rust representation of the payloads the
//! dashboard moves around: the APOD payload, Mars rover photos, and the two
//! proxy response envelopes. The store, the views, and the server all
//! consume these types.

use serde::{Deserialize, Serialize};

/// One Astronomy Picture of the Day payload.
///
/// Mirrors the JSON returned by NASA's `planetary/apod` endpoint. `media_type`
/// is `"image"` or `"video"`; for videos `url` points at the video page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Apod {
    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub explanation: String,

    #[serde(default)]
    pub media_type: String,

    #[serde(default)]
    pub url: String,

    /// High-resolution variant, only present for images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdurl: Option<String>,
}

/// Camera metadata embedded in a photo record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoCamera {
    pub name: String,

    #[serde(default)]
    pub full_name: String,
}

/// One entry of a rover's camera list (used to build the camera filter).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoverCamera {
    pub name: String,

    #[serde(default)]
    pub full_name: String,
}

/// Rover metadata as NASA embeds it in every photo record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoverData {
    pub name: String,

    #[serde(default)]
    pub launch_date: String,

    #[serde(default)]
    pub landing_date: String,

    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub total_photos: u64,

    #[serde(default)]
    pub cameras: Vec<RoverCamera>,
}

/// A single Mars rover photo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    #[serde(default)]
    pub id: u64,

    #[serde(default)]
    pub sol: u64,

    pub img_src: String,

    #[serde(default)]
    pub earth_date: String,

    pub camera: PhotoCamera,

    pub rover: RoverData,
}

/// The raw body of NASA's `mars-photos` rovers endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarsPhotosResponse {
    #[serde(default)]
    pub photos: Vec<Photo>,
}

/// Proxy envelope for `GET /apod`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApodEnvelope {
    pub image: Apod,
}

/// Proxy envelope for `GET /rover/{roverName}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoverEnvelope {
    #[serde(rename = "roverData")]
    pub rover_data: RoverData,

    pub photos: Vec<Photo>,
}

impl Apod {
    pub fn is_video(&self) -> bool {
        self.media_type == "video"
    }
}

/// Split a photo list into rover metadata and photos.
///
/// The rover object is lifted off the first photo (every photo embeds the
/// same rover record). `None` when the list is empty.
pub fn rover_payload(photos: Vec<Photo>) -> Option<RoverEnvelope> {
    let rover_data = photos.first()?.rover.clone();
    Some(RoverEnvelope { rover_data, photos })
}

/// Parse an APOD payload from a JSON string.
pub fn parse_apod(json: &str) -> Result<Apod, serde_json::Error> {
    serde_json::from_str(json)
}

/// Parse a Mars photos response body from a JSON string.
pub fn parse_mars_photos(json: &str) -> Result<MarsPhotosResponse, serde_json::Error> {
    serde_json::from_str(json)
}
