//! The lesson content resolver.
//!
//! Posts (module, lesson) to a remote webhook and picks the matching record
//! out of the returned array. Lesson numbers on the wire are 1-based.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AppError, Result};

/// Resolved content for one lesson.
///
/// `video_url` is absent when the record carries no usable URL (missing or
/// not a JSON string); `mindmap` is additionally absent when blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonContent {
    /// The lesson's video URL, if any.
    pub video_url: Option<String>,
    /// Supplementary mind-map document URL, if any.
    pub mindmap: Option<String>,
}

/// Client for the lesson-content webhook.
pub struct LessonContentClient {
    http: reqwest::Client,
    endpoint: String,
}

impl LessonContentClient {
    /// Create a client for the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Create a client reusing an existing HTTP client.
    pub fn with_client(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Fetch content for a lesson.
    ///
    /// `lesson` is the 1-BASED lesson number. Returns `Ok(None)` when the
    /// response holds no record matching both fields.
    pub async fn fetch(&self, module: u32, lesson: u32) -> Result<Option<LessonContent>> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&serde_json::json!({ "module": module, "lesson": lesson }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::ContentStatus(response.status().as_u16()));
        }

        let body: serde_json::Value = response.json().await?;
        let records = body
            .as_array()
            .ok_or_else(|| AppError::BadResponse("expected a JSON array".into()))?;

        let matched = records.iter().find(|record| {
            record.get("module").and_then(|v| v.as_u64()) == Some(u64::from(module))
                && record.get("lesson").and_then(|v| v.as_u64()) == Some(u64::from(lesson))
        });

        let Some(record) = matched else {
            debug!(module, lesson, "no content record for lesson");
            return Ok(None);
        };

        // Only string URLs count; a blank mindmap means "none".
        let video_url = record
            .get("url")
            .and_then(|v| v.as_str())
            .map(str::to_string);
        let mindmap = record
            .get("mindmap")
            .and_then(|v| v.as_str())
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string);

        Ok(Some(LessonContent { video_url, mindmap }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client(server: &MockServer) -> LessonContentClient {
        LessonContentClient::new(format!("{}/content", server.uri()))
    }

    #[tokio::test]
    async fn test_selects_matching_record_and_drops_blank_mindmap() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/content"))
            .and(body_json(serde_json::json!({"module": 1, "lesson": 2})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"module": 1, "lesson": 2, "url": "https://x/video.mp4", "mindmap": ""}
            ])))
            .mount(&server)
            .await;

        let content = client(&server).await.fetch(1, 2).await.unwrap().unwrap();
        assert_eq!(content.video_url.as_deref(), Some("https://x/video.mp4"));
        assert_eq!(content.mindmap, None);
    }

    #[tokio::test]
    async fn test_whitespace_mindmap_is_absent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/content"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"module": 0, "lesson": 1, "url": "https://x/v.mp4", "mindmap": "   "}
            ])))
            .mount(&server)
            .await;

        let content = client(&server).await.fetch(0, 1).await.unwrap().unwrap();
        assert_eq!(content.mindmap, None);
    }

    #[tokio::test]
    async fn test_mindmap_kept_when_present() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/content"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"module": 0, "lesson": 1, "url": "https://x/v.mp4", "mindmap": "https://x/map.pdf"}
            ])))
            .mount(&server)
            .await;

        let content = client(&server).await.fetch(0, 1).await.unwrap().unwrap();
        assert_eq!(content.mindmap.as_deref(), Some("https://x/map.pdf"));
    }

    #[tokio::test]
    async fn test_record_must_match_both_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/content"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"module": 1, "lesson": 3, "url": "https://x/other.mp4", "mindmap": ""}
            ])))
            .mount(&server)
            .await;

        assert!(client(&server).await.fetch(1, 2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_non_string_url_is_absent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/content"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"module": 0, "lesson": 1, "url": 123, "mindmap": ""}
            ])))
            .mount(&server)
            .await;

        let content = client(&server).await.fetch(0, 1).await.unwrap().unwrap();
        assert_eq!(content.video_url, None);
    }

    #[tokio::test]
    async fn test_non_array_body_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/content"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"oops": true})),
            )
            .mount(&server)
            .await;

        let err = client(&server).await.fetch(0, 1).await.unwrap_err();
        assert!(matches!(err, AppError::BadResponse(_)));
    }

    #[tokio::test]
    async fn test_non_ok_status_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/content"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let err = client(&server).await.fetch(0, 1).await.unwrap_err();
        assert!(matches!(err, AppError::ContentStatus(502)));
    }
}
