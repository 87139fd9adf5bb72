//! Habit Backend Client
//!
//! One method per endpoint. All bodies are JSON.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::models::{
    AskAnswer, AskRequest, Habit, NewHabit, NewProgress, ProgressSummary, RecordId, Resource,
    RoadmapItem,
};

/// Characters escaped when an id is placed in a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn segment(id: &RecordId) -> String {
    utf8_percent_encode(&id.to_string(), PATH_SEGMENT).to_string()
}

#[derive(Debug, Clone)]
pub struct HabitApi {
    http: Client,
    config: ApiConfig,
}

impl HabitApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    // ========================
    // Habits
    // ========================

    pub async fn list_habits(&self) -> Result<Vec<Habit>> {
        self.get("/api/habits").await
    }

    /// Any 2xx counts as created. The body may be a partial record (or
    /// empty), so it is not decoded; callers reload the list instead.
    pub async fn create_habit(&self, habit: &NewHabit) -> Result<()> {
        self.acknowledge("/api/habits", habit).await
    }

    pub async fn roadmap(&self, habit_id: &RecordId) -> Result<Vec<RoadmapItem>> {
        self.get(&format!("/api/habits/{}/roadmap", segment(habit_id)))
            .await
    }

    pub async fn resources(&self, habit_id: &RecordId) -> Result<Vec<Resource>> {
        self.get(&format!("/api/habits/{}/resources", segment(habit_id)))
            .await
    }

    // ========================
    // Ask AI
    // ========================

    pub async fn ask(&self, request: &AskRequest<'_>) -> Result<AskAnswer> {
        self.post("/api/ask", request).await
    }

    // ========================
    // Progress
    // ========================

    pub async fn progress(&self, habit_id: &RecordId) -> Result<ProgressSummary> {
        self.get(&format!("/api/progress/{}", segment(habit_id))).await
    }

    /// The acknowledgement body is ignored; only the status matters.
    pub async fn add_progress(&self, entry: &NewProgress<'_>) -> Result<()> {
        self.acknowledge("/api/progress", entry).await
    }

    // ========================
    // Transport
    // ========================

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.config.endpoint(path);
        tracing::debug!(%url, "GET");
        let body = self.send(self.http.get(&url), &url).await?;
        decode(&body, &url)
    }

    async fn post<B, T>(&self, path: &str, payload: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        tracing::debug!(%url, "POST");
        let body = self.send(self.http.post(&url).json(payload), &url).await?;
        decode(&body, &url)
    }

    /// POST where only the status matters.
    async fn acknowledge<B: Serialize + ?Sized>(&self, path: &str, payload: &B) -> Result<()> {
        let url = self.config.endpoint(path);
        tracing::debug!(%url, "POST");
        self.send(self.http.post(&url).json(payload), &url).await?;
        Ok(())
    }

    /// Send and return the body text of a 2xx response.
    async fn send(&self, request: RequestBuilder, url: &str) -> Result<String> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(%url, error = %e, "request failed");
            ApiError::from(e)
        })?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "non-success status");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

fn decode<T: DeserializeOwned>(body: &str, url: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| {
        tracing::warn!(%url, error = %e, "malformed response body");
        ApiError::from(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_escaped_in_paths() {
        assert_eq!(segment(&RecordId::Number(12)), "12");
        assert_eq!(segment(&RecordId::from("a/b c")), "a%2Fb%20c");
    }

    #[test]
    fn decode_reports_shape_mismatch() {
        let err = decode::<Vec<Habit>>(r#"{"not":"a list"}"#, "http://x").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
