//! # Students API Client
//!
//! Typed CRUD operations over the `students` resource. Each call is a direct
//! request/response mapping: no retries, no optimistic concurrency, no
//! transformation beyond (de)serialization. Updates are blind full-record
//! overwrites.

use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::{ApiError, ValidationEnvelope};
use crate::models::{Student, StudentDraft, StudentSummary};

/// Interpret a response as the expected payload type.
///
/// Pure so the status taxonomy (2xx decode, 422 field-error envelope,
/// everything else opaque) is testable without a socket.
pub(crate) fn decode<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    match status {
        200..=299 => Ok(serde_json::from_str(body)?),
        422 => {
            let errors = serde_json::from_str::<ValidationEnvelope>(body)
                .map(|envelope| envelope.error)
                .unwrap_or_default();
            Err(ApiError::Validation(errors))
        }
        status => Err(ApiError::Status {
            status,
            body: body.to_string(),
        }),
    }
}

/// Client for the students resource.
///
/// Cheap to clone; clones share the underlying connection pool, so spawned
/// tasks can each own one (cancellation of a fetch is the caller's concern,
/// by aborting the task that drives it).
#[derive(Debug, Clone)]
pub struct StudentApi {
    client: reqwest::Client,
    base_url: Url,
}

impl StudentApi {
    /// Create a client against the given base URL.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: Url::parse(base_url)?,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::BaseUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::debug!(status, "students api response");
        decode(status, &body)
    }

    async fn send_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        request: RequestBuilder,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(request.json(body)).await
    }

    /// `GET /students?_page=&_limit=`: the paginated list projection.
    pub async fn list(&self, page: u32, limit: u32) -> Result<Vec<StudentSummary>, ApiError> {
        let mut url = self.endpoint(&["students"])?;
        url.query_pairs_mut()
            .append_pair("_page", &page.to_string())
            .append_pair("_limit", &limit.to_string());
        self.execute(self.client.get(url)).await
    }

    /// `GET /students/{id}`: one full record. A missing record surfaces as
    /// the server's 404, passed through unmodified.
    pub async fn get(&self, id: u64) -> Result<Student, ApiError> {
        let url = self.endpoint(&["students", &id.to_string()])?;
        self.execute(self.client.get(url)).await
    }

    /// `POST /students`: create a record; the returned record carries the
    /// server-assigned identifier.
    pub async fn add(&self, draft: &StudentDraft) -> Result<Student, ApiError> {
        let url = self.endpoint(&["students"])?;
        self.send_json(self.client.post(url), draft).await
    }

    /// `PUT /students/{id}`: full-record replacement.
    pub async fn update(&self, id: u64, record: &Student) -> Result<Student, ApiError> {
        let url = self.endpoint(&["students", &id.to_string()])?;
        self.send_json(self.client.put(url), record).await
    }

    /// `DELETE /students/{id}`: returns the deleted record echo.
    pub async fn delete(&self, id: u64) -> Result<Student, ApiError> {
        let url = self.endpoint(&["students", &id.to_string()])?;
        self.execute(self.client.delete(url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"{
        "id": 5,
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": "ada@example.com",
        "gender": "Female",
        "country": "UK",
        "avatar": "",
        "btc_address": ""
    }"#;

    #[test]
    fn decode_should_accept_2xx_payload() {
        let record: Student = decode(200, RECORD).unwrap();
        assert_eq!(record.id, 5);
        assert_eq!(record.first_name, "Ada");
    }

    #[test]
    fn decode_should_pass_404_through_as_status() {
        let result: Result<Student, _> = decode(404, "{}");
        match result {
            Err(ApiError::Status { status, .. }) => assert_eq!(status, 404),
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn decode_should_map_422_to_field_errors() {
        let result: Result<Student, _> =
            decode(422, r#"{"error":{"email":"Email is invalid"}}"#);
        match result {
            Err(ApiError::Validation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(
                    errors.get("email").map(String::as_str),
                    Some("Email is invalid")
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn decode_should_tolerate_malformed_422_body() {
        let result: Result<Student, _> = decode(422, "not json");
        match result {
            Err(ApiError::Validation(errors)) => assert!(errors.is_empty()),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn decode_should_report_undecodable_2xx_body() {
        let result: Result<Student, _> = decode(200, "not json");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn endpoint_should_join_segments_under_base() {
        let api = StudentApi::new("http://localhost:4000/").unwrap();
        let url = api.endpoint(&["students", "5"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:4000/students/5");
    }

    #[test]
    fn endpoint_should_respect_base_path_prefix() {
        let api = StudentApi::new("http://localhost:4000/api/v1").unwrap();
        let url = api.endpoint(&["students"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:4000/api/v1/students");
    }

    #[test]
    fn new_should_reject_unparseable_base_url() {
        assert!(matches!(
            StudentApi::new("not a url"),
            Err(ApiError::BaseUrl(_))
        ));
    }
}
