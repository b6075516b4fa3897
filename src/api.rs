//! HTTP client for the activity board REST API

use crate::types::*;
use reqwest::{header, Method, StatusCode, Url};
use std::future::Future;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid server URL: {0}")]
    InvalidUrl(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with {0}")]
    Status(StatusCode),
    #[error("unexpected response body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Operations the board needs from the server.
///
/// `Ok` means the server answered with something we could read. A mutation the
/// server refused is `Ok(MutationOutcome::Rejected)`, not an error.
pub trait BoardApi: Send + Sync + 'static {
    fn fetch_activities(&self) -> impl Future<Output = Result<Vec<Activity>, ApiError>> + Send;

    fn signup(
        &self,
        activity: &str,
        email: &str,
    ) -> impl Future<Output = Result<MutationOutcome, ApiError>> + Send;

    fn unregister(
        &self,
        activity: &str,
        email: &str,
    ) -> impl Future<Output = Result<MutationOutcome, ApiError>> + Send;
}

pub struct HttpApi {
    client: reqwest::Client,
    base: Url,
}

impl HttpApi {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            client: reqwest::Client::new(),
            base,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `GET /activities?ts=<token>`
    pub fn activities_url(&self, cache_token: i64) -> Result<Url, ApiError> {
        let mut url = self.endpoint(&["activities"])?;
        url.query_pairs_mut()
            .append_pair("ts", &cache_token.to_string());
        Ok(url)
    }

    /// `/activities/{name}/signup?email={email}`, shared by sign-up and unregister
    pub fn signup_url(&self, activity: &str, email: &str) -> Result<Url, ApiError> {
        let mut url = self.endpoint(&["activities", activity, "signup"])?;
        url.query_pairs_mut().append_pair("email", email);
        Ok(url)
    }

    async fn send_mutation(
        &self,
        method: Method,
        activity: &str,
        email: &str,
    ) -> Result<MutationOutcome, ApiError> {
        let url = self.signup_url(activity, email)?;
        debug!(method = %method, url = %url, "Sending mutation");
        let response = self.client.request(method, url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!(status = %status, bytes = body.len(), "Mutation response received");
        interpret_mutation(status, &body)
    }
}

impl BoardApi for HttpApi {
    async fn fetch_activities(&self) -> Result<Vec<Activity>, ApiError> {
        let url = self.activities_url(chrono::Utc::now().timestamp_millis())?;
        debug!(url = %url, "Fetching activities");
        let response = self
            .client
            .get(url)
            .header(header::CACHE_CONTROL, "no-store")
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        let body = response.bytes().await?;
        let activities = parse_activities(&body)?;
        debug!(count = activities.len(), "Activities parsed");
        Ok(activities)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<MutationOutcome, ApiError> {
        self.send_mutation(Method::POST, activity, email).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<MutationOutcome, ApiError> {
        self.send_mutation(Method::DELETE, activity, email).await
    }
}

/// Parse the activity mapping, keeping the server's key order.
pub fn parse_activities(body: &[u8]) -> Result<Vec<Activity>, serde_json::Error> {
    let map: serde_json::Map<String, serde_json::Value> = serde_json::from_slice(body)?;
    map.into_iter()
        .map(|(name, value)| {
            serde_json::from_value::<ActivityDetails>(value)
                .map(|details| Activity::from_details(name, details))
        })
        .collect()
}

/// Both success and rejection bodies must be JSON; anything else is a parse failure.
pub fn interpret_mutation(status: StatusCode, body: &[u8]) -> Result<MutationOutcome, ApiError> {
    if status.is_success() {
        let body: MessageBody = serde_json::from_slice(body)?;
        Ok(MutationOutcome::Accepted {
            message: body.message,
        })
    } else {
        let body: DetailBody = serde_json::from_slice(body)?;
        Ok(MutationOutcome::Rejected {
            status: status.as_u16(),
            detail: body.detail,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> HttpApi {
        HttpApi::new("http://127.0.0.1:8000").unwrap()
    }

    #[test]
    fn test_signup_url_encodes_name_and_email() {
        let url = api().signup_url("Chess Club", "a@b.com").unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8000/activities/Chess%20Club/signup?email=a%40b.com"
        );
    }

    #[test]
    fn test_signup_url_keeps_slash_inside_segment() {
        let url = api().signup_url("Art/Design", "x@y.org").unwrap();
        assert_eq!(url.path(), "/activities/Art%2FDesign/signup");
    }

    #[test]
    fn test_signup_url_roundtrips_query_email() {
        let url = api().signup_url("Drama", "first+last@school.edu").unwrap();
        let email: Vec<_> = url.query_pairs().filter(|(k, _)| k == "email").collect();
        assert_eq!(email.len(), 1);
        assert_eq!(email[0].1, "first+last@school.edu");
    }

    #[test]
    fn test_base_url_with_prefix_path() {
        let api = HttpApi::new("http://host:9000/board/").unwrap();
        let url = api.activities_url(42).unwrap();
        assert_eq!(url.as_str(), "http://host:9000/board/activities?ts=42");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(matches!(HttpApi::new("not a url"), Err(ApiError::InvalidUrl(_))));
        assert!(matches!(HttpApi::new("mailto:a@b.com"), Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_parse_activities_preserves_order() {
        let body = br#"{
            "Zeta Club": {"description": "z", "schedule": "Mon", "max_participants": 5, "participants": []},
            "Alpha Club": {"description": "a", "schedule": "Tue", "max_participants": 2, "participants": ["x@y.com"]}
        }"#;
        let activities = parse_activities(body).unwrap();
        let names: Vec<_> = activities.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta Club", "Alpha Club"]);
        assert_eq!(activities[1].participants, vec!["x@y.com".to_string()]);
    }

    #[test]
    fn test_parse_activities_rejects_non_json() {
        assert!(parse_activities(b"<html>oops</html>").is_err());
    }

    #[test]
    fn test_parse_activities_rejects_wrong_shape() {
        assert!(parse_activities(br#"{"detail": "Not found"}"#).is_err());
    }

    #[test]
    fn test_interpret_success() {
        let outcome = interpret_mutation(
            StatusCode::OK,
            br#"{"message":"Signed up a@b.com for Chess Club"}"#,
        )
        .unwrap();
        assert_eq!(
            outcome,
            MutationOutcome::Accepted {
                message: "Signed up a@b.com for Chess Club".into()
            }
        );
    }

    #[test]
    fn test_interpret_rejection_with_detail() {
        let outcome =
            interpret_mutation(StatusCode::BAD_REQUEST, br#"{"detail":"Already signed up"}"#).unwrap();
        assert_eq!(
            outcome,
            MutationOutcome::Rejected {
                status: 400,
                detail: Some("Already signed up".into())
            }
        );
    }

    #[test]
    fn test_interpret_rejection_without_detail() {
        let outcome = interpret_mutation(StatusCode::NOT_FOUND, b"{}").unwrap();
        assert_eq!(
            outcome,
            MutationOutcome::Rejected {
                status: 404,
                detail: None
            }
        );
    }

    #[test]
    fn test_interpret_non_json_error_is_parse_failure() {
        let result = interpret_mutation(StatusCode::BAD_GATEWAY, b"Bad Gateway");
        assert!(matches!(result, Err(ApiError::Parse(_))));
    }
}
