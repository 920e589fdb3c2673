//! HTTP implementation of [`EmployeeSource`].

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::DataSourceConfig;
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::{ApiEnvelope, Employee, EmployeePayload, UpdateEmployeePayload};

use super::source::EmployeeSource;

const PERSON_PATH: &str = "person";

/// Talks to the employee REST API.
///
/// Resources live under `{base_url}/person`. Every body is wrapped in the
/// source's `{success, message, data, errors}` envelope.
#[derive(Debug, Clone)]
pub struct HttpEmployeeSource {
    client: Client,
    base_url: String,
}

impl HttpEmployeeSource {
    /// Builds a client for the configured data source.
    pub fn new(config: &DataSourceConfig) -> DirectoryResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(transport_error)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, PERSON_PATH)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, PERSON_PATH, id)
    }

    async fn read_data<T: DeserializeOwned>(&self, response: Response) -> DirectoryResult<T> {
        let body = read_body(response).await?;
        decode_envelope::<T>(&body)?
            .into_response()
            .into_result()
    }
}

#[async_trait]
impl EmployeeSource for HttpEmployeeSource {
    async fn list_employees(&self) -> DirectoryResult<Vec<Employee>> {
        let url = self.collection_url();
        debug!(url = %url, "Fetching employees");

        let response = self.client.get(&url).send().await.map_err(transport_error)?;
        self.read_data(response).await
    }

    async fn get_employee(&self, id: &str) -> DirectoryResult<Employee> {
        let url = self.item_url(id);
        debug!(url = %url, "Fetching employee");

        let response = self.client.get(&url).send().await.map_err(transport_error)?;
        self.read_data(ensure_found(response, id)?).await
    }

    async fn create_employee(&self, payload: &EmployeePayload) -> DirectoryResult<Employee> {
        let url = self.collection_url();
        debug!(url = %url, employee_num = %payload.employee_num, "Creating employee");

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(transport_error)?;
        self.read_data(response).await
    }

    async fn update_employee(
        &self,
        id: &str,
        payload: &UpdateEmployeePayload,
    ) -> DirectoryResult<Employee> {
        let url = self.item_url(id);
        debug!(url = %url, "Updating employee");

        let response = self
            .client
            .put(&url)
            .json(payload)
            .send()
            .await
            .map_err(transport_error)?;
        self.read_data(ensure_found(response, id)?).await
    }

    async fn delete_employee(&self, id: &str) -> DirectoryResult<()> {
        let url = self.item_url(id);
        debug!(url = %url, "Deleting employee");

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(transport_error)?;
        let body = read_body(ensure_found(response, id)?).await?;
        if body.trim().is_empty() {
            return Ok(());
        }

        decode_envelope::<serde_json::Value>(&body)?
            .into_acknowledgement()
            .into_result()
    }
}

/// Maps a 404 on an item URL to [`DirectoryError::EmployeeNotFound`].
fn ensure_found(response: Response, id: &str) -> DirectoryResult<Response> {
    if response.status() == StatusCode::NOT_FOUND {
        debug!(employee_id = %id, "Data source has no such employee");
        return Err(DirectoryError::EmployeeNotFound { id: id.to_string() });
    }
    Ok(response)
}

/// Reads the body of a successful response, turning any other status into
/// [`DirectoryError::Remote`].
async fn read_body(response: Response) -> DirectoryResult<String> {
    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;

    if !status.is_success() {
        let message = error_message(status, &body);
        warn!(status = status.as_u16(), message = %message, "Data source returned an error");
        return Err(DirectoryError::Remote {
            status: status.as_u16(),
            message,
        });
    }
    Ok(body)
}

fn decode_envelope<T: DeserializeOwned>(body: &str) -> DirectoryResult<ApiEnvelope<T>> {
    serde_json::from_str(body).map_err(|e| DirectoryError::InvalidResponse {
        message: e.to_string(),
    })
}

fn transport_error(error: reqwest::Error) -> DirectoryError {
    DirectoryError::Transport {
        message: error.to_string(),
    }
}

/// The message to report for a non-success response: the envelope's
/// `message` when the body carries one, otherwise `Error: <status>`.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body)
        .ok()
        .map(|envelope| envelope.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| format!("Error: {}", status.as_u16()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, http::StatusCode as ServerStatus, routing::get};
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use crate::api::ApiErrorResponse;

    /// Serves `router` on an ephemeral local port and points a source at it.
    async fn spawn_source(router: Router) -> HttpEmployeeSource {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        HttpEmployeeSource::new(&DataSourceConfig {
            base_url: format!("http://{}/api", addr),
            timeout_secs: 5,
        })
        .unwrap()
    }

    fn employee_json() -> serde_json::Value {
        json!({
            "id": "e1",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "birthDate": "1990-12-10T00:00:00",
            "employees": [
                { "id": 1, "employeeNum": "AL001", "employedDate": "2015-03-01T00:00:00" }
            ]
        })
    }

    fn sample_payload() -> EmployeePayload {
        EmployeePayload {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            birth_date: Utc.with_ymd_and_hms(1990, 12, 10, 0, 0, 0).unwrap(),
            employee_num: "AL001".to_string(),
            employed_date: Utc.with_ymd_and_hms(2015, 3, 1, 0, 0, 0).unwrap(),
            terminated_date: None,
        }
    }

    fn not_found() -> (ServerStatus, Json<serde_json::Value>) {
        (
            ServerStatus::NOT_FOUND,
            Json(json!({ "success": false, "message": "Person not found", "errors": [] })),
        )
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = DataSourceConfig {
            base_url: "http://localhost:5131/api/".to_string(),
            timeout_secs: 5,
        };
        let source = HttpEmployeeSource::new(&config).unwrap();
        assert_eq!(source.base_url(), "http://localhost:5131/api");
        assert_eq!(source.collection_url(), "http://localhost:5131/api/person");
        assert_eq!(source.item_url("abc"), "http://localhost:5131/api/person/abc");
    }

    #[test]
    fn test_error_message_prefers_envelope_message() {
        let body =
            r#"{ "success": false, "message": "Employee number already exists", "errors": [] }"#;
        assert_eq!(
            error_message(StatusCode::CONFLICT, body),
            "Employee number already exists"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_status() {
        assert_eq!(
            error_message(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>"),
            "Error: 500"
        );
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, r#"{ "success": false, "message": "" }"#),
            "Error: 502"
        );
    }

    #[tokio::test]
    async fn test_unreachable_source_is_transport_error() {
        let config = DataSourceConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 2,
        };
        let source = HttpEmployeeSource::new(&config).unwrap();

        let result = source.list_employees().await;
        assert!(matches!(result, Err(DirectoryError::Transport { .. })));
    }

    #[tokio::test]
    async fn test_list_decodes_success_envelope() {
        let router = Router::new().route(
            "/api/person",
            get(|| async {
                Json(json!({
                    "success": true,
                    "message": "ok",
                    "data": [employee_json()],
                    "errors": [],
                    "timestamp": "2025-06-15T09:00:00Z"
                }))
            }),
        );
        let source = spawn_source(router).await;

        let employees = source.list_employees().await.unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].display_name(), "Ada Lovelace");
        assert_eq!(employees[0].employment_records[0].employee_num, "AL001");
    }

    #[tokio::test]
    async fn test_create_failure_envelope_is_rejected() {
        let router = Router::new().route(
            "/api/person",
            axum::routing::post(|| async {
                Json(json!({
                    "success": false,
                    "message": "Employee number already exists",
                    "errors": ["employeeNum"]
                }))
            }),
        );
        let source = spawn_source(router).await;

        match source.create_employee(&sample_payload()).await {
            Err(DirectoryError::Rejected { message, errors }) => {
                assert_eq!(message, "Employee number already exists");
                assert_eq!(errors, vec!["employeeNum".to_string()]);
            }
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_error_status_uses_body_message() {
        let router = Router::new().route(
            "/api/person",
            get(|| async {
                (
                    ServerStatus::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "message": "Database offline" })),
                )
            }),
        );
        let source = spawn_source(router).await;

        match source.list_employees().await {
            Err(DirectoryError::Remote { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "Database offline");
            }
            other => panic!("expected Remote, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_undecodable_success_body_is_invalid_response() {
        let router = Router::new().route("/api/person", get(|| async { "<html>ok</html>" }));
        let source = spawn_source(router).await;

        let result = source.list_employees().await;
        assert!(matches!(result, Err(DirectoryError::InvalidResponse { .. })));
    }

    #[tokio::test]
    async fn test_delete_acknowledged_without_data() {
        let router = Router::new().route(
            "/api/person/:id",
            axum::routing::delete(|| async {
                Json(json!({ "success": true, "message": "Deleted", "errors": [] }))
            }),
        );
        let source = spawn_source(router).await;

        assert!(source.delete_employee("e1").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_with_empty_success_body_is_acknowledged() {
        let router = Router::new().route(
            "/api/person/:id",
            axum::routing::delete(|| async { ServerStatus::NO_CONTENT }),
        );
        let source = spawn_source(router).await;

        assert!(source.delete_employee("e1").await.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found_for_every_item_call() {
        let router = Router::new().route(
            "/api/person/:id",
            get(|| async { not_found() })
                .put(|| async { not_found() })
                .delete(|| async { not_found() }),
        );
        let source = spawn_source(router).await;

        let fetched = source.get_employee("ghost").await;
        assert!(matches!(
            fetched,
            Err(DirectoryError::EmployeeNotFound { ref id }) if id == "ghost"
        ));

        let update = UpdateEmployeePayload::new("ghost".to_string(), sample_payload());
        let updated = source.update_employee("ghost", &update).await;
        assert!(matches!(
            updated,
            Err(DirectoryError::EmployeeNotFound { ref id }) if id == "ghost"
        ));

        let deleted = source.delete_employee("ghost").await.unwrap_err();
        assert!(matches!(deleted, DirectoryError::EmployeeNotFound { .. }));
        assert_eq!(
            ApiErrorResponse::from(deleted).status,
            ServerStatus::NOT_FOUND
        );
    }
}
