//! HTTP request handlers for the employee directory API.
//!
//! This module contains the handler functions for all API endpoints. Every
//! handler tags its log lines with a fresh correlation id. Mutating handlers
//! validate before touching the data source, and view state only changes
//! after the data source confirms the operation.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::context::UiPreferences;
use crate::error::DirectoryError;
use crate::models::{Employee, FormValues, UpdateEmployeePayload};
use crate::validation::{prepare_submission, validate_form};

use super::request::{ListQuery, PreferencesUpdate};
use super::response::{ApiError, ApiErrorResponse, ValidationReport};
use super::state::AppState;
use super::views::{DashboardView, EmployeeCardView, EmployeePage, EmployeeProfileView};

type HandlerResult<T> = Result<T, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route("/employees/validate", post(validate_employee))
        .route(
            "/employees/:id",
            get(view_employee).put(update_employee).delete(delete_employee),
        )
        .route("/employees/:id/form", get(edit_form))
        .route("/dashboard", get(dashboard))
        .route("/selection", get(current_selection).delete(clear_selection))
        .route("/preferences", get(get_preferences).put(update_preferences))
        .route("/preferences/theme/toggle", post(toggle_theme))
        .with_state(state)
}

/// Handler for GET /employees.
async fn list_employees(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> HandlerResult<Json<EmployeePage>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, page = query.page(), "Listing employees");

    let employees = state
        .source()
        .list_employees()
        .await
        .map_err(|e| log_failure(correlation_id, "list employees", e))?;

    let display = &state.config().display;
    let page = EmployeePage::build(
        &employees,
        query.page(),
        display.page_size,
        display.service_progress_cap_years,
        Utc::now(),
    );

    info!(
        correlation_id = %correlation_id,
        total_employees = page.total_employees,
        total_pages = page.total_pages,
        "Listed employees"
    );
    Ok(Json(page))
}

/// Handler for GET /employees/:id.
///
/// Opening a profile makes that employee the current selection.
async fn view_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Json<EmployeeProfileView>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Viewing employee");

    let employee = state
        .source()
        .get_employee(&id)
        .await
        .map_err(|e| log_failure(correlation_id, "fetch employee", e))?;

    let profile = EmployeeProfileView::build(
        &employee,
        state.config().display.service_progress_cap_years,
        Utc::now(),
    );
    state.selection().set(employee);

    Ok(Json(profile))
}

/// Handler for GET /employees/:id/form.
///
/// Prefills from the selected employee when it is the one requested,
/// otherwise fetches it.
async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Json<FormValues>> {
    let correlation_id = Uuid::new_v4();

    let employee = match state.selection().get_if(&id) {
        Some(employee) => employee,
        None => state
            .source()
            .get_employee(&id)
            .await
            .map_err(|e| log_failure(correlation_id, "fetch employee", e))?,
    };

    info!(correlation_id = %correlation_id, employee_id = %id, "Prefilled edit form");
    Ok(Json(FormValues::from_employee(&employee)))
}

/// Handler for POST /employees/validate.
///
/// Runs every rule against the submitted values without side effects, for
/// validating as the user types.
async fn validate_employee(
    State(state): State<AppState>,
    payload: Result<Json<FormValues>, JsonRejection>,
) -> HandlerResult<Json<ValidationReport>> {
    let correlation_id = Uuid::new_v4();
    let values = parse_form(payload, correlation_id)?;

    let errors = validate_form(&values, &state.config().validation);
    Ok(Json(ValidationReport::from(errors)))
}

/// Handler for POST /employees.
async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<FormValues>, JsonRejection>,
) -> HandlerResult<(StatusCode, Json<EmployeeCardView>)> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Creating employee");

    let values = parse_form(payload, correlation_id)?;
    let submission =
        prepare_submission(&values, &state.config().validation).map_err(|errors| {
            log_failure(
                correlation_id,
                "create employee",
                DirectoryError::Validation { errors },
            )
        })?;

    let created = state
        .source()
        .create_employee(&submission)
        .await
        .map_err(|e| log_failure(correlation_id, "create employee", e))?;

    info!(correlation_id = %correlation_id, employee_id = %created.id, "Employee created");
    Ok((StatusCode::CREATED, Json(card_for(&state, &created))))
}

/// Handler for PUT /employees/:id.
async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<FormValues>, JsonRejection>,
) -> HandlerResult<Json<EmployeeCardView>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Updating employee");

    let values = parse_form(payload, correlation_id)?;
    let submission =
        prepare_submission(&values, &state.config().validation).map_err(|errors| {
            log_failure(
                correlation_id,
                "update employee",
                DirectoryError::Validation { errors },
            )
        })?;

    let updated = state
        .source()
        .update_employee(&id, &UpdateEmployeePayload::new(id.clone(), submission))
        .await
        .map_err(|e| log_failure(correlation_id, "update employee", e))?;

    if state.selection().get_if(&id).is_some() {
        state.selection().set(updated.clone());
    }

    info!(correlation_id = %correlation_id, employee_id = %id, "Employee updated");
    Ok(Json(card_for(&state, &updated)))
}

/// Handler for DELETE /employees/:id.
async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<StatusCode> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Deleting employee");

    state
        .source()
        .delete_employee(&id)
        .await
        .map_err(|e| log_failure(correlation_id, "delete employee", e))?;

    state.selection().clear_if(&id);

    info!(correlation_id = %correlation_id, employee_id = %id, "Employee deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /dashboard.
async fn dashboard(State(state): State<AppState>) -> HandlerResult<Json<DashboardView>> {
    let correlation_id = Uuid::new_v4();

    let employees = state
        .source()
        .list_employees()
        .await
        .map_err(|e| log_failure(correlation_id, "load dashboard", e))?;

    info!(correlation_id = %correlation_id, total_employees = employees.len(), "Built dashboard");
    Ok(Json(DashboardView::build(&employees)))
}

/// Handler for GET /selection.
async fn current_selection(State(state): State<AppState>) -> Response {
    match state.selection().get() {
        Some(employee) => Json(card_for(&state, &employee)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Handler for DELETE /selection.
async fn clear_selection(State(state): State<AppState>) -> StatusCode {
    state.selection().clear();
    StatusCode::NO_CONTENT
}

/// Handler for GET /preferences.
async fn get_preferences(State(state): State<AppState>) -> Json<UiPreferences> {
    Json(state.preferences().get())
}

/// Handler for PUT /preferences.
async fn update_preferences(
    State(state): State<AppState>,
    payload: Result<Json<PreferencesUpdate>, JsonRejection>,
) -> HandlerResult<Json<UiPreferences>> {
    let Json(update) = payload.map_err(|rejection| {
        ApiErrorResponse::new(
            StatusCode::BAD_REQUEST,
            ApiError::malformed_json(rejection.body_text()),
        )
    })?;

    let preferences = state
        .preferences()
        .update(|current| *current = update.apply(*current));
    Ok(Json(preferences))
}

/// Handler for POST /preferences/theme/toggle.
async fn toggle_theme(State(state): State<AppState>) -> Json<UiPreferences> {
    Json(state.preferences().toggle_theme())
}

fn card_for(state: &AppState, employee: &Employee) -> EmployeeCardView {
    EmployeeCardView::build(
        employee,
        state.config().display.service_progress_cap_years,
        Utc::now(),
    )
}

/// Unwraps a form body, turning JSON rejections into 400 responses.
fn parse_form(
    payload: Result<Json<FormValues>, JsonRejection>,
    correlation_id: Uuid,
) -> HandlerResult<FormValues> {
    match payload {
        Ok(Json(values)) => Ok(values),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
                    ApiError::malformed_json(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err(ApiErrorResponse::new(StatusCode::BAD_REQUEST, error))
        }
    }
}

/// Logs a failed action and converts it to a response.
fn log_failure(correlation_id: Uuid, action: &str, error: DirectoryError) -> ApiErrorResponse {
    match &error {
        DirectoryError::Validation { errors } => warn!(
            correlation_id = %correlation_id,
            action,
            invalid_fields = errors.len(),
            "Form failed validation"
        ),
        _ if error.is_transport() => warn!(
            correlation_id = %correlation_id,
            action,
            error = %error,
            "Data source call failed"
        ),
        _ => warn!(correlation_id = %correlation_id, action, error = %error, "Request failed"),
    }
    error.into()
}
