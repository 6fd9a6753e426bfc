use crate::{
    auth::{AuthMiddleware, AuthenticatedUser},
    error::AppError,
    models::task::parse_task_id,
    models::{DeleteSummary, Envelope, TaskFields, TaskUpdate},
    state::AppState,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use uuid::Uuid;

/// Creates a task from an arbitrary JSON object.
///
/// `id` and `_id` in the body are ignored; the store assigns the identifier.
///
/// ## Responses:
/// - `200 OK`: `{ success, message, result: <task> }`.
/// - `400 Bad Request`: the body is not a JSON object.
/// - `401 Unauthorized`: no valid session cookie.
#[post("/add-task", wrap = "AuthMiddleware")]
pub async fn add_task(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    body: web::Json<TaskFields>,
) -> Result<impl Responder, AppError> {
    let task = state.tasks.insert(body.into_inner()).await?;
    log::info!("{} added task {}", user.email, task.id);

    Ok(HttpResponse::Ok().json(Envelope::ok(task).with_message("Task added")))
}

/// Lists every task in insertion order. No filtering or pagination.
#[get("/tasks", wrap = "AuthMiddleware")]
pub async fn list_tasks(
    state: web::Data<AppState>,
    _user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let tasks = state.tasks.list().await?;
    Ok(HttpResponse::Ok().json(Envelope::ok(tasks)))
}

/// Retrieves a task by id.
///
/// ## Responses:
/// - `200 OK`: `{ success: true, result: <task> }`, or `result: null` when no task has that id.
/// - `400 Bad Request`: the id is not a valid UUID.
/// - `401 Unauthorized`: no valid session cookie.
#[get("/task/{id}", wrap = "AuthMiddleware")]
pub async fn get_task(
    state: web::Data<AppState>,
    _user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let id = parse_task_id(&path)?;
    let task = state.tasks.get(id).await?;
    Ok(HttpResponse::Ok().json(Envelope::ok(task)))
}

/// Merges the body's fields into an existing task.
///
/// The body is `{ "id": "<uuid>", ...fields }`; `_id` is accepted in place of `id`.
/// The identifier itself is never part of the merge.
///
/// ## Responses:
/// - `200 OK`: `{ success: true, result: <updated task> }`, or `result: null` if nothing matched.
/// - `400 Bad Request`: malformed id or non-object body.
/// - `401 Unauthorized`: no valid session cookie.
/// - `422 Unprocessable Entity`: the id is missing.
#[put("/update-task", wrap = "AuthMiddleware")]
pub async fn update_task(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    body: web::Json<TaskFields>,
) -> Result<impl Responder, AppError> {
    let update = TaskUpdate::from_body(body.into_inner())?;
    let task = state.tasks.update(update.id, update.fields).await?;
    if task.is_some() {
        log::info!("{} updated task {}", user.email, update.id);
    }

    Ok(HttpResponse::Ok().json(Envelope::ok(task)))
}

/// Deletes a task by id. Deleting an unknown id succeeds with `deleted: 0`.
#[delete("/delete/{id}", wrap = "AuthMiddleware")]
pub async fn delete_task(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let id = parse_task_id(&path)?;
    let deleted = state.tasks.delete(id).await?;
    log::info!("{} deleted task {} ({} removed)", user.email, id, deleted);

    Ok(HttpResponse::Ok().json(Envelope::ok(DeleteSummary { deleted })))
}

/// Deletes every task whose id appears in the JSON array body.
///
/// All ids are parsed before anything is removed, so one malformed id rejects the
/// whole batch with 400.
#[delete("/delete-multiple", wrap = "AuthMiddleware")]
pub async fn delete_tasks(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    body: web::Json<Vec<String>>,
) -> Result<impl Responder, AppError> {
    let ids = body
        .iter()
        .map(|raw| parse_task_id(raw))
        .collect::<Result<Vec<Uuid>, AppError>>()?;

    let deleted = state.tasks.delete_many(&ids).await?;
    log::info!("{} deleted {} of {} requested tasks", user.email, deleted, ids.len());

    Ok(HttpResponse::Ok().json(Envelope::ok(DeleteSummary { deleted })))
}
