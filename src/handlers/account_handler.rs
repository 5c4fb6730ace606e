//! Account handlers for registration and account deletion.

use actix_web::{web, HttpResponse};
use log::info;
use validator::Validate;

use crate::errors::ApiError;
use crate::models::{RegisterRequest, UserResponse};
use crate::services::AccountService;
use crate::validators::validation_errors_to_api_error;

/// Register a new account
///
/// Open to unauthenticated callers by design: this is the sign-up endpoint.
/// The matching client profile is provisioned synchronously before the
/// response is sent.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Accounts",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = UserResponse),
        (status = 400, description = "Validation error", body = crate::errors::ErrorResponse),
        (status = 409, description = "Provisioning conflict", body = crate::errors::ErrorResponse)
    )
)]
pub async fn register(
    account_service: web::Data<AccountService>,
    body: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    // Validate input
    body.validate().map_err(validation_errors_to_api_error)?;

    let user = account_service.register(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(user))
}

/// Delete an account and its client profile
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Accounts",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 400, description = "Malformed id", body = crate::errors::ErrorResponse),
        (status = 404, description = "User not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn delete_user(
    account_service: web::Data<AccountService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    account_service.delete_user(&user_id).await?;
    info!("User {} deleted", user_id);

    Ok(HttpResponse::NoContent().finish())
}
