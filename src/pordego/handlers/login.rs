use crate::{
    gotrue::{AuthOutcome, Client},
    pordego::handlers::{
        missing_credentials, provider_error, reply, ApiResponse, Credentials, Reply,
    },
};
use axum::{extract::Extension, http::StatusCode, Json};
use tracing::{debug, error, instrument};

#[utoipa::path(
    post,
    path= "/api/login",
    request_body = Credentials,
    responses (
        (status = 200, description = "Login successful", body = ApiResponse, content_type = "application/json"),
        (status = 400, description = "Missing credentials or provider failure", body = ApiResponse),
        (status = 401, description = "Provider rejected the credentials", body = ApiResponse),
    ),
    tag= "login"
)]
// axum handler for login
#[instrument]
pub async fn login(client: Extension<Client>, payload: Option<Json<Credentials>>) -> Reply {
    let credentials: Credentials = match payload {
        Some(Json(payload)) => payload,
        None => return missing_credentials(),
    };

    if !credentials.is_complete() {
        return missing_credentials();
    }

    debug!("credentials: {:?}", credentials);

    match client
        .create_session(&credentials.email, &credentials.password)
        .await
    {
        Ok(AuthOutcome::Granted { subject }) => reply(
            StatusCode::OK,
            ApiResponse::new(format!("Welcome, {}!", credentials.email)).with_user(subject),
        ),

        Ok(AuthOutcome::Denied { detail }) => {
            debug!("login denied: {}", detail);

            reply(
                StatusCode::UNAUTHORIZED,
                ApiResponse::new("Invalid credentials.").with_error(detail),
            )
        }

        Err(e) => {
            error!("Error creating session: {:?}", e);

            provider_error(&e)
        }
    }
}
