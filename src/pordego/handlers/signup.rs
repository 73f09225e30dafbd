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
    path= "/api/signup",
    request_body = Credentials,
    responses (
        (status = 200, description = "Account created", body = ApiResponse, content_type = "application/json"),
        (status = 400, description = "Missing credentials or provider failure", body = ApiResponse),
        (status = 409, description = "Provider did not create the account", body = ApiResponse),
    ),
    tag= "signup"
)]
// axum handler for signup
#[instrument]
pub async fn signup(client: Extension<Client>, payload: Option<Json<Credentials>>) -> Reply {
    let credentials: Credentials = match payload {
        Some(Json(payload)) => payload,
        None => return missing_credentials(),
    };

    if !credentials.is_complete() {
        return missing_credentials();
    }

    debug!("credentials: {:?}", credentials);

    match client
        .create_account(&credentials.email, &credentials.password)
        .await
    {
        Ok(AuthOutcome::Granted { subject: Some(_) }) => reply(
            StatusCode::OK,
            ApiResponse::new(format!("Account created for {}", credentials.email)),
        ),

        // Provider raised nothing but created nothing either
        Ok(AuthOutcome::Granted { subject: None }) => reply(
            StatusCode::CONFLICT,
            ApiResponse::new("Unable to create account."),
        ),

        Ok(AuthOutcome::Denied { detail }) => {
            debug!("signup denied: {}", detail);

            reply(
                StatusCode::CONFLICT,
                ApiResponse::new("Unable to create account.").with_error(detail),
            )
        }

        Err(e) => {
            error!("Error creating account: {:?}", e);

            provider_error(&e)
        }
    }
}
