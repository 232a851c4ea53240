use contracts::system::auth::SignInRequest;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Ask the API to e-mail a sign-in link
pub async fn sign_in(request: &SignInRequest) -> Result<(), String> {
    let response = Request::post(&api_url("/authenticate"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Sign-in failed: {}", response.status()));
    }

    Ok(())
}
