//! HTTP transport for the signup request

use serde_json::Value;

use crate::core::{FormInputs, SignupApi, SignupError};

/// Sends the signup draft with the browser's fetch
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchSignupApi;

impl SignupApi for FetchSignupApi {
    #[cfg(not(feature = "ssr"))]
    async fn signup(&self, inputs: &FormInputs) -> Result<Value, SignupError> {
        use crate::core::SIGNUP_ENDPOINT;
        use gloo_net::http::Request;

        let response = Request::post(SIGNUP_ENDPOINT)
            .header("Content-Type", "application/json")
            .json(inputs)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;

        // The body decides the outcome, the status code is not consulted
        response.json::<Value>().await.map_err(transport)
    }

    #[cfg(feature = "ssr")]
    async fn signup(&self, _inputs: &FormInputs) -> Result<Value, SignupError> {
        Err(SignupError::Transport(
            "Signup not available on server".to_string(),
        ))
    }
}

#[cfg(not(feature = "ssr"))]
fn transport(err: gloo_net::Error) -> SignupError {
    SignupError::Transport(err.to_string())
}
