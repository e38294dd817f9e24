//! REST helper for the generation endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stub returning an error since generation is only
//! triggered from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a `Result` with a human-readable message instead of panics
//! so a failed generation degrades to the error panel and a toast.

#![allow(clippy::unused_async)]

use super::types::GeneratedProperty;

/// Ask the server to generate a themed property list via `POST /api/generate`.
///
/// # Errors
///
/// Returns the server's error message, or a transport description when the
/// request itself fails.
pub async fn generate_properties(theme: &str) -> Result<Vec<GeneratedProperty>, String> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::{GenerateRequest, GenerateResponse};

        let request = GenerateRequest { theme: theme.to_owned() };
        let resp = gloo_net::http::Request::post("/api/generate")
            .json(&request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !resp.ok() {
            #[derive(serde::Deserialize)]
            struct ErrorBody {
                message: String,
            }
            let message = match resp.json::<ErrorBody>().await {
                Ok(body) => body.message,
                Err(_) => format!("generation request failed: {}", resp.status()),
            };
            return Err(message);
        }

        let body: GenerateResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.properties)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
        Err("not available on server".to_owned())
    }
}
