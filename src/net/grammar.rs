//! REST calls for the grammar-correction service.

#![allow(clippy::unused_async)]

use crate::net::error::ApiError;
use crate::net::types::{GrammarCorrectionRequest, GrammarCorrectionResponse};
#[cfg(feature = "csr")]
use crate::net::api;

/// Languages offered when the backend's language list is unreachable.
pub const FALLBACK_LANGUAGES: [&str; 5] = ["en", "es", "fr", "de", "it"];

/// Run grammar correction over a block of text.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or decoding fails.
pub async fn correct(text: &str, language: &str) -> Result<GrammarCorrectionResponse, ApiError> {
    let request = GrammarCorrectionRequest {
        text: text.to_owned(),
        language: language.to_owned(),
        return_suggestions: true,
    };
    #[cfg(feature = "csr")]
    {
        api::post_json(api::GRAMMAR_CORRECT_PATH, &request).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(ApiError::Transport("not available outside the browser".to_owned()))
    }
}

/// Fetch the supported language list, falling back to a fixed set when the
/// service is unreachable.
pub async fn supported_languages() -> Vec<String> {
    #[cfg(feature = "csr")]
    {
        match api::get_json::<Vec<String>>(api::GRAMMAR_LANGUAGES_PATH).await {
            Ok(languages) if !languages.is_empty() => languages,
            Ok(_) => fallback_languages(),
            Err(error) => {
                log::warn!("language list unavailable: {error}");
                fallback_languages()
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        fallback_languages()
    }
}

fn fallback_languages() -> Vec<String> {
    FALLBACK_LANGUAGES.iter().map(|&l| l.to_owned()).collect()
}
