//! Cookie-backed sessions: issuing a token at registration and resolving it
//! back to its owner on every protected request.

mod extractors;

pub use extractors::Session;

use axum_extra::extract::cookie::{Cookie, SameSite};
use base64ct::{Base64UrlUnpadded, Encoding};
use rand::{rngs::OsRng, RngCore};

use crate::config::SessionConfig;

const TOKEN_BYTES: usize = 32;

/// Fresh opaque session token: 256 bits from the OS RNG, URL-safe base64.
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    Base64UrlUnpadded::encode_string(&bytes)
}

/// Long-lived cookie carrying `token`.
pub fn session_cookie(config: &SessionConfig, token: String) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure)
        .max_age(time::Duration::days(config.max_age_days))
        .build()
}
