use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT payload carried by every session token.
///
/// The token is stateless: there is no server-side session record and no
/// revocation list, so a signed token stays valid until `exp`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,     // user ID
    pub email: String, // email at issue time
    pub iat: usize,    // issued at (unix timestamp)
    pub exp: usize,    // expires at (unix timestamp)
}
