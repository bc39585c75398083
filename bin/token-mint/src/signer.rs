//! Resolution of the signing identity from the process environment.

use alloy::signers::local::PrivateKeySigner;

use crate::error::Error;

/// Load the signer from the environment variable `var`.
///
/// An unset or blank variable is reported as a missing credential.
pub fn from_env(var: &str) -> Result<PrivateKeySigner, Error> {
    let key = std::env::var(var).unwrap_or_default();
    from_key(var, &key)
}

/// Parse a hex-encoded private key, with or without `0x` prefix.
///
/// `var` only names the source of the key in errors.
pub fn from_key(var: &str, key: &str) -> Result<PrivateKeySigner, Error> {
    let key = key.trim();
    if key.is_empty() {
        return Err(Error::MissingCredential(var.to_string()));
    }
    key.parse().map_err(|source| Error::InvalidCredential {
        var: var.to_string(),
        source,
    })
}
