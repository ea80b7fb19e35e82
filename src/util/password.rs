//! Password hashing and verification utilities
//!
//! Passwords are stored as salted bcrypt hashes with a fixed cost of 10,
//! which keeps hashes written by earlier deployments verifiable.

use bcrypt::BcryptError;
use tracing::{debug, error};

/// bcrypt work factor used for every new hash.
pub const HASH_COST: u32 = 10;

/// Error types for password operations
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("Failed to hash password: {0}")]
    HashingFailed(String),
    #[error("Failed to verify password: {0}")]
    VerificationFailed(String),
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

pub trait PasswordUtils {
    /// Hashes the given password with a fresh random salt
    fn hash_password(password: &str) -> Result<String, PasswordError>;

    /// Verifies the given password against the stored hash
    fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError>;
}

pub struct PasswordUtilsImpl;

impl PasswordUtils for PasswordUtilsImpl {
    fn hash_password(password: &str) -> Result<String, PasswordError> {
        debug!("Hashing password");
        bcrypt::hash(password, HASH_COST).map_err(|err| {
            error!("Failed to hash password: {}", err);
            PasswordError::HashingFailed(err.to_string())
        })
    }

    fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
        debug!("Verifying password against hash");
        match bcrypt::verify(password, hash) {
            Ok(valid) => {
                debug!("Password verification result: {}", valid);
                Ok(valid)
            }
            Err(BcryptError::InvalidHash(_))
            | Err(BcryptError::InvalidPrefix(_))
            | Err(BcryptError::InvalidCost(_)) => {
                error!("Invalid password hash format");
                Err(PasswordError::InvalidHashFormat)
            }
            Err(err) => {
                error!("Password verification error: {}", err);
                Err(PasswordError::VerificationFailed(err.to_string()))
            }
        }
    }
}
