use crate::db::{DirectoryStorage, NewUser};
use crate::error::DirectoryError;
use crate::middleware::session::SessionUser;
use crate::service::password::{hash_password_blocking, verify_password_blocking};
use serde::Deserialize;
use tracing::{info, warn};

/// Signup form fields. `phone_number` is optional; a blank value is stored as NULL.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub house_number: String,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// Create a resident account and return the session identity for it.
///
/// Email uniqueness is an exact match, checked before insert and backed by
/// the UNIQUE constraint.
pub async fn signup(
    storage: &DirectoryStorage,
    req: SignupRequest,
) -> Result<SessionUser, DirectoryError> {
    if storage.find_user_by_email(&req.email).await?.is_some() {
        info!(email = %req.email, "signup rejected: email already registered");
        return Err(DirectoryError::DuplicateEmail);
    }

    let password_hash = hash_password_blocking(req.password).await?;
    let phone_number = req.phone_number.filter(|p| !p.trim().is_empty());
    let name = req.name;

    let id = storage
        .insert_user(NewUser {
            name: name.clone(),
            email: req.email,
            password_hash,
            house_number: req.house_number,
            phone_number,
        })
        .await?;

    info!(user_id = id, "resident signed up");
    Ok(SessionUser {
        user_id: id,
        user_name: name,
    })
}

/// Authenticate by email and password. Unknown email and wrong password both
/// yield `InvalidCredentials`.
pub async fn signin(
    storage: &DirectoryStorage,
    email: &str,
    password: String,
) -> Result<SessionUser, DirectoryError> {
    let Some(user) = storage.find_user_by_email(email).await? else {
        warn!("signin failed");
        return Err(DirectoryError::InvalidCredentials);
    };

    let verified = match verify_password_blocking(password, user.password_hash).await {
        Ok(verified) => verified,
        // stored hash in a format we cannot read
        Err(DirectoryError::PasswordHash(e)) => {
            warn!(user_id = user.id, error = %e, "unreadable password hash");
            false
        }
        Err(e) => return Err(e),
    };
    if !verified {
        warn!(user_id = user.id, "signin failed");
        return Err(DirectoryError::InvalidCredentials);
    }

    info!(user_id = user.id, "resident signed in");
    Ok(SessionUser {
        user_id: user.id,
        user_name: user.name,
    })
}
