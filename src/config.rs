use axum_extra::extract::cookie::Key;
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Minimum secret length accepted as a cookie master key.
const MIN_SECRET_LEN: usize = 64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    pub max_connections: u32,
    /// Master key for the private session cookie. Without it sessions do not
    /// survive a restart.
    pub secret_key: Option<String>,
    /// Drop the `Secure` attribute so cookies work over plain http.
    pub insecure_cookie: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://community.db".to_string(),
            listen_addr: "127.0.0.1:5000".to_string(),
            loglevel: "info".to_string(),
            max_connections: 5,
            secret_key: None,
            insecure_cookie: false,
        }
    }
}

impl Config {
    /// Defaults, then `SECRET_KEY`, then any `DIRECTORY_*` variable.
    pub fn from_env() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::raw().only(&["secret_key"]))
            .merge(Env::prefixed("DIRECTORY_"))
    }

    pub fn cookie_key(&self) -> Key {
        match self.secret_key.as_deref() {
            Some(secret) if secret.len() >= MIN_SECRET_LEN => {
                match Key::try_from(secret.as_bytes()) {
                    Ok(key) => key,
                    Err(e) => {
                        warn!(error = %e, "unusable secret key; generating an ephemeral one");
                        Key::generate()
                    }
                }
            }
            Some(_) => {
                warn!(
                    min_len = MIN_SECRET_LEN,
                    "secret key too short; generating an ephemeral one"
                );
                Key::generate()
            }
            None => {
                warn!("no secret key configured; sessions reset on restart");
                Key::generate()
            }
        }
    }
}
