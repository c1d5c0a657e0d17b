//! Database connection details carried by the secret

use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer};

/// Connection parameters stored in the secret document.
///
/// Missing and `null` fields stay at their zero value. `Default` is the value
/// callers should treat as "not populated". Capitalized key spellings are
/// accepted alongside the lowercase ones.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SecretDetails {
    #[serde(alias = "Dbname", alias = "DbName", alias = "DBName", deserialize_with = "null_as_zero")]
    pub dbname: String,
    #[serde(alias = "Port", deserialize_with = "null_as_zero")]
    pub port: i64,
    #[serde(alias = "Username", alias = "UserName", deserialize_with = "null_as_zero")]
    pub username: String,
    #[serde(alias = "Password", deserialize_with = "null_as_empty_secret")]
    pub password: Secret<String>,
    #[serde(alias = "Host", deserialize_with = "null_as_zero")]
    pub host: String,
    #[serde(
        rename = "dbsslmode",
        alias = "DbSslMode",
        alias = "DBSSLMode",
        deserialize_with = "null_as_zero"
    )]
    pub ssl_mode: String,
}

fn null_as_zero<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_empty_secret<'de, D>(deserializer: D) -> Result<Secret<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(Secret::new(value.unwrap_or_default()))
}

impl Default for SecretDetails {
    fn default() -> Self {
        Self {
            dbname: String::new(),
            port: 0,
            username: String::new(),
            password: Secret::new(String::new()),
            host: String::new(),
            ssl_mode: String::new(),
        }
    }
}

impl SecretDetails {
    /// True when every field holds its zero value
    pub fn is_empty(&self) -> bool {
        self.dbname.is_empty()
            && self.port == 0
            && self.username.is_empty()
            && self.password.expose_secret().is_empty()
            && self.host.is_empty()
            && self.ssl_mode.is_empty()
    }

    /// libpq-style key/value connection string
    pub fn connection_string(&self) -> Secret<String> {
        let mut dsn = format!(
            "host={} port={} dbname={} user={} password={}",
            quote(&self.host),
            self.port,
            quote(&self.dbname),
            quote(&self.username),
            quote(self.password.expose_secret())
        );
        if !self.ssl_mode.is_empty() {
            dsn.push_str(" sslmode=");
            dsn.push_str(&quote(&self.ssl_mode));
        }
        Secret::new(dsn)
    }
}

// Values with spaces, quotes or backslashes must be single-quoted with escapes.
fn quote(value: &str) -> String {
    if !value.is_empty() && !value.contains([' ', '\'', '\\']) {
        return value.to_string();
    }
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}
