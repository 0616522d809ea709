use anyhow::Context;

/// Browsers clamp `Max-Age` to 400 days; anything longer is never honoured.
pub const MAX_SESSION_AGE_DAYS: i64 = 400;

/// Settings for the session cookie issued at registration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub max_age_days: i64,
    pub secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "sessionId".into(),
            max_age_days: 7,
            secure: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub session: SessionConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;
        let defaults = SessionConfig::default();
        let session = SessionConfig {
            cookie_name: lookup("SESSION_COOKIE_NAME").unwrap_or(defaults.cookie_name),
            max_age_days: match lookup("SESSION_MAX_AGE_DAYS") {
                Some(raw) => parse_max_age_days(&raw)
                    .with_context(|| format!("invalid SESSION_MAX_AGE_DAYS {raw:?}"))?,
                None => defaults.max_age_days,
            },
            secure: lookup("SESSION_COOKIE_SECURE")
                .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE" | "yes"))
                .unwrap_or(defaults.secure),
        };
        Ok(Self {
            database_url,
            host: lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: lookup("APP_PORT")
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(3333),
            db_max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(10),
            session,
        })
    }
}

fn parse_max_age_days(raw: &str) -> anyhow::Result<i64> {
    let days = raw.trim().parse::<i64>().context("not an integer")?;
    if !(1..=MAX_SESSION_AGE_DAYS).contains(&days) {
        anyhow::bail!("must be between 1 and {MAX_SESSION_AGE_DAYS} days");
    }
    Ok(days)
}
