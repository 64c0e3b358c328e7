use std::env;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CONCURRENCY_LIMIT: usize = 100;
const DEFAULT_REQUEST_BODY_LIMIT: usize = 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub concurrency_limit: usize,
    pub request_body_limit: usize,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = parse_var("APP_PORT").unwrap_or(DEFAULT_PORT);
        let concurrency_limit =
            parse_var("APP_CONCURRENCY_LIMIT").unwrap_or(DEFAULT_CONCURRENCY_LIMIT);
        let request_body_limit =
            parse_var("APP_REQUEST_BODY_LIMIT").unwrap_or(DEFAULT_REQUEST_BODY_LIMIT);
        Ok(Self {
            database_url,
            host,
            port,
            concurrency_limit,
            request_body_limit,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|value| value.parse().ok())
}
