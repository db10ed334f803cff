use std::net::SocketAddr;

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub database_url: String,
    pub reset_db: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 =
            std::env::var("PORT").unwrap_or_else(|_| "8080".to_string()).parse().context("PORT")?;

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://catalogd.db?mode=rwc".to_string());

        let reset_db = std::env::var("RESET_DB")
            .is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));

        Ok(Self { addr: format!("{host}:{port}").parse().context("HOST/PORT")?, database_url, reset_db })
    }
}
