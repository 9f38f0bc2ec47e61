use std::{net::SocketAddr, time::Duration};

use anyhow::{bail, Context};
use tickerboard_market_data::Watchlist;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_REFRESH_SECS: u64 = 60;
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

#[derive(Clone, Debug)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub request_timeout: Duration,
    pub refresh_interval: Duration,
    pub watchlist: Watchlist,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let listen_addr: SocketAddr = match var("TB_LISTEN_ADDR") {
            Some(addr) => addr
                .trim()
                .parse()
                .with_context(|| format!("Invalid TB_LISTEN_ADDR '{}'", addr))?,
            None => {
                let port = match var("PORT") {
                    Some(port) => port
                        .trim()
                        .parse::<u16>()
                        .with_context(|| format!("Invalid PORT '{}'", port))?,
                    None => DEFAULT_PORT,
                };
                SocketAddr::from(([0, 0, 0, 0], port))
            }
        };

        let watchlist = match var("TB_WATCHLIST") {
            Some(spec) => spec.parse().context("Invalid TB_WATCHLIST")?,
            None => Watchlist::default(),
        };

        let refresh_secs = parse_u64(var("TB_REFRESH_SECS"), "TB_REFRESH_SECS", DEFAULT_REFRESH_SECS)?;
        if refresh_secs == 0 {
            bail!("TB_REFRESH_SECS must be greater than zero");
        }

        let timeout_ms = parse_u64(
            var("TB_REQUEST_TIMEOUT_MS"),
            "TB_REQUEST_TIMEOUT_MS",
            DEFAULT_REQUEST_TIMEOUT_MS,
        )?;

        Ok(Self {
            listen_addr,
            request_timeout: Duration::from_millis(timeout_ms),
            refresh_interval: Duration::from_secs(refresh_secs),
            watchlist,
        })
    }
}

fn parse_u64(value: Option<String>, key: &str, default: u64) -> anyhow::Result<u64> {
    match value {
        Some(v) => v
            .trim()
            .parse()
            .with_context(|| format!("Invalid {} '{}'", key, v)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0:5000".parse().unwrap());
        assert_eq!(config.refresh_interval, Duration::from_secs(60));
        assert_eq!(config.request_timeout, Duration::from_millis(30_000));
        assert_eq!(config.watchlist, Watchlist::default());
    }

    #[test]
    fn port_used_without_listen_addr() {
        let config = config_from(&[("PORT", "8081")]).unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0:8081".parse().unwrap());

        let config =
            config_from(&[("PORT", "8081"), ("TB_LISTEN_ADDR", "127.0.0.1:9000")]).unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:9000".parse().unwrap());
    }

    #[test]
    fn custom_watchlist_and_intervals() {
        let config = config_from(&[
            ("TB_WATCHLIST", "Apple (US)=AAPL;BHP (ASX)=BHP.AX"),
            ("TB_REFRESH_SECS", "15"),
            ("TB_REQUEST_TIMEOUT_MS", "5000"),
        ])
        .unwrap();
        assert_eq!(config.watchlist.len(), 2);
        assert_eq!(config.refresh_interval, Duration::from_secs(15));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config_from(&[("TB_WATCHLIST", "  "), ("PORT", "")]).unwrap();
        assert_eq!(config.watchlist, Watchlist::default());
        assert_eq!(config.listen_addr.port(), 5000);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(config_from(&[("TB_LISTEN_ADDR", "nowhere")]).is_err());
        assert!(config_from(&[("PORT", "http")]).is_err());
        assert!(config_from(&[("TB_WATCHLIST", "AAPL")]).is_err());
        assert!(config_from(&[("TB_REFRESH_SECS", "0")]).is_err());
        assert!(config_from(&[("TB_REQUEST_TIMEOUT_MS", "-1")]).is_err());
    }
}
