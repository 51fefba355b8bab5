//! URL builder for the order book and game-master endpoints.
//!
//! Pure functions: the same base and parameters always give the same URL.
//! Segments are appended after trimming trailing slashes from the base path,
//! so `https://host/gm` and `https://host/gm/` build identical URLs.

use crate::domain::level::LevelName;
use crate::error::ConfigError;
use crate::network::{GAME_MASTER_PATH, ORDER_BOOK_PATH};
use crate::shared::InstanceId;
use reqwest::Url;

/// Base URLs of the two API surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiUrls {
    order_book: Url,
    game_master: Url,
}

impl ApiUrls {
    /// Derive `{base}/ob/api` and `{base}/gm` from a single host address.
    pub fn parse(base: &str) -> Result<Self, ConfigError> {
        let base = parse_base(base)?;
        Ok(Self {
            order_book: join(&base, ORDER_BOOK_PATH),
            game_master: join(&base, GAME_MASTER_PATH),
        })
    }

    /// Use explicit order book and game-master bases, e.g. for a proxy that
    /// serves them on different hosts.
    pub fn from_parts(order_book: &str, game_master: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            order_book: parse_base(order_book)?,
            game_master: parse_base(game_master)?,
        })
    }

    pub fn order_book(&self) -> &Url {
        &self.order_book
    }

    pub fn game_master(&self) -> &Url {
        &self.game_master
    }
}

fn parse_base(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("cannot carry path segments".to_string()));
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

/// Append percent-encoded path segments to `base`.
fn join<S: AsRef<str>>(base: &Url, segments: &[S]) -> Url {
    let mut path = base.path().trim_end_matches('/').to_string();
    for segment in segments {
        path.push('/');
        path.push_str(&urlencoding::encode(segment.as_ref()));
    }

    let mut url = base.clone();
    url.set_path(&path);
    url
}

/// `{base}/heartbeat`
pub fn heartbeat_url(base: &Url) -> Url {
    join(base, &["heartbeat"])
}

/// `{ob}/venues/{venue}/heartbeat`
pub fn venue_heartbeat_url(order_book: &Url, venue: &str) -> Url {
    join(order_book, &["venues", venue, "heartbeat"])
}

/// `{gm}/levels/{level}`
pub fn start_level_url(game_master: &Url, level: LevelName) -> Url {
    join(game_master, &["levels", level.as_str()])
}

/// `{gm}/instances/{id}`
pub fn instance_status_url(game_master: &Url, instance: InstanceId) -> Url {
    join(game_master, &["instances".to_string(), instance.to_string()])
}

/// `{gm}/instances/{id}/stop`
pub fn stop_instance_url(game_master: &Url, instance: InstanceId) -> Url {
    instance_action_url(game_master, instance, "stop")
}

/// `{gm}/instances/{id}/restart`
pub fn restart_instance_url(game_master: &Url, instance: InstanceId) -> Url {
    instance_action_url(game_master, instance, "restart")
}

/// `{gm}/instances/{id}/resume`
pub fn resume_instance_url(game_master: &Url, instance: InstanceId) -> Url {
    instance_action_url(game_master, instance, "resume")
}

fn instance_action_url(game_master: &Url, instance: InstanceId, action: &str) -> Url {
    join(
        game_master,
        &["instances", instance.to_string().as_str(), action],
    )
}
