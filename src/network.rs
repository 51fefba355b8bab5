//! Network constants for the Stockfighter SDK.

/// Default host serving both the order book and game-master APIs.
pub const DEFAULT_BASE_URL: &str = "https://api.stockfighter.io";

/// Path of the order book API, relative to the host.
pub const ORDER_BOOK_PATH: &[&str] = &["ob", "api"];

/// Path of the game-master API, relative to the host.
pub const GAME_MASTER_PATH: &[&str] = &["gm"];

/// Header carrying the API key on every request.
pub const AUTH_HEADER: &str = "X-Starfighter-Authorization";
