//! World metadata - turns a world id into a [`WorldSnapshot`]
//!
//! The public world page carries the display name, author and thumbnail in
//! its OpenGraph tags:
//!
//! ```text
//! <meta name="og:title" content="Neon ＠ Club by Jane Doe">
//! <meta name="og:image" content="https://.../thumbnail.png">
//! ```

mod fetcher;
pub mod html;
mod page;
pub mod symbols;

pub use fetcher::HttpWorldFetcher;
pub use page::{parse_world_page, split_title};
pub use symbols::normalize_symbols;

use async_trait::async_trait;

use crate::types::WorldSnapshot;

/// World page URL prefix; the world id is appended
pub const WORLD_PAGE_URL: &str = "https://vrchat.com/home/world/";

/// User agent sent with every world page request
pub const USER_AGENT: &str = "VRCOBSOverlay";

/// Source of world metadata
#[async_trait]
pub trait WorldFetcher: Send + Sync {
    /// Fetch metadata for `id`. Failures are logged and yield `None`.
    async fn fetch(&self, id: &str) -> Option<WorldSnapshot>;
}
