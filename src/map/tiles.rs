// SPDX-License-Identifier: MPL-2.0
//! Raster tile download and caching.
//!
//! The cache records every tile it has asked for, so a tile is requested at
//! most once while it stays cached. Failed tiles are remembered too and the
//! map draws its placeholder background in their place.

use crate::app::config::MapConfig;
use crate::domain::geo::TileId;
use iced::widget::image::Handle;
use std::collections::{HashMap, HashSet};
use std::time::Duration;

/// Tiles kept before entries outside the viewport are evicted.
pub const MAX_CACHED_TILES: usize = 256;

/// Timeout for a single tile request.
const TILE_TIMEOUT: Duration = Duration::from_secs(15);

/// Lifecycle of one tile.
#[derive(Debug, Clone)]
pub enum TileState {
    Loading,
    Ready(Handle),
    Failed,
}

#[derive(Debug, Default)]
pub struct TileCache {
    tiles: HashMap<TileId, TileState>,
}

impl TileCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks untracked tiles as loading and returns them.
    ///
    /// The caller is expected to start one download per returned id.
    pub fn begin_missing(&mut self, visible: &[TileId]) -> Vec<TileId> {
        if self.tiles.len() > MAX_CACHED_TILES {
            self.evict_outside(visible);
        }

        let mut started = Vec::new();
        for id in visible {
            if !self.tiles.contains_key(id) {
                self.tiles.insert(*id, TileState::Loading);
                started.push(*id);
            }
        }
        started
    }

    /// Records the outcome of a download.
    pub fn finish(&mut self, id: TileId, result: Result<Handle, String>) {
        let state = match result {
            Ok(handle) => TileState::Ready(handle),
            Err(reason) => {
                tracing::debug!(z = id.z, x = id.x, y = id.y, %reason, "tile failed");
                TileState::Failed
            }
        };
        self.tiles.insert(id, state);
    }

    #[must_use]
    pub fn state(&self, id: TileId) -> Option<&TileState> {
        self.tiles.get(&id)
    }

    /// Image handle of a downloaded tile.
    #[must_use]
    pub fn handle(&self, id: TileId) -> Option<&Handle> {
        match self.tiles.get(&id) {
            Some(TileState::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    // Loading entries stay so their pending download is not duplicated.
    fn evict_outside(&mut self, visible: &[TileId]) {
        let keep: HashSet<&TileId> = visible.iter().collect();
        self.tiles
            .retain(|id, state| keep.contains(id) || matches!(state, TileState::Loading));
    }
}

/// Fills the `{z}`, `{x}`, `{y}` and `{token}` placeholders of a template.
///
/// Returns `None` when the template needs a token and none is available.
#[must_use]
pub fn render_tile_url(template: &str, id: TileId, token: Option<&str>) -> Option<String> {
    let url = template
        .replace("{z}", &id.z.to_string())
        .replace("{x}", &id.x.to_string())
        .replace("{y}", &id.y.to_string());

    if url.contains("{token}") {
        let token = token?;
        return Some(url.replace("{token}", token));
    }
    Some(url)
}

/// Where tiles come from.
#[derive(Debug, Clone)]
pub struct TileSource {
    template: String,
    token: Option<String>,
    http: Option<reqwest::Client>,
}

impl TileSource {
    /// Builds the source from the map configuration.
    ///
    /// Tiles are disabled when the template needs an access token that is
    /// not set, or when the HTTP client cannot be built.
    #[must_use]
    pub fn from_config(config: &MapConfig) -> Self {
        let token = config.access_token();
        let needs_token = config.tile_url_template.contains("{token}");

        let http = if needs_token && token.is_none() {
            tracing::warn!(
                variable = %config.access_token_env,
                "map tile token not set, tiles disabled"
            );
            None
        } else {
            match crate::api::http_client(TILE_TIMEOUT) {
                Ok(client) => Some(client),
                Err(err) => {
                    tracing::warn!(error = %err, "tile client unavailable, tiles disabled");
                    None
                }
            }
        };

        Self {
            template: config.tile_url_template.clone(),
            token,
            http,
        }
    }

    /// A source that never downloads anything.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            template: String::new(),
            token: None,
            http: None,
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.http.is_some()
    }

    #[must_use]
    pub fn url(&self, id: TileId) -> Option<String> {
        render_tile_url(&self.template, id, self.token.as_deref())
    }

    /// Downloads one tile. The future is independent of `self`.
    pub fn fetch(
        &self,
        id: TileId,
    ) -> impl std::future::Future<Output = (TileId, Result<Handle, String>)> + Send + 'static {
        let http = self.http.clone();
        let url = self.url(id);

        async move {
            let result = match (http, url) {
                (Some(http), Some(url)) => download(&http, &url).await,
                _ => Err("tiles disabled".to_string()),
            };
            (id, result)
        }
    }
}

async fn download(http: &reqwest::Client, url: &str) -> Result<Handle, String> {
    let response = http
        .get(url)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|err| err.to_string())?;
    let bytes = response.bytes().await.map_err(|err| err.to_string())?;
    Ok(Handle::from_bytes(bytes.to_vec()))
}
