// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::geo::TileId;
use crate::ui::create_orphanage;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::orphanage_details;
use crate::ui::orphanages_map;
use iced::widget::image::Handle;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Map(orphanages_map::Message),
    CreateOrphanage(create_orphanage::Message),
    Details(orphanage_details::Message),
    Notification(notifications::NotificationMessage),
    /// A map tile download finished.
    TileLoaded {
        id: TileId,
        result: Result<Handle, String>,
    },
    Tick(Instant), // Periodic tick for spinners and toast expiry
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ORPHANAGE_FINDER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Screen shown on startup. Defaults to the map.
    pub screen: Option<Screen>,
}
