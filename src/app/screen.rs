// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use std::fmt;
use std::str::FromStr;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Map,
    CreateOrphanage,
    Details,
}

impl FromStr for Screen {
    type Err = String;

    /// Parses the `--screen` command line value.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "map" => Ok(Screen::Map),
            "create" => Ok(Screen::CreateOrphanage),
            "details" => Ok(Screen::Details),
            other => Err(format!("unknown screen '{other}' (expected map, create or details)")),
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Map => "map",
            Screen::CreateOrphanage => "create",
            Screen::Details => "details",
        };
        f.write_str(name)
    }
}
