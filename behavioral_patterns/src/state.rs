//! State pattern: a warp portal whose replies depend on the city it
//! currently points at.
//!
//! The portal network covers a closed set of cities, so the transition
//! logic is a compile-time-checked match rather than an open class
//! hierarchy. Warping to the city the portal already points at answers
//! "break" and leaves the state untouched; any other target moves the
//! portal and answers "done".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors surfaced by the portal.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    /// The requested destination names no city on the portal network.
    #[error("invalid portal state {0:?}: not a city on the portal network")]
    InvalidState(String),

    /// A portal configuration snippet could not be parsed.
    #[error("malformed portal configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Destinations reachable through a portal.
///
/// Every transition, including warping a city onto itself, is legal:
/// the network is a complete graph over these three variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum City {
    /// The bustling capital every new adventurer starts from.
    #[default]
    MainCity,
    /// A harbor city on the ocean floor, kept dry by old magic.
    MarineCity,
    /// A fortress drifting above the cloud line.
    SkyCity,
}

impl City {
    /// Every city on the network, in charter order.
    pub const ALL: [City; 3] = [City::MainCity, City::MarineCity, City::SkyCity];

    /// Display name as it appears in warp replies.
    pub fn name(&self) -> &'static str {
        match self {
            City::MainCity => "MainCity",
            City::MarineCity => "MarineCity",
            City::SkyCity => "SkyCity",
        }
    }

    /// What greets a traveler stepping out of the portal here.
    pub fn arrival_note(&self) -> &'static str {
        match self {
            City::MainCity => "the clamor of the capital square",
            City::MarineCity => "brine and lantern light",
            City::SkyCity => "thin air and drifting cloud banks",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MainCity" => Ok(City::MainCity),
            "MarineCity" => Ok(City::MarineCity),
            "SkyCity" => Ok(City::SkyCity),
            other => Err(PortalError::InvalidState(other.to_string())),
        }
    }
}

/// Portal settings.
///
/// The origin is a configurable default, not a constant; game data can
/// override it with a snippet like `origin = "SkyCity"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PortalConfig {
    /// City the portal points at before any warp.
    #[serde(default)]
    pub origin: City,
}

impl PortalConfig {
    /// Parse a configuration snippet.
    pub fn from_toml(source: &str) -> Result<Self, PortalError> {
        Ok(toml::from_str(source)?)
    }
}

/// A warp gate holding its current destination city.
///
/// The current city is always a valid [`City`]; there is no unset state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityPortal {
    current: City,
}

impl CityPortal {
    /// Open a portal at the default origin, MainCity.
    pub fn new() -> Self {
        Self::with_config(&PortalConfig::default())
    }

    /// Open a portal pointing at a specific city.
    pub fn with_origin(origin: City) -> Self {
        Self { current: origin }
    }

    /// Open a portal per configuration.
    pub fn with_config(config: &PortalConfig) -> Self {
        Self::with_origin(config.origin)
    }

    /// The city the portal currently points at.
    pub fn current_city(&self) -> City {
        self.current
    }

    /// Warp to `target` and report the outcome.
    ///
    /// Warping to the current city is a deliberate no-op: the reply reads
    /// "break" and the state stays put, signaling "already there" to the
    /// caller. Any other target moves the portal and the reply reads "done".
    pub fn warp(&mut self, target: City) -> String {
        if target == self.current {
            format!("Warp to {} break: already there", target)
        } else {
            self.current = target;
            format!("Warp to {} done: {}", target, target.arrival_note())
        }
    }

    /// Warp to a city given by name.
    ///
    /// This is the boundary where unknown destinations are caught: the name
    /// must parse to a [`City`], otherwise the warp fails with
    /// [`PortalError::InvalidState`] and the portal stays where it was.
    pub fn warp_named(&mut self, name: &str) -> Result<String, PortalError> {
        let target = name.parse::<City>()?;
        Ok(self.warp(target))
    }
}

impl Default for CityPortal {
    fn default() -> Self {
        Self::new()
    }
}
