//! Endpoint registry — immutable name → target mapping for all device
//! categories.
//!
//! The registry is loaded once at process start and shared read-only by
//! every request. Lights and switches always point at remote devices;
//! thermometers may also resolve to the on-board sensor ([`Target::Local`]).

use std::collections::HashMap;

/// Reserved resource name for group operations on lights and switches.
///
/// Resolution never treats it as a device name.
pub const GROUP_NAME: &str = "all";

/// Where a thermometer request should be served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Read the on-board sensor directly.
    Local,
    /// Forward to a remote device at this URL.
    Remote(String),
}

impl Target {
    /// Parse a configuration value: the literal `"local"` selects the
    /// on-board sensor, anything else is taken as a remote URL.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("local") {
            Self::Local
        } else {
            Self::Remote(value.to_string())
        }
    }
}

/// Resolution result for a light name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightTarget<'a> {
    /// Accepts a numeric brightness level.
    Dimmable(&'a str),
    /// Accepts only an on/off state string.
    NonDimmable(&'a str),
}

impl<'a> LightTarget<'a> {
    /// The upstream URL for this light.
    #[must_use]
    pub fn url(self) -> &'a str {
        match self {
            Self::Dimmable(url) | Self::NonDimmable(url) => url,
        }
    }
}

/// The four name → target maps, loaded once at startup.
#[derive(Debug, Default, Clone)]
pub struct EndpointRegistry {
    dimmable: HashMap<String, String>,
    nondimmable: HashMap<String, String>,
    switches: HashMap<String, String>,
    thermometers: HashMap<String, Target>,
}

impl EndpointRegistry {
    /// Build a registry from pre-assembled maps (the configuration path).
    #[must_use]
    pub fn new(
        dimmable: HashMap<String, String>,
        nondimmable: HashMap<String, String>,
        switches: HashMap<String, String>,
        thermometers: HashMap<String, Target>,
    ) -> Self {
        Self {
            dimmable,
            nondimmable,
            switches,
            thermometers,
        }
    }

    /// Start building a registry entry by entry.
    #[must_use]
    pub fn builder() -> EndpointRegistryBuilder {
        EndpointRegistryBuilder::default()
    }

    /// Reopen this registry for additional entries.
    #[must_use]
    pub fn into_builder(self) -> EndpointRegistryBuilder {
        EndpointRegistryBuilder { registry: self }
    }

    /// Whether `name` is the reserved group name.
    #[must_use]
    pub fn is_group(name: &str) -> bool {
        name == GROUP_NAME
    }

    /// Resolve a light name, checking the dimmable registry first.
    ///
    /// A name present in both registries resolves to the dimmable one.
    #[must_use]
    pub fn light(&self, name: &str) -> Option<LightTarget<'_>> {
        self.dimmable
            .get(name)
            .map(|url| LightTarget::Dimmable(url))
            .or_else(|| {
                self.nondimmable
                    .get(name)
                    .map(|url| LightTarget::NonDimmable(url))
            })
    }

    /// Resolve a switch name to its upstream URL.
    #[must_use]
    pub fn switch(&self, name: &str) -> Option<&str> {
        self.switches.get(name).map(String::as_str)
    }

    /// Resolve a thermometer name.
    #[must_use]
    pub fn thermometer(&self, name: &str) -> Option<&Target> {
        self.thermometers.get(name)
    }
}

/// Incremental [`EndpointRegistry`] construction, mainly for tests and the
/// virtual demo wiring.
#[derive(Debug, Default)]
pub struct EndpointRegistryBuilder {
    registry: EndpointRegistry,
}

impl EndpointRegistryBuilder {
    /// Register a dimmable light.
    #[must_use]
    pub fn dimmable(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.registry.dimmable.insert(name.into(), url.into());
        self
    }

    /// Register a non-dimmable light.
    #[must_use]
    pub fn nondimmable(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.registry.nondimmable.insert(name.into(), url.into());
        self
    }

    /// Register a switch.
    #[must_use]
    pub fn switch(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.registry.switches.insert(name.into(), url.into());
        self
    }

    /// Register a thermometer.
    #[must_use]
    pub fn thermometer(mut self, name: impl Into<String>, target: Target) -> Self {
        self.registry.thermometers.insert(name.into(), target);
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> EndpointRegistry {
        self.registry
    }
}
