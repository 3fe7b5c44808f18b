//! Network table and section grouping.

use std::collections::HashSet;

/// Networks covered by the documentation site, in authoring order.
const BUILTIN_NETWORKS: &[(&str, &str)] = &[
    ("polkadot", "Polkadot"),
    ("polkadot_asset_hub", "Polkadot Asset Hub"),
    ("polkadot_bridge_hub", "Polkadot Bridge Hub"),
    ("polkadot_collectives", "Polkadot Collectives"),
    ("polkadot_people", "Polkadot People"),
    ("ksmcc3", "Kusama"),
    ("ksmcc3_asset_hub", "Kusama Asset Hub"),
    ("ksmcc3_bridge_hub", "Kusama Bridge Hub"),
    ("ksmcc3_people", "Kusama People"),
    ("ksmcc3_encointer", "Encointer"),
    ("paseo", "Paseo"),
    ("paseo_asset_hub", "Paseo Asset Hub"),
    ("westend2", "Westend"),
    ("westend2_asset_hub", "Westend Asset Hub"),
    ("westend2_bridge_hub", "Westend Bridge Hub"),
    ("westend2_collectives", "Westend Collectives"),
    ("westend2_people", "Westend People"),
];

/// Sidebar grouping of [`BUILTIN_NETWORKS`].
const BUILTIN_SECTIONS: &[(&str, &[&str])] = &[
    (
        "Polkadot and parachains",
        &[
            "polkadot",
            "polkadot_asset_hub",
            "polkadot_bridge_hub",
            "polkadot_collectives",
            "polkadot_people",
        ],
    ),
    (
        "Kusama and parachains",
        &[
            "ksmcc3",
            "ksmcc3_asset_hub",
            "ksmcc3_bridge_hub",
            "ksmcc3_people",
            "ksmcc3_encointer",
        ],
    ),
    ("Paseo and parachains", &["paseo", "paseo_asset_hub"]),
    (
        "Westend and parachains",
        &[
            "westend2",
            "westend2_asset_hub",
            "westend2_bridge_hub",
            "westend2_collectives",
            "westend2_people",
        ],
    ),
];

/// A network the documentation is generated for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Network {
    /// Short slug (e.g., "polkadot", "ksmcc3_asset_hub").
    pub id: String,
    /// Human-readable name shown in navigation.
    pub name: String,
}

impl Network {
    /// Create a network entry.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A presentation group of networks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    /// Heading text.
    pub heading: String,
    /// Network ids, in display order.
    pub networks: Vec<String>,
}

impl Section {
    /// Create a section.
    #[must_use]
    pub fn new<I, S>(heading: impl Into<String>, networks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            heading: heading.into(),
            networks: networks.into_iter().map(Into::into).collect(),
        }
    }
}

/// Registry consistency violation.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("network id cannot be empty (entry #{index})")]
    EmptyId { index: usize },

    #[error("network id '{0}' must only contain lowercase letters, digits and underscores")]
    InvalidId(String),

    #[error("duplicate network id '{0}'")]
    DuplicateId(String),

    #[error("network '{0}' has an empty display name")]
    EmptyName(String),

    #[error("section #{index} has an empty heading")]
    EmptyHeading { index: usize },

    #[error("section '{section}' references unknown network '{id}'")]
    UnknownNetwork { section: String, id: String },
}

/// Ordered set of networks plus their section grouping.
#[derive(Clone, Debug)]
pub struct Registry {
    networks: Vec<Network>,
    sections: Vec<Section>,
}

impl Registry {
    /// Create a registry from arbitrary entries.
    ///
    /// Entries are not checked here; call [`Registry::validate`] for that.
    #[must_use]
    pub fn new(networks: Vec<Network>, sections: Vec<Section>) -> Self {
        Self { networks, sections }
    }

    /// The networks the documentation site ships with.
    #[must_use]
    pub fn builtin() -> Self {
        let networks = BUILTIN_NETWORKS
            .iter()
            .map(|(id, name)| Network::new(*id, *name))
            .collect();
        let sections = BUILTIN_SECTIONS
            .iter()
            .map(|(heading, ids)| Section::new(*heading, ids.iter().copied()))
            .collect();
        Self::new(networks, sections)
    }

    /// All networks in authoring order.
    #[must_use]
    pub fn networks(&self) -> &[Network] {
        &self.networks
    }

    /// Network ids in authoring order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.networks.iter().map(|n| n.id.as_str())
    }

    /// Look up a network by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Network> {
        self.networks.iter().find(|n| n.id == id)
    }

    /// Display name for a network id.
    #[must_use]
    pub fn display_name(&self, id: &str) -> Option<&str> {
        self.get(id).map(|n| n.name.as_str())
    }

    /// Section grouping in display order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Number of networks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.networks.len()
    }

    /// True if the registry has no networks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    /// Check the registry for consistency.
    ///
    /// Returns the first violation in authoring order: networks are checked
    /// before sections.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let mut seen = HashSet::with_capacity(self.networks.len());

        for (index, network) in self.networks.iter().enumerate() {
            if network.id.is_empty() {
                return Err(RegistryError::EmptyId { index });
            }
            if !is_slug(&network.id) {
                return Err(RegistryError::InvalidId(network.id.clone()));
            }
            if !seen.insert(network.id.as_str()) {
                return Err(RegistryError::DuplicateId(network.id.clone()));
            }
            if network.name.trim().is_empty() {
                return Err(RegistryError::EmptyName(network.id.clone()));
            }
        }

        for (index, section) in self.sections.iter().enumerate() {
            if section.heading.trim().is_empty() {
                return Err(RegistryError::EmptyHeading { index });
            }
            if let Some(id) = section.networks.iter().find(|id| !seen.contains(id.as_str())) {
                return Err(RegistryError::UnknownNetwork {
                    section: section.heading.clone(),
                    id: id.clone(),
                });
            }
        }

        Ok(())
    }
}

fn is_slug(id: &str) -> bool {
    id.bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
}
