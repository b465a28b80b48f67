use crate::error::AddressSpaceError;
use isa95_types::names::ISA95_NAMESPACE_URI;
use serde::{Deserialize, Serialize};

/// Configuration for a new [`AddressSpace`](crate::AddressSpace).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressSpaceConfig {
    /// URI under which the ISA-95 schema is registered.
    pub isa95_namespace_uri: String,
    /// URI of the namespace that receives user-created nodes.
    pub own_namespace_uri: String,
    /// First numeric identifier handed out in the own namespace.
    pub first_numeric_id: u32,
    /// Install the ISA-95 equipment schema at construction.
    pub load_isa95_schema: bool,
}

impl Default for AddressSpaceConfig {
    fn default() -> Self {
        Self {
            isa95_namespace_uri: ISA95_NAMESPACE_URI.to_string(),
            own_namespace_uri: "urn:isa95-equipment:model".to_string(),
            first_numeric_id: 1000,
            load_isa95_schema: true,
        }
    }
}

impl AddressSpaceConfig {
    /// Base model only, without the ISA-95 schema.
    pub fn bare() -> Self {
        Self {
            load_isa95_schema: false,
            ..Self::default()
        }
    }

    pub fn with_own_namespace(mut self, uri: impl Into<String>) -> Self {
        self.own_namespace_uri = uri.into();
        self
    }

    /// Parse a JSON document; absent fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, AddressSpaceError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| AddressSpaceError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AddressSpaceError> {
        if self.own_namespace_uri.is_empty() {
            return Err(AddressSpaceError::InvalidConfig(
                "own_namespace_uri must not be empty".into(),
            ));
        }
        if self.load_isa95_schema && self.isa95_namespace_uri.is_empty() {
            return Err(AddressSpaceError::InvalidConfig(
                "isa95_namespace_uri must not be empty".into(),
            ));
        }
        if self.own_namespace_uri == self.isa95_namespace_uri {
            return Err(AddressSpaceError::InvalidConfig(
                "own namespace must differ from the ISA-95 namespace".into(),
            ));
        }
        Ok(())
    }
}
