//! # Schema Declarations
//!
//! Types describing the provider and resource schemas a host harness reads
//! before driving lifecycle operations. Builder constructors cover the
//! attribute shapes the push resource needs; anything more exotic belongs to
//! the host framework, not this provider.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Value type of a schema attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    /// UTF-8 string value
    String,
    /// Boolean value
    Bool,
    /// 32-bit integer value
    Int,
}

/// A single attribute in a provider or resource schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Value type of the attribute
    pub attr_type: AttributeType,
    /// Practitioner must set this attribute in configuration
    #[serde(default)]
    pub required: bool,
    /// Practitioner may set this attribute in configuration
    #[serde(default)]
    pub optional: bool,
    /// Value is produced by the provider rather than the configuration
    #[serde(default)]
    pub computed: bool,
    /// Value must be redacted from plans and logs
    #[serde(default)]
    pub sensitive: bool,
    /// Human-readable description for documentation generators
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Attribute {
    fn new(attr_type: AttributeType) -> Self {
        Self {
            attr_type,
            required: false,
            optional: false,
            computed: false,
            sensitive: false,
            description: None,
        }
    }

    /// String attribute the practitioner must set
    #[must_use]
    pub fn required_string() -> Self {
        Self {
            required: true,
            ..Self::new(AttributeType::String)
        }
    }

    /// String attribute the practitioner may set
    #[must_use]
    pub fn optional_string() -> Self {
        Self {
            optional: true,
            ..Self::new(AttributeType::String)
        }
    }

    /// String attribute produced by the provider
    #[must_use]
    pub fn computed_string() -> Self {
        Self {
            computed: true,
            ..Self::new(AttributeType::String)
        }
    }

    /// Bool attribute produced by the provider
    #[must_use]
    pub fn computed_bool() -> Self {
        Self {
            computed: true,
            ..Self::new(AttributeType::Bool)
        }
    }

    /// Int attribute produced by the provider
    #[must_use]
    pub fn computed_int() -> Self {
        Self {
            computed: true,
            ..Self::new(AttributeType::Int)
        }
    }

    /// Bool attribute the practitioner may set, defaulted by the provider
    #[must_use]
    pub fn optional_computed_bool() -> Self {
        Self {
            optional: true,
            computed: true,
            ..Self::new(AttributeType::Bool)
        }
    }

    /// Int attribute the practitioner may set, defaulted by the provider
    #[must_use]
    pub fn optional_computed_int() -> Self {
        Self {
            optional: true,
            computed: true,
            ..Self::new(AttributeType::Int)
        }
    }

    /// Mark the attribute as sensitive
    #[must_use]
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    /// Attach a documentation description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A versioned attribute map for one provider or resource block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Schema version, bumped when state upgrades are needed
    pub version: u64,
    /// Attribute name to declaration
    pub attributes: BTreeMap<String, Attribute>,
}

impl Schema {
    /// Empty version-0 schema
    #[must_use]
    pub fn v0() -> Self {
        Self::default()
    }

    /// Add an attribute declaration
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.attributes.insert(name.into(), attribute);
        self
    }
}

/// Full schema surface of a provider: its own configuration block plus one
/// schema per managed resource type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSchema {
    /// Provider configuration block schema
    pub provider: Schema,
    /// Resource type name to schema
    pub resources: BTreeMap<String, Schema>,
}

impl ProviderSchema {
    /// Empty provider schema
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the provider configuration block schema
    #[must_use]
    pub fn with_provider(mut self, schema: Schema) -> Self {
        self.provider = schema;
        self
    }

    /// Register a resource type schema
    #[must_use]
    pub fn with_resource(mut self, type_name: impl Into<String>, schema: Schema) -> Self {
        self.resources.insert(type_name.into(), schema);
        self
    }
}
