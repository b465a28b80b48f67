use isa95_types::{NodeClass, NodeId};

/// Errors raised by the address space.
#[derive(Debug, thiserror::Error)]
pub enum AddressSpaceError {
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),
    #[error("node id already in use: {0}")]
    DuplicateNodeId(NodeId),
    #[error("browse name '{name}' already used in {scope}")]
    DuplicateBrowseName { name: String, scope: String },
    #[error("invalid browse name: '{0}'")]
    InvalidBrowseName(String),
    #[error("unexpected node class for {node}: expected {expected}, got {actual}")]
    UnexpectedNodeClass {
        node: NodeId,
        expected: NodeClass,
        actual: NodeClass,
    },
    #[error("cannot instantiate abstract type {0}")]
    AbstractType(NodeId),
    #[error("standard node not loaded: {0}")]
    MissingStandardNode(String),
    #[error("{reference} constraint violated: {node} is not a {expected}")]
    ReferenceConstraint {
        reference: String,
        node: NodeId,
        expected: String,
    },
    #[error("post-install hook of {type_id} failed: {source}")]
    PostInstallFailed {
        type_id: NodeId,
        #[source]
        source: Box<AddressSpaceError>,
    },
    #[error("namespace table full, cannot register {0}")]
    NamespaceTableFull(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
