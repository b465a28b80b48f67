use isa95_types::{DataValue, ModellingRule, NodeClass, NodeId, QualifiedName};
use serde::{Deserialize, Serialize};

/// One end of a reference as seen from the node that stores it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    pub reference_type: NodeId,
    pub is_forward: bool,
    pub target: NodeId,
}

/// Which side of stored references to follow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrowseDirection {
    Forward,
    Inverse,
    Both,
}

impl BrowseDirection {
    pub fn matches(&self, is_forward: bool) -> bool {
        match self {
            Self::Forward => is_forward,
            Self::Inverse => !is_forward,
            Self::Both => true,
        }
    }
}

/// A node of the address space.
///
/// Fields that only apply to some node classes stay `None` elsewhere:
/// `inverse_name` on reference types, `value`/`data_type`/`modelling_rule`
/// on variables.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UaNode {
    pub node_id: NodeId,
    pub node_class: NodeClass,
    pub browse_name: QualifiedName,
    pub description: Option<String>,
    pub is_abstract: bool,
    pub inverse_name: Option<String>,
    pub value: Option<DataValue>,
    pub data_type: Option<NodeId>,
    pub modelling_rule: Option<ModellingRule>,
    references: Vec<Reference>,
}

impl UaNode {
    pub fn new(node_id: NodeId, node_class: NodeClass, browse_name: QualifiedName) -> Self {
        Self {
            node_id,
            node_class,
            browse_name,
            description: None,
            is_abstract: false,
            inverse_name: None,
            value: None,
            data_type: None,
            modelling_rule: None,
            references: Vec::new(),
        }
    }

    /// References in insertion order.
    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    pub(crate) fn push_reference(&mut self, reference: Reference) -> bool {
        if self.references.contains(&reference) {
            return false;
        }
        self.references.push(reference);
        true
    }

    /// Targets of references of exactly `reference_type` in `direction`.
    pub fn targets(&self, reference_type: &NodeId, direction: BrowseDirection) -> Vec<&NodeId> {
        self.references
            .iter()
            .filter(|r| &r.reference_type == reference_type && direction.matches(r.is_forward))
            .map(|r| &r.target)
            .collect()
    }
}
