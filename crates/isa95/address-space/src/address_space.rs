use crate::config::AddressSpaceConfig;
use crate::error::AddressSpaceError;
use crate::hooks::{PostInstallFn, PostInstallRegistry};
use crate::node::{BrowseDirection, Reference, UaNode};
use crate::schema;
use isa95_types::names::UA_NAMESPACE_URI;
use isa95_types::{DataValue, ModellingRule, NodeClass, NodeId, QualifiedName, Variant};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, info, trace};

/// Options for [`AddressSpace::add_object_type`].
#[derive(Clone, Debug, Default)]
pub struct AddObjectTypeOptions {
    pub browse_name: String,
    /// Defaults to BaseObjectType.
    pub subtype_of: Option<NodeId>,
    pub is_abstract: bool,
    pub description: Option<String>,
    /// Requested identifier; allocated in the own namespace when absent.
    pub node_id: Option<NodeId>,
}

impl AddObjectTypeOptions {
    pub fn new(browse_name: impl Into<String>) -> Self {
        Self {
            browse_name: browse_name.into(),
            ..Self::default()
        }
    }

    pub fn subtype_of(mut self, super_type: NodeId) -> Self {
        self.subtype_of = Some(super_type);
        self
    }
}

/// Options for [`AddressSpace::add_object`].
#[derive(Clone, Debug)]
pub struct AddObjectOptions {
    pub browse_name: String,
    pub type_definition: NodeId,
    pub description: Option<String>,
    pub node_id: Option<NodeId>,
    /// Folder or object that organizes the new node.
    pub organized_by: Option<NodeId>,
}

impl AddObjectOptions {
    pub fn new(browse_name: impl Into<String>, type_definition: NodeId) -> Self {
        Self {
            browse_name: browse_name.into(),
            type_definition,
            description: None,
            node_id: None,
            organized_by: None,
        }
    }

    pub fn organized_by(mut self, parent: NodeId) -> Self {
        self.organized_by = Some(parent);
        self
    }
}

/// Options for [`AddressSpace::add_isa95_attribute`].
#[derive(Clone, Debug)]
pub struct Isa95AttributeOptions {
    /// Object or object type that owns the attribute.
    pub attribute_of: NodeId,
    pub browse_name: String,
    pub data_type: NodeId,
    pub value: Variant,
    pub modelling_rule: Option<ModellingRule>,
    pub description: Option<String>,
}

/// In-memory address space.
///
/// Owns every node and both ends of every reference. All mutation goes
/// through `&mut self`; nothing is shared across threads.
#[derive(Debug)]
pub struct AddressSpace {
    config: AddressSpaceConfig,
    namespaces: Vec<String>,
    own_namespace: u16,
    isa95_namespace: Option<u16>,
    nodes: HashMap<NodeId, UaNode>,
    type_index: HashMap<QualifiedName, NodeId>,
    post_install: PostInstallRegistry,
    next_numeric_id: u32,
}

impl AddressSpace {
    /// Create an address space with the base model and, unless disabled,
    /// the ISA-95 equipment schema.
    pub fn new(config: AddressSpaceConfig) -> Result<Self, AddressSpaceError> {
        config.validate()?;
        let mut space = Self {
            next_numeric_id: config.first_numeric_id,
            config,
            namespaces: vec![UA_NAMESPACE_URI.to_string()],
            own_namespace: 0,
            isa95_namespace: None,
            nodes: HashMap::new(),
            type_index: HashMap::new(),
            post_install: PostInstallRegistry::new(),
        };

        schema::load_base_model(&mut space)?;
        if space.config.load_isa95_schema {
            let uri = space.config.isa95_namespace_uri.clone();
            let ns = space.register_namespace(&uri)?;
            space.isa95_namespace = Some(ns);
            schema::load_isa95_equipment_model(&mut space, ns)?;
        }
        let own_uri = space.config.own_namespace_uri.clone();
        space.own_namespace = space.register_namespace(&own_uri)?;

        info!(
            nodes = space.nodes.len(),
            namespaces = space.namespaces.len(),
            isa95 = space.isa95_namespace.is_some(),
            "address space initialized"
        );
        Ok(space)
    }

    pub fn config(&self) -> &AddressSpaceConfig {
        &self.config
    }

    // ── namespaces ──────────────────────────────────────────────────

    pub fn namespace_uris(&self) -> &[String] {
        &self.namespaces
    }

    pub fn namespace_index(&self, uri: &str) -> Option<u16> {
        self.namespaces
            .iter()
            .position(|u| u == uri)
            .and_then(|i| u16::try_from(i).ok())
    }

    /// Register `uri`, returning its index. Registering twice returns the
    /// existing index.
    pub fn register_namespace(&mut self, uri: &str) -> Result<u16, AddressSpaceError> {
        if let Some(index) = self.namespace_index(uri) {
            return Ok(index);
        }
        let index = u16::try_from(self.namespaces.len())
            .map_err(|_| AddressSpaceError::NamespaceTableFull(uri.to_string()))?;
        self.namespaces.push(uri.to_string());
        Ok(index)
    }

    pub fn isa95_namespace_index(&self) -> Option<u16> {
        self.isa95_namespace
    }

    pub fn own_namespace_index(&self) -> u16 {
        self.own_namespace
    }

    // ── nodes ───────────────────────────────────────────────────────

    pub fn node(&self, node_id: &NodeId) -> Option<&UaNode> {
        self.nodes.get(node_id)
    }

    pub fn contains(&self, node_id: &NodeId) -> bool {
        self.nodes.contains_key(node_id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &UaNode> {
        self.nodes.values()
    }

    pub fn browse_name_of(&self, node_id: &NodeId) -> Option<&str> {
        self.nodes.get(node_id).map(|n| n.browse_name.name.as_str())
    }

    pub fn value_of(&self, node_id: &NodeId) -> Option<&DataValue> {
        self.nodes.get(node_id).and_then(|n| n.value.as_ref())
    }

    pub fn objects_folder(&self) -> NodeId {
        schema::objects_folder()
    }

    // ── type lookup ─────────────────────────────────────────────────

    fn find_type(&self, name: &str, namespace: u16, node_class: NodeClass) -> Option<NodeId> {
        let id = self.type_index.get(&QualifiedName::new(namespace, name))?;
        let node = self.nodes.get(id)?;
        (node.node_class == node_class).then(|| id.clone())
    }

    pub fn find_object_type(&self, name: &str, namespace: u16) -> Option<NodeId> {
        self.find_type(name, namespace, NodeClass::ObjectType)
    }

    pub fn find_reference_type(&self, name: &str, namespace: u16) -> Option<NodeId> {
        self.find_type(name, namespace, NodeClass::ReferenceType)
    }

    pub fn find_data_type(&self, name: &str, namespace: u16) -> Option<NodeId> {
        self.find_type(name, namespace, NodeClass::DataType)
    }

    pub fn find_isa95_object_type(&self, name: &str) -> Option<NodeId> {
        self.find_object_type(name, self.isa95_namespace?)
    }

    pub fn find_isa95_reference_type(&self, name: &str) -> Option<NodeId> {
        self.find_reference_type(name, self.isa95_namespace?)
    }

    pub fn find_isa95_data_type(&self, name: &str) -> Option<NodeId> {
        self.find_data_type(name, self.isa95_namespace?)
    }

    // ── type queries ────────────────────────────────────────────────

    pub fn super_type_of(&self, type_id: &NodeId) -> Option<NodeId> {
        let has_subtype = schema::has_subtype();
        self.nodes
            .get(type_id)?
            .targets(&has_subtype, BrowseDirection::Inverse)
            .first()
            .map(|id| (*id).clone())
    }

    /// `type_id` followed by its supertypes, nearest first.
    pub fn supertype_chain(&self, type_id: &NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut current = Some(type_id.clone());
        while let Some(id) = current {
            if chain.contains(&id) {
                break;
            }
            current = self.super_type_of(&id);
            chain.push(id);
        }
        chain
    }

    /// True when `candidate` is `base` or one of its subtypes.
    pub fn is_subtype_of(&self, candidate: &NodeId, base: &NodeId) -> bool {
        self.supertype_chain(candidate).iter().any(|id| id == base)
    }

    pub fn type_definition_of(&self, node_id: &NodeId) -> Option<NodeId> {
        let has_type_definition = schema::has_type_definition();
        self.nodes
            .get(node_id)?
            .targets(&has_type_definition, BrowseDirection::Forward)
            .first()
            .map(|id| (*id).clone())
    }

    /// For type nodes, whether the node is `base` or a subtype of it. For
    /// instances, the same test applied to the type definition.
    pub fn is_instance_or_subtype_of(&self, node_id: &NodeId, base: &NodeId) -> bool {
        let Some(node) = self.nodes.get(node_id) else {
            return false;
        };
        if node.node_class.is_type() {
            self.is_subtype_of(node_id, base)
        } else {
            self.type_definition_of(node_id)
                .is_some_and(|t| self.is_subtype_of(&t, base))
        }
    }

    /// Targets of references of `reference_type` or any of its subtypes,
    /// in insertion order without repeats.
    pub fn find_references_as_objects(
        &self,
        node_id: &NodeId,
        reference_type: &NodeId,
        direction: BrowseDirection,
    ) -> Vec<NodeId> {
        let Some(node) = self.nodes.get(node_id) else {
            return Vec::new();
        };
        let mut seen = HashSet::new();
        node.references()
            .iter()
            .filter(|r| direction.matches(r.is_forward))
            .filter(|r| self.is_subtype_of(&r.reference_type, reference_type))
            .filter(|r| seen.insert(r.target.clone()))
            .map(|r| r.target.clone())
            .collect()
    }

    /// Child of `parent` reached through `reference_type` (or a subtype)
    /// whose browse name is `name`.
    pub fn find_child(
        &self,
        parent: &NodeId,
        reference_type: &NodeId,
        name: &str,
    ) -> Option<NodeId> {
        self.find_references_as_objects(parent, reference_type, BrowseDirection::Forward)
            .into_iter()
            .find(|id| self.browse_name_of(id) == Some(name))
    }

    // ── mutation ────────────────────────────────────────────────────

    pub fn add_object_type(
        &mut self,
        options: AddObjectTypeOptions,
    ) -> Result<NodeId, AddressSpaceError> {
        validate_browse_name(&options.browse_name)?;
        let super_type = options.subtype_of.unwrap_or_else(schema::base_object_type);
        self.expect_class(&super_type, NodeClass::ObjectType)?;

        let browse_name = QualifiedName::new(self.own_namespace, &options.browse_name);
        if self.type_index.contains_key(&browse_name) {
            return Err(AddressSpaceError::DuplicateBrowseName {
                name: options.browse_name,
                scope: format!("namespace {}", self.own_namespace),
            });
        }
        let node_id = self.claim_node_id(options.node_id)?;

        let mut node = UaNode::new(node_id.clone(), NodeClass::ObjectType, browse_name);
        node.is_abstract = options.is_abstract;
        node.description = options.description;
        self.insert_node(node)?;
        self.add_reference_raw(&super_type, &schema::has_subtype(), &node_id)?;

        debug!(
            node_id = %node_id,
            browse_name = %options.browse_name,
            subtype_of = %super_type,
            "object type added"
        );
        Ok(node_id)
    }

    /// Instantiate an object and run the post-install hooks of its type
    /// chain.
    pub fn add_object(&mut self, options: AddObjectOptions) -> Result<NodeId, AddressSpaceError> {
        validate_browse_name(&options.browse_name)?;
        let type_node = self.expect_class(&options.type_definition, NodeClass::ObjectType)?;
        if type_node.is_abstract {
            return Err(AddressSpaceError::AbstractType(options.type_definition));
        }
        if let Some(parent) = &options.organized_by {
            if !self.contains(parent) {
                return Err(AddressSpaceError::NodeNotFound(parent.clone()));
            }
            let hierarchical = schema::hierarchical_references();
            if self.find_child(parent, &hierarchical, &options.browse_name).is_some() {
                return Err(AddressSpaceError::DuplicateBrowseName {
                    name: options.browse_name,
                    scope: format!("children of {}", parent),
                });
            }
        }
        let node_id = self.claim_node_id(options.node_id)?;

        let mut node = UaNode::new(
            node_id.clone(),
            NodeClass::Object,
            QualifiedName::new(self.own_namespace, &options.browse_name),
        );
        node.description = options.description;
        self.insert_node(node)?;
        self.add_reference_raw(&node_id, &schema::has_type_definition(), &options.type_definition)?;
        if let Some(parent) = &options.organized_by {
            self.add_reference_raw(parent, &schema::organizes(), &node_id)?;
        }
        debug!(
            node_id = %node_id,
            browse_name = %options.browse_name,
            type_definition = %options.type_definition,
            "object added"
        );

        self.run_post_install(&node_id, &options.type_definition)?;
        Ok(node_id)
    }

    /// Add a variable under `attribute_of` through HasISA95Attribute.
    pub fn add_isa95_attribute(
        &mut self,
        options: Isa95AttributeOptions,
    ) -> Result<NodeId, AddressSpaceError> {
        validate_browse_name(&options.browse_name)?;
        let has_isa95_attribute = self
            .find_isa95_reference_type(isa95_types::names::isa95::HAS_ISA95_ATTRIBUTE)
            .ok_or_else(|| {
                AddressSpaceError::MissingStandardNode(
                    isa95_types::names::isa95::HAS_ISA95_ATTRIBUTE.to_string(),
                )
            })?;

        let owner = self
            .nodes
            .get(&options.attribute_of)
            .ok_or_else(|| AddressSpaceError::NodeNotFound(options.attribute_of.clone()))?;
        if !matches!(owner.node_class, NodeClass::Object | NodeClass::ObjectType) {
            return Err(AddressSpaceError::UnexpectedNodeClass {
                node: options.attribute_of.clone(),
                expected: NodeClass::Object,
                actual: owner.node_class,
            });
        }
        self.expect_class(&options.data_type, NodeClass::DataType)?;
        if self
            .find_child(&options.attribute_of, &has_isa95_attribute, &options.browse_name)
            .is_some()
        {
            return Err(AddressSpaceError::DuplicateBrowseName {
                name: options.browse_name,
                scope: format!("attributes of {}", options.attribute_of),
            });
        }

        let node_id = self.allocate_node_id();
        let mut node = UaNode::new(
            node_id.clone(),
            NodeClass::Variable,
            QualifiedName::new(self.own_namespace, &options.browse_name),
        );
        node.value = Some(DataValue::new(options.value));
        node.data_type = Some(options.data_type);
        node.modelling_rule = options.modelling_rule;
        node.description = options.description;
        self.insert_node(node)?;
        self.add_reference_raw(&node_id, &schema::has_type_definition(), &schema::property_type())?;
        self.add_reference_raw(&options.attribute_of, &has_isa95_attribute, &node_id)?;

        trace!(
            node_id = %node_id,
            owner = %options.attribute_of,
            browse_name = %options.browse_name,
            "attribute added"
        );
        Ok(node_id)
    }

    /// Add a reference, storing it on both ends. Adding an existing
    /// reference again is a no-op.
    pub fn add_reference(
        &mut self,
        source: &NodeId,
        reference_type: &NodeId,
        target: &NodeId,
    ) -> Result<(), AddressSpaceError> {
        self.expect_class(reference_type, NodeClass::ReferenceType)?;
        self.add_reference_raw(source, reference_type, target)?;
        trace!(
            source = %source,
            reference_type = %reference_type,
            target = %target,
            "reference added"
        );
        Ok(())
    }

    /// Register a hook run after every instantiation of `type_id` or one of
    /// its subtypes.
    pub fn install_post_install_func<F>(
        &mut self,
        type_id: &NodeId,
        hook: F,
    ) -> Result<(), AddressSpaceError>
    where
        F: Fn(&mut AddressSpace, &NodeId, &NodeId) -> Result<(), AddressSpaceError>
            + Send
            + Sync
            + 'static,
    {
        self.expect_class(type_id, NodeClass::ObjectType)?;
        let hook: PostInstallFn = Arc::new(hook);
        self.post_install.install(type_id.clone(), hook);
        debug!(type_id = %type_id, "post-install hook registered");
        Ok(())
    }

    pub fn post_install_hook_count(&self, type_id: &NodeId) -> usize {
        self.post_install.count(type_id)
    }

    // ── internals ───────────────────────────────────────────────────

    fn run_post_install(
        &mut self,
        instance: &NodeId,
        type_definition: &NodeId,
    ) -> Result<(), AddressSpaceError> {
        let chain = self.supertype_chain(type_definition);
        for (owner, hook) in self.post_install.resolve_chain(&chain) {
            trace!(instance = %instance, hook_owner = %owner, "running post-install hook");
            hook(self, instance, type_definition).map_err(|e| AddressSpaceError::PostInstallFailed {
                type_id: owner.clone(),
                source: Box::new(e),
            })?;
        }
        Ok(())
    }

    fn expect_class(
        &self,
        node_id: &NodeId,
        expected: NodeClass,
    ) -> Result<&UaNode, AddressSpaceError> {
        let node = self
            .nodes
            .get(node_id)
            .ok_or_else(|| AddressSpaceError::NodeNotFound(node_id.clone()))?;
        if node.node_class != expected {
            return Err(AddressSpaceError::UnexpectedNodeClass {
                node: node_id.clone(),
                expected,
                actual: node.node_class,
            });
        }
        Ok(node)
    }

    fn claim_node_id(&mut self, requested: Option<NodeId>) -> Result<NodeId, AddressSpaceError> {
        match requested {
            Some(id) if self.nodes.contains_key(&id) => Err(AddressSpaceError::DuplicateNodeId(id)),
            Some(id) => Ok(id),
            None => Ok(self.allocate_node_id()),
        }
    }

    fn allocate_node_id(&mut self) -> NodeId {
        loop {
            let id = NodeId::numeric(self.own_namespace, self.next_numeric_id);
            self.next_numeric_id = self.next_numeric_id.wrapping_add(1);
            if !self.nodes.contains_key(&id) {
                return id;
            }
        }
    }

    pub(crate) fn insert_node(&mut self, node: UaNode) -> Result<(), AddressSpaceError> {
        if self.nodes.contains_key(&node.node_id) {
            return Err(AddressSpaceError::DuplicateNodeId(node.node_id));
        }
        if node.node_class.is_type() {
            if self.type_index.contains_key(&node.browse_name) {
                return Err(AddressSpaceError::DuplicateBrowseName {
                    name: node.browse_name.name,
                    scope: format!("namespace {}", node.browse_name.namespace_index),
                });
            }
            self.type_index
                .insert(node.browse_name.clone(), node.node_id.clone());
        }
        self.nodes.insert(node.node_id.clone(), node);
        Ok(())
    }

    pub(crate) fn add_reference_raw(
        &mut self,
        source: &NodeId,
        reference_type: &NodeId,
        target: &NodeId,
    ) -> Result<(), AddressSpaceError> {
        if !self.nodes.contains_key(target) {
            return Err(AddressSpaceError::NodeNotFound(target.clone()));
        }
        let source_node = self
            .nodes
            .get_mut(source)
            .ok_or_else(|| AddressSpaceError::NodeNotFound(source.clone()))?;
        source_node.push_reference(Reference {
            reference_type: reference_type.clone(),
            is_forward: true,
            target: target.clone(),
        });
        if let Some(target_node) = self.nodes.get_mut(target) {
            target_node.push_reference(Reference {
                reference_type: reference_type.clone(),
                is_forward: false,
                target: source.clone(),
            });
        }
        Ok(())
    }
}

fn validate_browse_name(name: &str) -> Result<(), AddressSpaceError> {
    if name.trim().is_empty() {
        return Err(AddressSpaceError::InvalidBrowseName(name.to_string()));
    }
    Ok(())
}
