use crate::address_space::AddressSpace;
use crate::error::AddressSpaceError;
use isa95_types::NodeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Hook run after an object has been instantiated.
///
/// Called as `hook(space, instance, type_definition)` where
/// `type_definition` is the type the instance was created from (which may
/// be a subtype of the type the hook was installed on).
pub type PostInstallFn =
    Arc<dyn Fn(&mut AddressSpace, &NodeId, &NodeId) -> Result<(), AddressSpaceError> + Send + Sync>;

/// Post-install hooks keyed by the type they were installed on.
#[derive(Clone, Default)]
pub struct PostInstallRegistry {
    hooks: HashMap<NodeId, Vec<PostInstallFn>>,
}

impl PostInstallRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn install(&mut self, type_id: NodeId, hook: PostInstallFn) {
        self.hooks.entry(type_id).or_default().push(hook);
    }

    /// Hooks installed on `type_id` itself, in insertion order.
    pub fn hooks_for(&self, type_id: &NodeId) -> &[PostInstallFn] {
        self.hooks.get(type_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, type_id: &NodeId) -> usize {
        self.hooks_for(type_id).len()
    }

    /// Hooks for a supertype chain, nearest type first.
    ///
    /// Each type contributes its hooks once even if it appears twice in
    /// `chain`.
    pub fn resolve_chain(&self, chain: &[NodeId]) -> Vec<(NodeId, PostInstallFn)> {
        let mut seen: Vec<&NodeId> = Vec::with_capacity(chain.len());
        let mut resolved = Vec::new();
        for type_id in chain {
            if seen.contains(&type_id) {
                continue;
            }
            seen.push(type_id);
            for hook in self.hooks_for(type_id) {
                resolved.push((type_id.clone(), Arc::clone(hook)));
            }
        }
        resolved
    }
}

impl fmt::Debug for PostInstallRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<String, usize> = self
            .hooks
            .iter()
            .map(|(k, v)| (k.to_string(), v.len()))
            .collect();
        f.debug_struct("PostInstallRegistry")
            .field("hooks", &counts)
            .finish()
    }
}
