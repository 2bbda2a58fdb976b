use std::collections::HashMap;

use crate::resource::{ResourceDescriptor, ResourceId};

/// Ids submitted for background preloading, with the descriptor each one was
/// first submitted with. Entries are never removed.
#[derive(Debug, Default)]
pub struct PreloadRegistry {
    submitted: HashMap<ResourceId, usize>,
    instances: Vec<ResourceDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreloadReport {
    /// Descriptors that got a new hidden instance during this call.
    pub started: Vec<ResourceDescriptor>,
    pub already_submitted: usize,
    /// Ids seen again with a different url. The first url stays in effect.
    pub url_conflicts: Vec<ResourceId>,
}

impl PreloadReport {
    pub fn is_noop(&self) -> bool {
        self.started.is_empty()
    }
}

impl PreloadRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submits every descriptor whose id has not been seen before. Repeated
    /// ids, within one call or across calls, are skipped.
    pub fn ensure_preloaded(&mut self, descriptors: &[ResourceDescriptor]) -> PreloadReport {
        let mut report = PreloadReport::default();
        for descriptor in descriptors {
            if let Some(&index) = self.submitted.get(descriptor.id()) {
                report.already_submitted += 1;
                if self.instances[index].source_url() != descriptor.source_url()
                    && !report.url_conflicts.contains(descriptor.id())
                {
                    report.url_conflicts.push(descriptor.id().clone());
                }
                continue;
            }
            self.submitted
                .insert(descriptor.id().clone(), self.instances.len());
            self.instances.push(descriptor.clone());
            report.started.push(descriptor.clone());
        }
        report
    }

    pub fn is_submitted(&self, id: &ResourceId) -> bool {
        self.submitted.contains_key(id)
    }

    /// Hidden instances in submission order.
    pub fn instances(&self) -> &[ResourceDescriptor] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
