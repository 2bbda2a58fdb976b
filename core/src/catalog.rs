use crate::resource::{ResourceDescriptor, ResourceKind};

pub const DEFAULT_EMBED_HEIGHT: u32 = 600;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub kind: ResourceKind,
    pub url: &'static str,
    pub title: &'static str,
    pub preload: bool,
    pub page: bool,
    pub height: u32,
}

impl CatalogEntry {
    /// Entries are validated by the build script with the same rules, so
    /// this only fails if the two drift apart.
    pub fn descriptor(&self) -> Option<ResourceDescriptor> {
        ResourceDescriptor::new(self.id, self.kind, self.url).ok()
    }
}

include!(concat!(env!("OUT_DIR"), "/site_catalog.rs"));

pub fn resource_by_id(id: &str) -> Option<&'static CatalogEntry> {
    RESOURCE_CATALOG.iter().find(|entry| entry.id == id)
}

pub fn hero_entry() -> Option<&'static CatalogEntry> {
    resource_by_id(HERO_RESOURCE_ID)
}

pub fn page_entries() -> impl Iterator<Item = &'static CatalogEntry> {
    RESOURCE_CATALOG.iter().filter(|entry| entry.page)
}

pub fn page_by_id(id: &str) -> Option<&'static CatalogEntry> {
    resource_by_id(id).filter(|entry| entry.page)
}

/// Descriptors the entry page warms in the background. The hero is shown on
/// the entry page itself, so it is never part of this set.
pub fn preload_descriptors() -> Vec<ResourceDescriptor> {
    RESOURCE_CATALOG
        .iter()
        .filter(|entry| entry.preload && entry.id != HERO_RESOURCE_ID)
        .filter_map(CatalogEntry::descriptor)
        .collect()
}
