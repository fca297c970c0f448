//! Contract with the external component template catalog.
//!
//! When a template is dropped onto a cell, the engine asks a
//! [`TemplateCatalog`] for the template's [`TemplateInfo`] and seeds the cell's
//! content from [`TemplateInfo::default_content`]. Rendering the component is
//! entirely the catalog's (and renderer's) business.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{content::Content, identifier::Id};

/// Catalog metadata for a single component template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInfo {
    display_name: String,
    #[serde(default)]
    icon: String,
    #[serde(default)]
    default_content: Content,
}

impl TemplateInfo {
    pub fn new(display_name: impl Into<String>, icon: impl Into<String>, default_content: Content) -> Self {
        Self {
            display_name: display_name.into(),
            icon: icon.into(),
            default_content,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Payload copied into a cell when this template is placed.
    pub fn default_content(&self) -> &Content {
        &self.default_content
    }
}

/// Lookup of component templates by identifier.
pub trait TemplateCatalog {
    /// Returns the template registered under `id`, if any.
    fn template(&self, id: Id) -> Option<&TemplateInfo>;
}

/// An ordered, in-memory [`TemplateCatalog`].
///
/// Deserializes from a JSON object keyed by template identifier:
///
/// ```
/// # use glassgrid_core::{identifier::Id, template::{TemplateCatalog, TemplateRegistry}};
/// let registry: TemplateRegistry = serde_json::from_str(r#"{
///     "stat-card": { "displayName": "Stat Card", "icon": "chart", "defaultContent": { "value": 0 } }
/// }"#).unwrap();
///
/// let info = registry.template(Id::new("stat-card")).unwrap();
/// assert_eq!(info.display_name(), "Stat Card");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateRegistry {
    templates: IndexMap<Id, TemplateInfo>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a template (builder style), replacing any previous entry.
    pub fn with_template(mut self, id: Id, info: TemplateInfo) -> Self {
        self.insert(id, info);
        self
    }

    /// Registers a template, returning the entry it replaced.
    pub fn insert(&mut self, id: Id, info: TemplateInfo) -> Option<TemplateInfo> {
        self.templates.insert(id, info)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Iterates templates in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (Id, &TemplateInfo)> {
        self.templates.iter().map(|(id, info)| (*id, info))
    }
}

impl TemplateCatalog for TemplateRegistry {
    fn template(&self, id: Id) -> Option<&TemplateInfo> {
        self.templates.get(&id)
    }
}
