//! Equipment templates
//!
//! An equipment template maps equipment-type identifiers to maximum
//! counts for a unit organisation. Many unit instances share one
//! template by reference; templates are loaded once and never mutated.

use std::sync::Arc;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::types::TemplateId;

/// Immutable organisational equipment definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentTemplate {
    pub id: TemplateId,
    pub name: String,
    counts: AHashMap<String, u32>,
}

impl EquipmentTemplate {
    pub fn new(
        id: TemplateId,
        name: impl Into<String>,
        counts: impl IntoIterator<Item = (String, u32)>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            counts: counts.into_iter().collect(),
        }
    }

    /// Maximum count for one equipment type, 0 if absent
    pub fn max_count(&self, equipment_id: &str) -> u32 {
        self.counts.get(equipment_id).copied().unwrap_or(0)
    }

    /// All (equipment id, maximum count) pairs
    pub fn counts(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(id, count)| (id.as_str(), *count))
    }
}

/// Registry of shared templates, built once at startup
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: AHashMap<TemplateId, Arc<EquipmentTemplate>>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, used only while assembling the registry
    pub fn with_template(mut self, template: EquipmentTemplate) -> Self {
        self.templates.insert(template.id.clone(), Arc::new(template));
        self
    }

    /// Shared handle to a template; cheap to clone, impossible to mutate
    pub fn lookup(&self, id: &TemplateId) -> Option<Arc<EquipmentTemplate>> {
        self.templates.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_shares_one_template() {
        let registry = TemplateRegistry::new().with_template(EquipmentTemplate::new(
            TemplateId::from("SOV_TANK_BN"),
            "Soviet Tank Battalion",
            [("TANK".to_string(), 40), ("REG".to_string(), 1000)],
        ));

        let a = registry.lookup(&TemplateId::from("SOV_TANK_BN")).unwrap();
        let b = registry.lookup(&TemplateId::from("SOV_TANK_BN")).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.max_count("TANK"), 40);
        assert_eq!(a.max_count("MISSING"), 0);
    }

    #[test]
    fn test_missing_template_is_none() {
        let registry = TemplateRegistry::new();
        assert!(registry.lookup(&TemplateId::from("NOPE")).is_none());
    }
}
