//! Navbar configuration
//!
//! Everything is optional in JSON form; missing fields fall back to the
//! defaults (TECHNOVATION brand, eased profile, five site sections).

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::models::NavItem;
use crate::domain::services::StyleProfile;
use crate::shared::errors::{NavbarError, Result};
use crate::shared::logging::log_config_loaded;

pub const DEFAULT_BRAND: &str = "TECHNOVATION";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub brand: String,
    pub profile: StyleProfile,
    pub items: Vec<NavItem>,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND.to_string(),
            profile: StyleProfile::default(),
            items: NavItem::defaults(),
        }
    }
}

impl NavbarConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: NavbarConfig = serde_json::from_str(json)?;
        config.validate()?;
        log_config_loaded(config.profile, config.items.len());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.items.is_empty() {
            return Err(NavbarError::InvalidConfig(
                "at least one navigation item is required".to_string(),
            ));
        }
        if let Some(index) = self.items.iter().position(|i| i.label.trim().is_empty()) {
            return Err(NavbarError::InvalidConfig(format!(
                "navigation item {} has an empty label",
                index
            )));
        }

        let mut labels = HashSet::new();
        if let Some(item) = self.items.iter().find(|i| !labels.insert(i.label.trim())) {
            return Err(NavbarError::InvalidConfig(format!(
                "duplicate navigation label {:?}",
                item.label
            )));
        }

        // "#" alone (page top) may repeat; named anchors become section ids
        let mut anchors = HashSet::new();
        if let Some(item) = self
            .items
            .iter()
            .filter(|i| i.target.len() > 1 && i.target.starts_with('#'))
            .find(|i| !anchors.insert(i.target.as_str()))
        {
            return Err(NavbarError::InvalidConfig(format!(
                "duplicate navigation anchor {:?}",
                item.target
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NavbarConfig::default();
        assert_eq!(config.brand, "TECHNOVATION");
        assert_eq!(config.profile, StyleProfile::Eased);
        assert_eq!(config.items.len(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = NavbarConfig::from_json("{}").unwrap();
        assert_eq!(config, NavbarConfig::default());
    }

    #[test]
    fn test_partial_json_overrides() {
        let config = NavbarConfig::from_json(
            r##"{
                "profile": "blended",
                "items": [{ "label": "Home", "target": "#home" }]
            }"##,
        )
        .unwrap();
        assert_eq!(config.profile, StyleProfile::Blended);
        assert_eq!(config.brand, DEFAULT_BRAND);
        assert_eq!(config.items, vec![NavItem::new("Home", "#home")]);
    }

    #[test]
    fn test_rejects_empty_items() {
        let err = NavbarConfig::from_json(r#"{ "items": [] }"#).unwrap_err();
        assert!(matches!(err, NavbarError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_blank_label() {
        let err = NavbarConfig::from_json(
            r##"{ "items": [{ "label": "Home", "target": "#home" }, { "label": "  ", "target": "#x" }] }"##,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid navbar config: navigation item 1 has an empty label"
        );
    }

    #[test]
    fn test_rejects_duplicate_label() {
        let err = NavbarConfig::from_json(
            r##"{ "items": [{ "label": "Home", "target": "#home" }, { "label": "Home", "target": "#top" }] }"##,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid navbar config: duplicate navigation label \"Home\""
        );
    }

    #[test]
    fn test_rejects_duplicate_anchor() {
        let err = NavbarConfig::from_json(
            r##"{ "items": [{ "label": "Team", "target": "#team" }, { "label": "People", "target": "#team" }] }"##,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid navbar config: duplicate navigation anchor \"#team\""
        );
    }

    #[test]
    fn test_page_top_anchor_may_repeat() {
        let config = NavbarConfig::from_json(
            r##"{ "items": [{ "label": "Gallery", "target": "#" }, { "label": "Top", "target": "#" }] }"##,
        )
        .unwrap();
        assert_eq!(config.items.len(), 2);
    }

    #[test]
    fn test_rejects_unknown_profile() {
        let err = NavbarConfig::from_json(r#"{ "profile": "bouncy" }"#).unwrap_err();
        assert!(matches!(err, NavbarError::ConfigParse(_)));
    }
}
