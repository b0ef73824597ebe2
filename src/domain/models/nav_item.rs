use serde::{Deserialize, Serialize};

/// A single navigation link (label + in-page anchor)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub target: String,
}

impl NavItem {
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }

    /// Default site sections, in display order
    pub fn defaults() -> Vec<NavItem> {
        vec![
            NavItem::new("Home", "#home"),
            NavItem::new("Legacy", "#legacy"),
            NavItem::new("Gallery", "#"),
            NavItem::new("Our Team", "#team"),
            NavItem::new("Departments", "#departments"),
        ]
    }
}
