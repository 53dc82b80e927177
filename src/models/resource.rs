//! Resource model.
//!
//! A resource is a schedulable person (cleaner, inspector) that owns
//! exactly one row in the dispatch grid. Resources are supplied per
//! render and are read-only from the grid's perspective: the engine
//! never creates or mutates them, it only reassigns jobs between them.

use serde::{Deserialize, Serialize};

/// A schedulable person with one visual row in the grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Unique resource identifier.
    pub id: String,
    /// Name shown in the row header.
    pub display_name: String,
    /// Role tag. Only used to pick the row label, never for dispatch logic.
    pub role: Role,
    /// Hex color (e.g. "#7c9a64") used to tint job blocks when no
    /// status color applies.
    pub color: String,
}

/// Role classification for a resource.
///
/// Purely presentational: the grid picks a label from this tag and
/// nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Field cleaner doing turnovers.
    Cleaner,
    /// Quality inspector.
    Inspector,
    /// Team lead / supervisor.
    Supervisor,
    /// Domain-specific role.
    Custom(String),
}

impl Resource {
    /// Creates a new resource with the given role.
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            display_name: String::new(),
            role,
            color: String::new(),
        }
    }

    /// Creates a cleaner resource.
    pub fn cleaner(id: impl Into<String>) -> Self {
        Self::new(id, Role::Cleaner)
    }

    /// Creates an inspector resource.
    pub fn inspector(id: impl Into<String>) -> Self {
        Self::new(id, Role::Inspector)
    }

    /// Sets the display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    /// Sets the tint color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// The label shown next to the display name.
    pub fn role_label(&self) -> &str {
        match &self.role {
            Role::Cleaner => "Cleaner",
            Role::Inspector => "Inspector",
            Role::Supervisor => "Supervisor",
            Role::Custom(label) => label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_builder() {
        let r = Resource::cleaner("emp-1")
            .with_display_name("Ana Reyes")
            .with_color("#7c9a64");

        assert_eq!(r.id, "emp-1");
        assert_eq!(r.display_name, "Ana Reyes");
        assert_eq!(r.role, Role::Cleaner);
        assert_eq!(r.color, "#7c9a64");
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Resource::cleaner("a").role_label(), "Cleaner");
        assert_eq!(Resource::inspector("b").role_label(), "Inspector");
        let custom = Resource::new("c", Role::Custom("Window Crew".into()));
        assert_eq!(custom.role_label(), "Window Crew");
    }

    #[test]
    fn test_resource_serde_round_trip() {
        let r = Resource::new("emp-2", Role::Supervisor).with_display_name("Bo");
        let json = serde_json::to_string(&r).unwrap();
        let back: Resource = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, "emp-2");
        assert_eq!(back.role, Role::Supervisor);
    }
}
