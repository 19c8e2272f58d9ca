use std::fmt;
use std::str::FromStr;

/// Unique key of a catalog entry (e.g. `"factory-method"`).
pub type PatternId = &'static str;

/// GoF classification of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Object creation mechanisms
    Creational,
    /// Composition of classes and objects
    Structural,
    /// Communication and responsibility between objects
    Behavioral,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Creational,
        Category::Structural,
        Category::Behavioral,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Creational => "Creational",
            Self::Structural => "Structural",
            Self::Behavioral => "Behavioral",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "creational" => Ok(Self::Creational),
            "structural" => Ok(Self::Structural),
            "behavioral" | "behavioural" => Ok(Self::Behavioral),
            other => Err(format!("invalid pattern category: {other}")),
        }
    }
}

/// One row of a pattern's role table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleDefinition {
    /// Role name as the pattern literature calls it.
    pub name: &'static str,
    /// Class or interface in the diagram that plays the role.
    pub mapped_entity: &'static str,
    pub description: &'static str,
}

impl RoleDefinition {
    pub const fn new(
        name: &'static str,
        mapped_entity: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            mapped_entity,
            description,
        }
    }
}

/// A single catalog entry. Entries are static and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternEntry {
    pub id: PatternId,
    pub title: &'static str,
    pub category: Category,
    pub description: &'static str,
    /// Mermaid source for the class diagram.
    pub diagram_source: &'static str,
    /// Role table rows, in display order.
    pub roles: &'static [RoleDefinition],
}
