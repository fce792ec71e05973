//! Render options for class diagrams
//!
//! Every option hides part of the diagram; all default to off so a default
//! render shows everything the model contains.

use serde::{Deserialize, Serialize};

/// Options controlling which parts of a class are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassDiagramOptions {
    /// Omit the attribute section of every class
    pub hide_attributes: bool,
    /// Omit the operator section of every class
    pub hide_operators: bool,
    /// Omit auxiliary nodes for structs nested in classes
    pub hide_structs: bool,
    /// Omit auxiliary nodes for enums nested in classes
    pub hide_enums: bool,
    /// Suppress library classes entirely
    pub hide_libraries: bool,
    /// Suppress interface classes entirely
    pub hide_interfaces: bool,
    /// Drop the Private and Internal visibility groups and their members
    pub hide_internals: bool,
}

impl ClassDiagramOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hide_attributes(mut self) -> Self {
        self.hide_attributes = true;
        self
    }

    pub fn hide_operators(mut self) -> Self {
        self.hide_operators = true;
        self
    }

    pub fn hide_structs(mut self) -> Self {
        self.hide_structs = true;
        self
    }

    pub fn hide_enums(mut self) -> Self {
        self.hide_enums = true;
        self
    }

    pub fn hide_libraries(mut self) -> Self {
        self.hide_libraries = true;
        self
    }

    pub fn hide_interfaces(mut self) -> Self {
        self.hide_interfaces = true;
        self
    }

    pub fn hide_internals(mut self) -> Self {
        self.hide_internals = true;
        self
    }
}
