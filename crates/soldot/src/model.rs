//! Class model for Solidity UML diagrams
//!
//! Stores contracts, interfaces, libraries and their members as produced by
//! an upstream Solidity parser. The rendering core treats these types as
//! immutable input.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Visibility modifier for attributes and operators
///
/// `None` covers members without an explicit modifier; for grouping purposes
/// it is equivalent to `Public`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    None,
    Private,
    Internal,
    External,
    Public,
}

impl Visibility {
    /// The visibility group this modifier is displayed under
    pub fn group(self) -> VisibilityGroup {
        match self {
            Visibility::Private => VisibilityGroup::Private,
            Visibility::Internal => VisibilityGroup::Internal,
            Visibility::External => VisibilityGroup::External,
            Visibility::Public | Visibility::None => VisibilityGroup::Public,
        }
    }
}

/// The four member partitions shown in a class box, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityGroup {
    Private,
    Internal,
    External,
    Public,
}

impl VisibilityGroup {
    /// All groups in the fixed order they are rendered
    pub const ALL: [VisibilityGroup; 4] = [
        VisibilityGroup::Private,
        VisibilityGroup::Internal,
        VisibilityGroup::External,
        VisibilityGroup::Public,
    ];

    pub fn label(self) -> &'static str {
        match self {
            VisibilityGroup::Private => "Private",
            VisibilityGroup::Internal => "Internal",
            VisibilityGroup::External => "External",
            VisibilityGroup::Public => "Public",
        }
    }

    /// True for the groups removed by the `hide_internals` option
    pub fn is_internal(self) -> bool {
        matches!(self, VisibilityGroup::Private | VisibilityGroup::Internal)
    }
}

/// UML stereotype of a class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClassStereotype {
    #[default]
    Contract,
    Abstract,
    Interface,
    Library,
    Struct,
    Enum,
}

/// UML stereotype of an operator
///
/// The rank defines the sort order within a visibility group: operators are
/// listed by descending rank, so payable functions come first and plain
/// functions last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OperatorStereotype {
    #[default]
    None,
    Event,
    Fallback,
    Modifier,
    Abstract,
    Payable,
}

impl OperatorStereotype {
    pub fn rank(self) -> u8 {
        match self {
            OperatorStereotype::None => 0,
            OperatorStereotype::Event => 1,
            OperatorStereotype::Fallback => 2,
            OperatorStereotype::Modifier => 3,
            OperatorStereotype::Abstract => 4,
            OperatorStereotype::Payable => 5,
        }
    }
}

impl PartialOrd for OperatorStereotype {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OperatorStereotype {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

/// A state variable or struct field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub visibility: Visibility,
}

impl Attribute {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            visibility: Visibility::None,
        }
    }

    pub fn with_visibility(mut self, v: Visibility) -> Self {
        self.visibility = v;
        self
    }
}

/// A function, event or modifier parameter
///
/// The name can be absent, which is common for return parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub type_name: String,
}

impl Parameter {
    pub fn named(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            type_name: type_name.into(),
        }
    }

    pub fn unnamed(type_name: impl Into<String>) -> Self {
        Self {
            name: None,
            type_name: type_name.into(),
        }
    }
}

/// A function, event, modifier or fallback of a class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operator {
    pub name: String,
    #[serde(default)]
    pub stereotype: OperatorStereotype,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default, rename = "returnParameters")]
    pub return_parameters: Vec<Parameter>,
}

impl Operator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stereotype: OperatorStereotype::None,
            visibility: Visibility::None,
            parameters: Vec::new(),
            return_parameters: Vec::new(),
        }
    }

    pub fn with_stereotype(mut self, s: OperatorStereotype) -> Self {
        self.stereotype = s;
        self
    }

    pub fn with_visibility(mut self, v: Visibility) -> Self {
        self.visibility = v;
        self
    }

    pub fn with_parameter(mut self, p: Parameter) -> Self {
        self.parameters.push(p);
        self
    }

    pub fn with_return_parameter(mut self, p: Parameter) -> Self {
        self.return_parameters.push(p);
        self
    }
}

/// One contract, interface, library, struct or enum in the diagram
///
/// The `id` must be unique among the classes rendered into one diagram; it is
/// assigned by the upstream parser. Struct and enum declarations nested in
/// the class keep their source order, which drives the ordinal part of their
/// auxiliary node ids and the displayed enum value indexes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassModel {
    pub id: usize,
    pub name: String,
    #[serde(default)]
    pub stereotype: ClassStereotype,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub operators: Vec<Operator>,
    #[serde(default)]
    pub structs: IndexMap<String, Vec<Attribute>>,
    #[serde(default)]
    pub enums: IndexMap<String, Vec<String>>,
}

impl ClassModel {
    pub fn new(id: usize, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            stereotype: ClassStereotype::Contract,
            attributes: Vec::new(),
            operators: Vec::new(),
            structs: IndexMap::new(),
            enums: IndexMap::new(),
        }
    }

    pub fn with_stereotype(mut self, stereotype: ClassStereotype) -> Self {
        self.stereotype = stereotype;
        self
    }

    pub fn add_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    pub fn add_operator(&mut self, operator: Operator) {
        self.operators.push(operator);
    }

    pub fn add_struct(&mut self, name: impl Into<String>, fields: Vec<Attribute>) {
        self.structs.insert(name.into(), fields);
    }

    pub fn add_enum(&mut self, name: impl Into<String>, values: Vec<String>) {
        self.enums.insert(name.into(), values);
    }
}
