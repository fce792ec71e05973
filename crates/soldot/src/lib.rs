//! Soldot - Render Solidity contract class models as Graphviz dot diagrams
//!
//! A library for turning a structured model of smart-contract classes
//! (contracts, interfaces, libraries, structs, enums and their members) into
//! UML-style class diagrams in Graphviz's dot language.
//!
//! The model is produced by an upstream Solidity parser; this crate is the
//! pure rendering half. It never reads files or runs the `dot` binary.
//!
//! # Quick Start
//!
//! ```rust
//! use soldot::prelude::*;
//!
//! let mut token = ClassModel::new(1, "Token");
//! token.add_attribute(
//!     Attribute::new("balance", "uint256").with_visibility(Visibility::Public),
//! );
//! token.add_operator(
//!     Operator::new("transfer")
//!         .with_stereotype(OperatorStereotype::Payable)
//!         .with_visibility(Visibility::Public)
//!         .with_parameter(Parameter::named("to", "address"))
//!         .with_return_parameter(Parameter::unnamed("bool")),
//! );
//!
//! let dot = soldot::render_diagram(&[token], &ClassDiagramOptions::default()).unwrap();
//! assert!(dot.contains("transfer(to: address): bool"));
//! ```
//!
//! # Per-class rendering
//!
//! [`render_class`] renders a single class to its node and edge statements
//! without the digraph envelope, for callers that assemble documents
//! themselves:
//!
//! ```rust
//! use soldot::prelude::*;
//!
//! let library = ClassModel::new(2, "SafeMath").with_stereotype(ClassStereotype::Library);
//! let fragment = soldot::render_class(&library, &ClassDiagramOptions::default());
//! assert!(fragment.contains("SafeMath"));
//! ```

pub mod dot;
pub mod logging;
pub mod model;
pub mod options;

pub use dot::{render_class, render_diagram};
pub use model::{
    Attribute, ClassModel, ClassStereotype, Operator, OperatorStereotype, Parameter, Visibility,
    VisibilityGroup,
};
pub use options::ClassDiagramOptions;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::model::{
        Attribute, ClassModel, ClassStereotype, Operator, OperatorStereotype, Parameter,
        Visibility, VisibilityGroup,
    };
    pub use crate::options::ClassDiagramOptions;
}
