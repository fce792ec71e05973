//! Graphviz dot rendering
//!
//! Pure transformation from the class model into dot node and edge
//! statements. Each class renders to one record-shaped node plus auxiliary
//! nodes for its nested structs and enums; the document module wraps the
//! fragments into a complete digraph.

mod class_node;
mod document;
mod members;
mod nested;

pub use class_node::render_class;
pub use document::render_diagram;
