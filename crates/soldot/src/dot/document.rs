//! Diagram document assembly
//!
//! Wraps the per-class fragments into a complete digraph ready for the
//! Graphviz `dot` binary. Pure string assembly; the caller owns all I/O.

use anyhow::Result;
use tracing::debug;

use super::class_node::render_class;
use crate::model::ClassModel;
use crate::options::ClassDiagramOptions;

// Bottom-to-top rank direction puts base contracts above the contracts that
// inherit from them, the usual UML orientation.
const DOCUMENT_OPEN: &str = "\ndigraph UmlClassDiagram {\
                             \nrankdir=BT\
                             \ncolor=black\
                             \narrowhead=open\
                             \nnode [shape=record, style=filled, fillcolor=gray95]";
const DOCUMENT_CLOSE: &str = "\n}";

/// Render a set of classes into one dot document
///
/// Classes render in input order; callers wanting base-contract scoping pass
/// a list already narrowed by their connectivity filter.
pub fn render_diagram(classes: &[ClassModel], options: &ClassDiagramOptions) -> Result<String> {
    let mut fragments: Vec<String> = Vec::with_capacity(classes.len() + 2);

    fragments.push(DOCUMENT_OPEN.to_string());
    for class in classes {
        fragments.push(render_class(class, options));
    }
    fragments.push(DOCUMENT_CLOSE.to_string());

    debug!(classes = classes.len(), "assembled dot document");

    Ok(fragments.concat())
}
