//! Class node rendering
//!
//! Composes the title, attribute section and operator section of one class
//! into a record-shaped dot node, then appends the auxiliary struct and enum
//! nodes declared in the class.

use tracing::trace;

use super::{members, nested};
use crate::model::{ClassModel, ClassStereotype};
use crate::options::ClassDiagramOptions;

/// Render one class to dot node and edge statements
///
/// Returns the empty string when the class is suppressed entirely by
/// `hide_libraries` or `hide_interfaces`; the class's structs and enums are
/// suppressed with it. Never fails: unset stereotypes and visibilities fall
/// through to the plainest rendering.
pub fn render_class(class: &ClassModel, options: &ClassDiagramOptions) -> String {
    if (options.hide_libraries && class.stereotype == ClassStereotype::Library)
        || (options.hide_interfaces && class.stereotype == ClassStereotype::Interface)
    {
        trace!(class = %class.name, "class suppressed by hide option");
        return String::new();
    }

    let mut fragments: Vec<String> = Vec::new();

    fragments.push(format!("\n{} [label=\"{{{}", class.id, class_title(class)));

    if !options.hide_attributes {
        fragments.push(members::attribute_sections(class, options));
    }

    if !options.hide_operators {
        fragments.push(members::operator_sections(class, options));
    }

    fragments.push("}\"]".to_string());

    if !options.hide_structs {
        fragments.push(nested::struct_nodes(class));
    }
    if !options.hide_enums {
        fragments.push(nested::enum_nodes(class));
    }

    trace!(
        class = %class.name,
        attributes = class.attributes.len(),
        operators = class.operators.len(),
        "rendered class node"
    );

    fragments.concat()
}

/// Title line(s) of the class record
///
/// Stereotyped classes get a two-line title with the stereotype tag above
/// the name; plain contracts are just the name.
fn class_title(class: &ClassModel) -> String {
    let stereotype_label = match class.stereotype {
        ClassStereotype::Abstract => "Abstract",
        ClassStereotype::Interface => "Interface",
        ClassStereotype::Library => "Library",
        ClassStereotype::Struct => "Struct",
        ClassStereotype::Enum => "Enum",
        ClassStereotype::Contract => return class.name.clone(),
    };

    format!("\\<\\<{}\\>\\>\\n{}", stereotype_label, class.name)
}
