//! Auxiliary nodes for nested structs and enums
//!
//! Each struct or enum declared inside a class becomes its own node with a
//! composition edge back to the owning class. The elevated edge weight keeps
//! the auxiliary node close to its owner in the layout.

use crate::model::ClassModel;

/// Auxiliary nodes for the structs declared in a class
///
/// Node ids are `{owner id}struct{ordinal}` with the ordinal starting at 0
/// and following declaration order. The counter is scoped to this call, so
/// ids restart for every class render.
pub(super) fn struct_nodes(class: &ClassModel) -> String {
    let mut fragments: Vec<String> = Vec::with_capacity(class.structs.len() * 2);

    for (ordinal, (name, fields)) in class.structs.iter().enumerate() {
        let node_id = format!("{}struct{}", class.id, ordinal);

        let mut node = format!("\n\"{}\" [label=\"{{\\<\\<struct\\>\\>\\n{}|", node_id, name);
        for field in fields {
            node.push_str(&format!("{}: {}\\l", field.name, field.type_name));
        }
        node.push_str("}\"]");
        fragments.push(node);

        fragments.push(composition_edge(&node_id, class.id));
    }

    fragments.concat()
}

/// Auxiliary nodes for the enums declared in a class
///
/// Same shape as struct nodes with an `enum` id suffix; the body lists each
/// value with its zero-based index in declaration order.
pub(super) fn enum_nodes(class: &ClassModel) -> String {
    let mut fragments: Vec<String> = Vec::with_capacity(class.enums.len() * 2);

    for (ordinal, (name, values)) in class.enums.iter().enumerate() {
        let node_id = format!("{}enum{}", class.id, ordinal);

        let mut node = format!("\n\"{}\" [label=\"{{\\<\\<enum\\>\\>\\n{}|", node_id, name);
        for (index, value) in values.iter().enumerate() {
            node.push_str(&format!("{}: {}\\l", value, index));
        }
        node.push_str("}\"]");
        fragments.push(node);

        fragments.push(composition_edge(&node_id, class.id));
    }

    fragments.concat()
}

/// Diamond-headed edge from an auxiliary node to its owning class
fn composition_edge(node_id: &str, owner_id: usize) -> String {
    format!(
        "\n\"{}\" -> {} [arrowhead=diamond, weight=3]",
        node_id, owner_id
    )
}
