//! Member section formatting
//!
//! Renders the attribute and operator compartments of a class record:
//! visibility partitioning, stereotype decoration and sorting, and
//! parameter-list formatting.

use crate::model::{
    Attribute, ClassModel, ClassStereotype, Operator, OperatorStereotype, Parameter,
    VisibilityGroup,
};
use crate::options::ClassDiagramOptions;

// Escaped-space indents used inside dot record labels.
const ATTRIBUTE_INDENT: &str = "\\ \\ \\ ";
const OPERATOR_INDENT: &str = "\\ \\ \\ \\ ";

/// Attribute compartment of the class record
///
/// Struct and enum classes list their attributes flat; everything else is
/// partitioned into the four visibility groups. The compartment opens with
/// the record separator even when every group is empty.
pub(super) fn attribute_sections(class: &ClassModel, options: &ClassDiagramOptions) -> String {
    let mut fragments = vec!["| ".to_string()];

    if class.stereotype == ClassStereotype::Struct || class.stereotype == ClassStereotype::Enum {
        let attributes: Vec<&Attribute> = class.attributes.iter().collect();
        fragments.push(attribute_lines(&attributes, None));
        return fragments.concat();
    }

    for group in VisibilityGroup::ALL {
        if options.hide_internals && group.is_internal() {
            continue;
        }
        let attributes: Vec<&Attribute> = class
            .attributes
            .iter()
            .filter(|a| a.visibility.group() == group)
            .collect();
        fragments.push(attribute_lines(&attributes, Some(group)));
    }

    fragments.concat()
}

/// Lines for one group of attributes, or nothing when the group is empty
///
/// With a group the lines are indented under a `Group:` header; without one
/// (struct/enum classes) they are flat.
fn attribute_lines(attributes: &[&Attribute], group: Option<VisibilityGroup>) -> String {
    if attributes.is_empty() {
        return String::new();
    }

    let indent = if group.is_some() { ATTRIBUTE_INDENT } else { "" };
    let mut fragments: Vec<String> = Vec::with_capacity(attributes.len() + 1);

    if let Some(group) = group {
        fragments.push(format!("{}:\\l", group.label()));
    }
    for attribute in attributes {
        fragments.push(format!(
            "{}{}: {}\\l",
            indent, attribute.name, attribute.type_name
        ));
    }

    fragments.concat()
}

/// Operator compartment of the class record
///
/// Same partitioning and `hide_internals` rule as the attribute compartment.
pub(super) fn operator_sections(class: &ClassModel, options: &ClassDiagramOptions) -> String {
    let mut fragments = vec!["| ".to_string()];

    for group in VisibilityGroup::ALL {
        if options.hide_internals && group.is_internal() {
            continue;
        }
        let operators: Vec<&Operator> = class
            .operators
            .iter()
            .filter(|o| o.visibility.group() == group)
            .collect();
        fragments.push(operator_lines(class, group, operators));
    }

    fragments.concat()
}

/// Lines for one visibility group of operators
///
/// Operators are listed by descending stereotype rank, so payable functions
/// lead and undecorated ones trail.
fn operator_lines(class: &ClassModel, group: VisibilityGroup, mut operators: Vec<&Operator>) -> String {
    if operators.is_empty() {
        return String::new();
    }

    let mut fragments: Vec<String> = Vec::with_capacity(operators.len() + 1);
    fragments.push(format!("{}:\\l", group.label()));

    operators.sort_by(|a, b| b.stereotype.cmp(&a.stereotype));

    for operator in operators {
        let mut line = String::from(OPERATOR_INDENT);

        if operator.stereotype.rank() > 0 {
            // The separating space is emitted even when the token is empty,
            // matching the observed wire format.
            line.push_str(stereotype_token(class.stereotype, operator.stereotype));
            line.push(' ');
        }

        line.push_str(&operator.name);
        line.push_str(&parameter_list(&operator.parameters, false));

        if !operator.return_parameters.is_empty() {
            line.push_str(": ");
            line.push_str(&parameter_list(&operator.return_parameters, true));
        }

        line.push_str("\\l");
        fragments.push(line);
    }

    fragments.concat()
}

/// Decoration token for an operator stereotype
///
/// The abstract tag only shows on classes that are themselves abstract; on
/// any other class an abstract operator renders undecorated.
fn stereotype_token(
    class_stereotype: ClassStereotype,
    operator_stereotype: OperatorStereotype,
) -> &'static str {
    match operator_stereotype {
        OperatorStereotype::Event => "\\<\\<event\\>\\>",
        OperatorStereotype::Fallback => "\\<\\<fallback\\>\\>",
        OperatorStereotype::Modifier => "\\<\\<modifier\\>\\>",
        OperatorStereotype::Payable => "\\<\\<payable\\>\\>",
        OperatorStereotype::Abstract => {
            if class_stereotype == ClassStereotype::Abstract {
                "\\<\\<abstract\\>\\>"
            } else {
                ""
            }
        }
        OperatorStereotype::None => "",
    }
}

/// Inline rendering of a parameter list
///
/// A single unnamed parameter is shorthand: bare type in return position,
/// parenthesized type otherwise. Every other list is a parenthesized,
/// comma-separated sequence of `name: type` entries (bare `type` when the
/// name is absent).
fn parameter_list(parameters: &[Parameter], return_params: bool) -> String {
    if parameters.len() == 1 && parameters[0].name.is_none() {
        return if return_params {
            parameters[0].type_name.clone()
        } else {
            format!("({})", parameters[0].type_name)
        };
    }

    let entries: Vec<String> = parameters
        .iter()
        .map(|parameter| match &parameter.name {
            Some(name) => format!("{}: {}", name, parameter.type_name),
            None => parameter.type_name.clone(),
        })
        .collect();

    format!("({})", entries.join(", "))
}
