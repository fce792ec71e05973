//! Integration tests for the public rendering API

use soldot::prelude::*;
use soldot::{render_class, render_diagram};

fn token_class() -> ClassModel {
    let mut token = ClassModel::new(1, "Token");
    token.add_attribute(
        Attribute::new("balance", "uint256").with_visibility(Visibility::Public),
    );
    token.add_operator(
        Operator::new("transfer")
            .with_stereotype(OperatorStereotype::Payable)
            .with_visibility(Visibility::Public)
            .with_parameter(Parameter::named("to", "address"))
            .with_parameter(Parameter::named("amount", "uint256"))
            .with_return_parameter(Parameter::unnamed("bool")),
    );
    token
}

#[test]
fn test_token_example_exact_output() {
    let dot = render_class(&token_class(), &ClassDiagramOptions::default());
    assert_eq!(
        dot,
        "\n1 [label=\"{Token\
         | Public:\\l\\ \\ \\ balance: uint256\\l\
         | Public:\\l\\ \\ \\ \\ \\<\\<payable\\>\\> transfer(to: address, amount: uint256): bool\\l\
         }\"]"
    );
}

#[test]
fn test_abstract_decoration_depends_on_class_stereotype() {
    let operator = Operator::new("burn")
        .with_stereotype(OperatorStereotype::Abstract)
        .with_visibility(Visibility::Public);

    let mut concrete = ClassModel::new(1, "Concrete");
    concrete.add_operator(operator.clone());
    let dot = render_class(&concrete, &ClassDiagramOptions::default());
    assert!(!dot.contains("abstract"));
    assert!(dot.contains("burn()"));

    let mut abstract_class = ClassModel::new(2, "Base").with_stereotype(ClassStereotype::Abstract);
    abstract_class.add_operator(operator);
    let dot = render_class(&abstract_class, &ClassDiagramOptions::default());
    assert!(dot.contains("\\<\\<abstract\\>\\> burn()"));
}

#[test]
fn test_hidden_library_and_interface_render_empty() {
    let library = ClassModel::new(1, "SafeMath").with_stereotype(ClassStereotype::Library);
    let interface = ClassModel::new(2, "IERC20").with_stereotype(ClassStereotype::Interface);

    assert_eq!(
        render_class(&library, &ClassDiagramOptions::new().hide_libraries()),
        ""
    );
    assert_eq!(
        render_class(&interface, &ClassDiagramOptions::new().hide_interfaces()),
        ""
    );

    // the same classes render normally without the hide flags
    assert!(!render_class(&library, &ClassDiagramOptions::default()).is_empty());
    assert!(!render_class(&interface, &ClassDiagramOptions::default()).is_empty());
}

#[test]
fn test_hide_internals_leaves_no_trace() {
    let mut class = ClassModel::new(1, "Vault");
    class.add_attribute(Attribute::new("seed", "bytes32").with_visibility(Visibility::Private));
    class.add_attribute(Attribute::new("nonce", "uint64").with_visibility(Visibility::Internal));
    class.add_operator(Operator::new("rotate").with_visibility(Visibility::Private));
    class.add_operator(Operator::new("sync").with_visibility(Visibility::Internal));
    class.add_operator(Operator::new("deposit").with_visibility(Visibility::External));

    let dot = render_class(&class, &ClassDiagramOptions::new().hide_internals());
    assert!(!dot.contains("Private"));
    assert!(!dot.contains("Internal"));
    assert!(!dot.contains("seed"));
    assert!(!dot.contains("nonce"));
    assert!(!dot.contains("rotate"));
    assert!(!dot.contains("sync"));
    assert!(dot.contains("deposit"));
}

#[test]
fn test_struct_and_enum_nodes_with_edges() {
    let mut class = ClassModel::new(7, "Market");
    class.add_struct(
        "Order",
        vec![
            Attribute::new("maker", "address"),
            Attribute::new("size", "uint256"),
        ],
    );
    class.add_struct("Fill", vec![Attribute::new("price", "uint128")]);
    class.add_enum("Side", vec!["Buy".to_string(), "Sell".to_string()]);

    let dot = render_class(&class, &ClassDiagramOptions::default());

    assert!(dot.contains("\"7struct0\" [label=\"{\\<\\<struct\\>\\>\\nOrder|"));
    assert!(dot.contains("\"7struct1\" [label=\"{\\<\\<struct\\>\\>\\nFill|"));
    assert!(dot.contains("\"7enum0\" [label=\"{\\<\\<enum\\>\\>\\nSide|Buy: 0\\lSell: 1\\l}\"]"));
    assert!(dot.contains("\"7struct0\" -> 7 [arrowhead=diamond, weight=3]"));
    assert!(dot.contains("\"7struct1\" -> 7 [arrowhead=diamond, weight=3]"));
    assert!(dot.contains("\"7enum0\" -> 7 [arrowhead=diamond, weight=3]"));
}

#[test]
fn test_struct_counters_reset_between_classes() {
    let mut first = ClassModel::new(1, "First");
    first.add_struct("A", vec![]);
    let mut second = ClassModel::new(2, "Second");
    second.add_struct("B", vec![]);

    let options = ClassDiagramOptions::default();
    let first_dot = render_class(&first, &options);
    let second_dot = render_class(&second, &options);

    assert!(first_dot.contains("\"1struct0\""));
    assert!(second_dot.contains("\"2struct0\""));
    assert!(!second_dot.contains("struct1"));
}

#[test]
fn test_hide_structs_and_enums() {
    let mut class = ClassModel::new(3, "Market");
    class.add_struct("Order", vec![]);
    class.add_enum("Side", vec!["Buy".to_string()]);

    let dot = render_class(
        &class,
        &ClassDiagramOptions::new().hide_structs().hide_enums(),
    );
    assert!(!dot.contains("struct"));
    assert!(!dot.contains("enum"));
    assert!(dot.contains("Market"));
}

#[test]
fn test_struct_stereotyped_class_lists_attributes_flat() {
    let mut class = ClassModel::new(4, "Point").with_stereotype(ClassStereotype::Struct);
    class.add_attribute(Attribute::new("x", "uint128"));
    class.add_attribute(Attribute::new("y", "uint128"));

    let dot = render_class(&class, &ClassDiagramOptions::default());
    assert!(dot.contains("\\<\\<Struct\\>\\>\\nPoint"));
    assert!(dot.contains("| x: uint128\\ly: uint128\\l"));
    assert!(!dot.contains("Public:"));
}

#[test]
fn test_render_is_deterministic() {
    let classes = vec![token_class()];
    let options = ClassDiagramOptions::default();
    let first = render_diagram(&classes, &options).unwrap();
    let second = render_diagram(&classes, &options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_json_model_renders_like_builder_model() {
    let json = r#"[{
        "id": 1,
        "name": "Token",
        "attributes": [
            {"name": "balance", "type": "uint256", "visibility": "Public"}
        ],
        "operators": [{
            "name": "transfer",
            "stereotype": "Payable",
            "visibility": "Public",
            "parameters": [
                {"name": "to", "type": "address"},
                {"name": "amount", "type": "uint256"}
            ],
            "returnParameters": [{"type": "bool"}]
        }]
    }]"#;
    let from_json: Vec<ClassModel> = serde_json::from_str(json).unwrap();
    let options = ClassDiagramOptions::default();

    assert_eq!(
        render_diagram(&from_json, &options).unwrap(),
        render_diagram(&[token_class()], &options).unwrap()
    );
}

#[test]
fn test_fallback_and_event_decorations() {
    let mut class = ClassModel::new(5, "Wallet");
    class.add_operator(
        Operator::new("")
            .with_stereotype(OperatorStereotype::Fallback)
            .with_visibility(Visibility::External),
    );
    class.add_operator(
        Operator::new("Deposited")
            .with_stereotype(OperatorStereotype::Event)
            .with_parameter(Parameter::named("amount", "uint256")),
    );

    let dot = render_class(&class, &ClassDiagramOptions::default());
    assert!(dot.contains("External:\\l\\ \\ \\ \\ \\<\\<fallback\\>\\> ()"));
    assert!(dot.contains("\\<\\<event\\>\\> Deposited(amount: uint256)"));
}
