//! Synthetic declaration graph builders.
//!
//! Every builder returns a populated store together with the unit and
//! symbol of the root declaration.

use tsbind_schema::{
    Declaration, DeclarationStore, ImportDecl, MethodMember, Parameter, PropertyMember, Statement,
    StoreError, TypeNode, Unit,
};

/// Root of a synthetic graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphRoot {
    /// Unit holding the root declaration.
    pub unit: String,
    /// Root interface name.
    pub symbol: String,
}

fn node_name(i: usize) -> String {
    format!("Node{i}")
}

fn unit_name(i: usize) -> String {
    format!("unit{i}")
}

/// Interface with a few scalar members and references to `targets`.
fn node(name: &str, targets: &[String]) -> Declaration {
    let mut decl = Declaration::interface(name)
        .with_doc(format!("Synthetic node {name}."))
        .with_member(PropertyMember::new("id", TypeNode::number()))
        .with_member(PropertyMember::new("label", TypeNode::string()).optional());

    for (i, target) in targets.iter().enumerate() {
        decl.add_member(PropertyMember::new(
            format!("link{i}"),
            TypeNode::reference(target.as_str()),
        ));
    }
    if let Some(first) = targets.first() {
        decl.add_member(
            MethodMember::new("visit", TypeNode::boolean()).with_parameter(Parameter::new(
                "items",
                TypeNode::array(TypeNode::reference(first.as_str())),
            )),
        );
    }
    decl
}

/// Builds a single-unit chain `Node0 -> Node1 -> ... -> Node{len-1}`.
///
/// # Errors
/// Never fails in practice; registration errors are propagated.
pub fn chain(len: usize) -> Result<(DeclarationStore, GraphRoot), StoreError> {
    let mut unit = Unit::new();
    for i in 0..len {
        let targets = if i + 1 < len {
            vec![node_name(i + 1)]
        } else {
            Vec::new()
        };
        unit.add_statement(Statement::Declaration(node(&node_name(i), &targets)));
    }

    let mut store = DeclarationStore::new();
    store.register("graph", unit)?;
    Ok((
        store,
        GraphRoot {
            unit: "graph".to_string(),
            symbol: node_name(0),
        },
    ))
}

/// Builds a single-unit ring where every node also references the root.
///
/// # Errors
/// Never fails in practice; registration errors are propagated.
pub fn cycle(len: usize) -> Result<(DeclarationStore, GraphRoot), StoreError> {
    let mut unit = Unit::new();
    for i in 0..len {
        let targets = vec![node_name((i + 1) % len), node_name(0)];
        unit.add_statement(Statement::Declaration(node(&node_name(i), &targets)));
    }

    let mut store = DeclarationStore::new();
    store.register("graph", unit)?;
    Ok((
        store,
        GraphRoot {
            unit: "graph".to_string(),
            symbol: node_name(0),
        },
    ))
}

/// Builds `units` units, each holding one node that imports the next.
///
/// # Errors
/// Never fails in practice; registration errors are propagated.
pub fn import_chain(units: usize) -> Result<(DeclarationStore, GraphRoot), StoreError> {
    let mut store = DeclarationStore::new();
    for i in 0..units {
        let mut unit = Unit::new();
        let mut targets = Vec::new();
        if i + 1 < units {
            unit = unit.with_import(ImportDecl::named(
                [node_name(i + 1)],
                format!("./{}", unit_name(i + 1)),
            ));
            targets.push(node_name(i + 1));
        }
        unit = unit.with_declaration(node(&node_name(i), &targets));
        store.register(unit_name(i), unit)?;
    }

    Ok((
        store,
        GraphRoot {
            unit: unit_name(0),
            symbol: node_name(0),
        },
    ))
}
