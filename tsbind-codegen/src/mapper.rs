//! Source type to target type mapping.
//!
//! Mapping never fails. Shapes outside the supported subset become
//! [`TypeDescriptor::Unknown`], and nominal references are reported to a
//! [`ReferenceSink`] so the declarations they name can be generated later.
//!
//! With a store attached, a nominal reference is named after the
//! declaration it resolves to, so `import { A as B }` references render as
//! `A`, matching the emitted declaration.

#[cfg(test)]
use crate::closure::PendingRequest;
use tsbind_core::{PrimitiveKind, TypeDescriptor};
use tsbind_schema::{DeclarationStore, Keyword, TypeLiteralMember, TypeNode};

/// Receiver for nominal references met while mapping.
pub trait ReferenceSink {
    /// Records that `symbol`, referenced from `unit`, needs a declaration.
    fn request(&mut self, unit: &str, symbol: &str);
}

#[cfg(test)]
impl ReferenceSink for Vec<PendingRequest> {
    fn request(&mut self, unit: &str, symbol: &str) {
        let request = PendingRequest::new(unit, symbol);
        if !self.contains(&request) {
            self.push(request);
        }
    }
}

/// Maps source type nodes to target descriptors.
pub struct TypeMapper<'a, 's, S: ReferenceSink + ?Sized> {
    sink: &'s mut S,
    store: Option<&'a DeclarationStore>,
}

impl<'a, 's, S: ReferenceSink + ?Sized> TypeMapper<'a, 's, S> {
    /// Creates a mapper that reports references to `sink`.
    pub fn new(sink: &'s mut S) -> Self {
        Self { sink, store: None }
    }

    /// Resolves nominal references through `store` to their declared names.
    #[must_use]
    pub fn with_store(mut self, store: &'a DeclarationStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Maps `node`, found in `unit`, to a target descriptor.
    ///
    /// `optional` reflects a `?` modifier on the enclosing member or
    /// parameter and wraps the result in `Nullable` unless it is void.
    pub fn map_type(&mut self, unit: &str, node: &TypeNode, optional: bool) -> TypeDescriptor {
        let ty = self.map(unit, node);
        if optional { ty.into_nullable() } else { ty }
    }

    fn map(&mut self, unit: &str, node: &TypeNode) -> TypeDescriptor {
        match node {
            TypeNode::Keyword(keyword) => map_keyword(*keyword),
            TypeNode::Array(element) => TypeDescriptor::array(self.map(unit, element)),
            TypeNode::Reference {
                name,
                type_arguments,
            } => self.map_reference(unit, name, type_arguments),
            TypeNode::Function {
                parameters,
                return_type,
            } => {
                let parameters = parameters
                    .iter()
                    .map(|p| self.map_type(unit, &p.ty, p.optional))
                    .collect();
                let returns = self.map(unit, return_type);
                TypeDescriptor::delegate(parameters, returns)
            }
            TypeNode::TypeLiteral(members) => match members.as_slice() {
                [TypeLiteralMember::IndexSignature { key, value, .. }] => {
                    TypeDescriptor::dictionary(self.map(unit, key), self.map(unit, value))
                }
                _ => unsupported(node),
            },
            TypeNode::Union(_)
            | TypeNode::Intersection(_)
            | TypeNode::Tuple(_)
            | TypeNode::Literal(_)
            | TypeNode::Unrecognized(_) => unsupported(node),
        }
    }

    fn map_reference(
        &mut self,
        unit: &str,
        name: &str,
        type_arguments: &[TypeNode],
    ) -> TypeDescriptor {
        match name {
            "Array" | "ReadonlyArray" => {
                let element = type_arguments
                    .first()
                    .map_or(TypeDescriptor::Unknown, |arg| self.map(unit, arg));
                TypeDescriptor::array(element)
            }
            "Date" => TypeDescriptor::primitive(PrimitiveKind::DateTime),
            _ => {
                self.sink.request(unit, name);
                TypeDescriptor::Nominal {
                    name: self.declared_name(unit, name),
                    type_arguments: type_arguments.iter().map(|a| self.map(unit, a)).collect(),
                }
            }
        }
    }

    fn declared_name(&self, unit: &str, name: &str) -> String {
        let Some(resolved) = self.store.and_then(|store| store.resolve_any(unit, name)) else {
            return name.to_string();
        };
        if resolved.declaration.name != name {
            tracing::trace!(
                "Reference '{}' in unit '{}' renamed to '{}'",
                name,
                unit,
                resolved.declaration.name
            );
        }
        resolved.declaration.name.clone()
    }
}

fn map_keyword(keyword: Keyword) -> TypeDescriptor {
    match keyword {
        Keyword::String => TypeDescriptor::primitive(PrimitiveKind::String),
        Keyword::Number => TypeDescriptor::primitive(PrimitiveKind::Double),
        Keyword::Boolean => TypeDescriptor::primitive(PrimitiveKind::Boolean),
        Keyword::Void => TypeDescriptor::void(),
        Keyword::Null => TypeDescriptor::primitive(PrimitiveKind::Null),
        Keyword::Any | Keyword::Undefined | Keyword::Unknown | Keyword::Object | Keyword::Never => {
            tracing::trace!("Keyword '{}' mapped to object", keyword.as_str());
            TypeDescriptor::Unknown
        }
    }
}

fn unsupported(node: &TypeNode) -> TypeDescriptor {
    tracing::trace!("Unsupported {} type mapped to object", node.shape_name());
    TypeDescriptor::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsbind_schema::{Declaration, ImportDecl, ImportSpecifier, Parameter, Unit};

    fn map(node: &TypeNode, optional: bool) -> (TypeDescriptor, Vec<PendingRequest>) {
        let mut pending = Vec::new();
        let ty = TypeMapper::new(&mut pending).map_type("tsd", node, optional);
        (ty, pending)
    }

    fn string() -> TypeDescriptor {
        TypeDescriptor::primitive(PrimitiveKind::String)
    }

    fn double() -> TypeDescriptor {
        TypeDescriptor::primitive(PrimitiveKind::Double)
    }

    #[test]
    fn test_primitive_mapping_is_pure() {
        for keyword in [
            Keyword::String,
            Keyword::Number,
            Keyword::Boolean,
            Keyword::Any,
            Keyword::Void,
            Keyword::Null,
        ] {
            for optional in [false, true] {
                let node = TypeNode::Keyword(keyword);
                let (first, pending) = map(&node, optional);
                let (second, _) = map(&node, optional);
                assert_eq!(first, second);
                assert!(pending.is_empty());
            }
        }
    }

    #[test]
    fn test_keywords() {
        assert_eq!(map(&TypeNode::string(), false).0, string());
        assert_eq!(map(&TypeNode::number(), false).0, double());
        assert_eq!(
            map(&TypeNode::boolean(), false).0,
            TypeDescriptor::primitive(PrimitiveKind::Boolean)
        );
        assert_eq!(map(&TypeNode::any(), false).0, TypeDescriptor::Unknown);
        assert_eq!(map(&TypeNode::void(), false).0, TypeDescriptor::void());
        assert_eq!(
            map(&TypeNode::Keyword(Keyword::Undefined), false).0,
            TypeDescriptor::Unknown
        );
    }

    #[test]
    fn test_array_spellings_converge() {
        let (bracket, _) = map(&TypeNode::array(TypeNode::number()), false);
        let (generic, pending) = map(&TypeNode::generic("Array", vec![TypeNode::number()]), false);
        assert_eq!(bracket, generic);
        assert_eq!(bracket, TypeDescriptor::array(double()));
        assert!(pending.is_empty());

        let (bare, _) = map(&TypeNode::reference("Array"), false);
        assert_eq!(bare, TypeDescriptor::array(TypeDescriptor::Unknown));
    }

    #[test]
    fn test_date_is_not_pending() {
        let (ty, pending) = map(&TypeNode::reference("Date"), true);
        assert_eq!(
            ty,
            TypeDescriptor::primitive(PrimitiveKind::DateTime).into_nullable()
        );
        assert!(pending.is_empty());
    }

    #[test]
    fn test_nominal_enqueues_request() {
        let (ty, pending) = map(&TypeNode::reference("IType2"), false);
        assert_eq!(ty, TypeDescriptor::nominal("IType2"));
        assert_eq!(pending, vec![PendingRequest::new("tsd", "IType2")]);
    }

    #[test]
    fn test_generic_arguments_are_mapped() {
        let node = TypeNode::generic(
            "Promise",
            vec![TypeNode::generic("Box", vec![TypeNode::string()])],
        );
        let (ty, pending) = map(&node, false);
        assert_eq!(
            ty,
            TypeDescriptor::Nominal {
                name: "Promise".to_string(),
                type_arguments: vec![TypeDescriptor::Nominal {
                    name: "Box".to_string(),
                    type_arguments: vec![string()],
                }],
            }
        );
        assert_eq!(
            pending,
            vec![
                PendingRequest::new("tsd", "Promise"),
                PendingRequest::new("tsd", "Box")
            ]
        );
    }

    #[test]
    fn test_repeated_reference_requested_once() {
        let node = TypeNode::Union(vec![]);
        let mut pending = Vec::new();
        let mut mapper = TypeMapper::new(&mut pending);
        mapper.map_type("tsd", &TypeNode::reference("IType2"), false);
        mapper.map_type("tsd", &TypeNode::array(TypeNode::reference("IType2")), true);
        mapper.map_type("tsd", &node, false);
        assert_eq!(pending.len(), 1);
    }

    #[test]
    fn test_dictionary() {
        let node = TypeNode::index_signature("key", TypeNode::string(), TypeNode::any());
        let (ty, _) = map(&node, false);
        assert_eq!(ty, TypeDescriptor::dictionary(string(), TypeDescriptor::Unknown));
    }

    #[test]
    fn test_other_type_literals_are_unknown() {
        let two_members = TypeNode::TypeLiteral(vec![
            TypeLiteralMember::IndexSignature {
                key_name: "key".to_string(),
                key: TypeNode::string(),
                value: TypeNode::any(),
            },
            TypeLiteralMember::Property {
                name: "x".to_string(),
                ty: TypeNode::number(),
                optional: false,
            },
        ]);
        assert_eq!(map(&two_members, false).0, TypeDescriptor::Unknown);

        let property_only = TypeNode::TypeLiteral(vec![TypeLiteralMember::Property {
            name: "x".to_string(),
            ty: TypeNode::reference("Hidden"),
            optional: false,
        }]);
        let (ty, pending) = map(&property_only, false);
        assert_eq!(ty, TypeDescriptor::Unknown);
        assert!(pending.is_empty());
    }

    #[test]
    fn test_function_types() {
        let (action, _) = map(&TypeNode::function(Vec::new(), TypeNode::void()), false);
        assert_eq!(
            action,
            TypeDescriptor::Action {
                parameters: Vec::new()
            }
        );

        let (action, _) = map(
            &TypeNode::function(
                vec![
                    Parameter::new("a", TypeNode::string()),
                    Parameter::optional("b", TypeNode::number()),
                ],
                TypeNode::void(),
            ),
            false,
        );
        assert_eq!(
            action,
            TypeDescriptor::Action {
                parameters: vec![string(), double().into_nullable()]
            }
        );

        let (func, _) = map(
            &TypeNode::function(vec![Parameter::new("a", TypeNode::string())], TypeNode::boolean()),
            false,
        );
        assert_eq!(
            func,
            TypeDescriptor::Func {
                parameters: vec![string()],
                returns: Box::new(TypeDescriptor::primitive(PrimitiveKind::Boolean)),
            }
        );
    }

    #[test]
    fn test_optional_propagation() {
        assert_eq!(map(&TypeNode::string(), true).0, string().into_nullable());
        assert!(map(&TypeNode::string(), true).0.is_nullable());
        assert_eq!(map(&TypeNode::void(), true).0, TypeDescriptor::void());
        assert_eq!(
            map(&TypeNode::reference("IType"), true).0,
            TypeDescriptor::nominal("IType").into_nullable()
        );
    }

    #[test]
    fn test_unsupported_shapes() {
        for node in [
            TypeNode::Union(vec![TypeNode::string(), TypeNode::number()]),
            TypeNode::Intersection(vec![TypeNode::reference("A"), TypeNode::reference("B")]),
            TypeNode::Tuple(vec![TypeNode::string()]),
            TypeNode::Literal("'click'".to_string()),
            TypeNode::Unrecognized("keyof T".to_string()),
        ] {
            let (ty, pending) = map(&node, false);
            assert_eq!(ty, TypeDescriptor::Unknown);
            assert!(pending.is_empty());
        }
    }

    #[test]
    fn test_renamed_import_uses_declared_name() {
        let mut store = DeclarationStore::new();
        store
            .register(
                "app",
                Unit::new().with_import(ImportDecl::new(
                    vec![ImportSpecifier::renamed("Shared", "Local")],
                    "lib",
                )),
            )
            .expect("Failed to register");
        store
            .register("lib", Unit::new().with_declaration(Declaration::interface("Shared")))
            .expect("Failed to register");

        let mut pending = Vec::new();
        let ty = TypeMapper::new(&mut pending).with_store(&store).map_type(
            "app",
            &TypeNode::array(TypeNode::reference("Local")),
            false,
        );
        assert_eq!(ty, TypeDescriptor::array(TypeDescriptor::nominal("Shared")));
        assert_eq!(pending, vec![PendingRequest::new("app", "Local")]);

        let ty = TypeMapper::new(&mut pending)
            .with_store(&store)
            .map_type("app", &TypeNode::reference("Missing"), false);
        assert_eq!(ty, TypeDescriptor::nominal("Missing"));
    }
}
