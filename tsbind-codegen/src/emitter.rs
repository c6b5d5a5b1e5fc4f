//! Source declaration to target declaration conversion.
//!
//! The emitter translates one declaration at a time. Declarations it
//! references are only reported to the [`ReferenceSink`]; generating them is
//! the closure driver's job.
//!
//! Member names that collide after casing, or that equal the enclosing
//! declaration's name, fall back to their source spelling and then to a
//! numeric suffix. Methods may share a name with other methods (overloads).

use crate::config::{FunctionMemberStyle, GeneratorConfig, MemberNaming};
use crate::error::CodegenError;
use crate::mapper::{ReferenceSink, TypeMapper};
use std::collections::HashSet;
use tsbind_core::{
    BaseType, MethodBody, TargetDeclaration, TargetKind, TargetMember, TargetMethod,
    TargetParameter, TargetProperty, TypeDescriptor, escape_identifier, sanitize_identifier,
    to_pascal_case,
};
use tsbind_schema::{
    Declaration, DeclarationKind, DeclarationStore, Member, MethodMember, Parameter,
    PropertyMember, TypeNode,
};

/// Builds target declarations from source declarations.
pub struct DeclarationEmitter<'a, 's, S: ReferenceSink + ?Sized> {
    store: &'a DeclarationStore,
    config: &'a GeneratorConfig,
    sink: &'s mut S,
}

impl<'a, 's, S: ReferenceSink + ?Sized> DeclarationEmitter<'a, 's, S> {
    /// Creates an emitter.
    pub fn new(store: &'a DeclarationStore, config: &'a GeneratorConfig, sink: &'s mut S) -> Self {
        Self {
            store,
            config,
            sink,
        }
    }

    /// Emits `declaration`, owned by `unit`.
    ///
    /// # Errors
    /// Returns [`CodegenError::UnsupportedDeclarationKind`] for anything
    /// other than an interface or a class.
    pub fn emit(
        &mut self,
        unit: &str,
        declaration: &Declaration,
    ) -> Result<TargetDeclaration, CodegenError> {
        let kind = match declaration.kind {
            DeclarationKind::Interface => TargetKind::Interface,
            DeclarationKind::Class => TargetKind::Class,
            other => return Err(CodegenError::UnsupportedDeclarationKind { kind: other }),
        };

        let mut target = TargetDeclaration::new(kind, &declaration.name, unit);
        target.doc = doc_lines(declaration.documentation.as_deref());

        for base in &declaration.heritage {
            let base_type = self.emit_base_type(unit, base);
            target.base_types.push(base_type);
        }

        let body = match kind {
            TargetKind::Interface => MethodBody::None,
            TargetKind::Class => MethodBody::NotImplemented,
        };

        let mut names = MemberNames::new(&declaration.name);
        for member in &declaration.members {
            match member {
                Member::Property(property) => {
                    let mut emitted = self.emit_property(unit, property, body);
                    names.claim(&mut emitted);
                    target.members.push(emitted);
                }
                Member::Method(method) => {
                    let mut emitted = TargetMember::Method(self.emit_method(unit, method, body));
                    names.claim(&mut emitted);
                    target.members.push(emitted);
                }
                Member::IndexSignature { .. } => {
                    tracing::trace!("Index signature on '{}' ignored", declaration.name);
                }
            }
        }

        Ok(target)
    }

    fn emit_base_type(&mut self, unit: &str, base: &TypeNode) -> BaseType {
        let resolved_in = match base {
            TypeNode::Reference { name, .. } => {
                let found = self.store.resolve_any(unit, name);
                if found.is_none() {
                    tracing::debug!("Base type '{}' not found from unit '{}'", name, unit);
                }
                found.map(|r| r.unit.to_string())
            }
            _ => None,
        };

        BaseType {
            ty: self.map(unit, base, false),
            resolved_in,
        }
    }

    fn emit_property(
        &mut self,
        unit: &str,
        property: &PropertyMember,
        body: MethodBody,
    ) -> TargetMember {
        let doc = doc_lines(property.documentation.as_deref());

        if let (
            FunctionMemberStyle::Method,
            TypeNode::Function {
                parameters,
                return_type,
            },
        ) = (self.config.function_members, &property.ty)
        {
            return TargetMember::Method(TargetMethod {
                name: self.member_name(&property.name),
                source_name: property.name.clone(),
                return_type: self.map(unit, return_type, property.optional),
                parameters: self.emit_parameters(unit, parameters),
                doc,
                body,
            });
        }

        TargetMember::Property(TargetProperty {
            name: self.member_name(&property.name),
            source_name: property.name.clone(),
            ty: self.map(unit, &property.ty, property.optional),
            doc,
        })
    }

    fn emit_method(&mut self, unit: &str, method: &MethodMember, body: MethodBody) -> TargetMethod {
        TargetMethod {
            name: self.member_name(&method.name),
            source_name: method.name.clone(),
            return_type: self.map(unit, &method.return_type, method.optional),
            parameters: self.emit_parameters(unit, &method.parameters),
            doc: doc_lines(method.documentation.as_deref()),
            body,
        }
    }

    fn emit_parameters(&mut self, unit: &str, parameters: &[Parameter]) -> Vec<TargetParameter> {
        parameters
            .iter()
            .map(|p| TargetParameter {
                name: escape_identifier(&sanitize_identifier(&p.name)),
                source_name: p.name.clone(),
                ty: self.map(unit, &p.ty, p.optional),
            })
            .collect()
    }

    fn map(&mut self, unit: &str, node: &TypeNode, optional: bool) -> TypeDescriptor {
        TypeMapper::new(&mut *self.sink)
            .with_store(self.store)
            .map_type(unit, node, optional)
    }

    fn member_name(&self, name: &str) -> String {
        let cased = match self.config.member_naming {
            MemberNaming::PascalCase => to_pascal_case(name),
            MemberNaming::Preserve => name.to_string(),
        };
        escape_identifier(&sanitize_identifier(&cased))
    }
}

/// Member names already used inside one declaration.
struct MemberNames<'d> {
    declaration: &'d str,
    properties: HashSet<String>,
    methods: HashSet<String>,
}

impl<'d> MemberNames<'d> {
    fn new(declaration: &'d str) -> Self {
        Self {
            declaration,
            properties: HashSet::new(),
            methods: HashSet::new(),
        }
    }

    fn collides(&self, name: &str, is_method: bool) -> bool {
        name == self.declaration
            || self.properties.contains(name)
            || (!is_method && self.methods.contains(name))
    }

    /// Renames `member` if its name is taken, then records it.
    fn claim(&mut self, member: &mut TargetMember) {
        let (name, source, is_method) = match member {
            TargetMember::Property(p) => (&mut p.name, p.source_name.as_str(), false),
            TargetMember::Method(m) => (&mut m.name, m.source_name.as_str(), true),
        };

        if self.collides(name, is_method) {
            let fallback = escape_identifier(&sanitize_identifier(source));
            let mut candidate = fallback.clone();
            let mut suffix = 2;
            while self.collides(&candidate, is_method) {
                candidate = format!("{fallback}{suffix}");
                suffix += 1;
            }
            tracing::debug!(
                "Member '{}' of '{}' collides with an existing name, emitted as '{}'",
                name,
                self.declaration,
                candidate
            );
            *name = candidate;
        }

        if is_method {
            self.methods.insert(name.clone());
        } else {
            self.properties.insert(name.clone());
        }
    }
}

/// Splits documentation text into trimmed, non-empty lines.
#[must_use]
pub fn doc_lines(text: Option<&str>) -> Vec<String> {
    text.map(|t| {
        t.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::closure::PendingRequest;
    use tsbind_core::PrimitiveKind;
    use tsbind_schema::Unit;

    fn emit_with(
        config: &GeneratorConfig,
        store: &DeclarationStore,
        declaration: &Declaration,
    ) -> (TargetDeclaration, Vec<PendingRequest>) {
        let mut pending = Vec::new();
        let target = DeclarationEmitter::new(store, config, &mut pending)
            .emit("tsd", declaration)
            .expect("Failed to emit");
        (target, pending)
    }

    fn emit(declaration: &Declaration) -> (TargetDeclaration, Vec<PendingRequest>) {
        emit_with(&GeneratorConfig::default(), &DeclarationStore::new(), declaration)
    }

    fn string() -> TypeDescriptor {
        TypeDescriptor::primitive(PrimitiveKind::String)
    }

    #[test]
    fn test_doc_lines() {
        assert_eq!(
            doc_lines(Some("Interface Comment\n line2\r\n\n")),
            vec!["Interface Comment", "line2"]
        );
        assert!(doc_lines(None).is_empty());
    }

    #[test]
    fn test_interface_header() {
        let decl = Declaration::interface("SomeType").with_doc("Interface Comment\nline2");
        let (target, pending) = emit(&decl);

        assert_eq!(target.kind, TargetKind::Interface);
        assert_eq!(target.name, "SomeType");
        assert_eq!(target.origin_unit, "tsd");
        assert_eq!(target.doc, vec!["Interface Comment", "line2"]);
        assert!(target.members.is_empty());
        assert!(pending.is_empty());
    }

    #[test]
    fn test_property_naming_and_doc() {
        let decl = Declaration::interface("SomeType")
            .with_member(PropertyMember::new("prop1", TypeNode::string()).with_doc("the comment"));
        let (target, _) = emit(&decl);

        let prop = target.properties().next().expect("property missing");
        assert_eq!(prop.name, "Prop1");
        assert_eq!(prop.source_name, "prop1");
        assert_eq!(prop.ty, string());
        assert_eq!(prop.doc, vec!["the comment"]);
    }

    #[test]
    fn test_preserve_naming() {
        let config = GeneratorConfig::new().member_naming(MemberNaming::Preserve);
        let decl = Declaration::interface("SomeType")
            .with_member(PropertyMember::new("prop1", TypeNode::string()))
            .with_member(PropertyMember::new("event", TypeNode::string()));
        let (target, _) = emit_with(&config, &DeclarationStore::new(), &decl);

        assert!(target.member("prop1").is_some());
        assert!(target.member("@event").is_some());
    }

    #[test]
    fn test_optional_property_is_nullable() {
        let decl = Declaration::interface("SomeType")
            .with_member(PropertyMember::new("prop1", TypeNode::string()).optional());
        let (target, _) = emit(&decl);

        let prop = target.properties().next().expect("property missing");
        assert_eq!(prop.ty, string().into_nullable());
    }

    #[test]
    fn test_method_signature() {
        let decl = Declaration::interface("SomeType").with_member(
            MethodMember::new("method", TypeNode::string())
                .optional()
                .with_parameter(Parameter::new("prop1", TypeNode::string()))
                .with_parameter(Parameter::optional("prop2", TypeNode::number())),
        );
        let (target, _) = emit(&decl);

        let method = target.methods().next().expect("method missing");
        assert_eq!(method.name, "Method");
        assert_eq!(method.return_type, string().into_nullable());
        assert_eq!(method.body, MethodBody::None);
        assert_eq!(method.parameters.len(), 2);
        assert_eq!(method.parameters[0].name, "prop1");
        assert_eq!(method.parameters[0].ty, string());
        assert_eq!(
            method.parameters[1].ty,
            TypeDescriptor::primitive(PrimitiveKind::Double).into_nullable()
        );
    }

    #[test]
    fn test_optional_void_method() {
        let decl = Declaration::interface("SomeType")
            .with_member(MethodMember::new("method", TypeNode::void()).optional());
        let (target, _) = emit(&decl);

        let method = target.methods().next().expect("method missing");
        assert_eq!(method.return_type, TypeDescriptor::void());
    }

    #[test]
    fn test_reserved_parameter_name_escaped() {
        let decl = Declaration::interface("SomeType").with_member(
            MethodMember::new("method", TypeNode::void())
                .with_parameter(Parameter::new("event", TypeNode::string())),
        );
        let (target, _) = emit(&decl);

        let param = &target.methods().next().expect("method missing").parameters[0];
        assert_eq!(param.name, "@event");
        assert_ne!(param.name, param.source_name);
    }

    #[test]
    fn test_class_methods_get_stub_body() {
        let decl = Declaration::class("SomeClass")
            .with_member(PropertyMember::new("prop1", TypeNode::string()))
            .with_member(MethodMember::new("method", TypeNode::void()));
        let (target, _) = emit(&decl);

        assert_eq!(target.kind, TargetKind::Class);
        let method = target.methods().next().expect("method missing");
        assert_eq!(method.body, MethodBody::NotImplemented);
    }

    #[test]
    fn test_function_property_styles() {
        let callback = TypeNode::function(
            vec![Parameter::new("event", TypeNode::string())],
            TypeNode::void(),
        );
        let decl = Declaration::interface("SomeType")
            .with_member(PropertyMember::new("onChange", callback.clone()))
            .with_member(PropertyMember::new("onClose", TypeNode::function(Vec::new(), TypeNode::void())));

        let (as_property, _) = emit(&decl);
        let prop = as_property.properties().next().expect("property missing");
        assert_eq!(prop.name, "OnChange");
        assert_eq!(
            prop.ty,
            TypeDescriptor::Action {
                parameters: vec![string()]
            }
        );
        assert_eq!(as_property.properties().count(), 2);

        let config = GeneratorConfig::new().function_members(FunctionMemberStyle::Method);
        let (as_method, _) = emit_with(&config, &DeclarationStore::new(), &decl);
        assert_eq!(as_method.properties().count(), 0);
        assert_eq!(as_method.methods().count(), 2);
        let method = as_method.methods().next().expect("method missing");
        assert_eq!(method.name, "OnChange");
        assert_eq!(method.return_type, TypeDescriptor::void());
        assert_eq!(method.parameters[0].name, "@event");
    }

    #[test]
    fn test_nominal_references_are_reported() {
        let decl = Declaration::interface("IType")
            .with_member(PropertyMember::new("prop", TypeNode::reference("IType2")))
            .with_member(
                MethodMember::new("load", TypeNode::reference("Result"))
                    .with_parameter(Parameter::new("options", TypeNode::reference("Options"))),
            );
        let (_, pending) = emit(&decl);

        assert_eq!(
            pending,
            vec![
                PendingRequest::new("tsd", "IType2"),
                PendingRequest::new("tsd", "Result"),
                PendingRequest::new("tsd", "Options"),
            ]
        );
    }

    #[test]
    fn test_heritage() {
        let mut store = DeclarationStore::new();
        store
            .register(
                "tsd",
                Unit::new()
                    .with_declaration(Declaration::interface("SomeType"))
                    .with_declaration(Declaration::interface("SomeType2")),
            )
            .expect("Failed to register");

        let decl = Declaration::interface("SomeType")
            .extends(TypeNode::reference("SomeType2"))
            .extends(TypeNode::reference("Missing"));
        let (target, pending) = emit_with(&GeneratorConfig::default(), &store, &decl);

        assert_eq!(target.base_types.len(), 2);
        assert_eq!(target.base_types[0].ty, TypeDescriptor::nominal("SomeType2"));
        assert_eq!(target.base_types[0].resolved_in.as_deref(), Some("tsd"));
        assert_eq!(target.base_types[1].resolved_in, None);
        assert_eq!(pending.len(), 2);
    }

    #[test]
    fn test_index_signature_member_ignored() {
        let mut decl = Declaration::interface("Bag");
        decl.add_member(Member::IndexSignature {
            key: TypeNode::string(),
            value: TypeNode::any(),
        });
        let (target, _) = emit(&decl);
        assert!(target.members.is_empty());
    }

    #[test]
    fn test_unsupported_kind() {
        let mut decl = Declaration::interface("Alias");
        decl.kind = DeclarationKind::TypeAlias;
        let mut pending = Vec::new();
        let config = GeneratorConfig::default();
        let store = DeclarationStore::new();
        let err = DeclarationEmitter::new(&store, &config, &mut pending)
            .emit("tsd", &decl)
            .unwrap_err();
        assert_eq!(
            err,
            CodegenError::UnsupportedDeclarationKind {
                kind: DeclarationKind::TypeAlias
            }
        );
    }

    #[test]
    fn test_colliding_member_names() {
        let decl = Declaration::interface("Item")
            .with_member(PropertyMember::new("prop", TypeNode::string()))
            .with_member(PropertyMember::new("Prop", TypeNode::number()))
            .with_member(PropertyMember::new("PROP", TypeNode::boolean()))
            .with_member(MethodMember::new("run", TypeNode::void()))
            .with_member(
                MethodMember::new("run", TypeNode::void())
                    .with_parameter(Parameter::new("force", TypeNode::boolean())),
            )
            .with_member(PropertyMember::new("run", TypeNode::string()));
        let (target, _) = emit(&decl);

        let names: Vec<&str> = target.members.iter().map(TargetMember::name).collect();
        assert_eq!(names, vec!["Prop", "Prop2", "PROP", "Run", "Run", "run"]);
    }

    #[test]
    fn test_member_named_like_declaration() {
        let decl = Declaration::interface("Prop")
            .with_member(PropertyMember::new("prop", TypeNode::string()))
            .with_member(PropertyMember::new("Prop", TypeNode::number()));
        let (target, _) = emit(&decl);

        let names: Vec<&str> = target.members.iter().map(TargetMember::name).collect();
        assert_eq!(names, vec!["prop", "Prop2"]);
    }
}
