//! Generates C# declarations for a small hand-built declaration graph.
//!
//! Run with: `RUST_LOG=debug cargo run --example generate`

use tsbind::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Equivalent of:
    //   // shapes.d.ts
    //   export interface Point { x: number; y: number; }
    //
    //   // canvas.d.ts
    //   import { Point } from "./shapes";
    //   /** Drawing surface. */
    //   export interface Canvas {
    //       origin: Point;
    //       size?: number;
    //       draw(points: Point[], done?: () => void): boolean;
    //   }
    let shapes = Unit::new().with_declaration(
        Declaration::interface("Point")
            .with_member(PropertyMember::new("x", TypeNode::number()))
            .with_member(PropertyMember::new("y", TypeNode::number())),
    );
    let canvas = Unit::new()
        .with_import(ImportDecl::named(["Point"], "./shapes"))
        .with_declaration(
            Declaration::interface("Canvas")
                .with_doc("Drawing surface.")
                .with_member(PropertyMember::new("origin", TypeNode::reference("Point")))
                .with_member(PropertyMember::new("size", TypeNode::number()).optional())
                .with_member(
                    MethodMember::new("draw", TypeNode::boolean())
                        .with_parameter(Parameter::new(
                            "points",
                            TypeNode::array(TypeNode::reference("Point")),
                        ))
                        .with_parameter(Parameter::optional(
                            "done",
                            TypeNode::function(Vec::new(), TypeNode::void()),
                        )),
                ),
        );

    let mut generator = Generator::new();
    generator.register_unit(unit_name_from_path("lib/shapes.d.ts"), shapes)?;
    generator.register_unit(unit_name_from_path("lib/canvas.d.ts"), canvas)?;

    let request = GenerationRequest::new("canvas", "Canvas", DeclarationKind::Interface, "Demo.Interop");
    let source = generator.generate_csharp(&request)?;

    println!("{}", source);
    Ok(())
}
