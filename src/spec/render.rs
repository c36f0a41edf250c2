//! Rendering of composed specs to compilation-unit text.
//!
//! Output is deterministic: the same spec always renders to byte-identical
//! text, which is what makes repeated generation runs idempotent.

use super::types::{
    AnnotationSpec, FieldSpec, Line, MethodSpec, Modifier, ParameterSpec, TypeKind, TypeSpec,
};
use crate::model::TypeRef;

const INDENT: &str = "  ";

/// Quote a string as a source literal, escaping backslashes and quotes.
pub fn quote_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

/// Render a full compilation unit: package declaration plus the type.
pub fn render_unit(package: &str, spec: &TypeSpec) -> String {
    let mut out = String::new();
    if !package.is_empty() {
        out.push_str(&format!("package {};\n\n", package));
    }
    render_type(&mut out, spec, 0);
    out
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn render_annotation(ann: &AnnotationSpec) -> String {
    if ann.members.is_empty() {
        return format!("@{}", ann.name);
    }
    if ann.members.len() == 1 && ann.members[0].0 == "value" {
        return format!("@{}({})", ann.name, ann.members[0].1);
    }
    let members = ann
        .members
        .iter()
        .map(|(name, value)| format!("{} = {}", name, value))
        .collect::<Vec<_>>()
        .join(", ");
    format!("@{}({})", ann.name, members)
}

fn render_modifiers(modifiers: &[Modifier]) -> String {
    let mut out = String::new();
    for m in modifiers {
        out.push_str(m.as_str());
        out.push(' ');
    }
    out
}

fn render_type(out: &mut String, spec: &TypeSpec, depth: usize) {
    for ann in &spec.annotations {
        push_indent(out, depth);
        out.push_str(&render_annotation(ann));
        out.push('\n');
    }

    push_indent(out, depth);
    out.push_str(&render_modifiers(&spec.modifiers));
    match spec.kind {
        TypeKind::Class => out.push_str("class "),
        TypeKind::AnnotationType => out.push_str("@interface "),
    }
    out.push_str(&spec.name);
    if let Some(superclass) = &spec.superclass {
        out.push_str(&format!(" extends {}", superclass));
    }
    if !spec.interfaces.is_empty() {
        let list = spec
            .interfaces
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(" implements {}", list));
    }
    out.push_str(" {\n");

    for field in &spec.fields {
        render_field(out, field, depth + 1);
    }

    for method in &spec.methods {
        out.push('\n');
        render_method(out, method, &spec.name, depth + 1);
    }

    for nested in &spec.nested {
        out.push('\n');
        render_type(out, nested, depth + 1);
    }

    push_indent(out, depth);
    out.push_str("}\n");
}

fn render_field(out: &mut String, field: &FieldSpec, depth: usize) {
    push_indent(out, depth);
    out.push_str(&render_modifiers(&field.modifiers));
    out.push_str(&format!("{} {}", field.ty, field.name));
    if let Some(init) = &field.initializer {
        out.push_str(&format!(" = {}", init));
    }
    out.push_str(";\n");
}

fn render_parameter(param: &ParameterSpec, variadic: bool) -> String {
    let mut out = String::new();
    for ann in &param.annotations {
        out.push_str(&render_annotation(ann));
        out.push(' ');
    }
    out.push_str("final ");
    if variadic {
        // a variadic parameter is declared as an array of its element type
        match &param.ty {
            TypeRef::Array(elem) => out.push_str(&format!("{}...", elem)),
            other => out.push_str(&format!("{}...", other)),
        }
    } else {
        out.push_str(&param.ty.to_string());
    }
    out.push(' ');
    out.push_str(&param.name);
    out
}

fn render_method(out: &mut String, method: &MethodSpec, class_name: &str, depth: usize) {
    for ann in &method.annotations {
        push_indent(out, depth);
        out.push_str(&render_annotation(ann));
        out.push('\n');
    }

    push_indent(out, depth);
    out.push_str(&render_modifiers(&method.modifiers));

    if !method.type_variables.is_empty() {
        out.push_str(&format!("<{}> ", method.type_variables.join(", ")));
    }

    match &method.name {
        Some(name) => out.push_str(&format!("{} {}", method.return_type, name)),
        // constructors carry the enclosing class name and no return type
        None => out.push_str(class_name),
    }

    out.push('(');
    let last = method.params.len().saturating_sub(1);
    for (i, param) in method.params.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&render_parameter(param, method.varargs && i == last));
    }
    out.push(')');

    if !method.throws.is_empty() {
        let list = method
            .throws
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(" throws {}", list));
    }

    if method.is_abstract {
        out.push_str(";\n");
        return;
    }

    out.push_str(" {\n");
    render_code(out, &method.code, depth + 1);
    push_indent(out, depth);
    out.push_str("}\n");
}

fn render_code(out: &mut String, code: &super::types::CodeBlock, depth: usize) {
    let mut level = depth;
    for line in &code.lines {
        match line {
            Line::Statement(stmt) => {
                push_indent(out, level);
                out.push_str(stmt);
                out.push_str(";\n");
            }
            Line::OpenBlock(head) => {
                push_indent(out, level);
                out.push_str(head);
                out.push_str(" {\n");
                level += 1;
            }
            Line::CloseBlock => {
                level = level.saturating_sub(1);
                push_indent(out, level);
                out.push_str("}\n");
            }
            Line::Comment(text) => {
                push_indent(out, level);
                out.push_str(&format!("// {}\n", text));
            }
        }
    }
}
