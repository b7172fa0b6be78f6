//! React backend: unrolled literal TSX emission.
//!
//! Every element of the cleaned tree is unrolled into literal JSX at
//! generation time. The only render-time decision left in the output is
//! prop/default resolution; which attributes are literal pass-through
//! and which reference the resolved props is decided here, statically.

use crate::capabilities::CapabilityDescriptor;
use crate::emit::{escape_attr, fmt_number, ComponentEmitter, EmitError};
use crate::naming::preview_url;
use crate::target::TargetConfig;
use icon_parser::{canonical, ElementNode, NodeChildren, RootDescriptor};

/// Emits `.tsx` function components wrapped in `React.forwardRef`.
pub struct ReactEmitter<'a> {
    target: &'a TargetConfig,
}

impl<'a> ReactEmitter<'a> {
    /// Creates an emitter for the given target config.
    pub fn new(target: &'a TargetConfig) -> Self {
        Self { target }
    }

    fn root_attrs(&self, root: &RootDescriptor, caps: &CapabilityDescriptor) -> Vec<String> {
        let mut attrs = vec![
            "ref={ref}".to_string(),
            "xmlns=\"http://www.w3.org/2000/svg\"".to_string(),
            format!("viewBox=\"{}\"", escape_attr(&root.view_box)),
            "width={resolvedSize}".to_string(),
            "height={resolvedSize}".to_string(),
        ];
        if !caps.has_mixed_styling {
            if caps.has_stroke {
                attrs.push("stroke={resolvedColor}".to_string());
                attrs.push("fill=\"none\"".to_string());
            } else {
                attrs.push("fill={resolvedColor}".to_string());
            }
        }
        if caps.has_stroke_width {
            attrs.push("strokeWidth={resolvedStrokeWidth}".to_string());
        }
        if !caps.has_mixed_styling && caps.has_stroke {
            if let Some(cap) = &caps.stroke_linecap {
                attrs.push(format!("strokeLinecap=\"{}\"", escape_attr(cap)));
            }
            if let Some(join) = &caps.stroke_linejoin {
                attrs.push(format!("strokeLinejoin=\"{}\"", escape_attr(join)));
            }
        }
        attrs
    }

    fn render_element(
        &self,
        node: &ElementNode,
        depth: usize,
        out: &mut String,
    ) -> Result<(), EmitError> {
        let indent = "  ".repeat(depth);
        out.push_str(&indent);
        out.push('<');
        out.push_str(&node.tag);

        for (name, value) in &node.attributes {
            if name.contains(':') || name.contains('.') {
                return Err(EmitError::UnsupportedAttribute(name.to_string()));
            }
            out.push(' ');
            out.push_str(name);
            if substitutes_color(name, value) {
                out.push_str("={resolvedColor}");
            } else {
                out.push_str(&format!("=\"{}\"", escape_attr(value)));
            }
        }

        match &node.children {
            NodeChildren::None => out.push_str(" />\n"),
            NodeChildren::Text(text) => {
                out.push('>');
                out.push_str(&escape_jsx_text(text));
                out.push_str(&format!("</{}>\n", node.tag));
            }
            NodeChildren::Nodes(kids) => {
                out.push_str(">\n");
                for kid in kids {
                    self.render_element(kid, depth + 1, out)?;
                }
                out.push_str(&indent);
                out.push_str(&format!("</{}>\n", node.tag));
            }
        }
        Ok(())
    }
}

/// The current-color sentinel on a color attribute means "substitute the
/// caller-resolved color here"; any other literal passes through
/// unchanged. This is what keeps mixed-styling icons correct.
fn substitutes_color(name: &str, value: &str) -> bool {
    value == "currentColor" && matches!(canonical(name).as_str(), "stroke" | "fill")
}

fn escape_jsx_text(text: &str) -> String {
    text.replace('<', "&lt;")
        .replace('{', "&#123;")
        .replace('}', "&#125;")
}

impl ComponentEmitter for ReactEmitter<'_> {
    fn emit(
        &self,
        name: &str,
        root: &RootDescriptor,
        caps: &CapabilityDescriptor,
        tree: &[ElementNode],
    ) -> Result<String, EmitError> {
        let mut out = String::new();
        out.push_str("import * as React from 'react';\n");
        out.push_str(&format!(
            "import {{ iconDefaults }} from '{}';\n\n",
            self.target.defaults_module
        ));

        out.push_str(&format!(
            "/**\n * {name}\n *\n * Preview: {}\n */\n",
            preview_url(name)
        ));
        out.push_str(&format!(
            "export interface {name}Props extends React.SVGProps<SVGSVGElement> {{\n"
        ));
        out.push_str("  size?: number;\n");
        out.push_str("  color?: string;\n");
        if caps.has_stroke_width {
            out.push_str("  strokeWidth?: number;\n");
            out.push_str("  absoluteStrokeWidth?: boolean;\n");
        }
        out.push_str("}\n\n");

        let destructured = if caps.has_stroke_width {
            "{ size, color, strokeWidth, absoluteStrokeWidth, ...rest }"
        } else {
            "{ size, color, ...rest }"
        };
        out.push_str(&format!(
            "export const {name} = React.forwardRef<SVGSVGElement, {name}Props>(\n"
        ));
        out.push_str(&format!("  ({destructured}, ref) => {{\n"));
        out.push_str(&format!(
            "    const resolvedSize = size ?? iconDefaults.defaultSize ?? {};\n",
            self.target.default_size
        ));
        out.push_str(
            "    const resolvedColor = color ?? iconDefaults.defaultColor ?? 'currentColor';\n",
        );
        if caps.has_stroke_width {
            out.push_str(&format!(
                "    const baseStrokeWidth = strokeWidth ?? iconDefaults.defaultStrokeWidth ?? {};\n",
                fmt_number(self.target.default_stroke_width)
            ));
            out.push_str("    const resolvedStrokeWidth =\n");
            out.push_str(
                "      (absoluteStrokeWidth ?? iconDefaults.defaultAbsoluteStrokeWidth ?? false)\n",
            );
            out.push_str(&format!(
                "        ? (baseStrokeWidth * {}) / resolvedSize\n",
                self.target.default_size
            ));
            out.push_str("        : baseStrokeWidth;\n");
        }

        out.push_str("    return (\n");
        out.push_str("      <svg\n");
        for attr in self.root_attrs(root, caps) {
            out.push_str("        ");
            out.push_str(&attr);
            out.push('\n');
        }
        out.push_str("        {...rest}\n");
        out.push_str("      >\n");
        for node in tree {
            self.render_element(node, 4, &mut out)?;
        }
        out.push_str("      </svg>\n");
        out.push_str("    );\n");
        out.push_str("  }\n");
        out.push_str(");\n\n");
        out.push_str(&format!("{name}.displayName = '{name}';\n\n"));
        out.push_str(&format!("export default {name};\n"));
        Ok(out)
    }
}
