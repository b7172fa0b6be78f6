//! Vue backend: generic recursive renderer emission.
//!
//! Instead of unrolling markup, the cleaned tree is embedded as a JSON
//! node array and rendered by one recursive routine at render time. The
//! routine's default-applying branches are folded in here, at generation
//! time, from the capability descriptor, so each component only carries
//! the logic its icon actually needs.

use crate::capabilities::CapabilityDescriptor;
use crate::emit::{fmt_number, ComponentEmitter, EmitError};
use crate::naming::preview_url;
use crate::target::TargetConfig;
use icon_parser::{ElementNode, NodeChildren, RootDescriptor};
use serde_json::Value;

/// Emits `.ts` render-function components built on `defineComponent`/`h`.
pub struct VueEmitter<'a> {
    target: &'a TargetConfig,
}

impl<'a> VueEmitter<'a> {
    /// Creates an emitter for the given target config.
    pub fn new(target: &'a TargetConfig) -> Self {
        Self { target }
    }

    /// The body of the generated `styled` helper: which defaults and
    /// substitutions apply, decided once per icon.
    fn styled_lines(&self, caps: &CapabilityDescriptor) -> Vec<String> {
        let mut lines = Vec::new();
        if caps.has_mixed_styling {
            lines.push("if (merged['stroke'] === 'currentColor') merged['stroke'] = color;".into());
            lines.push("if (merged['fill'] === 'currentColor') merged['fill'] = color;".into());
        } else if caps.has_stroke {
            lines.push("if (merged['stroke'] === undefined) merged['stroke'] = color;".into());
            lines.push("if (merged['fill'] === undefined) merged['fill'] = 'none';".into());
        } else {
            lines.push("if (merged['fill'] === undefined) merged['fill'] = color;".into());
        }
        if caps.has_stroke_width {
            lines.push(
                "if (merged['stroke-width'] === undefined) merged['stroke-width'] = strokeWidth;"
                    .into(),
            );
        }
        if !caps.has_mixed_styling && caps.has_stroke {
            if let Some(cap) = &caps.stroke_linecap {
                lines.push(format!(
                    "if (merged['stroke-linecap'] === undefined) merged['stroke-linecap'] = '{}';",
                    escape_single(cap)
                ));
            }
            if let Some(join) = &caps.stroke_linejoin {
                lines.push(format!(
                    "if (merged['stroke-linejoin'] === undefined) merged['stroke-linejoin'] = '{}';",
                    escape_single(join)
                ));
            }
        }
        lines
    }
}

fn escape_single(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Serializes one element for the embedded node array. Attribute order
/// follows the source (the map preserves insertion order).
fn node_to_json(node: &ElementNode) -> Value {
    let mut obj = serde_json::Map::new();
    obj.insert("tag".to_string(), Value::String(node.tag.to_string()));

    let mut attrs = serde_json::Map::new();
    for (name, value) in &node.attributes {
        attrs.insert(name.to_string(), Value::String(value.clone()));
    }
    obj.insert("attrs".to_string(), Value::Object(attrs));

    match &node.children {
        NodeChildren::None => {}
        NodeChildren::Text(text) => {
            obj.insert("text".to_string(), Value::String(text.clone()));
        }
        NodeChildren::Nodes(kids) => {
            obj.insert(
                "children".to_string(),
                Value::Array(kids.iter().map(node_to_json).collect()),
            );
        }
    }
    Value::Object(obj)
}

impl ComponentEmitter for VueEmitter<'_> {
    fn emit(
        &self,
        name: &str,
        root: &RootDescriptor,
        caps: &CapabilityDescriptor,
        tree: &[ElementNode],
    ) -> Result<String, EmitError> {
        let nodes_json =
            serde_json::to_string_pretty(&Value::Array(tree.iter().map(node_to_json).collect()))
                .map_err(|e| EmitError::Failed(e.to_string()))?;

        let mut out = String::new();
        out.push_str("import { defineComponent, h, type VNode } from 'vue';\n");
        out.push_str(&format!(
            "import {{ iconDefaults }} from '{}';\n\n",
            self.target.defaults_module
        ));

        out.push_str(&format!(
            "/**\n * {name}\n *\n * Preview: {}\n */\n",
            preview_url(name)
        ));
        out.push_str("interface IconNode {\n");
        out.push_str("  tag: string;\n");
        out.push_str("  attrs: Record<string, string>;\n");
        out.push_str("  text?: string;\n");
        out.push_str("  children?: IconNode[];\n");
        out.push_str("}\n\n");

        out.push_str(&format!("const nodes: IconNode[] = {nodes_json};\n\n"));

        out.push_str("export default defineComponent({\n");
        out.push_str(&format!("  name: '{name}',\n"));
        out.push_str("  inheritAttrs: false,\n");
        out.push_str("  props: {\n");
        out.push_str("    size: { type: Number, required: false },\n");
        out.push_str("    color: { type: String, required: false },\n");
        if caps.has_stroke_width {
            out.push_str("    strokeWidth: { type: Number, required: false },\n");
            out.push_str(
                "    absoluteStrokeWidth: { type: Boolean, required: false, default: undefined },\n",
            );
        }
        out.push_str("  },\n");
        out.push_str("  setup(props, { attrs }) {\n");
        out.push_str("    return (): VNode => {\n");
        out.push_str(&format!(
            "      const size = props.size ?? iconDefaults.defaultSize ?? {};\n",
            self.target.default_size
        ));
        out.push_str(
            "      const color = props.color ?? iconDefaults.defaultColor ?? 'currentColor';\n",
        );
        if caps.has_stroke_width {
            out.push_str(&format!(
                "      const baseStrokeWidth =\n        props.strokeWidth ?? iconDefaults.defaultStrokeWidth ?? {};\n",
                fmt_number(self.target.default_stroke_width)
            ));
            out.push_str("      const strokeWidth =\n");
            out.push_str("        (props.absoluteStrokeWidth ?? iconDefaults.defaultAbsoluteStrokeWidth ?? false)\n");
            out.push_str(&format!(
                "          ? (baseStrokeWidth * {}) / size\n",
                self.target.default_size
            ));
            out.push_str("          : baseStrokeWidth;\n");
        }

        out.push_str(
            "      const styled = (source: Record<string, string>): Record<string, string | number> => {\n",
        );
        out.push_str("        const merged: Record<string, string | number> = { ...source };\n");
        for line in self.styled_lines(caps) {
            out.push_str("        ");
            out.push_str(&line);
            out.push('\n');
        }
        out.push_str("        return merged;\n");
        out.push_str("      };\n");
        out.push_str("      const renderNode = (node: IconNode): VNode =>\n");
        out.push_str(
            "        h(node.tag, styled(node.attrs), node.text ?? (node.children ?? []).map(renderNode));\n",
        );
        out.push_str("      return h(\n");
        out.push_str("        'svg',\n");
        out.push_str("        {\n");
        out.push_str("          xmlns: 'http://www.w3.org/2000/svg',\n");
        out.push_str(&format!(
            "          viewBox: '{}',\n",
            escape_single(&root.view_box)
        ));
        out.push_str("          width: size,\n");
        out.push_str("          height: size,\n");
        out.push_str("          ...attrs,\n");
        out.push_str("        },\n");
        out.push_str("        nodes.map(renderNode)\n");
        out.push_str("      );\n");
        out.push_str("    };\n");
        out.push_str("  },\n");
        out.push_str("});\n");
        Ok(out)
    }
}
