//! JSON renderer — structured binding manifest for tooling integration.

use crate::render::{Binding, Renderer};
use serde_json::{json, Value};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn header(&self, revision: &str) -> String {
        format!(
            "{{\n  \"generator\": {},\n  \"revision\": {},\n  \"bindings\": [",
            Value::from(env!("CARGO_PKG_NAME")),
            Value::from(revision)
        )
    }

    fn binding(&self, index: usize, binding: &Binding<'_>) -> String {
        let entry = json!({
            "target": binding.target.to_string(),
            "namespace": binding.target.namespace,
            "symbol": binding.target.symbol,
            "accessor": binding.accessor,
            "doc": binding.doc,
        });
        let comma = if index > 0 { "," } else { "" };
        format!("{}\n    {}", comma, entry)
    }

    fn footer(&self) -> String {
        "\n  ]\n}\n".to_string()
    }
}
