//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod python;

use crate::model::Target;
use anyhow::{anyhow, Result};

/// One documentation string bound to one target.
#[derive(Debug)]
pub struct Binding<'a> {
    pub target: &'a Target,
    /// Target must be unwrapped with the accessor before assignment
    pub accessor: bool,
    pub doc: &'a str,
}

/// Trait for rendering bindings into a specific output format.
///
/// Output is produced incrementally: one header, one chunk per binding in
/// emission order, one footer.
pub trait Renderer {
    fn header(&self, revision: &str) -> String;
    /// `index` is the zero-based position of `binding` in the whole output.
    fn binding(&self, index: usize, binding: &Binding<'_>) -> String;
    fn footer(&self) -> String {
        String::new()
    }
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "python" | "py" => Ok(Box::new(python::PythonRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use python or json", format)),
    }
}
