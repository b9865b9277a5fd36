//! Registration emitter: streams rendered bindings into a single sink.

use crate::config::AccessorSet;
use crate::model::Document;
use crate::render::{Binding, Renderer};
use std::io::{self, Write};

pub struct Emitter<'a, W: Write> {
    out: W,
    renderer: &'a dyn Renderer,
    accessors: &'a AccessorSet,
    emitted: usize,
}

impl<'a, W: Write> Emitter<'a, W> {
    /// Write the output header and return an emitter ready for documents.
    pub fn begin(
        mut out: W,
        renderer: &'a dyn Renderer,
        accessors: &'a AccessorSet,
        revision: &str,
    ) -> io::Result<Self> {
        out.write_all(renderer.header(revision).as_bytes())?;
        Ok(Self {
            out,
            renderer,
            accessors,
            emitted: 0,
        })
    }

    /// Emit one binding per target of `doc`, in target order.
    pub fn emit(&mut self, doc: &Document) -> io::Result<usize> {
        for target in &doc.targets {
            let binding = Binding {
                target,
                accessor: self.accessors.requires(&target.namespace),
                doc: &doc.text,
            };
            let chunk = self.renderer.binding(self.emitted, &binding);
            self.out.write_all(chunk.as_bytes())?;
            self.emitted += 1;
        }
        Ok(doc.targets.len())
    }

    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Write the footer, flush, and hand the sink back.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.write_all(self.renderer.footer().as_bytes())?;
        self.out.flush()?;
        Ok(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{QUERY, ROOT};
    use crate::model::Target;
    use crate::render::python::{PythonRenderer, PROVENANCE};

    fn doc(targets: Vec<Target>, text: &str) -> Document {
        Document {
            command: "test".to_string(),
            targets,
            text: text.to_string(),
        }
    }

    #[test]
    fn emits_in_document_then_alias_order() {
        let accessors = AccessorSet::new([QUERY]);
        let mut emitter =
            Emitter::begin(Vec::new(), &PythonRenderer, &accessors, "\"abc\"").unwrap();

        emitter
            .emit(&doc(
                vec![Target::new(QUERY, "__add__"), Target::new(ROOT, "add")],
                "Sum.",
            ))
            .unwrap();
        emitter
            .emit(&doc(vec![Target::new(ROOT, "connect")], "Connect."))
            .unwrap();
        assert_eq!(emitter.emitted(), 3);

        let out = String::from_utf8(emitter.finish().unwrap()).unwrap();
        let expected = format!(
            "{}\n# hash: \"abc\"\n\n\nimport rethinkdb\nfrom ._compat import get_unbound_func\n\
             \nget_unbound_func(rethinkdb.ast.RqlQuery.__add__).__doc__ = 'Sum.'\
             \n(rethinkdb.add).__doc__ = 'Sum.'\
             \n(rethinkdb.connect).__doc__ = 'Connect.'",
            PROVENANCE
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn empty_target_list_emits_nothing() {
        let accessors = AccessorSet::default();
        let mut emitter = Emitter::begin(Vec::new(), &PythonRenderer, &accessors, "").unwrap();
        assert_eq!(emitter.emit(&doc(vec![], "ignored")).unwrap(), 0);
        let out = String::from_utf8(emitter.finish().unwrap()).unwrap();
        assert!(!out.contains("ignored"));
    }

    #[test]
    fn duplicates_are_not_collapsed() {
        let accessors = AccessorSet::default();
        let mut emitter = Emitter::begin(Vec::new(), &PythonRenderer, &accessors, "").unwrap();
        emitter
            .emit(&doc(vec![Target::new(ROOT, "x")], "first"))
            .unwrap();
        emitter
            .emit(&doc(vec![Target::new(ROOT, "x")], "second"))
            .unwrap();
        let out = String::from_utf8(emitter.finish().unwrap()).unwrap();
        assert!(out.contains("(rethinkdb.x).__doc__ = 'first'"));
        assert!(out.ends_with("(rethinkdb.x).__doc__ = 'second'"));
    }
}
