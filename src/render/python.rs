//! Python renderer — the `docs.py` module loaded by the driver.
//!
//! ```python
//! import rethinkdb
//! from ._compat import get_unbound_func
//!
//! get_unbound_func(rethinkdb.ast.RqlQuery.count).__doc__ = 'Counts ...'
//! (rethinkdb.connect).__doc__ = 'Create a new connection ...'
//! ```

use crate::render::{Binding, Renderer};

pub const PROVENANCE: &str = "# This file was generated by docbind from the rethinkdb documentation in http://github.com/rethinkdb/docs";

const ACCESSOR: &str = "get_unbound_func";

pub struct PythonRenderer;

impl Renderer for PythonRenderer {
    fn header(&self, revision: &str) -> String {
        format!(
            "{}\n# hash: {}\n\n\nimport rethinkdb\nfrom ._compat import {}\n",
            PROVENANCE, revision, ACCESSOR
        )
    }

    fn binding(&self, _index: usize, binding: &Binding<'_>) -> String {
        format!(
            "\n{}({}).__doc__ = {}",
            if binding.accessor { ACCESSOR } else { "" },
            binding.target,
            string_literal(binding.doc)
        )
    }
}

/// Quote `s` as a Python 3 string literal, the way `repr(str)` does.
///
/// Single quotes unless the text contains `'` and no `"`. Controls, format
/// characters, private-use code points, noncharacters and every separator
/// except the ASCII space are escaped; everything else is kept as-is.
/// Unassigned code points depend on the interpreter's Unicode version and
/// are not escaped.
pub fn string_literal(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if is_unprintable(c) => {
                let code = c as u32;
                if code <= 0xff {
                    out.push_str(&format!("\\x{:02x}", code));
                } else if code <= 0xffff {
                    out.push_str(&format!("\\u{:04x}", code));
                } else {
                    out.push_str(&format!("\\U{:08x}", code));
                }
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

// Cc, Cf, Co, Zs (but U+0020), Zl, Zp, and the Cn noncharacters.
fn is_unprintable(c: char) -> bool {
    let code = c as u32;
    c.is_control()
        || (code & 0xfffe) == 0xfffe
        || matches!(
            c,
            // separators
            '\u{a0}'
                | '\u{1680}'
                | '\u{2000}'..='\u{200a}'
                | '\u{2028}'..='\u{2029}'
                | '\u{202f}'
                | '\u{205f}'
                | '\u{3000}'
                // format
                | '\u{ad}'
                | '\u{600}'..='\u{605}'
                | '\u{61c}'
                | '\u{6dd}'
                | '\u{70f}'
                | '\u{890}'..='\u{891}'
                | '\u{8e2}'
                | '\u{180e}'
                | '\u{200b}'..='\u{200f}'
                | '\u{202a}'..='\u{202e}'
                | '\u{2060}'..='\u{2064}'
                | '\u{2066}'..='\u{206f}'
                | '\u{feff}'
                | '\u{fff9}'..='\u{fffb}'
                | '\u{110bd}'
                | '\u{110cd}'
                | '\u{13430}'..='\u{1343f}'
                | '\u{1bca0}'..='\u{1bca3}'
                | '\u{1d173}'..='\u{1d17a}'
                | '\u{e0001}'
                | '\u{e0020}'..='\u{e007f}'
                // private use
                | '\u{e000}'..='\u{f8ff}'
                | '\u{f0000}'..='\u{ffffd}'
                | '\u{100000}'..='\u{10fffd}'
                // noncharacters
                | '\u{fdd0}'..='\u{fdef}'
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Target;

    #[test]
    fn literal_prefers_single_quotes() {
        assert_eq!(string_literal("abc"), "'abc'");
        assert_eq!(string_literal("say \"hi\""), "'say \"hi\"'");
    }

    #[test]
    fn literal_switches_to_double_quotes() {
        assert_eq!(string_literal("it's"), "\"it's\"");
    }

    #[test]
    fn literal_escapes_both_quotes_when_mixed() {
        assert_eq!(string_literal("it's \"x\""), "'it\\'s \"x\"'");
    }

    #[test]
    fn literal_escapes_whitespace_and_backslash() {
        assert_eq!(string_literal("a\\b\n\tc\r"), "'a\\\\b\\n\\tc\\r'");
    }

    #[test]
    fn literal_escapes_unprintables() {
        assert_eq!(string_literal("\u{1}\u{7f}"), "'\\x01\\x7f'");
        assert_eq!(string_literal("a\u{a0}b"), "'a\\xa0b'");
        assert_eq!(string_literal("\u{2028}"), "'\\u2028'");
    }

    #[test]
    fn literal_escapes_format_and_private_use() {
        assert_eq!(
            string_literal("a\u{2066}b\u{e000}c\u{61c}d"),
            "'a\\u2066b\\ue000c\\u061cd'"
        );
        assert_eq!(string_literal("\u{180e}\u{fffb}"), "'\\u180e\\ufffb'");
        assert_eq!(string_literal("\u{e0041}\u{10fffd}"), "'\\U000e0041\\U0010fffd'");
        assert_eq!(string_literal("\u{fffe}\u{1ffff}"), "'\\ufffe\\U0001ffff'");
    }

    #[test]
    fn literal_keeps_ascii_space() {
        assert_eq!(string_literal("a b"), "'a b'");
        assert_eq!(string_literal("a\u{2003}b"), "'a\\u2003b'");
    }

    #[test]
    fn literal_keeps_printable_unicode() {
        assert_eq!(string_literal("→ café"), "'→ café'");
    }

    #[test]
    fn binding_with_accessor() {
        let target = Target::new("rethinkdb.ast.RqlQuery.", "count");
        let line = PythonRenderer.binding(
            0,
            &Binding {
                target: &target,
                accessor: true,
                doc: "Count.\n",
            },
        );
        assert_eq!(
            line,
            "\nget_unbound_func(rethinkdb.ast.RqlQuery.count).__doc__ = 'Count.\\n'"
        );
    }

    #[test]
    fn binding_without_accessor() {
        let target = Target::new("", "rethinkdb");
        let line = PythonRenderer.binding(
            3,
            &Binding {
                target: &target,
                accessor: false,
                doc: "",
            },
        );
        assert_eq!(line, "\n(rethinkdb).__doc__ = ''");
    }

    #[test]
    fn header_layout() {
        let header = PythonRenderer.header("\"abc123\"");
        assert_eq!(
            header,
            format!(
                "{}\n# hash: \"abc123\"\n\n\nimport rethinkdb\nfrom ._compat import get_unbound_func\n",
                PROVENANCE
            )
        );
    }
}
