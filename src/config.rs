//! Built-in lookup tables for the RethinkDB Python driver.
//!
//! Everything here is constructed once at startup and handed to the resolver
//! and emitter by reference; nothing is global.

use crate::model::Target;
use std::collections::{HashMap, HashSet};

/// Namespace of every ReQL query object.
pub const QUERY: &str = "rethinkdb.ast.RqlQuery.";
/// Top-level `rethinkdb` module.
pub const ROOT: &str = "rethinkdb.";
pub const CONNECTION: &str = "rethinkdb.net.Connection.";
pub const CURSOR: &str = "rethinkdb.net.Cursor.";
pub const DB: &str = "rethinkdb.ast.DB.";
pub const TABLE: &str = "rethinkdb.ast.Table.";

/// Entry names skipped by the corpus walker.
pub const IGNORED_FILES: &[&str] = &["index.md"];

pub const DEFAULT_ROOT: &str = "api/python";
pub const DEFAULT_OUTPUT: &str = "_scripts/docs.py";

/// Maps a companion's `io` category tag to a namespace prefix.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    untagged: String,
    tagged: HashMap<String, String>,
}

impl CategoryTable {
    /// `untagged` is used when there is no companion or its tag is null.
    pub fn new(untagged: impl Into<String>) -> Self {
        Self {
            untagged: untagged.into(),
            tagged: HashMap::new(),
        }
    }

    pub fn with(mut self, tag: &str, namespace: &str) -> Self {
        self.tagged.insert(tag.to_string(), namespace.to_string());
        self
    }

    /// `None` means the tag is not in the table.
    pub fn namespace(&self, tag: Option<&str>) -> Option<&str> {
        match tag {
            None => Some(&self.untagged),
            Some(tag) => self.tagged.get(tag).map(String::as_str),
        }
    }
}

/// Computes alias targets from the default namespace.
pub type AliasRule = Box<dyn Fn(&str) -> Vec<Target> + Send + Sync>;

/// How a command name maps onto library symbols.
pub enum Alias {
    Fixed(Vec<Target>),
    Computed(AliasRule),
}

impl Alias {
    pub fn resolve(&self, namespace: &str) -> Vec<Target> {
        match self {
            Alias::Fixed(targets) => targets.clone(),
            Alias::Computed(rule) => rule(namespace),
        }
    }
}

/// Command names that document more than one symbol, or a differently named one.
#[derive(Default)]
pub struct AliasTable {
    entries: HashMap<String, Alias>,
}

impl AliasTable {
    pub fn fixed(mut self, command: &str, targets: &[(&str, &str)]) -> Self {
        let targets = targets
            .iter()
            .map(|(ns, sym)| Target::new(*ns, *sym))
            .collect();
        self.entries.insert(command.to_string(), Alias::Fixed(targets));
        self
    }

    pub fn computed<F>(mut self, command: &str, rule: F) -> Self
    where
        F: Fn(&str) -> Vec<Target> + Send + Sync + 'static,
    {
        self.entries
            .insert(command.to_string(), Alias::Computed(Box::new(rule)));
        self
    }

    pub fn get(&self, command: &str) -> Option<&Alias> {
        self.entries.get(command)
    }
}

/// Namespaces whose methods must be unwrapped with `get_unbound_func` before
/// their `__doc__` can be assigned.
#[derive(Debug, Clone, Default)]
pub struct AccessorSet {
    prefixes: HashSet<String>,
}

impl AccessorSet {
    pub fn new<'a>(prefixes: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            prefixes: prefixes.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn requires(&self, namespace: &str) -> bool {
        self.prefixes.contains(namespace)
    }
}

/// All lookup tables used while resolving and emitting.
pub struct Tables {
    pub categories: CategoryTable,
    pub aliases: AliasTable,
    pub accessors: AccessorSet,
}

impl Tables {
    pub fn rethinkdb() -> Self {
        let categories = [
            "sequence",
            "query",
            "stream",
            "grouped_stream",
            "singleSelection",
            "array",
            "number",
            "bool",
            "value",
            "string",
            "time",
            "any",
        ]
        .iter()
        .fold(CategoryTable::new(""), |table, tag| table.with(tag, QUERY))
        .with("r", ROOT)
        .with("connection", CONNECTION)
        .with("cursor", CURSOR)
        .with("db", DB)
        .with("table", TABLE);

        let aliases = AliasTable::default()
            .fixed("[] (get_field)", &[(QUERY, "__getitem__")])
            .fixed("[] (nth)", &[(QUERY, "nth")])
            .fixed("slice, []", &[(QUERY, "slice")])
            .fixed("+", &[(QUERY, "__add__"), (ROOT, "add")])
            .fixed("-", &[(QUERY, "__sub__"), (ROOT, "sub")])
            .fixed("*", &[(QUERY, "__mul__"), (ROOT, "mul")])
            .fixed("/", &[(QUERY, "__div__"), (ROOT, "div")])
            .fixed("%", &[(QUERY, "__mod__"), (ROOT, "mod")])
            .fixed("&, and_", &[(QUERY, "__and__"), (ROOT, "and_")])
            .fixed("|, or_", &[(QUERY, "__or__"), (ROOT, "or_")])
            .fixed("==, eq", &[(QUERY, "__eq__"), (QUERY, "eq")])
            .fixed("!=, ne", &[(QUERY, "__ne__"), (QUERY, "ne")])
            .fixed("<, lt", &[(QUERY, "__lt__"), (QUERY, "lt")])
            .fixed(">, gt", &[(QUERY, "__gt__"), (QUERY, "gt")])
            .fixed("<=, le", &[(QUERY, "__le__"), (QUERY, "le")])
            .fixed(">=, ge", &[(QUERY, "__ge__"), (QUERY, "ge")])
            .fixed(
                "~, not_",
                &[(QUERY, "__invert__"), (QUERY, "not_"), (ROOT, "not_")],
            )
            .fixed("r", &[("", "rethinkdb")])
            .fixed("repl", &[(CONNECTION, "repl")])
            // r.count already carries its own name
            .computed("count", |namespace| {
                if namespace == ROOT {
                    Vec::new()
                } else {
                    vec![Target::new(QUERY, "count")]
                }
            });

        let accessors = AccessorSet::new([QUERY, CONNECTION, CURSOR, DB, TABLE]);

        Self {
            categories,
            aliases,
            accessors,
        }
    }
}

/// Path tokens used to find a file's companion in the other dialect.
#[derive(Debug, Clone)]
pub struct Dialects {
    pub primary: String,
    pub companion: String,
}

impl Default for Dialects {
    fn default() -> Self {
        Self {
            primary: "python".to_string(),
            companion: "javascript".to_string(),
        }
    }
}
