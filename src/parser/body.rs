//! Markdown body to docstring text, as a line-by-line state machine.
//!
//! Drops headings, images and the `{% apibody %}` syntax block, and rewrites
//! Python example fences into an interactive session transcript: the first
//! line of each example gets a `>>> ` prompt, the rest get `... `.

use regex::Regex;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

// `# Command syntax #`, `## Description ##`, `<img src="..." />`
static RE_DECORATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:#.*#|<img.*/>)").unwrap());

static RE_SYNTAX_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\{%\s*apibody\s*%\}").unwrap());

static RE_SYNTAX_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\{%\s*endapibody\s*%\}").unwrap());

static RE_EXAMPLE_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^```py").unwrap());

static RE_FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^```").unwrap());

static RE_BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());

static RE_LEADING_NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\n+").unwrap());

static RE_EXAMPLE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__Example:__|__Example__:").unwrap());

const PRIMARY_PROMPT: &str = ">>> ";
const CONTINUATION_PROMPT: &str = "... ";

// -- Transformer state --------------------------------------------------------

#[derive(Default)]
struct TransformState {
    text: String,
    in_syntax: bool,
    in_example: bool,
    example_first_line: bool,
}

// -- Public API ---------------------------------------------------------------

/// Transform a document body into docstring text.
pub fn transform(body: &str) -> String {
    let mut state = TransformState::default();

    for line in body.split_inclusive('\n') {
        process_line(&mut state, line);
    }

    normalize(&state.text)
}

/// Collapse blank-line runs, strip leading newlines and canonicalize the
/// example marker. Idempotent.
pub fn normalize(text: &str) -> String {
    let text = RE_BLANK_RUN.replace_all(text, "\n\n");
    let text = RE_LEADING_NEWLINES.replace(&text, "");
    RE_EXAMPLE_MARKER
        .replace_all(&text, "*Example:*")
        .into_owned()
}

// -- Line processing ----------------------------------------------------------

fn process_line(s: &mut TransformState, line: &str) {
    let bare = line.trim_end_matches(['\n', '\r']);

    // 1. Headings and images
    if RE_DECORATION.is_match(bare) {
        return;
    }

    // 2. Syntax signature block
    if RE_SYNTAX_START.is_match(bare) {
        s.in_syntax = true;
        return;
    }
    if RE_SYNTAX_END.is_match(bare) {
        s.in_syntax = false;
        return;
    }
    if s.in_syntax {
        return;
    }

    // 3. Example fences; other fences only close
    if RE_EXAMPLE_START.is_match(bare) {
        s.in_example = true;
        s.example_first_line = true;
        return;
    }
    if RE_FENCE.is_match(bare) {
        s.in_example = false;
        return;
    }

    if s.in_example {
        if s.example_first_line {
            s.text.push_str(PRIMARY_PROMPT);
            s.example_first_line = false;
        } else {
            s.text.push_str(CONTINUATION_PROMPT);
        }
    }

    // 4. Everything else
    s.text.push_str(line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_block_becomes_transcript() {
        let body = "Intro.\n\n```py\na = 1\nb = 2\n```\n";
        assert_eq!(transform(body), "Intro.\n\n>>> a = 1\n... b = 2\n");
    }

    #[test]
    fn example_prompt_resets_per_block() {
        let body = "```py\na\nb\n```\ntext\n```py\nc\n```\n";
        assert_eq!(transform(body), ">>> a\n... b\ntext\n>>> c\n");
    }

    #[test]
    fn blank_line_runs_collapse() {
        let body = "first\n\n\n\nsecond\n";
        assert_eq!(transform(body), "first\n\nsecond\n");
    }

    #[test]
    fn leading_blank_lines_stripped() {
        let body = "\n\n\nDescription text.\n";
        assert_eq!(transform(body), "Description text.\n");
    }

    #[test]
    fn headings_and_images_dropped() {
        let body = "# Command syntax #\n## Description ##\n<img src=\"/assets/x.png\" class=\"api_command_illustration\" />\nKept.\n";
        assert_eq!(transform(body), "Kept.\n");
    }

    #[test]
    fn single_hash_line_is_kept() {
        // Only `#...#` counts as decoration
        let body = "# not a heading\n";
        assert_eq!(transform(body), "# not a heading\n");
    }

    #[test]
    fn syntax_block_dropped() {
        let body = "{% apibody %}\nsequence.count() &rarr; number\n{% endapibody %}\n\nCount things.\n";
        assert_eq!(transform(body), "Count things.\n");
    }

    #[test]
    fn syntax_block_wins_over_fences() {
        let body = "{%apibody%}\n```py\nhidden\n```\n{%  endapibody  %}\nshown\n";
        assert_eq!(transform(body), "shown\n");
    }

    #[test]
    fn decoration_inside_example_is_dropped() {
        let body = "```py\n# one # two\ny\n```\n";
        assert_eq!(transform(body), ">>> y\n");
    }

    #[test]
    fn non_python_fences_are_unwrapped() {
        let body = "```js\nconsole.log(1)\n```\n";
        assert_eq!(transform(body), "console.log(1)\n");
    }

    #[test]
    fn example_marker_is_canonicalized() {
        assert_eq!(transform("__Example:__ one\n"), "*Example:* one\n");
        assert_eq!(transform("__Example__: two\n"), "*Example:* two\n");
    }

    #[test]
    fn crlf_lines_are_recognized() {
        let body = "```py\r\na = 1\r\n```\r\n";
        assert_eq!(transform(body), ">>> a = 1\r\n");
    }

    #[test]
    fn normalize_is_idempotent() {
        let body = "\n\n# Title #\n__Example:__ x\n\n\n\n```py\na\n\n\nb\n```\n\n\nend\n";
        let once = transform(body);
        assert_eq!(normalize(&once), once);
        assert_eq!(normalize(&normalize(&once)), once);
    }
}
