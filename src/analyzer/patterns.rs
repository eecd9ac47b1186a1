use crate::config::KeywordConfig;
use once_cell::sync::Lazy;
use regex::Regex;

static CALL_SITE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+)\s*\(").unwrap());
static GENERIC_CALL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+\s*\([^)]*\)").unwrap());

/// The four stateless line predicates, compiled once per analyzer from the
/// configured keyword lists.
///
/// These are textual heuristics. They do not tokenize, they do not build a
/// call graph, and they will both over- and under-detect on non-trivial
/// code. Precedence between simultaneously matching predicates is decided
/// by the classifier, not here.
#[derive(Debug, Clone)]
pub struct PatternMatchers {
    loop_start: Regex,
    allocation: Vec<String>,
    io_primitives: Vec<String>,
}

impl PatternMatchers {
    pub fn new(keywords: &KeywordConfig) -> Self {
        Self {
            loop_start: compile_loop_regex(&keywords.loops),
            allocation: keywords.allocation.clone(),
            io_primitives: keywords.io_primitives.clone(),
        }
    }

    /// Loop keyword followed by `(`, on a line without a `//` marker.
    pub fn is_loop_start(&self, line: &str) -> bool {
        self.loop_start.is_match(line) && !is_comment_line(line)
    }

    /// The line calls a name that also appears as ` name(` somewhere in the
    /// full source, excluding known I/O primitives. A declaration-site check
    /// this crude misses mutual recursion and flags coincidental name reuse.
    pub fn is_recursive_call(&self, line: &str, source: &str) -> bool {
        CALL_SITE.captures_iter(line).any(|caps| {
            let name = &caps[1];
            if self.io_primitives.iter().any(|p| p == name) {
                return false;
            }
            source.contains(&format!(" {name}("))
        })
    }

    /// The line contains one of the allocation keywords and no `//` marker.
    pub fn is_dynamic_allocation(&self, line: &str) -> bool {
        !is_comment_line(line) && self.allocation.iter().any(|kw| line.contains(kw.as_str()))
    }

    /// Generic `identifier(args)` shape on a non-control-flow line.
    pub fn is_function_call(&self, line: &str) -> bool {
        GENERIC_CALL.is_match(line)
            && !line.contains("if")
            && !line.contains("while")
            && !line.contains("for")
    }
}

impl Default for PatternMatchers {
    fn default() -> Self {
        Self::new(&KeywordConfig::default())
    }
}

// Any `//` disqualifies the whole line, including trailing comments.
fn is_comment_line(line: &str) -> bool {
    line.contains("//")
}

fn compile_loop_regex(keywords: &[String]) -> Regex {
    if keywords.is_empty() {
        // Never matches.
        return Regex::new(r"a^").unwrap();
    }

    let alternatives = keywords
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{alternatives})\s*\(")).unwrap()
}
