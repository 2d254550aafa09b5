// crates/rewrite_imports/src/lib.rs
//
// Lexical rewriting of JavaScript/TypeScript import statements. Matching is
// regex-based, not AST-based: an import-shaped sequence inside a string
// literal or comment will also be rewritten. This is a known false-positive
// risk of the tool, accepted deliberately.

use regex::Regex;
use std::borrow::Cow;

/// A single rewrite rule: a compiled pattern plus a replacement template
/// referencing its capture groups (`$1` etc.). Rules are immutable once built.
pub struct Rule {
    pattern: Regex,
    replacement: String,
}

impl Rule {
    /// Compiles `pattern` and pairs it with `replacement`.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            replacement: replacement.to_string(),
        })
    }
}

/// An ordered list of rules applied in sequence over a file's full text.
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Builds the rule set that renames the module specifier of an import
    /// statement from `from` to `to`, covering three lexical shapes:
    ///
    /// 1. named imports: `import { a, b as c } from "<from>"`
    /// 2. namespace import: `import * as ns from "<from>"`
    /// 3. default import: `import thing from "<from>"`
    ///
    /// Arbitrary whitespace between tokens and either quote style are
    /// accepted; the captured names are preserved verbatim and the rewritten
    /// specifier is emitted single-quoted. The three patterns are mutually
    /// non-overlapping, so application order does not affect the result for
    /// well-formed input.
    ///
    /// `from` is escaped for literal matching; `to` is inserted literally
    /// into the replacement templates and must not contain `$`.
    pub fn module_rename(from: &str, to: &str) -> Result<Self, regex::Error> {
        let from = regex::escape(from);
        let rules = vec![
            Rule::new(
                &format!(r#"import\s*\{{\s*([^}}]+?)\s*\}}\s*from\s*['"]{from}['"]"#),
                &format!("import {{ $1 }} from '{to}'"),
            )?,
            Rule::new(
                &format!(r#"import\s+\*\s+as\s+(\w+)\s+from\s*['"]{from}['"]"#),
                &format!("import * as $1 from '{to}'"),
            )?,
            Rule::new(
                &format!(r#"import\s+(\w+)\s+from\s*['"]{from}['"]"#),
                &format!("import $1 from '{to}'"),
            )?,
        ];
        Ok(Self::new(rules))
    }

    /// Applies every rule globally (all non-overlapping occurrences) over
    /// `text`, returning the resulting text and a flag that is true if any
    /// rule matched at least once. Non-matching text passes through
    /// unchanged; there are no error conditions.
    pub fn rewrite(&self, text: &str) -> (String, bool) {
        let mut changed = false;
        let mut current = text.to_string();
        for rule in &self.rules {
            match rule.pattern.replace_all(&current, rule.replacement.as_str()) {
                Cow::Owned(next) => {
                    current = next;
                    changed = true;
                }
                Cow::Borrowed(_) => {}
            }
        }
        (current, changed)
    }
}
