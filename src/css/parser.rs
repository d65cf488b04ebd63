//! A forgiving scanner for CSS and SCSS rule bodies.
//!
//! This is not a conforming CSS parser. It splits text into rules,
//! declarations and SCSS variables, which is all completion, hover and the
//! built-in lint rules need. Comments, quoted strings, parenthesised groups
//! and `#{}` interpolation are skipped so their punctuation does not split
//! statements.

use std::ops::Range;

/// A rule block: `selector { ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub selector_span: Range<usize>,
    /// From the opening `{` to just past the closing `}` (or end of text).
    pub body: Range<usize>,
    /// Index of the enclosing rule.
    pub parent: Option<usize>,
    pub closed: bool,
}

/// A `property: value` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub property_span: Range<usize>,
    pub value: String,
    pub value_span: Range<usize>,
    /// Index of the rule the declaration belongs to.
    pub rule: Option<usize>,
}

/// A SCSS `$name: value` variable declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub name_span: Range<usize>,
    pub value: String,
}

/// Structural problems found while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    RightCurlyExpected,
    ColonExpected,
    RuleOrSelectorExpected,
}

impl IssueKind {
    pub fn message(self) -> &'static str {
        match self {
            IssueKind::RightCurlyExpected => "} expected",
            IssueKind::ColonExpected => "colon expected",
            IssueKind::RuleOrSelectorExpected => "at-rule or selector expected",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            IssueKind::RightCurlyExpected => "css-rcurlyexpected",
            IssueKind::ColonExpected => "css-colonexpected",
            IssueKind::RuleOrSelectorExpected => "css-ruleorselectorexpected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    pub kind: IssueKind,
    pub span: Range<usize>,
}

/// Scanned structure of a stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
    pub declarations: Vec<Declaration>,
    pub variables: Vec<Variable>,
    pub issues: Vec<ParseIssue>,
}

impl Stylesheet {
    /// Scan `text` into a stylesheet.
    pub fn parse(text: &str) -> Self {
        let mut scanner = Scanner {
            text,
            sheet: Stylesheet::default(),
            open: Vec::new(),
            segment_start: 0,
        };
        scanner.run();
        scanner.sheet
    }

    /// Declarations directly inside the given rule.
    pub fn declarations_in(&self, rule: usize) -> impl Iterator<Item = &Declaration> {
        self.declarations
            .iter()
            .filter(move |d| d.rule == Some(rule))
    }

    /// The declaration whose property name covers `offset`.
    ///
    /// The end bound is inclusive so a cursor right after the name still hits.
    pub fn declaration_at(&self, offset: usize) -> Option<&Declaration> {
        self.declarations
            .iter()
            .find(|d| d.property_span.start <= offset && offset <= d.property_span.end)
    }

    /// The variable whose name covers `offset`.
    pub fn variable_at(&self, offset: usize) -> Option<&Variable> {
        self.variables
            .iter()
            .find(|v| v.name_span.start <= offset && offset <= v.name_span.end)
    }
}

struct Scanner<'a> {
    text: &'a str,
    sheet: Stylesheet,
    /// Indices of rules whose `{` has not been closed yet.
    open: Vec<usize>,
    segment_start: usize,
}

impl Scanner<'_> {
    fn run(&mut self) {
        let text = self.text;
        let bytes = text.as_bytes();
        let mut paren_depth = 0usize;
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                b'/' if bytes.get(i + 1) == Some(&b'*') => {
                    let end = text[i + 2..]
                        .find("*/")
                        .map(|p| i + 2 + p + 2)
                        .unwrap_or(bytes.len());
                    self.skip_leading(i, end);
                    i = end;
                    continue;
                }
                b'/' if bytes.get(i + 1) == Some(&b'/') && self.at_statement_boundary(i) => {
                    let end = text[i..]
                        .find('\n')
                        .map(|p| i + p)
                        .unwrap_or(bytes.len());
                    self.skip_leading(i, end);
                    i = end;
                    continue;
                }
                b'"' | b'\'' => {
                    i = skip_string(bytes, i);
                    continue;
                }
                b'#' if bytes.get(i + 1) == Some(&b'{') => {
                    i = skip_block(bytes, i + 1);
                    continue;
                }
                b'(' => paren_depth += 1,
                b')' => paren_depth = paren_depth.saturating_sub(1),
                b'{' if paren_depth == 0 => self.open_rule(i),
                b';' if paren_depth == 0 => {
                    self.statement(self.segment_start..i);
                    self.segment_start = i + 1;
                }
                b'}' => {
                    paren_depth = 0;
                    self.statement(self.segment_start..i);
                    self.close_rule(i);
                    self.segment_start = i + 1;
                }
                _ => {}
            }
            i += 1;
        }

        if !self.open.is_empty() {
            self.statement(self.segment_start..bytes.len());
        }
        let end = bytes.len();
        for _ in self.open.drain(..) {
            self.sheet.issues.push(ParseIssue {
                kind: IssueKind::RightCurlyExpected,
                span: end..end,
            });
        }
    }

    /// A `//` comment only starts where a statement could start, so
    /// `url(http://...)` is left alone.
    fn at_statement_boundary(&self, i: usize) -> bool {
        self.text[self.segment_start..i].trim().is_empty()
            || self.text[..i]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_whitespace())
    }

    /// Drop a comment from the pending segment if nothing precedes it.
    fn skip_leading(&mut self, start: usize, end: usize) {
        if self.text[self.segment_start..start].trim().is_empty() {
            self.segment_start = end;
        }
    }

    fn open_rule(&mut self, brace: usize) {
        let span = trim_span(self.text, self.segment_start..brace);
        let index = self.sheet.rules.len();
        self.sheet.rules.push(Rule {
            selector: self.text[span.clone()].to_string(),
            selector_span: span,
            body: brace..self.text.len(),
            parent: self.open.last().copied(),
            closed: false,
        });
        self.open.push(index);
        self.segment_start = brace + 1;
    }

    fn close_rule(&mut self, brace: usize) {
        match self.open.pop() {
            Some(index) => {
                let rule = &mut self.sheet.rules[index];
                rule.body.end = brace + 1;
                rule.closed = true;
            }
            None => self.sheet.issues.push(ParseIssue {
                kind: IssueKind::RuleOrSelectorExpected,
                span: brace..brace + 1,
            }),
        }
    }

    fn statement(&mut self, range: Range<usize>) {
        let span = trim_span(self.text, range);
        if span.is_empty() {
            return;
        }
        let segment = &self.text[span.clone()];
        if segment.starts_with('@') {
            return;
        }

        let Some(colon) = find_colon(segment) else {
            self.sheet.issues.push(ParseIssue {
                kind: IssueKind::ColonExpected,
                span,
            });
            return;
        };

        let name_span = trim_span(self.text, span.start..span.start + colon);
        let value_span = trim_span(self.text, span.start + colon + 1..span.end);
        let name = self.text[name_span.clone()].to_string();
        let value = self.text[value_span.clone()].to_string();

        if name.starts_with('$') {
            self.sheet.variables.push(Variable {
                name,
                name_span,
                value,
            });
        } else {
            self.sheet.declarations.push(Declaration {
                property: name,
                property_span: name_span,
                value,
                value_span,
                rule: self.open.last().copied(),
            });
        }
    }
}

/// First `:` outside parentheses and interpolation.
fn find_colon(segment: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, b) in segment.bytes().enumerate() {
        match b {
            b'(' | b'{' => depth += 1,
            b')' | b'}' => depth = depth.saturating_sub(1),
            b':' if depth == 0 => return Some(i),
            _ => {}
        }
    }
    None
}

/// Index just past the closing quote of the string starting at `start`.
fn skip_string(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'\n' => return i,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Index just past the `}` matching the `{` at `start`.
fn skip_block(bytes: &[u8], start: usize) -> usize {
    let mut depth = 0usize;
    for (i, &b) in bytes.iter().enumerate().skip(start) {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return i + 1;
                }
            }
            _ => {}
        }
    }
    bytes.len()
}

fn trim_span(text: &str, range: Range<usize>) -> Range<usize> {
    let slice = &text[range.clone()];
    let start = range.start + (slice.len() - slice.trim_start().len());
    let end = range.end - (slice.len() - slice.trim_end().len());
    if start > end {
        start..start
    } else {
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_declarations_in_wrapper() {
        let sheet = Stylesheet::parse(":root{\ncolor: red;\nmargin: 0 auto;\n}");

        assert_eq!(sheet.rules.len(), 1);
        assert_eq!(sheet.rules[0].selector, ":root");
        assert!(sheet.rules[0].closed);

        let names: Vec<_> = sheet
            .declarations
            .iter()
            .map(|d| (d.property.as_str(), d.value.as_str()))
            .collect();
        assert_eq!(names, vec![("color", "red"), ("margin", "0 auto")]);
        assert_eq!(sheet.declarations[0].property_span, 7..12);
        assert!(sheet.issues.is_empty());
    }

    #[test]
    fn nested_rules_and_variables() {
        let sheet = Stylesheet::parse(":root{\n$gap: 4px;\n&:hover { color: blue; }\n}");

        assert_eq!(sheet.rules.len(), 2);
        assert_eq!(sheet.rules[1].selector, "&:hover");
        assert_eq!(sheet.rules[1].parent, Some(0));
        assert_eq!(sheet.variables.len(), 1);
        assert_eq!(sheet.variables[0].name, "$gap");
        assert_eq!(sheet.declarations[0].rule, Some(1));
    }

    #[test]
    fn last_declaration_without_semicolon() {
        let sheet = Stylesheet::parse("a { color: red }");
        assert_eq!(sheet.declarations.len(), 1);
        assert_eq!(sheet.declarations[0].value, "red");
    }

    #[test]
    fn punctuation_inside_strings_and_urls() {
        let sheet = Stylesheet::parse(
            "a { content: \"a;b{}\"; background: url(http://x.test/a;b.png); }",
        );
        assert_eq!(sheet.declarations.len(), 2);
        assert_eq!(sheet.declarations[1].value, "url(http://x.test/a;b.png)");
        assert!(sheet.issues.is_empty());
    }

    #[test]
    fn comments_are_skipped() {
        let sheet = Stylesheet::parse("a {\n/* note */\ncolor: red; // trailing\nmargin: 0;\n}");
        let names: Vec<_> = sheet.declarations.iter().map(|d| d.property.as_str()).collect();
        assert_eq!(names, vec!["color", "margin"]);
    }

    #[test]
    fn interpolation_does_not_open_rules() {
        let sheet = Stylesheet::parse("a { width: #{$w}px; }");
        assert_eq!(sheet.rules.len(), 1);
        assert_eq!(sheet.declarations[0].value, "#{$w}px");
    }

    #[test]
    fn reports_structural_issues() {
        let sheet = Stylesheet::parse("a { color }\n}\nb {");
        let kinds: Vec<_> = sheet.issues.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                IssueKind::ColonExpected,
                IssueKind::RuleOrSelectorExpected,
                IssueKind::RightCurlyExpected,
            ]
        );
    }

    #[test]
    fn at_statements_are_not_declarations() {
        let sheet = Stylesheet::parse("a { @include button; color: red; }");
        assert_eq!(sheet.declarations.len(), 1);
        assert!(sheet.issues.is_empty());
    }

    #[test]
    fn lookup_by_offset() {
        let text = ":root{\ncolor: red;\n}";
        let sheet = Stylesheet::parse(text);
        assert_eq!(sheet.declaration_at(9).map(|d| d.property.as_str()), Some("color"));
        assert_eq!(sheet.declaration_at(12).map(|d| d.property.as_str()), Some("color"));
        assert!(sheet.declaration_at(15).is_none());
    }
}
