//! The built-in stylesheet engine.
//!
//! Completion works from the text before the cursor rather than the scanned
//! stylesheet, so it still answers while the user is mid-edit and the
//! surrounding text does not scan cleanly.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use tower_lsp::lsp_types::*;

use crate::settings::{LintLevel, Settings};

use super::data::{
    edit_distance, get_property, is_known_property, known_property_names, PropertyDef,
    GLOBAL_KEYWORDS, NAMED_COLORS, PROPERTIES, PSEUDO_SELECTORS, SCSS_DIRECTIVES, SCSS_FUNCTIONS,
};
use super::engine::{Flavor, StylesheetEngine, TextDocument};
use super::parser::Stylesheet;

/// A name that can sit on the left of a declaration colon.
static DECLARATION_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\$[\w-]+|-{0,2}[A-Za-z][\w-]*)$").unwrap());

/// Vendor-prefixed property such as `-webkit-appearance`.
static VENDOR_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-[A-Za-z]+-").unwrap());

/// Lint rule names understood by this engine.
pub const UNKNOWN_PROPERTIES: &str = "unknownProperties";
pub const EMPTY_RULES: &str = "emptyRules";
pub const DUPLICATE_PROPERTIES: &str = "duplicateProperties";

/// Largest edit distance for which a rename quick fix is offered.
const MAX_FIX_DISTANCE: usize = 2;

/// What the cursor is positioned on.
#[derive(Debug, PartialEq, Eq)]
enum CompletionContext {
    /// Start of a statement: a property name or, in SCSS, a nested rule.
    PropertyName,
    /// After `name:`.
    Value { property: String },
    /// Inside a selector such as `&:ho`.
    Selector,
}

/// Detect the completion context by scanning back to the statement start.
fn detect_context(text: &str, offset: usize) -> CompletionContext {
    let before = &text[..offset];
    let start = before.rfind(['{', '}', ';']).map(|i| i + 1).unwrap_or(0);
    let segment = before[start..].trim_start();

    if segment.starts_with('&') {
        return CompletionContext::Selector;
    }
    match segment.find(':') {
        Some(colon) => {
            let name = segment[..colon].trim_end();
            if DECLARATION_NAME.is_match(name) {
                CompletionContext::Value {
                    property: name.to_string(),
                }
            } else {
                CompletionContext::Selector
            }
        }
        None => CompletionContext::PropertyName,
    }
}

#[derive(Debug, Clone, Copy)]
struct LintRules {
    unknown_properties: LintLevel,
    empty_rules: LintLevel,
    duplicate_properties: LintLevel,
}

impl LintRules {
    fn from_settings(settings: &Settings) -> Self {
        Self {
            unknown_properties: settings.lint_level(UNKNOWN_PROPERTIES, LintLevel::Error),
            empty_rules: settings.lint_level(EMPTY_RULES, LintLevel::Warning),
            duplicate_properties: settings.lint_level(DUPLICATE_PROPERTIES, LintLevel::Ignore),
        }
    }
}

fn severity(level: LintLevel) -> Option<DiagnosticSeverity> {
    match level {
        LintLevel::Ignore => None,
        LintLevel::Warning => Some(DiagnosticSeverity::WARNING),
        LintLevel::Error => Some(DiagnosticSeverity::ERROR),
    }
}

/// CSS/SCSS engine backed by the vocabulary tables in [`super::data`].
#[derive(Debug, Clone)]
pub struct CssLanguageService {
    flavor: Flavor,
    lint: LintRules,
}

impl CssLanguageService {
    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    fn diagnostic(
        &self,
        document: &dyn TextDocument,
        span: std::ops::Range<usize>,
        severity: DiagnosticSeverity,
        code: &str,
        message: String,
    ) -> Diagnostic {
        Diagnostic {
            range: Range::new(
                document.position_at(span.start),
                document.position_at(span.end),
            ),
            severity: Some(severity),
            code: Some(NumberOrString::String(code.to_string())),
            code_description: None,
            source: Some(self.flavor.as_str().to_string()),
            message,
            related_information: None,
            tags: None,
            data: None,
        }
    }

    fn property_items(&self) -> impl Iterator<Item = CompletionItem> {
        PROPERTIES.iter().map(|p| CompletionItem {
            label: p.name.to_string(),
            kind: Some(CompletionItemKind::PROPERTY),
            documentation: Some(Documentation::String(p.description.to_string())),
            insert_text: Some(format!("{}: ", p.name)),
            ..Default::default()
        })
    }

    fn value_items(&self, property: Option<&PropertyDef>) -> Vec<CompletionItem> {
        let mut items = Vec::new();
        if let Some(property) = property {
            items.extend(property.values.iter().enumerate().map(|(i, v)| CompletionItem {
                label: v.to_string(),
                kind: Some(CompletionItemKind::VALUE),
                sort_text: Some(format!("d_{:02}", i)),
                ..Default::default()
            }));
            if property.accepts_color {
                items.extend(NAMED_COLORS.iter().map(|c| CompletionItem {
                    label: c.to_string(),
                    kind: Some(CompletionItemKind::COLOR),
                    ..Default::default()
                }));
            }
        }
        items.extend(GLOBAL_KEYWORDS.iter().map(|k| CompletionItem {
            label: k.to_string(),
            kind: Some(CompletionItemKind::KEYWORD),
            sort_text: Some(format!("z_{}", k)),
            ..Default::default()
        }));
        items
    }

    fn selector_items(&self) -> impl Iterator<Item = CompletionItem> {
        PSEUDO_SELECTORS.iter().map(|p| CompletionItem {
            label: p.name.to_string(),
            kind: Some(CompletionItemKind::FUNCTION),
            documentation: Some(Documentation::String(p.description.to_string())),
            ..Default::default()
        })
    }

    fn directive_items(&self) -> impl Iterator<Item = CompletionItem> {
        SCSS_DIRECTIVES.iter().map(|d| CompletionItem {
            label: d.name.to_string(),
            kind: Some(CompletionItemKind::KEYWORD),
            documentation: Some(Documentation::String(d.description.to_string())),
            ..Default::default()
        })
    }

    fn scss_value_items<'a>(
        &self,
        stylesheet: &'a Stylesheet,
    ) -> impl Iterator<Item = CompletionItem> + 'a {
        let variables = stylesheet.variables.iter().map(|v| CompletionItem {
            label: v.name.clone(),
            kind: Some(CompletionItemKind::VARIABLE),
            detail: Some(v.value.clone()),
            ..Default::default()
        });
        let functions = SCSS_FUNCTIONS.iter().map(|f| CompletionItem {
            label: f.name.to_string(),
            kind: Some(CompletionItemKind::FUNCTION),
            detail: Some(f.signature.to_string()),
            documentation: Some(Documentation::String(f.description.to_string())),
            ..Default::default()
        });
        variables.chain(functions)
    }

    fn unknown_property_diagnostics(
        &self,
        document: &dyn TextDocument,
        stylesheet: &Stylesheet,
        out: &mut Vec<Diagnostic>,
    ) {
        let Some(severity) = severity(self.lint.unknown_properties) else {
            return;
        };
        for declaration in &stylesheet.declarations {
            let name = declaration.property.as_str();
            if name.starts_with("--") || VENDOR_PREFIX.is_match(name) || name.contains("#{") {
                continue;
            }
            if !is_known_property(name) {
                out.push(self.diagnostic(
                    document,
                    declaration.property_span.clone(),
                    severity,
                    UNKNOWN_PROPERTIES,
                    format!("Unknown property: '{}'", name),
                ));
            }
        }
    }

    fn duplicate_property_diagnostics(
        &self,
        document: &dyn TextDocument,
        stylesheet: &Stylesheet,
        out: &mut Vec<Diagnostic>,
    ) {
        let Some(severity) = severity(self.lint.duplicate_properties) else {
            return;
        };
        for rule in 0..stylesheet.rules.len() {
            let mut seen = HashSet::new();
            for declaration in stylesheet.declarations_in(rule) {
                let name = declaration.property.to_ascii_lowercase();
                if !seen.insert(name) {
                    out.push(self.diagnostic(
                        document,
                        declaration.property_span.clone(),
                        severity,
                        DUPLICATE_PROPERTIES,
                        "Do not use duplicate style definitions".to_string(),
                    ));
                }
            }
        }
    }

    fn empty_rule_diagnostics(
        &self,
        document: &dyn TextDocument,
        stylesheet: &Stylesheet,
        out: &mut Vec<Diagnostic>,
    ) {
        let Some(severity) = severity(self.lint.empty_rules) else {
            return;
        };
        let text = document.text();
        for rule in stylesheet.rules.iter().filter(|r| r.closed) {
            let inner = &text[rule.body.start + 1..rule.body.end - 1];
            if inner.trim().is_empty() {
                let span = if rule.selector_span.is_empty() {
                    rule.body.start..rule.body.start + 1
                } else {
                    rule.selector_span.clone()
                };
                out.push(self.diagnostic(
                    document,
                    span,
                    severity,
                    EMPTY_RULES,
                    "Do not use empty rulesets".to_string(),
                ));
            }
        }
    }
}

impl StylesheetEngine for CssLanguageService {
    fn new(flavor: Flavor, settings: &Settings) -> Self {
        Self {
            flavor,
            lint: LintRules::from_settings(settings),
        }
    }

    fn parse_stylesheet(&self, document: &dyn TextDocument) -> Stylesheet {
        Stylesheet::parse(document.text())
    }

    fn do_complete(
        &self,
        document: &dyn TextDocument,
        position: Position,
        stylesheet: &Stylesheet,
    ) -> CompletionList {
        let text = document.text();
        let offset = document.offset_at(position).min(text.len());
        if !text.is_char_boundary(offset) {
            return CompletionList::default();
        }

        let context = detect_context(text, offset);
        let mut items: Vec<CompletionItem> = Vec::new();
        match (self.flavor, context) {
            (Flavor::Css, CompletionContext::PropertyName) => items.extend(self.property_items()),
            (Flavor::Css, CompletionContext::Value { property }) => {
                items.extend(self.value_items(get_property(&property)))
            }
            (Flavor::Css, CompletionContext::Selector) => {}
            (Flavor::Scss, CompletionContext::PropertyName) => {
                items.extend(self.property_items());
                items.extend(self.selector_items());
                items.extend(self.directive_items());
            }
            (Flavor::Scss, CompletionContext::Value { property }) => {
                items.extend(self.value_items(get_property(&property)));
                items.extend(self.scss_value_items(stylesheet));
            }
            (Flavor::Scss, CompletionContext::Selector) => items.extend(self.selector_items()),
        }

        CompletionList {
            is_incomplete: false,
            items,
        }
    }

    fn do_hover(
        &self,
        document: &dyn TextDocument,
        position: Position,
        stylesheet: &Stylesheet,
    ) -> Option<Hover> {
        let offset = document.offset_at(position);

        if let Some(declaration) = stylesheet.declaration_at(offset) {
            let property = get_property(&declaration.property)?;
            let span = &declaration.property_span;
            return Some(Hover {
                contents: HoverContents::Markup(MarkupContent {
                    kind: MarkupKind::Markdown,
                    value: format!(
                        "**{}**\n\n{}\n\nSyntax: `{}`",
                        property.name, property.description, property.syntax
                    ),
                }),
                range: Some(Range::new(
                    document.position_at(span.start),
                    document.position_at(span.end),
                )),
            });
        }

        if self.flavor != Flavor::Scss {
            return None;
        }
        let variable = stylesheet.variable_at(offset)?;
        Some(Hover {
            contents: HoverContents::Array(vec![
                MarkedString::LanguageString(LanguageString {
                    language: "scss".to_string(),
                    value: format!("{}: {}", variable.name, variable.value),
                }),
                MarkedString::String("Variable declared in this template".to_string()),
            ]),
            range: Some(Range::new(
                document.position_at(variable.name_span.start),
                document.position_at(variable.name_span.end),
            )),
        })
    }

    fn do_validation(
        &self,
        document: &dyn TextDocument,
        stylesheet: &Stylesheet,
    ) -> Vec<Diagnostic> {
        let mut diagnostics: Vec<Diagnostic> = stylesheet
            .issues
            .iter()
            .map(|issue| {
                self.diagnostic(
                    document,
                    issue.span.clone(),
                    DiagnosticSeverity::ERROR,
                    issue.kind.code(),
                    issue.kind.message().to_string(),
                )
            })
            .collect();

        self.unknown_property_diagnostics(document, stylesheet, &mut diagnostics);
        self.duplicate_property_diagnostics(document, stylesheet, &mut diagnostics);
        self.empty_rule_diagnostics(document, stylesheet, &mut diagnostics);

        diagnostics.sort_by_key(|d| (d.range.start.line, d.range.start.character));
        diagnostics
    }

    fn get_folding_ranges(&self, document: &dyn TextDocument) -> Vec<FoldingRange> {
        let stylesheet = Stylesheet::parse(document.text());
        stylesheet
            .rules
            .iter()
            .filter(|r| r.closed)
            .filter_map(|rule| {
                let start_line = document.position_at(rule.body.start).line;
                let end_line = document.position_at(rule.body.end - 1).line;
                (end_line > start_line).then(|| FoldingRange {
                    start_line,
                    end_line,
                    ..Default::default()
                })
            })
            .collect()
    }

    fn do_code_actions(
        &self,
        document: &dyn TextDocument,
        _range: Range,
        diagnostics: &[Diagnostic],
        stylesheet: &Stylesheet,
    ) -> Vec<CodeAction> {
        let Ok(uri) = Url::parse(document.uri()) else {
            return Vec::new();
        };

        let mut actions = Vec::new();
        for diagnostic in diagnostics {
            let is_unknown_property = matches!(
                &diagnostic.code,
                Some(NumberOrString::String(code)) if code == UNKNOWN_PROPERTIES
            );
            if !is_unknown_property {
                continue;
            }
            let offset = document.offset_at(diagnostic.range.start);
            let Some(declaration) = stylesheet.declaration_at(offset) else {
                continue;
            };

            let name = declaration.property.to_ascii_lowercase();
            let mut candidates: Vec<(usize, &str)> = known_property_names()
                .map(|candidate| (edit_distance(&name, candidate), candidate))
                .filter(|(distance, _)| *distance <= MAX_FIX_DISTANCE)
                .collect();
            candidates.sort();

            for (_, candidate) in candidates.into_iter().take(3) {
                let edit = TextEdit::new(diagnostic.range, candidate.to_string());
                let changes = HashMap::from([(uri.clone(), vec![edit])]);
                actions.push(CodeAction {
                    title: format!("Rename to '{}'", candidate),
                    kind: Some(CodeActionKind::QUICKFIX),
                    diagnostics: Some(vec![diagnostic.clone()]),
                    edit: Some(WorkspaceEdit::new(changes)),
                    ..Default::default()
                });
            }
        }
        actions
    }
}
