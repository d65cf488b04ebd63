//! CSS/SCSS language features for styled template literals.
//!
//! A host language service hands over the text of a tagged template literal
//! through a [`TemplateContext`]. The text is wrapped in a virtual stylesheet
//! document, queried against two stylesheet engines (strict CSS and SCSS), and
//! the results are translated back into host shapes in template coordinates.

use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use tower_lsp::lsp_types::{CompletionItem, Diagnostic, Position, Range};
use tracing::{debug, trace};

mod cache;
pub mod css;
pub mod document;
pub mod host;
pub mod settings;
pub mod translate;

pub use cache::CompletionsCache;
pub use css::{CssLanguageService, Flavor, StylesheetEngine, TextDocument};
pub use document::{LineIndex, TemplateContext, TemplateSource, VirtualDocument};
pub use settings::{
    discover_settings, load_settings, parse_settings, LintLevel, Settings, SettingsError,
};

use document::to_virtual_position;
use host::{
    CodeFixAction, CompletionEntryDetails, CompletionInfo, OutliningSpan, QuickInfo,
    DEFAULT_ERROR_CODE,
};

/// Language features for styled templates, backed by a pair of engines.
pub struct StyledTemplateService<E: StylesheetEngine = CssLanguageService> {
    settings: Settings,
    css: OnceLock<E>,
    scss: OnceLock<E>,
    completions: Mutex<CompletionsCache>,
}

impl StyledTemplateService {
    pub fn new(settings: Settings) -> Self {
        Self::with_engine(settings)
    }
}

impl Default for StyledTemplateService {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl<E: StylesheetEngine> StyledTemplateService<E> {
    /// Create a service whose engines are of type `E`.
    pub fn with_engine(settings: Settings) -> Self {
        Self {
            settings,
            css: OnceLock::new(),
            scss: OnceLock::new(),
            completions: Mutex::new(CompletionsCache::new()),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace the settings. Engines are rebuilt on next use.
    pub fn configure(&mut self, settings: Settings) {
        debug!(validate = settings.validate(), "reconfiguring styled template service");
        self.settings = settings;
        self.css = OnceLock::new();
        self.scss = OnceLock::new();
        self.completions
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn css(&self) -> &E {
        self.css.get_or_init(|| {
            debug!("creating css engine");
            E::new(Flavor::Css, &self.settings)
        })
    }

    fn scss(&self) -> &E {
        self.scss.get_or_init(|| {
            debug!("creating scss engine");
            E::new(Flavor::Scss, &self.settings)
        })
    }

    fn lock_completions(&self) -> MutexGuard<'_, CompletionsCache> {
        self.completions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Completion items at `position`, served from the cache when possible.
    fn completion_items(
        &self,
        context: &dyn TemplateContext,
        position: Position,
    ) -> Arc<Vec<CompletionItem>> {
        // Held across the computation so concurrent queries are serialized.
        let mut cache = self.lock_completions();
        if let Some(items) = cache.get(context.file_name(), position, context.text()) {
            trace!(file = context.file_name(), "completion cache hit");
            return items;
        }

        let document = VirtualDocument::new(context);
        let virtual_position = to_virtual_position(position);
        let stylesheet = self.scss().parse_stylesheet(&document);

        let css_items = self
            .css()
            .do_complete(&document, virtual_position, &stylesheet)
            .items;
        let scss_items = self
            .scss()
            .do_complete(&document, virtual_position, &stylesheet)
            .items;

        let mut items = css_items;
        let css_count = items.len();
        items.extend(
            scss_items
                .into_iter()
                .filter(translate::is_scss_selector_function),
        );
        debug!(
            file = context.file_name(),
            css = css_count,
            scss = items.len() - css_count,
            "computed completions"
        );

        let items = Arc::new(items);
        cache.insert(
            context.file_name(),
            position,
            context.text(),
            Arc::clone(&items),
        );
        items
    }

    pub fn get_completions_at_position(
        &self,
        context: &dyn TemplateContext,
        position: Position,
    ) -> CompletionInfo {
        let items = self.completion_items(context, position);
        translate::translate_completion_info(&items)
    }

    pub fn get_completion_entry_details(
        &self,
        context: &dyn TemplateContext,
        position: Position,
        name: &str,
    ) -> CompletionEntryDetails {
        let items = self.completion_items(context, position);
        items
            .iter()
            .find(|item| item.label == name)
            .map(translate::translate_completion_details)
            .unwrap_or_else(|| translate::unknown_completion_details(name))
    }

    pub fn get_quick_info_at_position(
        &self,
        context: &dyn TemplateContext,
        position: Position,
    ) -> Option<QuickInfo> {
        let document = VirtualDocument::new(context);
        let engine = self.scss();
        let stylesheet = engine.parse_stylesheet(&document);
        let hover = engine.do_hover(&document, to_virtual_position(position), &stylesheet)?;
        Some(translate::translate_hover(context, position, &hover))
    }

    pub fn get_semantic_diagnostics(
        &self,
        context: &dyn TemplateContext,
    ) -> Vec<host::Diagnostic> {
        if !self.settings.validate() {
            return Vec::new();
        }

        let document = VirtualDocument::new(context);
        let engine = self.scss();
        let stylesheet = engine.parse_stylesheet(&document);
        engine
            .do_validation(&document, &stylesheet)
            .iter()
            .filter_map(|d| translate::translate_diagnostic(&document, d))
            .collect()
    }

    pub fn get_outlining_spans(&self, context: &dyn TemplateContext) -> Vec<OutliningSpan> {
        let document = VirtualDocument::new(context);
        self.css()
            .get_folding_ranges(&document)
            .iter()
            .filter_map(|r| translate::translate_folding_range(&document, r))
            .collect()
    }

    /// Quick fixes for diagnostics overlapping the template offsets
    /// `start..end`.
    pub fn get_code_fixes_at_position(
        &self,
        context: &dyn TemplateContext,
        start: usize,
        end: usize,
    ) -> Vec<CodeFixAction> {
        let document = VirtualDocument::new(context);
        let range = Range::new(
            to_virtual_position(context.to_position(start)),
            to_virtual_position(context.to_position(end)),
        );

        let engine = self.scss();
        let stylesheet = engine.parse_stylesheet(&document);
        let diagnostics: Vec<Diagnostic> = engine
            .do_validation(&document, &stylesheet)
            .into_iter()
            .filter(|d| overlaps(d.range, range))
            .collect();
        if diagnostics.is_empty() {
            return Vec::new();
        }

        let actions = engine.do_code_actions(&document, range, &diagnostics, &stylesheet);
        translate::translate_code_actions(context, &actions)
    }

    /// Error codes [`get_code_fixes_at_position`](Self::get_code_fixes_at_position)
    /// can fix.
    pub fn get_supported_code_fixes(&self) -> Vec<i32> {
        vec![DEFAULT_ERROR_CODE]
    }
}

fn overlaps(a: Range, b: Range) -> bool {
    a.start <= b.end && b.start <= a.end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::Stylesheet;
    use tower_lsp::lsp_types::{
        CodeAction, CompletionItemKind, CompletionList, DiagnosticSeverity, FoldingRange, Hover,
    };

    /// Engine with fixed answers, independent of the document.
    struct ScriptedEngine {
        flavor: Flavor,
    }

    fn item(label: &str, kind: CompletionItemKind) -> CompletionItem {
        CompletionItem {
            label: label.to_string(),
            kind: Some(kind),
            ..Default::default()
        }
    }

    fn error_at(start: (u32, u32), end: (u32, u32)) -> Diagnostic {
        Diagnostic {
            range: Range::new(Position::new(start.0, start.1), Position::new(end.0, end.1)),
            severity: Some(DiagnosticSeverity::ERROR),
            message: "bad".to_string(),
            ..Default::default()
        }
    }

    impl StylesheetEngine for ScriptedEngine {
        fn new(flavor: Flavor, _settings: &Settings) -> Self {
            Self { flavor }
        }

        fn parse_stylesheet(&self, _document: &dyn TextDocument) -> Stylesheet {
            Stylesheet::default()
        }

        fn do_complete(
            &self,
            _document: &dyn TextDocument,
            _position: Position,
            _stylesheet: &Stylesheet,
        ) -> CompletionList {
            let items = match self.flavor {
                Flavor::Css => vec![item("color", CompletionItemKind::PROPERTY)],
                Flavor::Scss => vec![
                    item("color", CompletionItemKind::PROPERTY),
                    item(":hover", CompletionItemKind::FUNCTION),
                    item("darken", CompletionItemKind::FUNCTION),
                    item("@mixin", CompletionItemKind::KEYWORD),
                ],
            };
            CompletionList {
                is_incomplete: false,
                items,
            }
        }

        fn do_hover(
            &self,
            _document: &dyn TextDocument,
            _position: Position,
            _stylesheet: &Stylesheet,
        ) -> Option<Hover> {
            None
        }

        fn do_validation(
            &self,
            _document: &dyn TextDocument,
            _stylesheet: &Stylesheet,
        ) -> Vec<Diagnostic> {
            vec![
                error_at((0, 0), (0, 6)),
                error_at((1, 0), (1, 4)),
                error_at((9, 0), (9, 1)),
            ]
        }

        fn get_folding_ranges(&self, _document: &dyn TextDocument) -> Vec<FoldingRange> {
            Vec::new()
        }

        fn do_code_actions(
            &self,
            _document: &dyn TextDocument,
            _range: Range,
            _diagnostics: &[Diagnostic],
            _stylesheet: &Stylesheet,
        ) -> Vec<CodeAction> {
            Vec::new()
        }
    }

    fn scripted() -> StyledTemplateService<ScriptedEngine> {
        StyledTemplateService::with_engine(Settings::default())
    }

    fn builtin() -> StyledTemplateService {
        StyledTemplateService::new(Settings::default())
    }

    #[test]
    fn completions_keep_css_items_then_scss_selector_functions() {
        let service = scripted();
        let template = TemplateSource::new("a.ts", "color: red;");

        let info = service.get_completions_at_position(&template, Position::new(0, 0));
        let names: Vec<&str> = info.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["color", ":hover"]);
        assert!(!info.is_global_completion);
        assert!(!info.is_member_completion);
        assert!(!info.is_new_identifier_location);
    }

    #[test]
    fn completion_cache_is_reused_for_identical_queries() {
        let service = builtin();
        let template = TemplateSource::new("a.ts", "color: red;\n");
        let position = Position::new(1, 0);

        let first = service.completion_items(&template, position);
        let second = service.completion_items(&template, position);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn completion_cache_misses_on_any_key_change() {
        let service = builtin();
        let template = TemplateSource::new("a.ts", "color: red;\n");
        let position = Position::new(1, 0);
        let first = service.completion_items(&template, position);

        let other_file = TemplateSource::new("b.ts", "color: red;\n");
        let after_file = service.completion_items(&other_file, position);
        assert!(!Arc::ptr_eq(&first, &after_file));

        let after_position = service.completion_items(&other_file, Position::new(0, 0));
        assert!(!Arc::ptr_eq(&after_file, &after_position));

        let edited = TemplateSource::new("b.ts", "color: blue;\n");
        let after_text = service.completion_items(&edited, Position::new(0, 0));
        assert!(!Arc::ptr_eq(&after_position, &after_text));
    }

    #[test]
    fn configure_clears_cached_completions() {
        let mut service = builtin();
        let template = TemplateSource::new("a.ts", "color: red;\n");
        let position = Position::new(1, 0);
        let first = service.completion_items(&template, position);

        service.configure(Settings::default());
        assert!(service.lock_completions().is_empty());
        let second = service.completion_items(&template, position);
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn details_fall_back_to_unknown_record() {
        let service = scripted();
        let template = TemplateSource::new("a.ts", "");

        let known = service.get_completion_entry_details(&template, Position::new(0, 0), ":hover");
        assert_eq!(known.kind, host::ScriptElementKind::Function);

        let missing = service.get_completion_entry_details(&template, Position::new(0, 0), "nope");
        assert_eq!(missing.kind, host::ScriptElementKind::Unknown);
        assert_eq!(missing.display_parts, vec![host::SymbolDisplayPart::text("nope")]);
    }

    #[test]
    fn diagnostics_outside_the_template_are_dropped() {
        let service = scripted();
        let template = TemplateSource::new("a.ts", "colr: red;");

        let diagnostics = service.get_semantic_diagnostics(&template);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].start, 0);
        assert_eq!(diagnostics[0].length, 4);
        assert_eq!(diagnostics[0].code, DEFAULT_ERROR_CODE);
    }

    #[test]
    fn validation_can_be_disabled() {
        let settings = parse_settings("validate = false").unwrap();
        let service: StyledTemplateService<ScriptedEngine> =
            StyledTemplateService::with_engine(settings);
        let template = TemplateSource::new("a.ts", "colr: red;");

        assert!(service.get_semantic_diagnostics(&template).is_empty());
    }

    #[test]
    fn missing_hover_is_none() {
        let service = scripted();
        let template = TemplateSource::new("a.ts", "color: red;");
        assert!(service
            .get_quick_info_at_position(&template, Position::new(0, 1))
            .is_none());
    }

    #[test]
    fn code_fixes_need_an_overlapping_diagnostic() {
        let service = builtin();
        let template = TemplateSource::new("a.ts", "margin: 0;\ncolr: red;");

        assert!(service.get_code_fixes_at_position(&template, 0, 3).is_empty());
        let fixes = service.get_code_fixes_at_position(&template, 11, 15);
        assert!(fixes.iter().any(|f| f.description == "Rename to 'color'"));
    }

    #[test]
    fn supported_code_fixes() {
        assert_eq!(scripted().get_supported_code_fixes(), vec![9999]);
    }

    #[test]
    fn range_overlap_is_inclusive() {
        let a = Range::new(Position::new(1, 0), Position::new(1, 4));
        assert!(overlaps(a, Range::new(Position::new(1, 4), Position::new(1, 4))));
        assert!(!overlaps(a, Range::new(Position::new(1, 5), Position::new(1, 6))));
        assert!(overlaps(a, Range::new(Position::new(0, 0), Position::new(2, 0))));
    }
}
