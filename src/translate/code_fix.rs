//! Code action translation.

use tower_lsp::lsp_types::CodeAction;

use crate::document::TemplateContext;
use crate::host::{CodeFixAction, FileTextChanges, TextChange};

use super::range_to_span;

/// Fix name reported for every translated code action.
pub const FIX_NAME: &str = "styled-css";

/// Translate engine code actions into host code fixes.
///
/// All edits are assumed to target the virtual document and are placed in the
/// template's file. Actions without edits are dropped.
pub fn translate_code_actions(
    context: &dyn TemplateContext,
    actions: &[CodeAction],
) -> Vec<CodeFixAction> {
    actions
        .iter()
        .filter_map(|action| {
            let changes = action.edit.as_ref()?.changes.as_ref()?;
            let text_changes: Vec<TextChange> = changes
                .values()
                .flatten()
                .map(|edit| TextChange {
                    span: range_to_span(context, edit.range),
                    new_text: edit.new_text.clone(),
                })
                .collect();
            if text_changes.is_empty() {
                return None;
            }

            Some(CodeFixAction {
                fix_name: FIX_NAME.to_string(),
                description: action.title.clone(),
                changes: vec![FileTextChanges {
                    file_name: context.file_name().to_string(),
                    text_changes,
                }],
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TemplateSource;
    use crate::host::TextSpan;
    use std::collections::HashMap;
    use tower_lsp::lsp_types::{Position, Range, TextEdit, Url, WorkspaceEdit};

    #[test]
    fn maps_edits_into_template() {
        let template = TemplateSource::new("button.ts", "margin: 0;\ncolr: red;");
        let uri = Url::parse("untitled:embedded.scss").unwrap();
        let edit = TextEdit::new(
            Range::new(Position::new(2, 0), Position::new(2, 4)),
            "color".to_string(),
        );
        let actions = vec![
            CodeAction {
                title: "Rename to 'color'".to_string(),
                edit: Some(WorkspaceEdit::new(HashMap::from([(uri, vec![edit])]))),
                ..Default::default()
            },
            CodeAction {
                title: "no edit".to_string(),
                ..Default::default()
            },
        ];

        let fixes = translate_code_actions(&template, &actions);
        assert_eq!(fixes.len(), 1);
        assert_eq!(fixes[0].description, "Rename to 'color'");
        assert_eq!(fixes[0].changes[0].file_name, "button.ts");
        assert_eq!(
            fixes[0].changes[0].text_changes,
            vec![TextChange {
                span: TextSpan::new(11, 4),
                new_text: "color".to_string(),
            }]
        );
    }
}
