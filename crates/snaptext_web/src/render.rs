use snaptext_core::AppViewModel;

use crate::DomCommand;

/// Emits the commands that take the page from `previous` to `next`.
///
/// With no previous view every part of the page is written.
pub fn render(previous: Option<&AppViewModel>, next: &AppViewModel) -> Vec<DomCommand> {
    let mut cmds = Vec::new();

    if previous.map_or(true, |prev| prev.markers != next.markers) {
        cmds.push(DomCommand::SetTextMarkers(next.markers));
    }
    if previous.map_or(true, |prev| prev.text != next.text) {
        cmds.push(DomCommand::SetText(next.text.clone()));
    }
    if previous.map_or(true, |prev| prev.table != next.table) {
        cmds.push(DomCommand::ReplaceTable(next.table.clone()));
    }
    if previous.map_or(true, |prev| prev.preview != next.preview) {
        cmds.push(DomCommand::SetPreview(next.preview.clone()));
    }
    if previous.map_or(true, |prev| prev.controls_enabled != next.controls_enabled) {
        cmds.push(DomCommand::SetControlsEnabled(next.controls_enabled));
    }

    cmds
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::DomCommand;
    use snaptext_core::{AppViewModel, PlaceholderKind, TableView, TextMarkers};

    fn loading_view() -> AppViewModel {
        AppViewModel {
            text: "Processing image... Please wait.".to_string(),
            markers: TextMarkers {
                loading: true,
                error: false,
            },
            table: TableView::Placeholder(PlaceholderKind::Processing),
            controls_enabled: false,
            preview: None,
        }
    }

    #[test]
    fn first_render_writes_everything() {
        let cmds = render(None, &AppViewModel::default());
        assert_eq!(
            cmds,
            vec![
                DomCommand::SetTextMarkers(TextMarkers::default()),
                DomCommand::SetText(String::new()),
                DomCommand::ReplaceTable(TableView::Empty),
                DomCommand::SetPreview(None),
                DomCommand::SetControlsEnabled(true),
            ]
        );
    }

    #[test]
    fn unchanged_view_renders_nothing() {
        let view = loading_view();
        assert!(render(Some(&view), &view).is_empty());
    }

    #[test]
    fn preview_arrival_only_touches_preview() {
        let before = loading_view();
        let after = AppViewModel {
            preview: Some("data:image/png;base64,AA==".to_string()),
            ..before.clone()
        };
        assert_eq!(
            render(Some(&before), &after),
            vec![DomCommand::SetPreview(Some(
                "data:image/png;base64,AA==".to_string()
            ))]
        );
    }
}
