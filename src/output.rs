//! Selection output consumed by the calling script: one `kind:name` line per
//! selected package, in manifest order.

use std::io::{self, Write};

use crate::manifest::Entry;
use crate::ui::App;

pub fn selection_line(entry: &Entry) -> String {
    format!("{}:{}", entry.kind, entry.name)
}

pub fn selection_lines(app: &App) -> Vec<String> {
    app.selected_entries().map(selection_line).collect()
}

/// Write the selection to `out`. Nothing is written when nothing is selected.
pub fn write_selection<W: Write>(out: &mut W, app: &App) -> io::Result<()> {
    for line in selection_lines(app) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{Category, PackageKind};
    use crate::ui::app::Action;

    fn test_app() -> App {
        App::new(vec![
            Category {
                name: "Tools".to_string(),
                entries: vec![
                    Entry::new("git", PackageKind::Formula, "brew \"git\"", None, false),
                    Entry::new("wget", PackageKind::Formula, "brew \"wget\"", None, false),
                ],
            },
            Category {
                name: "Applications".to_string(),
                entries: vec![Entry::new(
                    "iterm2",
                    PackageKind::Cask,
                    "cask \"iterm2\"",
                    None,
                    false,
                )],
            },
        ])
    }

    #[test]
    fn test_lines_follow_manifest_order() {
        let mut app = test_app();
        // Select the cask first, then a formula from the earlier category.
        app.dispatch(Action::MoveDown);
        app.dispatch(Action::FocusPackages);
        app.dispatch(Action::ToggleEntry);
        app.dispatch(Action::FocusCategories);
        app.dispatch(Action::MoveUp);
        app.dispatch(Action::FocusPackages);
        app.dispatch(Action::MoveDown);
        app.dispatch(Action::ToggleEntry);

        assert_eq!(selection_lines(&app), vec!["formula:wget", "cask:iterm2"]);
    }

    #[test]
    fn test_write_selection() {
        let mut app = test_app();
        app.dispatch(Action::FocusPackages);
        app.dispatch(Action::ToggleEntry);

        let mut out = Vec::new();
        write_selection(&mut out, &app).expect("write");
        assert_eq!(String::from_utf8(out).expect("utf8"), "formula:git\n");
    }

    #[test]
    fn test_empty_selection_writes_nothing() {
        let mut out = Vec::new();
        write_selection(&mut out, &test_app()).expect("write");
        assert!(out.is_empty());
    }
}
