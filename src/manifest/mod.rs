//! # Manifest Module
//!
//! Parses a Brewfile into ordered categories of selectable packages.
//!
//! ## Recognized Lines
//!
//! | Line | Meaning |
//! |------|---------|
//! | `# Some Heading` | starts a new category (see [`heading::normalize`]) |
//! | `brew "name"` | a formula entry |
//! | `cask "name"` | a cask entry |
//! | anything else | ignored (`tap`, `mas`, blank lines, ...) |
//!
//! Comments that are empty, read `Taps`, or start with `mas ` never open a
//! category. Entries that appear before any heading land in a `General`
//! category. Categories that end up with no entries are dropped, and the
//! surviving order is exactly the order of first appearance in the file.
//!
//! ```text
//! # Shells
//! brew "bash"          -> Shells: [formula bash, formula zsh]
//! brew "zsh"
//! # Browsers - Chrome
//! cask "google-chrome" -> Chrome: [cask google-chrome]
//! ```

pub mod descriptions;
pub mod heading;

pub use descriptions::Descriptions;
pub use heading::normalize as normalize_heading;

use crate::error::{PickerError, Result};
use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

/// Category used for entries declared before the first heading.
pub const DEFAULT_CATEGORY: &str = "General";

const COMMENT_MARKER: char = '#';
const TAPS_SENTINEL: &str = "Taps";
const APP_STORE_PREFIX: &str = "mas ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageKind {
    Formula,
    Cask,
}

impl PackageKind {
    /// The label written on stdout (`formula:git`, `cask:iterm2`).
    pub fn as_str(self) -> &'static str {
        match self {
            PackageKind::Formula => "formula",
            PackageKind::Cask => "cask",
        }
    }
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selectable Brewfile declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub name: String,
    pub kind: PackageKind,
    /// The declaration line exactly as it appeared in the Brewfile.
    pub line: String,
    pub description: Option<String>,
    pub installed: bool,
    selected: bool,
}

impl Entry {
    pub fn new(
        name: impl Into<String>,
        kind: PackageKind,
        line: impl Into<String>,
        description: Option<String>,
        installed: bool,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            line: line.into(),
            description,
            installed,
            selected: false,
        }
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Flip the selection. Installed entries are never selectable; returns
    /// whether anything changed.
    pub fn toggle(&mut self) -> bool {
        if self.installed {
            return false;
        }
        self.selected = !self.selected;
        true
    }

    /// Set the selection. No-op for installed entries.
    pub fn set_selected(&mut self, selected: bool) {
        if !self.installed {
            self.selected = selected;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub entries: Vec<Entry>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn selected_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_selected()).count()
    }
}

/// What the caller already has installed and which kinds to leave out.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub installed_formulae: HashSet<String>,
    pub installed_casks: HashSet<String>,
    pub skip_formulae: bool,
    pub skip_casks: bool,
}

impl ParseOptions {
    fn is_installed(&self, kind: PackageKind, name: &str) -> bool {
        match kind {
            PackageKind::Formula => self.installed_formulae.contains(name),
            PackageKind::Cask => self.installed_casks.contains(name),
        }
    }

    fn skips(&self, kind: PackageKind) -> bool {
        match kind {
            PackageKind::Formula => self.skip_formulae,
            PackageKind::Cask => self.skip_casks,
        }
    }
}

/// Split a comma-separated name list, trimming items and dropping empties.
pub fn parse_name_list(list: &str) -> HashSet<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

enum LineKind<'a> {
    Heading(String),
    Declaration(PackageKind, &'a str),
    Ignored,
}

static FORMULA_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^brew "([^"]+)""#).expect("formula pattern compiles"));
static CASK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^cask "([^"]+)""#).expect("cask pattern compiles"));

fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if let Some(comment) = trimmed.strip_prefix(COMMENT_MARKER) {
        let text = comment.trim();
        if text.is_empty() || text == TAPS_SENTINEL || text.starts_with(APP_STORE_PREFIX) {
            return LineKind::Ignored;
        }
        let name = heading::normalize(text);
        if name.is_empty() {
            return LineKind::Ignored;
        }
        return LineKind::Heading(name);
    }

    for (kind, pattern) in [
        (PackageKind::Formula, &*FORMULA_PATTERN),
        (PackageKind::Cask, &*CASK_PATTERN),
    ] {
        if let Some(name) = pattern.captures(line).and_then(|cap| cap.get(1)) {
            return LineKind::Declaration(kind, name.as_str());
        }
    }

    LineKind::Ignored
}

fn scan<I>(
    lines: I,
    options: &ParseOptions,
    descriptions: &Descriptions,
) -> io::Result<Vec<Category>>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let mut categories: Vec<Category> = Vec::new();
    let mut current: Option<usize> = None;

    for line in lines {
        let line = line?;

        match classify(&line) {
            LineKind::Heading(name) => {
                categories.push(Category::new(name));
                current = Some(categories.len() - 1);
            }
            LineKind::Declaration(kind, name) => {
                if options.skips(kind) {
                    continue;
                }
                let idx = match current {
                    Some(idx) => idx,
                    None => {
                        categories.push(Category::new(DEFAULT_CATEGORY));
                        let idx = categories.len() - 1;
                        current = Some(idx);
                        idx
                    }
                };
                let entry = Entry::new(
                    name,
                    kind,
                    line.as_str(),
                    descriptions.get(name).map(str::to_string),
                    options.is_installed(kind, name),
                );
                categories[idx].entries.push(entry);
            }
            LineKind::Ignored => {}
        }
    }

    categories.retain(|c| !c.entries.is_empty());
    Ok(categories)
}

/// Parse Brewfile content that is already in memory.
pub fn parse_manifest_from_content(
    content: &str,
    options: &ParseOptions,
    descriptions: &Descriptions,
) -> Result<Vec<Category>> {
    let lines = content.lines().map(|line| Ok(line.to_string()));
    scan(lines, options, descriptions).map_err(|e| PickerError::io("<memory>", e))
}

/// Parse the Brewfile at `path`. The result may be empty; see
/// [`load_manifest`] for the variant that treats that as an error.
pub fn parse_manifest(
    path: &Path,
    options: &ParseOptions,
    descriptions: &Descriptions,
) -> Result<Vec<Category>> {
    let file = File::open(path).map_err(|e| PickerError::io(path, e))?;
    scan(BufReader::new(file).lines(), options, descriptions)
        .map_err(|e| PickerError::io(path, e))
}

/// Parse the Brewfile at `path`, failing when nothing selectable remains.
pub fn load_manifest(
    path: &Path,
    options: &ParseOptions,
    descriptions: &Descriptions,
) -> Result<Vec<Category>> {
    let categories = parse_manifest(path, options, descriptions)?;
    if categories.is_empty() {
        return Err(PickerError::empty_manifest(path));
    }

    log::debug!(
        "parsed {} categories, {} entries from {}",
        categories.len(),
        categories.iter().map(|c| c.entries.len()).sum::<usize>(),
        path.display()
    );
    Ok(categories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parse(content: &str) -> Vec<Category> {
        parse_manifest_from_content(content, &ParseOptions::default(), &Descriptions::default())
            .expect("parse")
    }

    fn names(category: &Category) -> Vec<&str> {
        category.entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_single_heading_two_formulae() {
        let categories = parse("# Shells\nbrew \"bash\"\nbrew \"zsh\"\n");
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Shells");
        assert_eq!(names(&categories[0]), vec!["bash", "zsh"]);
        for entry in &categories[0].entries {
            assert_eq!(entry.kind, PackageKind::Formula);
            assert!(!entry.is_selected());
            assert!(!entry.installed);
        }
    }

    #[test]
    fn test_entries_before_heading_go_to_general() {
        let categories = parse("brew \"git\"\n# Tools\nbrew \"wget\"\n");
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, DEFAULT_CATEGORY);
        assert_eq!(names(&categories[0]), vec!["git"]);
        assert_eq!(categories[1].name, "Tools");
    }

    #[test]
    fn test_empty_categories_dropped_in_order() {
        let content = r#"# Empty One
# Shells
brew "bash"
# Empty Two
# Casks
cask "iterm2"
# Trailing
"#;
        let categories = parse(content);
        let cat_names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(cat_names, vec!["Shells", "Applications"]);
        assert!(categories.iter().all(|c| !c.entries.is_empty()));
    }

    #[test]
    fn test_skip_sentinels_do_not_open_category() {
        let content = r#"# Shells
brew "bash"
#
# Taps
tap "homebrew/bundle"
# mas "Xcode", id: 497799835
brew "zsh"
"#;
        let categories = parse(content);
        assert_eq!(categories.len(), 1);
        assert_eq!(names(&categories[0]), vec!["bash", "zsh"]);
    }

    #[test]
    fn test_casks_and_formulae_mixed() {
        let categories = parse("# Stuff\nbrew \"git\"\ncask \"firefox\"\n");
        let kinds: Vec<PackageKind> = categories[0].entries.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![PackageKind::Formula, PackageKind::Cask]);
    }

    #[test]
    fn test_declaration_must_start_line() {
        let categories = parse("# Tools\n  brew \"indented\"\nbrew \"git\", args: [\"HEAD\"]\n");
        assert_eq!(names(&categories[0]), vec!["git"]);
        assert_eq!(categories[0].entries[0].line, "brew \"git\", args: [\"HEAD\"]");
    }

    #[test]
    fn test_headings_are_normalized() {
        let categories =
            parse("# Browsers - Chrome\ncask \"google-chrome\"\n# Media / Editing\ncask \"vlc\"\n");
        assert_eq!(categories[0].name, "Chrome");
        assert_eq!(categories[1].name, "Media");
    }

    #[test]
    fn test_installed_sets_respected_per_kind() {
        let options = ParseOptions {
            installed_formulae: parse_name_list("git"),
            installed_casks: parse_name_list("wget"),
            ..Default::default()
        };
        let categories = parse_manifest_from_content(
            "# Tools\nbrew \"git\"\nbrew \"wget\"\ncask \"git\"\n",
            &options,
            &Descriptions::default(),
        )
        .expect("parse");
        let installed: Vec<bool> = categories[0].entries.iter().map(|e| e.installed).collect();
        // "wget" is only installed as a cask, "git" only as a formula.
        assert_eq!(installed, vec![true, false, false]);
    }

    #[test]
    fn test_skip_formulae() {
        let options = ParseOptions {
            skip_formulae: true,
            ..Default::default()
        };
        let categories = parse_manifest_from_content(
            "brew \"git\"\n# Apps\ncask \"iterm2\"\nbrew \"wget\"\n",
            &options,
            &Descriptions::default(),
        )
        .expect("parse");
        assert_eq!(categories.len(), 1);
        assert!(categories
            .iter()
            .flat_map(|c| &c.entries)
            .all(|e| e.kind == PackageKind::Cask));
    }

    #[test]
    fn test_skip_casks() {
        let options = ParseOptions {
            skip_casks: true,
            ..Default::default()
        };
        let categories = parse_manifest_from_content(
            "# Apps\ncask \"iterm2\"\n# Tools\nbrew \"wget\"\n",
            &options,
            &Descriptions::default(),
        )
        .expect("parse");
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Tools");
    }

    #[test]
    fn test_descriptions_attached() {
        let descriptions = Descriptions::from_pairs([("bash", "Bourne again")]);
        let categories = parse_manifest_from_content(
            "brew \"bash\"\nbrew \"fish\"\n",
            &ParseOptions::default(),
            &descriptions,
        )
        .expect("parse");
        assert_eq!(
            categories[0].entries[0].description.as_deref(),
            Some("Bourne again")
        );
        assert_eq!(categories[0].entries[1].description, None);
    }

    #[test]
    fn test_toggle_rejected_for_installed() {
        let mut entry = Entry::new("git", PackageKind::Formula, "brew \"git\"", None, true);
        for _ in 0..3 {
            assert!(!entry.toggle());
            assert!(!entry.is_selected());
        }
        entry.set_selected(true);
        assert!(!entry.is_selected());
    }

    #[test]
    fn test_parse_name_list() {
        let names = parse_name_list(" git, wget ,,bat,");
        assert_eq!(names.len(), 3);
        assert!(names.contains("git"));
        assert!(names.contains("wget"));
        assert!(names.contains("bat"));
        assert!(parse_name_list("").is_empty());
    }

    #[test]
    fn test_parse_manifest_file_not_found() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("Brewfile");
        let result = parse_manifest(&path, &ParseOptions::default(), &Descriptions::default());
        assert!(matches!(result, Err(PickerError::Io { .. })));
    }

    #[test]
    fn test_load_manifest_empty_is_error() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("Brewfile");
        fs::write(&path, "# Only comments\ntap \"homebrew/cask\"\n").expect("write");

        let result = load_manifest(&path, &ParseOptions::default(), &Descriptions::default());
        assert!(matches!(result, Err(PickerError::EmptyManifest { .. })));
    }

    #[test]
    fn test_load_manifest_reads_file() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("Brewfile");
        fs::write(&path, "# Shells\r\nbrew \"bash\"\r\n").expect("write");

        let categories = load_manifest(&path, &ParseOptions::default(), &Descriptions::builtin())
            .expect("load");
        assert_eq!(categories[0].name, "Shells");
        assert_eq!(categories[0].entries[0].line, "brew \"bash\"");
        assert!(categories[0].entries[0].description.is_some());
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("Brewfile");
        fs::write(&path, b"brew \"ok\"\n\xff\xfe\n").expect("write");

        let result = parse_manifest(&path, &ParseOptions::default(), &Descriptions::default());
        assert!(matches!(result, Err(PickerError::Io { .. })));
    }

    #[test]
    fn test_classify_lines() {
        assert!(matches!(
            classify(r#"brew "ripgrep", args: ["with-pcre2"]"#),
            LineKind::Declaration(PackageKind::Formula, "ripgrep")
        ));
        assert!(matches!(
            classify(r#"cask "iterm2""#),
            LineKind::Declaration(PackageKind::Cask, "iterm2")
        ));
        assert!(matches!(classify("  # Shells  "), LineKind::Heading(ref name) if name == "Shells"));
        assert!(matches!(classify("# mas \"Xcode\""), LineKind::Ignored));
        assert!(matches!(classify(r#"tap "homebrew/bundle""#), LineKind::Ignored));
        assert!(matches!(classify(r#"brew """#), LineKind::Ignored));
    }
}
