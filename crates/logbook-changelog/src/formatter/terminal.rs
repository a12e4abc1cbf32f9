//! Terminal changelog formatter

use console::Style;
use tracing::{debug, instrument};

use super::{title_case, version_heading, ChangelogFormatter, RenderOptions};
use crate::types::{Changelog, Version};

const DEFAULT_MAX_WIDTH: usize = 80;
const ENTRY_PREFIX: &str = "    - ";
const CONTINUATION_INDENT: &str = "      ";

/// Icon and colour for one category
#[derive(Debug, Clone)]
pub struct CategoryStyle {
    pub icon: String,
    pub style: Style,
}

impl CategoryStyle {
    /// Create a new category style
    pub fn new(icon: impl Into<String>, style: Style) -> Self {
        Self {
            icon: icon.into(),
            style,
        }
    }
}

/// Lookup table from category name to [`CategoryStyle`]
#[derive(Debug, Clone)]
pub struct CategoryStyles {
    styles: Vec<(String, CategoryStyle)>,
    fallback: CategoryStyle,
}

impl CategoryStyles {
    /// An empty table; every category gets the fallback style
    pub fn empty() -> Self {
        Self {
            styles: Vec::new(),
            fallback: CategoryStyle::new("*", Style::new()),
        }
    }

    /// Set the style of a category
    pub fn with_style(mut self, category: impl Into<String>, style: CategoryStyle) -> Self {
        let category = category.into();
        self.styles.retain(|(name, _)| *name != category);
        self.styles.push((category, style));
        self
    }

    /// Style for a category, or the fallback for unknown names
    pub fn get(&self, category: &str) -> &CategoryStyle {
        self.styles
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, style)| style)
            .unwrap_or(&self.fallback)
    }
}

impl Default for CategoryStyles {
    fn default() -> Self {
        Self::empty()
            .with_style("added", CategoryStyle::new("+", Style::new().green()))
            .with_style("changed", CategoryStyle::new("~", Style::new().yellow()))
            .with_style("deprecated", CategoryStyle::new("!", Style::new().yellow()))
            .with_style("removed", CategoryStyle::new("-", Style::new().red()))
            .with_style("fixed", CategoryStyle::new("x", Style::new().cyan()))
            .with_style("security", CategoryStyle::new("🔒", Style::new().magenta()))
    }
}

/// Human-oriented changelog output for the terminal
#[derive(Debug, Clone)]
pub struct TerminalFormatter {
    styles: CategoryStyles,
    plain: bool,
    max_width: usize,
}

impl TerminalFormatter {
    /// Create a formatter with the default category styles
    pub fn new() -> Self {
        Self {
            styles: CategoryStyles::default(),
            plain: false,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }

    /// Disable colours and bold text
    pub fn with_plain(mut self, plain: bool) -> Self {
        self.plain = plain;
        self
    }

    /// Set the line width entries are wrapped to; zero means the default
    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = if max_width == 0 {
            DEFAULT_MAX_WIDTH
        } else {
            max_width
        };
        self
    }

    fn paint(&self, style: &Style, text: &str) -> String {
        if self.plain {
            text.to_string()
        } else {
            style.apply_to(text).to_string()
        }
    }
}

impl Default for TerminalFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogFormatter for TerminalFormatter {
    #[instrument(skip_all, fields(project = %changelog.project, plain = self.plain))]
    fn format(&self, changelog: &Changelog, options: &RenderOptions) -> String {
        let bold = Style::new().bold();
        let mut output = format!(
            "{}\n\n",
            self.paint(&bold, &format!("{} Changelog", changelog.project))
        );

        let sections: Vec<String> = changelog
            .versions
            .iter()
            .map(|v| self.format_version(v, options))
            .collect();
        output.push_str(&sections.join("\n"));

        debug!(output_len = output.len(), "terminal changelog formatted");
        output
    }

    fn format_version(&self, version: &Version, options: &RenderOptions) -> String {
        let bold = Style::new().bold();
        let mut output = format!("{}\n", self.paint(&bold, &version_heading(version)));

        let width = self.max_width.saturating_sub(ENTRY_PREFIX.len());
        for category in version.changes(options.scope()).categories() {
            if category.entries.is_empty() {
                continue;
            }

            let style = self.styles.get(&category.name);
            let header = format!("{} {}", style.icon, title_case(&category.name));
            output.push_str(&format!("  {}\n", self.paint(&style.style, &header)));

            for entry in &category.entries {
                output.push_str(ENTRY_PREFIX);
                output.push_str(&wrap_text(entry, width, CONTINUATION_INDENT));
                output.push('\n');
            }
        }

        output
    }

    fn extension(&self) -> &'static str {
        "txt"
    }
}

/// Wrap text at word boundaries, indenting continuation lines
pub fn wrap_text(text: &str, max_width: usize, indent: &str) -> String {
    if max_width == 0 || text.chars().count() <= max_width {
        return text.to_string();
    }

    let mut words = text.split_whitespace();
    let Some(first) = words.next() else {
        return text.to_string();
    };

    let mut lines = Vec::new();
    let mut current = first.to_string();
    for word in words {
        if current.chars().count() + 1 + word.chars().count() > max_width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        } else {
            current.push(' ');
            current.push_str(word);
        }
    }
    lines.push(current);

    lines.join(&format!("\n{indent}"))
}
