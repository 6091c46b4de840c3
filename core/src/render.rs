//! Plain-text layout of the help screen.
//!
//! Layout is column based: name, alias (or value type) and description.
//! The first two columns are padded to the longest registered name plus
//! [`COLUMN_PAD`]; columns are joined by [`GUTTER`].

use crate::config::HelpConfig;

/// Extra width added to the longest name for the padded columns.
pub const COLUMN_PAD: usize = 4;
/// Separator between columns.
pub const GUTTER: &str = "  ";
/// Marker printed before each usage line.
pub const USAGE_MARKER: &str = "[?] ";

/// One table row.
#[derive(Debug, Clone, Default)]
pub(crate) struct Row<'a> {
    pub name: &'a str,
    pub second: &'a str,
    pub about: Vec<&'a str>,
    pub usage: Vec<&'a str>,
}

/// A titled table: three header labels and its rows.
#[derive(Debug, Clone)]
pub(crate) struct Section<'a> {
    pub headers: [&'static str; 3],
    pub rows: Vec<Row<'a>>,
}

/// Left-aligns `input` in a field of `max_name_len + COLUMN_PAD` chars.
///
/// Longer input is returned unchanged.
pub(crate) fn pad(input: &str, max_name_len: usize) -> String {
    let width = max_name_len + COLUMN_PAD;
    format!("{input:<width$}")
}

/// Assembles the full help text.
pub(crate) fn help_text(
    config: &HelpConfig,
    message: Option<&str>,
    sections: &[Section<'_>],
    max_name_len: usize,
) -> String {
    let margin = config.space.as_str();
    let mut lines: Vec<String> = Vec::new();

    if let Some(message) = message {
        lines.extend(message.lines().map(|line| format!("{margin}{line}")));
    }

    if !config.prefix.is_empty() {
        lines.push(String::new());
        lines.extend(config.prefix.iter().map(|p| format!("{margin}{p}")));
        lines.push(String::new());
    }

    lines.push(format!("{margin}{}", config.name));
    lines.push(format!("{margin}{}", config.info));
    lines.push(format!("{margin}v{}", config.version));
    lines.push(String::new());
    lines.push(format!("{margin}{}", config.usage));

    for section in sections.iter().filter(|s| !s.rows.is_empty()) {
        lines.push(String::new());
        render_section(&mut lines, margin, section, max_name_len);
    }

    lines.push(String::new());

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn render_section(lines: &mut Vec<String>, margin: &str, section: &Section<'_>, max: usize) {
    let [first, second, third] = section.headers;
    lines.push(format!(
        "{margin}{}{GUTTER}{}{GUTTER}{third}",
        pad(first, max),
        pad(second, max)
    ));

    let indent = format!("{margin}{}{GUTTER}{}{GUTTER}", pad("", max), pad("", max));

    for row in &section.rows {
        let mut about = row.about.iter();
        let head = about.next().copied().unwrap_or_default();
        lines.push(format!(
            "{margin}{}{GUTTER}{}{GUTTER}{head}",
            pad(row.name, max),
            pad(row.second, max)
        ));
        lines.extend(about.map(|line| format!("{indent}{line}")));
        lines.extend(
            row.usage
                .iter()
                .map(|line| format!("{indent}{USAGE_MARKER}{line}")),
        );
    }
}
