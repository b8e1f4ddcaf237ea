use crate::artifacts::changelog::clusterer::Clusters;
use colored::Colorize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Highlight window labels with ANSI colours
    pub color: bool,
}

/// Lay out clusters as aligned lines
///
/// The first line of a window starts with its label, later lines with blank
/// padding of the same width. The width is that of the longest label plus one
/// space, counted in characters. Empty windows produce no lines at all.
/// A multi-line commit message continues on padded lines of its own.
pub fn render_lines(clusters: &Clusters, opts: &RenderOptions) -> Vec<String> {
    let width = clusters
        .order()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0);
    let blank = " ".repeat(width);

    let mut lines = Vec::new();
    for window in clusters.windows() {
        for (commit_index, commit) in window.commits().iter().enumerate() {
            // a message with no text still occupies its line
            let text_lines = if commit.is_empty() {
                vec![""]
            } else {
                commit.lines().collect::<Vec<_>>()
            };

            for (line_index, text) in text_lines.into_iter().enumerate() {
                let prefix = if commit_index == 0 && line_index == 0 {
                    let label = format!("{:<width$}", window.label());
                    if opts.color {
                        label.yellow().bold().to_string()
                    } else {
                        label
                    }
                } else {
                    blank.clone()
                };

                lines.push(format!("{} {}", prefix, text));
            }
        }
    }

    lines
}

/// All rendered lines joined with newlines, as handed to the pager
pub fn render(clusters: &Clusters, opts: &RenderOptions) -> String {
    render_lines(clusters, opts).join("\n")
}
