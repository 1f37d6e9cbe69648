//! Box-drawing primitives for the graph renderer

use unicode_width::UnicodeWidthStr;

/// A rectangular block of text, every line padded to the same width.
#[derive(Debug, Clone)]
pub struct TextBlock {
    pub lines: Vec<String>,
    pub width: usize,
}

impl TextBlock {
    /// Builds a block from raw lines, padding them to the widest one.
    pub fn from_lines(lines: Vec<String>) -> Self {
        let width = lines.iter().map(|l| l.width()).max().unwrap_or(0);
        let lines = lines.into_iter().map(|l| pad_to(&l, width)).collect();
        Self { lines, width }
    }

    /// Wraps content lines in a rounded border with one space of padding.
    pub fn boxed(content: &[String]) -> Self {
        let inner = content.iter().map(|l| l.width()).max().unwrap_or(0);
        let mut lines = Vec::with_capacity(content.len() + 2);
        lines.push(format!("╭{}╮", "─".repeat(inner + 2)));
        for line in content {
            lines.push(format!("│ {} │", pad_to(line, inner)));
        }
        lines.push(format!("╰{}╯", "─".repeat(inner + 2)));
        Self {
            width: inner + 4,
            lines,
        }
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn render(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.trim_end())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn pad_to(line: &str, width: usize) -> String {
    let mut padded = line.to_owned();
    let current = line.width();
    if current < width {
        padded.push_str(&" ".repeat(width - current));
    }
    padded
}

/// Stacks blocks top-to-bottom, left-aligned.
pub fn stack_vertical(blocks: &[TextBlock]) -> TextBlock {
    let width = blocks.iter().map(|b| b.width).max().unwrap_or(0);
    let mut lines = Vec::new();
    for block in blocks {
        for line in &block.lines {
            lines.push(pad_to(line, width));
        }
    }
    TextBlock { lines, width }
}

/// Joins blocks left-to-right, each vertically centered, with `connector`
/// between every pair on the middle line.
pub fn join_horizontal(blocks: &[TextBlock], connector: &str) -> TextBlock {
    let height = blocks.iter().map(TextBlock::height).max().unwrap_or(0);
    let connector_width = connector.width();
    let mid = height.saturating_sub(1) / 2;

    let mut lines = vec![String::new(); height];
    for (i, block) in blocks.iter().enumerate() {
        let top = (height - block.height()) / 2;
        if i > 0 {
            for (row, line) in lines.iter_mut().enumerate() {
                if row == mid {
                    line.push_str(connector);
                } else {
                    line.push_str(&" ".repeat(connector_width));
                }
            }
        }
        for (row, line) in lines.iter_mut().enumerate() {
            if row >= top && row < top + block.height() {
                line.push_str(&block.lines[row - top]);
            } else {
                line.push_str(&" ".repeat(block.width));
            }
        }
    }

    let width = blocks.iter().map(|b| b.width).sum::<usize>()
        + connector_width * blocks.len().saturating_sub(1);
    TextBlock { lines, width }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxed_pads_content_to_widest_line() {
        let block = TextBlock::boxed(&["Server".to_owned(), "web1".to_owned()]);
        assert_eq!(block.lines[0], "╭────────╮");
        assert_eq!(block.lines[1], "│ Server │");
        assert_eq!(block.lines[2], "│ web1   │");
        assert_eq!(block.lines[3], "╰────────╯");
        assert_eq!(block.width, 10);
    }

    #[test]
    fn join_horizontal_connects_on_the_middle_line() {
        let a = TextBlock::boxed(&["A".to_owned()]);
        let b = TextBlock::boxed(&["B".to_owned()]);
        let joined = join_horizontal(&[a, b], " ── ");
        assert_eq!(joined.lines[1], "│ A │ ── │ B │");
        assert!(joined.lines[0].contains("    "));
    }

    #[test]
    fn join_horizontal_centers_shorter_blocks() {
        let tall = TextBlock::from_lines(vec!["x".into(), "x".into(), "x".into()]);
        let short = TextBlock::from_lines(vec!["y".into()]);
        let joined = join_horizontal(&[tall, short], "-");
        assert_eq!(joined.height(), 3);
        assert!(joined.lines[1].ends_with('y'));
    }
}
