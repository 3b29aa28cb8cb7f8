//! Install section
//!
//! The configured snippets rendered as framed code blocks. The focused
//! block is the target of the copy key; each block carries its own
//! copied-confirmation deadline.

use super::{heading, SectionCtx};
use crate::config::{MotionConfig, SiteContent};
use crate::tui::components::SnippetBlock;
use ratatui::text::Line;
use std::time::Instant;

/// Code blocks stay readable even in very wide columns
const MAX_BLOCK_WIDTH: u16 = 64;

pub struct Install {
    blocks: Vec<SnippetBlock>,
}

impl Install {
    pub fn new(content: &SiteContent, motion: &MotionConfig) -> Self {
        Self {
            blocks: content
                .snippets
                .iter()
                .cloned()
                .map(|snippet| SnippetBlock::new(snippet, motion.copied_reset()))
                .collect(),
        }
    }

    pub fn snippet_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn block_mut(&mut self, index: usize) -> Option<&mut SnippetBlock> {
        self.blocks.get_mut(index)
    }

    pub fn advance(&mut self, now: Instant) {
        for block in &mut self.blocks {
            block.advance(now);
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.blocks.iter().filter_map(SnippetBlock::next_deadline).min()
    }

    pub fn display_lines(&self, ctx: &SectionCtx) -> Vec<Line<'static>> {
        let mut lines = vec![Line::default()];
        lines.extend(heading("install", ctx.theme));
        lines.push(Line::default());

        let block_width = ctx.width.min(MAX_BLOCK_WIDTH);
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            let focused = ctx.focused_snippet == Some(i);
            lines.extend(block.display_lines(block_width, ctx.theme, focused));
        }

        lines.push(Line::default());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use crate::tui::layout::Breakpoint;
    use std::time::Duration;

    fn install() -> Install {
        Install::new(&SiteContent::default(), &MotionConfig::default())
    }

    fn ctx<'a>(theme: &'a Theme, focused: Option<usize>) -> SectionCtx<'a> {
        SectionCtx {
            theme,
            bp: Breakpoint::Normal,
            width: 80,
            now: Instant::now(),
            focused_snippet: focused,
        }
    }

    #[test]
    fn test_counts_configured_snippets() {
        assert_eq!(install().snippet_count(), 2);
    }

    #[test]
    fn test_advance_expires_copied_blocks() {
        let mut section = install();
        let t0 = Instant::now();
        section.block_mut(0).unwrap().mark_copied(t0);
        assert_eq!(section.next_deadline(), Some(t0 + Duration::from_secs(2)));

        section.advance(t0 + Duration::from_secs(1));
        assert!(section.block_mut(0).unwrap().is_copied());

        section.advance(t0 + Duration::from_secs(2));
        assert!(!section.block_mut(0).unwrap().is_copied());
        assert_eq!(section.next_deadline(), None);
    }

    #[test]
    fn test_deadline_is_the_earliest_across_blocks() {
        let mut section = install();
        let t0 = Instant::now();
        section.block_mut(1).unwrap().mark_copied(t0 + Duration::from_secs(3));
        section.block_mut(0).unwrap().mark_copied(t0);
        assert_eq!(section.next_deadline(), Some(t0 + Duration::from_secs(2)));
    }

    #[test]
    fn test_focused_block_gets_the_highlight_border() {
        let section = install();
        let theme = Theme::default();

        let focused_lines = section.display_lines(&ctx(&theme, Some(0)));
        let unfocused_lines = section.display_lines(&ctx(&theme, None));

        // First frame row of the first block follows the heading block.
        let first_border = |lines: &[Line]| {
            lines
                .iter()
                .find(|line| {
                    line.spans
                        .first()
                        .is_some_and(|s| s.content.starts_with('╭'))
                })
                .map(|line| line.spans[0].style.fg)
                .expect("block frame present")
        };
        assert_eq!(first_border(&focused_lines), Some(theme.highlight));
        assert_eq!(first_border(&unfocused_lines), Some(theme.border));
    }
}
