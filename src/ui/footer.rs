use crate::ui::nav::Page;
use crate::ui::theme::{BODY_TEXT, GLOBAL_BORDER, MUTED_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Longest first; the footer shows the first one that fits.
const HINTS: [&str; 3] = [
    " ←/→: Switch │ 1-6: Jump │ Click: Select │ q: Quit",
    " ←/→ │ 1-6 │ q",
    "",
];

/// Key hints on the left, `Page n/6 · vX.Y.Z` on the right.
pub struct Footer {
    page: Page,
}

impl Footer {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    fn status(&self) -> String {
        format!(
            "{} {}/{} · v{} ",
            self.page.title(),
            self.page.index() + 1,
            Page::ALL.len(),
            VERSION
        )
    }

    /// Hints and padding for `width` columns inside the border.
    fn line(&self, width: usize) -> Line<'static> {
        let status = self.status();
        let status_width = status.chars().count();
        let hints = HINTS
            .into_iter()
            .find(|hints| hints.chars().count() + status_width <= width)
            .unwrap_or("");
        let padding = width.saturating_sub(hints.chars().count() + status_width);

        let dim = Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM);
        Line::from(vec![
            Span::styled(hints, dim),
            Span::raw(" ".repeat(padding)),
            Span::styled(status, Style::default().fg(BODY_TEXT)),
        ])
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner_width = area.width.saturating_sub(2) as usize;
        Paragraph::new(self.line(inner_width))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
            .render(area, buf);
    }
}
