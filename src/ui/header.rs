use crate::ui::layout::nav_tabs;
use crate::ui::nav::Page;
use crate::ui::theme::{BODY_TEXT, GLOBAL_BORDER, TAB_ACTIVE_BG, TAB_ACTIVE_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Widget};

/// Navigation bar. Tab geometry comes from [`nav_tabs`], the same source the
/// mouse hit-test uses.
pub struct Header {
    active: Page,
}

impl Header {
    pub fn new(active: Page) -> Self {
        Self { active }
    }
}

impl Widget for Header {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(GLOBAL_BORDER))
            .render(area, buf);

        for (page, rect) in nav_tabs(area) {
            let style = if page == self.active {
                Style::default()
                    .fg(TAB_ACTIVE_TEXT)
                    .bg(TAB_ACTIVE_BG)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(BODY_TEXT).add_modifier(Modifier::DIM)
            };
            buf.set_stringn(
                rect.x,
                rect.y,
                format!(" {} ", page.title()),
                rect.width as usize,
                style,
            );
        }
    }
}
