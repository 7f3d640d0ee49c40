use std::time::Instant;

use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::nav::Page;
use crate::ui::pages::{hero_lines, placeholder_lines, project_lines, Palette};
use crate::ui::theme::SPACE_BG;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

/// Left margin of page content.
const CONTENT_MARGIN: u16 = 4;

pub fn draw(frame: &mut Frame<'_>, app: &App, now: Instant) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(SPACE_BG)), area);

    let (header, body, footer) = layout_regions(area);
    frame.render_widget(app.starfield().at(app.elapsed(now)), body);
    frame.render_widget(Header::new(app.active_page()), header);

    let palette = Palette::faded(app.transition_progress(now));
    let content = inset(body);
    match app.active_page() {
        Page::Home => {
            let lines = hero_lines(app.profile(), &app.greeting(), palette);
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), content);
        }
        Page::Projects => {
            let lines = project_lines(app.repos(), palette);
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), content);
        }
        page => {
            let lines = placeholder_lines(page, palette);
            let middle = Rect {
                y: body.y + body.height / 2,
                height: body.height.min(1),
                ..body
            };
            frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), middle);
        }
    }

    frame.render_widget(Footer::new(app.active_page()), footer);
}

fn inset(body: Rect) -> Rect {
    Rect {
        x: body.x + CONTENT_MARGIN.min(body.width),
        y: body.y + 1.min(body.height),
        width: body.width.saturating_sub(CONTENT_MARGIN * 2),
        height: body.height.saturating_sub(2),
    }
}
