use ratatui::layout::Rect;

use crate::ui::nav::Page;

/// Columns between two navigation tabs.
const TAB_GAP: u16 = 1;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

fn tab_width(page: Page) -> u16 {
    page.title().len() as u16 + 2
}

/// Screen rectangle of every navigation tab, centred on the header's middle
/// row. Tabs that do not fit are omitted.
pub fn nav_tabs(header: Rect) -> Vec<(Page, Rect)> {
    if header.height == 0 {
        return Vec::new();
    }
    let total: u16 = Page::ALL.iter().map(|page| tab_width(*page)).sum::<u16>()
        + TAB_GAP * (Page::ALL.len() as u16 - 1);
    let row = header.y + header.height / 2;
    let mut x = header.x + header.width.saturating_sub(total) / 2;
    let right = header.x + header.width;

    let mut tabs = Vec::with_capacity(Page::ALL.len());
    for page in Page::ALL {
        let width = tab_width(page);
        if x + width > right {
            break;
        }
        tabs.push((page, Rect::new(x, row, width, 1)));
        x += width + TAB_GAP;
    }
    tabs
}

/// Tab under the terminal cell `(col, row)`, if any.
pub fn nav_hit(area: Rect, col: u16, row: u16) -> Option<Page> {
    let (header, _, _) = layout_regions(area);
    nav_tabs(header)
        .into_iter()
        .find(|(_, rect)| rect.contains((col, row).into()))
        .map(|(page, _)| page)
}
