use crate::ui::app::App;
use crate::ui::layout::nav_hit;
use crate::ui::nav::Page;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Right | KeyCode::Tab => app.next_page(),
        KeyCode::Left | KeyCode::BackTab => app.prev_page(),
        KeyCode::Char(ch) => {
            // 1-based tab number.
            let page = ch
                .to_digit(10)
                .and_then(|digit| (digit as usize).checked_sub(1))
                .and_then(Page::from_index);
            if let Some(page) = page {
                app.select_page(page);
            }
        }
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let Some(area) = app.area() else {
        return;
    };
    if let Some(page) = nav_hit(area, mouse.column, mouse.row) {
        app.select_page(page);
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
