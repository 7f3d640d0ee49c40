//! Text content of each page.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::animation::fade;
use crate::config::Profile;
use crate::ui::nav::Page;
use crate::ui::repos::RepoListState;
use crate::ui::theme::{BODY_TEXT, CARD_ACCENT, GLOW, HERO_TEXT, MUTED_TEXT, SPACE_BG};

const CARET: &str = "▌";

/// Colours of a page body at fade progress `t`.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    hero: Color,
    body: Color,
    muted: Color,
    accent: Color,
    glow: Color,
}

impl Palette {
    pub fn faded(t: f32) -> Self {
        Self {
            hero: fade(SPACE_BG, HERO_TEXT, t),
            body: fade(SPACE_BG, BODY_TEXT, t),
            muted: fade(SPACE_BG, MUTED_TEXT, t),
            accent: fade(SPACE_BG, CARD_ACCENT, t),
            glow: fade(SPACE_BG, GLOW, t),
        }
    }
}

pub fn hero_lines(profile: &Profile, greeting: &str, palette: Palette) -> Vec<Line<'static>> {
    let hero = Style::default().fg(palette.hero).add_modifier(Modifier::BOLD);
    let body = Style::default().fg(palette.body);
    let muted = Style::default().fg(palette.muted);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(greeting.to_string(), hero),
            Span::styled(CARET, Style::default().fg(palette.glow)),
        ]),
        Line::from(Span::styled(format!("I am {}", profile.name), hero)),
        Line::default(),
    ];
    if !profile.tagline.is_empty() {
        lines.push(Line::from(Span::styled(profile.tagline.clone(), body)));
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        "[ ⤓ Download my CV ]",
        Style::default().fg(palette.glow).add_modifier(Modifier::BOLD),
    )));
    if let Some(url) = &profile.cv_url {
        lines.push(Line::from(Span::styled(format!("  {url}"), muted)));
    }
    lines.push(Line::default());

    let label_width = profile
        .socials
        .iter()
        .map(|social| social.label.chars().count())
        .max()
        .unwrap_or(0);
    for social in &profile.socials {
        lines.push(Line::from(vec![
            Span::styled("◉ ", Style::default().fg(palette.glow)),
            Span::styled(
                format!("{:<width$}", social.label, width = label_width),
                body,
            ),
            Span::styled(format!("  {}", social.url), muted),
        ]));
    }
    lines
}

pub fn placeholder_lines(page: Page, palette: Palette) -> Vec<Line<'static>> {
    vec![Line::from(Span::styled(
        format!("{} Page", page.title()),
        Style::default().fg(palette.body).add_modifier(Modifier::BOLD),
    ))]
}

pub fn project_lines(repos: &RepoListState, palette: Palette) -> Vec<Line<'static>> {
    let muted = Style::default().fg(palette.muted);
    if repos.is_loading() {
        return vec![Line::from(Span::styled("Loading repositories…", muted))];
    }
    if repos.repos().is_empty() {
        return vec![Line::from(Span::styled("No repositories to show.", muted))];
    }

    let mut lines = Vec::new();
    for repo in repos.repos() {
        lines.push(Line::from(vec![
            Span::styled("▍", Style::default().fg(palette.accent)),
            Span::styled(
                repo.name.clone(),
                Style::default().fg(palette.hero).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("▍", Style::default().fg(palette.accent)),
            Span::styled(
                repo.description_or_default().to_string(),
                Style::default().fg(palette.body),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("▍", Style::default().fg(palette.accent)),
            Span::styled(format!("View Repository: {}", repo.html_url), muted),
        ]));
        lines.push(Line::default());
    }
    lines
}
