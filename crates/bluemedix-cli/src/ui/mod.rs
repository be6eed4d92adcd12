//! TUI rendering — orchestrates all panes.

pub mod detail;
pub mod list;

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Screen, Tab, notice_parts};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  // Vertical stack: header, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0], app);
  draw_body(f, rows[1], app);
  draw_status(f, rows[2], app);
}

/// Parse a `#rrggbb` string from the color hash into a terminal color.
pub(crate) fn hex_color(hex: &str) -> Color {
  let value = u32::from_str_radix(hex.trim_start_matches('#'), 16).unwrap_or(0);
  Color::Rgb(
    ((value >> 16) & 0xff) as u8,
    ((value >> 8) & 0xff) as u8,
    (value & 0xff) as u8,
  )
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
  let tab_style = |tab: Tab| {
    if app.tab == tab {
      Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
    } else {
      Style::default().fg(Color::Gray)
    }
  };

  let line = Line::from(vec![
    Span::styled(
      " bluemedix ",
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    ),
    Span::styled(" Users ", tab_style(Tab::Users)),
    Span::raw("|"),
    Span::styled(" Products ", tab_style(Tab::Products)),
    Span::styled(
      "  [Tab] switch  [/] search  [q] quit",
      Style::default().fg(Color::Gray),
    ),
  ]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Body ─────────────────────────────────────────────────────────────────────

fn draw_body(f: &mut Frame, area: Rect, app: &App) {
  // Split into left list pane (40%) and right detail pane (60%).
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
    .split(area);

  // A persistent load error replaces the list view for its tab.
  let load_error = match app.tab {
    Tab::Users => app.users.load_error(),
    Tab::Products => app.products.load_error(),
  };
  if let Some(message) = load_error {
    draw_load_error(f, cols[0], message);
  } else {
    list::draw(f, cols[0], app);
  }

  if app.user_detail.is_some() || app.product_detail.is_some() {
    detail::draw(f, cols[1], app);
  } else {
    draw_empty_detail(f, cols[1]);
  }
}

fn draw_load_error(f: &mut Frame, area: Rect, message: &str) {
  let block = Block::default()
    .title(" Error ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Red));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(
    Paragraph::new(Line::from(vec![
      Span::styled(message.to_owned(), Style::default().fg(Color::Red)),
      Span::styled("  [r] retry", Style::default().fg(Color::Gray)),
    ])),
    inner,
  );
}

fn draw_empty_detail(f: &mut Frame, area: Rect) {
  let block = Block::default()
    .title(" Detail ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(
    Paragraph::new(Line::from(vec![Span::styled(
      "Select a record and press Enter.",
      Style::default().fg(Color::DarkGray),
    )])),
    inner,
  );
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = if app.confirm_delete.is_some() {
    ("CONFIRM", "y confirm  n cancel")
  } else if app.search_active {
    ("SEARCH", "Type to filter  Esc clear  Enter done")
  } else {
    match app.screen {
      Screen::List => (
        "NORMAL",
        "↑↓/jk navigate  / search  Enter detail  d delete  r reload  q quit",
      ),
      Screen::Detail => ("DETAIL", "Esc back  q quit"),
    }
  };

  let middle = if let Some(prompt) = app.confirm_prompt() {
    Span::styled(
      format!("  {prompt}"),
      Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD),
    )
  } else if let Some(notice) = &app.notice {
    let (message, success) = notice_parts(notice);
    let fg = if success { Color::Green } else { Color::Red };
    Span::styled(format!("  {message}"), Style::default().fg(fg))
  } else {
    Span::styled(format!("  {hints}"), Style::default().fg(Color::DarkGray))
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );

  let line = Line::from(vec![mode_span, middle]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}
