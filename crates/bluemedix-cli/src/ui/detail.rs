//! Record detail pane — right panel.
//!
//! Shows the independently re-fetched copy of the record, so the displayed
//! status/role/stock will generally disagree with the list pane — that is
//! the backend-less enrichment re-rolling, not a sync bug.

use bluemedix_core::{
  color::{color_for, initials},
  product::Product,
  user::User,
};
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Wrap},
};

use super::hex_color;
use crate::app::App;

/// Render the detail pane into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let title = match (&app.user_detail, &app.product_detail) {
    (Some(user), _) => format!(" {} ", user.display_name()),
    (_, Some(product)) => format!(" {} ", product.title),
    _ => " Detail ".to_owned(),
  };

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let lines = if let Some(user) = &app.user_detail {
    user_lines(user)
  } else if let Some(product) = &app.product_detail {
    product_lines(product)
  } else {
    return;
  };

  f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn field(label: &'static str, value: String) -> Line<'static> {
  Line::from(vec![
    Span::styled(
      format!("{label:<12}"),
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    ),
    Span::raw(value),
  ])
}

fn user_lines(user: &User) -> Vec<Line<'static>> {
  let name = user.display_name();
  vec![
    Line::from(vec![Span::styled(
      format!(" {} ", initials(&name)),
      Style::default()
        .bg(hex_color(&color_for(&name)))
        .fg(Color::White)
        .add_modifier(Modifier::BOLD),
    )]),
    Line::from(""),
    field("id", user.id.to_string()),
    field("name", name),
    field("email", user.email.clone()),
    field("username", user.username.clone()),
    field("phone", user.phone.clone().unwrap_or_else(|| "—".into())),
    Line::from(""),
    field("role", user.role.to_string()),
    field("status", user.status.to_string()),
  ]
}

fn product_lines(product: &Product) -> Vec<Line<'static>> {
  let rating = product
    .rating
    .as_ref()
    .map(|r| format!("{} ({} ratings)", r.rate, r.count))
    .unwrap_or_else(|| "—".into());

  vec![
    field("id", product.id.to_string()),
    field("title", product.title.clone()),
    field("price", format!("${:.2}", product.price)),
    field("category", product.category.clone()),
    field("image", product.image.clone()),
    field("rating", rating),
    Line::from(""),
    field("stock", product.stock.to_string()),
    Line::from(""),
    Line::from(Span::styled(
      product.description.clone(),
      Style::default().fg(Color::Gray),
    )),
  ]
}
