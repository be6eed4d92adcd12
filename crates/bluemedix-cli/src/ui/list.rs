//! Record list pane — left panel.

use bluemedix_core::color::{color_for, initials};
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::hex_color;
use crate::app::{App, Tab};

/// Render the active tab's filtered list into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let (title_noun, total, loading) = match app.tab {
    Tab::Users => ("Users", app.users.collection().len(), app.users.is_loading()),
    Tab::Products => (
      "Products",
      app.products.collection().len(),
      app.products.is_loading(),
    ),
  };

  let filtered_len = app.filtered_len();
  let title = if app.search_active || !app.search_term().is_empty() {
    format!(" {title_noun} ({filtered_len}/{total}) ")
  } else {
    format!(" {title_noun} ({total}) ")
  };

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let mut inner_area = block.inner(area);
  f.render_widget(block, area);

  if loading {
    f.render_widget(
      Paragraph::new("Loading…").style(Style::default().fg(Color::DarkGray)),
      inner_area,
    );
    return;
  }

  let items: Vec<ListItem> = match app.tab {
    Tab::Users => app.users.filtered().into_iter().map(user_item).collect(),
    Tab::Products => {
      app.products.filtered().into_iter().map(product_item).collect()
    }
  };

  // Search bar at the bottom of the pane while a term is set.
  if (app.search_active || !app.search_term().is_empty()) && inner_area.height > 2 {
    let search_area = Rect {
      x:      inner_area.x,
      y:      inner_area.y + inner_area.height - 1,
      width:  inner_area.width,
      height: 1,
    };
    inner_area.height = inner_area.height.saturating_sub(1);

    let search_text = if app.search_active {
      format!("/{}_", app.search_term())
    } else {
      format!("/{}", app.search_term())
    };
    f.render_widget(
      Paragraph::new(search_text).style(Style::default().fg(Color::Yellow)),
      search_area,
    );
  }

  let mut state = ListState::default();
  state.select(if items.is_empty() {
    None
  } else {
    Some(app.list_cursor)
  });

  f.render_stateful_widget(
    List::new(items)
      .highlight_style(
        Style::default()
          .bg(Color::Blue)
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol(""),
    inner_area,
    &mut state,
  );
}

fn user_item(user: &bluemedix_core::user::User) -> ListItem<'static> {
  let name = user.display_name();
  let avatar = Span::styled(
    format!(" {} ", initials(&name)),
    Style::default()
      .bg(hex_color(&color_for(&name)))
      .fg(Color::White),
  );

  ListItem::new(Line::from(vec![
    avatar,
    Span::raw(format!(" {name}")),
    Span::styled(
      format!("  {}", user.email),
      Style::default().fg(Color::Gray),
    ),
    Span::styled(
      format!("  {} · {}", user.role, user.status),
      Style::default().fg(Color::DarkGray),
    ),
  ]))
}

fn product_item(product: &bluemedix_core::product::Product) -> ListItem<'static> {
  ListItem::new(Line::from(vec![
    Span::raw(product.title.clone()),
    Span::styled(
      format!("  {}", product.category),
      Style::default().fg(Color::Gray),
    ),
    Span::styled(
      format!("  ${:.2} · {}", product.price, product.stock),
      Style::default().fg(Color::DarkGray),
    ),
  ]))
}
