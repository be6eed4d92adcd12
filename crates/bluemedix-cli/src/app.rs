//! Application state machine and event dispatcher.

use std::sync::Arc;

use bluemedix_core::{
  controller::{ListController, Notification, Severity},
  entity::Entity as _,
  product::Product,
  user::User,
};
use bluemedix_store_http::HttpStore;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ─── Screen ───────────────────────────────────────────────────────────────────

/// Which record type the console is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
  Users,
  Products,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
  /// Focus on the list pane.
  List,
  /// Focus on the detail pane for one record.
  Detail,
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state. One [`ListController`] per tab; each owns
/// its screen's collection, flags, and search term.
pub struct App {
  pub tab:    Tab,
  pub screen: Screen,

  pub users:    ListController<User, HttpStore>,
  pub products: ListController<Product, HttpStore>,

  /// Whether the user is typing a search query.
  pub search_active: bool,

  /// Cursor position within the *filtered* list of the active tab.
  pub list_cursor: usize,

  /// Loaded record for the detail pane (re-fetched, enrichment re-rolled).
  pub user_detail:    Option<User>,
  pub product_detail: Option<Product>,

  /// Id awaiting delete confirmation, if any.
  pub confirm_delete: Option<u64>,

  /// Most recent transient notification.
  pub notice: Option<Notification>,
}

impl App {
  pub fn new(store: Arc<HttpStore>) -> Self {
    Self {
      tab: Tab::Users,
      screen: Screen::List,
      users: ListController::new(store.clone()),
      products: ListController::new(store),
      search_active: false,
      list_cursor: 0,
      user_detail: None,
      product_detail: None,
      confirm_delete: None,
      notice: None,
    }
  }

  // ── Data loading ──────────────────────────────────────────────────────────

  /// Initial fetch for both tabs, called once on startup.
  pub async fn load_all(&mut self) {
    self.users.load().await;
    self.products.load().await;
  }

  /// Reload the active tab.
  pub async fn reload(&mut self) {
    match self.tab {
      Tab::Users => self.users.load().await,
      Tab::Products => self.products.load().await,
    }
    self.list_cursor = 0;
  }

  // ── Derived views ─────────────────────────────────────────────────────────

  /// Number of records visible under the current filter.
  pub fn filtered_len(&self) -> usize {
    match self.tab {
      Tab::Users => self.users.filtered().len(),
      Tab::Products => self.products.filtered().len(),
    }
  }

  /// Id of the record under the cursor, if any.
  pub fn cursor_id(&self) -> Option<u64> {
    match self.tab {
      Tab::Users => self.users.filtered().get(self.list_cursor).map(|u| u.id),
      Tab::Products => {
        self.products.filtered().get(self.list_cursor).map(|p| p.id)
      }
    }
  }

  pub fn search_term(&self) -> &str {
    match self.tab {
      Tab::Users => self.users.search_term(),
      Tab::Products => self.products.search_term(),
    }
  }

  fn push_search(&mut self, c: char) {
    let term = format!("{}{c}", self.search_term());
    self.set_search(term);
  }

  fn pop_search(&mut self) {
    let mut term = self.search_term().to_owned();
    term.pop();
    self.set_search(term);
  }

  fn set_search(&mut self, term: String) {
    match self.tab {
      Tab::Users => self.users.set_search_term(term),
      Tab::Products => self.products.set_search_term(term),
    }
    self.list_cursor = 0;
  }

  /// Pull the newest notification out of whichever controller produced one.
  fn drain_notices(&mut self) {
    if let Some(n) = self.users.take_notice().or_else(|| self.products.take_notice()) {
      self.notice = Some(n);
    }
  }

  /// Message text for the delete confirmation prompt.
  pub fn confirm_prompt(&self) -> Option<String> {
    self.confirm_delete.map(|id| {
      let noun = match self.tab {
        Tab::Users => User::SINGULAR,
        Tab::Products => Product::SINGULAR,
      };
      format!("Delete {noun} #{id}? [y/n]")
    })
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> bool {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }

    // A pending delete confirmation captures the keyboard.
    if self.confirm_delete.is_some() {
      self.handle_confirm_key(key).await;
      return true;
    }

    if self.search_active {
      self.handle_search_key(key);
      return true;
    }

    match self.screen {
      Screen::List => self.handle_list_key(key).await,
      Screen::Detail => {
        self.handle_detail_key(key);
        true
      }
    }
  }

  async fn handle_confirm_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Char('y') | KeyCode::Enter => {
        if let Some(id) = self.confirm_delete.take() {
          match self.tab {
            Tab::Users => self.users.remove(id).await,
            Tab::Products => self.products.remove(id).await,
          };
          self.drain_notices();
          let len = self.filtered_len();
          if self.list_cursor >= len && len > 0 {
            self.list_cursor = len - 1;
          }
        }
      }
      KeyCode::Char('n') | KeyCode::Esc => {
        self.confirm_delete = None;
      }
      _ => {}
    }
  }

  fn handle_search_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => {
        self.search_active = false;
        self.set_search(String::new());
      }
      KeyCode::Enter => {
        self.search_active = false;
      }
      KeyCode::Backspace => self.pop_search(),
      KeyCode::Char(c) => self.push_search(c),
      _ => {}
    }
  }

  async fn handle_list_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      // Quit
      KeyCode::Char('q') => return false,

      // Switch record type
      KeyCode::Tab => {
        self.tab = match self.tab {
          Tab::Users => Tab::Products,
          Tab::Products => Tab::Users,
        };
        self.list_cursor = 0;
      }

      // Navigation
      KeyCode::Down | KeyCode::Char('j') => {
        let len = self.filtered_len();
        if len > 0 && self.list_cursor + 1 < len {
          self.list_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.list_cursor = self.list_cursor.saturating_sub(1);
      }

      // Open detail (independent single-record fetch)
      KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
        if let Some(id) = self.cursor_id() {
          self.open_detail(id).await;
        }
      }

      // Search
      KeyCode::Char('/') => {
        self.search_active = true;
        self.set_search(String::new());
      }

      // Reload
      KeyCode::Char('r') => self.reload().await,

      // Delete (with confirmation)
      KeyCode::Char('d') => {
        self.confirm_delete = self.cursor_id();
      }

      _ => {}
    }
    true
  }

  fn handle_detail_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc | KeyCode::Left | KeyCode::Char('h') => {
        self.screen = Screen::List;
        self.user_detail = None;
        self.product_detail = None;
      }
      _ => {}
    }
  }

  /// Transition to the detail screen for `id`.
  async fn open_detail(&mut self, id: u64) {
    let loaded = match self.tab {
      Tab::Users => {
        self.user_detail = self.users.fetch_detail(id).await;
        self.user_detail.is_some()
      }
      Tab::Products => {
        self.product_detail = self.products.fetch_detail(id).await;
        self.product_detail.is_some()
      }
    };
    self.drain_notices();
    if loaded {
      self.screen = Screen::Detail;
    }
  }
}

// ─── Notification display ─────────────────────────────────────────────────────

/// Status-bar rendering data for a notification.
pub fn notice_parts(notice: &Notification) -> (&str, bool) {
  (notice.message.as_str(), notice.severity == Severity::Success)
}
