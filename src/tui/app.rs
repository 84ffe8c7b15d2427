//! Main TUI application state and logic

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use ratatui::Terminal;
use tracing::{debug, warn};

use crate::core::add_friend::{AddFriendField, AddFriendForm};
use crate::core::config::Config;
use crate::core::id::{IdGenerator, UuidGenerator};
use crate::core::ledger::{Ledger, Mode};
use crate::core::split_bill::{SplitBillField, SplitBillForm};
use crate::error::{Result, SplitError};
use crate::tui::event::{
    is_back_tab_key, is_force_quit_key, is_quit_key, AppEvent, EventHandler,
};
use crate::tui::ui;

/// Which part of the screen receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Friends,
    AddFriend,
    SplitBill,
}

/// List cursor state
#[derive(Debug, Default)]
pub struct ListState {
    /// Currently highlighted index
    pub selected: usize,
    /// Total items in the list
    pub total: usize,
}

impl ListState {
    pub fn new(total: usize) -> Self {
        Self { selected: 0, total }
    }

    pub fn next(&mut self) {
        if self.total > 0 {
            self.selected = (self.selected + 1) % self.total;
        }
    }

    pub fn previous(&mut self) {
        if self.total > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(self.total - 1);
        }
    }

    /// Update the item count, keeping the cursor in range
    pub fn resize(&mut self, total: usize) {
        self.total = total;
        self.selected = self.selected.min(total.saturating_sub(1));
    }
}

/// Main TUI application
pub struct App {
    /// Whether the app is running
    pub running: bool,
    /// Friends, selection and add-panel state
    pub ledger: Ledger,
    /// Cursor over the friend list
    pub friend_cursor: ListState,
    /// Current key focus
    pub focus: Focus,
    /// Add-friend inputs
    pub add_friend_form: AddFriendForm,
    /// Split-bill inputs for the selected friend
    pub split_bill_form: Option<SplitBillForm>,
    /// Status message to display
    pub status_message: Option<String>,
    /// Whether to show the help overlay
    pub show_help: bool,
    tick_rate: Duration,
    ids: Box<dyn IdGenerator>,
}

impl App {
    /// Create a new app from configuration
    pub fn new(config: &Config) -> Self {
        Self::with_id_generator(config, Box::new(UuidGenerator))
    }

    /// Create an app that draws friend ids from `ids`
    pub fn with_id_generator(config: &Config, ids: Box<dyn IdGenerator>) -> Self {
        let ledger = Ledger::new(config.initial_registry(ids.as_ref()));
        let friend_cursor = ListState::new(ledger.friends().len());

        Self {
            running: true,
            ledger,
            friend_cursor,
            focus: Focus::Friends,
            add_friend_form: AddFriendForm::new(config.avatar_base_url.clone()),
            split_bill_form: None,
            status_message: None,
            show_help: false,
            tick_rate: Duration::from_millis(config.tick_rate_ms),
            ids,
        }
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().map_err(|e| SplitError::Terminal(e.to_string()))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|e| SplitError::Terminal(e.to_string()))?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(|e| SplitError::Terminal(e.to_string()))?;
        Ok(terminal)
    }

    /// Restore terminal to normal state
    fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode().map_err(|e| SplitError::Terminal(e.to_string()))?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .map_err(|e| SplitError::Terminal(e.to_string()))?;
        terminal
            .show_cursor()
            .map_err(|e| SplitError::Terminal(e.to_string()))?;
        Ok(())
    }

    /// Run the TUI application
    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let mut events = EventHandler::new(self.tick_rate);

        let result = self.event_loop(&mut terminal, &mut events).await;

        // Restore even when drawing failed
        Self::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        events: &mut EventHandler,
    ) -> Result<()> {
        while self.running {
            terminal
                .draw(|frame| ui::render(frame, self))
                .map_err(|e| SplitError::Terminal(e.to_string()))?;

            match events.next().await {
                Some(AppEvent::Key(key)) => self.handle_key_event(key),
                // Resize and ticks only need a redraw
                Some(AppEvent::Resize(_, _)) | Some(AppEvent::Tick) => {}
                None => self.quit(),
            }
        }
        Ok(())
    }

    /// Apply one key press
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.show_help {
            self.show_help = false;
            return;
        }

        if is_force_quit_key(&key) {
            self.quit();
            return;
        }

        match self.focus {
            Focus::Friends => self.handle_friends_key(key),
            Focus::AddFriend => self.handle_add_friend_key(key),
            Focus::SplitBill => self.handle_split_bill_key(key),
        }

        self.sync_forms();
    }

    fn handle_friends_key(&mut self, key: KeyEvent) {
        if is_quit_key(&key) {
            self.quit();
            return;
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.friend_cursor.next(),
            KeyCode::Char('k') | KeyCode::Up => self.friend_cursor.previous(),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_select_at_cursor(),
            KeyCode::Char('a') => self.toggle_add_friend(),
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab => {
                self.focus = match self.ledger.mode() {
                    Mode::Adding => Focus::AddFriend,
                    Mode::Splitting(_) => Focus::SplitBill,
                    Mode::Browsing => Focus::Friends,
                };
            }
            KeyCode::Esc => {
                if self.ledger.is_adding() {
                    self.toggle_add_friend();
                } else if self.ledger.selected_friend().is_some() {
                    self.close_split();
                }
            }
            _ => {}
        }
    }

    fn handle_add_friend_key(&mut self, key: KeyEvent) {
        // Shift+Tab from the first field hands focus back to the list
        if is_back_tab_key(&key) {
            if self.add_friend_form.field == AddFriendField::Name {
                self.focus = Focus::Friends;
            } else {
                self.add_friend_form.next_field();
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.toggle_add_friend(),
            KeyCode::Tab => self.add_friend_form.next_field(),
            KeyCode::Enter => self.submit_add_friend(),
            KeyCode::Backspace => {
                self.add_friend_form.focused_input().pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.add_friend_form.focused_input().push(c);
            }
            _ => {}
        }
    }

    fn handle_split_bill_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => return self.close_split(),
            KeyCode::Enter => return self.submit_split_bill(),
            _ => {}
        }

        let Some(form) = self.split_bill_form.as_mut() else {
            self.focus = Focus::Friends;
            return;
        };

        if is_back_tab_key(&key) {
            if form.field == SplitBillField::Bill {
                self.focus = Focus::Friends;
            } else {
                form.previous_field();
            }
            return;
        }

        match key.code {
            KeyCode::Tab => form.next_field(),
            KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right
                if form.field == SplitBillField::Payer =>
            {
                form.toggle_payer();
            }
            KeyCode::Backspace => {
                form.pop_char();
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
                form.push_char(c);
            }
            _ => {}
        }
    }

    /// Open or close the add-friend panel
    pub fn toggle_add_friend(&mut self) {
        self.ledger.toggle_add_friend();
        if self.ledger.is_adding() {
            self.focus = Focus::AddFriend;
        } else {
            self.add_friend_form.reset();
            self.focus = Focus::Friends;
        }
    }

    /// Select or deselect the friend under the cursor
    pub fn toggle_select_at_cursor(&mut self) {
        let Some(friend) = self.ledger.friends().get(self.friend_cursor.selected) else {
            return;
        };
        let id = friend.id.clone();

        let was_adding = self.ledger.is_adding();
        if let Err(e) = self.ledger.toggle_select(&id) {
            warn!(error = %e, "select failed");
            return;
        }
        if was_adding {
            self.add_friend_form.reset();
        }

        match self.ledger.selected_friend() {
            Some(friend) => {
                self.status_message = Some(format!("Splitting a bill with {}", friend.name));
                self.focus = Focus::SplitBill;
            }
            None => {
                self.status_message = None;
                self.focus = Focus::Friends;
            }
        }
    }

    /// Close the split form by deselecting its friend
    fn close_split(&mut self) {
        self.ledger.clear_selection();
        self.focus = Focus::Friends;
    }

    fn submit_add_friend(&mut self) {
        match self.add_friend_form.submit(self.ids.as_ref()) {
            Ok(friend) => {
                self.status_message = Some(format!("Added {}", friend.name));
                self.ledger.add_friend(friend);
                self.friend_cursor.resize(self.ledger.friends().len());
                self.focus = Focus::Friends;
            }
            Err(e) => debug!(reason = %e, "add-friend submission ignored"),
        }
    }

    fn submit_split_bill(&mut self) {
        let Some(form) = self.split_bill_form.as_ref() else {
            return;
        };

        let delta = match form.submit() {
            Ok(delta) => delta,
            Err(e) => {
                debug!(reason = %e, "split submission ignored");
                return;
            }
        };

        match self.ledger.split_bill(delta) {
            Ok(friend) => {
                self.status_message = Some(format!("Split recorded. {}", friend.status_text()));
            }
            Err(e) => {
                warn!(error = %e, "split could not be applied");
                self.status_message = Some(e.to_string());
            }
        }
        self.focus = Focus::Friends;
    }

    /// Keep the split form and focus in line with the ledger
    fn sync_forms(&mut self) {
        self.ledger.prune_selection();

        match self.ledger.selected_friend() {
            Some(friend) => {
                let stale = self
                    .split_bill_form
                    .as_ref()
                    .map_or(true, |form| form.friend_id() != &friend.id);
                if stale {
                    self.split_bill_form = Some(SplitBillForm::new(friend.id.clone()));
                }
            }
            None => self.split_bill_form = None,
        }

        let focus_visible = match self.focus {
            Focus::Friends => true,
            Focus::AddFriend => self.ledger.is_adding(),
            Focus::SplitBill => matches!(self.ledger.mode(), Mode::Splitting(_)),
        };
        if !focus_visible {
            self.focus = Focus::Friends;
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::FriendSeed;
    use crate::core::friend::FriendId;
    use crate::core::id::MockIdGenerator;
    use crate::core::split_bill::Payer;

    fn seed(id: &str, name: &str) -> FriendSeed {
        FriendSeed {
            id: Some(id.to_string()),
            name: name.to_string(),
            image: None,
            balance: 0.0,
        }
    }

    fn app() -> App {
        let config = Config {
            friends: vec![seed("118836", "Clark"), seed("933372", "Sarah")],
            ..Config::default()
        };
        let mut ids = MockIdGenerator::new();
        ids.expect_next_id().returning(|| FriendId::new("new-id"));
        App::with_id_generator(&config, Box::new(ids))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn balance(app: &App, id: &str) -> f64 {
        app.ledger.registry().get(&FriendId::new(id)).unwrap().balance
    }

    #[test]
    fn test_add_friend_flow() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.focus, Focus::AddFriend);

        type_text(&mut app, "Nina");
        press(&mut app, KeyCode::Tab);
        app.add_friend_form.image = "http://x".to_string();
        press(&mut app, KeyCode::Enter);

        let friends = app.ledger.friends();
        assert_eq!(friends.len(), 3);
        assert_eq!(friends[2].name, "Nina");
        assert_eq!(friends[2].id, FriendId::new("new-id"));
        assert_eq!(friends[2].image, "http://x?=new-id");
        assert_eq!(friends[2].balance, 0.0);
        assert!(!app.ledger.is_adding());
        assert_eq!(app.focus, Focus::Friends);
        assert_eq!(app.friend_cursor.total, 3);
    }

    #[test]
    fn test_add_friend_with_empty_name_keeps_panel_open() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.ledger.friends().len(), 2);
        assert!(app.ledger.is_adding());
        assert_eq!(app.focus, Focus::AddFriend);
    }

    #[test]
    fn test_selecting_closes_add_panel() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Half typed");
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::Friends);
        assert!(app.ledger.is_adding());

        press(&mut app, KeyCode::Enter);

        assert!(!app.ledger.is_adding());
        assert!(app.add_friend_form.name.is_empty());
        assert_eq!(app.focus, Focus::SplitBill);
        assert!(app.split_bill_form.is_some());
    }

    #[test]
    fn test_split_you_pay() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "100");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "40");
        press(&mut app, KeyCode::Enter);

        assert_eq!(balance(&app, "118836"), 60.0);
        assert!(app.ledger.selected_friend().is_none());
        assert!(app.split_bill_form.is_none());
        assert_eq!(app.focus, Focus::Friends);
    }

    #[test]
    fn test_split_friend_pays() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "100");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "40");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.split_bill_form.as_ref().unwrap().payer, Payer::Friend);
        press(&mut app, KeyCode::Enter);

        assert_eq!(balance(&app, "933372"), -40.0);
        assert_eq!(balance(&app, "118836"), 0.0);
        assert!(app.ledger.selected_friend().is_none());
    }

    #[test]
    fn test_paid_over_bill_is_rejected() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "100");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "15");
        // 150 > 100
        type_text(&mut app, "0");

        let form = app.split_bill_form.as_ref().unwrap();
        assert_eq!(form.paid_by_you(), Some(15.0));
        assert_eq!(form.friend_expense(), Some(85.0));
    }

    #[test]
    fn test_split_with_empty_bill_changes_nothing() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);

        assert_eq!(balance(&app, "118836"), 0.0);
        assert!(app.ledger.is_selected(&FriendId::new("118836")));
        assert!(app.split_bill_form.is_some());
        assert_eq!(app.focus, Focus::SplitBill);
    }

    #[test]
    fn test_reselect_same_friend_closes_split() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::Friends);
        press(&mut app, KeyCode::Enter);

        assert!(app.ledger.selected_friend().is_none());
        assert!(app.split_bill_form.is_none());
    }

    #[test]
    fn test_switching_friend_resets_split_form() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "100");

        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        let form = app.split_bill_form.as_ref().unwrap();
        assert_eq!(form.friend_id(), &FriendId::new("933372"));
        assert_eq!(form.bill_input(), "");
    }

    #[test]
    fn test_add_panel_hides_split_and_keeps_selection() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Char('a'));

        assert_eq!(app.ledger.mode(), Mode::Adding);
        assert!(app.ledger.is_selected(&FriendId::new("118836")));

        press(&mut app, KeyCode::Esc);
        assert!(matches!(app.ledger.mode(), Mode::Splitting(_)));
    }

    #[test]
    fn test_shift_tab_from_first_field_returns_to_list() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "100");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::SplitBill);

        // Second field steps back, first field leaves the form
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::SplitBill);
        assert_eq!(app.split_bill_form.as_ref().unwrap().field, SplitBillField::Bill);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::Friends);
        assert!(app.ledger.is_selected(&FriendId::new("118836")));

        // Tab goes back in with the typed bill intact
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::SplitBill);
        assert_eq!(app.split_bill_form.as_ref().unwrap().bill_input(), "100");

        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::AddFriend);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::Friends);
        assert!(app.ledger.is_adding());
    }

    #[test]
    fn test_escape_closes_split() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);

        assert!(app.ledger.selected_friend().is_none());
        assert_eq!(app.focus, Focus::Friends);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "q");
        assert!(app.running);
        assert_eq!(app.add_friend_form.name, "q");

        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    #[test]
    fn test_help_overlay_swallows_next_key() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.show_help);
        assert!(app.running);
    }

    #[test]
    fn test_list_state_wraps_and_resizes() {
        let mut list = ListState::new(2);
        list.previous();
        assert_eq!(list.selected, 1);
        list.next();
        assert_eq!(list.selected, 0);
        list.selected = 1;
        list.resize(1);
        assert_eq!(list.selected, 0);
    }
}
