//! Main UI renderer

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};

use crate::core::add_friend::AddFriendField;
use crate::core::friend::{format_amount, Friend};
use crate::core::ledger::Mode;
use crate::core::split_bill::{Payer, SplitBillField, SplitBillForm};
use crate::tui::app::{App, Focus};
use crate::tui::theme::Theme;

/// Render the UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    render_content(frame, chunks[1], app);
    render_status_bar(frame, chunks[2], app);

    if app.show_help {
        render_help_overlay(frame);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let mode = match app.ledger.mode() {
        Mode::Browsing => "Friends".to_string(),
        Mode::Adding => "Add friend".to_string(),
        Mode::Splitting(friend) => format!("Split a bill with {}", friend.name),
    };
    let title = format!(" splitbill │ {} ", mode);

    let header = Paragraph::new(title)
        .style(Theme::header())
        .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(header, area);
}

/// Sidebar with friends on the left, split form on the right
fn render_content(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_sidebar(frame, columns[0], app);

    match (app.ledger.mode(), app.split_bill_form.as_ref()) {
        (Mode::Splitting(friend), Some(form)) => {
            render_split_bill(frame, columns[1], friend, form, app.focus == Focus::SplitBill)
        }
        _ => render_hint(frame, columns[1]),
    }
}

fn render_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let constraints = if app.ledger.is_adding() {
        vec![Constraint::Min(0), Constraint::Length(8), Constraint::Length(1)]
    } else {
        vec![Constraint::Min(0), Constraint::Length(0), Constraint::Length(1)]
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    render_friend_list(frame, chunks[0], app);

    if app.ledger.is_adding() {
        render_add_friend(frame, chunks[1], app);
    }

    let toggle = if app.ledger.is_adding() {
        " [a] Close"
    } else {
        " [a] Add friend"
    };
    frame.render_widget(Paragraph::new(toggle).style(Theme::muted()), chunks[2]);
}

fn render_friend_list(frame: &mut Frame, area: Rect, app: &App) {
    let friends = app.ledger.friends();

    let items: Vec<ListItem> = if friends.is_empty() {
        vec![ListItem::new("  No friends yet. Press [a] to add one.").style(Theme::muted())]
    } else {
        friends
            .iter()
            .enumerate()
            .map(|(i, friend)| friend_item(friend, app, i == app.friend_cursor.selected))
            .collect()
    };

    let border = if app.focus == Focus::Friends {
        Theme::focused()
    } else {
        Theme::normal()
    };
    let list = List::new(items).block(
        Block::default()
            .title(format!(" Friends ({}) ", friends.len()))
            .borders(Borders::ALL)
            .border_style(border),
    );

    frame.render_widget(list, area);
}

/// Two-line entry: name with select control, then the balance line
fn friend_item<'a>(friend: &'a Friend, app: &App, under_cursor: bool) -> ListItem<'a> {
    let selected = app.ledger.is_selected(&friend.id);
    let marker = if selected { "●" } else { "○" };
    let control = if selected { "[Close]" } else { "[Select]" };

    let name_style = if selected {
        Theme::selected()
    } else {
        Theme::normal()
    };
    let name_line = Line::from(vec![
        Span::styled(format!(" {} {}", marker, friend.name), name_style),
        Span::styled(format!("  {}", control), Theme::muted()),
    ]);
    let balance_line = Line::from(Span::styled(
        format!("     {}", friend.status_text()),
        Theme::balance(friend.status()),
    ));

    let item = ListItem::new(vec![name_line, balance_line]);
    if under_cursor && app.focus == Focus::Friends {
        item.style(Theme::cursor())
    } else {
        item
    }
}

fn render_add_friend(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.add_friend_form;
    let focused = app.focus == Focus::AddFriend;

    let block = Block::default()
        .title(" Add friend ")
        .borders(Borders::ALL)
        .border_style(if focused { Theme::focused() } else { Theme::normal() });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(inner);

    render_input(
        frame,
        rows[0],
        " Friend name ",
        &form.name,
        focused && form.field == AddFriendField::Name,
    );
    render_input(
        frame,
        rows[1],
        " Image URL ",
        &form.image,
        focused && form.field == AddFriendField::Image,
    );
}

fn render_split_bill(
    frame: &mut Frame,
    area: Rect,
    friend: &Friend,
    form: &SplitBillForm,
    focused: bool,
) {
    let block = Block::default()
        .title(format!(" Split a bill with {} ", friend.name))
        .borders(Borders::ALL)
        .border_style(if focused { Theme::focused() } else { Theme::normal() });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Bill
            Constraint::Length(3), // Your expense
            Constraint::Length(3), // Friend's expense
            Constraint::Length(3), // Payer
            Constraint::Length(1), // Submit hint
        ])
        .split(inner);

    let is_field = |field: SplitBillField| focused && form.field == field;

    render_input(frame, rows[0], " Bill value ", form.bill_input(), is_field(SplitBillField::Bill));
    render_input(
        frame,
        rows[1],
        " Your expense ",
        form.paid_by_you_input(),
        is_field(SplitBillField::PaidByYou),
    );

    let friend_expense = form.friend_expense().map(format_amount).unwrap_or_default();
    let expense = Paragraph::new(friend_expense).style(Theme::muted()).block(
        Block::default()
            .title(format!(" {}'s expense ", friend.name))
            .borders(Borders::ALL)
            .border_style(Theme::muted()),
    );
    frame.render_widget(expense, rows[2]);

    let payer_name = match form.payer {
        Payer::You => "You".to_string(),
        Payer::Friend => friend.name.clone(),
    };
    let payer = Paragraph::new(format!("◀ {} ▶", payer_name))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Who is paying the bill ")
                .borders(Borders::ALL)
                .border_style(if is_field(SplitBillField::Payer) {
                    Theme::focused()
                } else {
                    Theme::normal()
                }),
        );
    frame.render_widget(payer, rows[3]);

    let hint = Paragraph::new(" [Enter] Split bill  [Tab] Next field  [Esc] Close")
        .style(Theme::muted());
    frame.render_widget(hint, rows[4]);
}

/// Single-line text input with a titled border
fn render_input(frame: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let text = if focused {
        format!("{}▏", value)
    } else {
        value.to_string()
    };
    let input = Paragraph::new(text).block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_style(if focused { Theme::focused() } else { Theme::normal() }),
    );
    frame.render_widget(input, area);
}

fn render_hint(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new("\n  Select a friend to split a bill.")
        .style(Theme::muted())
        .block(Block::default().borders(Borders::ALL).border_style(Theme::muted()));
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let status_text = match &app.status_message {
        Some(msg) => format!(" {}", msg),
        None => " ? for help │ q to quit ".to_string(),
    };

    let status = Paragraph::new(status_text)
        .style(Theme::status_bar())
        .block(Block::default().borders(Borders::TOP));

    frame.render_widget(status, area);
}

fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    let popup_width = percent_of(area.width, 60).min(60);
    let popup_height = percent_of(area.height, 70).min(18);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let text: Vec<Line> = help_content()
        .into_iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("  {:12}", key), Style::default().fg(Color::Cyan)),
                Span::raw(desc),
            ])
        })
        .collect();

    let help = Paragraph::new(text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(help, popup_area);
}

/// Percentage of a terminal dimension without overflowing u16
fn percent_of(length: u16, percent: u16) -> u16 {
    (u32::from(length) * u32::from(percent) / 100) as u16
}

fn help_content() -> Vec<(&'static str, &'static str)> {
    vec![
        ("j / ↓", "Move down"),
        ("k / ↑", "Move up"),
        ("Enter", "Select friend / Submit form"),
        ("a", "Add friend / Close"),
        ("Tab", "Next field"),
        ("Shift+Tab", "Previous field / Back to list"),
        ("Space / ←→", "Change who paid"),
        ("Esc", "Close form"),
        ("q / Ctrl+c", "Quit"),
        ("?", "Show this help"),
    ]
}
