//! Interactive expense entry form
//!
//! Form state and rendering: category/subcategory selectors over the fixed
//! catalog, a store input, and a dynamic item list backed by the ledger.
//! The submit action is re-gated after every mutation, mirroring the
//! submission predicate exactly.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ledger::{can_submit, ItemField, LineItemLedger};
use crate::models::{catalog, ExpenseDraft};

use super::widgets::TextInput;

/// Which field of the form is focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Category,
    Subcategory,
    Store,
    ItemName(usize),
    ItemAmount(usize),
}

/// State of the expense entry form
pub struct ExpenseFormApp {
    category_index: usize,
    subcategory_index: usize,
    pub store: TextInput,
    pub ledger: LineItemLedger,
    pub focused: FormField,
    /// Transient validation/status message
    pub status: Option<String>,
    pub should_quit: bool,
    submitted: bool,
}

impl ExpenseFormApp {
    /// Create an empty form on the catalog defaults
    pub fn new() -> Self {
        Self::from_draft(ExpenseDraft::new())
    }

    /// Create a form pre-populated from a draft (e.g. an ingested receipt)
    pub fn from_draft(draft: ExpenseDraft) -> Self {
        let category_index = catalog::CATALOG
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(&draft.category))
            .unwrap_or(0);
        let subcategory_index = catalog::CATALOG[category_index]
            .subcategories
            .iter()
            .position(|s| s.eq_ignore_ascii_case(&draft.subcategory))
            .unwrap_or(0);

        Self {
            category_index,
            subcategory_index,
            store: TextInput::new()
                .label("Store")
                .placeholder("Enter store name")
                .content(draft.store),
            ledger: LineItemLedger::from_items(draft.items),
            focused: FormField::Category,
            status: None,
            should_quit: false,
            submitted: false,
        }
    }

    /// The selected category
    pub fn category(&self) -> &'static str {
        catalog::CATALOG[self.category_index].name
    }

    /// The selected subcategory
    pub fn subcategory(&self) -> &'static str {
        catalog::CATALOG[self.category_index].subcategories[self.subcategory_index]
    }

    /// Whether the current state passes the submission gate
    pub fn can_submit_now(&self) -> bool {
        can_submit(self.ledger.items())
    }

    /// The finished draft, if the form was submitted
    pub fn into_draft(mut self) -> Option<ExpenseDraft> {
        if !self.submitted {
            return None;
        }

        let mut draft = ExpenseDraft::new();
        draft.set_category(self.category());
        draft.set_subcategory(self.subcategory());
        draft.store = self.store.value().to_string();
        draft.items = self.ledger.take_items();
        Some(draft)
    }

    /// Handle one key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        self.status = None;

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('n') => self.add_item(),
                KeyCode::Char('d') => self.remove_focused_item(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Enter => self.try_submit(),
            KeyCode::Tab | KeyCode::Down => self.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.prev_field(),
            KeyCode::Left => self.cycle_selector(-1),
            KeyCode::Right => self.cycle_selector(1),
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.backspace(),
            _ => {}
        }
    }

    /// Append an empty item row and focus its name field
    pub fn add_item(&mut self) {
        self.ledger.add();
        self.focused = FormField::ItemName(self.ledger.len() - 1);
        self.sync_focus();
    }

    /// Remove the focused item row
    pub fn remove_focused_item(&mut self) {
        let index = match self.focused {
            FormField::ItemName(i) | FormField::ItemAmount(i) => i,
            _ => return,
        };

        self.ledger.remove(index);
        self.focused = if self.ledger.is_empty() {
            FormField::Store
        } else {
            FormField::ItemName(index.min(self.ledger.len() - 1))
        };
        self.sync_focus();
    }

    fn try_submit(&mut self) {
        if self.store.value().trim().is_empty() {
            self.status = Some("Store name is required.".to_string());
            return;
        }
        if !self.can_submit_now() {
            self.status =
                Some("Add at least one named item with a positive total.".to_string());
            return;
        }

        self.submitted = true;
        self.should_quit = true;
    }

    fn field_order(&self) -> Vec<FormField> {
        let mut order = vec![FormField::Category, FormField::Subcategory, FormField::Store];
        for i in 0..self.ledger.len() {
            order.push(FormField::ItemName(i));
            order.push(FormField::ItemAmount(i));
        }
        order
    }

    fn next_field(&mut self) {
        let order = self.field_order();
        let index = order.iter().position(|f| *f == self.focused).unwrap_or(0);
        self.focused = order[(index + 1) % order.len()];
        self.sync_focus();
    }

    fn prev_field(&mut self) {
        let order = self.field_order();
        let index = order.iter().position(|f| *f == self.focused).unwrap_or(0);
        self.focused = order[(index + order.len() - 1) % order.len()];
        self.sync_focus();
    }

    fn sync_focus(&mut self) {
        self.store.focused = self.focused == FormField::Store;
    }

    /// Cycle the focused selector; changing the category resets the
    /// subcategory to the new set's first option
    fn cycle_selector(&mut self, delta: isize) {
        match self.focused {
            FormField::Category => {
                let len = catalog::CATALOG.len() as isize;
                self.category_index =
                    ((self.category_index as isize + delta).rem_euclid(len)) as usize;
                self.subcategory_index = 0;
            }
            FormField::Subcategory => {
                let len = catalog::CATALOG[self.category_index].subcategories.len() as isize;
                self.subcategory_index =
                    ((self.subcategory_index as isize + delta).rem_euclid(len)) as usize;
            }
            _ => {}
        }
    }

    fn insert_char(&mut self, c: char) {
        match self.focused {
            FormField::Store => self.store.insert(c),
            FormField::ItemName(i) => self.edit_item(i, ItemField::Name, |value| value.push(c)),
            FormField::ItemAmount(i) => self.edit_item(i, ItemField::Amount, |value| value.push(c)),
            _ => {}
        }
    }

    fn backspace(&mut self) {
        match self.focused {
            FormField::Store => self.store.backspace(),
            FormField::ItemName(i) => self.edit_item(i, ItemField::Name, |value| {
                value.pop();
            }),
            FormField::ItemAmount(i) => self.edit_item(i, ItemField::Amount, |value| {
                value.pop();
            }),
            _ => {}
        }
    }

    fn edit_item(&mut self, index: usize, field: ItemField, edit: impl FnOnce(&mut String)) {
        let Some(item) = self.ledger.items().get(index) else {
            return;
        };

        let mut value = match field {
            ItemField::Name => item.name.clone(),
            ItemField::Amount => item.amount.clone(),
        };
        edit(&mut value);
        self.ledger.set_field(index, field, value);
    }
}

impl Default for ExpenseFormApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the form
pub fn render(app: &ExpenseFormApp, frame: &mut Frame) {
    let area = frame.area();
    let block = Block::default().borders(Borders::ALL).title(" Expense Form ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut y = inner.y;
    let line_rect = |y: u16| Rect::new(inner.x + 1, y, inner.width.saturating_sub(2), 1);

    let mut draw = |frame: &mut Frame, y: &mut u16, line: Line| {
        if *y < inner.y + inner.height {
            frame.render_widget(Paragraph::new(line), line_rect(*y));
        }
        *y += 1;
    };

    draw(
        frame,
        &mut y,
        selector_line("Category", app.category(), app.focused == FormField::Category),
    );
    draw(
        frame,
        &mut y,
        selector_line(
            "Subcategory",
            app.subcategory(),
            app.focused == FormField::Subcategory,
        ),
    );

    if y < inner.y + inner.height {
        frame.render_widget(&app.store, line_rect(y));
    }
    y += 2;

    draw(
        frame,
        &mut y,
        Line::from(Span::styled(
            "Receipt Items",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    );

    if app.ledger.is_empty() {
        draw(
            frame,
            &mut y,
            Line::from(Span::styled(
                "  (no items yet; Ctrl-N adds one)",
                Style::default().fg(Color::DarkGray),
            )),
        );
    }

    for (i, item) in app.ledger.items().iter().enumerate() {
        let name_focused = app.focused == FormField::ItemName(i);
        let amount_focused = app.focused == FormField::ItemAmount(i);
        let line = Line::from(vec![
            Span::raw(format!("  {}. ", i + 1)),
            field_span(&item.name, "Item Name", name_focused),
            Span::raw("  "),
            field_span(&item.amount, "Amount", amount_focused),
        ]);
        draw(frame, &mut y, line);
    }

    y += 1;
    draw(
        frame,
        &mut y,
        Line::from(Span::styled(
            format!("Total Amount: ${}", app.ledger.formatted_total()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    );

    if let Some(status) = &app.status {
        draw(
            frame,
            &mut y,
            Line::from(Span::styled(
                status.clone(),
                Style::default().fg(Color::Red),
            )),
        );
    }

    let submit_style = if app.can_submit_now() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let footer = Line::from(vec![
        Span::styled("Enter submit", submit_style),
        Span::styled(
            " · Tab next · Ctrl-N add item · Ctrl-D remove item · Esc cancel",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    let footer_y = (inner.y + inner.height).saturating_sub(1).max(y);
    if footer_y < inner.y + inner.height {
        frame.render_widget(Paragraph::new(footer), line_rect(footer_y));
    }
}

fn selector_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let value_style = if focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let arrows_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::Cyan)),
        Span::styled("< ", arrows_style),
        Span::styled(value.to_string(), value_style),
        Span::styled(" >", arrows_style),
    ])
}

fn field_span(value: &str, placeholder: &str, focused: bool) -> Span<'static> {
    if value.is_empty() && !focused {
        return Span::styled(
            format!("[{}]", placeholder),
            Style::default().fg(Color::DarkGray),
        );
    }

    let text = if focused {
        format!("{}_", value)
    } else {
        value.to_string()
    };
    let style = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Yellow)
    };
    Span::styled(text, style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(app: &mut ExpenseFormApp, s: &str) {
        for c in s.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_starts_on_catalog_defaults() {
        let app = ExpenseFormApp::new();
        assert_eq!(app.category(), "Groceries");
        assert_eq!(app.subcategory(), "Food");
        assert_eq!(app.focused, FormField::Category);
    }

    #[test]
    fn test_category_cycle_resets_subcategory() {
        let mut app = ExpenseFormApp::new();
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.subcategory(), "Meals");

        app.handle_key(key(KeyCode::BackTab));
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.category(), "Gas");
        assert_eq!(app.subcategory(), "Regular");
    }

    #[test]
    fn test_typing_into_item_updates_total() {
        let mut app = ExpenseFormApp::new();
        app.handle_key(ctrl('n'));
        assert_eq!(app.focused, FormField::ItemName(0));

        type_str(&mut app, "Milk");
        app.handle_key(key(KeyCode::Tab));
        type_str(&mut app, "2.50");

        assert_eq!(app.ledger.items()[0].name, "Milk");
        assert_eq!(app.ledger.formatted_total(), "2.50");
        assert!(app.can_submit_now());
    }

    #[test]
    fn test_submit_requires_store_name() {
        let mut app = ExpenseFormApp::new();
        app.handle_key(ctrl('n'));
        type_str(&mut app, "Milk");
        app.handle_key(key(KeyCode::Tab));
        type_str(&mut app, "2.50");

        app.handle_key(key(KeyCode::Enter));
        assert!(!app.should_quit);
        assert_eq!(app.status.as_deref(), Some("Store name is required."));
    }

    #[test]
    fn test_submit_requires_gate() {
        let mut app = ExpenseFormApp::from_draft(ExpenseDraft {
            store: "Aldi".to_string(),
            ..ExpenseDraft::new()
        });

        app.handle_key(key(KeyCode::Enter));
        assert!(!app.should_quit);
        assert!(app.status.is_some());
        assert!(app.into_draft().is_none());
    }

    #[test]
    fn test_full_entry_produces_draft() {
        let mut app = ExpenseFormApp::new();
        // Category -> Gas
        app.handle_key(key(KeyCode::Right));
        // Store
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Tab));
        type_str(&mut app, "Shell");
        // Item
        app.handle_key(ctrl('n'));
        type_str(&mut app, "Fuel");
        app.handle_key(key(KeyCode::Tab));
        type_str(&mut app, "41.50");

        app.handle_key(key(KeyCode::Enter));
        assert!(app.should_quit);

        let draft = app.into_draft().expect("form was submitted");
        assert_eq!(draft.category, "Gas");
        assert_eq!(draft.subcategory, "Regular");
        assert_eq!(draft.store, "Shell");
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.total(), 41.50);
    }

    #[test]
    fn test_escape_cancels_without_draft() {
        let mut app = ExpenseFormApp::new();
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);
        assert!(app.into_draft().is_none());
    }

    #[test]
    fn test_remove_item_moves_focus() {
        let mut app = ExpenseFormApp::new();
        app.handle_key(ctrl('n'));
        app.handle_key(ctrl('n'));
        assert_eq!(app.ledger.len(), 2);
        assert_eq!(app.focused, FormField::ItemName(1));

        app.handle_key(ctrl('d'));
        assert_eq!(app.ledger.len(), 1);
        assert_eq!(app.focused, FormField::ItemName(0));

        app.handle_key(ctrl('d'));
        assert!(app.ledger.is_empty());
        assert_eq!(app.focused, FormField::Store);
    }
}
