use std::marker::PhantomData;

use crossterm::event::{KeyCode, KeyEvent};
use promptgenius_core::Choice;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

/// Cursor over one lookup table. The cursor is separate from the selection:
/// moving never changes the form, `Space` does.
pub struct OptionList<C: Choice> {
    title: &'static str,
    list_state: ListState,
    describe: Option<fn(&C) -> &'static str>,
    _choice: PhantomData<C>,
}

impl<C: Choice> OptionList<C> {
    pub fn new(title: &'static str) -> Self {
        let mut list_state = ListState::default();
        if !C::ALL.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            title,
            list_state,
            describe: None,
            _choice: PhantomData,
        }
    }

    /// Show a second, dimmed line under each label.
    pub fn with_description(mut self, describe: fn(&C) -> &'static str) -> Self {
        self.describe = Some(describe);
        self
    }

    /// The entry under the cursor.
    pub fn highlighted(&self) -> Option<C> {
        let idx = self.list_state.selected()?;
        C::ALL.get(idx).copied()
    }

    /// Move the cursor onto `choice`.
    pub fn highlight(&mut self, choice: C) {
        self.list_state.select(Some(choice.index()));
    }

    /// Cursor movement. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let len = C::ALL.len();
        if len == 0 {
            return false;
        }
        let current = self.list_state.selected().unwrap_or(0);
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if current + 1 < len {
                    self.list_state.select(Some(current + 1));
                }
                true
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if current > 0 {
                    self.list_state.select(Some(current - 1));
                }
                true
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.list_state.select(Some(0));
                true
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.list_state.select(Some(len - 1));
                true
            }
            _ => false,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, selected: Option<C>, focused: bool) {
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(border_style);

        let items: Vec<ListItem> = C::ALL
            .iter()
            .enumerate()
            .map(|(i, choice)| {
                let is_selected = selected == Some(*choice);
                let marker = if is_selected { "(*) " } else { "( ) " };
                let label_style = if is_selected {
                    Style::default().fg(Color::Cyan).bold()
                } else {
                    Style::default()
                };
                let mut lines = vec![Line::from(vec![
                    Span::styled(format!("{} ", i + 1), Style::default().fg(Color::Yellow)),
                    Span::raw(marker),
                    Span::styled(choice.label(), label_style),
                ])];
                if let Some(describe) = self.describe {
                    lines.push(Line::from(Span::styled(
                        format!("      {}", describe(choice)),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                ListItem::new(lines)
            })
            .collect();

        let mut list = List::new(items).block(block);
        if focused {
            list = list
                .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan).bold())
                .highlight_symbol("> ");
        }

        let mut state = self.list_state.clone();
        frame.render_stateful_widget(list, area, &mut state);
    }
}
