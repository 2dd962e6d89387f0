use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use promptgenius_core::about::{ABOUT, PRODUCT_NAME};
use promptgenius_core::{Audience, Choice, FormState, Goal, OutputType, Tone, WizardStep};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tracing::{debug, error, info};

use crate::clipboard::Clipboard;
use crate::components::about_view;
use crate::components::option_list::OptionList;
use crate::config::AppConfig;
use crate::indicator::TimedIndicator;
use crate::wizard::{Transition, Wizard};

const DESCRIPTION_PLACEHOLDER: &str = "Describe what you want to create, any specific requirements, \
                                       style preferences, or constraints...";

/// Which screen is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// The four-step wizard
    Wizard,
    /// Static about page, scrollable
    About { scroll: u16 },
}

/// The focused picker on the details step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailField {
    Goal,
    Tone,
    Audience,
}

impl DetailField {
    fn next(self) -> Self {
        match self {
            DetailField::Goal => DetailField::Tone,
            DetailField::Tone => DetailField::Audience,
            DetailField::Audience => DetailField::Goal,
        }
    }

    fn prev(self) -> Self {
        match self {
            DetailField::Goal => DetailField::Audience,
            DetailField::Tone => DetailField::Goal,
            DetailField::Audience => DetailField::Tone,
        }
    }
}

pub struct App {
    wizard: Wizard,
    mode: Mode,
    output_types: OptionList<OutputType>,
    goals: OptionList<Goal>,
    tones: OptionList<Tone>,
    audiences: OptionList<Audience>,
    detail_focus: DetailField,
    prompt_scroll: u16,
    clipboard: Box<dyn Clipboard>,
    copied: TimedIndicator,
    celebration: TimedIndicator,
    status_message: Option<String>,
}

impl App {
    pub fn new(clipboard: Box<dyn Clipboard>, config: &AppConfig) -> Self {
        Self {
            wizard: Wizard::new(),
            mode: Mode::Wizard,
            output_types: OptionList::new("Output Type").with_description(OutputType::description),
            goals: OptionList::new("What's your goal?"),
            tones: OptionList::new("What tone do you prefer?"),
            audiences: OptionList::new("Who's your audience?"),
            detail_focus: DetailField::Goal,
            prompt_scroll: 0,
            clipboard,
            copied: TimedIndicator::new(config.copied_for),
            celebration: TimedIndicator::new(config.celebrate_for),
            status_message: None,
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn step(&self) -> WizardStep {
        self.wizard.step()
    }

    pub fn form(&self) -> &FormState {
        self.wizard.form()
    }

    pub fn generated_prompt(&self) -> Option<&str> {
        self.wizard.generated_prompt()
    }

    pub fn detail_focus(&self) -> DetailField {
        self.detail_focus
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// True while keystrokes are typed into the description.
    pub fn is_input_mode(&self) -> bool {
        self.mode == Mode::Wizard && self.wizard.step() == WizardStep::Description
    }

    /// Ctrl+C always quits; `q` quits from the wizard unless typing.
    pub fn is_quit_key(&self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }
        key.code == KeyCode::Char('q') && self.mode == Mode::Wizard && !self.is_input_mode()
    }

    /// Returns true if the event loop should use a poll timeout so timed
    /// indicators can drop.
    pub fn needs_polling(&self) -> bool {
        self.copied.is_armed() || self.celebration.is_armed()
    }

    /// Drop any indicator whose time is up.
    pub fn tick(&mut self, now: Instant) {
        if self.copied.expire(now) {
            debug!("copied indicator cleared");
        }
        self.celebration.expire(now);
    }

    pub fn is_copied_at(&self, now: Instant) -> bool {
        self.copied.is_raised(now)
    }

    pub fn is_celebrating_at(&self, now: Instant) -> bool {
        self.celebration.is_raised(now)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.handle_key_at(key, Instant::now());
    }

    /// Handle a key as if it arrived at `now`.
    pub fn handle_key_at(&mut self, key: KeyEvent, now: Instant) {
        self.status_message = None;

        if let Mode::About { scroll } = self.mode {
            self.handle_about(key, scroll);
            return;
        }

        if key.code == KeyCode::Char('?') && !self.is_input_mode() {
            self.mode = Mode::About { scroll: 0 };
            return;
        }

        match self.wizard.step() {
            WizardStep::OutputType => self.handle_output_type(key, now),
            WizardStep::Details => self.handle_details(key, now),
            WizardStep::Description => self.handle_description(key, now),
            WizardStep::Prompt => self.handle_prompt(key, now),
        }
    }

    fn handle_about(&mut self, key: KeyEvent, scroll: u16) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => self.mode = Mode::Wizard,
            KeyCode::Char('j') | KeyCode::Down => {
                self.mode = Mode::About {
                    scroll: scroll.saturating_add(1),
                };
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.mode = Mode::About {
                    scroll: scroll.saturating_sub(1),
                };
            }
            _ => {}
        }
    }

    fn handle_output_type(&mut self, key: KeyEvent, now: Instant) {
        if self.output_types.handle_key(key) {
            return;
        }
        match key.code {
            KeyCode::Char(' ') => {
                if let Some(choice) = self.output_types.highlighted() {
                    self.wizard.form_mut().output_type = Some(choice);
                }
            }
            KeyCode::Char(c) => {
                if let Some(choice) = choice_for_digit::<OutputType>(c) {
                    self.output_types.highlight(choice);
                    self.wizard.form_mut().output_type = Some(choice);
                }
            }
            KeyCode::Enter => self.advance(now),
            _ => {}
        }
    }

    fn handle_details(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                self.detail_focus = self.detail_focus.next();
                return;
            }
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                self.detail_focus = self.detail_focus.prev();
                return;
            }
            KeyCode::Enter => {
                self.advance(now);
                return;
            }
            KeyCode::Esc => {
                self.wizard.retreat();
                return;
            }
            _ => {}
        }

        let form = self.wizard.form_mut();
        match self.detail_focus {
            DetailField::Goal => pick(&mut self.goals, &mut form.goal, key),
            DetailField::Tone => pick(&mut self.tones, &mut form.tone, key),
            DetailField::Audience => pick(&mut self.audiences, &mut form.audience, key),
        }
    }

    fn handle_description(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
                self.wizard.form_mut().description.push('\n');
            }
            KeyCode::Enter => self.advance(now),
            KeyCode::Esc => {
                self.wizard.retreat();
            }
            KeyCode::Backspace => {
                self.wizard.form_mut().description.pop();
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.wizard.form_mut().description.push(c);
            }
            _ => {}
        }
    }

    fn handle_prompt(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('c') => self.copy_prompt(now),
            KeyCode::Char('j') | KeyCode::Down => {
                self.prompt_scroll = self.prompt_scroll.saturating_add(1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.prompt_scroll = self.prompt_scroll.saturating_sub(1);
            }
            _ => {}
        }
    }

    fn advance(&mut self, now: Instant) {
        let step = self.wizard.step();
        match self.wizard.advance() {
            Ok(Transition::Generated) => {
                self.prompt_scroll = 0;
                self.copied.clear();
                self.celebration.raise(now);
                self.status_message = Some("Prompt generated".into());
            }
            Ok(Transition::Moved(_)) => {}
            Ok(Transition::Stayed) => {
                self.status_message = Some(incomplete_hint(step).into());
            }
            Err(e) => {
                error!("prompt generation failed: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Hand the prompt to the clipboard. Failure is logged and leaves the
    /// copied indicator down; there is no retry.
    fn copy_prompt(&mut self, now: Instant) {
        let Some(prompt) = self.wizard.generated_prompt() else {
            return;
        };
        match self.clipboard.write_text(prompt) {
            Ok(()) => {
                info!("copied prompt via {}", self.clipboard.name());
                self.copied.raise(now);
            }
            Err(e) => {
                error!("failed to copy text: {e}");
                self.copied.clear();
            }
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let now = Instant::now();
        let area = frame.area();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_title_bar(frame, layout[0]);
        match &self.mode {
            Mode::About { scroll } => {
                about_view::render(frame, &ABOUT, *scroll, layout[1].union(layout[2]));
            }
            Mode::Wizard => {
                self.render_progress(frame, layout[1], now);
                self.render_step(frame, layout[2], now);
            }
        }
        self.render_status_bar(frame, layout[3]);
    }

    fn render_title_bar(&self, frame: &mut Frame, area: Rect) {
        let page = match self.mode {
            Mode::Wizard => "Generate a Prompt",
            Mode::About { .. } => "About",
        };
        let title = Line::from(vec![
            Span::styled(format!(" {PRODUCT_NAME} "), Style::default().bold().fg(Color::Cyan)),
            Span::raw("| "),
            Span::styled(page, Style::default().fg(Color::Yellow)),
        ]);
        frame.render_widget(title, area);
    }

    fn render_progress(&self, frame: &mut Frame, area: Rect, now: Instant) {
        let current = self.wizard.step();
        let reached = Style::default().fg(Color::Cyan).bold();
        let pending = Style::default().fg(Color::DarkGray);

        let mut dots: Vec<Span> = Vec::new();
        for &step in WizardStep::ALL {
            let style = if step <= current { reached } else { pending };
            dots.push(Span::styled(format!("({})", step.number()), style));
            if !step.is_terminal() {
                let bar_style = if step < current { reached } else { pending };
                dots.push(Span::styled("──", bar_style));
            }
        }

        let mut lines = vec![
            Line::from(dots).centered(),
            Line::from(Span::styled(current.to_string(), Style::default().fg(Color::Gray)))
                .centered(),
        ];
        if self.celebration.is_raised(now) {
            lines.push(
                Line::from(Span::styled(
                    "✨ Your prompt is ready! ✨",
                    Style::default().fg(Color::Magenta).bold(),
                ))
                .centered(),
            );
        }
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_step(&self, frame: &mut Frame, area: Rect, now: Instant) {
        let step = self.wizard.step();
        let block = Block::default()
            .title(format!(" {} ", step.heading()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);

        frame.render_widget(
            Line::from(Span::styled(step.subheading(), Style::default().fg(Color::Gray))),
            chunks[0],
        );

        let form = self.wizard.form();
        match step {
            WizardStep::OutputType => {
                self.output_types
                    .render(frame, chunks[1], form.output_type, true);
            }
            WizardStep::Details => {
                let cols = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([
                        Constraint::Ratio(1, 3),
                        Constraint::Ratio(1, 3),
                        Constraint::Ratio(1, 3),
                    ])
                    .split(chunks[1]);
                self.goals.render(
                    frame,
                    cols[0],
                    form.goal,
                    self.detail_focus == DetailField::Goal,
                );
                self.tones.render(
                    frame,
                    cols[1],
                    form.tone,
                    self.detail_focus == DetailField::Tone,
                );
                self.audiences.render(
                    frame,
                    cols[2],
                    form.audience,
                    self.detail_focus == DetailField::Audience,
                );
            }
            WizardStep::Description => self.render_description(frame, form, chunks[1]),
            WizardStep::Prompt => self.render_prompt(frame, chunks[1], now),
        }
    }

    fn render_description(&self, frame: &mut Frame, form: &FormState, area: Rect) {
        let block = Block::default()
            .title(" Project Description ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let paragraph = if form.description.is_empty() {
            Paragraph::new(Span::styled(
                DESCRIPTION_PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Paragraph::new(format!("{}_", form.description))
        };
        frame.render_widget(paragraph.block(block).wrap(Wrap { trim: false }), area);
    }

    fn render_prompt(&self, frame: &mut Frame, area: Rect, now: Instant) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let prompt = self.wizard.generated_prompt().unwrap_or("(no prompt generated)");
        let paragraph = Paragraph::new(prompt)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .wrap(Wrap { trim: false })
            .scroll((self.prompt_scroll, 0));
        frame.render_widget(paragraph, chunks[0]);

        let copy_line = if self.copied.is_raised(now) {
            Line::from(Span::styled(
                "✓ Copied!",
                Style::default().fg(Color::Green).bold(),
            ))
        } else {
            Line::from(vec![
                Span::styled("[c] ", Style::default().fg(Color::Yellow).bold()),
                Span::raw("Copy Prompt"),
            ])
        };
        frame.render_widget(copy_line.centered(), chunks[1]);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        if let Some(ref msg) = self.status_message {
            let line = Line::from(Span::styled(
                format!(" {msg}"),
                Style::default().fg(Color::Green),
            ));
            frame.render_widget(line, area);
            return;
        }

        let hints = match (&self.mode, self.wizard.step()) {
            (Mode::About { .. }, _) => vec![("j/k", "scroll"), ("Esc", "back")],
            (Mode::Wizard, WizardStep::OutputType) => vec![
                ("j/k", "move"),
                ("Space", "select"),
                ("1-5", "pick"),
                ("Enter", "next"),
                ("?", "about"),
                ("q", "quit"),
            ],
            (Mode::Wizard, WizardStep::Details) => vec![
                ("Tab", "field"),
                ("j/k", "move"),
                ("Space", "select"),
                ("Enter", "next"),
                ("Esc", "back"),
                ("?", "about"),
                ("q", "quit"),
            ],
            (Mode::Wizard, WizardStep::Description) => vec![
                ("Enter", "generate"),
                ("Alt+Enter", "newline"),
                ("Esc", "back"),
                ("Ctrl+C", "quit"),
            ],
            (Mode::Wizard, WizardStep::Prompt) => vec![
                ("c", "copy"),
                ("j/k", "scroll"),
                ("?", "about"),
                ("q", "quit"),
            ],
        };

        let spans: Vec<Span> = hints
            .into_iter()
            .flat_map(|(key, desc)| {
                vec![
                    Span::styled(format!(" {key}"), Style::default().fg(Color::Yellow).bold()),
                    Span::raw(format!(" {desc} ")),
                ]
            })
            .collect();

        frame.render_widget(Line::from(spans), area);
    }
}

/// Cursor keys move, Space or a digit selects into `slot`.
fn pick<C: Choice>(list: &mut OptionList<C>, slot: &mut Option<C>, key: KeyEvent) {
    if list.handle_key(key) {
        return;
    }
    match key.code {
        KeyCode::Char(' ') => {
            if let Some(choice) = list.highlighted() {
                *slot = Some(choice);
            }
        }
        KeyCode::Char(c) => {
            if let Some(choice) = choice_for_digit::<C>(c) {
                list.highlight(choice);
                *slot = Some(choice);
            }
        }
        _ => {}
    }
}

/// `'1'` picks the first entry of the table, and so on.
fn choice_for_digit<C: Choice>(c: char) -> Option<C> {
    let n = c.to_digit(10)? as usize;
    C::ALL.get(n.checked_sub(1)?).copied()
}

fn incomplete_hint(step: WizardStep) -> &'static str {
    match step {
        WizardStep::OutputType => "Select an output type to continue",
        WizardStep::Details => "Select a goal, tone and audience to continue",
        WizardStep::Description => "Describe your needs to continue",
        WizardStep::Prompt => "Your prompt is ready",
    }
}
