//! State machine tests for the wizard App.
//!
//! Each test builds an App over a MockClipboard and drives it with key events.

use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use promptgenius_core::{Audience, Goal, OutputType, Tone, WizardStep};
use promptgenius_tui::app::{App, DetailField, Mode};
use promptgenius_tui::clipboard::MockClipboard;
use promptgenius_tui::config::AppConfig;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

fn make_app() -> App {
    App::new(Box::new(MockClipboard::new()), &AppConfig::default())
}

fn make_app_with(clipboard: MockClipboard) -> App {
    App::new(Box::new(clipboard), &AppConfig::default())
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(char_key(c));
    }
}

/// Pick the first entry on steps one and two and land on the description step.
fn reach_description(app: &mut App) {
    app.handle_key(char_key('1'));
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(char_key('1'));
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(char_key('1'));
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(char_key('1'));
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.step(), WizardStep::Description);
}

/// Drive the app through all three input steps with the dragon-logo answers.
fn complete_wizard(app: &mut App, now: Instant) {
    // Step 1: image is the first entry
    app.handle_key(char_key(' '));
    app.handle_key_at(key(KeyCode::Enter), now);
    // Step 2: create / casual / students
    app.handle_key(char_key('1'));
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(char_key('2'));
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(char_key('3'));
    app.handle_key_at(key(KeyCode::Enter), now);
    // Step 3
    type_text(app, "a dragon logo");
    app.handle_key_at(key(KeyCode::Enter), now);
}

fn render(app: &App) -> String {
    let backend = ratatui::backend::TestBackend::new(120, 40);
    let mut terminal = ratatui::Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    let buffer = terminal.backend().buffer().clone();
    buffer.content.iter().map(|c| c.symbol()).collect()
}

// ---- Step transitions ----

#[test]
fn app_starts_on_step_one() {
    let app = make_app();
    assert!(matches!(app.mode(), Mode::Wizard));
    assert_eq!(app.step(), WizardStep::OutputType);
    assert!(app.generated_prompt().is_none());
}

#[test]
fn enter_without_selection_stays() {
    let mut app = make_app();
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.step(), WizardStep::OutputType);
    assert_eq!(app.status_message(), Some("Select an output type to continue"));
}

#[test]
fn cursor_moves_without_selecting() {
    let mut app = make_app();
    app.handle_key(char_key('j'));
    app.handle_key(key(KeyCode::Down));
    assert_eq!(app.form().output_type, None);
    app.handle_key(char_key(' '));
    assert_eq!(app.form().output_type, Some(OutputType::Chat));
}

#[test]
fn digit_selects_output_type() {
    let mut app = make_app();
    app.handle_key(char_key('5'));
    assert_eq!(app.form().output_type, Some(OutputType::Video));
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.step(), WizardStep::Details);
}

#[test]
fn every_output_type_unlocks_step_one() {
    for n in 1..=5 {
        let mut app = make_app();
        app.handle_key(char_key(char::from_digit(n, 10).unwrap()));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.step(), WizardStep::Details);
    }
}

#[test]
fn details_tab_cycles_focus() {
    let mut app = make_app();
    app.handle_key(char_key('1'));
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.detail_focus(), DetailField::Goal);
    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.detail_focus(), DetailField::Tone);
    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.detail_focus(), DetailField::Audience);
    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.detail_focus(), DetailField::Goal);
    app.handle_key(key(KeyCode::BackTab));
    assert_eq!(app.detail_focus(), DetailField::Audience);
}

#[test]
fn details_need_all_three() {
    let mut app = make_app();
    app.handle_key(char_key('1'));
    app.handle_key(key(KeyCode::Enter));

    app.handle_key(char_key(' '));
    assert_eq!(app.form().goal, Some(Goal::Create));
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.step(), WizardStep::Details);

    app.handle_key(key(KeyCode::Tab));
    app.handle_key(char_key('j'));
    app.handle_key(char_key(' '));
    assert_eq!(app.form().tone, Some(Tone::Casual));
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.step(), WizardStep::Details);

    app.handle_key(key(KeyCode::Tab));
    app.handle_key(char_key('4'));
    assert_eq!(app.form().audience, Some(Audience::Experts));
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.step(), WizardStep::Description);
}

#[test]
fn esc_goes_back_and_keeps_answers() {
    let mut app = make_app();
    app.handle_key(char_key('2'));
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.step(), WizardStep::OutputType);
    assert_eq!(app.form().output_type, Some(OutputType::Ui));
}

#[test]
fn description_is_input_mode() {
    let mut app = make_app();
    assert!(!app.is_input_mode());
    reach_description(&mut app);
    assert!(app.is_input_mode());

    // q and ? are text here
    type_text(&mut app, "q?");
    assert_eq!(app.form().description, "q?");
    assert!(!app.is_quit_key(char_key('q')));
    assert!(matches!(app.mode(), Mode::Wizard));
}

#[test]
fn blank_description_cannot_generate() {
    let mut app = make_app();
    reach_description(&mut app);
    type_text(&mut app, "   ");
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.step(), WizardStep::Description);
    assert_eq!(app.status_message(), Some("Describe your needs to continue"));
    assert!(app.generated_prompt().is_none());
}

#[test]
fn description_editing_keys() {
    let mut app = make_app();
    reach_description(&mut app);
    type_text(&mut app, "ab");
    app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT));
    type_text(&mut app, "cd");
    app.handle_key(key(KeyCode::Backspace));
    app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
    assert_eq!(app.form().description, "ab\nc");
    assert_eq!(app.step(), WizardStep::Description);
}

#[test]
fn alt_chords_do_not_type() {
    let mut app = make_app();
    reach_description(&mut app);
    type_text(&mut app, "ab");
    app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
    app.handle_key(KeyEvent::new(
        KeyCode::Char('y'),
        KeyModifiers::ALT | KeyModifiers::SHIFT,
    ));
    // Shift alone still types
    app.handle_key(KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT));
    assert_eq!(app.form().description, "abC");
}

#[test]
fn esc_on_description_goes_back() {
    let mut app = make_app();
    reach_description(&mut app);
    type_text(&mut app, "draft");
    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.step(), WizardStep::Details);
    assert_eq!(app.form().description, "draft");
}

#[test]
fn generate_builds_prompt_and_celebrates() {
    let mut app = make_app();
    let t0 = Instant::now();
    complete_wizard(&mut app, t0);

    assert_eq!(app.step(), WizardStep::Prompt);
    let prompt = app.generated_prompt().unwrap().to_lowercase();
    assert!(prompt.contains("image generation specialist"));
    assert!(prompt.contains("create something new"));
    assert!(prompt.contains("a dragon logo"));
    assert!(prompt.contains("students & learners"));
    assert!(prompt.contains("maintain a casual & friendly approach"));

    assert!(app.is_celebrating_at(t0));
    assert!(app.needs_polling());
    app.tick(t0 + Duration::from_millis(3000));
    assert!(!app.is_celebrating_at(t0 + Duration::from_millis(3000)));
    assert!(!app.needs_polling());
}

#[test]
fn prompt_step_has_no_way_back() {
    let mut app = make_app();
    complete_wizard(&mut app, Instant::now());
    app.handle_key(key(KeyCode::Esc));
    app.handle_key(key(KeyCode::Backspace));
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.step(), WizardStep::Prompt);
}

#[test]
fn step_stays_in_range_under_key_mashing() {
    let mut app = make_app();
    let keys = [
        key(KeyCode::Enter),
        key(KeyCode::Esc),
        char_key('3'),
        key(KeyCode::Tab),
        char_key('x'),
        key(KeyCode::Backspace),
    ];
    for i in 0..300 {
        app.handle_key(keys[i % keys.len()]);
        if matches!(app.mode(), Mode::About { .. }) {
            app.handle_key(key(KeyCode::Esc));
        }
        let n = app.step().number();
        assert!((1..=4).contains(&n), "step {n} out of range");
    }
}

// ---- Clipboard ----

#[test]
fn copy_sets_indicator_for_two_seconds() {
    let clipboard = MockClipboard::new();
    let mut app = make_app_with(clipboard.clone());
    let t0 = Instant::now();
    complete_wizard(&mut app, t0);

    app.handle_key_at(char_key('c'), t0);
    assert_eq!(clipboard.writes().len(), 1);
    assert_eq!(clipboard.writes()[0], app.generated_prompt().unwrap());
    assert!(app.is_copied_at(t0));
    assert!(app.is_copied_at(t0 + Duration::from_millis(1999)));
    assert!(!app.is_copied_at(t0 + Duration::from_millis(2000)));

    app.tick(t0 + Duration::from_millis(3500));
    assert!(!app.needs_polling());
}

#[test]
fn second_copy_rearms_indicator() {
    let clipboard = MockClipboard::new();
    let mut app = make_app_with(clipboard.clone());
    let t0 = Instant::now();
    complete_wizard(&mut app, t0);

    app.handle_key_at(char_key('c'), t0);
    app.handle_key_at(char_key('c'), t0 + Duration::from_millis(1500));
    assert_eq!(clipboard.writes().len(), 2);
    assert!(app.is_copied_at(t0 + Duration::from_millis(3000)));
}

#[test]
fn copy_before_generate_does_nothing() {
    let clipboard = MockClipboard::new();
    let mut app = make_app_with(clipboard.clone());
    app.handle_key(char_key('c'));
    assert!(clipboard.writes().is_empty());
    assert!(!app.is_copied_at(Instant::now()));
}

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn failed_copy_logs_and_leaves_indicator_down() {
    let logs = SharedBuf::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let clipboard = MockClipboard::new().with_failure();
    let mut app = make_app_with(clipboard.clone());
    let t0 = Instant::now();

    tracing::subscriber::with_default(subscriber, || {
        complete_wizard(&mut app, t0);
        app.handle_key_at(char_key('c'), t0);
    });

    assert!(!app.is_copied_at(t0));
    assert!(clipboard.writes().is_empty());
    assert!(app.status_message().is_none());

    let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("ERROR"));
    assert!(output.contains("failed to copy text"));
}

// ---- About page ----

#[test]
fn question_mark_opens_about_and_esc_returns() {
    let mut app = make_app();
    app.handle_key(char_key('3'));
    app.handle_key(char_key('?'));
    assert!(matches!(app.mode(), Mode::About { scroll: 0 }));
    app.handle_key(char_key('j'));
    assert!(matches!(app.mode(), Mode::About { scroll: 1 }));
    app.handle_key(key(KeyCode::Esc));
    assert!(matches!(app.mode(), Mode::Wizard));
    assert_eq!(app.form().output_type, Some(OutputType::Chat));
}

#[test]
fn q_leaves_about_instead_of_quitting() {
    let mut app = make_app();
    app.handle_key(char_key('?'));
    assert!(!app.is_quit_key(char_key('q')));
    app.handle_key(char_key('q'));
    assert!(matches!(app.mode(), Mode::Wizard));
    assert!(app.is_quit_key(char_key('q')));
}

#[test]
fn ctrl_c_always_quits() {
    let mut app = make_app();
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(app.is_quit_key(ctrl_c));
    complete_wizard(&mut app, Instant::now());
    assert!(app.is_quit_key(ctrl_c));
}

// ---- Render smoke tests ----

#[test]
fn render_step_one() {
    let app = make_app();
    let screen = render(&app);
    assert!(screen.contains("Prompt Genius Hub"));
    assert!(screen.contains("Step 1 of 4"));
    assert!(screen.contains("Image Generation"));
}

#[test]
fn render_step_two() {
    let mut app = make_app();
    app.handle_key(char_key('1'));
    app.handle_key(key(KeyCode::Enter));
    let screen = render(&app);
    assert!(screen.contains("Step 2 of 4"));
    assert!(screen.contains("Persuasive & Compelling"));
    assert!(screen.contains("Subject Matter Experts"));
}

#[test]
fn render_step_three_placeholder() {
    let mut app = make_app();
    reach_description(&mut app);
    let screen = render(&app);
    assert!(screen.contains("Project Description"));
    assert!(screen.contains("Describe what you want to create"));
}

#[test]
fn render_prompt_step() {
    let mut app = make_app();
    complete_wizard(&mut app, Instant::now());
    let screen = render(&app);
    assert!(screen.contains("Step 4 of 4"));
    assert!(screen.contains("Copy Prompt"));
    assert!(screen.contains("a dragon logo"));
}

#[test]
fn render_copied_indicator() {
    let mut app = make_app();
    complete_wizard(&mut app, Instant::now());
    app.handle_key(char_key('c'));
    let screen = render(&app);
    assert!(screen.contains("Copied!"));
}

#[test]
fn render_about_page() {
    let mut app = make_app();
    app.handle_key(char_key('?'));
    let screen = render(&app);
    assert!(screen.contains("About Prompt Genius Hub"));
    assert!(screen.contains("Our Mission"));
}

#[test]
fn render_tiny_terminal_does_not_panic() {
    let mut app = make_app();
    complete_wizard(&mut app, Instant::now());
    let backend = ratatui::backend::TestBackend::new(10, 4);
    let mut terminal = ratatui::Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
}
