use super::*;
use crate::app::action::Action;
use crate::app::command::Command;
use crate::app::state::AppState;
use crate::domain::models::{Command as SlashCommand, CommandGroup, CommandId};
use crate::domain::source::{CommandSource, MockCommandSource};
use crate::infrastructure::BuiltinCatalog;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use tokio::sync::mpsc;

fn heading_group() -> CommandGroup {
    CommandGroup {
        category: "Basic blocks".to_string(),
        commands: vec![SlashCommand {
            id: CommandId("heading_1".to_string()),
            title: "Heading 1".to_string(),
            description: "Big section heading.".to_string(),
            icon: "heading-1".to_string(),
            keywords: vec!["h1".to_string()],
        }],
    }
}

#[tokio::test]
async fn test_handle_command_error_propagation() {
    let mut mock = MockCommandSource::new();

    // Simulate an unreachable endpoint
    mock.expect_search()
        .with(mockall::predicate::eq("he"))
        .returning(|_| Err(anyhow::anyhow!("connection refused")));

    let source = Arc::new(mock);
    let (tx, mut rx) = mpsc::channel(1);

    handle_command(
        Command::Search {
            query: "he".to_string(),
            generation: 7,
        },
        source,
        tx,
    )
    .unwrap();

    let action = rx.recv().await.unwrap();
    if let Action::CommandsLoaded { generation, result } = action {
        assert_eq!(generation, 7);
        assert!(result.unwrap_err().contains("connection refused"));
    } else {
        panic!("Expected Action::CommandsLoaded, got {action:?}");
    }
}

#[tokio::test]
async fn test_handle_command_success() {
    let mut mock = MockCommandSource::new();
    mock.expect_search()
        .with(mockall::predicate::eq("h1"))
        .returning(|_| Ok(vec![heading_group()]));

    let source = Arc::new(mock);
    let (tx, mut rx) = mpsc::channel(1);

    handle_command(
        Command::Search {
            query: "h1".to_string(),
            generation: 1,
        },
        source,
        tx,
    )
    .unwrap();

    let action = rx.recv().await.unwrap();
    assert_eq!(
        action,
        Action::CommandsLoaded {
            generation: 1,
            result: Ok(vec![heading_group()]),
        }
    );
}

#[tokio::test]
async fn test_full_search_round_trip_to_state() {
    let mut mock = MockCommandSource::new();
    mock.expect_search().returning(|_| Ok(vec![heading_group()]));

    let source: Arc<dyn CommandSource> = Arc::new(mock);
    let (tx, mut rx) = mpsc::channel(4);
    let mut state = AppState::default();

    let mut commands = Vec::new();
    for c in "/h1".chars() {
        let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        commands.extend(crate::app::reducer::update(&mut state, Action::EditorInput(key)));
    }
    assert_eq!(commands.len(), 3);

    // Only the answer to the last query may land.
    for command in commands {
        handle_command(command, source.clone(), tx.clone()).unwrap();
    }
    for _ in 0..3 {
        let action = rx.recv().await.unwrap();
        crate::app::reducer::update(&mut state, action);
    }
    assert_eq!(state.slash.total(), 1);
    assert!(!state.slash.loading);

    crate::app::reducer::update(&mut state, Action::SlashSelect);
    assert_eq!(state.editor.text(), "[Heading 1] ");
    assert!(!state.is_slash_open());
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    let mut mock = MockCommandSource::new();
    mock.expect_search()
        .returning(|query| Ok(BuiltinCatalog.search_sync(query)));

    let source = Arc::new(mock);
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let app_state = AppState::default();

    let (event_tx, event_rx) = mpsc::channel(100);

    // Spawn a task to feed random events
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..10000 {
            let event = match rng.gen_range(0..100) {
                0..=5 => {
                    let w = rng.gen_range(10..200);
                    let h = rng.gen_range(10..100);
                    Event::Resize(w, h)
                }
                6..=15 => generate_random_mouse(&mut rng, ratatui::layout::Size::new(80, 24)),
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            // Yield to allow the loop to process events
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
        }
        // Send Quit
        let _ = event_tx
            .send(Ok(Event::Key(KeyEvent::new(
                KeyCode::Char('q'),
                KeyModifiers::CONTROL,
            ))))
            .await;
    });

    // Run the real loop (with a test backend)
    let result = tokio::time::timeout(
        std::time::Duration::from_secs(30),
        run_loop_with_events(&mut terminal, app_state, source, event_rx),
    )
    .await;

    match result {
        Ok(res) => res.unwrap(),
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    fuzzer_handle.await.unwrap();
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    let code = match rng.gen_range(0..20) {
        0 => KeyCode::Esc,
        1 => KeyCode::Enter,
        2 => KeyCode::Left,
        3 => KeyCode::Right,
        4 => KeyCode::Up,
        5 => KeyCode::Down,
        6 => KeyCode::Home,
        7 => KeyCode::End,
        8 => KeyCode::Tab,
        9 => KeyCode::Backspace,
        10..=12 => KeyCode::Char('/'),
        13 => KeyCode::Char(' '),
        _ => {
            let c = rng.gen_range(b' '..=b'~') as char;
            KeyCode::Char(c)
        }
    };

    let mut modifiers = KeyModifiers::empty();
    // Ctrl-Q would end the run early.
    if rng.gen_bool(0.1) && code != KeyCode::Char('q') {
        modifiers.insert(KeyModifiers::CONTROL);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::ALT);
    }

    Event::Key(KeyEvent::new(code, modifiers))
}

fn generate_random_mouse<R: Rng>(rng: &mut R, size: ratatui::layout::Size) -> Event {
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    let kind = match rng.gen_range(0..5) {
        0 => MouseEventKind::Down(MouseButton::Left),
        1 => MouseEventKind::Down(MouseButton::Right),
        2 => MouseEventKind::ScrollUp,
        3 => MouseEventKind::ScrollDown,
        _ => MouseEventKind::Moved,
    };

    let column = rng.gen_range(0..size.width);
    let row = rng.gen_range(0..size.height);

    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}
