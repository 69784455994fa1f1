use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tui_snake::core::{GameConfig, GameState};
use tui_snake::input::{direction_from_key_code, handle_key_event, should_quit, InputCommand};
use tui_snake::types::{Cell, Direction};

fn steer(state: &mut GameState, key: KeyCode) -> bool {
    match handle_key_event(KeyEvent::from(key)) {
        Some(InputCommand::Steer(direction)) => state.request_direction(direction),
        _ => false,
    }
}

#[test]
fn arrow_keys_steer_the_snake() {
    let config = GameConfig::default()
        .with_board_size(6)
        .with_snake([Cell::new(3, 3), Cell::new(3, 2)], Direction::Right)
        .with_fruit(Cell::new(0, 0));
    let mut state = GameState::with_config(config).unwrap();
    state.start();

    assert!(!steer(&mut state, KeyCode::Left));
    assert!(steer(&mut state, KeyCode::Up));
    state.step();
    assert_eq!(state.head(), Cell::new(2, 3));

    assert!(!steer(&mut state, KeyCode::Char('x')));
    assert!(steer(&mut state, KeyCode::Char('a')));
    state.step();
    assert_eq!(state.head(), Cell::new(2, 2));
}

#[test]
fn raw_key_codes_outside_the_arrow_range_are_ignored() {
    let mapped: Vec<_> = (30..50).filter_map(direction_from_key_code).collect();
    assert_eq!(
        mapped,
        vec![Direction::Left, Direction::Up, Direction::Right, Direction::Down]
    );
}

#[test]
fn restart_and_quit_are_distinct_from_steering() {
    assert_eq!(
        handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
        Some(InputCommand::Restart)
    );
    assert!(!should_quit(KeyEvent::from(KeyCode::Char('r'))));
    assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Esc)), None);
}
