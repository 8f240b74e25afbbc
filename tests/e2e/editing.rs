use crate::common::harness::ShellTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

/// Typing renders the prompt plus the typed text on the input row.
#[test]
fn typing_renders_on_input_row() {
    let mut harness = ShellTestHarness::new(60, 6).unwrap();
    assert_eq!(harness.row_text(0), "brine$");

    harness.type_text("greet ada").unwrap();
    assert_eq!(harness.row_text(0), "brine$ greet ada");
    // Cursor sits right after the typed text: prompt width 7 + 9 chars.
    assert_eq!(harness.cursor(), (0, 16));
}

#[test]
fn backspace_removes_last_char() {
    let mut harness = ShellTestHarness::new(60, 6).unwrap();
    harness.type_text("echoo").unwrap();
    harness
        .send_key(KeyCode::Backspace, KeyModifiers::NONE)
        .unwrap();
    assert_eq!(harness.row_text(0), "brine$ echo");
    assert_eq!(harness.cursor(), (0, 11));
}

#[test]
fn backspace_on_empty_line_changes_nothing() {
    let mut harness = ShellTestHarness::new(60, 6).unwrap();
    harness
        .send_key(KeyCode::Backspace, KeyModifiers::NONE)
        .unwrap();
    assert_eq!(harness.row_text(0), "brine$");
    assert_eq!(harness.cursor(), (0, 7));
}

#[test]
fn arrows_move_cursor_and_insert_mid_line() {
    let mut harness = ShellTestHarness::new(60, 6).unwrap();
    harness.type_text("held").unwrap();
    harness.send_key(KeyCode::Left, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Left, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.cursor(), (0, 9));

    harness.type_text("l").unwrap();
    assert_eq!(harness.row_text(0), "brine$ helld");

    // Right arrow past the end is a no-op, not an error.
    for _ in 0..10 {
        harness
            .send_key(KeyCode::Right, KeyModifiers::NONE)
            .unwrap();
    }
    assert_eq!(harness.cursor(), (0, 12));
}

#[test]
fn escape_discards_the_line() {
    let mut harness = ShellTestHarness::new(60, 6).unwrap();
    harness.type_text("doomed command").unwrap();
    harness.send_key(KeyCode::Esc, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.row_text(0), "brine$");
    assert_eq!(harness.cursor(), (0, 7));
    assert_eq!(harness.shell().scrollback().len(), 0);
}

/// Submitting an empty line advances the prompt row but records nothing.
#[test]
fn empty_submit_advances_prompt_row() {
    let mut harness = ShellTestHarness::new(60, 6).unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.row_text(0), "brine$");
    assert_eq!(harness.row_text(1), "brine$");
    assert_eq!(harness.cursor(), (1, 7));
    assert_eq!(harness.shell().history().len(), 0);
    assert_eq!(harness.shell().scrollback().len(), 1);
}

#[test]
fn ctrl_q_quits_the_session() {
    let mut harness = ShellTestHarness::new(60, 6).unwrap();
    harness.type_text("unfinished").unwrap();
    harness
        .send_key(KeyCode::Char('q'), KeyModifiers::CONTROL)
        .unwrap();
    assert!(harness.should_quit());
    // No further mutation: the line is still there.
    assert_eq!(harness.shell().line().text(), "unfinished");
}

#[test]
fn resize_repaints_the_viewport() {
    let mut harness = ShellTestHarness::new(60, 6).unwrap();
    harness.submit_line("echo before resize").unwrap();
    harness.type_text("still here").unwrap();
    harness.resize(50, 8).unwrap();
    harness.assert_screen_contains("before resize");
    harness.assert_screen_contains("brine$ still here");
}

#[test]
fn long_input_is_truncated_at_the_right_edge() {
    let mut harness = ShellTestHarness::new(20, 4).unwrap();
    harness.type_text("0123456789012345678901234").unwrap();
    // No wrapping: the row holds width-many characters.
    assert_eq!(harness.row_text(0), "brine$ 0123456789012");
    // Cursor is clamped to the last column.
    assert_eq!(harness.cursor(), (0, 19));
}
