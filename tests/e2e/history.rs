use crate::common::harness::ShellTestHarness;
use brine::config::Config;
use crossterm::event::{KeyCode, KeyModifiers};

fn up(harness: &mut ShellTestHarness) {
    harness.send_key(KeyCode::Up, KeyModifiers::NONE).unwrap();
}

fn down(harness: &mut ShellTestHarness) {
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
}

#[test]
fn up_recalls_most_recent_then_older() {
    let mut harness = ShellTestHarness::new(60, 8).unwrap();
    harness.submit_line("echo one").unwrap();
    harness.submit_line("echo two").unwrap();

    up(&mut harness);
    assert_eq!(harness.shell().line().text(), "echo two");
    up(&mut harness);
    assert_eq!(harness.shell().line().text(), "echo one");
    // At the oldest entry further presses change nothing.
    up(&mut harness);
    assert_eq!(harness.shell().line().text(), "echo one");
}

#[test]
fn recalled_entry_is_shown_with_cursor_at_end() {
    let mut harness = ShellTestHarness::new(60, 8).unwrap();
    harness.submit_line("greet ada").unwrap();

    up(&mut harness);
    // Prompt row sits below the two scrollback rows (prompt echo + output).
    assert_eq!(harness.row_text(2), "brine$ greet ada");
    assert_eq!(harness.cursor(), (2, 16));
}

#[test]
fn down_walks_back_toward_newest_then_clears() {
    let mut harness = ShellTestHarness::new(60, 8).unwrap();
    harness.submit_line("echo one").unwrap();
    harness.submit_line("echo two").unwrap();

    up(&mut harness);
    up(&mut harness);
    down(&mut harness);
    assert_eq!(harness.shell().line().text(), "echo two");
    // Walking past the newest entry clears the line and ends the session.
    down(&mut harness);
    assert_eq!(harness.shell().line().text(), "");
    assert!(!harness.shell().history().is_browsing());
    // Another down is a no-op when not browsing.
    down(&mut harness);
    assert_eq!(harness.shell().line().text(), "");
}

#[test]
fn down_without_browsing_is_a_noop() {
    let mut harness = ShellTestHarness::new(60, 8).unwrap();
    harness.submit_line("echo one").unwrap();
    harness.type_text("draft").unwrap();
    down(&mut harness);
    assert_eq!(harness.shell().line().text(), "draft");
}

#[test]
fn editing_restarts_browsing_from_most_recent() {
    let mut harness = ShellTestHarness::new(60, 8).unwrap();
    harness.submit_line("echo one").unwrap();
    harness.submit_line("echo two").unwrap();

    up(&mut harness);
    up(&mut harness);
    assert_eq!(harness.shell().line().text(), "echo one");

    // A direct edit ends the session...
    harness.type_text("!").unwrap();
    assert!(!harness.shell().history().is_browsing());

    // ...so the next Up starts over at the most recent entry.
    up(&mut harness);
    assert_eq!(harness.shell().line().text(), "echo two");
}

#[test]
fn recalling_does_not_mutate_stored_entries() {
    let mut harness = ShellTestHarness::new(60, 8).unwrap();
    harness.submit_line("echo original").unwrap();

    up(&mut harness);
    harness.type_text(" edited").unwrap();
    harness.send_key(KeyCode::Esc, KeyModifiers::NONE).unwrap();

    up(&mut harness);
    assert_eq!(harness.shell().line().text(), "echo original");
}

#[test]
fn empty_submissions_never_enter_history() {
    let mut harness = ShellTestHarness::new(60, 8).unwrap();
    harness.submit_line("echo kept").unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();

    up(&mut harness);
    assert_eq!(harness.shell().line().text(), "echo kept");
}

#[test]
fn ring_capacity_evicts_oldest_entries() {
    let config = Config {
        history_capacity: 3,
        ..Config::default()
    };
    let mut harness = ShellTestHarness::with_config(config, 60, 20).unwrap();
    for i in 0..5 {
        harness.submit_line(&format!("echo cmd{i}")).unwrap();
    }

    let entries: Vec<_> = harness.shell().history().entries().collect();
    assert_eq!(entries, vec!["echo cmd2", "echo cmd3", "echo cmd4"]);

    // Walking up past the oldest surviving entry stops there.
    for _ in 0..10 {
        up(&mut harness);
    }
    assert_eq!(harness.shell().line().text(), "echo cmd2");
}
