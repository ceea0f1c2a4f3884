//! Results persistence integration tests.
//!
//! `finish` is the one fallible operation in the engine: it writes a single
//! session file named from the session name and the wall clock, then tears
//! the sink down. These tests pin the file naming, the body format, and the
//! error surface.

use std::cell::Cell;
use std::fs;
use std::rc::Rc;

use typedrill::core::{Difficulty, GameError, ManualClock};
use typedrill::engine::GameBuilder;
use typedrill::render::{MemorySink, RenderSink};

/// A sink that only remembers whether `finish` ran, through a handle that
/// outlives the consumed engine.
struct TeardownSink {
    finished: Rc<Cell<bool>>,
}

impl RenderSink for TeardownSink {
    fn clear_board(&mut self) {}
    fn set_instructions(&mut self, _text: &str) {}
    fn render(&mut self, _lines: &[String]) {}
    fn move_cursor(&mut self, _line: usize, _col: usize) {}

    fn contents(&self) -> Vec<String> {
        Vec::new()
    }

    fn finish(&mut self) {
        self.finished.set(true);
    }
}

#[test]
fn test_finish_writes_one_stamped_file() {
    let dir = tempfile::tempdir().unwrap();
    let clock = ManualClock::starting_at(1_723_000_000_000);

    let mut game = GameBuilder::new()
        .name("kyle")
        .difficulty(Difficulty::Easy)
        .seed(42)
        .results_dir(dir.path())
        .clock(Box::new(clock.clone()))
        .build(MemorySink::new());

    game.state.record_result(3.2);
    game.state.record_result(1.0);
    game.state.record_result(2.5);

    let path = game.finish().unwrap();

    assert_eq!(
        path,
        dir.path().join("kyle-1723000000000.csv"),
        "file name must carry the session name and the epoch stamp"
    );
    assert_eq!(fs::read_to_string(&path).unwrap(), "3.2,\n1,\n2.5");

    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1, "finish writes exactly one file");
}

#[test]
fn test_finish_stamps_at_call_time() {
    let dir = tempfile::tempdir().unwrap();
    let clock = ManualClock::starting_at(1_000);

    let game = GameBuilder::new()
        .name("kyle")
        .seed(42)
        .results_dir(dir.path())
        .clock(Box::new(clock.clone()))
        .build(MemorySink::new());

    clock.advance(std::time::Duration::from_millis(250));
    let path = game.finish().unwrap();

    assert_eq!(path, dir.path().join("kyle-1250.csv"));
}

#[test]
fn test_finish_with_no_results_writes_an_empty_body() {
    let dir = tempfile::tempdir().unwrap();

    let game = GameBuilder::new()
        .name("kyle")
        .seed(42)
        .results_dir(dir.path())
        .clock(Box::new(ManualClock::new()))
        .build(MemorySink::new());

    let path = game.finish().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_finish_tears_the_sink_down() {
    let dir = tempfile::tempdir().unwrap();
    let finished = Rc::new(Cell::new(false));

    let game = GameBuilder::new()
        .name("kyle")
        .seed(42)
        .results_dir(dir.path())
        .clock(Box::new(ManualClock::new()))
        .build(TeardownSink {
            finished: Rc::clone(&finished),
        });

    game.finish().unwrap();

    assert!(finished.get());
}

#[test]
fn test_finish_surfaces_write_failures() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope").join("nested");

    let game = GameBuilder::new()
        .name("kyle")
        .seed(42)
        .results_dir(&missing)
        .clock(Box::new(ManualClock::new()))
        .build(MemorySink::new());

    let err = game.finish().unwrap_err();

    match err {
        GameError::ResultsWrite { path, .. } => {
            assert!(path.starts_with(&missing));
        }
        other => panic!("unexpected error: {other}"),
    }
}
