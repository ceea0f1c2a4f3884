//! The `Game` engine: round selection, the render cycle, the timer, and
//! result persistence.
//!
//! ## Round Lifecycle
//!
//! `Idle` → `RoundStarting` (`start_round`: select, clear board, post
//! instructions) → `RoundRunning` (`run`: render content, post-render, arm
//! timer for timed rounds) → `RoundEvaluating` (caller polls `check_for_win`
//! / `has_failed`) → back to `RoundStarting`, or `SessionEnding` (`finish`).
//!
//! ## Win/fail precedence
//!
//! Completion and expiry are independent reads with no cross-check: a round
//! can be simultaneously won and expired if both become true before the
//! caller polls. The engine deliberately does not force mutual exclusion;
//! callers decide precedence (hosts typically let the fail win ties).
//!
//! ## Re-selection
//!
//! Selecting the round that is already active is a documented no-op, not an
//! error: the active round, its rendered state, and any armed timer stay
//! untouched. Repeat rounds keep their board.

use std::env;
use std::fs;
use std::path::PathBuf;

use log::{debug, trace};

use crate::content::{ContentProvider, StaticContent};
use crate::core::{Difficulty, GameClock, GameError, GameRng, GameState, SystemClock};
use crate::render::RenderSink;
use crate::rounds::{default_rounds, Round, RoundContext};
use crate::timer::RoundTimer;

/// Round-lifecycle engine. One per session.
///
/// Generic over the rendering sink so hosts keep static dispatch to their
/// buffer layer; everything else the engine consumes (rounds, content,
/// clock) is boxed behind its capability trait.
pub struct Game<S: RenderSink> {
    /// Session record. Mutated only by the engine and the active round's
    /// scratch writes.
    pub state: GameState,
    rounds: Vec<Box<dyn Round>>,
    current: Option<usize>,
    timer: RoundTimer,
    select_rng: GameRng,
    content_rng: GameRng,
    content: Box<dyn ContentProvider>,
    clock: Box<dyn GameClock>,
    results_dir: PathBuf,
    sink: S,
}

impl<S: RenderSink> Game<S> {
    /// Select the next round and, when it differs from the active one,
    /// transition to it: clear the board, post its instructions, reset the
    /// per-round scratch.
    ///
    /// Re-selecting the active round is a no-op by design.
    pub fn start_round(&mut self) {
        let next = self.select_rng.gen_range_usize(0..self.rounds.len());

        if self.current == Some(next) {
            trace!("start_round: re-selected active round, keeping it");
            return;
        }

        debug!("start_round: {} -> {}", next, self.rounds[next].name());

        let instructions = self.rounds[next].instructions();
        self.sink.clear_board();
        self.sink.set_instructions(&instructions);

        self.state.clear_round_state();
        self.current = Some(next);
    }

    /// Render the active round's content, apply its post-render
    /// adjustments, and arm the timer when the round is timed at the
    /// session difficulty.
    ///
    /// `first_run` feeds instrumentation only; it never changes control
    /// flow.
    pub fn run(&mut self, first_run: bool) {
        debug!("run(first_run = {})", first_run);

        let Some(idx) = self.current else {
            trace!("run: no active round");
            return;
        };

        let round = &self.rounds[idx];
        let mut ctx = RoundContext {
            state: &mut self.state,
            rng: &mut self.content_rng,
            content: self.content.as_ref(),
        };
        let lines = round.render(&mut ctx);
        self.sink.render(&lines);

        // Positional adjustments must land after the content is visible.
        round.post_render(&self.state, &mut self.sink);

        if round.is_timed(self.state.difficulty) {
            let budget = round.timeout(self.state.difficulty);
            debug!("run: arming timer for {:?}", budget);
            self.timer.arm(self.clock.now(), budget);
        }
    }

    /// Whether the active round's completion predicate holds right now.
    ///
    /// Evaluated against session state and the sink's board read-back; no
    /// side effects on `GameState`. Independent of `has_failed`; see the
    /// module docs for the precedence note.
    #[must_use]
    pub fn check_for_win(&self) -> bool {
        let Some(idx) = self.current else {
            return false;
        };
        let board = self.sink.contents();
        self.rounds[idx].is_complete(&self.state, &board)
    }

    /// Whether the armed timer has fired.
    ///
    /// The deadline is observed lazily at query time (the engine is
    /// single-threaded and cooperative), so expiry callbacks run here, as an
    /// interleaved task, never mid-render.
    pub fn has_failed(&mut self) -> bool {
        self.timer.poll(self.clock.now());
        let failed = self.timer.is_expired();
        trace!("has_failed -> {}", failed);
        failed
    }

    /// Cancel any armed timer. Idempotent; performs no other session
    /// mutation.
    pub fn end_round(&mut self) {
        self.timer.cancel();
    }

    /// Flush the session results and tear the play surface down.
    ///
    /// Writes one file at `<results-dir>/<name>-<epoch-millis>.csv`, each
    /// entry stringified and joined with `",\n"`. Consuming `self` makes
    /// this terminal: no further round can start. Returns the written path.
    pub fn finish(mut self) -> Result<PathBuf, GameError> {
        let file_name = format!("{}-{}.csv", self.state.name, self.clock.epoch_millis());
        let path = self.results_dir.join(file_name);

        let body = self
            .state
            .results()
            .iter()
            .map(|entry| entry.to_string())
            .collect::<Vec<_>>()
            .join(",\n");

        debug!("finish: {} entries -> {}", self.state.results().len(), path.display());

        fs::write(&path, body).map_err(|source| GameError::ResultsWrite {
            path: path.clone(),
            source,
        })?;

        self.sink.finish();
        Ok(path)
    }

    /// The round number that follows the current one, under this session's
    /// difficulty progression. Computes but does not commit; callers store
    /// the value into `state.current_count` when the round actually ends.
    #[must_use]
    pub fn next_round_number(&self) -> u32 {
        let next = self
            .state
            .difficulty
            .progression()
            .next(self.state.current_count);
        trace!("next_round_number: {} -> {}", self.state.current_count, next);
        next
    }

    /// Register a callback for the current round's timer expiry.
    ///
    /// Scoped to the armed round: invoked at most once, dropped on fire or
    /// cancel.
    pub fn on_timer_expired(&mut self, callback: impl FnMut() + 'static) {
        self.timer.subscribe(callback);
    }

    /// The active round, if any.
    #[must_use]
    pub fn current_round(&self) -> Option<&dyn Round> {
        self.current.map(|idx| self.rounds[idx].as_ref())
    }

    /// The rendering sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the rendering sink (hosts feed player edits back
    /// through this).
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

/// Builder for a `Game`.
///
/// Everything has a sensible default: empty session name, `Easy`
/// difficulty, the standard round pool, the embedded content, the system
/// clock, an OS-chosen entropy seed, and the OS temporary directory for
/// results.
#[derive(Default)]
pub struct GameBuilder {
    name: String,
    difficulty: Difficulty,
    seed: Option<u64>,
    rounds: Vec<Box<dyn Round>>,
    content: Option<Box<dyn ContentProvider>>,
    results_dir: Option<PathBuf>,
    clock: Option<Box<dyn GameClock>>,
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Session/player name; keys the results file.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Fix the RNG seed for a reproducible session.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Add a round to the pool. Leaving the pool empty selects the
    /// standard rounds.
    #[must_use]
    pub fn round(mut self, round: Box<dyn Round>) -> Self {
        self.rounds.push(round);
        self
    }

    /// Substitute the content source.
    #[must_use]
    pub fn content(mut self, content: Box<dyn ContentProvider>) -> Self {
        self.content = Some(content);
        self
    }

    /// Where the results file lands. Defaults to the OS temporary
    /// directory.
    #[must_use]
    pub fn results_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.results_dir = Some(dir.into());
        self
    }

    /// Substitute the time source (deterministic tests, replays).
    #[must_use]
    pub fn clock(mut self, clock: Box<dyn GameClock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the engine around a rendering sink.
    pub fn build<S: RenderSink>(self, sink: S) -> Game<S> {
        let seed = self.seed.unwrap_or_else(rand::random);
        let base = GameRng::new(seed);

        let rounds = if self.rounds.is_empty() {
            default_rounds()
        } else {
            self.rounds
        };

        debug!(
            "new session: name = {:?}, difficulty = {}, seed = {}, pool = {}",
            self.name,
            self.difficulty,
            seed,
            rounds.len()
        );

        Game {
            state: GameState::new(self.name, self.difficulty),
            rounds,
            current: None,
            timer: RoundTimer::new(),
            select_rng: base.for_context("round-select"),
            content_rng: base.for_context("content"),
            content: self.content.unwrap_or_else(|| Box::new(StaticContent)),
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock)),
            results_dir: self.results_dir.unwrap_or_else(env::temp_dir),
            sink,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ManualClock;
    use crate::render::MemorySink;
    use std::time::Duration;

    fn easy_game(seed: u64) -> (Game<MemorySink>, ManualClock) {
        let clock = ManualClock::starting_at(1_700_000_000_000);
        let game = GameBuilder::new()
            .name("kyle")
            .difficulty(Difficulty::Easy)
            .seed(seed)
            .clock(Box::new(clock.clone()))
            .build(MemorySink::new());
        (game, clock)
    }

    #[test]
    fn test_start_round_posts_instructions() {
        let (mut game, _clock) = easy_game(42);

        game.start_round();

        assert!(game.current_round().is_some());
        assert_eq!(game.sink().clear_count, 1);
        assert!(!game.sink().instructions.is_empty());
    }

    #[test]
    fn test_reselection_is_a_no_op() {
        let (mut game, _clock) = easy_game(42);

        // Drive until a re-selection happens; with a 3-round pool and 200
        // draws one is certain for this seed.
        let mut saw_noop = false;
        let mut transitions = 0;
        let mut last_name = String::new();

        for _ in 0..200 {
            let before = game.sink().clear_count;
            game.start_round();
            let name = game.current_round().unwrap().name().to_string();

            if game.sink().clear_count == before {
                saw_noop = true;
                assert_eq!(name, last_name, "no-op must keep the active round");
            } else {
                transitions += 1;
                assert_eq!(game.sink().clear_count, before + 1);
            }
            last_name = name;
        }

        assert!(saw_noop);
        assert!(transitions >= 2);
    }

    #[test]
    fn test_run_renders_and_arms_timer_for_timed_rounds() {
        let (mut game, clock) = easy_game(42);

        game.start_round();
        game.run(true);

        assert_eq!(game.sink().render_count, 1);
        assert!(!game.sink().lines.is_empty());
        assert!(!game.has_failed());

        // The widest default budget at Easy is ci's 5.5s.
        clock.advance(Duration::from_millis(5_500));
        assert!(game.has_failed());
    }

    #[test]
    fn test_noob_rounds_never_arm_the_timer() {
        let clock = ManualClock::new();
        let mut game = GameBuilder::new()
            .difficulty(Difficulty::Noob)
            .seed(42)
            .clock(Box::new(clock.clone()))
            .build(MemorySink::new());

        game.start_round();
        game.run(true);

        clock.advance(Duration::from_secs(3_600));
        assert!(!game.has_failed());
    }

    #[test]
    fn test_end_round_cancels_the_timer() {
        let (mut game, clock) = easy_game(42);

        game.start_round();
        game.run(true);
        game.end_round();

        clock.advance(Duration::from_secs(60));
        assert!(!game.has_failed());

        // And cancelling again, with nothing armed, stays quiet.
        game.end_round();
    }

    #[test]
    fn test_win_and_fail_stay_independent() {
        let (mut game, clock) = easy_game(42);

        game.start_round();
        game.run(true);

        clock.advance(Duration::from_secs(10));
        assert!(game.has_failed());

        // Expiry does not stop the completion predicate from being asked.
        let _ = game.check_for_win();
        assert!(game.has_failed());
    }

    #[test]
    fn test_next_round_number_follows_difficulty() {
        let (game, _clock) = easy_game(42);
        assert_eq!(game.next_round_number(), 2);

        let mut noob = GameBuilder::new()
            .difficulty(Difficulty::Noob)
            .seed(42)
            .build(MemorySink::new());
        assert_eq!(noob.next_round_number(), 0);

        noob.state.current_count = 0;
        assert_eq!(noob.next_round_number(), 0);
    }

    #[test]
    fn test_check_for_win_with_no_active_round() {
        let (game, _clock) = easy_game(42);
        assert!(!game.check_for_win());
    }

    #[test]
    fn test_same_seed_same_session() {
        let (mut a, _) = easy_game(1234);
        let (mut b, _) = easy_game(1234);

        for _ in 0..20 {
            a.start_round();
            b.start_round();
            assert_eq!(
                a.current_round().unwrap().name(),
                b.current_round().unwrap().name()
            );

            a.run(false);
            b.run(false);
            assert_eq!(a.sink().lines, b.sink().lines);
        }
    }
}
