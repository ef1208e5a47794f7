//! Scripted demo runs.
//!
//! A run is a counter advanced on a fixed tick until it reaches its terminal
//! value, followed by a short settle delay before the canned result shows up.
//! The timing lives in [`RunConfig`], the state in [`RunState`] and the timer
//! side in [`run_events`], which turns a config into a stream of [`RunEvent`]s.
//! The UI glue that owns the task handle is in `utils::hooks`.

use std::{collections::VecDeque, time::Duration};
use futures::{stream, Stream};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunConfig {
  pub tick: Duration,
  pub step: u32,
  pub terminal: u32,
  pub settle: Duration,
  /// counter values that reveal extra content once reached
  pub thresholds: &'static [u32],
}

impl RunConfig {
  /// A run without progress: one deferred flip after `delay`.
  pub const fn one_shot(delay: Duration) -> Self {
    RunConfig { tick: delay, step: 1, terminal: 1, settle: Duration::ZERO, thresholds: &[] }
  }
}

// checkpoints light once progress is strictly past 20/40/60/80, progress moves in steps of 2
pub const AUDIT_RUN: RunConfig = RunConfig {
  tick: Duration::from_millis(30),
  step: 2,
  terminal: 100,
  settle: Duration::from_millis(500),
  thresholds: &[21, 41, 61, 81],
};

pub const FUNNEL_RUN: RunConfig = RunConfig {
  tick: Duration::from_millis(1_500),
  step: 1,
  terminal: 4,
  settle: Duration::from_millis(1_500),
  thresholds: &[0, 1, 2, 3, 4],
};

pub const VOICE_PLAYBACK: RunConfig = RunConfig::one_shot(Duration::from_millis(3_000));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunPhase {
  #[default]
  Idle,
  Running,
  Settling,
  Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEvent {
  Progress(u32),
  Threshold(u32),
  Settling,
  Done,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunState<P> {
  phase: RunPhase,
  counter: u32,
  revealed: Vec<u32>,
  result: Option<P>,
  thresholds: &'static [u32],
}

impl<P> RunState<P> {
  pub fn new(config: &RunConfig) -> Self {
    RunState { phase: RunPhase::Idle, counter: 0, revealed: vec![], result: None, thresholds: config.thresholds }
  }

  /// Resets everything from a previous run. Thresholds at zero are revealed right away.
  pub fn start(&mut self) {
    self.phase = RunPhase::Running;
    self.counter = 0;
    self.result = None;
    self.revealed = self.thresholds.iter().copied().filter(|t| *t == 0).collect();
  }

  pub fn apply(&mut self, event: RunEvent, finish: impl FnOnce() -> P) {
    // late events from a run that was never started are dropped
    if self.phase == RunPhase::Idle {
      return;
    }
    match event {
      RunEvent::Progress(counter) => self.counter = self.counter.max(counter),
      RunEvent::Threshold(threshold) => {
        if !self.revealed.contains(&threshold) {
          self.revealed.push(threshold);
        }
      },
      RunEvent::Settling => self.phase = RunPhase::Settling,
      RunEvent::Done => {
        self.phase = RunPhase::Done;
        self.result = Some(finish());
      }
    }
  }

  pub fn phase(&self) -> RunPhase {
    self.phase
  }

  pub fn counter(&self) -> u32 {
    self.counter
  }

  pub fn result(&self) -> Option<&P> {
    self.result.as_ref()
  }

  /// true from the trigger until the result is in, settle delay included
  pub fn is_running(&self) -> bool {
    matches!(self.phase(), RunPhase::Running | RunPhase::Settling)
  }

  pub fn is_done(&self) -> bool {
    self.phase() == RunPhase::Done
  }

  pub fn is_revealed(&self, threshold: u32) -> bool {
    self.revealed.contains(&threshold)
  }
}

enum DriverStage {
  Ticking,
  Settling,
  Finished,
}

struct Driver {
  config: RunConfig,
  counter: u32,
  pending: VecDeque<RunEvent>,
  stage: DriverStage,
}

impl Driver {
  fn new(config: RunConfig) -> Self {
    Driver { config, counter: 0, pending: VecDeque::new(), stage: DriverStage::Ticking }
  }

  fn advance(&mut self) {
    let previous = self.counter;
    self.counter = previous.saturating_add(self.config.step.max(1)).min(self.config.terminal);
    self.pending.push_back(RunEvent::Progress(self.counter));

    for threshold in self.config.thresholds {
      if previous < *threshold && *threshold <= self.counter {
        self.pending.push_back(RunEvent::Threshold(*threshold));
      }
    }
  }

  async fn next_event(&mut self) -> Option<RunEvent> {
    loop {
      if let Some(event) = self.pending.pop_front() {
        return Some(event);
      }
      match self.stage {
        DriverStage::Ticking => {
          if self.counter >= self.config.terminal {
            self.stage = DriverStage::Settling;
            return Some(RunEvent::Settling);
          }
          async_std::task::sleep(self.config.tick).await;
          self.advance();
        },
        DriverStage::Settling => {
          if !self.config.settle.is_zero() {
            async_std::task::sleep(self.config.settle).await;
          }
          self.stage = DriverStage::Finished;
          return Some(RunEvent::Done);
        },
        DriverStage::Finished => return None,
      }
    }
  }
}

/// Timer side of a run. Dropping the stream stops it, nothing fires afterwards.
pub fn run_events(config: RunConfig) -> impl Stream<Item = RunEvent> {
  stream::unfold(Driver::new(config), |mut driver| async move {
    let event = driver.next_event().await?;
    Some((event, driver))
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use futures::{executor::block_on, StreamExt};

  fn instant(config: RunConfig) -> RunConfig {
    RunConfig { tick: Duration::ZERO, settle: Duration::ZERO, ..config }
  }

  fn replay<P>(config: RunConfig, finish: fn() -> P) -> (RunState<P>, Vec<RunEvent>) {
    let events = block_on(run_events(instant(config)).collect::<Vec<_>>());
    let mut state = RunState::new(&config);
    state.start();
    for event in &events {
      state.apply(*event, finish);
    }
    (state, events)
  }

  #[test]
  fn audit_progress_is_monotonic_and_ends_at_100() {
    let (state, events) = replay(AUDIT_RUN, || 1);
    let progress: Vec<u32> = events.iter().filter_map(|e| match e {
      RunEvent::Progress(p) => Some(*p),
      _ => None,
    }).collect();

    assert_eq!(progress.len(), 50);
    assert_eq!(progress.first(), Some(&2));
    assert_eq!(progress.last(), Some(&100));
    assert!(progress.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(state.counter(), 100);
    assert!(state.is_done());
  }

  #[test]
  fn settling_comes_right_before_done() {
    let (_, events) = replay(AUDIT_RUN, || ());
    let n = events.len();
    assert_eq!(events[n - 2], RunEvent::Settling);
    assert_eq!(events[n - 1], RunEvent::Done);
  }

  #[test]
  fn audit_checkpoints_follow_progress() {
    let (_, events) = replay(AUDIT_RUN, || ());
    let crossed: Vec<(usize, u32)> = events.iter().enumerate().filter_map(|(i, e)| match e {
      RunEvent::Threshold(t) => Some((i, *t)),
      _ => None,
    }).collect();
    assert_eq!(crossed.iter().map(|(_, t)| *t).collect::<Vec<_>>(), vec![21, 41, 61, 81]);
    // each checkpoint is reported right after the tick that passed it
    for (index, threshold) in crossed {
      assert_eq!(events[index - 1], RunEvent::Progress(threshold + 1));
    }
  }

  #[test]
  fn funnel_walks_five_stages() {
    let (state, events) = replay(FUNNEL_RUN, || ());
    let progress: Vec<RunEvent> = events.into_iter().filter(|e| matches!(e, RunEvent::Progress(_))).collect();
    assert_eq!(progress, vec![RunEvent::Progress(1), RunEvent::Progress(2), RunEvent::Progress(3), RunEvent::Progress(4)]);
    for stage in 0..5 {
      assert!(state.is_revealed(stage));
    }
  }

  #[test]
  fn one_shot_flips_once() {
    let (state, events) = replay(VOICE_PLAYBACK, || ());
    assert_eq!(events, vec![RunEvent::Progress(1), RunEvent::Settling, RunEvent::Done]);
    assert!(!state.is_running());
  }

  #[test]
  fn result_is_only_set_on_done() {
    let mut state: RunState<&str> = RunState::new(&AUDIT_RUN);
    state.start();
    state.apply(RunEvent::Progress(100), || "report");
    state.apply(RunEvent::Settling, || "report");
    assert!(state.is_running());
    assert_eq!(state.result(), None);

    state.apply(RunEvent::Done, || "report");
    assert_eq!(state.result(), Some(&"report"));
    assert!(!state.is_running());
  }

  #[test]
  fn restart_clears_previous_run() {
    let (mut state, _) = replay(FUNNEL_RUN, || 7);
    assert!(state.is_done());

    state.start();
    assert_eq!(state.phase(), RunPhase::Running);
    assert_eq!(state.counter(), 0);
    assert_eq!(state.result(), None);
    assert!(state.is_revealed(0));
    assert!(!state.is_revealed(1));
  }

  #[test]
  fn events_before_start_are_ignored() {
    let mut state: RunState<()> = RunState::new(&AUDIT_RUN);
    state.apply(RunEvent::Progress(40), || ());
    state.apply(RunEvent::Done, || ());
    assert_eq!(state.phase(), RunPhase::Idle);
    assert_eq!(state.counter(), 0);
  }

  #[test]
  fn zero_step_still_terminates() {
    let config = RunConfig { step: 0, terminal: 3, thresholds: &[], ..instant(AUDIT_RUN) };
    let events = block_on(run_events(config).collect::<Vec<_>>());
    assert_eq!(events.last(), Some(&RunEvent::Done));
  }
}
