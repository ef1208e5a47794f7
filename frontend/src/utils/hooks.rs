use std::{collections::HashMap, pin::pin};
use dioxus::{logger::tracing::{info, warn}, prelude::*};
use futures::StreamExt;

use super::{
  chat::{match_rule, reply_stream, ChatTiming, Conversation},
  engine::{run_events, RunConfig, RunState},
};

/// Handle to a scripted run owned by the calling component.
///
/// The timer task lives in the component scope. Starting again cancels the
/// pending task first and unmounting the component cancels whatever is left.
pub struct ScriptedRun<P: 'static> {
  label: &'static str,
  config: RunConfig,
  finish: fn() -> P,
  state: Signal<RunState<P>>,
  task: Signal<Option<Task>>,
}

impl<P: 'static> Clone for ScriptedRun<P> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<P: 'static> Copy for ScriptedRun<P> {}

pub fn use_scripted_run<P: 'static>(label: &'static str, config: RunConfig, finish: fn() -> P) -> ScriptedRun<P> {
  let state = use_signal(|| RunState::new(&config));
  let task: Signal<Option<Task>> = use_signal(|| None);

  use_drop(move || {
    if let Some(pending) = *task.peek() {
      info!("{} page closed mid-run, cancelling its timers", label);
      pending.cancel();
    }
  });

  ScriptedRun { label, config, finish, state, task }
}

impl<P: 'static> ScriptedRun<P> {
  pub fn start(self) {
    let ScriptedRun { label, config, finish, mut state, mut task } = self;

    if let Some(previous) = task.write().take() {
      warn!("{} run restarted, dropping the pending one", label);
      previous.cancel();
    }
    state.write().start();
    info!("{} run started", label);

    let handle = spawn(async move {
      let mut events = pin!(run_events(config));
      while let Some(event) = events.next().await {
        state.write().apply(event, finish);
      }
      task.set(None);
      info!("{} run finished", label);
    });
    task.set(Some(handle));
  }

  pub fn is_running(&self) -> bool {
    self.state.read().is_running()
  }

  pub fn is_done(&self) -> bool {
    self.state.read().is_done()
  }

  pub fn has_started(&self) -> bool {
    self.is_running() || self.is_done()
  }

  pub fn progress(&self) -> u32 {
    self.state.read().counter()
  }

  pub fn is_revealed(&self, threshold: u32) -> bool {
    self.state.read().is_revealed(threshold)
  }
}

impl<P: Clone + 'static> ScriptedRun<P> {
  pub fn result(&self) -> Option<P> {
    self.state.read().result().cloned()
  }
}

/// Chatbot log plus the reply tasks still in flight, keyed by send order.
#[derive(Clone, Copy)]
pub struct ConversationHandle {
  log: Signal<Conversation>,
  pending: Signal<usize>,
  tasks: Signal<HashMap<u64, Task>>,
  next_send: Signal<u64>,
  timing: ChatTiming,
}

pub fn use_conversation(timing: ChatTiming) -> ConversationHandle {
  let log = use_signal(Conversation::with_greeting);
  let pending = use_signal(|| 0usize);
  let tasks: Signal<HashMap<u64, Task>> = use_signal(HashMap::new);
  let next_send = use_signal(|| 0u64);

  use_drop(move || {
    for task in tasks.peek().values() {
      task.cancel();
    }
  });

  ConversationHandle { log, pending, tasks, next_send, timing }
}

impl ConversationHandle {
  /// Appends the visitor message and schedules the bot reply. Blank input is ignored.
  pub fn send(self, text: &str) -> bool {
    if text.trim().is_empty() {
      return false;
    }
    let ConversationHandle { mut log, mut pending, mut tasks, mut next_send, timing } = self;

    let rule = match_rule(text);
    info!("chat message matched the {} rule", rule.name);
    log.write().push_user(text);
    *pending.write() += 1;

    let send_id = *next_send.peek();
    next_send.set(send_id + 1);

    let handle = spawn(async move {
      let mut replies = pin!(reply_stream(rule, timing));
      let mut first = true;
      while let Some(content) = replies.next().await {
        if first {
          first = false;
          let left = pending().saturating_sub(1);
          pending.set(left);
        }
        log.write().push_bot(content);
      }
      tasks.write().remove(&send_id);
    });
    tasks.write().insert(send_id, handle);
    true
  }

  pub fn conversation(&self) -> Conversation {
    self.log.read().clone()
  }

  pub fn is_typing(&self) -> bool {
    *self.pending.read() > 0
  }

  /// reply tasks that have not finished yet
  #[cfg(test)]
  pub fn replies_in_flight(&self) -> usize {
    self.tasks.read().len()
  }
}

#[cfg(test)]
mod tests {
  use std::{
    sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering},
    time::Duration,
  };
  use dioxus::dioxus_core::{NoOpMutations, VirtualDom};
  use futures::executor::block_on;

  use super::*;

  const QUICK_RUN: RunConfig = RunConfig {
    tick: Duration::from_millis(5),
    step: 1,
    terminal: 3,
    settle: Duration::ZERO,
    thresholds: &[],
  };

  const SLOW_RUN: RunConfig = RunConfig {
    tick: Duration::from_millis(40),
    step: 1,
    terminal: 3,
    settle: Duration::ZERO,
    thresholds: &[],
  };

  const INSTANT_CHAT: ChatTiming = ChatTiming { reply: Duration::ZERO, follow_up: Duration::ZERO };

  /// Renders `app` and keeps polling its tasks until `budget` runs out.
  fn run_dom(app: fn() -> Element, budget: Duration) {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    block_on(async {
      let _ = async_std::future::timeout(budget, async {
        loop {
          dom.wait_for_work().await;
          dom.render_immediate(&mut NoOpMutations);
        }
      })
      .await;
    });
  }

  static RESTART_DONE: AtomicU32 = AtomicU32::new(0);
  static RESTART_FINISHED: AtomicBool = AtomicBool::new(false);

  fn restart_finish() -> u32 {
    RESTART_DONE.fetch_add(1, Ordering::SeqCst) + 1
  }

  fn double_start() -> Element {
    let run = use_scripted_run("restart", QUICK_RUN, restart_finish);
    use_hook(move || {
      run.start();
      run.start();
    });
    RESTART_FINISHED.store(run.is_done(), Ordering::SeqCst);
    rsx! { "{run.progress()}" }
  }

  #[test]
  fn restarting_cancels_the_pending_run() {
    run_dom(double_start, Duration::from_millis(300));
    assert_eq!(RESTART_DONE.load(Ordering::SeqCst), 1);
    assert!(RESTART_FINISHED.load(Ordering::SeqCst));
  }

  static UNMOUNT_DONE: AtomicU32 = AtomicU32::new(0);
  static UNMOUNT_PROGRESS: AtomicU32 = AtomicU32::new(0);

  fn unmount_finish() -> u32 {
    UNMOUNT_DONE.fetch_add(1, Ordering::SeqCst) + 1
  }

  #[component]
  fn RunningPage() -> Element {
    let run = use_scripted_run("unmount", SLOW_RUN, unmount_finish);
    use_hook(move || run.start());
    UNMOUNT_PROGRESS.store(run.progress(), Ordering::SeqCst);
    rsx! { "{run.progress()}" }
  }

  fn closes_mid_run() -> Element {
    let mut open = use_signal(|| true);
    use_hook(move || {
      spawn(async move {
        async_std::task::sleep(Duration::from_millis(50)).await;
        open.set(false);
      });
    });
    rsx! {
      if open() {
        RunningPage {}
      }
    }
  }

  #[test]
  fn unmounting_stops_the_run() {
    run_dom(closes_mid_run, Duration::from_millis(400));
    assert_eq!(UNMOUNT_DONE.load(Ordering::SeqCst), 0);
    assert!(UNMOUNT_PROGRESS.load(Ordering::SeqCst) < SLOW_RUN.terminal);
  }

  static CHAT_MESSAGES: AtomicUsize = AtomicUsize::new(0);
  static CHAT_TYPING: AtomicBool = AtomicBool::new(true);
  static CHAT_IN_FLIGHT: AtomicUsize = AtomicUsize::new(usize::MAX);

  fn asks_price_twice() -> Element {
    let chat = use_conversation(INSTANT_CHAT);
    use_hook(move || {
      chat.send("¿Cuánto cuesta?");
      chat.send("¿Cuánto cuesta?");
    });
    let conversation = chat.conversation();
    CHAT_MESSAGES.store(conversation.messages().len(), Ordering::SeqCst);
    CHAT_TYPING.store(chat.is_typing(), Ordering::SeqCst);
    CHAT_IN_FLIGHT.store(chat.replies_in_flight(), Ordering::SeqCst);
    rsx! { "{conversation.messages().len()}" }
  }

  #[test]
  fn overlapping_sends_reply_independently() {
    run_dom(asks_price_twice, Duration::from_millis(300));
    assert_eq!(CHAT_MESSAGES.load(Ordering::SeqCst), 7);
    assert!(!CHAT_TYPING.load(Ordering::SeqCst));
    assert_eq!(CHAT_IN_FLIGHT.load(Ordering::SeqCst), 0);
  }
}
