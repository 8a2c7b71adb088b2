// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! One-shot countdown timer ticking once per second.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Notify};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

const TICK: Duration = Duration::from_secs(1);

pub struct Countdown;

impl Countdown {
    /// Count down from `seconds` and run `on_expire` when reaching zero.
    ///
    /// Must be called within a tokio runtime. The action runs at most once,
    /// and never after the returned handle is cancelled or dropped.
    pub fn start<F>(seconds: u64, on_expire: F) -> CountdownHandle
    where
        F: FnOnce() + Send + 'static,
    {
        let (remaining_tx, remaining_rx) = watch::channel(seconds);
        let trigger = Arc::new(Notify::new());
        let task_trigger = trigger.clone();

        let task = tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + TICK, TICK);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut remaining = seconds;
            while remaining > 0 {
                tokio::select! {
                    _ = ticks.tick() => remaining -= 1,
                    _ = task_trigger.notified() => {
                        debug!("Countdown triggered with {}s left", remaining);
                        remaining = 0;
                    }
                }
                remaining_tx.send_replace(remaining);
            }
            on_expire();
        });

        CountdownHandle {
            remaining: remaining_rx,
            trigger,
            task,
        }
    }
}

/// Controls a running [`Countdown`]. Dropping the handle cancels it.
pub struct CountdownHandle {
    remaining: watch::Receiver<u64>,
    trigger: Arc<Notify>,
    task: JoinHandle<()>,
}

impl CountdownHandle {
    /// Seconds left before the action runs
    pub fn remaining(&self) -> u64 {
        *self.remaining.borrow()
    }

    /// Receiver observing every change of the remaining seconds
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.remaining.clone()
    }

    /// Skip the rest of the countdown and run the action now
    pub fn trigger_now(&self) {
        self.trigger.notify_one();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the countdown without running the action, unless it already ran
    pub fn cancel(self) {
        self.task.abort();
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
