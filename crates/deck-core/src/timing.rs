//! Per-slide timing
//!
//! Accumulates how long each slide stayed on screen and produces a session
//! summary when the presentation closes.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;

use crate::error::SyncError;
use crate::navigation::{NavigationContext, NavigationSubscriber};

/// Time spent on one slide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingRecord {
    pub slide_index: usize,
    pub duration_ms: u64,
}

/// One line of the session summary
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SlideTiming {
    pub slide: usize,
    #[serde(rename = "timeSpent")]
    pub time_spent: String,
}

/// Summary emitted at session end
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SessionSummary {
    #[serde(rename = "startedAt")]
    pub started_at: DateTime<Utc>,
    #[serde(rename = "totalSlides")]
    pub total_slides: usize,
    #[serde(rename = "totalTime")]
    pub total_time: String,
    #[serde(rename = "slideTimings")]
    pub slide_timings: Vec<SlideTiming>,
}

impl SessionSummary {
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}

struct TimerState {
    durations: Vec<Duration>,
    current_slide: usize,
    slide_started: Instant,
}

/// Subscriber that credits elapsed time to the slide being left
pub struct SlideTimer {
    state: Mutex<TimerState>,
    started_at: DateTime<Utc>,
}

impl SlideTimer {
    pub fn new(total_slides: usize) -> Self {
        Self::starting_at(total_slides, Instant::now())
    }

    /// Create a timer whose first slide went on screen at `now`
    pub fn starting_at(total_slides: usize, now: Instant) -> Self {
        Self {
            state: Mutex::new(TimerState {
                durations: vec![Duration::ZERO; total_slides],
                current_slide: 1,
                slide_started: now,
            }),
            started_at: Utc::now(),
        }
    }

    /// Credit time up to `now` to the slide being left and restart the clock
    pub fn record_transition_at(&self, context: &NavigationContext, now: Instant) {
        let mut state = self.state.lock();
        let spent = now.saturating_duration_since(state.slide_started);
        if let Some(slot) = state.durations.get_mut(context.previous_slide.saturating_sub(1)) {
            *slot += spent;
        }
        state.current_slide = context.current_slide;
        state.slide_started = now;
    }

    /// Accumulated records, including the running time of the current slide
    pub fn records_at(&self, now: Instant) -> Vec<TimingRecord> {
        let state = self.state.lock();
        let running = now.saturating_duration_since(state.slide_started);
        state
            .durations
            .iter()
            .enumerate()
            .map(|(i, spent)| {
                let mut spent = *spent;
                if i + 1 == state.current_slide {
                    spent += running;
                }
                TimingRecord {
                    slide_index: i + 1,
                    duration_ms: spent.as_millis() as u64,
                }
            })
            .collect()
    }

    /// Build the session summary; durations are rounded to whole seconds
    pub fn summary_at(&self, now: Instant) -> SessionSummary {
        let records = self.records_at(now);
        let total_ms: u64 = records.iter().map(|r| r.duration_ms).sum();

        SessionSummary {
            started_at: self.started_at,
            total_slides: records.len(),
            total_time: format_seconds(total_ms),
            slide_timings: records
                .iter()
                .map(|r| SlideTiming {
                    slide: r.slide_index,
                    time_spent: format_seconds(r.duration_ms),
                })
                .collect(),
        }
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary_at(Instant::now())
    }
}

impl NavigationSubscriber for SlideTimer {
    fn on_navigation_change(&self, context: &NavigationContext) -> Result<(), SyncError> {
        self.record_transition_at(context, Instant::now());
        Ok(())
    }

    fn name(&self) -> &str {
        "slide timer"
    }
}

fn format_seconds(ms: u64) -> String {
    let seconds = (ms + 500) / 1000;
    humantime::format_duration(Duration::from_secs(seconds)).to_string()
}
