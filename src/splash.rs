//! Startup progress presenter
//!
//! Purely decorative, time-driven progress display shown while the service
//! boots. Progress advances from 0 to 100 over a fixed duration and maps
//! threshold bands to status text. No interface into the dispatcher.

use std::time::Duration;

/// Time-driven startup progress model
#[derive(Debug, Clone)]
pub struct Splash {
    duration: Duration,
    interval: Duration,
}

impl Default for Splash {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(3000),
            interval: Duration::from_millis(50),
        }
    }
}

impl Splash {
    /// Create a presenter with explicit timing
    pub fn new(duration: Duration, interval: Duration) -> Self {
        Self { duration, interval }
    }

    /// Progress added per tick
    pub fn increment(&self) -> f64 {
        100.0 / (self.duration.as_millis() as f64 / self.interval.as_millis() as f64)
    }

    /// Progress value (0-100) after the given elapsed time
    pub fn progress_at(&self, elapsed: Duration) -> f64 {
        let ticks = (elapsed.as_millis() / self.interval.as_millis()) as f64;
        (ticks * self.increment()).min(100.0)
    }

    /// Status text for a progress value
    pub fn status_for(progress: f64) -> &'static str {
        if progress < 30.0 {
            "Initializing AI Chat Experience..."
        } else if progress < 60.0 {
            "Loading AI Models..."
        } else if progress < 90.0 {
            "Setting up Authentication..."
        } else {
            "Almost Ready..."
        }
    }

    /// Drive the presenter to completion, reporting each tick
    ///
    /// The observer receives the progress value and its status text. Returns
    /// once progress reaches 100.
    pub async fn run<F>(&self, mut observer: F)
    where
        F: FnMut(f64, &'static str),
    {
        let mut progress = 0.0;
        let increment = self.increment();
        let mut timer = tokio::time::interval(self.interval);
        // First tick completes immediately; skip it so ticks are evenly spaced
        timer.tick().await;

        while progress < 100.0 {
            timer.tick().await;
            progress = (progress + increment).min(100.0);
            observer(progress, Self::status_for(progress));
        }
    }
}
