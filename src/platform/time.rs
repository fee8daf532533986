//! Frame timing

use std::time::Instant;

#[derive(Debug, Clone, Copy)]
enum Source {
    /// Real elapsed time between ticks
    Wall { last: Instant },
    /// Constant step per tick
    Fixed { step: f32 },
}

/// Measures the time between simulation steps
#[derive(Debug, Clone)]
pub struct FrameClock {
    source: Source,
    delta: f32,
    /// Seconds since the clock was created
    elapsed: f64,
    frames: u64,
}

impl FrameClock {
    /// Clock driven by `Instant::now()`, starting with a zero delta
    pub fn wall() -> Self {
        Self::with_source(Source::Wall {
            last: Instant::now(),
        })
    }

    /// Clock that advances by `step` seconds every tick
    pub fn fixed(step: f32) -> Self {
        Self::with_source(Source::Fixed { step })
    }

    /// Fixed clock when `step` is given, wall clock otherwise
    pub fn from_step(step: Option<f32>) -> Self {
        match step {
            Some(step) => Self::fixed(step),
            None => Self::wall(),
        }
    }

    fn with_source(source: Source) -> Self {
        Self {
            source,
            delta: 0.0,
            elapsed: 0.0,
            frames: 0,
        }
    }

    /// Start a new frame and return the seconds since the previous one
    pub fn tick(&mut self) -> f32 {
        self.delta = match &mut self.source {
            Source::Wall { last } => {
                let now = Instant::now();
                let dt = now.duration_since(*last).as_secs_f32();
                *last = now;
                dt
            }
            Source::Fixed { step } => *step,
        };
        self.elapsed += self.delta as f64;
        self.frames += 1;
        self.delta
    }

    /// Length of the most recent frame
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Session time in seconds
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self.source, Source::Fixed { .. })
    }
}
