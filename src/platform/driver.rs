//! Per-frame driver
//!
//! Owns the session, its RNG and a renderer. Each frame samples input, runs
//! the simulation and draws. Frame timing comes from a [`Scheduler`] (or the
//! host's refresh callback calling [`Driver::frame`] directly).

use rand_pcg::Pcg32;

use super::input::InputSource;
use crate::consts::MAX_SUBSTEPS;
use crate::renderer::{Renderer, draw_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};

/// Largest frame delta fed to the fixed-step accumulator (seconds)
const MAX_FRAME_DT: f32 = 0.1;

/// Source of frame timing
pub trait Scheduler {
    /// Wait for the next frame and return the seconds since the previous
    /// one, or `None` to stop.
    fn next_frame(&mut self) -> Option<f32>;
}

/// Runs a fixed number of frames back to back, without waiting
#[derive(Debug, Clone)]
pub struct HeadlessScheduler {
    pub remaining: u64,
    pub frame_dt: f32,
}

impl HeadlessScheduler {
    pub fn new(frames: u64) -> Self {
        Self {
            remaining: frames,
            frame_dt: 1.0 / 60.0,
        }
    }
}

impl Scheduler for HeadlessScheduler {
    fn next_frame(&mut self) -> Option<f32> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.frame_dt)
    }
}

/// The game loop: input, tick, render
pub struct Driver<R: Renderer, I: InputSource> {
    pub state: GameState,
    pub renderer: R,
    pub input: I,
    pub settings: Settings,
    rng: Pcg32,
    accumulator: f32,
    frames: u64,
}

impl<R: Renderer, I: InputSource> Driver<R, I> {
    pub fn new(state: GameState, rng: Pcg32, renderer: R, input: I, settings: Settings) -> Self {
        Self {
            state,
            renderer,
            input,
            settings,
            rng,
            accumulator: 0.0,
            frames: 0,
        }
    }

    /// Frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Start signal from the host. Remembers the chosen difficulty on success.
    pub fn start(&mut self, level: i64) -> bool {
        let started = self.state.start(level, &mut self.rng);
        if started {
            self.settings.difficulty = self.state.difficulty;
            self.accumulator = 0.0;
        }
        started
    }

    /// Advance and draw one display frame; `dt` is seconds since the last one
    pub fn frame(&mut self, dt: f32) -> Vec<GameEvent> {
        let events = match self.settings.fixed_dt() {
            None => self.step(),
            Some(step) => {
                self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);
                let mut events = Vec::new();
                let mut substeps = 0;
                while self.accumulator >= step && substeps < MAX_SUBSTEPS {
                    events.extend(self.step());
                    self.accumulator -= step;
                    substeps += 1;
                }
                events
            }
        };

        draw_frame(&self.state, &mut self.renderer);
        self.frames += 1;

        for event in &events {
            log::trace!("frame {}: {:?}", self.frames, event);
        }
        events
    }

    /// Drive frames until the scheduler stops; returns frames rendered
    pub fn run<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) -> u64 {
        let start = self.frames;
        while let Some(dt) = scheduler.next_frame() {
            self.frame(dt);
        }
        self.frames - start
    }

    fn step(&mut self) -> Vec<GameEvent> {
        let input = self.input.sample(&self.state);
        tick(&mut self.state, &input, &mut self.rng)
    }
}
