use std::sync::mpsc::Receiver;

use crate::assets::decode::load_image;
use crate::assets::image_data::ImageData;
use crate::foundation::core::Position;
use crate::foundation::error::{JetframeError, JetframeResult};
use crate::present::surface::Surface;
use crate::render::framebuffer::Framebuffer;
use crate::session::config::GameConfig;
use crate::session::input::{InputState, apply_movement};
use crate::session::ticker::{LoopEvent, ScoreTicker};

/// Result of a single [`FrameContext::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Keep looping.
    Continue,
    /// Stop looping for the given reason.
    Exit(ExitReason),
}

/// Why the frame loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitReason {
    /// The score reached the configured goal.
    GoalReached,
    /// The user pressed the quit key.
    QuitRequested,
    /// The surface was closed.
    SurfaceClosed,
}

/// Totals reported by [`run_loop`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoopSummary {
    /// Frames rendered and presented.
    pub frames: u64,
    /// Final score.
    pub score: u32,
    /// Why the loop ended.
    pub exit: ExitReason,
}

/// Everything one frame loop owns: the compositor, the bound surface, the images, the sprite
/// position, and the score.
pub struct FrameContext<S: Surface = Box<dyn Surface>> {
    config: GameConfig,
    framebuffer: Framebuffer,
    surface: Option<S>,
    background: ImageData,
    sprite: ImageData,
    position: Position,
    score: u32,
    frames: u64,
}

impl<S: Surface> FrameContext<S> {
    /// Build a context around already-loaded images. No surface is bound yet.
    pub fn new(
        config: GameConfig,
        background: ImageData,
        sprite: ImageData,
    ) -> JetframeResult<Self> {
        config.validate()?;
        let framebuffer = Framebuffer::new(config.width, config.height)?;
        Ok(Self {
            position: config.sprite_start,
            config,
            framebuffer,
            surface: None,
            background,
            sprite,
            score: 0,
            frames: 0,
        })
    }

    /// Load the configured background and sprite, then build the context.
    pub fn from_config(config: GameConfig) -> JetframeResult<Self> {
        let background = load_image(&config.background)?;
        let sprite = load_image(&config.sprite)?;
        Self::new(config, background, sprite)
    }

    /// Bind the display surface used by [`FrameContext::present`]. Replaces any previous one.
    pub fn bind_surface(&mut self, surface: S) -> Option<S> {
        tracing::info!(
            width = self.framebuffer.width(),
            height = self.framebuffer.height(),
            "surface bound"
        );
        self.surface.replace(surface)
    }

    /// Unbind and return the surface.
    pub fn unbind_surface(&mut self) -> Option<S> {
        self.surface.take()
    }

    /// `true` once a surface has been bound.
    pub fn is_bound(&self) -> bool {
        self.surface.is_some()
    }

    /// The bound surface, if any.
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// The compositor.
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Active configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current sprite position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Move the sprite without applying the movement rule.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// `true` once the score reached the configured goal.
    pub fn goal_reached(&self) -> bool {
        self.score >= self.config.score_goal
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Apply one queued loop event.
    pub fn apply_event(&mut self, event: LoopEvent) {
        match event {
            LoopEvent::ScoreTick => {
                self.score = self.score.saturating_add(self.config.score_increment);
                tracing::info!(score = self.score, "score");
            }
        }
    }

    /// Move the sprite according to held keys, keeping it fully on screen.
    pub fn apply_input(&mut self, input: &InputState) {
        self.position = apply_movement(
            self.position,
            input,
            self.config.speed,
            (self.framebuffer.width(), self.framebuffer.height()),
            (self.sprite.width(), self.sprite.height()),
        );
    }

    /// Compose the frame: clear, background at the origin, sprite at the current position.
    pub fn render(&mut self) {
        self.framebuffer.clear(self.config.clear_color);
        self.framebuffer.draw(&self.background, 0, 0);
        self.framebuffer.draw(&self.sprite, self.position.x, self.position.y);
    }

    /// Present the composed frame to the bound surface and refresh its caption.
    ///
    /// Fails with [`JetframeError::NotBound`] when no surface was bound.
    pub fn present(&mut self) -> JetframeResult<()> {
        let surface = self.surface.as_mut().ok_or(JetframeError::NotBound)?;
        self.framebuffer.present(&mut *surface)?;
        surface.set_caption(&format!("Score: {}", self.score));
        self.frames += 1;
        Ok(())
    }

    /// Run one loop iteration: drain events, poll input, render, present.
    pub fn step(&mut self, events: &Receiver<LoopEvent>) -> JetframeResult<StepOutcome> {
        for event in events.try_iter() {
            self.apply_event(event);
        }

        let surface = self.surface.as_mut().ok_or(JetframeError::NotBound)?;
        if !surface.is_open() {
            return Ok(StepOutcome::Exit(ExitReason::SurfaceClosed));
        }
        let input = surface.poll_input();
        if input.quit {
            return Ok(StepOutcome::Exit(ExitReason::QuitRequested));
        }

        self.apply_input(&input);
        self.render();
        self.present()?;

        if self.goal_reached() {
            tracing::info!(
                score = self.score,
                goal = self.config.score_goal,
                "score goal reached"
            );
            return Ok(StepOutcome::Exit(ExitReason::GoalReached));
        }
        Ok(StepOutcome::Continue)
    }
}

/// Step `ctx` until it exits, consuming score ticks from `ticker`.
pub fn run_loop<S: Surface>(
    ctx: &mut FrameContext<S>,
    ticker: &ScoreTicker,
) -> JetframeResult<LoopSummary> {
    tracing::info!("frame loop started");
    let exit = loop {
        match ctx.step(ticker.events())? {
            StepOutcome::Continue => {}
            StepOutcome::Exit(reason) => break reason,
        }
    };
    let summary = LoopSummary {
        frames: ctx.frames(),
        score: ctx.score(),
        exit,
    };
    tracing::info!(
        frames = summary.frames,
        score = summary.score,
        exit = ?exit,
        "frame loop stopped"
    );
    Ok(summary)
}

#[cfg(test)]
#[path = "../../tests/unit/session/frame_loop.rs"]
mod tests;
