use std::path::PathBuf;

use super::*;
use crate::foundation::core::Color;
use crate::present::memory::InMemorySurface;

fn small_config() -> GameConfig {
    GameConfig {
        width: 16,
        height: 12,
        sprite_start: Position::new(2, 3),
        speed: 3,
        score_goal: 30,
        ..GameConfig::default()
    }
}

fn ctx(cfg: GameConfig) -> FrameContext<InMemorySurface> {
    let bg = ImageData::solid(16, 12, Color::rgb(0, 0, 200)).unwrap();
    let sprite = ImageData::solid(4, 4, Color::rgb(250, 250, 0)).unwrap();
    FrameContext::new(cfg, bg, sprite).unwrap()
}

fn right() -> InputState {
    InputState {
        right: true,
        ..InputState::IDLE
    }
}

#[test]
fn present_before_bind_is_not_bound() {
    let mut c = ctx(small_config());
    assert!(!c.is_bound());
    c.render();
    assert!(matches!(c.present(), Err(JetframeError::NotBound)));

    let (ticker, _tx) = ScoreTicker::manual();
    assert!(matches!(
        c.step(ticker.events()),
        Err(JetframeError::NotBound)
    ));
}

#[test]
fn render_draws_background_then_sprite() {
    let mut c = ctx(small_config());
    c.render();
    let fb = c.framebuffer();
    assert_eq!(fb.pixel(0, 0), Some([200, 0, 0, 255]));
    assert_eq!(fb.pixel(2, 3), Some([0, 250, 250, 255]));
    assert_eq!(fb.pixel(5, 6), Some([0, 250, 250, 255]));
    assert_eq!(fb.pixel(6, 7), Some([200, 0, 0, 255]));
}

#[test]
fn step_moves_sprite_and_presents_with_caption() {
    let mut c = ctx(small_config());
    c.bind_surface(InMemorySurface::new().with_input_script([right(), right()]));
    let (ticker, tx) = ScoreTicker::manual();

    assert_eq!(c.step(ticker.events()).unwrap(), StepOutcome::Continue);
    assert_eq!(c.position(), Position::new(5, 3));

    tx.send(LoopEvent::ScoreTick).unwrap();
    assert_eq!(c.step(ticker.events()).unwrap(), StepOutcome::Continue);
    assert_eq!(c.position(), Position::new(8, 3));
    assert_eq!(c.score(), 10);

    let surface = c.surface().unwrap();
    assert_eq!(surface.presented(), 2);
    assert_eq!(surface.caption(), Some("Score: 10"));
    let frame = surface.last_frame().unwrap();
    assert_eq!(frame.bgra8, c.framebuffer().pixels());
}

#[test]
fn sprite_is_clamped_to_right_edge() {
    let mut c = ctx(small_config());
    c.bind_surface(InMemorySurface::new().with_input_script(std::iter::repeat_n(right(), 10)));
    let (ticker, _tx) = ScoreTicker::manual();
    for _ in 0..10 {
        c.step(ticker.events()).unwrap();
    }
    assert_eq!(c.position(), Position::new(12, 3));
}

#[test]
fn ticks_are_applied_before_render() {
    let mut c = ctx(small_config());
    c.bind_surface(InMemorySurface::new());
    let (ticker, tx) = ScoreTicker::manual();
    for _ in 0..3 {
        tx.send(LoopEvent::ScoreTick).unwrap();
    }
    assert_eq!(
        c.step(ticker.events()).unwrap(),
        StepOutcome::Exit(ExitReason::GoalReached)
    );
    assert_eq!(c.score(), 30);
    assert_eq!(c.frames(), 1);
    assert_eq!(c.surface().unwrap().caption(), Some("Score: 30"));
}

#[test]
fn quit_key_exits_without_presenting() {
    let mut c = ctx(small_config());
    let quit = InputState {
        quit: true,
        ..InputState::IDLE
    };
    c.bind_surface(InMemorySurface::new().with_input_script([quit]));
    let (ticker, _tx) = ScoreTicker::manual();
    assert_eq!(
        c.step(ticker.events()).unwrap(),
        StepOutcome::Exit(ExitReason::QuitRequested)
    );
    assert_eq!(c.surface().unwrap().presented(), 0);
}

#[test]
fn run_loop_stops_when_surface_closes() {
    let mut c = ctx(small_config());
    c.bind_surface(InMemorySurface::new().with_open_frames(5));
    let (ticker, _tx) = ScoreTicker::manual();
    let summary = run_loop(&mut c, &ticker).unwrap();
    assert_eq!(
        summary,
        LoopSummary {
            frames: 5,
            score: 0,
            exit: ExitReason::SurfaceClosed,
        }
    );
}

#[test]
fn boxed_surfaces_bind_through_default_type() {
    let bg = ImageData::solid(16, 12, Color::BLACK).unwrap();
    let sprite = ImageData::solid(1, 1, Color::WHITE).unwrap();
    let mut c: FrameContext = FrameContext::new(small_config(), bg, sprite).unwrap();
    c.bind_surface(Box::new(InMemorySurface::new().with_open_frames(2)));
    let (ticker, _tx) = ScoreTicker::manual();
    assert_eq!(run_loop(&mut c, &ticker).unwrap().frames, 2);
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = GameConfig {
        width: 0,
        ..small_config()
    };
    let bg = ImageData::solid(1, 1, Color::BLACK).unwrap();
    let sprite = ImageData::solid(1, 1, Color::WHITE).unwrap();
    assert!(FrameContext::<InMemorySurface>::new(cfg, bg, sprite).is_err());
}

#[test]
fn from_config_missing_image_is_load_error() {
    let cfg = GameConfig {
        background: PathBuf::from("target/unit_frame_loop/missing_bg.png"),
        ..small_config()
    };
    let err = FrameContext::<InMemorySurface>::from_config(cfg)
        .err()
        .unwrap();
    assert!(matches!(err, JetframeError::Load(_)));
}
