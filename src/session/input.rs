use crate::foundation::core::Position;

/// Keys held down at the moment a surface was polled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    /// Left arrow.
    pub left: bool,
    /// Right arrow.
    pub right: bool,
    /// Up arrow.
    pub up: bool,
    /// Down arrow.
    pub down: bool,
    /// Quit request (Escape).
    pub quit: bool,
}

impl InputState {
    /// Nothing pressed.
    pub const IDLE: Self = Self {
        left: false,
        right: false,
        up: false,
        down: false,
        quit: false,
    };
}

/// Move `pos` by `speed` along each pressed axis and keep the sprite inside the canvas.
///
/// Left wins over right and up wins over down. The allowed range per axis is
/// `[0, canvas - sprite]`; when the sprite is larger than the canvas the axis pins to 0.
pub fn apply_movement(
    pos: Position,
    input: &InputState,
    speed: i32,
    canvas: (u32, u32),
    sprite: (u32, u32),
) -> Position {
    let dx = if input.left {
        -speed
    } else if input.right {
        speed
    } else {
        0
    };
    let dy = if input.up {
        -speed
    } else if input.down {
        speed
    } else {
        0
    };

    Position {
        x: clamp_axis(pos.x.saturating_add(dx), canvas.0, sprite.0),
        y: clamp_axis(pos.y.saturating_add(dy), canvas.1, sprite.1),
    }
}

fn clamp_axis(v: i32, canvas: u32, sprite: u32) -> i32 {
    let max = i64::from(canvas) - i64::from(sprite);
    i64::from(v).min(max).max(0) as i32
}

#[cfg(test)]
#[path = "../../tests/unit/session/input.rs"]
mod tests;
