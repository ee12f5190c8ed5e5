use std::io::{self, Write};

/// Moves the cursor home and clears the visible screen.
pub const CLEAR_SCREEN: &[u8] = b"\x1b[H\x1b[2J";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Margin grows from `0` to `frames - 1`.
    Forward,
    /// Margin shrinks from `frames - 1` to `0`.
    Reverse,
}

impl Direction {
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse {
            Direction::Reverse
        } else {
            Direction::Forward
        }
    }
}

/// Returns the left margin of frame `t` in an animation of `frames` frames.
///
/// `t` must be less than `frames`.
#[inline]
pub fn margin(t: usize, frames: usize, direction: Direction) -> usize {
    debug_assert!(t < frames, "frame {t} out of range for {frames} frames");

    match direction {
        Direction::Forward => t,
        Direction::Reverse => frames - 1 - t,
    }
}

/// Clears the screen and writes every line of `content` indented by `margin`
/// spaces.
pub fn render_frame<W: Write>(out: &mut W, content: &str, margin: usize) -> io::Result<()> {
    let indent = " ".repeat(margin);

    out.write_all(CLEAR_SCREEN)?;
    for line in content.lines() {
        writeln!(out, "{indent}{line}")?;
    }

    Ok(())
}
