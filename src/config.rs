use crate::animation::Direction;
use crate::error::AppError;
use crate::source::Source;

use clap::ArgMatches;

use std::io::Read;
use std::time::Duration;

pub const MIN_FRAMES: i64 = 1;
pub const MAX_FRAMES: i64 = 200;
pub const DEFAULT_FRAMES: i64 = 50;

pub const MIN_FPS: i64 = 1;
pub const MAX_FPS: i64 = 60;
pub const DEFAULT_FPS: i64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub content: String,
    pub direction: Direction,
    pub frames: usize,
    pub interval: Duration,
}

impl Config {
    /// Builds a config from parsed arguments, loading the content from the
    /// selected source. `input` is only read when no file was given.
    pub fn from_matches<R: Read>(matches: &ArgMatches, input: R) -> Result<Self, AppError> {
        let source = Source::from(matches.get_one::<String>("file").map(String::as_str));
        let content = source.load(input)?;
        log::debug!("loaded {} bytes from {source}", content.len());

        let frames = matches
            .get_one::<i64>("frames")
            .copied()
            .unwrap_or(DEFAULT_FRAMES);
        let fps = matches.get_one::<i64>("fps").copied().unwrap_or(DEFAULT_FPS);

        Ok(Self {
            content,
            direction: Direction::from_reverse(matches.get_flag("reverse")),
            frames: validate_frames(frames)?,
            interval: frame_interval(validate_fps(fps)?),
        })
    }
}

fn validate_frames(frames: i64) -> Result<usize, AppError> {
    if frames < MIN_FRAMES {
        return Err(AppError::FramesTooSmall {
            min: MIN_FRAMES,
            got: frames,
        });
    }
    if frames > MAX_FRAMES {
        return Err(AppError::FramesTooLarge {
            max: MAX_FRAMES,
            got: frames,
        });
    }

    Ok(frames as usize)
}

fn validate_fps(fps: i64) -> Result<u64, AppError> {
    if fps < MIN_FPS {
        return Err(AppError::FpsTooSmall {
            min: MIN_FPS,
            got: fps,
        });
    }
    if fps > MAX_FPS {
        return Err(AppError::FpsTooLarge {
            max: MAX_FPS,
            got: fps,
        });
    }

    Ok(fps as u64)
}

/// Time between two frames. The division truncates, so 3 fps gives 333ms.
#[inline]
pub fn frame_interval(fps: u64) -> Duration {
    Duration::from_millis(1000 / fps)
}
