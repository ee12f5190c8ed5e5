use crate::animation;
use crate::cli;
use crate::config::Config;
use crate::error::AppError;

use clap::error::ErrorKind;
use clap::Command;

use std::ffi::OsString;
use std::io::{self, Read, Write};
use std::time::Duration;

/// Waits between two frames.
pub trait Pacer {
    fn pause(&mut self, interval: Duration);
}

/// Sleeps with `spin_sleep` so short intervals at high fps stay accurate.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpinPacer;

impl Pacer for SpinPacer {
    fn pause(&mut self, interval: Duration) {
        spin_sleep::sleep(interval);
    }
}

pub struct App<W, P = SpinPacer> {
    config: Config,
    out: W,
    pacer: P,
}

impl<W: Write> App<W> {
    /// Parses `args` (including the program name) and loads the content,
    /// reading standard input when no file is given.
    ///
    /// Usage errors print the help text to `err` before returning.
    pub fn new<I, T, E>(args: I, out: W, err: E) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
        E: Write,
    {
        Self::with_input(args, io::stdin().lock(), out, err)
    }

    /// Same as [`App::new`], with an explicit byte source in place of
    /// standard input.
    pub fn with_input<I, T, R, E>(args: I, input: R, out: W, mut err: E) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
        R: Read,
        E: Write,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let mut cmd = cli::build();

        let matches = match cmd.try_get_matches_from_mut(args.iter().cloned()) {
            Ok(matches) => matches,
            Err(e) => {
                log::debug!("argument parsing failed: {:?}", e.kind());
                if e.kind() != ErrorKind::DisplayHelp {
                    if let Some(line) = e.render().to_string().lines().next() {
                        let _ = writeln!(err, "{line}");
                    }
                }
                print_usage(&mut cmd, &mut err);
                return Err(AppError::Parse {
                    args: join_args(&args),
                });
            }
        };

        let config = match Config::from_matches(&matches, input) {
            Ok(config) => config,
            Err(e) => {
                if e.is_config() {
                    print_usage(&mut cmd, &mut err);
                }
                return Err(e);
            }
        };

        Ok(Self {
            config,
            out,
            pacer: SpinPacer,
        })
    }
}

impl<W: Write, P: Pacer> App<W, P> {
    pub fn with_pacer<Q: Pacer>(self, pacer: Q) -> App<W, Q> {
        App {
            config: self.config,
            out: self.out,
            pacer,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Renders every frame in order, pausing after each one. Stops at the
    /// first failed write.
    pub fn run(&mut self) -> Result<(), AppError> {
        let Config {
            content,
            direction,
            frames,
            interval,
        } = &self.config;

        for t in 0..*frames {
            let margin = animation::margin(t, *frames, *direction);
            log::trace!("frame {}/{frames}, margin {margin}", t + 1);

            animation::render_frame(&mut self.out, content, margin)?;
            self.out.flush()?;

            self.pacer.pause(*interval);
        }

        Ok(())
    }
}

fn print_usage<E: Write>(cmd: &mut Command, err: &mut E) {
    if let Err(e) = write!(err, "{}", cmd.render_help()) {
        log::warn!("could not print usage: {e}");
    }
}

fn join_args(args: &[OsString]) -> String {
    args.iter()
        .skip(1)
        .map(|arg| arg.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}
