use crate::config::{DEFAULT_FPS, DEFAULT_FRAMES, MAX_FPS, MAX_FRAMES, MIN_FPS, MIN_FRAMES};

use clap::{arg, command, value_parser, ArgAction, Command};

const ABOUT: &str = "marquee is a command line tool to scroll some text across the console.";

const EXAMPLES: &str = "EXAMPLES:
  $ marquee --file banner.txt
  $ figlet hello | marquee --reverse --fps 30";

const FILE_LONG_HELP: &str = "Path of the file whose content will be animated. \
If not set, the content is read from standard input until end of stream.";

const REVERSE_LONG_HELP: &str = "Run the animation from right to left.

By default the first frame has no margin and every following frame moves the \
content one column to the right. With this flag the first frame starts at the \
largest margin and the content moves back to the left edge.";

pub fn build() -> Command {
    command!()
        .about(ABOUT)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .after_help(EXAMPLES)
        .arg(
            arg!(-f --file <PATH> "File to animate (reads standard input if not set)")
                .long_help(FILE_LONG_HELP),
        )
        .arg(arg!(-r --reverse "Run the animation from right to left").long_help(REVERSE_LONG_HELP))
        .arg(
            arg!(-n --frames <FRAMES>)
                .help(format!(
                    "Number of frames of the animation \
                     (default: {DEFAULT_FRAMES}, min: {MIN_FRAMES}, max: {MAX_FRAMES})"
                ))
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64)),
        )
        .arg(
            arg!(-s --fps <FPS>)
                .help(format!(
                    "Frames per second of the animation \
                     (default: {DEFAULT_FPS}, min: {MIN_FPS}, max: {MAX_FPS})"
                ))
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64)),
        )
        .arg(arg!(-h --help "Print help information and quit").action(ArgAction::Help))
}
