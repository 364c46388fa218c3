// SPDX-License-Identifier: MPL-2.0
use keepsake::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    // `--manifest <path>` picks an explicit gallery file; a bare positional
    // argument is a media directory to scan instead.
    let manifest = args.opt_value_from_str("--manifest").unwrap_or(None);
    let directory = args
        .finish()
        .into_iter()
        .next()
        .map(std::path::PathBuf::from);

    app::run(Flags {
        manifest,
        directory,
    })
}
