// SPDX-License-Identifier: MPL-2.0

use crier::app::{self, Flags};
use pico_args;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        // Invalid or missing --theme values fall through to the saved config
        theme: args.opt_value_from_str("--theme").ok().flatten(),
    };

    app::run(flags)
}
