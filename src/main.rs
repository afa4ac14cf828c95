// SPDX-License-Identifier: MPL-2.0
use iced_loupe::app::{self, Flags};

const USAGE: &str = "usage: iced_loupe [--config-dir DIR] [--magnification N] [IMAGE]";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    let config_dir = args.opt_value_from_str("--config-dir")?;
    let magnification = args.opt_value_from_str("--magnification")?;
    let image_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Flags {
        image_path,
        config_dir,
        magnification,
    })
}

fn main() -> iced::Result {
    env_logger::init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n{USAGE}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
