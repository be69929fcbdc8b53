// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, Flags};
use iced_gallery::config;

const USAGE: &str = "\
Usage: iced_gallery [OPTIONS]

Options:
  --endpoint <URL>    Image list URL (overrides [source].endpoint)
  --lang <ID>         UI language, e.g. en-US or fr
  --config-dir <DIR>  Directory holding settings.toml
  -h, --help          Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        endpoint: args.opt_value_from_str("--endpoint")?,
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {rest:?}");
    }
    Ok(flags)
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("iced_gallery=info"))
        .init();

    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        print!("{USAGE}");
        return Ok(());
    }

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    config::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
