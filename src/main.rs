// SPDX-License-Identifier: MPL-2.0
use sequestered_atelier::app::{self, paths, Flags};
use sequestered_atelier::logging;

const HELP: &str = "\
Sequestered Atelier - artwork gallery

USAGE:
  sequestered_atelier [OPTIONS]

OPTIONS:
  --lang <id>          UI language (e.g. en-US, fr)
  --config-dir <dir>   Directory holding settings.toml
  --assets-dir <dir>   Directory artwork images resolve against
  --i18n-dir <dir>     Extra Fluent .ftl translations
  --verbose            Debug logging
  -h, --help           Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let verbose = args.contains("--verbose");
    logging::init(verbose);

    let flags = Flags {
        lang: opt_value(&mut args, "--lang"),
        i18n_dir: opt_value(&mut args, "--i18n-dir"),
        config_dir: opt_value(&mut args, "--config-dir"),
        assets_dir: opt_value(&mut args, "--assets-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone(), flags.assets_dir.clone());
    tracing::debug!(?flags, "parsed command line");

    app::run(flags)
}

fn opt_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%key, error = %err, "ignoring invalid argument");
            None
        }
    }
}
