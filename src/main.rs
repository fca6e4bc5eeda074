// SPDX-License-Identifier: MPL-2.0
use orphanage_finder::app::{self, paths, Flags, Screen};
use tracing_subscriber::{fmt, EnvFilter};

const HELP: &str = "\
Orphanage Finder

USAGE:
  orphanage_finder [OPTIONS]

OPTIONS:
  -h, --help              Print this help
  --lang <LOCALE>         Interface language (e.g. en-US, fr)
  --config-dir <PATH>     Directory holding settings.toml
  --screen <SCREEN>       Start screen: map, create or details

ENVIRONMENT:
  ORPHANAGE_FINDER_CONFIG_DIR   Config directory when --config-dir is absent
  RUST_LOG                      Log filter (default: info)
";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        screen: args.opt_value_from_str::<_, Screen>("--screen")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(flags)
}

fn main() -> iced::Result {
    init_tracing();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
