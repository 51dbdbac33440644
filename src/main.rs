// SPDX-License-Identifier: MPL-2.0
use iced_toasts::app::{self, Flags};

const HELP: &str = "\
iced_toasts - toast notification playground

USAGE:
  iced_toasts [OPTIONS]

OPTIONS:
  --lang <LOCALE>      Interface language (e.g. en-US, fr)
  --config-dir <DIR>   Directory holding settings.toml
  --data-dir <DIR>     Directory receiving diagnostics reports
  -h, --help           Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Warning: unused arguments left: {remaining:?}");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    match parse_flags() {
        Ok(Some(flags)) => app::run(flags),
        Ok(None) => {
            print!("{HELP}");
            Ok(())
        }
        Err(error) => {
            eprintln!("Error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    }
}
