// SPDX-License-Identifier: MPL-2.0
use image_resizer::app::{self, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "image_resizer=info";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .compact()
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print_help();
        return Ok(());
    }

    let lang = match args.opt_value_from_str("--lang") {
        Ok(lang) => lang,
        Err(err) => {
            tracing::warn!("ignoring --lang: {err}");
            None
        }
    };
    let config_dir = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            tracing::warn!("ignoring --config-dir: {err}");
            None
        }
    };
    let files = args.finish().into_iter().map(PathBuf::from).collect();

    app::run(Flags {
        lang,
        config_dir,
        files,
    })
}

fn print_help() {
    println!(
        "image_resizer {}

Resize a batch of images and save them as one zip archive.

USAGE:
    image_resizer [OPTIONS] [IMAGE]...

OPTIONS:
    -h, --help              Print this help
    --lang <LOCALE>         User interface language (e.g. en-US, fr)
    --config-dir <DIR>      Directory holding settings.toml

ENVIRONMENT:
    IMAGE_RESIZER_CONFIG_DIR   Config directory when --config-dir is absent
    RUST_LOG                   Log filter (default: {DEFAULT_LOG_FILTER})",
        env!("CARGO_PKG_VERSION")
    );
}
