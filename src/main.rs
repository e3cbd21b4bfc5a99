//! `arcball` viewer binary.
//!
//! ```text
//! arcball [OPTIONS.toml]
//! arcball --write-schema PATH
//! ```

use std::path::Path;

use arcball::{options::Options, Viewer};

fn load_options(arg: Option<&str>) -> Result<Options, arcball::ArcballError> {
    match arg {
        Some(path) => {
            log::info!("loading options from {path}");
            Options::load(Path::new(path))
        }
        None => Ok(Options::default()),
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.first().map(String::as_str) == Some("--write-schema") {
        let Some(path) = args.get(1) else {
            log::error!("Usage: arcball --write-schema <PATH>");
            std::process::exit(1);
        };
        if let Err(e) = Options::write_schema(Path::new(path)) {
            log::error!("{e}");
            std::process::exit(1);
        }
        log::info!("wrote options schema to {path}");
        return;
    }

    let options = match load_options(args.first().map(String::as_str)) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = Viewer::builder().with_options(options).build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
