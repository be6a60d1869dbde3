//! `env_logger` setup shared by the binaries.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::Local;
use env_logger::{Builder, Env, Target, WriteStyle};

use crate::errors::DraughtsResult;

/// Install the global logger. `RUST_LOG` overrides the `debug` flag when set.
///
/// With `log_file`, output is appended to that file instead of stderr so the
/// board on stdout stays readable.
pub fn init_logging(debug: bool, log_file: Option<&Path>) -> DraughtsResult<()> {
    let level = if debug { "debug" } else { "info" };
    let mut builder = Builder::from_env(Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, level));

    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} {}: {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .write_style(WriteStyle::Never);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        None => {
            builder.target(Target::Stderr);
        }
    }

    builder.try_init()?;
    Ok(())
}
