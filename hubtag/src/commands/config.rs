use crate::config::{self, Config};
use crate::context::AppContext;
use crate::format::{self, OutputFormat};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Write a default config file unless one already exists.
pub fn handle_init(ctx: &AppContext) {
    let path = config::get_config_path();

    if path.exists() {
        format::warning(
            ctx,
            &format!("Config file already exists at {}", path.display()),
        );
        return;
    }

    let config = Config::default();
    match config.save(&path) {
        Ok(()) => format::success(ctx, &format!("Created config file at {}", path.display())),
        Err(e) => {
            format::error(ctx, &e);
            std::process::exit(1);
        }
    }
}

/// Print the whole config, or a single dotted key.
pub fn handle_get(ctx: &AppContext, key: Option<&str>, fmt: OutputFormat) {
    match key {
        Some(key) => match ctx.config.get_value(key) {
            Some(value) => println!("{}", value),
            None => {
                format::error(ctx, &format!("Unknown configuration key '{}'", key));
                std::process::exit(1);
            }
        },
        None => match format::format_output(&ctx.config, fmt) {
            Ok(output) => println!("{}", output),
            Err(e) => {
                format::error(ctx, &e);
                std::process::exit(1);
            }
        },
    }
}

/// Set a dotted key and persist the file.
pub fn handle_set(ctx: &AppContext, key: &str, value: &str) {
    let path = config::get_config_path();

    // Start from the file on disk so unrelated keys survive, falling back to
    // the resolved context when no file exists yet
    let mut config = Config::load(&path).unwrap_or_else(|_| ctx.config.clone());

    if let Err(e) = config.set_value(key, value) {
        format::error(ctx, &e);
        std::process::exit(1);
    }

    match config.save(&path) {
        Ok(()) => format::success(ctx, &format!("Set {} = {}", key, value)),
        Err(e) => {
            format::error(ctx, &e);
            std::process::exit(1);
        }
    }
}
