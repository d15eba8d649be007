use crate::context::{AppContext, VerbosityLevel};
use crate::format;
use std::path::Path;

#[cfg(test)]
#[path = "csv_tests.rs"]
mod tests;

/// Handle the csv command: render a saved tag file as base:tag pairs.
pub fn handle_csv(ctx: &AppContext, file: &Path, base_name: &str) {
    format::print(
        ctx,
        VerbosityLevel::Verbose,
        &format!("Reading tag file: {}", file.display()),
    );

    match libhubtag::csv::tag_strings_from_file(file, base_name) {
        Ok(joined) => println!("{}", joined),
        Err(e) => {
            format::error(ctx, &format!("Failed to render tag strings: {}", e));
            std::process::exit(1);
        }
    }
}
