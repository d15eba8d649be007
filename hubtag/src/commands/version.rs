/// Get the version string for hubtag and libhubtag
pub fn get_version_string() -> String {
    format!(
        "hubtag {}\nlibhubtag {}",
        env!("CARGO_PKG_VERSION"),
        libhubtag::version()
    )
}

/// Print version information to stdout
pub fn print_version() {
    println!("{}", get_version_string());
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
