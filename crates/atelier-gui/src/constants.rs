//! Application identity constants.

/// Application display name.
pub const APP_NAME: &str = "Atelier Portfolio";

/// Application version from Cargo.toml.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Footer copyright line for the given holder, stamped with the current year.
pub fn copyright(holder: &str) -> String {
    let year = chrono::Local::now().format("%Y");
    format!("\u{a9} {} {}. All rights reserved.", year, holder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        let line = copyright("Designer Name");
        assert!(line.starts_with('\u{a9}'));
        assert!(line.ends_with("Designer Name. All rights reserved."));
    }
}
