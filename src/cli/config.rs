use shortening::{Config, Scheme};

use super::global::GlobalArgs;

/// Scheme named on the command line, or the configured default.
pub fn resolve_scheme(
    global: &GlobalArgs,
    config: &Config,
) -> Result<Scheme, Box<dyn std::error::Error>> {
    match &global.scheme {
        Some(name) => Ok(Scheme::from_name(name)?),
        None => Ok(config.default_scheme()),
    }
}

/// Check if colored output should be used on stderr
pub fn should_use_color(global: &GlobalArgs) -> bool {
    if global.no_color {
        return false;
    }
    // Respect NO_COLOR environment variable
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Reads non-empty, trimmed lines from stdin when no arguments were given.
pub fn inputs_or_stdin(args: &[String]) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }

    let mut lines = Vec::new();
    for line in std::io::stdin().lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    tracing::debug!(count = lines.len(), "read inputs from stdin");
    Ok(lines)
}
