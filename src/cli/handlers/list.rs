use shortening::{Config, Scheme};
use std::io::{self, Write};

pub fn handle(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let default = config.default_scheme();
    let mut out = io::stdout().lock();

    writeln!(out, "Available schemes:\n")?;
    for scheme in Scheme::ALL {
        let marker = if scheme == default { "*" } else { " " };
        let limit = match scheme.max_len() {
            Some(max) => format!("max {}", max),
            None => "unbounded".to_string(),
        };
        let alphabet = scheme.alphabet();
        writeln!(
            out,
            "{} {:<8} base-{:<3} {:<10} {}",
            marker,
            scheme.name(),
            alphabet.base(),
            limit,
            alphabet.as_str()
        )?;
    }
    Ok(())
}
