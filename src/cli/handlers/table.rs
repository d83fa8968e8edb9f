use shortening::Scheme;
use std::io::{self, Write};

pub fn handle(scheme: Scheme) -> Result<(), Box<dyn std::error::Error>> {
    let codec = scheme.bounded().ok_or_else(|| {
        format!(
            "scheme '{}' has no length limit and therefore no threshold table",
            scheme
        )
    })?;

    let mut out = io::stdout().lock();
    writeln!(out, "{:>6}  {:>20}", "length", "smallest value")?;
    for (i, min) in codec.table().as_slice().iter().enumerate() {
        writeln!(out, "{:>6}  {:>20}", i + 1, min)?;
    }
    Ok(())
}
