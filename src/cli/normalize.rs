//! Handler for `hoopedge normalize`.

use crate::cli::output;
use crate::cli::NormalizeArgs;
use crate::config::Config;
use crate::error::Result;

/// Print each name next to its canonical form.
pub fn execute(config: &Config, args: &NormalizeArgs) -> Result<()> {
    let normalizer = config.team_normalizer()?;

    for name in &args.names {
        let canonical = normalizer.normalize(name);
        if canonical == *name {
            println!("{name} {}", output::muted("(unchanged)"));
        } else {
            println!("{name} -> {}", output::highlight(canonical));
        }
    }
    Ok(())
}
