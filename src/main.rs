use std::io;

use grad_check::{run_demo, DemoConfig};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; keep them quiet unless RUST_LOG asks for more.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = DemoConfig::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_demo(&mut out, &config)?;
    Ok(())
}
