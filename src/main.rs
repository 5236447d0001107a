use std::io;

use anyhow::Context;
use clap::Parser;
use link_list::{demo, DemoConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = DemoConfig::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    demo::run(&mut out, &config).context("link list demo failed")
}
