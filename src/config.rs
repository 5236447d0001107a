use clap::Parser;

pub const DEFAULT_COUNT: usize = 20;

/// Runs the link list demonstration step by step.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "link_list", version)]
pub struct DemoConfig {
    /// Number of random values used by the bulk construction steps.
    #[arg(long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Seed for the random values; drawn from OS entropy when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl DemoConfig {
    /// The configured seed, or a fresh one when none was given.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            count: DEFAULT_COUNT,
            seed: None,
        }
    }
}
