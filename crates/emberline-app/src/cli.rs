use clap::Parser;

/// Emberline — presentation core for a location-channel mesh chat client.
#[derive(Parser, Debug)]
#[command(name = "emberline", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
