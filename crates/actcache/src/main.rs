//! actcache - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `actcache key <ACTION> [--params JSON] [--meta JSON] [--keys a,#b]` | Print a derived cache key |
//! | `actcache demo [--config PATH]` | Run one miss and one hit through the middleware |

use actcache::cli::{Cli, run};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run(Cli::parse()).await
}
