//! Command line interface
//!
//! `key` runs the key deriver on JSON given on the command line. `demo` wires
//! the configured backend, a local broker and the cache middleware around a
//! small handler, then calls it twice.

use actcache_domain::cache_key::KeyDeriver;
use actcache_domain::ports::{Broker, CacheBackend};
use actcache_domain::value_objects::{ActionDescriptor, InvocationContext};
use actcache_infrastructure::cache::{ActionHandler, create_cacher};
use actcache_infrastructure::config::{AppConfig, ConfigLoader};
use actcache_infrastructure::infrastructure::LocalBroker;
use actcache_infrastructure::logging::init_logging;
use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use futures::FutureExt;
use serde_json::{Value, json};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

/// Action name used by the demo command
pub const DEMO_ACTION: &str = "demo.greet";

/// Command line interface for actcache
#[derive(Parser, Debug)]
#[command(name = "actcache")]
#[command(about = "Action result cache - key derivation and middleware demo")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the cache key derived for an action invocation
    Key(KeyArgs),

    /// Run one cache miss and one cache hit through the middleware
    Demo {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Arguments of the `key` command
#[derive(Args, Debug, Clone, Default)]
pub struct KeyArgs {
    /// Action name, e.g. `posts.find`
    pub action: String,

    /// Invocation params as JSON
    #[arg(long)]
    pub params: Option<String>,

    /// Invocation meta as JSON
    #[arg(long)]
    pub meta: Option<String>,

    /// Comma separated selectors; `#` resolves against meta
    #[arg(long, value_delimiter = ',', conflicts_with = "no_keys")]
    pub keys: Option<Vec<String>>,

    /// Use an empty selector list (key on the action name only)
    #[arg(long)]
    pub no_keys: bool,

    /// Bound the value part of the key, hashing the overflow
    #[arg(long)]
    pub max_params_length: Option<usize>,
}

/// Outcome of the demo command
#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    /// Backend key used for both calls
    pub key: String,
    /// Result of the first call
    pub first: Value,
    /// Result of the second call
    pub second: Value,
    /// How many times the handler actually ran
    pub handler_runs: usize,
}

/// Dispatch a parsed command line
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Key(args) => {
            println!("{}", derive_key(&args)?);
            Ok(())
        }
        Command::Demo { config } => {
            let loader = match config {
                Some(path) => ConfigLoader::new().with_config_path(path),
                None => ConfigLoader::new(),
            };
            let config = loader.load()?;
            init_logging(config.logging.clone())?;

            let report = run_demo(&config).await?;
            println!("key:          {}", report.key);
            println!("first call:   {}", report.first);
            println!("second call:  {}", report.second);
            println!("handler runs: {}", report.handler_runs);
            Ok(())
        }
    }
}

/// Derive the key described by `args`
pub fn derive_key(args: &KeyArgs) -> anyhow::Result<String> {
    let params = parse_json("--params", args.params.as_deref())?;
    let meta = parse_json("--meta", args.meta.as_deref())?;
    let selectors = if args.no_keys {
        Some(Vec::new())
    } else {
        args.keys.clone()
    };

    if args.max_params_length == Some(0) {
        bail!("--max-params-length must be greater than 0");
    }

    let deriver = KeyDeriver::new().with_max_params_length(args.max_params_length);
    deriver
        .derive_key(
            Some(args.action.as_str()),
            params.as_ref(),
            meta.as_ref(),
            selectors.as_deref(),
        )?
        .context("No cache key could be derived")
}

/// Call a cached greeting action twice with the same params
pub async fn run_demo(config: &AppConfig) -> anyhow::Result<DemoReport> {
    let broker: Arc<dyn Broker> = Arc::new(LocalBroker::new(&config.broker));
    let cacher = create_cacher(&config.cacher, &broker)?;

    let runs = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&runs);
    let handler: ActionHandler = Arc::new(move |ctx: InvocationContext| {
        counter.fetch_add(1, Ordering::SeqCst);
        let name = ctx
            .params()
            .and_then(|params| params.get("name"))
            .and_then(Value::as_str)
            .unwrap_or("world")
            .to_string();
        async move { Ok(json!({ "greeting": format!("Hello, {name}!") })) }.boxed()
    });

    let action = ActionDescriptor::new(DEMO_ACTION).with_cache(true);
    let greet = cacher.middleware().wrap(handler, &action);
    let ctx = InvocationContext::new().with_params(json!({ "name": "Antsa" }));

    let key = cacher
        .derive_key(Some(DEMO_ACTION), ctx.params(), ctx.meta(), None)?
        .map(|key| format!("{}{key}", cacher.prefix()))
        .context("No cache key could be derived")?;

    let first = greet(ctx.clone()).await?;
    info!(key = %key, result = %first, "First call");
    let second = greet(ctx).await?;
    info!(key = %key, result = %second, "Second call");

    cacher.close().await?;

    Ok(DemoReport {
        key,
        first,
        second,
        handler_runs: runs.load(Ordering::SeqCst),
    })
}

fn parse_json(flag: &str, raw: Option<&str>) -> anyhow::Result<Option<Value>> {
    raw.map(|text| serde_json::from_str(text).with_context(|| format!("{flag} is not valid JSON")))
        .transpose()
}
