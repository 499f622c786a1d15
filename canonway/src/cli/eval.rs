use std::path::PathBuf;

use anyhow::{Context, bail};
use canonway_core::conf::load_config;
use canonway_core::engine::{RedirectDecision, decide};
use canonway_core::request::{QueryPairs, RequestDescriptor};
use clap::Args;
use url::Url;

#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Path to the canonway config file
    #[arg(long, default_value = "config/canonway.toml")]
    pub config: PathBuf,

    /// Request path, e.g. "about-us/"
    pub path: String,

    /// Query parameter as key=value; repeatable
    #[arg(long = "query", value_name = "KEY=VALUE")]
    pub query: Vec<String>,

    /// Treat the resolved path as the configured front page
    #[arg(long)]
    pub front_page: bool,

    /// The path arrived via legacy ?q= indirection
    #[arg(long)]
    pub legacy_q: bool,

    /// Language code for alias lookups
    #[arg(long)]
    pub lang: Option<String>,

    /// Language path prefix, e.g. "de"
    #[arg(long)]
    pub lang_prefix: Option<String>,

    /// Base URL for rendering an absolute Location
    #[arg(long)]
    pub base: Option<Url>,
}

pub fn run(args: EvalArgs) -> anyhow::Result<()> {
    let config = load_config(&args.config)?;

    let mut query = QueryPairs::new();
    for pair in &args.query {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("query parameter '{pair}' is not of the form key=value");
        };
        query.push(key, value);
    }

    let mut request = RequestDescriptor::new(args.path.clone()).with_query(query);
    if args.legacy_q {
        request = request.with_legacy_query_path();
    }
    if let Some(lang) = &args.lang {
        request = request.with_language(lang.clone());
    }
    if let Some(prefix) = &args.lang_prefix {
        request = request.with_language_prefix(prefix.clone());
    }

    let decision = decide(
        &request,
        &config.settings,
        &config.aliases,
        &config.terms,
        args.front_page,
    );

    let mut output = serde_json::to_value(&decision).context("serializing decision")?;
    if let RedirectDecision::Redirect { target } = &decision {
        let location = match &args.base {
            Some(base) => base
                .join(&target.location())
                .context("joining base URL")?
                .to_string(),
            None => target.location(),
        };
        output["location"] = serde_json::Value::String(location);
    }

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
