//! mapling binary: ask a model for a topic outline and save it as an XMind map.
//!
//! Startup order: parse args, install tracing (stderr), apply `.env`/XDG
//! config to the process env, read the API key and model from the env, run
//! the pipeline. Progress and the decoded tree go to stdout; a failed run
//! prints the error and exits non-zero without writing the file.

use std::io::Write as _;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use mapling::llm::{MockClient, ModelClient, OpenAIConfig, OpenAiClient, DEFAULT_MODEL};
use mapling::{OutlineFormat, Pipeline};

/// Env var consulted for the model name when `--model` is not given.
const MODEL_ENV: &str = "MAPLING_MODEL";

#[derive(Parser, Debug)]
#[command(name = "mapling")]
#[command(about = "mapling — generate an XMind mind map for a topic via an LLM")]
struct Args {
    /// Topic to outline (prompted interactively when omitted)
    topic: Option<String>,

    /// Reply format to request from the model and decode
    #[arg(short, long, value_enum, default_value = "json")]
    format: FormatArg,

    /// Output mind-map path; an existing file gains a new sheet
    #[arg(short, long, default_value = "mindmap.xmind", value_name = "PATH")]
    output: PathBuf,

    /// Model name (default: MAPLING_MODEL env or gpt-4o-mini)
    #[arg(long, value_name = "NAME")]
    model: Option<String>,

    /// Sampling temperature
    #[arg(long, value_name = "T")]
    temperature: Option<f32>,

    /// Read the model reply from this file instead of calling the API
    #[arg(long, value_name = "PATH")]
    mock: Option<PathBuf>,

    /// Verbose: debug-level logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum FormatArg {
    Json,
    Markdown,
}

impl From<FormatArg> for OutlineFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Json => OutlineFormat::Json,
            FormatArg::Markdown => OutlineFormat::Markdown,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// One line of interactive input when no topic argument was given.
fn read_topic_line() -> std::io::Result<String> {
    print!("Topic: ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn resolve_model(arg: Option<&str>) -> String {
    arg.map(str::to_string)
        .or_else(|| std::env::var(MODEL_ENV).ok())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}

/// Builds the model client: a canned-reply mock when `--mock` is given, else
/// the OpenAI client with the key and base URL read from the environment here
/// and passed in explicitly. A missing key is not validated; the request
/// simply fails upstream.
fn build_client(args: &Args) -> Result<Box<dyn ModelClient>, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.mock {
        let reply = std::fs::read_to_string(path)?;
        return Ok(Box::new(MockClient::new(reply)));
    }

    let mut config = OpenAIConfig::new();
    if let Ok(key) = std::env::var("OPENAI_API_KEY") {
        config = config.with_api_key(key);
    }
    if let Ok(base) = std::env::var("OPENAI_BASE_URL") {
        config = config.with_api_base(base);
    }

    let mut client = OpenAiClient::new(config, resolve_model(args.model.as_deref()));
    if let Some(t) = args.temperature {
        client = client.with_temperature(t);
    }
    Ok(Box::new(client))
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = config::load_and_apply("mapling", None) {
        tracing::warn!(error = %e, "config load failed; continuing with process env only");
    }

    let topic = match args.topic.clone() {
        Some(t) => t,
        None => read_topic_line()?,
    };
    if topic.is_empty() {
        return Err("no topic given".into());
    }

    let client = build_client(&args)?;
    let pipeline = Pipeline::new(client, args.format.into(), args.output.clone());

    println!("Requesting an outline of '{}'...", topic);
    let tree = pipeline.run(&topic).await?;

    println!("Outline:");
    print!("{}", tree);
    println!("Mind map saved to '{}'", pipeline.output().display());
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);
    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_args_parse() {
        let args = Args::parse_from(["mapling", "Tea ceremonies"]);
        assert_eq!(args.topic.as_deref(), Some("Tea ceremonies"));
        assert_eq!(args.format, FormatArg::Json);
        assert_eq!(args.output, PathBuf::from("mindmap.xmind"));
        assert!(args.mock.is_none());
    }

    #[test]
    fn format_flag_maps_to_outline_format() {
        let args = Args::parse_from(["mapling", "-f", "markdown", "x"]);
        assert_eq!(OutlineFormat::from(args.format), OutlineFormat::Markdown);
    }

    #[test]
    fn model_resolution_prefers_flag_over_env() {
        std::env::set_var(MODEL_ENV, "env-model");
        assert_eq!(resolve_model(Some("flag-model")), "flag-model");
        assert_eq!(resolve_model(None), "env-model");
        std::env::remove_var(MODEL_ENV);
        assert_eq!(resolve_model(None), DEFAULT_MODEL);
    }

    #[test]
    fn mock_flag_builds_canned_client() {
        let dir = tempfile::tempdir().unwrap();
        let reply = dir.path().join("reply.json");
        std::fs::write(&reply, r#"{"title":"T","subtopics":[]}"#).unwrap();
        let args = Args::parse_from([
            "mapling",
            "--mock",
            reply.to_str().unwrap(),
            "topic",
        ]);
        assert!(build_client(&args).is_ok());
    }
}
