use clap::{Args, Parser, Subcommand};
use taginfo::config::Config;
use taginfo::{Geometry, Params, TagInfo};

#[derive(Parser)]
#[command(name = "taginfo", about = "Query OpenStreetMap taginfo for tag suggestions")]
struct Cli {
    /// Log at debug level to stderr (overridden by RUST_LOG).
    #[arg(long, global = true)]
    debug: bool,

    /// Base URL of the taginfo API, e.g. https://taginfo.openstreetmap.org/api/4/
    #[arg(long, global = true)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Popular keys
    Keys(QueryArgs),
    /// Namespaced keys with exactly one `:`
    Multikeys(QueryArgs),
    /// Values in use for a key
    Values(QueryArgs),
    /// Wiki pages for a key, tag or relation type (raw JSON)
    Docs(QueryArgs),
}

#[derive(Args)]
struct QueryArgs {
    /// Geometry of the feature being tagged (point, vertex, area, line, relation).
    #[arg(long)]
    geometry: Option<Geometry>,
    #[arg(long)]
    key: Option<String>,
    #[arg(long)]
    value: Option<String>,
    #[arg(long)]
    rtype: Option<String>,
    /// Prefix to search for.
    #[arg(long)]
    query: Option<String>,
    /// Element type filter (nodes, ways, relations).
    #[arg(long)]
    filter: Option<String>,
}

impl From<QueryArgs> for Params {
    fn from(args: QueryArgs) -> Self {
        Params {
            geometry: args.geometry,
            key: args.key,
            value: args.value,
            rtype: args.rtype,
            query: args.query,
            filter: args.filter,
            ..Params::default()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(if cli.debug { "debug" } else { "info" })
            }),
        )
        .init();

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "falling back to built-in config");
        Config::defaults()
    });
    let client = TagInfo::from_config(&config.client)?;
    if let Some(endpoint) = cli.endpoint {
        client.set_endpoint(endpoint);
    }
    tracing::debug!(endpoint = %client.endpoint(), "taginfo client ready");

    match cli.command {
        Command::Keys(args) => print_suggestions(client.keys(args.into()).await?),
        Command::Multikeys(args) => print_suggestions(client.multikeys(args.into()).await?),
        Command::Values(args) => print_suggestions(client.values(args.into()).await?),
        Command::Docs(args) => {
            let pages = client.docs(args.into()).await?;
            println!("{}", serde_json::to_string_pretty(&pages)?);
        }
    }

    Ok(())
}

fn print_suggestions(suggestions: Vec<taginfo::Suggestion>) {
    for suggestion in suggestions {
        println!("{suggestion}");
    }
}
