use clap::Parser;

#[derive(Parser)]
#[command(name = "calc-agent")]
#[command(about = "Run the fixed calculator task script against an MCP server")]
#[command(version)]
struct Args {
    /// MCP endpoint of the calculator server
    #[arg(short, long, default_value = "http://127.0.0.1:8000/mcp")]
    url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    calc_mcp_gateway::infra::logging::init();
    let args = Args::parse();
    calc_mcp_gateway::agent::run(&args.url).await
}
