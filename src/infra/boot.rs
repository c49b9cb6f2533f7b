use std::net::SocketAddr;

use crate::infra::config::Config;
use crate::tools::registry::{build_registry, ToolRegistry};

pub async fn run_server() -> anyhow::Result<()> {
    let cfg = Config::load();
    tracing::info!(
        mode = %cfg.mode,
        port = cfg.port,
        disable_rpc = cfg.disable_rpc,
        "BOOT calc-mcp-gateway"
    );

    // Stdio mode: MCP over stdin/stdout ONLY. Keep stdout clean for frames.
    if cfg.mode == "stdio" {
        crate::infra::mcp_transport::serve_stdio(crate::tools::tool_router::factory)
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
        return Ok(());
    }

    let registry = build_registry();
    print_banner(&registry, cfg.port);

    let app = if cfg.disable_rpc {
        crate::infra::http_app::build_app_default()
    } else {
        crate::infra::http_app::build_app_with_rpc(registry)
    };

    let addr: SocketAddr = ([0, 0, 0, 0], cfg.port).into();
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}

/// Startup banner with the tool catalog, printed to stdout in HTTP mode.
fn print_banner(registry: &ToolRegistry, port: u16) {
    println!("calc-mcp-gateway v{}", env!("CARGO_PKG_VERSION"));
    println!("MCP endpoint: http://0.0.0.0:{port}/mcp");
    println!("available tools:");
    for meta in registry.list() {
        println!("  {:<14} {}", meta.name, meta.description);
    }
    println!("press Ctrl+C to stop");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn defaults_to_http_server_mode() {
        std::env::remove_var("MODE");
        std::env::remove_var("CALC_CONFIG");
        let cfg = Config::load();
        assert_eq!(cfg.mode, "server");
    }

    #[test]
    fn banner_renders_without_panicking() {
        print_banner(&build_registry(), 8000);
    }
}
