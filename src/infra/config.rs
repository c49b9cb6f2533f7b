use serde::Deserialize;

fn default_mode() -> String {
    "server".into()
}

fn default_port() -> u16 {
    8000
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// "server" (HTTP) or "stdio".
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Drop the legacy JSON-RPC route at /rpc.
    #[serde(default)]
    pub disable_rpc: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            port: default_port(),
            disable_rpc: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut cfg = Config::default();
        if let Ok(mode) = std::env::var("MODE") {
            cfg.mode = mode;
        }
        if let Some(port) = std::env::var("PORT").ok().and_then(|s| s.parse::<u16>().ok()) {
            cfg.port = port;
        }
        cfg.disable_rpc = std::env::var("DISABLE_RPC")
            .map(|v| !v.is_empty())
            .unwrap_or(false);
        cfg
    }

    /// TOML file pointed at by CALC_CONFIG (if any), then env overrides.
    pub fn load() -> Self {
        let base = std::env::var("CALC_CONFIG")
            .ok()
            .and_then(|path| match Self::from_file(&path) {
                Ok(cfg) => Some(cfg),
                Err(e) => {
                    tracing::warn!(path, error = %e, "ignoring unreadable config file");
                    None
                }
            })
            .unwrap_or_default();
        Self::overlay_env(base)
    }

    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    fn overlay_env(mut cfg: Self) -> Self {
        if let Ok(mode) = std::env::var("MODE") {
            cfg.mode = mode;
        }
        if let Some(port) = std::env::var("PORT").ok().and_then(|s| s.parse::<u16>().ok()) {
            cfg.port = port;
        }
        if let Ok(v) = std::env::var("DISABLE_RPC") {
            cfg.disable_rpc = !v.is_empty();
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("MODE");
        std::env::remove_var("PORT");
        std::env::remove_var("DISABLE_RPC");
        std::env::remove_var("CALC_CONFIG");
    }

    #[test]
    #[serial]
    fn defaults_to_server_8000_and_rpc_enabled() {
        clear_env();
        let cfg = Config::from_env();
        assert_eq!(cfg.mode, "server");
        assert_eq!(cfg.port, 8000);
        assert!(!cfg.disable_rpc);
    }

    #[test]
    #[serial]
    fn parses_env_overrides() {
        clear_env();
        std::env::set_var("MODE", "stdio");
        std::env::set_var("PORT", "9090");
        std::env::set_var("DISABLE_RPC", "1");
        let cfg = Config::from_env();
        assert_eq!(cfg.mode, "stdio");
        assert_eq!(cfg.port, 9090);
        assert!(cfg.disable_rpc);
        clear_env();
    }

    #[test]
    #[serial]
    fn non_numeric_port_falls_back_to_default() {
        clear_env();
        std::env::set_var("PORT", "abc");
        let cfg = Config::from_env();
        assert_eq!(cfg.port, 8000);
        clear_env();
    }

    #[test]
    #[serial]
    fn toml_file_is_overlaid_by_env() {
        clear_env();
        let dir = std::env::temp_dir().join("calc-mcp-gateway-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "mode = \"stdio\"\nport = 7000\n").unwrap();

        std::env::set_var("CALC_CONFIG", path.to_str().unwrap());
        std::env::set_var("PORT", "7100");
        let cfg = Config::load();
        assert_eq!(cfg.mode, "stdio");
        assert_eq!(cfg.port, 7100);
        clear_env();
    }

    #[test]
    #[serial]
    fn missing_config_file_falls_back_to_defaults() {
        clear_env();
        std::env::set_var("CALC_CONFIG", "/nonexistent/calc.toml");
        let cfg = Config::load();
        assert_eq!(cfg.mode, "server");
        assert_eq!(cfg.port, 8000);
        clear_env();
    }
}
