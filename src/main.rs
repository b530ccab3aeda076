use tracing_subscriber::EnvFilter;

/// Bundled config for packaged builds; a local .env wins during development.
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

#[cfg(not(target_arch = "wasm32"))]
fn load_config() {
    if dotenvy::dotenv().is_ok() {
        return;
    }
    load_bundled_config();
}

#[cfg(target_arch = "wasm32")]
fn load_config() {
    load_bundled_config();
}

fn load_bundled_config() {
    for (key, value) in BUNDLED_CONFIG.lines().filter_map(parse_env_line) {
        // Never override what the process environment already carries.
        if std::env::var(key).is_err() {
            // SAFETY: env vars are set at startup before any threads are spawned
            unsafe {
                std::env::set_var(key, value);
            }
        }
    }
}

fn parse_env_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim()))
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("agripulse=info")),
        )
        .init();
}

fn main() {
    load_config();
    init_tracing();
    dioxus::launch(agripulse::ui::App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_lines_parse_key_value_pairs() {
        assert_eq!(
            parse_env_line("GEMINI_MODEL = gemini-3-flash-preview"),
            Some(("GEMINI_MODEL", "gemini-3-flash-preview"))
        );
        assert_eq!(parse_env_line("# comment"), None);
        assert_eq!(parse_env_line("   "), None);
        assert_eq!(parse_env_line("no-equals-sign"), None);
    }
}
