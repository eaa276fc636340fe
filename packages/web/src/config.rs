use tutoring::ClientConfig;

const CONFIG_TOML: &str = include_str!("../tutoring.toml");

/// Parse the embedded configuration, falling back to the defaults.
/// The parse error, if any, is returned so it can be logged once logging is up.
pub fn load() -> (ClientConfig, Option<String>) {
    match ClientConfig::from_toml(CONFIG_TOML) {
        Ok(config) => (config, None),
        Err(e) => (ClientConfig::default(), Some(e.to_string())),
    }
}
