use std::str::FromStr;
use tracing::Level;
use crate::core::domain::Configuration;

pub fn log_level(config: &Configuration) -> Level {
    Level::from_str(config.log_level.trim()).unwrap_or(Level::INFO)
}

// json lines on stdout, one subscriber per process
pub fn setup_tracing(config: &Configuration) {
    tracing_subscriber::fmt()
        .with_max_level(log_level(config))
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .json()
        .init();
}

#[cfg(test)]
mod tests {
    use tracing::Level;
    use crate::core::domain::Configuration;
    use crate::utils::logging::log_level;

    #[tokio::test]
    async fn test_should_parse_log_level() {
        let mut config = Configuration::default();
        assert_eq!(Level::INFO, log_level(&config));
        config.log_level = "debug".to_string();
        assert_eq!(Level::DEBUG, log_level(&config));
        config.log_level = "WARN".to_string();
        assert_eq!(Level::WARN, log_level(&config));
        config.log_level = "chatty".to_string();
        assert_eq!(Level::INFO, log_level(&config));
    }
}
