//! Shared tracing setup for workspace binaries

use tracing_subscriber::EnvFilter;

use crate::errors::{SharedError, SharedResult};

/// Build the env-filter directives for a base level
///
/// Keeps the HTTP stack quiet at info while letting our own crates
/// follow the requested level.
fn filter_directives(base_level: &str) -> String {
    format!("webserver={base_level},shared={base_level},tower_http=warn,axum={base_level},hyper=warn")
}

/// Initialize the stdout tracing subscriber with the given log level
pub fn init_tracing(log_level: &str) -> SharedResult<()> {
    let directives = filter_directives(log_level);
    let env_filter = EnvFilter::try_new(&directives).map_err(|_| SharedError::InvalidConfig {
        field: "log_level".to_string(),
        value: log_level.to_string(),
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directives_carry_base_level() {
        let directives = filter_directives("debug");
        assert!(directives.contains("webserver=debug"));
        assert!(directives.contains("shared=debug"));
        assert!(directives.contains("tower_http=warn"));
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        let result = init_tracing("not a level!!");
        assert!(matches!(result, Err(SharedError::InvalidConfig { .. })));
    }
}
