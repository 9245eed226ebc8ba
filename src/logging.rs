/// Configures the process-wide subscriber: env-filter with an `info` default,
/// plain text output. Calling it again after the global subscriber is set is
/// a no-op, so any entry point can invoke it unconditionally.
pub fn init() {
    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "info,kinoteka=debug,sqlx=warn".to_string());

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_does_not_panic() {
        init();
        init();
        tracing::info!("logger usable after repeated init");
    }
}
