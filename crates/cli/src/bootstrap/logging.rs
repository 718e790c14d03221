use direct_dns_domain::Config;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins; otherwise the configured level plus any module directives.
fn build_env_filter(config: &Config) -> anyhow::Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let mut filter = EnvFilter::new("").add_directive(parse_directive(&config.logging.level)?);
    for directive in &config.logging.module_levels {
        filter = filter.add_directive(parse_directive(directive)?);
    }
    Ok(filter)
}

pub fn init_logging(config: &Config) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(config)?)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}

fn parse_directive(raw: &str) -> anyhow::Result<Directive> {
    raw.parse()
        .map_err(|e| anyhow::anyhow!("Invalid log directive '{}': {}", raw, e))
}
