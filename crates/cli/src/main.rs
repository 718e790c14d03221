use clap::Parser;
use direct_dns_application::use_cases::QuestionResponder;
use direct_dns_domain::{CliOverrides, DnsClass, DnsRequest, Question, RecordType};
use direct_dns_infrastructure::clients::{HttpCertificateStoreConnector, HttpRecordStoreConnector};
use std::sync::Arc;
use tracing::{error, info};

mod bootstrap;
mod output;

#[derive(Parser)]
#[command(name = "direct-dns")]
#[command(version)]
#[command(about = "Direct DNS - answers ANAME, MX, SOA and CERT questions from the config service")]
struct Cli {
    /// Domain to look up
    domain: String,

    /// Record type (A/ANAME, MX, SOA, CERT)
    #[arg(default_value = "A")]
    record_type: RecordType,

    /// Query class
    #[arg(long, default_value = "IN")]
    class: DnsClass,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Record store base URL
    #[arg(long)]
    record_store_url: Option<String>,

    /// Certificate store base URL
    #[arg(long)]
    certificate_store_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        record_store_url: cli.record_store_url.clone(),
        certificate_store_url: cli.certificate_store_url.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config)?;

    info!("Starting Direct DNS v{}", env!("CARGO_PKG_VERSION"));

    let responder = QuestionResponder::from_config(
        &config,
        Arc::new(HttpRecordStoreConnector),
        Arc::new(HttpCertificateStoreConnector),
    )?;

    let question = Question::new(&cli.domain, cli.class, cli.record_type)?;
    let request = DnsRequest::new(question);

    let response = responder.answer(&request).await.map_err(|e| {
        error!(domain = %cli.domain, error = %e, "Lookup failed");
        anyhow::anyhow!(e)
    })?;

    if !response.has_answers() {
        info!(domain = %cli.domain, record_type = %cli.record_type, "No answers");
    }
    print!("{}", output::render_answers(&response));

    Ok(())
}
