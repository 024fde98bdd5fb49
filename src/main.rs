mod config;
mod environment;
mod prober;
mod report;

use config::ProbeConfig;
use environment::HostEnvironment;
use prober::{HttpProbe, ReqwestTransport};

/// Exactly one positional argument, the URL to GET.
fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<String> {
    match (args.next(), args.next()) {
        (Some(url), None) => Ok(url),
        _ => Err(anyhow::anyhow!("usage: get-probe <url>")),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let url = parse_args(std::env::args().skip(1))?;

    // library defaults; validated so a bad default fails before any request
    let config = ProbeConfig::default();
    config.validate()?;
    let log_level = config.get_tracing_level()?;

    // Init tracing with configured log level; stdout is reserved for the result
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()
                         .add_directive(format!("get_probe={}", log_level.as_str().to_lowercase()).parse()?))
        .init();

    let probe = HttpProbe::new(ReqwestTransport, HostEnvironment, HostEnvironment);
    let result = probe.probe(&config.request(&url)).await;

    println!("{}", report::render(&result)?);
    Ok(())
}
