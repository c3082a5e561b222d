use std::io::Write;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use mirror_checker::{check_mirrors, Eligibility, MetadataEndpoints, ProbeConfig, Report};

/// Checks which Arch Linux mirrors serve the iso of the latest release
#[derive(Parser, Debug)]
#[command(name = "mirror-checker", version)]
struct Arguments {
  /// Seconds a single probe may take, including connecting and the TLS handshake
  #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u64).range(1..))]
  timeout: u64,

  /// Upper bound on probes in flight, unbounded when left out
  #[arg(long)]
  max_concurrent_probes: Option<usize>,

  /// Which mirrors get probed: secure-active-isos or any-transport
  #[arg(long, default_value_t = Eligibility::SecureActiveIsos)]
  eligibility: Eligibility,

  #[arg(long, default_value = MetadataEndpoints::RELEASES_URL)]
  releases_url: String,

  #[arg(long, default_value = MetadataEndpoints::MIRRORS_URL)]
  mirrors_url: String,

  /// Ignore the proxy environment variables
  #[arg(long)]
  no_proxy: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .init();

  let arguments = Arguments::parse();
  let mut source = MetadataEndpoints::new(arguments.releases_url, arguments.mirrors_url);
  source.system_proxy = !arguments.no_proxy;
  let config = ProbeConfig {
    timeout: Duration::from_secs(arguments.timeout),
    max_concurrent_probes: arguments.max_concurrent_probes,
    system_proxy: !arguments.no_proxy,
  };

  let mut stdout = std::io::stdout();
  let result = check_mirrors(&source, arguments.eligibility, &config, |report| match report {
    Report::LatestVersion(release) => println!("Latest version is {}", release.latest_version),
    Report::Candidates(_) => {},
    Report::Progress(tally) => {
      print!("\r{}", tally);
      if let Err(error) = stdout.flush() {
        debug!("Couldn't flush the progress line: {}", error);
      }
    },
  }).await;

  match result {
    Ok(_) => {
      println!();
      ExitCode::SUCCESS
    },
    Err(error) => {
      eprintln!("Error: {}", error);
      ExitCode::FAILURE
    },
  }
}
