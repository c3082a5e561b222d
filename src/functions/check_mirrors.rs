use tracing::{info, instrument};

use crate::functions::{build_candidate_urls, collect_results, spawn_probes};
use crate::structures::{Eligibility, Error, ProbeConfig, Report, Tally};
use crate::traits::MetadataSource;

/// Fetches the latest release and the mirror list, then probes every eligible mirror's iso.
///
/// Only a failure to retrieve the metadata is an error. Unreachable mirrors are counted in the returned `Tally`.
#[instrument(skip_all, fields(eligibility = %eligibility))]
pub async fn check_mirrors<S>(source: &S, eligibility: Eligibility, config: &ProbeConfig, mut on_report: impl FnMut(Report<'_>)) -> Result<Tally, Error>
where
  S: MetadataSource + ?Sized,
{
  let release = source.fetch_release_info().await.map_err(|error| Error::MetadataFetch("release information", Box::new(error)))?;
  info!("Latest version is {}", release.latest_version);
  on_report(Report::LatestVersion(&release));

  let mirrors = source.fetch_mirror_list().await.map_err(|error| Error::MetadataFetch("mirror list", Box::new(error)))?;
  let urls = build_candidate_urls(&release, &mirrors, eligibility);
  info!("{} of {} mirrors are eligible", urls.len(), mirrors.len());
  on_report(Report::Candidates(urls.len()));

  let (receiver, total) = spawn_probes(urls, config);
  let tally = collect_results(receiver, total, |tally| on_report(Report::Progress(tally))).await;
  info!("{}", tally);
  Ok(tally)
}
