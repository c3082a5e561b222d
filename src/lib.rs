extern crate json;
extern crate futures;
extern crate tokio;
extern crate url;
extern crate reqwest;
extern crate tracing;

//Modules
mod functions;
mod implementations;
pub mod structures;
pub mod traits;

#[cfg(test)]
mod test_server;

pub use crate::functions::{build_candidate_urls, check_mirrors, collect_results, probe_url, spawn_probes};
pub use crate::structures::{Eligibility, Error, MetadataEndpoints, MirrorEntry, ProbeConfig, ProbeResult, ReleaseInfo, Report, Tally};
pub use crate::traits::MetadataSource;
