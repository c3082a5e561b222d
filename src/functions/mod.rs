mod build_client;
mod fetch_document;
mod build_candidate_urls;
mod probe_url;
mod spawn_probes;
mod collect_results;
mod check_mirrors;

pub(crate) use build_client::build_client as build_client;
pub(crate) use fetch_document::fetch_document as fetch_document;
pub use build_candidate_urls::build_candidate_urls as build_candidate_urls;
pub use probe_url::probe_url as probe_url;
pub use spawn_probes::spawn_probes as spawn_probes;
pub use collect_results::collect_results as collect_results;
pub use check_mirrors::check_mirrors as check_mirrors;
