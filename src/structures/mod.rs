pub mod error;
pub use error::Error;

pub mod release_info;
pub use release_info::ReleaseInfo;

pub mod mirror_entry;
pub use mirror_entry::MirrorEntry;

pub mod eligibility;
pub use eligibility::Eligibility;

pub mod probe_config;
pub use probe_config::ProbeConfig;

pub mod probe_result;
pub use probe_result::ProbeResult;

pub mod tally;
pub use tally::Tally;

pub mod report;
pub use report::Report;

pub mod metadata_endpoints;
pub use metadata_endpoints::MetadataEndpoints;
