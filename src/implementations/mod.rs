mod error;
mod release_info;
mod mirror_entry;
mod eligibility;
mod probe_config;
mod probe_result;
mod tally;
mod metadata_endpoints;
