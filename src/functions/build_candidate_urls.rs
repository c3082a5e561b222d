use tracing::debug;

use crate::structures::{Eligibility, MirrorEntry, ReleaseInfo};

/// One iso url per eligible mirror, in the order of `mirrors`.
pub fn build_candidate_urls(release: &ReleaseInfo, mirrors: &[MirrorEntry], eligibility: Eligibility) -> Vec<String> {
  mirrors
    .iter()
    .filter(|mirror| eligibility.admits(mirror))
    .filter(|mirror| match url::Url::parse(&mirror.base_url) {
      Ok(_) => true,
      Err(error) => {
        debug!("Skipping mirror with unusable url {:?}: {}", mirror.base_url, error);
        false
      },
    })
    .map(|mirror| release.iso_url(&mirror.base_url))
    .collect()
}
