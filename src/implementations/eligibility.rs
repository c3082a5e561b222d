use std::str::FromStr;

use crate::structures::{Eligibility, MirrorEntry};

impl Eligibility {
  pub fn admits(&self, mirror: &MirrorEntry) -> bool {
    match self {
      Self::SecureActiveIsos => mirror.protocol == "https" && mirror.active && mirror.hosts_isos,
      Self::AnyTransport => mirror.protocol == "https" || mirror.protocol == "http",
    }
  }
}

impl FromStr for Eligibility {
  type Err = String;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    match value {
      "secure-active-isos" => Ok(Self::SecureActiveIsos),
      "any-transport" => Ok(Self::AnyTransport),
      _ => Err(format!("unknown eligibility \"{}\", expected \"secure-active-isos\" or \"any-transport\"", value)),
    }
  }
}

impl std::fmt::Display for Eligibility {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      Self::SecureActiveIsos => f.write_str("secure-active-isos"),
      Self::AnyTransport => f.write_str("any-transport"),
    }
  }
}
