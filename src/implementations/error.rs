use crate::structures::Error;

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::InvalidUrl(error) => Some(error),
      Self::HttpError(error) => Some(error),
      Self::JsonError(error) => Some(error),
      Self::NotUtf8(error) => Some(error),
      Self::IoError(error) => Some(error),
      Self::MetadataFetch(_, error) => Some(error.as_ref()),
      Self::InvalidStatus(..) | Self::MissingField(..) => None,
    }
  }
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      Self::InvalidUrl(error) => write!(f, "invalid url: {}", error),
      Self::HttpError(error) => write!(f, "http request failed: {}", error),
      Self::InvalidStatus(url, status) => write!(f, "{} responded with status {}", url, status),
      Self::JsonError(error) => write!(f, "invalid json: {}", error),
      Self::NotUtf8(error) => write!(f, "response is not valid utf-8: {}", error),
      Self::MissingField(field, url) => write!(f, "field \"{}\" is missing or malformed in {}", field, url),
      Self::IoError(error) => write!(f, "io error: {}", error),
      Self::MetadataFetch(what, error) => write!(f, "couldn't fetch {}: {}", what, error),
    }
  }
}

impl From<url::ParseError> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: url::ParseError) -> Self {
    log_error(&error);
    Self::InvalidUrl(error)
  }
}

impl From<reqwest::Error> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: reqwest::Error) -> Self {
    log_error(&error);
    Self::HttpError(error)
  }
}

impl From<json::Error> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: json::Error) -> Self {
    log_error(&error);
    Self::JsonError(error)
  }
}

impl From<std::string::FromUtf8Error> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: std::string::FromUtf8Error) -> Self {
    log_error(&error);
    Self::NotUtf8(error)
  }
}

impl From<std::io::Error> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: std::io::Error) -> Self {
    log_error(&error);
    Self::IoError(error)
  }
}

#[track_caller]
fn log_error(error: &(impl std::error::Error + ?Sized)) {
  let location = core::panic::Location::caller();
  tracing::error!("{}:{}: {:?}", location.file(), location.line(), error);
}
