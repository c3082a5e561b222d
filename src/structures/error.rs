#[derive(Debug)]
pub enum Error {
  InvalidUrl(url::ParseError),
  HttpError(reqwest::Error),
  /// Non-success status, first argument is the url, second the status code
  InvalidStatus(String, u16),
  JsonError(json::Error),
  NotUtf8(std::string::FromUtf8Error),
  /// A required field was absent or had the wrong type, first argument is the field, second the document url
  MissingField(&'static str, String),
  IoError(std::io::Error),

  /// One of the metadata documents could not be retrieved, probing never started
  MetadataFetch(&'static str, Box<Error>),
}
