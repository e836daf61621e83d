/// a warmup url can't be built with the current configuration
#[derive(PartialEq, Debug)]
pub enum UrlConfigError {
    /// `warmup.host` is not set
    MissingHost,
    /// `warmup.port` is not set
    MissingPort,
    /// scheme, host, and port don't form a valid base url
    InvalidUrl(String),
}
