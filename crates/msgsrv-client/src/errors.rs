/// Error type for Message Server calls.
///
/// Two failure kinds: the server answered with a non-success status
/// (`Remote`, carrying the server's `detail` string), or the request never
/// completed at all (`Transport`: DNS, refused connection, timeout).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("message server error: {0}")]
    Remote(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
