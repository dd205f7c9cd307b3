use ::scraper::error::SelectorErrorKind;

/// All errors that can occur while scraping and exporting rankings.
#[derive(thiserror::Error, Debug)]
pub enum BbrError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// A CSS selector string could not be parsed.
    #[error("invalid CSS selector: {0}")]
    Selector(String),

    /// A display name could not be reduced to a page slug.
    #[error("cannot derive a player page slug from {name:?}")]
    NameParse { name: String },

    /// An expected HTML element was not found on the page.
    #[error("expected element not found: {context}")]
    ElementNotFound { context: &'static str },

    /// Failed to read or write a CSV roster file.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to build or save the rankings workbook.
    #[error("xlsx error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Underlying file I/O failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl<'a> From<SelectorErrorKind<'a>> for BbrError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        BbrError::Selector(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BbrError>;
