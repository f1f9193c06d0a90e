use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("Failed to fetch shop page: {url}")]
    ShopUnavailable { url: String },
}
