use crate::catalog::models::Image;
use crate::catalog::Catalog;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use url::Url;

/// Where the image catalog is read from: a local file or an HTTP(S) resource.
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogSource {
    File(PathBuf),
    Url(Url),
}

impl FromStr for CatalogSource {
    type Err = url::ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.starts_with("http://") || value.starts_with("https://") {
            Ok(Self::Url(Url::parse(value)?))
        } else {
            Ok(Self::File(PathBuf::from(value)))
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("failed to read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to fetch the catalog: {0}")]
    Http(#[from] reqwest::Error),
    #[error("`{url}` responded with status {status}")]
    HttpStatus { url: Url, status: u16 },
    #[error("the catalog is not a valid JSON array of images: {0}")]
    Json(serde_json::Error),
    #[error("line {line} of the catalog is not a valid image: {source}")]
    NdjsonLine {
        line: usize,
        source: serde_json::Error,
    },
}

/// Loads the catalog, degrading to an empty one if anything goes wrong.
pub async fn load(source: &CatalogSource) -> Catalog {
    match try_load(source).await {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::error!(source = %source, error = %err, "Failed to load the image catalog.");
            Catalog::default()
        }
    }
}

pub async fn try_load(source: &CatalogSource) -> Result<Catalog, CatalogLoadError> {
    let text = match source {
        CatalogSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| CatalogLoadError::Io {
                    path: path.clone(),
                    source,
                })?
        }
        CatalogSource::Url(url) => fetch(url).await?,
    };
    Ok(Catalog::new(parse(&text)?))
}

async fn fetch(url: &Url) -> Result<String, CatalogLoadError> {
    let response = reqwest::get(url.clone()).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CatalogLoadError::HttpStatus {
            url: url.clone(),
            status: status.as_u16(),
        });
    }
    Ok(response.text().await?)
}

/// Accepts either a JSON array of images or NDJSON with one image per line.
pub fn parse(text: &str) -> Result<Vec<Image>, CatalogLoadError> {
    if text.trim_start().starts_with('[') {
        return serde_json::from_str(text).map_err(CatalogLoadError::Json);
    }
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(number, line)| {
            serde_json::from_str(line).map_err(|source| CatalogLoadError::NdjsonLine {
                line: number + 1,
                source,
            })
        })
        .collect()
}
