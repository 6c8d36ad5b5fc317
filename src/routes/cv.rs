//! CV shortcuts: stable site URLs that redirect to the hosted document.

use axum::response::Redirect;

use client::content::{CV_DOWNLOAD_URL, CV_VIEW_URL};

/// `GET /cv`: redirect to the direct download.
pub async fn download() -> Redirect {
    tracing::debug!("cv download requested");
    Redirect::temporary(CV_DOWNLOAD_URL)
}

/// `GET /cv/view`: redirect to the hosted viewer.
pub async fn view() -> Redirect {
    tracing::debug!("cv view requested");
    Redirect::temporary(CV_VIEW_URL)
}

#[cfg(test)]
#[path = "cv_test.rs"]
mod tests;
