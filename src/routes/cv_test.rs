use super::*;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

fn location(response: &axum::response::Response) -> Option<&str> {
    response.headers().get(header::LOCATION).and_then(|v| v.to_str().ok())
}

#[tokio::test]
async fn download_redirects_temporarily_to_download_url() {
    let response = download().await.into_response();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), Some(CV_DOWNLOAD_URL));
}

#[tokio::test]
async fn view_redirects_temporarily_to_viewer_url() {
    let response = view().await.into_response();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), Some(CV_VIEW_URL));
}

#[tokio::test]
async fn download_and_view_point_at_different_urls() {
    let d = download().await.into_response();
    let v = view().await.into_response();
    assert_ne!(location(&d), location(&v));
}
