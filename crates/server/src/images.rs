use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, StatusCode},
};

use models::{family, product};

/// Origin (scheme + authority) of the inbound request, used to rewrite
/// stored relative image names into absolute URLs.
///
/// The scheme honors `X-Forwarded-Proto` when a proxy sets it and falls back
/// to `http`; the authority comes from the request's `Host` header.
#[derive(Clone, Debug)]
pub struct RequestOrigin(pub String);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for RequestOrigin {
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let scheme = parts
            .headers
            .get("x-forwarded-proto")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("http");
        let host = parts
            .headers
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
            .ok_or((StatusCode::BAD_REQUEST, "missing Host header"))?;
        Ok(RequestOrigin(format!("{scheme}://{host}")))
    }
}

impl RequestOrigin {
    /// Absolute URL for a stored product image file name.
    pub fn product_image_url(&self, image: &str) -> String {
        format!("{}/static/product_images/{}", self.0.trim_end_matches('/'), image)
    }
}

/// Rewrite each product's image to an absolute URL; products without an
/// image are left unset.
pub fn rewrite_product_images(origin: &RequestOrigin, products: &mut [product::Model]) {
    for p in products.iter_mut() {
        if let Some(image) = p.image.take() {
            p.image = Some(origin.product_image_url(&image));
        }
    }
}

/// Family imagery lives in the same static directory as product imagery.
pub fn rewrite_family_images(origin: &RequestOrigin, families: &mut [family::Model]) {
    for f in families.iter_mut() {
        if let Some(image) = f.image.take() {
            f.image = Some(origin.product_image_url(&image));
        }
    }
}
