use http::Method;
use http::header::HeaderName;
use reo_config::{AnyOrArray, CorsConfig};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// CORS policy wrapped around every route
///
/// Browsers preflight the speech endpoint because it takes a JSON body and
/// an `Authorization` header. The layer answers any `OPTIONS` request with
/// an empty `200` before auth runs, and stamps the allow-origin header onto
/// audio and error responses alike. `X-Translated-Text` must stay in
/// `expose_headers` or browser clients cannot read the translation.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_origin(allowed_origins(&config.origins))
        .allow_methods(allowed_methods(&config.methods))
        .allow_headers(allowed_headers(&config.headers));

    let layer = if config.expose_headers.is_empty() {
        layer
    } else {
        layer.expose_headers(header_names(&config.expose_headers))
    };

    match config.max_age_duration() {
        Some(max_age) => layer.max_age(max_age),
        None => layer,
    }
}

fn allowed_origins(origins: &AnyOrArray) -> AllowOrigin {
    match origins {
        AnyOrArray::Any => AllowOrigin::any(),
        // unparseable origins are skipped
        AnyOrArray::List(list) => AllowOrigin::list(list.iter().filter_map(|o| o.parse().ok())),
    }
}

fn allowed_methods(methods: &AnyOrArray) -> AllowMethods {
    match methods {
        AnyOrArray::Any => AllowMethods::any(),
        AnyOrArray::List(list) => AllowMethods::list(list.iter().filter_map(|m| m.parse::<Method>().ok())),
    }
}

fn allowed_headers(headers: &AnyOrArray) -> AllowHeaders {
    match headers {
        AnyOrArray::Any => AllowHeaders::any(),
        AnyOrArray::List(list) => AllowHeaders::list(header_names(list)),
    }
}

fn header_names(names: &[String]) -> Vec<HeaderName> {
    names.iter().filter_map(|h| h.parse().ok()).collect()
}
