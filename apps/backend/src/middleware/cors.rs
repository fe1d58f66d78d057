use actix_cors::Cors;
use actix_web::http::header;

/// Build the CORS middleware for the API.
///
/// An empty origin list allows any origin; otherwise only the listed
/// origins are accepted. Origins must be absolute `http(s)://` URLs.
pub fn cors_middleware(allowed_origins: &[String]) -> Cors {
    let origins: Vec<&str> = allowed_origins
        .iter()
        .map(|s| s.trim())
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .collect();

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allow_any_header()
        .expose_headers(vec![header::HeaderName::from_static("x-trace-id")])
        .max_age(3600);

    if origins.is_empty() {
        cors = cors.allow_any_origin();
    } else {
        for origin in origins {
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}
