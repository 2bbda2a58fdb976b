use coursesite_core::catalog::{page_by_id, CatalogEntry};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Route {
    Home,
    Page(&'static CatalogEntry),
    NotFound,
}

impl Route {
    pub(crate) fn href(&self) -> String {
        match self {
            Route::Home | Route::NotFound => "#/".to_string(),
            Route::Page(entry) => format!("#/{}", encode_hash_value(entry.id)),
        }
    }
}

pub(crate) fn current_route() -> Route {
    let Some(window) = web_sys::window() else {
        return Route::Home;
    };
    let hash = window.location().hash().unwrap_or_default();
    parse_route(&hash)
}

pub(crate) fn parse_route(hash: &str) -> Route {
    let raw = hash.trim().trim_start_matches('#').trim();
    let raw = raw.trim_start_matches('/').trim_end_matches('/').trim();
    if raw.is_empty() {
        return Route::Home;
    }
    let decoded = decode_hash_value(raw);
    match page_by_id(&decoded) {
        Some(entry) => Route::Page(entry),
        None => Route::NotFound,
    }
}

/// Ids are free-form, so spaces and slashes are escaped in the hash segment.
fn encode_hash_value(value: &str) -> String {
    String::from(js_sys::encode_uri_component(value))
}

fn decode_hash_value(value: &str) -> String {
    js_sys::decode_uri_component(value)
        .ok()
        .and_then(|decoded| decoded.as_string())
        .unwrap_or_else(|| value.to_string())
}
