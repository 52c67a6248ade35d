#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn init_logging() {
    catalog_logging::initialize_for_tests();
}

/// JSON body of the `/artworks` listing for a source of `total` records with ids 1..=total.
pub fn page_body(page: u32, page_size: u32, total: u64) -> Value {
    let start = u64::from(page - 1) * u64::from(page_size) + 1;
    let end = (start + u64::from(page_size) - 1).min(total);
    let data: Vec<Value> = (start..=end)
        .map(|id| {
            json!({
                "id": id,
                "title": format!("Artwork {id}"),
                "place_of_origin": "France",
                "artist_display": "Claude Monet\nFrench, 1840-1926",
                "inscriptions": null,
                "date_start": 1890,
                "date_end": 1891,
                "thumbnail": { "alt_text": "ignored" }
            })
        })
        .collect();
    json!({
        "pagination": {
            "total": total,
            "limit": page_size,
            "offset": u64::from(page - 1) * u64::from(page_size),
            "total_pages": total.div_ceil(u64::from(page_size)),
            "current_page": page
        },
        "data": data
    })
}

pub async fn mount_page(server: &MockServer, page: u32, page_size: u32, total: u64) {
    Mock::given(method("GET"))
        .and(path("/artworks"))
        .and(query_param("page", page.to_string()))
        .and(query_param("limit", page_size.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(page, page_size, total)))
        .expect(1)
        .mount(server)
        .await;
}
