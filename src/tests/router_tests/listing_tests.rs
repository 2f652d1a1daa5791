use crate::errors::ServerError;
use crate::tests::utils::{body_string, get};

#[test]
fn home_page_serves_the_brand_and_featured_cards() {
    let mut resp = get("/").unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("FlatShow"));
    assert!(body.contains("Featured Properties"));
    assert!(body.contains("GAWDA"));
}

#[test]
fn properties_page_lists_the_full_catalog_by_default() {
    let mut resp = get("/properties").unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Showing 6 of 6 properties"));
    for name in [
        "GAWDA",
        "SERENITY HEIGHTS",
        "VISTA GARDENS",
        "URBAN LOFT",
        "SKYLINE TOWER",
        "COASTAL RETREAT",
    ] {
        assert!(body.contains(name), "missing {name}");
    }
}

#[test]
fn search_garden_matches_exactly_one_listing() {
    let mut resp = get("/properties?search=garden").unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Showing 1 of 6 properties"));
    assert!(body.contains("VISTA GARDENS"));
    assert!(!body.contains("URBAN LOFT"));
}

#[test]
fn price_low_sort_renders_cheapest_first() {
    let mut resp = get("/properties?sort=price-low").unwrap();
    let body = body_string(&mut resp);

    let cheapest = body.find("URBAN LOFT").expect("URBAN LOFT missing");
    let priciest = body.find("COASTAL RETREAT").expect("COASTAL RETREAT missing");
    assert!(cheapest < priciest);
}

#[test]
fn type_filter_narrows_to_one_card_and_shows_a_chip() {
    let mut resp = get("/properties?type=penthouse").unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Showing 1 of 6 properties"));
    assert!(body.contains("SERENITY HEIGHTS"));
    assert!(body.contains("Type: Penthouse"));
    assert!(body.contains("Clear All"));
}

#[test]
fn impossible_filters_render_the_empty_state() {
    let mut resp = get("/properties?search=garden&type=loft").unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Showing 0 of 6 properties"));
    assert!(body.contains("No properties found"));
    assert!(body.contains("Clear All Filters"));
}

#[test]
fn detail_page_merges_the_extended_record_when_present() {
    let mut resp = get("/properties/1").unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("GAWDA"));
    assert!(body.contains("123 Premium Avenue"));
    assert!(body.contains("Sarah Johnson"));
    assert!(body.contains("Send Inquiry"));
}

#[test]
fn detail_page_without_extended_record_still_renders() {
    let mut resp = get("/properties/4").unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("URBAN LOFT"));
    assert!(!body.contains("123 Premium Avenue"));
}

#[test]
fn unknown_listing_and_unknown_route_are_not_found() {
    assert!(matches!(get("/properties/99"), Err(ServerError::NotFound)));
    assert!(matches!(get("/properties/banana"), Err(ServerError::NotFound)));
    assert!(matches!(get("/nope"), Err(ServerError::NotFound)));
}
