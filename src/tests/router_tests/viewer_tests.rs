use crate::tests::utils::{body_string, get};

#[test]
fn viewer_page_shows_every_section_by_default() {
    let mut resp = get("/3d-viewer").unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("AMANI RESIDENTIAL"));
    assert!(body.contains("4 of 4 sections shown"));
    assert!(body.contains("North Wing"));
    assert!(body.contains("scene-data"));
}

#[test]
fn status_filter_removes_sections_from_the_page() {
    let mut resp = get("/3d-viewer?status=available").unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("2 of 4 sections shown"));
    assert!(body.contains("North Wing"));
    assert!(!body.contains("West Wing"));
}

#[test]
fn scene_api_returns_the_placeholder_building_branch() {
    // The repository ships no .glb, so the fallback branch is taken.
    let mut resp = get("/api/scene").unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );

    let scene: serde_json::Value = serde_json::from_str(&body_string(&mut resp)).unwrap();
    assert_eq!(scene["building"]["kind"], "placeholder");
    assert_eq!(scene["building"]["blocks"].as_array().unwrap().len(), 5);
    assert_eq!(scene["shown"], 4);
    assert_eq!(scene["total"], 4);
    assert!(scene["highlight"].is_null());
}

#[test]
fn scene_api_highlights_the_hovered_section() {
    let mut resp = get("/api/scene?hover=2").unwrap();
    let scene: serde_json::Value = serde_json::from_str(&body_string(&mut resp)).unwrap();

    let highlighted: Vec<&serde_json::Value> = scene["sections"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|n| n["highlighted"] == true)
        .collect();
    assert_eq!(highlighted.len(), 1);
    assert_eq!(highlighted[0]["section"]["id"], 2);
    assert_eq!(highlighted[0]["outlines"].as_array().unwrap().len(), 2);
    assert_eq!(scene["highlight"]["wing"], "South Wing");
}

#[test]
fn hovering_a_filtered_out_section_highlights_nothing() {
    // Section 1 is available; the rented filter excludes it.
    let mut resp = get("/api/scene?status=rented&hover=1").unwrap();
    let scene: serde_json::Value = serde_json::from_str(&body_string(&mut resp)).unwrap();

    assert_eq!(scene["shown"], 1);
    assert!(scene["highlight"].is_null());
    for node in scene["sections"].as_array().unwrap() {
        assert_eq!(node["highlighted"], false);
    }
}

#[test]
fn price_filter_is_applied_to_the_scene() {
    let mut resp = get("/api/scene?price_max=2000").unwrap();
    let scene: serde_json::Value = serde_json::from_str(&body_string(&mut resp)).unwrap();

    assert_eq!(scene["shown"], 1);
    assert_eq!(scene["sections"][0]["section"]["unit_type"], "studio");
}
