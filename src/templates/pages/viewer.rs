use crate::domain::listing::format_price;
use crate::domain::scene::{SectionCriteria, SceneGraph};
use crate::domain::section::{SectionStatus, UnitType};
use crate::templates::{components::status_badge, site_layout};
use maud::{html, Markup, PreEscaped};

pub fn viewer_page(criteria: &SectionCriteria, scene: &SceneGraph, scene_json: &str) -> Markup {
    site_layout(
        "3D Viewer",
        html! {
            section class="viewer-header" {
                h1 { "AMANI RESIDENTIAL" }
                p class="muted" { "Interactive 3D building viewer" }
            }

            section class="viewer-filters card" {
                form method="get" action="/3d-viewer" {
                    div class="form-row" {
                        select name="type" {
                            option value="" selected[criteria.unit_type.is_none()] { "All Types" }
                            @for t in UnitType::ALL {
                                option value=(t.slug()) selected[criteria.unit_type == Some(t)] {
                                    (t.short_label())
                                }
                            }
                        }
                        select name="status" {
                            option value="" selected[criteria.status.is_none()] { "All" }
                            @for s in SectionStatus::ALL {
                                option value=(s.slug()) selected[criteria.status == Some(s)] {
                                    (s.label())
                                }
                            }
                        }
                        button type="submit" class="button" { "Filter" }
                    }
                }
                p class="muted" {
                    (scene.shown) " of " (scene.total) " sections shown"
                }
            }

            section class="viewer-canvas" {
                canvas id="building-canvas" width="960" height="540" {}
                script type="application/json" id="scene-data" {
                    (PreEscaped(scene_json))
                }
                script src="/static/viewer.js" defer {}
            }

            div class="viewer-overlays" {
                section class="card legend" {
                    h2 { "Sections" }
                    ul {
                        @for status in SectionStatus::ALL {
                            li {
                                span class="swatch"
                                    style={ "background:" (status.legend_color()) } {}
                                (status.label())
                            }
                        }
                    }
                }

                section class="card help" {
                    p { strong { "Click and drag" } " to rotate the building" }
                    p { strong { "Scroll" } " to zoom in/out" }
                    p { strong { "Hover over sections" } " to view apartment details" }
                }
            }

            section class="section-list" {
                @for node in &scene.sections {
                    article class="card section-card" {
                        h3 { (node.section.wing) " — " (node.section.unit) }
                        (status_badge(node.section.status.label()))
                        ul {
                            li { "Type: " (node.section.unit_type.label()) }
                            li { "Price: " (format_price(node.section.price)) "/mo" }
                            li { "Size: " (node.section.size_m2) " m²" }
                            li { "Available: " (node.section.available_units) " units" }
                        }
                        p class="muted" { (node.section.description) }
                    }
                }
            }
        },
    )
}
