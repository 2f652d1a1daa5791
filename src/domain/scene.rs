use crate::domain::section::{Section, SectionStatus, UnitType};
use log::debug;
use serde::Serialize;
use std::path::Path;

/// Upper bound of the monthly-rent filter in the viewer.
pub const SECTION_PRICE_CAP: i64 = 5_000;

/// Filter selections for the 3D viewer. Smaller shape than the listing
/// criteria but the same role: `None` means "no filter".
#[derive(Debug, Clone, PartialEq)]
pub struct SectionCriteria {
    pub unit_type: Option<UnitType>,
    pub status: Option<SectionStatus>,
    pub price_min: i64,
    pub price_max: i64,
}

impl Default for SectionCriteria {
    fn default() -> Self {
        SectionCriteria {
            unit_type: None,
            status: None,
            price_min: 0,
            price_max: SECTION_PRICE_CAP,
        }
    }
}

impl SectionCriteria {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut criteria = SectionCriteria::default();
        for (key, value) in pairs {
            match key.as_str() {
                "type" => criteria.unit_type = UnitType::from_slug(value),
                "status" => criteria.status = SectionStatus::from_slug(value),
                "price_min" => {
                    if let Ok(n) = value.parse::<i64>() {
                        criteria.price_min = n.clamp(0, SECTION_PRICE_CAP);
                    }
                }
                "price_max" => {
                    if let Ok(n) = value.parse::<i64>() {
                        criteria.price_max = n.clamp(0, SECTION_PRICE_CAP);
                    }
                }
                _ => {}
            }
        }
        criteria
    }

    pub fn matches(&self, section: &Section) -> bool {
        self.unit_type.map_or(true, |t| section.unit_type == t)
            && self.status.map_or(true, |s| section.status == s)
            && section.price >= self.price_min
            && section.price <= self.price_max
    }
}

/// Sections that make it into the rendered scene at all. Filtered-out
/// sections are excluded outright, not dimmed.
pub fn visible_sections<'a>(
    sections: &'a [Section],
    criteria: &SectionCriteria,
) -> Vec<&'a Section> {
    sections.iter().filter(|s| criteria.matches(s)).collect()
}

/// Transient viewer state: the active filter plus the hover target. Owned
/// by the view for the duration of a request; nothing here persists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneView {
    pub criteria: SectionCriteria,
    pub hovered: Option<u32>,
}

impl SceneView {
    pub fn set_hover(&mut self, id: Option<u32>) {
        self.hovered = id;
    }

    /// The single highlighted section, if any. Hovering a section the
    /// filter excluded yields nothing.
    pub fn highlighted<'a>(&self, sections: &'a [Section]) -> Option<&'a Section> {
        let id = self.hovered?;
        visible_sections(sections, &self.criteria)
            .into_iter()
            .find(|s| s.id == id)
    }

    pub fn scene<'a>(&self, sections: &'a [Section], model_path: &str) -> SceneGraph<'a> {
        build_scene(sections, &self.criteria, self.hovered, model_path)
    }
}

/// Which branch of the scene the building geometry comes from: the real
/// model file when it exists on disk, placeholder blocks otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BuildingModel {
    Gltf { path: String },
    Placeholder { blocks: Vec<Block> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub position: [f32; 3],
    pub dimensions: [f32; 3],
    pub color: &'static str,
}

pub fn resolve_building_model(model_path: &str) -> BuildingModel {
    if Path::new(model_path).is_file() {
        BuildingModel::Gltf {
            path: format!("/{}", model_path.trim_start_matches('/')),
        }
    } else {
        debug!("building model {model_path} not found, using placeholder geometry");
        BuildingModel::Placeholder {
            blocks: placeholder_blocks(),
        }
    }
}

/// Stand-in building: one body block and four window panes.
fn placeholder_blocks() -> Vec<Block> {
    let mut blocks = vec![Block {
        position: [0.0, 2.5, 0.0],
        dimensions: [10.0, 5.0, 6.0],
        color: "#cccccc",
    }];
    for (x, y) in [(-2.0, 3.0), (2.0, 3.0), (-2.0, 1.5), (2.0, 1.5)] {
        blocks.push(Block {
            position: [x, y, 3.1],
            dimensions: [1.5, 1.0, 0.1],
            color: "#333333",
        });
    }
    blocks
}

/// One wireframe draw over a section volume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlinePass {
    pub color: &'static str,
    pub width: f32,
    pub opacity: f32,
    pub scale: f32,
}

fn outline_passes(section: &Section, highlighted: bool) -> Vec<OutlinePass> {
    let mut passes = vec![OutlinePass {
        color: section.outline_color,
        width: if highlighted { 8.0 } else { 4.0 },
        opacity: if highlighted { 1.0 } else { 0.7 },
        scale: 1.0,
    }];
    if highlighted {
        // Secondary, slightly enlarged pass behind the main outline.
        passes.push(OutlinePass {
            color: section.outline_color,
            width: 6.0,
            opacity: 0.5,
            scale: 1.05,
        });
    }
    passes
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionNode<'a> {
    pub section: &'a Section,
    pub highlighted: bool,
    pub outlines: Vec<OutlinePass>,
}

/// Contents of the floating detail panel next to the highlighted section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightPanel<'a> {
    pub wing: &'a str,
    pub status: &'static str,
    pub unit_type: &'static str,
    pub price: i64,
    pub size_m2: u32,
    pub available_units: u32,
    pub description: &'a str,
}

impl<'a> HighlightPanel<'a> {
    fn for_section(section: &'a Section) -> Self {
        HighlightPanel {
            wing: section.wing,
            status: section.status.label(),
            unit_type: section.unit_type.label(),
            price: section.price,
            size_m2: section.size_m2,
            available_units: section.available_units,
            description: section.description,
        }
    }
}

/// The full scene handed to the client canvas, serialized as JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneGraph<'a> {
    pub building: BuildingModel,
    pub sections: Vec<SectionNode<'a>>,
    pub highlight: Option<HighlightPanel<'a>>,
    pub shown: usize,
    pub total: usize,
}

/// Assembles the scene for the current criteria and hover target. Pure:
/// the seed slice is only borrowed, and at most one node is highlighted.
pub fn build_scene<'a>(
    sections: &'a [Section],
    criteria: &SectionCriteria,
    hovered: Option<u32>,
    model_path: &str,
) -> SceneGraph<'a> {
    let visible = visible_sections(sections, criteria);
    let highlighted_id = hovered.filter(|id| visible.iter().any(|s| s.id == *id));

    let nodes: Vec<SectionNode> = visible
        .iter()
        .map(|&section| {
            let highlighted = Some(section.id) == highlighted_id;
            SectionNode {
                section,
                highlighted,
                outlines: outline_passes(section, highlighted),
            }
        })
        .collect();

    let highlight = highlighted_id
        .and_then(|id| visible.iter().find(|s| s.id == id))
        .map(|s| HighlightPanel::for_section(s));

    SceneGraph {
        building: resolve_building_model(model_path),
        sections: nodes,
        highlight,
        shown: visible.len(),
        total: sections.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    const MISSING_MODEL: &str = "static/models/does-not-exist.glb";

    #[test]
    fn default_criteria_show_all_sections() {
        let visible = visible_sections(catalog::sections(), &SectionCriteria::default());
        assert_eq!(visible.len(), catalog::sections().len());
    }

    #[test]
    fn filtered_out_sections_are_excluded_not_dimmed() {
        let criteria = SectionCriteria {
            status: Some(SectionStatus::Available),
            ..SectionCriteria::default()
        };
        let scene = build_scene(catalog::sections(), &criteria, None, MISSING_MODEL);
        assert_eq!(scene.shown, 2);
        assert_eq!(scene.total, 4);
        assert!(scene
            .sections
            .iter()
            .all(|n| n.section.status == SectionStatus::Available));
    }

    #[test]
    fn price_range_is_inclusive() {
        let criteria = SectionCriteria {
            price_min: 1_800,
            price_max: 2_800,
            ..SectionCriteria::default()
        };
        let visible = visible_sections(catalog::sections(), &criteria);
        let prices: Vec<i64> = visible.iter().map(|s| s.price).collect();
        assert_eq!(prices, vec![2_800, 2_200, 1_800]);
    }

    #[test]
    fn at_most_one_section_is_highlighted() {
        let scene = build_scene(
            catalog::sections(),
            &SectionCriteria::default(),
            Some(2),
            MISSING_MODEL,
        );
        let highlighted: Vec<_> = scene.sections.iter().filter(|n| n.highlighted).collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].section.id, 2);
        assert_eq!(highlighted[0].outlines.len(), 2);
        assert_eq!(highlighted[0].outlines[0].width, 8.0);
        assert_eq!(highlighted[0].outlines[1].scale, 1.05);
    }

    #[test]
    fn hover_on_filtered_out_section_highlights_nothing() {
        // Section 3 is rented; filter to available only, then hover it.
        let criteria = SectionCriteria {
            status: Some(SectionStatus::Available),
            ..SectionCriteria::default()
        };
        let mut view = SceneView {
            criteria,
            hovered: None,
        };
        view.set_hover(Some(3));
        assert!(view.highlighted(catalog::sections()).is_none());

        let scene = view.scene(catalog::sections(), MISSING_MODEL);
        assert!(scene.highlight.is_none());
        assert!(scene.sections.iter().all(|n| !n.highlighted));
    }

    #[test]
    fn clearing_hover_clears_the_highlight() {
        let mut view = SceneView::default();
        view.set_hover(Some(1));
        assert_eq!(view.highlighted(catalog::sections()).map(|s| s.id), Some(1));
        view.set_hover(None);
        assert!(view.highlighted(catalog::sections()).is_none());
    }

    #[test]
    fn highlight_panel_carries_the_display_fields() {
        let scene = build_scene(
            catalog::sections(),
            &SectionCriteria::default(),
            Some(4),
            MISSING_MODEL,
        );
        let panel = scene.highlight.expect("section 4 should be highlighted");
        assert_eq!(panel.wing, "West Wing");
        assert_eq!(panel.status, "Pending");
        assert_eq!(panel.unit_type, "Penthouse Apartments");
        assert_eq!(panel.price, 4_200);
        assert_eq!(panel.available_units, 1);
    }

    #[test]
    fn unhighlighted_sections_get_a_single_base_pass() {
        let scene = build_scene(
            catalog::sections(),
            &SectionCriteria::default(),
            None,
            MISSING_MODEL,
        );
        for node in &scene.sections {
            assert_eq!(node.outlines.len(), 1);
            assert_eq!(node.outlines[0].width, 4.0);
            assert_eq!(node.outlines[0].opacity, 0.7);
            assert_eq!(node.outlines[0].color, node.section.outline_color);
        }
    }

    #[test]
    fn missing_model_file_falls_back_to_placeholder_blocks() {
        match resolve_building_model(MISSING_MODEL) {
            BuildingModel::Placeholder { blocks } => {
                assert_eq!(blocks.len(), 5);
                assert_eq!(blocks[0].dimensions, [10.0, 5.0, 6.0]);
            }
            BuildingModel::Gltf { .. } => panic!("expected placeholder branch"),
        }
    }

    #[test]
    fn present_model_file_uses_the_gltf_branch() {
        let dir = std::env::temp_dir().join("flatshow-scene-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("building.glb");
        std::fs::write(&path, b"glTF").unwrap();

        match resolve_building_model(path.to_str().unwrap()) {
            BuildingModel::Gltf { path } => assert!(path.ends_with("building.glb")),
            BuildingModel::Placeholder { .. } => panic!("expected gltf branch"),
        }
    }

    #[test]
    fn scene_serializes_with_tagged_building_branch() {
        let scene = build_scene(
            catalog::sections(),
            &SectionCriteria::default(),
            None,
            MISSING_MODEL,
        );
        let json = serde_json::to_value(&scene).unwrap();
        assert_eq!(json["building"]["kind"], "placeholder");
        assert_eq!(json["shown"], 4);
        assert_eq!(json["sections"][0]["section"]["status"], "available");
    }
}
