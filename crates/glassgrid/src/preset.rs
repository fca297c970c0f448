//! Named starting layouts.
//!
//! A preset is an ordinary [`Grid`] used as a template. Loading one
//! deep-copies it through [`instantiate`], which assigns fresh identifiers to
//! the grid and every cell so repeated loads never collide.

use indexmap::IndexMap;
use log::debug;
use serde_json::json;

use glassgrid_core::{
    content::Content,
    geometry::GridArea,
    grid::{Cell, Grid},
    identifier::Id,
};

use crate::ids::IdGenerator;

/// Lookup of preset layouts by name.
pub trait PresetCatalog {
    /// Returns the preset registered under `name`.
    fn preset(&self, name: &str) -> Option<&Grid>;

    /// Names of every preset, in catalog order.
    fn names(&self) -> Vec<&str>;
}

/// An ordered, in-memory [`PresetCatalog`].
#[derive(Debug, Clone, Default)]
pub struct PresetLibrary {
    presets: IndexMap<String, Grid>,
}

impl PresetLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a preset (builder style), replacing any previous entry.
    pub fn with_preset(mut self, name: impl Into<String>, grid: Grid) -> Self {
        self.insert(name, grid);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, grid: Grid) -> Option<Grid> {
        self.presets.insert(name.into(), grid)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// The layouts shipped with the editor.
    pub fn builtin() -> Self {
        Self::new()
            .with_preset("blank", blank())
            .with_preset("bento", bento())
            .with_preset("dashboard", dashboard())
            .with_preset("hero", hero())
    }
}

impl PresetCatalog for PresetLibrary {
    fn preset(&self, name: &str) -> Option<&Grid> {
        self.presets.get(name)
    }

    fn names(&self) -> Vec<&str> {
        self.presets.keys().map(String::as_str).collect()
    }
}

/// Deep-copies `template`, giving the grid and each cell a fresh identifier.
///
/// Group tags are kept as they are.
pub fn instantiate(template: &Grid, ids: &mut IdGenerator) -> Grid {
    let mut grid = template.clone();
    grid.set_id(ids.next_id("grid", |id| id == template.id()));
    for cell in grid.cells_mut() {
        cell.set_id(ids.next_id("cell", |id| template.contains_cell(id)));
    }
    debug!(template_id:% = template.id(), grid_id:% = grid.id(), cells = grid.len(); "Instantiated template");
    grid
}

fn area_cell(name: &str, row: u32, col: u32, row_span: u32, col_span: u32) -> Cell {
    Cell::new(Id::new(name), GridArea::new(row, col, row_span, col_span))
}

fn blank() -> Grid {
    Grid::new(Id::new("preset-blank"), "Blank", 4, 12, 16)
}

fn bento() -> Grid {
    Grid::new(Id::new("preset-bento"), "Bento", 4, 12, 16)
        .with_cell(area_cell("bento-feature", 0, 0, 2, 6).with_component(
            Id::new("glass-card"),
            Some(Content::new().with("title", json!("Featured"))),
        ))
        .with_cell(area_cell("bento-top", 0, 6, 1, 6))
        .with_cell(area_cell("bento-mid-left", 1, 6, 1, 3))
        .with_cell(area_cell("bento-mid-right", 1, 9, 1, 3))
        .with_cell(area_cell("bento-bottom-left", 2, 0, 2, 4))
        .with_cell(area_cell("bento-bottom-right", 2, 4, 2, 8))
}

fn dashboard() -> Grid {
    let stat = |name: &str, col: u32, label: &str| {
        area_cell(name, 1, col, 1, 4).with_component(
            Id::new("stat-card"),
            Some(Content::new().with("label", json!(label)).with("value", json!(0))),
        )
    };

    Grid::new(Id::new("preset-dashboard"), "Dashboard", 5, 12, 16)
        .with_cell(area_cell("dashboard-nav", 0, 0, 1, 12).with_component(
            Id::new("navbar"),
            Some(Content::new().with("brand", json!("Glass"))),
        ))
        .with_cell(stat("dashboard-stat-users", 0, "Users"))
        .with_cell(stat("dashboard-stat-revenue", 4, "Revenue"))
        .with_cell(stat("dashboard-stat-orders", 8, "Orders"))
        .with_cell(area_cell("dashboard-chart", 2, 0, 3, 8).with_component(
            Id::new("chart"),
            Some(Content::new().with("kind", json!("line"))),
        ))
        .with_cell(area_cell("dashboard-activity", 2, 8, 3, 4).with_component(Id::new("list"), None))
}

fn hero() -> Grid {
    let feature = |name: &str, col: u32| {
        area_cell(name, 3, col, 2, 4).with_component(Id::new("feature-card"), None)
    };

    Grid::new(Id::new("preset-hero"), "Hero", 5, 12, 24)
        .with_cell(area_cell("hero-banner", 0, 0, 3, 12).with_component(
            Id::new("hero"),
            Some(
                Content::new()
                    .with("heading", json!("Build something clear"))
                    .with("cta", json!("Get started")),
            ),
        ))
        .with_cell(feature("hero-feature-1", 0))
        .with_cell(feature("hero-feature-2", 4))
        .with_cell(feature("hero-feature-3", 8))
}
