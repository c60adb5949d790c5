use glam::Vec3;
use hexworld_common::{BuildingKind, CellCoord, FloorKind};
use hexworld_kernel::HexWorld;
use serde::Serialize;

use crate::layout::HexLayout;

/// Camera/view configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Field of view in degrees.
    pub fov_degrees: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 2.0, 3.0),
            target: Vec3::new(10.0, 2.0, 0.0),
            fov_degrees: 60.0,
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads world state and a view configuration, then produces
/// output. It never mutates the world; the grids belong to the caller.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given world state and view.
    fn render(&self, world: &HexWorld, view: &RenderView) -> Self::Output;
}

/// Key a GPU backend uses to look up a pre-loaded drawable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKey {
    Floor(FloorKind),
    Building(BuildingKind),
}

impl ModelKey {
    /// File name of the model this key stands for.
    pub fn asset_name(&self) -> String {
        match self {
            ModelKey::Floor(kind) => format!("hex_{}.obj", kind.name()),
            ModelKey::Building(kind) => format!("building_{}.obj", kind.name()),
        }
    }
}

/// One model instance to draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrawCommand {
    pub model: ModelKey,
    pub coord: CellCoord,
    pub position: Vec3,
}

/// Turns the grids into a flat list of draw commands, one floor tile per
/// cell followed by its building if it has one.
#[derive(Debug, Default)]
pub struct DrawListRenderer {
    pub layout: HexLayout,
}

impl DrawListRenderer {
    pub fn new(layout: HexLayout) -> Self {
        Self { layout }
    }
}

impl Renderer for DrawListRenderer {
    type Output = Vec<DrawCommand>;

    fn render(&self, world: &HexWorld, _view: &RenderView) -> Vec<DrawCommand> {
        let mut commands = Vec::with_capacity(world.floor().len());
        for (coord, floor, building) in world.cells() {
            let position = self.layout.cell_to_world(coord);
            commands.push(DrawCommand {
                model: ModelKey::Floor(floor),
                coord,
                position,
            });
            if let Some(kind) = building {
                commands.push(DrawCommand {
                    model: ModelKey::Building(kind),
                    coord,
                    position,
                });
            }
        }
        tracing::trace!(commands = commands.len(), "draw list built");
        commands
    }
}

/// Debug text renderer: an ASCII map of the world.
///
/// Odd rows are indented one column to show the brick offset. A cell prints
/// its building glyph if it has one, else its floor glyph.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, world: &HexWorld, view: &RenderView) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "=== Hex World ({}x{}, generation={}) ===\n",
            world.rows(),
            world.cols(),
            world.generation()
        ));
        out.push_str(&format!(
            "Camera: eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}) fov={:.0}\n",
            view.eye.x,
            view.eye.y,
            view.eye.z,
            view.target.x,
            view.target.y,
            view.target.z,
            view.fov_degrees
        ));

        for row in 0..world.rows() {
            if row % 2 == 1 {
                out.push(' ');
            }
            for col in 0..world.cols() {
                let coord = CellCoord::new(row, col);
                let glyph = match (world.building_at(coord), world.floor_at(coord)) {
                    (Some(building), _) => building.glyph(),
                    (None, Some(floor)) => floor.glyph(),
                    (None, None) => '?',
                };
                if col > 0 {
                    out.push(' ');
                }
                out.push(glyph);
            }
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexworld_kernel::{DrawSequence, GeneratorConfig};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn world_from(rows: usize, cols: usize, chance: f64, draws: &[f64]) -> HexWorld {
        let mut world = HexWorld::new(GeneratorConfig::new(rows, cols, chance)).unwrap();
        world.regenerate(&mut DrawSequence::new(draws.to_vec()));
        world
    }

    #[test]
    fn debug_renderer_empty_world() {
        let world = HexWorld::default();
        let output = DebugTextRenderer::new().render(&world, &RenderView::default());
        assert!(output.contains("0x0"));
        assert!(output.contains("generation=0"));
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn debug_renderer_offsets_odd_rows() {
        let world = world_from(2, 2, 0.0, &[0.1]);
        let output = DebugTextRenderer::new().render(&world, &RenderView::default());
        let rows: Vec<&str> = output.lines().skip(2).collect();
        assert_eq!(rows, vec!["~ ~", " ~ ~"]);
    }

    #[test]
    fn debug_renderer_prefers_building_glyph() {
        let world = world_from(1, 2, 0.5, &[0.9, 0.9, 0.0, 0.99, 0.9]);
        let output = DebugTextRenderer::new().render(&world, &RenderView::default());
        assert_eq!(output.lines().nth(2), Some("N ."));
    }

    #[test]
    fn draw_list_floor_then_building() {
        let world = world_from(1, 2, 0.5, &[0.9, 0.9, 0.0, 0.99, 0.9]);
        let commands = DrawListRenderer::default().render(&world, &RenderView::default());
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0].model, ModelKey::Floor(FloorKind::Grass));
        assert_eq!(commands[1].model, ModelKey::Building(BuildingKind::Mine));
        assert_eq!(commands[0].position, commands[1].position);
        assert_eq!(commands[2].coord, CellCoord::new(0, 1));
        assert_eq!(commands[2].position, Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn draw_list_has_one_floor_per_cell() {
        let mut world = HexWorld::new(GeneratorConfig::new(7, 9, 0.3)).unwrap();
        world.regenerate(&mut SmallRng::seed_from_u64(11));
        let commands = DrawListRenderer::default().render(&world, &RenderView::default());
        let floors = commands
            .iter()
            .filter(|c| matches!(c.model, ModelKey::Floor(_)))
            .count();
        let buildings = world.cells().filter(|(_, _, b)| b.is_some()).count();
        assert_eq!(floors, 63);
        assert_eq!(commands.len(), 63 + buildings);
    }

    #[test]
    fn rendering_leaves_world_unchanged() {
        let mut world = HexWorld::new(GeneratorConfig::new(5, 5, 0.5)).unwrap();
        world.regenerate(&mut SmallRng::seed_from_u64(3));
        let before = world.state_hash();
        let view = RenderView::default();
        DrawListRenderer::default().render(&world, &view);
        DebugTextRenderer::new().render(&world, &view);
        assert_eq!(before, world.state_hash());
    }

    #[test]
    fn asset_names() {
        assert_eq!(ModelKey::Floor(FloorKind::Water).asset_name(), "hex_water.obj");
        assert_eq!(
            ModelKey::Building(BuildingKind::HomeA).asset_name(),
            "building_home_a.obj"
        );
    }

    #[test]
    fn render_view_default() {
        let view = RenderView::default();
        assert_eq!(view.fov_degrees, 60.0);
        assert_eq!(view.eye, Vec3::new(0.0, 2.0, 3.0));
    }
}
