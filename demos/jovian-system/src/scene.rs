/// Scene construction: the retained vector backdrop plus every entity.
///
/// Everything here runs once from `Game::init`. The backdrop (grid, rings,
/// orbit guides, button frame) is tessellated into the retained vector
/// buffer; Jupiter, the moons, the labels and the button are entities.

use glam::Vec2;
use orrery_engine::*;

use crate::bodies::{self, Moon, LabelFont};
use crate::orbit::circle_point;

/// Tags used to find entities again.
pub const JUPITER_TAG: &str = "jupiter";
pub const BUTTON_TAG: &str = "play-pause";
pub const BUTTON_GLYPH_TAG: &str = "play-pause-glyph";

/// Glyph baseline inside the button box.
const GLYPH_INSET: Vec2 = Vec2::new(6.0, 38.0);

/// How many backdrop shapes actually produced geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackdropStats {
    pub grid_lines: usize,
    pub rings: usize,
    pub orbit_guides: usize,
    pub button_frame: bool,
}

/// IDs of the entities the game touches after init.
#[derive(Debug, Clone)]
pub struct SceneIds {
    pub jupiter: EntityId,
    /// Parallel to `bodies::MOONS`.
    pub moons: Vec<EntityId>,
    /// Parallel to `bodies::MOONS`.
    pub labels: Vec<EntityId>,
    pub button: EntityId,
    pub button_glyph: EntityId,
}

pub fn center() -> Vec2 {
    Vec2::new(bodies::CENTER.0 as f32, bodies::CENTER.1 as f32)
}

fn font(label_font: LabelFont) -> FontSpec {
    FontSpec::new(label_font.family, label_font.size)
}

fn vector_rgb8((r, g, b): (u8, u8, u8)) -> VectorColor {
    VectorColor::rgb8(r, g, b)
}

fn sdf_rgb8((r, g, b): (u8, u8, u8)) -> SDFColor {
    SDFColor::rgb8(r, g, b)
}

/// Gray lines every `GRID_SPACING` over `GRID_EXTENT` on both axes.
pub fn draw_grid(vectors: &mut VectorState) -> usize {
    let mut lines = 0;
    let mut offset = 0.0;
    while offset < bodies::GRID_EXTENT {
        let vertical = vectors.stroke_line(
            Vec2::new(offset, 0.0),
            Vec2::new(offset, bodies::GRID_EXTENT),
            bodies::GRID_LINE_WIDTH,
            VectorColor::GRAY,
        );
        let horizontal = vectors.stroke_line(
            Vec2::new(0.0, offset),
            Vec2::new(bodies::GRID_EXTENT, offset),
            bodies::GRID_LINE_WIDTH,
            VectorColor::GRAY,
        );
        lines += vertical as usize + horizontal as usize;
        offset += bodies::GRID_SPACING;
    }
    lines
}

/// Grid, rings, orbit guides and the button frame, in drawing order.
pub fn draw_backdrop(vectors: &mut VectorState) -> BackdropStats {
    let grid_lines = draw_grid(vectors);

    let c = center();
    let rings = bodies::RINGS
        .iter()
        .filter(|ring| {
            let color = vector_rgb8(ring.color).with_alpha(bodies::RING_ALPHA);
            vectors.stroke_circle(c, ring.radius, ring.width, color)
        })
        .count();

    let orbit_guides = bodies::MOONS
        .iter()
        .filter(|moon| {
            vectors.stroke_circle(c, moon.radius as f32, bodies::ORBIT_GUIDE_WIDTH, VectorColor::WHITE)
        })
        .count();

    let pos = Vec2::from(bodies::BUTTON_POS);
    let (w, h) = bodies::BUTTON_SIZE;
    let radius = bodies::BUTTON_CORNER_RADIUS;
    let filled = vectors.fill_rect(pos, w, h, radius, VectorColor::BLACK);
    let bordered = vectors.stroke_rect(pos, w, h, radius, bodies::BUTTON_BORDER_WIDTH, VectorColor::BLACK);

    BackdropStats {
        grid_lines,
        rings,
        orbit_guides,
        button_frame: filled && bordered,
    }
}

fn moon_entity(ctx: &mut EngineContext, moon: &Moon) -> EntityId {
    let id = ctx.next_id();
    let (x, y) = circle_point(bodies::CENTER, moon.radius, 0.0);
    ctx.scene.spawn(
        Entity::new(id)
            .with_tag(format!("moon:{}", moon.name))
            .with_pos(Vec2::new(x as f32, y as f32))
            .with_mesh(MeshComponent::circle(moon.size, sdf_rgb8(moon.color))),
    );
    id
}

fn label_entity(ctx: &mut EngineContext, moon: &Moon) -> EntityId {
    let id = ctx.next_id();
    let (x, y) = moon.label_position();
    ctx.scene.spawn(
        Entity::new(id)
            .with_tag(format!("label:{}", moon.label))
            .with_pos(Vec2::new(x as f32, y as f32))
            .with_text(TextComponent::new(moon.label, font(moon.font))),
    );
    id
}

/// Build the whole scene. Moons start at angle zero.
pub fn build(ctx: &mut EngineContext) -> (SceneIds, BackdropStats) {
    let stats = draw_backdrop(&mut ctx.vectors);

    let jupiter = ctx.next_id();
    ctx.scene.spawn(
        Entity::new(jupiter)
            .with_tag(JUPITER_TAG)
            .with_pos(center())
            .with_mesh(MeshComponent::circle(
                bodies::JUPITER_RADIUS,
                sdf_rgb8(bodies::JUPITER_COLOR),
            )),
    );

    let moons = bodies::MOONS.iter().map(|m| moon_entity(ctx, m)).collect();
    let labels = bodies::MOONS.iter().map(|m| label_entity(ctx, m)).collect();

    let pos = Vec2::from(bodies::BUTTON_POS);
    let button = ctx.next_id();
    ctx.scene.spawn(
        Entity::new(button)
            .with_tag(BUTTON_TAG)
            .with_layer(RenderLayer::Ui)
            .with_pos(pos)
            .with_button(ButtonComponent::new(Vec2::from(bodies::BUTTON_SIZE))),
    );
    let button_glyph = ctx.next_id();
    ctx.scene.spawn(
        Entity::new(button_glyph)
            .with_tag(BUTTON_GLYPH_TAG)
            .with_layer(RenderLayer::Ui)
            .with_pos(pos + GLYPH_INSET)
            .with_text(TextComponent::new(bodies::PAUSE_GLYPH, font(bodies::BUTTON_FONT))),
    );

    let ids = SceneIds { jupiter, moons, labels, button, button_glyph };
    (ids, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built() -> (EngineContext, SceneIds, BackdropStats) {
        let mut ctx = EngineContext::new();
        let (ids, stats) = build(&mut ctx);
        (ctx, ids, stats)
    }

    /// Backdrop vertices as (position, rgba).
    fn vertices(vectors: &VectorState) -> Vec<(Vec2, [f32; 4])> {
        vectors
            .as_floats()
            .chunks(VectorVertex::FLOATS)
            .map(|v| (Vec2::new(v[0], v[1]), [v[2], v[3], v[4], v[5]]))
            .collect()
    }

    fn same_color(a: [f32; 4], b: VectorColor) -> bool {
        let b = [b.r, b.g, b.b, b.a];
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    /// Whether some vertex of `color` lies on a stroke of `width` at `radius`.
    fn has_stroke_at(verts: &[(Vec2, [f32; 4])], radius: f32, width: f32, color: VectorColor) -> bool {
        let c = center();
        verts.iter().any(|(p, rgba)| {
            same_color(*rgba, color) && (p.distance(c) - radius).abs() <= width / 2.0 + 0.2
        })
    }

    #[test]
    fn backdrop_counts() {
        let (ctx, _, stats) = built();
        assert_eq!(
            stats,
            BackdropStats { grid_lines: 40, rings: 4, orbit_guides: 8, button_frame: true }
        );
        assert_eq!(ctx.vectors.vertex_count() % 3, 0);
    }

    #[test]
    fn every_ring_is_drawn_at_its_radius_and_color() {
        let (ctx, _, _) = built();
        let verts = vertices(&ctx.vectors);
        for ring in &bodies::RINGS {
            let color = VectorColor::rgb8(ring.color.0, ring.color.1, ring.color.2).with_alpha(0.7);
            assert!(has_stroke_at(&verts, ring.radius, ring.width, color), "{} missing", ring.name);
        }
    }

    #[test]
    fn every_orbit_guide_is_a_thin_white_circle() {
        let (ctx, _, _) = built();
        let verts = vertices(&ctx.vectors);
        for moon in &bodies::MOONS {
            let radius = moon.radius as f32;
            assert!(
                has_stroke_at(&verts, radius, bodies::ORBIT_GUIDE_WIDTH, VectorColor::WHITE),
                "{} guide missing",
                moon.name
            );
        }
    }

    #[test]
    fn grid_lines_sit_on_multiples_of_forty() {
        let mut vectors = VectorState::new();
        assert_eq!(draw_grid(&mut vectors), 40);
        let verts = vertices(&vectors);
        assert!(verts.iter().all(|(_, rgba)| same_color(*rgba, VectorColor::GRAY)));

        let half = bodies::GRID_LINE_WIDTH / 2.0 + 1e-3;
        for k in 0..20 {
            let at = k as f32 * 40.0;
            // Vertical line: vertices at both ends, x within half a line width.
            let vertical = verts
                .iter()
                .filter(|(p, _)| (p.x - at).abs() <= half && (p.y - 800.0).abs() <= half)
                .count();
            assert!(vertical > 0, "no vertical line at x = {at}");
            let horizontal = verts
                .iter()
                .filter(|(p, _)| (p.y - at).abs() <= half && (p.x - 800.0).abs() <= half)
                .count();
            assert!(horizontal > 0, "no horizontal line at y = {at}");
        }
        // Nothing off the 40 px lattice.
        for (p, _) in &verts {
            let off_x = (p.x / 40.0).round() * 40.0 - p.x;
            let off_y = (p.y / 40.0).round() * 40.0 - p.y;
            assert!(off_x.abs() <= half || off_y.abs() <= half, "stray vertex {p:?}");
        }
    }

    #[test]
    fn button_frame_has_rounded_corners() {
        let mut vectors = VectorState::new();
        let stats = draw_backdrop(&mut vectors);
        assert!(stats.button_frame);
        let verts = vertices(&vectors);
        let black: Vec<Vec2> = verts
            .iter()
            .filter(|(_, rgba)| same_color(*rgba, VectorColor::BLACK))
            .map(|(p, _)| *p)
            .collect();
        assert!(!black.is_empty());
        let corner = Vec2::new(10.0, 10.0);
        assert!(black.iter().all(|p| p.distance(corner) > 1.0));
    }

    #[test]
    fn entity_counts() {
        let (ctx, ids, _) = built();
        assert_eq!(ids.moons.len(), 8);
        assert_eq!(ids.labels.len(), 8);
        // Jupiter, moons, labels, button, glyph
        assert_eq!(ctx.scene.len(), 1 + 8 + 8 + 1 + 1);
        let meshes = ctx.scene.iter().filter(|e| e.mesh.is_some()).count();
        assert_eq!(meshes, 9);
        let texts = ctx.scene.iter().filter(|e| e.text.is_some()).count();
        assert_eq!(texts, 9);
    }

    #[test]
    fn jupiter_at_center() {
        let (ctx, ids, _) = built();
        let jupiter = ctx.scene.get(ids.jupiter).unwrap();
        assert_eq!(jupiter.pos, Vec2::new(400.0, 300.0));
        let mesh = jupiter.mesh.as_ref().unwrap();
        assert_eq!(mesh.radius(), 27.0);
        assert_eq!(mesh.color, SDFColor::rgb8(255, 229, 204));
    }

    #[test]
    fn moons_start_at_angle_zero() {
        let (ctx, ids, _) = built();
        for (id, moon) in ids.moons.iter().zip(bodies::MOONS.iter()) {
            let entity = ctx.scene.get(*id).unwrap();
            let expected = Vec2::new(400.0 + moon.radius as f32, 300.0);
            assert!(entity.pos.distance(expected) < 1e-3, "{} at {:?}", moon.name, entity.pos);
            assert_eq!(entity.mesh.as_ref().unwrap().radius(), moon.size);
        }
    }

    #[test]
    fn labels_are_static_text() {
        let (ctx, ids, _) = built();
        let io = ctx.scene.get(ids.labels[bodies::IO]).unwrap();
        let text = io.text.as_ref().unwrap();
        assert_eq!(text.text, "IO");
        assert_eq!(text.font, FontSpec::new("Times New Roman", 14.0));
        assert_eq!(text.color, [1.0; 4]);
        assert!(io.pos.distance(Vec2::new(400.0, 402.0)) < 1e-3);

        let metis = ctx.scene.find_by_tag("label:METIS").unwrap();
        assert_eq!(metis.text.as_ref().unwrap().font, FontSpec::new("Arial", 10.0));
    }

    #[test]
    fn button_starts_with_pause_glyph() {
        let (ctx, ids, _) = built();
        let button = ctx.scene.get(ids.button).unwrap();
        assert_eq!(button.pos, Vec2::new(10.0, 10.0));
        assert_eq!(button.layer, RenderLayer::Ui);
        assert!(button.button.is_some());

        let glyph = ctx.scene.get(ids.button_glyph).unwrap();
        let text = glyph.text.as_ref().unwrap();
        assert_eq!(text.text, bodies::PAUSE_GLYPH);
        assert_eq!(text.font, FontSpec::new("Segoe UI Emoji", 33.0));
    }
}
