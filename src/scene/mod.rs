pub mod decor;
pub mod generate;
pub mod lights;
pub mod snow;
pub mod sparkles;
pub mod store;
pub mod tinsel;
pub mod tree;

use crate::assets::SpriteRegistry;
use crate::config::SceneConfig;
use crate::geometry::ViewTransform;
use crate::render::Canvas;
use rand::Rng;
use self::store::SceneStore;

/// Owns the scene store and the design-to-device transform, and runs the
/// per-tick render pipeline over the two drawing layers.
pub struct TreeScene {
    pub store: SceneStore,
    transform: ViewTransform,
    snowflake_count: u16,
}

impl TreeScene {
    pub fn new(config: &SceneConfig, width: u16, height: u16, rng: &mut impl Rng) -> Self {
        let mut scene = Self {
            store: SceneStore::new(config),
            transform: ViewTransform::new(width, height),
            snowflake_count: config.snowflakes,
        };
        scene.regenerate(rng);
        scene.store.snowflakes =
            generate::generate_snowflakes(rng, width, height, config.snowflakes);
        scene
    }

    pub fn transform(&self) -> &ViewTransform {
        &self.transform
    }

    /// Replace tinsel, ornaments, and gifts in one step, so a render pass
    /// never observes a half-regenerated scene.
    pub fn regenerate(&mut self, rng: &mut impl Rng) {
        let tinsel = generate::generate_tinsel(rng);
        let ornaments = generate::generate_ornaments(rng);
        let gifts = generate::generate_gifts(rng);

        self.store.tinsel = tinsel;
        self.store.ornaments = ornaments;
        self.store.gifts = gifts;
    }

    /// Recompute the transform and reseed the snowfield for a new surface
    /// size. Must run before the next frame renders.
    pub fn update_size(&mut self, width: u16, height: u16, rng: &mut impl Rng) {
        self.transform = ViewTransform::new(width, height);
        self.store.snowflakes =
            generate::generate_snowflakes(rng, width, height, self.snowflake_count);
    }

    /// One animation tick: advance the frame counter and redraw both
    /// layers from current state.
    pub fn render(
        &mut self,
        sprites: &SpriteRegistry,
        tree_canvas: &mut Canvas,
        snow_canvas: &mut Canvas,
        rng: &mut impl Rng,
    ) {
        self.store.advance_frame();
        let frame = self.store.frame;

        tree_canvas.clear();

        if !sprites.all_ready() {
            let text = "Loading...";
            let x = (tree_canvas.width() as i32 - text.len() as i32) / 2;
            let y = tree_canvas.height() as i32 / 2;
            tree_canvas.draw_text(x, y, text, crossterm::style::Color::White);
        } else {
            tree::draw_tree(tree_canvas, &self.transform, sprites);
            tinsel::draw_tinsel(&self.store.tinsel, tree_canvas, &self.transform, frame);
            for ornament in &self.store.ornaments {
                decor::draw_ornament(ornament, tree_canvas, &self.transform, sprites, frame);
            }
            for gift in &self.store.gifts {
                decor::draw_gift(gift, tree_canvas, &self.transform, sprites);
            }
            sparkles::draw_and_age(&mut self.store.sparks, tree_canvas, &self.transform);
            if self.store.lights_on {
                lights::draw_lights(tree_canvas, &self.transform, frame);
            }
        }

        snow::draw_snow(
            &mut self.store.snowflakes,
            self.store.snow_on,
            snow_canvas,
            rng,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn scene() -> (TreeScene, StdRng) {
        let mut rng = StdRng::seed_from_u64(42);
        let scene = TreeScene::new(&SceneConfig::default(), 120, 40, &mut rng);
        (scene, rng)
    }

    #[test]
    fn new_scene_is_fully_populated() {
        let (scene, _) = scene();
        assert_eq!(scene.store.tinsel.len(), 4);
        assert!((12..=16).contains(&scene.store.ornaments.len()));
        assert!((3..=4).contains(&scene.store.gifts.len()));
        assert_eq!(scene.store.snowflakes.len(), 60);
        assert!(scene.store.sparks.is_empty());
    }

    #[test]
    fn render_draws_both_layers_and_advances_the_frame() {
        let (mut scene, mut rng) = scene();
        let sprites = SpriteRegistry::load(None);
        let mut tree_canvas = Canvas::new(120, 40);
        let mut snow_canvas = Canvas::new(120, 40);

        scene.render(&sprites, &mut tree_canvas, &mut snow_canvas, &mut rng);
        assert_eq!(scene.store.frame, 1);
        assert!(tree_canvas.occupied() > 0);
        assert!(snow_canvas.occupied() > 0);
    }

    #[test]
    fn unready_sprites_show_the_loading_placeholder() {
        let (mut scene, mut rng) = scene();
        let sprites = SpriteRegistry::new();
        let mut tree_canvas = Canvas::new(120, 40);
        let mut snow_canvas = Canvas::new(120, 40);

        scene.render(&sprites, &mut tree_canvas, &mut snow_canvas, &mut rng);

        // Only the placeholder text is on the decoration layer.
        assert_eq!(tree_canvas.occupied(), "Loading...".len());
        // Snow still falls while assets load.
        assert!(snow_canvas.occupied() > 0);
    }

    #[test]
    fn disabling_lights_never_adds_cells() {
        let (mut scene, mut rng) = scene();
        let sprites = SpriteRegistry::load(None);

        scene.store.sparks.clear();
        scene.store.lights_on = true;
        let mut with_lights = Canvas::new(120, 40);
        let mut snow = Canvas::new(120, 40);
        scene.render(&sprites, &mut with_lights, &mut snow, &mut rng);

        scene.store.frame -= 1; // replay the same tick
        scene.store.lights_on = false;
        let mut without_lights = Canvas::new(120, 40);
        scene.render(&sprites, &mut without_lights, &mut snow, &mut rng);

        assert!(with_lights.occupied() >= without_lights.occupied());
    }

    #[test]
    fn resize_reseeds_snow_within_new_bounds() {
        let (mut scene, mut rng) = scene();
        scene.update_size(60, 20, &mut rng);
        assert_eq!(scene.store.snowflakes.len(), 60);
        for flake in &scene.store.snowflakes {
            assert!((0.0..60.0).contains(&flake.x));
            assert!((0.0..20.0).contains(&flake.y));
        }
    }

    #[test]
    fn regenerate_replaces_every_decoration_collection() {
        let (mut scene, mut rng) = scene();
        let before: Vec<f32> = scene.store.ornaments.iter().map(|o| o.pos.x).collect();
        scene.regenerate(&mut rng);
        let after: Vec<f32> = scene.store.ornaments.iter().map(|o| o.pos.x).collect();
        assert_ne!(before, after);
        assert_eq!(scene.store.tinsel.len(), 4);
        assert!((3..=4).contains(&scene.store.gifts.len()));
    }
}
