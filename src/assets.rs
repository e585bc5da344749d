//! ASCII sprite art and the registry that tracks which sprites are ready.
//!
//! Every sprite ships embedded, so after `load` the registry is complete.
//! An optional override directory may replace the art of any sprite with a
//! plain-text file of the same name; unreadable overrides fall back to the
//! embedded art with a warning. Rendering code asks `is_ready` per key and
//! skips entities whose sprite is absent rather than failing.

use crate::error::AssetError;
use crate::render::Canvas;
use crossterm::style::Color;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const TREE: &str = "tree";
pub const WHITE_BALL: &str = "white_ball";
pub const RED_BALL: &str = "red_ball";
pub const BLUE_BALL: &str = "blue_ball";
pub const YELLOW_BALL: &str = "yellow_ball";
pub const PINECONE: &str = "pinecone";
pub const BELL: &str = "bell";
pub const GIFT_RED: &str = "gift_red";
pub const GIFT_GREEN: &str = "gift_green";
pub const GIFT_BLUE: &str = "gift_blue";
pub const GIFT_GOLD: &str = "gift_gold";
pub const GIFT_PURPLE: &str = "gift_purple";
pub const GIFT_TEAL: &str = "gift_teal";

pub const SPRITE_NAMES: [&str; 13] = [
    TREE,
    WHITE_BALL,
    RED_BALL,
    BLUE_BALL,
    YELLOW_BALL,
    PINECONE,
    BELL,
    GIFT_RED,
    GIFT_GREEN,
    GIFT_BLUE,
    GIFT_GOLD,
    GIFT_PURPLE,
    GIFT_TEAL,
];

#[derive(Debug, Clone)]
pub struct Sprite {
    rows: Vec<Vec<char>>,
    color: Color,
}

impl Sprite {
    pub fn new(art: &[&str], color: Color) -> Self {
        Self {
            rows: art.iter().map(|line| line.chars().collect()).collect(),
            color,
        }
    }

    pub fn from_file(path: &Path, color: Color) -> Result<Self, AssetError> {
        let content = fs::read_to_string(path).map_err(|e| AssetError::ReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        let rows: Vec<Vec<char>> = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.chars().collect())
            .collect();

        if rows.is_empty() {
            return Err(AssetError::Empty {
                path: path.display().to_string(),
            });
        }

        Ok(Self { rows, color })
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.len()).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Height-over-width ratio of the native art, mirroring how an image's
    /// aspect ratio preserves its shape when drawn at a chosen width.
    pub fn aspect(&self) -> f32 {
        let w = self.width();
        if w == 0 {
            return 1.0;
        }
        self.height() as f32 / w as f32
    }

    pub fn color(&self) -> Color {
        self.color
    }

    fn sample(&self, sx: usize, sy: usize) -> char {
        self.rows
            .get(sy)
            .and_then(|row| row.get(sx))
            .copied()
            .unwrap_or(' ')
    }

    /// Nearest-neighbor blit into a target cell rectangle. Spaces in the
    /// art stay transparent.
    pub fn draw_scaled(&self, canvas: &mut Canvas, left: i32, top: i32, w: u16, h: u16) {
        let (src_w, src_h) = (self.width(), self.height());
        if src_w == 0 || src_h == 0 || w == 0 || h == 0 {
            return;
        }

        for ty in 0..h {
            let sy = (ty as usize * src_h) / h as usize;
            for tx in 0..w {
                let sx = (tx as usize * src_w) / w as usize;
                let ch = self.sample(sx, sy);
                if ch != ' ' {
                    canvas.set(left + tx as i32, top + ty as i32, ch, self.color);
                }
            }
        }
    }
}

pub struct SpriteRegistry {
    sprites: HashMap<&'static str, Sprite>,
}

impl SpriteRegistry {
    /// An empty registry: nothing is ready yet.
    pub fn new() -> Self {
        Self {
            sprites: HashMap::new(),
        }
    }

    /// Register the embedded art, then apply any overrides found in
    /// `sprite_dir` (`<name>.txt`). Override failures warn and keep the
    /// embedded art.
    pub fn load(sprite_dir: Option<&Path>) -> Self {
        let mut registry = Self::new();

        for name in SPRITE_NAMES {
            registry.sprites.insert(name, builtin(name));
        }

        if let Some(dir) = sprite_dir {
            for name in SPRITE_NAMES {
                let path = dir.join(format!("{name}.txt"));
                if !path.exists() {
                    continue;
                }
                let color = registry.sprites[name].color();
                match Sprite::from_file(&path, color) {
                    Ok(sprite) => {
                        registry.sprites.insert(name, sprite);
                    }
                    Err(e) => {
                        eprintln!("Warning: ignoring sprite override for '{name}': {e}");
                    }
                }
            }
        }

        registry
    }

    pub fn get(&self, name: &str) -> Option<&Sprite> {
        self.sprites.get(name)
    }

    pub fn is_ready(&self, name: &str) -> bool {
        self.sprites.contains_key(name)
    }

    pub fn all_ready(&self) -> bool {
        SPRITE_NAMES.iter().all(|name| self.is_ready(name))
    }
}

impl Default for SpriteRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn builtin(name: &str) -> Sprite {
    match name {
        TREE => Sprite::new(
            &[
                "                *                ",
                "               ^^^               ",
                "             ^^^^^^^             ",
                "            ^^^^^^^^^            ",
                "          ^^^^^^^^^^^^^          ",
                "         ^^^^^^^^^^^^^^^         ",
                "       ^^^^^^^^^^^^^^^^^^^       ",
                "      ^^^^^^^^^^^^^^^^^^^^^      ",
                "    ^^^^^^^^^^^^^^^^^^^^^^^^^    ",
                "   ^^^^^^^^^^^^^^^^^^^^^^^^^^^   ",
                " ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^ ",
                "^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^",
                "               |||               ",
                "               |||               ",
            ],
            Color::DarkGreen,
        ),
        WHITE_BALL => Sprite::new(&["●"], Color::White),
        RED_BALL => Sprite::new(&["●"], Color::Red),
        BLUE_BALL => Sprite::new(&["●"], Color::Blue),
        YELLOW_BALL => Sprite::new(&["●"], Color::Yellow),
        PINECONE => Sprite::new(
            &["§"],
            Color::Rgb {
                r: 139,
                g: 94,
                b: 52,
            },
        ),
        BELL => Sprite::new(&["Δ"], Color::DarkYellow),
        GIFT_RED => Sprite::new(&[".-+-.", "|_|_|"], Color::Red),
        GIFT_GREEN => Sprite::new(&[".-+-.", "|_|_|"], Color::Green),
        GIFT_BLUE => Sprite::new(&["_-v-_", "|_I_|"], Color::Blue),
        GIFT_GOLD => Sprite::new(&[".=+=.", "|=|=|"], Color::DarkYellow),
        GIFT_PURPLE => Sprite::new(&["_-v-_", "|_I_|"], Color::Magenta),
        GIFT_TEAL => Sprite::new(&[".=+=.", "|=|=|"], Color::Cyan),
        other => unreachable!("unknown sprite name {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_registry_is_not_ready() {
        let registry = SpriteRegistry::new();
        assert!(!registry.all_ready());
        assert!(!registry.is_ready(TREE));
    }

    #[test]
    fn loaded_registry_has_every_sprite() {
        let registry = SpriteRegistry::load(None);
        assert!(registry.all_ready());
        for name in SPRITE_NAMES {
            assert!(registry.is_ready(name), "missing sprite {name}");
        }
    }

    #[test]
    fn sprite_aspect_matches_art() {
        let sprite = Sprite::new(&["....", "....", "...."], Color::White);
        assert_eq!(sprite.width(), 4);
        assert_eq!(sprite.height(), 3);
        assert!((sprite.aspect() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn draw_scaled_fills_target_rect_and_clips() {
        let sprite = Sprite::new(&["##", "##"], Color::Green);
        let mut canvas = Canvas::new(6, 4);
        sprite.draw_scaled(&mut canvas, 1, 1, 3, 2);
        assert_eq!(canvas.occupied(), 6);

        // Partially off-surface: only the visible part is drawn.
        canvas.clear();
        sprite.draw_scaled(&mut canvas, 5, 3, 3, 2);
        assert_eq!(canvas.occupied(), 1);
    }

    #[test]
    fn draw_scaled_keeps_transparent_holes() {
        let sprite = Sprite::new(&["# #"], Color::Green);
        let mut canvas = Canvas::new(5, 1);
        sprite.draw_scaled(&mut canvas, 0, 0, 3, 1);
        assert_eq!(canvas.get(0, 0).ch, '#');
        assert!(canvas.get(1, 0).is_empty());
        assert_eq!(canvas.get(2, 0).ch, '#');
    }

    #[test]
    fn override_dir_replaces_art_and_keeps_color() {
        let dir = std::env::temp_dir().join("firlight_test_sprites");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bell.txt");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "@").unwrap();
        drop(file);

        let registry = SpriteRegistry::load(Some(&dir));
        let bell = registry.get(BELL).unwrap();
        assert_eq!(bell.sample(0, 0), '@');
        assert_eq!(bell.color(), Color::DarkYellow);

        fs::remove_file(path).ok();
    }

    #[test]
    fn empty_override_file_is_rejected() {
        let dir = std::env::temp_dir().join("firlight_test_sprites_empty");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("tree.txt");
        fs::write(&path, "\n  \n").unwrap();

        let result = Sprite::from_file(&path, Color::Green);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), "Empty");

        // The registry falls back to the embedded art.
        let registry = SpriteRegistry::load(Some(&dir));
        assert!(registry.is_ready(TREE));
        assert!(registry.get(TREE).unwrap().width() > 1);

        fs::remove_file(path).ok();
    }
}
