//! In-memory scene state: every decorative entity collection, the global
//! toggles, the frame counter, and the pointer input mode.

use crate::geometry::Point;
use crate::{assets, config::SceneConfig};
use crossterm::style::Color;

/// The six ornament variants that can hang on the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrnamentKind {
    WhiteBall,
    RedBall,
    BlueBall,
    YellowBall,
    Pinecone,
    Bell,
}

impl OrnamentKind {
    pub const ALL: [OrnamentKind; 6] = [
        OrnamentKind::WhiteBall,
        OrnamentKind::RedBall,
        OrnamentKind::BlueBall,
        OrnamentKind::YellowBall,
        OrnamentKind::Pinecone,
        OrnamentKind::Bell,
    ];

    pub fn sprite_key(&self) -> &'static str {
        match self {
            OrnamentKind::WhiteBall => assets::WHITE_BALL,
            OrnamentKind::RedBall => assets::RED_BALL,
            OrnamentKind::BlueBall => assets::BLUE_BALL,
            OrnamentKind::YellowBall => assets::YELLOW_BALL,
            OrnamentKind::Pinecone => assets::PINECONE,
            OrnamentKind::Bell => assets::BELL,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrnamentKind::WhiteBall => "white",
            OrnamentKind::RedBall => "red",
            OrnamentKind::BlueBall => "blue",
            OrnamentKind::YellowBall => "yellow",
            OrnamentKind::Pinecone => "pinecone",
            OrnamentKind::Bell => "bell",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GiftKind {
    Red,
    Green,
    Blue,
    Gold,
    Purple,
    Teal,
}

impl GiftKind {
    pub const ALL: [GiftKind; 6] = [
        GiftKind::Red,
        GiftKind::Green,
        GiftKind::Blue,
        GiftKind::Gold,
        GiftKind::Purple,
        GiftKind::Teal,
    ];

    pub fn sprite_key(&self) -> &'static str {
        match self {
            GiftKind::Red => assets::GIFT_RED,
            GiftKind::Green => assets::GIFT_GREEN,
            GiftKind::Blue => assets::GIFT_BLUE,
            GiftKind::Gold => assets::GIFT_GOLD,
            GiftKind::Purple => assets::GIFT_PURPLE,
            GiftKind::Teal => assets::GIFT_TEAL,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Ornament {
    pub pos: Point,
    /// Diameter in design units; doubles as the click hit radius.
    pub size: f32,
    pub kind: OrnamentKind,
    pub rotation: f32,
    pub swing_phase: f32,
}

#[derive(Debug, Clone)]
pub struct Gift {
    pub pos: Point,
    pub size: f32,
    pub kind: GiftKind,
}

/// Two-tone tinsel coloring: the dim base of the strand and the bright
/// highlight used at the curve's center and for glints.
#[derive(Debug, Clone, Copy)]
pub struct TinselColor {
    pub main: Color,
    pub shine: Color,
}

pub const TINSEL_SILVER: TinselColor = TinselColor {
    main: Color::Grey,
    shine: Color::White,
};

pub const TINSEL_GOLD: TinselColor = TinselColor {
    main: Color::DarkYellow,
    shine: Color::Yellow,
};

#[derive(Debug, Clone)]
pub struct TinselStrand {
    pub y: f32,
    pub left_x: f32,
    pub right_x: f32,
    pub sag: f32,
    pub color: TinselColor,
    pub phase: f32,
}

/// Snowflakes live in device (cell) coordinates and wrap at the surface
/// edges, so the population is regenerated whenever the surface resizes.
#[derive(Debug, Clone)]
pub struct Snowflake {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub speed: f32,
    pub wobble: f32,
    pub wobble_speed: f32,
    pub opacity: f32,
}

/// A transient burst particle: ballistic motion, fades out as `life`
/// counts down from `max_life`.
#[derive(Debug, Clone)]
pub struct Spark {
    pub pos: Point,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub life: u16,
    pub max_life: u16,
}

/// Pointer input mode. Delete mode and an active placement selection are
/// mutually exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Delete,
    Place(OrnamentKind),
}

impl Mode {
    pub fn selected_kind(&self) -> Option<OrnamentKind> {
        match self {
            Mode::Place(kind) => Some(*kind),
            _ => None,
        }
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Mode::Delete)
    }
}

/// Owner of all mutable scene state. The render pipeline reads it each
/// frame; the interaction controller mutates it between frames.
pub struct SceneStore {
    pub ornaments: Vec<Ornament>,
    pub gifts: Vec<Gift>,
    pub tinsel: Vec<TinselStrand>,
    pub snowflakes: Vec<Snowflake>,
    pub sparks: Vec<Spark>,
    pub snow_on: bool,
    pub lights_on: bool,
    pub mode: Mode,
    pub frame: u64,
}

impl SceneStore {
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            ornaments: Vec::new(),
            gifts: Vec::new(),
            tinsel: Vec::new(),
            snowflakes: Vec::new(),
            sparks: Vec::new(),
            snow_on: config.snow,
            lights_on: config.lights,
            mode: Mode::Normal,
            frame: 0,
        }
    }

    pub fn advance_frame(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    pub fn toggle_snow(&mut self) {
        self.snow_on = !self.snow_on;
    }

    pub fn toggle_lights(&mut self) {
        self.lights_on = !self.lights_on;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SceneConfig;

    #[test]
    fn toggles_are_idempotent_in_pairs() {
        let mut store = SceneStore::new(&SceneConfig::default());
        let snow = store.snow_on;
        let lights = store.lights_on;

        store.toggle_snow();
        store.toggle_snow();
        assert_eq!(store.snow_on, snow);

        store.toggle_lights();
        store.toggle_lights();
        assert_eq!(store.lights_on, lights);
    }

    #[test]
    fn mode_place_carries_exactly_one_kind() {
        let mode = Mode::Place(OrnamentKind::Bell);
        assert_eq!(mode.selected_kind(), Some(OrnamentKind::Bell));
        assert!(!mode.is_delete());

        assert_eq!(Mode::Delete.selected_kind(), None);
        assert!(Mode::Delete.is_delete());
        assert_eq!(Mode::Normal.selected_kind(), None);
    }

    #[test]
    fn store_starts_empty_with_config_toggles() {
        let config = SceneConfig {
            snow: false,
            lights: true,
            snowflakes: 60,
        };
        let store = SceneStore::new(&config);
        assert!(store.ornaments.is_empty());
        assert!(store.sparks.is_empty());
        assert!(!store.snow_on);
        assert!(store.lights_on);
        assert_eq!(store.frame, 0);
        assert_eq!(store.mode, Mode::Normal);
    }
}
