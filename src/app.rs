use crate::assets::SpriteRegistry;
use crate::config::Config;
use crate::interact::{self, ControlAction};
use crate::render::{Canvas, TerminalRenderer};
use crate::scene::TreeScene;
use crate::scene::store::{Mode, OrnamentKind};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::style::Color;
use std::io;
use std::time::Duration;

pub struct App {
    scene: TreeScene,
    sprites: SpriteRegistry,
    tree_canvas: Canvas,
    snow_canvas: Canvas,
    frame_duration: Duration,
    cached_status: String,
    status_needs_update: bool,
}

impl App {
    pub fn new(config: &Config, term_width: u16, term_height: u16) -> Self {
        let mut rng = rand::rng();
        let scene = TreeScene::new(&config.scene, term_width, term_height, &mut rng);
        let sprites = SpriteRegistry::load(config.sprites.dir.as_deref());

        Self {
            scene,
            sprites,
            tree_canvas: Canvas::new(term_width, term_height),
            snow_canvas: Canvas::new(term_width, term_height),
            frame_duration: Duration::from_millis(1000 / config.animation.fps.max(1)),
            cached_status: String::new(),
            status_needs_update: true,
        }
    }

    pub async fn run(&mut self, renderer: &mut TerminalRenderer) -> io::Result<()> {
        let mut rng = rand::rng();
        let mut ticker = tokio::time::interval(self.frame_duration);

        loop {
            ticker.tick().await;

            // Drain pending input before drawing so the frame reflects it.
            while event::poll(Duration::ZERO)? {
                match event::read()? {
                    Event::Resize(width, height) => {
                        renderer.manual_resize(width, height)?;
                        self.tree_canvas.resize(width, height);
                        self.snow_canvas.resize(width, height);
                        self.scene.update_size(width, height, &mut rng);
                    }
                    Event::Key(key_event) => {
                        if self.handle_key(key_event, &mut rng) {
                            return Ok(());
                        }
                    }
                    Event::Mouse(mouse_event) => self.handle_mouse(mouse_event, &mut rng),
                    _ => {}
                }
            }

            self.scene.render(
                &self.sprites,
                &mut self.tree_canvas,
                &mut self.snow_canvas,
                &mut rng,
            );

            self.update_cached_status();
            self.tree_canvas
                .draw_text(1, 0, &self.cached_status, Color::Cyan);

            renderer.present(&self.tree_canvas, &self.snow_canvas)?;
        }
    }

    /// Returns true when the widget should close.
    fn handle_key(&mut self, key_event: KeyEvent, rng: &mut impl rand::Rng) -> bool {
        let action = match key_event.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                return true;
            }
            KeyCode::Char('s') => Some(ControlAction::ToggleSnow),
            KeyCode::Char('l') => Some(ControlAction::ToggleLights),
            KeyCode::Char('c') => Some(ControlAction::ClearOrnaments),
            KeyCode::Char('r') => Some(ControlAction::ResetScene),
            KeyCode::Char('d') => Some(ControlAction::ToggleDeleteMode),
            KeyCode::Char('1') => Some(ControlAction::SelectOrnament(OrnamentKind::WhiteBall)),
            KeyCode::Char('2') => Some(ControlAction::SelectOrnament(OrnamentKind::RedBall)),
            KeyCode::Char('3') => Some(ControlAction::SelectOrnament(OrnamentKind::BlueBall)),
            KeyCode::Char('4') => Some(ControlAction::SelectOrnament(OrnamentKind::YellowBall)),
            KeyCode::Char('5') => Some(ControlAction::SelectOrnament(OrnamentKind::Pinecone)),
            KeyCode::Char('6') => Some(ControlAction::SelectOrnament(OrnamentKind::Bell)),
            _ => None,
        };

        if let Some(action) = action {
            interact::handle_action(&mut self.scene, action, rng);
            self.status_needs_update = true;
        }
        false
    }

    fn handle_mouse(&mut self, mouse_event: MouseEvent, rng: &mut impl rand::Rng) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse_event.kind {
            let modifier = mouse_event.modifiers.contains(KeyModifiers::SHIFT);
            interact::handle_click(
                &mut self.scene,
                mouse_event.column,
                mouse_event.row,
                modifier,
                rng,
            );
        }
    }

    fn update_cached_status(&mut self) {
        if !self.status_needs_update {
            return;
        }

        let mode = match self.scene.store.mode {
            Mode::Normal => "normal".to_string(),
            Mode::Delete => "delete".to_string(),
            Mode::Place(kind) => format!("place {}", kind.label()),
        };

        self.cached_status = format!(
            "{} | snow:{} lights:{} | [1-6] hang [d]elete [c]lear [r]andomize [s]now [l]ights [q]uit",
            mode,
            if self.scene.store.snow_on { "on" } else { "off" },
            if self.scene.store.lights_on { "on" } else { "off" },
        );

        self.status_needs_update = false;
    }
}
