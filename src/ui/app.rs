use std::sync::Arc;

use log::{debug, error};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use super::banner::NotificationBanner;
use super::hud::{self, CakeTextures};
use super::keymap;
use super::renderer::Renderer;
use crate::config::GameConfig;
use crate::core::{Clock, Controller, SystemClock, WinitController};
use crate::game::{Action, GameEvent, RandomOrders, SessionDriver};

const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;

/// Window application: feeds input and wall-clock time to the session driver
pub struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    driver: SessionDriver<RandomOrders>,
    clock: SystemClock,
    input: WinitController,
    banner: NotificationBanner,
    textures: CakeTextures,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        let orders = RandomOrders::new(config.seed);

        Self {
            window: None,
            renderer: None,
            driver: SessionDriver::new(config, orders),
            clock: SystemClock::new(),
            input: WinitController::new(),
            banner: NotificationBanner::new(),
            textures: CakeTextures::new(),
        }
    }

    fn dispatch(&mut self, action: Action) {
        let events = self.driver.apply(action);
        self.observe(events);
    }

    fn observe(&mut self, events: Vec<GameEvent>) {
        for event in events {
            match event {
                GameEvent::Notify(note) => self.banner.show(note),
                other => debug!("{:?}", other),
            }
        }
    }

    fn frame(&mut self) {
        let delta = self.clock.tick();

        for button in self.input.take_presses() {
            let stage = self.driver.session().stage();
            if let Some(action) = keymap::action_for(button, stage) {
                self.dispatch(action);
            }
        }

        let events = self.driver.update(delta);
        self.observe(events);
        self.banner.update(delta);

        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };

        let session = self.driver.session();
        let banner = &self.banner;
        let textures = &mut self.textures;
        let mut clicked = Vec::new();

        let result = renderer.render(window, |ctx| {
            clicked = hud::draw(ctx, session, banner, textures);
        });
        if let Err(e) = result {
            error!("Render error: {}", e);
        }

        for action in clicked {
            self.dispatch(action);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("Cake Factory")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    INITIAL_WINDOW_WIDTH,
                    INITIAL_WINDOW_HEIGHT,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(Renderer::new(window.clone())) {
            Ok(r) => r,
            Err(e) => {
                error!("Failed to initialize renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        self.window = Some(window);
        self.renderer = Some(renderer);
        // Time spent creating the window does not count against the player
        self.clock.reset();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

        self.input.process_event(&event);

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }
            WindowEvent::RedrawRequested => self.frame(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
