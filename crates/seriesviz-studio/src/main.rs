//! Native host for the series visualizations.
//!
//! Opens one window published as surface `"main"`, drives the engine every
//! redraw and maps the keyboard onto activation and parameter changes.

mod controls;

use std::time::Duration;

use anyhow::Result;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{ModifiersState, PhysicalKey};
use winit::window::WindowId;

use seriesviz_engine::core::{App, AppControl, FrameCtx};
use seriesviz_engine::logging::{init_logging, LoggingConfig};
use seriesviz_engine::manager::{GpuContextFactory, SeriesManager};
use seriesviz_engine::time::ActivationClock;
use seriesviz_engine::window::{Runtime, RuntimeConfig, WindowSurfaces};

use controls::Command;

/// Long enough for every reveal animation to finish.
const FINISH_SKIP: Duration = Duration::from_secs(600);

type Manager = SeriesManager<GpuContextFactory<WindowSurfaces>>;

struct Studio {
    surface_id: String,
    manager: Option<Manager>,
    clock: ActivationClock,
    modifiers: ModifiersState,
    title_dirty: bool,
}

impl Studio {
    fn new(surface_id: String) -> Self {
        Self {
            surface_id,
            manager: None,
            clock: ActivationClock::new(),
            modifiers: ModifiersState::empty(),
            title_dirty: true,
        }
    }

    fn activate(&mut self, key: &str) {
        let Some(manager) = self.manager.as_mut() else { return };
        let previous = manager.get_active();
        if manager.set_active(key) && previous != key {
            self.clock.reset();
            self.title_dirty = true;
        }
    }

    fn cycle(&mut self, forward: bool) {
        let Some(manager) = self.manager.as_ref() else { return };
        let keys: Vec<&'static str> = manager.keys().collect();
        let Some(pos) = keys.iter().position(|k| *k == manager.get_active()) else { return };
        let next = if forward {
            (pos + 1) % keys.len()
        } else {
            (pos + keys.len() - 1) % keys.len()
        };
        self.activate(keys[next]);
    }

    fn adjust(&mut self, adjustment: Option<controls::Adjustment>, direction: i8) {
        let (Some(manager), Some(adj)) = (self.manager.as_mut(), adjustment) else { return };
        let value = adj.apply(manager.get_param(adj.param, adj.min), direction as f32);
        manager.set_param(adj.param, value);
        log::info!("{}.{} = {value}", manager.get_active(), adj.param);
        self.clock.reset();
        self.title_dirty = true;
    }

    fn run_command(&mut self, command: Command) -> AppControl {
        let active = self.manager.as_ref().map(|m| m.get_active()).unwrap_or_default();
        match command {
            Command::Select(index) => {
                let key = self.manager.as_ref().and_then(|m| m.keys().nth(index));
                if let Some(key) = key {
                    self.activate(key);
                }
            }
            Command::Next => self.cycle(true),
            Command::Previous => self.cycle(false),
            Command::Primary(dir) => self.adjust(controls::primary(active), dir),
            Command::Secondary(dir) => self.adjust(controls::secondary(active), dir),
            Command::Restart => self.clock.reset(),
            Command::Finish => self.clock.advance(FINISH_SKIP),
            Command::Quit => return AppControl::Exit,
        }
        AppControl::Continue
    }

    fn window_title(&self) -> String {
        let Some(vis) = self.manager.as_ref().and_then(|m| m.active_visualizer()) else {
            return "seriesviz".to_string();
        };
        let mut params: Vec<(&str, f32)> = vis.params().iter().collect();
        params.sort_by(|a, b| a.0.cmp(b.0));
        let params: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
        format!("seriesviz · {} [{}]", vis.title(), params.join(", "))
    }
}

impl App for Studio {
    fn on_start(&mut self, surfaces: &WindowSurfaces) -> AppControl {
        let mut manager = SeriesManager::new(GpuContextFactory::new(surfaces.clone()));
        if !manager.initialize(&self.surface_id) {
            log::error!("graphics unavailable on surface {:?}; exiting", self.surface_id);
            return AppControl::Exit;
        }
        self.manager = Some(manager);
        self.clock.reset();
        AppControl::Continue
    }

    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::ModifiersChanged(m) => {
                self.modifiers = m.state();
                AppControl::Continue
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return AppControl::Continue;
                };
                match controls::command(code, self.modifiers.shift_key()) {
                    Some(command) => self.run_command(command),
                    None => AppControl::Continue,
                }
            }
            _ => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        if self.title_dirty {
            ctx.window.set_title(&self.window_title());
            self.title_dirty = false;
        }

        let (w, h) = ctx.window.physical_size();
        let time = self.clock.elapsed();
        if let Some(manager) = self.manager.as_mut() {
            ctx.pre_present();
            manager.render(time, w, h);
        }
        AppControl::Continue
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig::default();
    let studio = Studio::new(config.surface_id.clone());
    Runtime::run(config, studio)
}
