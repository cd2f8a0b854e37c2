use crate::render::DrawSink;
use crate::series::{self, Visualizer};

use super::{ContextFactory, GraphicsContext};

/// Registry key active on a fresh manager.
pub const DEFAULT_ACTIVE: &str = "cantor";

/// Context lifecycle as seen by hosts.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ManagerState {
    Uninitialized,
    Ready,
    /// Initialization failed; terminal for this manager.
    Failed,
}

enum Lifecycle<C> {
    Uninitialized,
    Ready(C),
    Failed,
}

struct Entry {
    key: &'static str,
    visualizer: Box<dyn Visualizer>,
}

/// Owns the graphics context and the visualizer registry; dispatches frames
/// and parameter edits to the active visualizer.
pub struct SeriesManager<F: ContextFactory> {
    factory: F,
    lifecycle: Lifecycle<F::Context>,
    entries: Vec<Entry>,
    active: usize,
}

impl<F: ContextFactory> SeriesManager<F> {
    /// Creates an uninitialized manager with every built-in visualizer registered.
    pub fn new(factory: F) -> Self {
        let entries: Vec<Entry> = series::builtin()
            .into_iter()
            .map(|(key, visualizer)| Entry { key, visualizer })
            .collect();
        let active = entries
            .iter()
            .position(|e| e.key == DEFAULT_ACTIVE)
            .unwrap_or(0);

        Self {
            factory,
            lifecycle: Lifecycle::Uninitialized,
            entries,
            active,
        }
    }

    /// Creates the graphics context on `surface_id`.
    ///
    /// Returns `false` and enters [`ManagerState::Failed`] if the context or
    /// the renderer cannot be set up. Calling it again on a ready manager is a
    /// no-op returning `true`; on a failed one it returns `false`.
    pub fn initialize(&mut self, surface_id: &str) -> bool {
        match self.lifecycle {
            Lifecycle::Ready(_) => return true,
            Lifecycle::Failed => return false,
            Lifecycle::Uninitialized => {}
        }

        match self.factory.create(surface_id) {
            Ok(ctx) => {
                log::info!("graphics ready on surface {surface_id:?}");
                self.lifecycle = Lifecycle::Ready(ctx);
                true
            }
            Err(e) => {
                log::error!("failed to initialize graphics on surface {surface_id:?}: {e:#}");
                self.lifecycle = Lifecycle::Failed;
                false
            }
        }
    }

    pub fn state(&self) -> ManagerState {
        match self.lifecycle {
            Lifecycle::Uninitialized => ManagerState::Uninitialized,
            Lifecycle::Ready(_) => ManagerState::Ready,
            Lifecycle::Failed => ManagerState::Failed,
        }
    }

    /// Draws one frame of the active visualizer. No-op unless ready.
    ///
    /// `time` is seconds since the host last (re)activated a visualizer.
    pub fn render(&mut self, time: f32, width: f32, height: f32) {
        let Lifecycle::Ready(ctx) = &mut self.lifecycle else {
            return;
        };
        let entry = self.entries.get(self.active);

        let mut draw = |sink: &mut dyn DrawSink| {
            if let Some(entry) = entry {
                entry.visualizer.render(time, width, height, sink);
            }
        };

        if let Err(e) = ctx.frame(width, height, &mut draw) {
            log::error!("frame dropped: {e:#}");
        }
    }

    /// Switches to `name` if it is registered.
    ///
    /// Returns `true` when `name` is now active. Unknown names leave the
    /// selection unchanged. The host owns elapsed time and should restart it
    /// when this returns `true`.
    pub fn set_active(&mut self, name: &str) -> bool {
        match self.index_of(name) {
            Some(index) => {
                if index != self.active {
                    log::debug!("active visualizer: {name}");
                }
                self.active = index;
                true
            }
            None => {
                log::debug!("ignoring unknown visualizer {name:?}");
                false
            }
        }
    }

    pub fn get_active(&self) -> &'static str {
        self.entries.get(self.active).map_or("", |e| e.key)
    }

    /// Sets a parameter on the active visualizer only.
    pub fn set_param(&mut self, name: &str, value: f32) {
        if let Some(entry) = self.entries.get_mut(self.active) {
            entry.visualizer.set_param(name, value);
        }
    }

    /// Reads a parameter from the active visualizer.
    pub fn get_param(&self, name: &str, default: f32) -> f32 {
        self.entries
            .get(self.active)
            .map_or(default, |e| e.visualizer.get_param(name, default))
    }

    /// Registry keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.key)
    }

    pub fn visualizer(&self, key: &str) -> Option<&dyn Visualizer> {
        self.index_of(key).map(|i| self.entries[i].visualizer.as_ref())
    }

    pub fn active_visualizer(&self) -> Option<&dyn Visualizer> {
        self.entries.get(self.active).map(|e| e.visualizer.as_ref())
    }

    fn index_of(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use anyhow::{bail, Result};

    use super::*;
    use crate::render::testing::Recorder;
    use crate::render::Topology;

    #[derive(Default)]
    struct Log {
        creates: usize,
        frames: Vec<Recorder>,
    }

    struct FakeFactory {
        fail: bool,
        log: Rc<RefCell<Log>>,
    }

    struct FakeContext {
        fail_frames: bool,
        log: Rc<RefCell<Log>>,
    }

    impl GraphicsContext for FakeContext {
        fn frame(&mut self, _w: f32, _h: f32, draw: &mut dyn FnMut(&mut dyn DrawSink)) -> Result<()> {
            if self.fail_frames {
                bail!("out of memory");
            }
            let mut rec = Recorder::default();
            draw(&mut rec);
            self.log.borrow_mut().frames.push(rec);
            Ok(())
        }
    }

    impl ContextFactory for FakeFactory {
        type Context = FakeContext;

        fn create(&mut self, surface_id: &str) -> Result<FakeContext> {
            self.log.borrow_mut().creates += 1;
            if self.fail {
                bail!("no surface {surface_id}");
            }
            Ok(FakeContext {
                fail_frames: surface_id == "flaky",
                log: self.log.clone(),
            })
        }
    }

    fn manager(fail: bool) -> (SeriesManager<FakeFactory>, Rc<RefCell<Log>>) {
        let log = Rc::new(RefCell::new(Log::default()));
        let m = SeriesManager::new(FakeFactory {
            fail,
            log: log.clone(),
        });
        (m, log)
    }

    #[test]
    fn starts_uninitialized_on_cantor() {
        let (m, _) = manager(false);
        assert_eq!(m.state(), ManagerState::Uninitialized);
        assert_eq!(m.get_active(), "cantor");
        assert_eq!(m.keys().count(), 10);
    }

    #[test]
    fn render_before_initialize_is_a_no_op() {
        let (mut m, log) = manager(false);
        m.render(1.0, 800.0, 600.0);
        assert!(log.borrow().frames.is_empty());
    }

    #[test]
    fn successful_initialize_is_not_repeated() {
        let (mut m, log) = manager(false);
        assert!(m.initialize("main"));
        assert!(m.initialize("main"));
        assert_eq!(m.state(), ManagerState::Ready);
        assert_eq!(log.borrow().creates, 1);
    }

    #[test]
    fn failed_initialize_is_terminal() {
        let (mut m, log) = manager(true);
        assert!(!m.initialize("main"));
        assert_eq!(m.state(), ManagerState::Failed);
        m.render(1.0, 800.0, 600.0);
        assert!(log.borrow().frames.is_empty());
        assert!(!m.initialize("main"));
        assert_eq!(log.borrow().creates, 1);
    }

    #[test]
    fn render_draws_the_active_visualizer() {
        let (mut m, log) = manager(false);
        m.initialize("main");
        m.set_param("depth", 3.0);
        m.render(10.0, 800.0, 600.0);

        let log = log.borrow();
        let frame = &log.frames[0];
        let tris = frame.of(Topology::Triangles).next().map(|b| b.vertices.len());
        assert_eq!(tris, Some(15 * 6));
    }

    #[test]
    fn unknown_key_keeps_selection() {
        let (mut m, _) = manager(false);
        assert!(m.set_active("harmonic"));
        assert!(!m.set_active("fibonacci"));
        assert_eq!(m.get_active(), "harmonic");
    }

    #[test]
    fn params_stay_with_their_visualizer() {
        let (mut m, _) = manager(false);
        m.set_param("depth", 9.0);
        m.set_active("geometric");
        m.set_param("ratio", -0.5);
        assert_eq!(m.get_param("depth", -1.0), -1.0);

        m.set_active("cantor");
        assert_eq!(m.get_param("depth", 0.0), 9.0);
        let geo = m.visualizer("geometric").map(|v| v.get_param("ratio", 0.0));
        assert_eq!(geo, Some(-0.5));
    }

    #[test]
    fn frame_errors_do_not_leave_ready() {
        let (mut m, log) = manager(false);
        assert!(m.initialize("flaky"));
        m.render(1.0, 800.0, 600.0);
        assert_eq!(m.state(), ManagerState::Ready);
        assert!(log.borrow().frames.is_empty());
    }

    #[test]
    fn every_key_renders_finite_geometry() {
        let (mut m, log) = manager(false);
        m.initialize("main");
        let keys: Vec<_> = m.keys().collect();
        for key in &keys {
            assert!(m.set_active(key));
            m.render(2.5, 1024.0, 768.0);
        }
        let log = log.borrow();
        assert_eq!(log.frames.len(), keys.len());
        assert!(log.frames.iter().all(|f| f.all_finite() && !f.batches.is_empty()));
    }
}
