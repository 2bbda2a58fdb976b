use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Per-instance loading flag. Two instances of the same descriptor carry
/// independent states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
}

impl LoadState {
    pub fn is_loaded(self) -> bool {
        matches!(self, LoadState::Loaded)
    }

    pub fn placeholder_visible(self) -> bool {
        !self.is_loaded()
    }

    pub fn content_opacity(self) -> f32 {
        if self.is_loaded() {
            1.0
        } else {
            0.0
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LoadState::Loading => "loading",
            LoadState::Loaded => "loaded",
        }
    }
}

/// Outcome of delivering a completion signal to a [`LoadLatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Transitioned,
    AlreadyLoaded,
    Detached,
}

type LoadedHook = Box<dyn FnOnce()>;

struct LatchInner {
    state: Cell<LoadState>,
    attached: Cell<bool>,
    on_loaded: RefCell<Option<LoadedHook>>,
}

/// Single-fire `Loading -> Loaded` latch shared between a view and the
/// completion callback of its embedding surface.
///
/// Once [`LoadLatch::detach`] has run, further signals are ignored and the
/// hook is dropped without being called.
#[derive(Clone)]
pub struct LoadLatch {
    inner: Rc<LatchInner>,
}

impl LoadLatch {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(LatchInner {
                state: Cell::new(LoadState::Loading),
                attached: Cell::new(true),
                on_loaded: RefCell::new(None),
            }),
        }
    }

    pub fn state(&self) -> LoadState {
        self.inner.state.get()
    }

    pub fn is_attached(&self) -> bool {
        self.inner.attached.get()
    }

    /// Registers the transition hook, replacing any previous one. Runs it
    /// immediately if the signal already arrived.
    pub fn on_loaded<F>(&self, hook: F)
    where
        F: FnOnce() + 'static,
    {
        if !self.is_attached() {
            return;
        }
        if self.state().is_loaded() {
            hook();
            return;
        }
        *self.inner.on_loaded.borrow_mut() = Some(Box::new(hook));
    }

    pub fn complete(&self) -> Completion {
        if !self.is_attached() {
            return Completion::Detached;
        }
        if self.state().is_loaded() {
            return Completion::AlreadyLoaded;
        }
        self.inner.state.set(LoadState::Loaded);
        let hook = self.inner.on_loaded.borrow_mut().take();
        if let Some(hook) = hook {
            hook();
        }
        Completion::Transitioned
    }

    pub fn detach(&self) {
        self.inner.attached.set(false);
        self.inner.on_loaded.borrow_mut().take();
    }
}

impl Default for LoadLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for LoadLatch {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for LoadLatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadLatch")
            .field("state", &self.state())
            .field("attached", &self.is_attached())
            .finish()
    }
}
