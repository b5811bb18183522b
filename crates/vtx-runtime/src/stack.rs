#![forbid(unsafe_code)]

//! Scene navigation stack and the cooperative main loop.

use std::io;
use std::thread;
use std::time::Duration;

use crate::Context;
use crate::scene::{Scene, Transition};

/// Sleep between poll cycles. Exists to avoid busy-spinning, not to yield.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Holds the current scene and its suspended ancestors.
///
/// At most one scene is current; every scene on the stack is suspended.
/// A scene popped without being re-pushed is dropped.
#[derive(Default)]
pub struct SceneStack {
    current: Option<Box<dyn Scene>>,
    suspended: Vec<Box<dyn Scene>>,
}

impl SceneStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no scene is current. The run loop stops here.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// Depth of the suspended stack.
    #[must_use]
    pub fn suspended_len(&self) -> usize {
        self.suspended.len()
    }

    /// Suspend the current scene (if any), clear the display, and enter
    /// the new scene.
    pub fn call(&mut self, ctx: &mut Context, mut scene: Box<dyn Scene>) -> io::Result<()> {
        #[cfg(feature = "tracing")]
        tracing::debug!(depth = self.suspended.len(), "call");

        if let Some(current) = self.current.take() {
            self.suspended.push(current);
        }
        ctx.display.clear()?;
        scene.on_enter(ctx);
        self.current = Some(scene);
        Ok(())
    }

    /// Exit the current scene. If an ancestor is suspended, clear the
    /// display and resume it; otherwise the stack becomes empty and the
    /// run loop ends.
    pub fn return_to_caller(&mut self, ctx: &mut Context) -> io::Result<()> {
        #[cfg(feature = "tracing")]
        tracing::debug!(depth = self.suspended.len(), "return");

        if let Some(mut current) = self.current.take() {
            current.on_exit(ctx);
        }
        if let Some(mut parent) = self.suspended.pop() {
            ctx.display.clear()?;
            parent.on_resume(ctx);
            self.current = Some(parent);
        }
        Ok(())
    }

    /// Replace the current scene without touching the suspended stack.
    ///
    /// Intentionally skips every lifecycle hook and the display clear; the
    /// replacement is expected to redraw what it changes.
    pub fn goto(&mut self, scene: Box<dyn Scene>) {
        self.current = Some(scene);
    }

    /// Drive the stack until it is empty.
    ///
    /// Each cycle: one non-blocking update; re-render if a key arrived;
    /// apply the scene's requested transition; sleep a fixed short
    /// interval when nothing happened. Cycles that saw a key or a
    /// transition skip the sleep and run back to back, so a queue of
    /// pending input drains at full speed before the loop idles again.
    /// Single cooperative thread, render and transmit complete before the
    /// next poll.
    pub fn run(&mut self, ctx: &mut Context) -> io::Result<()> {
        self.render_current(ctx)?;
        loop {
            let (key, transition) = match self.current.as_mut() {
                Some(scene) => {
                    let key = scene.update(ctx);
                    if key.is_some() {
                        scene.render(ctx)?;
                    }
                    (key, scene.take_transition())
                }
                None => break,
            };
            match transition {
                Transition::Stay => {
                    if key.is_none() {
                        thread::sleep(POLL_INTERVAL);
                    }
                }
                Transition::Call(next) => {
                    self.call(ctx, next)?;
                    self.render_current(ctx)?;
                }
                Transition::Goto(next) => {
                    self.goto(next);
                    self.render_current(ctx)?;
                }
                Transition::Return => {
                    self.return_to_caller(ctx)?;
                    self.render_current(ctx)?;
                }
            }
        }
        Ok(())
    }

    fn render_current(&mut self, ctx: &mut Context) -> io::Result<()> {
        if let Some(scene) = self.current.as_mut() {
            scene.render(ctx)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for SceneStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneStack")
            .field("current", &self.current.is_some())
            .field("suspended", &self.suspended.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MemoryTransport;
    use std::cell::RefCell;
    use std::rc::Rc;
    use vtx_core::codec::Standard;
    use vtx_core::geometry::ScreenSize;
    use vtx_core::key::Key;
    use vtx_render::videotex::FF;

    type Log = Rc<RefCell<Vec<String>>>;

    struct Probe {
        name: &'static str,
        log: Log,
        transition: Option<Transition>,
    }

    impl Probe {
        fn boxed(name: &'static str, log: &Log) -> Box<Self> {
            Box::new(Self {
                name,
                log: Rc::clone(log),
                transition: None,
            })
        }

        fn note(&self, event: &str) {
            self.log.borrow_mut().push(format!("{} {event}", self.name));
        }
    }

    impl Scene for Probe {
        fn on_enter(&mut self, _ctx: &mut Context) {
            self.note("enter");
        }

        fn on_exit(&mut self, _ctx: &mut Context) {
            self.note("exit");
        }

        fn on_resume(&mut self, _ctx: &mut Context) {
            self.note("resume");
        }

        fn update(&mut self, _ctx: &mut Context) -> Option<Key> {
            None
        }

        fn render(&mut self, _ctx: &mut Context) -> io::Result<()> {
            Ok(())
        }

        fn take_transition(&mut self) -> Transition {
            self.transition.take().unwrap_or(Transition::Stay)
        }
    }

    fn context() -> (Context, Rc<RefCell<MemoryTransport>>) {
        let transport = MemoryTransport::new().shared();
        let ctx = Context::new(
            transport.clone(),
            ScreenSize::default(),
            Standard::Videotex,
        );
        (ctx, transport)
    }

    #[test]
    fn call_and_return_fire_hooks_in_order() {
        let (mut ctx, _) = context();
        let log: Log = Rc::default();
        let mut stack = SceneStack::new();

        stack.call(&mut ctx, Probe::boxed("A", &log)).unwrap();
        stack.call(&mut ctx, Probe::boxed("B", &log)).unwrap();
        stack.return_to_caller(&mut ctx).unwrap();
        stack.return_to_caller(&mut ctx).unwrap();

        assert_eq!(
            *log.borrow(),
            vec!["A enter", "B enter", "B exit", "A resume", "A exit"]
        );
        assert!(stack.is_empty());
    }

    #[test]
    fn resume_fires_once_and_never_on_the_final_return() {
        let (mut ctx, _) = context();
        let log: Log = Rc::default();
        let mut stack = SceneStack::new();

        stack.call(&mut ctx, Probe::boxed("A", &log)).unwrap();
        stack.call(&mut ctx, Probe::boxed("B", &log)).unwrap();
        stack.return_to_caller(&mut ctx).unwrap();
        stack.return_to_caller(&mut ctx).unwrap();

        let resumes = log.borrow().iter().filter(|e| e.ends_with("resume")).count();
        assert_eq!(resumes, 1);
    }

    #[test]
    fn call_clears_the_display() {
        let (mut ctx, transport) = context();
        let log: Log = Rc::default();
        let mut stack = SceneStack::new();
        stack.call(&mut ctx, Probe::boxed("A", &log)).unwrap();
        assert_eq!(transport.borrow().sent(), &[vec![FF]]);
    }

    #[test]
    fn goto_replaces_without_hooks_or_clear() {
        let (mut ctx, transport) = context();
        let log: Log = Rc::default();
        let mut stack = SceneStack::new();
        stack.call(&mut ctx, Probe::boxed("A", &log)).unwrap();
        transport.borrow_mut().clear_sent();

        stack.goto(Probe::boxed("B", &log));
        assert_eq!(*log.borrow(), vec!["A enter"]);
        assert!(transport.borrow().sent().is_empty());
        assert_eq!(stack.suspended_len(), 0);
        assert!(!stack.is_empty());
    }

    #[test]
    fn run_ends_when_the_stack_empties() {
        let (mut ctx, _) = context();
        let log: Log = Rc::default();
        let mut stack = SceneStack::new();
        let mut scene = Probe::boxed("A", &log);
        scene.transition = Some(Transition::Return);
        stack.call(&mut ctx, scene).unwrap();

        stack.run(&mut ctx).unwrap();
        assert!(stack.is_empty());
        assert_eq!(*log.borrow(), vec!["A enter", "A exit"]);
    }
}
