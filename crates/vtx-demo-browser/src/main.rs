#![forbid(unsafe_code)]

//! File browser demo for the vtx Videotex stack.
//!
//! Runs a browser scene over an in-memory transport with a short scripted
//! key session (the workspace carries no serial or socket link), then
//! reports how many protocol bytes the session produced. Point it at a
//! directory: `vtx-demo-browser [PATH]`.

mod browser;
mod viewer;

use std::io;
use std::path::PathBuf;

use browser::BrowserScene;
use vtx_core::codec::Standard;
use vtx_core::geometry::ScreenSize;
use vtx_runtime::{Context, MemoryTransport, SceneStack};

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let root = match std::env::args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => std::env::current_dir()?,
    };

    let screen = ScreenSize::default();
    let transport = MemoryTransport::new().shared();
    {
        // Scripted session: move the cursor around, then cancel out.
        let mut t = transport.borrow_mut();
        t.push_sequence([0x0A]); // down
        t.push_sequence([0x0A]); // down
        t.push_sequence([0x1B, 0x5B, 0x41]); // up
        t.push_sequence([0x1B]); // cancel: at the root this ends the session
    }

    let mut ctx = Context::new(transport.clone(), screen, Standard::Videotex);
    let mut stack = SceneStack::new();
    stack.call(&mut ctx, Box::new(BrowserScene::new(root, screen)))?;
    stack.run(&mut ctx)?;

    let t = transport.borrow();
    println!(
        "session complete: {} runs, {} bytes to the device",
        t.sent().len(),
        t.sent_bytes().len()
    );
    Ok(())
}
