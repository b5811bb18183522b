#![forbid(unsafe_code)]

//! Mosaic viewer scene.
//!
//! The workspace decodes no image formats, so the viewer synthesizes a
//! quantized luminance grid from the file name and pushes it through the
//! mosaic converter. Cancel or enter returns to the browser.

use std::io;

use vtx_core::geometry::ScreenSize;
use vtx_core::key::Key;
use vtx_render::mosaic::{self, LuminanceGrid};
use vtx_runtime::{Context, Scene, Transition};
use vtx_widgets::{Label, Widget};

/// Grid size in pixels: 40 cells wide, 20 cells tall.
const GRID_WIDTH: usize = 80;
const GRID_HEIGHT: usize = 60;

pub struct ViewerScene {
    name: String,
    screen: ScreenSize,
    transition: Option<Transition>,
}

impl ViewerScene {
    pub fn new(name: impl Into<String>, screen: ScreenSize) -> Self {
        Self {
            name: name.into(),
            screen,
            transition: None,
        }
    }

    /// Deterministic stand-in for a quantized image.
    fn grid(&self) -> LuminanceGrid {
        let seed = self
            .name
            .bytes()
            .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize));
        let levels = (0..GRID_WIDTH * GRID_HEIGHT)
            .map(|i| {
                let x = i % GRID_WIDTH;
                let y = i / GRID_WIDTH;
                (((x * x + y * y + seed) >> 4) % 8) as u8
            })
            .collect();
        LuminanceGrid::new(GRID_WIDTH, GRID_HEIGHT, levels)
    }
}

impl Scene for ViewerScene {
    fn update(&mut self, ctx: &mut Context) -> Option<Key> {
        let (_, key) = ctx.keyboard.poll();
        if matches!(key, Some(Key::Cancel | Key::Enter)) {
            self.transition = Some(Transition::Return);
        }
        key
    }

    fn render(&mut self, ctx: &mut Context) -> io::Result<()> {
        let mut cells = mosaic::convert(&self.grid());
        let caption = Label::new(1, 22, self.name.clone(), self.screen);
        cells.extend(caption.render());
        ctx.display.update(&cells)
    }

    fn take_transition(&mut self) -> Transition {
        self.transition.take().unwrap_or(Transition::Stay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthesized_grid_is_screen_sized() {
        let viewer = ViewerScene::new("photo.png", ScreenSize::default());
        let grid = viewer.grid();
        assert_eq!(grid.cols(), 40);
        assert_eq!(grid.rows(), 20);
    }

    #[test]
    fn same_name_gives_the_same_grid() {
        let screen = ScreenSize::default();
        let a = ViewerScene::new("x.png", screen).grid();
        let b = ViewerScene::new("x.png", screen).grid();
        assert_eq!(mosaic::convert(&a), mosaic::convert(&b));
    }
}
