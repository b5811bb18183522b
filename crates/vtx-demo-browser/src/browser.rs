#![forbid(unsafe_code)]

//! Directory browser scene.
//!
//! Activating a directory descends into it, cancel goes back up, and
//! cancel at the starting directory ends the session. Activating an image
//! file calls the mosaic viewer scene.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::viewer::ViewerScene;
use vtx_core::geometry::ScreenSize;
use vtx_core::key::Key;
use vtx_render::cell::Cell;
use vtx_runtime::{Context, Scene, Transition};
use vtx_widgets::{Footer, Header, ListEntry, SelectableList, Widget};

/// Extensions the viewer scene accepts.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

/// Items per list page; the list itself adds the page pseudo-rows.
const ITEM_MAX: usize = 18;

enum BrowserEvent {
    Activated(ListEntry),
    Cancelled,
}

pub struct BrowserScene {
    root: PathBuf,
    dir: PathBuf,
    header: Header,
    footer: Footer,
    list: Rc<RefCell<SelectableList>>,
    events: Rc<RefCell<Option<BrowserEvent>>>,
    transition: Option<Transition>,
    screen: ScreenSize,
}

impl BrowserScene {
    pub fn new(root: impl Into<PathBuf>, screen: ScreenSize) -> Self {
        let root = root.into();
        let events: Rc<RefCell<Option<BrowserEvent>>> = Rc::default();
        let activated = Rc::clone(&events);
        let cancelled = Rc::clone(&events);
        let list = SelectableList::new(1, 3, screen.cols, ITEM_MAX, screen)
            .with_on_activate(move |_, entry| {
                *activated.borrow_mut() = Some(BrowserEvent::Activated(entry.clone()));
            })
            .with_on_cancel(move || {
                *cancelled.borrow_mut() = Some(BrowserEvent::Cancelled);
            });
        Self {
            dir: root.clone(),
            root,
            header: Header::new("vtx browser", screen),
            footer: Footer::new("", screen),
            list: Rc::new(RefCell::new(list)),
            events,
            transition: None,
            screen,
        }
    }

    fn enter_dir(&mut self, dir: PathBuf) {
        tracing::debug!(dir = %dir.display(), "enter directory");
        self.footer.set_status(dir.display().to_string());
        self.list.borrow_mut().set_items(read_entries(&dir));
        self.dir = dir;
    }

    /// The list area repainted in full: list cells overlaid on blanks, so
    /// rows left over from a longer listing are erased through the diff.
    fn list_area(&self) -> Vec<Cell> {
        let by_pos: HashMap<(u16, u16), Cell> = self
            .list
            .borrow()
            .render()
            .into_iter()
            .map(|c| ((c.x, c.y), c))
            .collect();
        let top = 3;
        let bottom = top + ITEM_MAX as u16 + 1;
        let mut cells = Vec::new();
        for y in top..=bottom {
            for x in 1..=self.screen.cols {
                cells.push(
                    by_pos
                        .get(&(x, y))
                        .copied()
                        .unwrap_or_else(|| Cell::new(x, y, ' ')),
                );
            }
        }
        cells
    }
}

impl Scene for BrowserScene {
    fn on_enter(&mut self, ctx: &mut Context) {
        ctx.keyboard.register(&self.list);
        let dir = self.dir.clone();
        self.enter_dir(dir);
    }

    fn on_resume(&mut self, _ctx: &mut Context) {
        // The list stayed registered while suspended; drop whatever it
        // collected, then re-read the listing.
        self.events.borrow_mut().take();
        let dir = self.dir.clone();
        self.enter_dir(dir);
    }

    fn update(&mut self, ctx: &mut Context) -> Option<Key> {
        let (_, key) = ctx.keyboard.poll();
        let event = self.events.borrow_mut().take();
        if let Some(event) = event {
            match event {
                BrowserEvent::Activated(entry) if entry.is_directory => {
                    let next = self.dir.join(&entry.display_name);
                    self.enter_dir(next);
                }
                BrowserEvent::Activated(entry) => {
                    if IMAGE_EXTENSIONS.iter().any(|e| entry.has_extension(e)) {
                        self.transition = Some(Transition::Call(Box::new(ViewerScene::new(
                            entry.display_name,
                            self.screen,
                        ))));
                    } else {
                        self.footer
                            .set_status(format!("{}: not an image", entry.display_name));
                    }
                }
                BrowserEvent::Cancelled => {
                    let parent = self.dir.parent().map(Path::to_path_buf);
                    match parent {
                        Some(p) if self.dir != self.root => self.enter_dir(p),
                        _ => self.transition = Some(Transition::Return),
                    }
                }
            }
        }
        key
    }

    fn render(&mut self, ctx: &mut Context) -> io::Result<()> {
        let mut cells = self.header.render();
        cells.extend(self.list_area());
        cells.extend(self.footer.render());
        ctx.display.update(&cells)
    }

    fn take_transition(&mut self) -> Transition {
        self.transition.take().unwrap_or(Transition::Stay)
    }
}

/// Read a directory into list entries, directories first, names sorted.
fn read_entries(dir: &Path) -> Vec<ListEntry> {
    let mut entries: Vec<ListEntry> = fs::read_dir(dir)
        .map(|rd| {
            rd.filter_map(Result::ok)
                .filter_map(|e| {
                    let name = e.file_name().into_string().ok()?;
                    let is_dir = e.file_type().ok()?.is_dir();
                    Some(if is_dir {
                        ListEntry::directory(name)
                    } else {
                        ListEntry::file(name)
                    })
                })
                .collect()
        })
        .unwrap_or_default();
    sort_entries(&mut entries);
    entries
}

fn sort_entries(entries: &mut [ListEntry]) {
    entries.sort_by(|a, b| {
        b.is_directory
            .cmp(&a.is_directory)
            .then_with(|| a.display_name.cmp(&b.display_name))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directories_sort_before_files() {
        let mut entries = vec![
            ListEntry::file("b.txt"),
            ListEntry::directory("z"),
            ListEntry::file("a.txt"),
            ListEntry::directory("a"),
        ];
        sort_entries(&mut entries);
        let names: Vec<_> = entries.iter().map(|e| e.display_name.as_str()).collect();
        assert_eq!(names, vec!["a", "z", "a.txt", "b.txt"]);
    }

    #[test]
    fn image_extensions_match_case_insensitively() {
        let entry = ListEntry::file("photo.JPG");
        assert!(IMAGE_EXTENSIONS.iter().any(|e| entry.has_extension(e)));
        let entry = ListEntry::file("notes.txt");
        assert!(!IMAGE_EXTENSIONS.iter().any(|e| entry.has_extension(e)));
    }
}
