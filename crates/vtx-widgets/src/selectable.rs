#![forbid(unsafe_code)]

//! Paginated, cursor-navigable list.
//!
//! The list slices its items into pages of `item_max` entries and synthesizes
//! previous/next pseudo-rows at the page edges. The pseudo-rows exist only in
//! the cached visible page, never in the item collection itself. The cursor
//! index is local to the visible page, so navigation never has to reason
//! about absolute positions until an item is activated.

use crate::{Widget, draw_text};
use vtx_core::geometry::{Rect, ScreenSize};
use vtx_core::key::Key;
use vtx_render::cell::{Attr, Cell, Color};

/// Text of the synthesized previous-page row.
pub const PREV_PAGE_LABEL: &str = "(previous page)";
/// Text of the synthesized next-page row.
pub const NEXT_PAGE_LABEL: &str = "(next page)";

use crate::ListEntry;

/// One row of the cached visible page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRow {
    /// Synthesized "go back one page" row.
    PrevPage,
    /// Synthesized "go forward one page" row.
    NextPage,
    /// A real item, by absolute index into the item collection.
    Item(usize),
}

/// Callback invoked when a real item is activated.
pub type ActivateFn = Box<dyn FnMut(usize, &ListEntry)>;
/// Callback invoked when the list is cancelled.
pub type CancelFn = Box<dyn FnMut()>;

/// A cursor-navigable list widget with page slicing.
pub struct SelectableList {
    rect: Rect,
    items: Vec<ListEntry>,
    /// Cursor position within the visible page, not the item collection.
    index: usize,
    page: usize,
    item_max: usize,
    dirty: bool,
    visible: Vec<PageRow>,
    has_prev: bool,
    has_next: bool,
    on_activate: Option<ActivateFn>,
    on_cancel: Option<CancelFn>,
}

impl SelectableList {
    /// Create an empty list at (x, y) holding up to `item_max` items per
    /// page. The widget reserves two extra rows for the page pseudo-rows.
    #[must_use]
    pub fn new(x: u16, y: u16, width: u16, item_max: usize, screen: ScreenSize) -> Self {
        debug_assert!(item_max > 0, "page capacity must be positive");
        let mut list = Self {
            rect: Rect::new(x, y, width, item_max as u16 + 2, screen),
            items: Vec::new(),
            index: 0,
            page: 0,
            item_max,
            dirty: true,
            visible: Vec::new(),
            has_prev: false,
            has_next: false,
            on_activate: None,
            on_cancel: None,
        };
        list.ensure_fresh();
        list
    }

    /// Register the activation callback. It receives the absolute item index
    /// and the item itself.
    #[must_use]
    pub fn with_on_activate(mut self, f: impl FnMut(usize, &ListEntry) + 'static) -> Self {
        self.on_activate = Some(Box::new(f));
        self
    }

    /// Register the cancel callback.
    #[must_use]
    pub fn with_on_cancel(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_cancel = Some(Box::new(f));
        self
    }

    /// Replace the items wholesale, resetting cursor and page.
    pub fn set_items(&mut self, items: Vec<ListEntry>) {
        self.items = items;
        self.page = 0;
        self.index = 0;
        self.dirty = true;
        self.ensure_fresh();
    }

    /// The underlying items, without pseudo-rows.
    #[must_use]
    pub fn items(&self) -> &[ListEntry] {
        &self.items
    }

    /// The cached visible page, pseudo-rows included.
    #[must_use]
    pub fn visible(&self) -> &[PageRow] {
        &self.visible
    }

    /// Cursor position within the visible page.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Current page number, starting at 0.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Whether a previous page exists.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.has_prev
    }

    /// Whether a next page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.has_next
    }

    /// Recompute the visible page if a mutation marked it stale.
    fn ensure_fresh(&mut self) {
        if !self.dirty {
            return;
        }
        let start = (self.page * self.item_max).min(self.items.len());
        let end = (start + self.item_max).min(self.items.len());
        self.has_prev = start > 0;
        self.has_next = end < self.items.len();
        self.visible.clear();
        if self.has_prev {
            self.visible.push(PageRow::PrevPage);
        }
        self.visible.extend((start..end).map(PageRow::Item));
        if self.has_next {
            self.visible.push(PageRow::NextPage);
        }
        if self.index >= self.visible.len() {
            self.index = 0;
        }
        self.dirty = false;
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.visible.len();
        if len == 0 {
            return;
        }
        self.index = (self.index as isize + delta).rem_euclid(len as isize) as usize;
    }

    fn go_to_page(&mut self, page: usize) {
        #[cfg(feature = "tracing")]
        tracing::debug!(from = self.page, to = page, "page change");
        self.page = page;
        self.index = 0;
        self.dirty = true;
        self.ensure_fresh();
    }

    fn activate(&mut self) {
        match self.visible.get(self.index).copied() {
            Some(PageRow::PrevPage) => self.go_to_page(self.page.saturating_sub(1)),
            Some(PageRow::NextPage) => self.go_to_page(self.page + 1),
            Some(PageRow::Item(absolute)) => {
                if let Some(mut cb) = self.on_activate.take() {
                    cb(absolute, &self.items[absolute]);
                    self.on_activate = Some(cb);
                } else {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(absolute, "item activated with no callback registered");
                }
            }
            None => {}
        }
    }

    fn row_text(&self, row: PageRow) -> &str {
        match row {
            PageRow::PrevPage => PREV_PAGE_LABEL,
            PageRow::NextPage => NEXT_PAGE_LABEL,
            PageRow::Item(absolute) => &self.items[absolute].display_name,
        }
    }
}

impl Widget for SelectableList {
    fn render(&self) -> Vec<Cell> {
        let mut cells = Vec::new();
        for (i, row) in self.visible.iter().enumerate() {
            let text: String = self
                .row_text(*row)
                .chars()
                .take(self.rect.width as usize)
                .collect();
            let attr = if i == self.index { Attr::Invert } else { Attr::None };
            cells.extend(draw_text(
                self.rect.x,
                self.rect.y + i as u16,
                &text,
                Color::DEFAULT_FG,
                attr,
            ));
        }
        cells
    }

    fn handle_key(&mut self, key: Key) -> bool {
        self.ensure_fresh();
        match key {
            Key::Up => {
                self.move_cursor(-1);
                true
            }
            Key::Down => {
                self.move_cursor(1);
                true
            }
            Key::Left if self.has_prev => {
                self.go_to_page(self.page - 1);
                true
            }
            Key::Right if self.has_next => {
                self.go_to_page(self.page + 1);
                true
            }
            Key::Enter => {
                self.activate();
                true
            }
            Key::Cancel => {
                if let Some(mut cb) = self.on_cancel.take() {
                    cb();
                    self.on_cancel = Some(cb);
                } else {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("cancel with no callback registered");
                }
                true
            }
            _ => false,
        }
    }
}

impl std::fmt::Debug for SelectableList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectableList")
            .field("rect", &self.rect)
            .field("items", &self.items.len())
            .field("index", &self.index)
            .field("page", &self.page)
            .field("item_max", &self.item_max)
            .finish_non_exhaustive()
    }
}
