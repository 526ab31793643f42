// src/shared/view/scroll_spy.rs
//
// Navbar highlighting rule: the active link belongs to the first section
// whose box straddles the middle of the viewport.

pub const DEFAULT_SECTION: &str = "#home";

/// Vertical extent of a page section relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBox<'a> {
    pub anchor: &'a str,
    pub top: f64,
    pub bottom: f64,
}

pub fn active_section<'a>(sections: &[SectionBox<'a>], viewport_height: f64) -> &'a str {
    let middle = viewport_height / 2.0;
    sections
        .iter()
        .find(|s| s.top <= middle && s.bottom >= middle)
        .map(|s| s.anchor)
        .unwrap_or(DEFAULT_SECTION)
}
