//! Nord palette

use crate::theme::{rgb, Theme};

pub fn theme() -> Theme {
    Theme {
        background: rgb(0x2e3440),
        panel: rgb(0x3b4252),
        raised: rgb(0x434c5e),
        text: rgb(0xeceff4),
        text_soft: rgb(0xe5e9f0),
        border: rgb(0x4c566a),
        muted: rgb(0xd8dee9),
        active: rgb(0x88c0d0),
        selection: rgb(0x434c5e),
        progress: rgb(0xa3be8c),
        marquee: rgb(0xebcb8b),
        playing: rgb(0xa3be8c),
        close: rgb(0xbf616a),
        nav_light: rgb(0xeceff4),
        nav_dark: rgb(0x2e3440),
        error: rgb(0xbf616a),
        accent: rgb(0x8fbcbb),
    }
}
