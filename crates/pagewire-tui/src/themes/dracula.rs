//! Dracula palette

use crate::theme::{rgb, Theme};

pub fn theme() -> Theme {
    Theme {
        background: rgb(0x282a36),
        panel: rgb(0x21222c),
        raised: rgb(0x44475a),
        text: rgb(0xf8f8f2),
        text_soft: rgb(0xe9e9ea),
        border: rgb(0x6272a4),
        muted: rgb(0x7a7c8d),
        active: rgb(0xf1fa8c),
        selection: rgb(0x44475a),
        progress: rgb(0x50fa7b),
        marquee: rgb(0xffb86c),
        playing: rgb(0x50fa7b),
        close: rgb(0xff5555),
        nav_light: rgb(0xf8f8f2),
        nav_dark: rgb(0x21222c),
        error: rgb(0xff5555),
        accent: rgb(0x8be9fd),
    }
}
