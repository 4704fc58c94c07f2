//! Gruvbox palettes

use crate::theme::{rgb, Theme};

pub fn dark() -> Theme {
    Theme {
        background: rgb(0x282828),
        panel: rgb(0x32302f),
        raised: rgb(0x45403d),
        text: rgb(0xd4be98),
        text_soft: rgb(0xddc7a1),
        border: rgb(0x7c6f64),
        muted: rgb(0x928374),
        active: rgb(0xd8a657),
        selection: rgb(0x45403d),
        progress: rgb(0xa9b665),
        marquee: rgb(0xd8a657),
        playing: rgb(0xa9b665),
        close: rgb(0xea6962),
        nav_light: rgb(0xddc7a1),
        nav_dark: rgb(0x1d2021),
        error: rgb(0xea6962),
        accent: rgb(0x89b482),
    }
}

pub fn light() -> Theme {
    Theme {
        background: rgb(0xfbf1c7),
        panel: rgb(0xebdbb2),
        raised: rgb(0xd5c4a1),
        text: rgb(0x3c3836),
        text_soft: rgb(0x282828),
        border: rgb(0x928374),
        muted: rgb(0x7c6f64),
        active: rgb(0xb57614),
        selection: rgb(0xd5c4a1),
        progress: rgb(0x79740e),
        marquee: rgb(0xb57614),
        playing: rgb(0x79740e),
        close: rgb(0x9d0006),
        nav_light: rgb(0xfbf1c7),
        nav_dark: rgb(0x282828),
        error: rgb(0x9d0006),
        accent: rgb(0x427b58),
    }
}
