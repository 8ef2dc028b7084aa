//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuAtSign as Mention, LuCheck as Check, LuChevronRight as ChevronRight, LuCopy as Copy,
        LuExternalLink as ExternalLink, LuEye as Inspect, LuFileText as Log, LuMenu as Menu,
        LuPlay as Live, LuSearch as Search, LuServer as Server, LuSettings as Config,
        LuSmile as Emote, LuTag as Provider, LuUsers as Accounts, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsAt as Mention, BsBoxArrowUpRight as ExternalLink, BsCheck2 as Check,
        BsChevronRight as ChevronRight, BsClipboard as Copy, BsEmojiSmile as Emote,
        BsEye as Inspect, BsFileEarmarkText as Log, BsGear as Config, BsHddStack as Server,
        BsList as Menu, BsPeople as Accounts, BsPlayFill as Live, BsSearch as Search,
        BsTag as Provider, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

// Chrome
themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(COPY, Copy);
themed_icon!(CHECK, Check);

// Feature grid
themed_icon!(ACCOUNTS, Accounts);
themed_icon!(EMOTE, Emote);
themed_icon!(PROVIDER, Provider);
themed_icon!(INSPECT, Inspect);
themed_icon!(MENTION, Mention);
themed_icon!(LIVE, Live);
themed_icon!(SEARCH, Search);
themed_icon!(LOG, Log);
themed_icon!(CONFIG, Config);
themed_icon!(SERVER, Server);
