//! Colors for game elements (CSS color strings)

pub type Color = &'static str;

pub const BACKGROUND_TOP: Color = "#0f172a";
pub const BACKGROUND_BOTTOM: Color = "#1e293b";
pub const FLOOR_STRIPE: Color = "#0b1220";
pub const OBSTACLE: Color = "#ef4444";
pub const HUD_TEXT: Color = "#e2e8f0";
pub const GOAL_FILL: Color = "rgba(34, 197, 94, 0.25)";
pub const GOAL_LABEL: Color = "#4ade80";
pub const BANNER_SHADE: Color = "rgba(2, 6, 23, 0.65)";
pub const BANNER_LOST: Color = "#f87171";
pub const BANNER_WON: Color = "#fbbf24";

/// Player sprite palette
pub mod player {
    use super::Color;

    pub const CAP: Color = "#1e3a8a";
    pub const CAP_BAND: Color = "#93c5fd";
    pub const SKIN: Color = "#f4c7a1";
    pub const EYE: Color = "#000000";
    pub const MOUTH: Color = "#ef4444";
    pub const SHIRT: Color = "#1d4ed8";
    pub const TROUSERS: Color = "#0f172a";
    pub const SHOES: Color = "#e5e7eb";
}

/// Keg sprite palette
pub mod keg {
    use super::Color;

    pub const BODY: Color = "#a16207";
    pub const HOOP: Color = "#6b7280";
    pub const PANEL: Color = "#d97706";
    pub const LABEL: Color = "#f8fafc";
    pub const TAP: Color = "#334155";
}
