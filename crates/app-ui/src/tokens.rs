//! Design tokens
//!
//! Spacing, sizing, radius, typography sizes, shadows and icon names shared
//! by the courier screens.

use serde::{Deserialize, Serialize};

// =============================================================================
// Spacing
// =============================================================================

/// Spacing scale
pub mod spacing {
    /// Extra small (4px)
    pub const SPACE_XS: f32 = 4.0;
    /// Small (8px)
    pub const SPACE_SM: f32 = 8.0;
    /// Medium (10px)
    pub const SPACE_MD: f32 = 10.0;
    /// Base (12px)
    pub const SPACE_BASE: f32 = 12.0;
    /// Large (16px)
    pub const SPACE_LG: f32 = 16.0;
    /// Empty-state padding (64px)
    pub const SPACE_3XL: f32 = 64.0;
}

// =============================================================================
// Sizing
// =============================================================================

/// Component sizes
pub mod sizing {
    /// Icon sizes
    pub mod icon {
        /// Small (16px), inline with text
        pub const SM: f32 = 16.0;
        /// Large (24px), header actions
        pub const LG: f32 = 24.0;
        /// Placeholder (64px)
        pub const XXL: f32 = 64.0;
    }
}

// =============================================================================
// Border Radius
// =============================================================================

/// Border radius scale
pub mod radius {
    /// Medium (8px), tabs and note boxes
    pub const MD: f32 = 8.0;
    /// Large (12px), cards and badges
    pub const LG: f32 = 12.0;
}

/// Border widths
pub mod border {
    /// Thin (1px)
    pub const THIN: f32 = 1.0;
}

// =============================================================================
// Typography
// =============================================================================

/// Font size scale
pub mod font_size {
    /// Extra small (11px), badges and dates
    pub const XS: f32 = 11.0;
    /// Small (12px), notes
    pub const SM: f32 = 12.0;
    /// Medium (13px), body rows and tabs
    pub const MD: f32 = 13.0;
    /// Base (14px)
    pub const BASE: f32 = 14.0;
    /// Large (16px), tracking codes
    pub const LG: f32 = 16.0;
    /// Extra large (18px), screen titles
    pub const XL: f32 = 18.0;
}

/// Font weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// 400
    #[default]
    Regular,
    /// 600
    Semibold,
    /// 700
    Bold,
}

impl FontWeight {
    /// Numeric CSS weight
    pub fn value(&self) -> u16 {
        match self {
            FontWeight::Regular => 400,
            FontWeight::Semibold => 600,
            FontWeight::Bold => 700,
        }
    }
}

// =============================================================================
// Shadows
// =============================================================================

/// Drop shadow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Blur radius
    pub blur: f32,
    /// Shadow color with alpha
    pub color: String,
    /// Android elevation
    pub elevation: f32,
}

/// Shadow presets
pub mod shadows {
    use super::Shadow;

    /// Card shadow
    pub fn card() -> Shadow {
        Shadow {
            offset_x: 0.0,
            offset_y: 2.0,
            blur: 4.0,
            color: "#0000001A".to_string(),
            elevation: 3.0,
        }
    }
}

// =============================================================================
// Icons
// =============================================================================

/// Material icon names used by the courier screens
pub mod icons {
    /// Courier in transit
    pub const LOCAL_SHIPPING: &str = "local-shipping";
    /// Courier received
    pub const CHECK_CIRCLE: &str = "check-circle";
    /// Unknown status
    pub const INFO: &str = "info";
    /// Technicians row
    pub const PERSON: &str = "person";
    /// Items row
    pub const INVENTORY: &str = "inventory";
    /// Amount row
    pub const CURRENCY_RUPEE: &str = "currency-rupee";
    /// Details action
    pub const ARROW_FORWARD: &str = "arrow-forward";
    /// Back action
    pub const ARROW_BACK: &str = "arrow-back";
    /// Empty list
    pub const INBOX: &str = "inbox";
}
