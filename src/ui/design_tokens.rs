// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Single vocabulary for every visual constant in the UI: colors, opacity,
the spacing grid, component sizes, type scale, borders, radii and shadows.
Widgets never hard-code a pixel value; they name a token from here.

```
use reelsbook::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_HOVER,
    ..palette::BLACK
};
let padding = spacing::MD; // 16px
```

Tokens form scales; when adjusting one, keep its neighbors in ratio
(compile-time assertions at the bottom of this file pin the load-bearing
relationships).
"#]

//! Design tokens centralisés pour toute l'interface.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale anchors: near-black stage, near-white surfaces, and the
    // mid-grays used for borders, muted text and disabled fills.
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.08, 0.08, 0.08);
    pub const GRAY_700: Color = Color::from_rgb(0.27, 0.27, 0.27);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.45, 0.45);
    pub const GRAY_200: Color = Color::from_rgb(0.78, 0.78, 0.78);
    pub const GRAY_100: Color = Color::from_rgb(0.88, 0.88, 0.88);

    // Brand colors (violet scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.55, 0.49, 0.96); // Light violet (hover)
    pub const PRIMARY_500: Color = Color::from_rgb(0.44, 0.37, 0.89); // Primary violet
    pub const PRIMARY_600: Color = Color::from_rgb(0.35, 0.28, 0.76); // Dark violet (borders)

    // Semantic colors, shared by toasts and inline status text
    pub const ERROR_500: Color = Color::from_rgb(0.86, 0.21, 0.27); // Crimson
    pub const WARNING_500: Color = Color::from_rgb(0.93, 0.6, 0.11); // Amber
    pub const SUCCESS_500: Color = Color::from_rgb(0.18, 0.66, 0.37); // Green
    pub const INFO_500: Color = Color::from_rgb(0.23, 0.51, 0.96); // Sky blue
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Faint interaction wash (hovered dismiss button).
    pub const OVERLAY_SUBTLE: f32 = 0.15;

    /// Pressed-state wash.
    pub const OVERLAY_MEDIUM: f32 = 0.4;

    /// Player scrim behind the play affordance and control strip.
    pub const OVERLAY_HOVER: f32 = 0.75;

    /// Semi-transparent panel surfaces (upload form, login card).
    pub const SURFACE: f32 = 0.94;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // half step
    pub const XS: f32 = 8.0; // base unit
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Glyph sizes (play affordance)
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_XL: f32 = 48.0;

    // Media cards (portrait 9:16 frame)
    pub const CARD_WIDTH: f32 = 270.0;
    pub const CARD_MEDIA_HEIGHT: f32 = 480.0;

    // Upload form
    pub const FORM_WIDTH: f32 = 420.0;
    pub const PROGRESS_BAR_HEIGHT: f32 = 8.0;

    // Navbar dropdown
    pub const MENU_WIDTH: f32 = 220.0;

    // Toast cards
    pub const TOAST_WIDTH: f32 = 340.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Semantic font sizes; pick by role, not by number.

    /// Large title (upload and login page headings).
    pub const TITLE_LG: f32 = 28.0;

    /// Medium title (brand name, detail page heading).
    pub const TITLE_MD: f32 = 22.0;

    /// Small title (card titles, section rows).
    pub const TITLE_SM: f32 = 18.0;

    /// Emphasis body (form inputs, account label).
    pub const BODY_LG: f32 = 16.0;

    /// Standard body (most UI text).
    pub const BODY: f32 = 14.0;

    /// Small body (hints, inline validation errors).
    pub const BODY_SM: f32 = 13.0;

    /// Caption (badges, progress percent).
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Hairline borders (cards, buttons).
    pub const WIDTH_SM: f32 = 1.0;

    /// Accent borders (toast severity edge).
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // pill
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    /// Black at 30% so elevated surfaces read as lifted, not outlined.
    const TINT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.3,
    };

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: TINT,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: TINT,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: TINT,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing stays strictly increasing along the grid
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);
    assert!(spacing::XXL > spacing::XL);

    // Opacity values are genuine translucency, never fully on or off
    assert!(opacity::OVERLAY_SUBTLE > 0.0);
    assert!(opacity::OVERLAY_MEDIUM > opacity::OVERLAY_SUBTLE);
    assert!(opacity::OVERLAY_HOVER > opacity::OVERLAY_MEDIUM);
    assert!(opacity::SURFACE > opacity::OVERLAY_HOVER && opacity::SURFACE < 1.0);

    // The badge glyph fits inside the badge
    assert!(sizing::ICON_XL > sizing::ICON_MD);
    // Card frame keeps the 9:16 portrait ratio
    assert!(sizing::CARD_MEDIA_HEIGHT == sizing::CARD_WIDTH * 16.0 / 9.0);

    // Type scale ordering
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Accent borders are heavier than hairlines; pills out-round everything
    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(radius::FULL > radius::LG && radius::LG > radius::MD && radius::MD > radius::SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_doubles_from_the_base_unit() {
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::XXL, spacing::LG * 2.0);
    }

    #[test]
    fn card_frame_is_portrait() {
        assert!(sizing::CARD_MEDIA_HEIGHT > sizing::CARD_WIDTH);
    }

    #[test]
    fn toast_is_narrower_than_the_form() {
        assert!(sizing::TOAST_WIDTH < sizing::FORM_WIDTH);
    }
}
