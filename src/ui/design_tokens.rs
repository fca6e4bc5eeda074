// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use orphanage_finder::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// A translucent callout background
let callout_bg = Color {
    a: opacity::OVERLAY_HOVER,
    ..palette::WHITE
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);
    pub const GRAY_50: Color = Color::from_rgb(0.949, 0.953, 0.961); // #f2f3f5

    // Brand colors (cyan scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.325, 0.835, 0.894); // Hover
    pub const PRIMARY_500: Color = Color::from_rgb(0.082, 0.765, 0.839); // #15c3d6
    pub const PRIMARY_600: Color = Color::from_rgb(0.082, 0.714, 0.839); // #15b6d6
    pub const PRIMARY_700: Color = Color::from_rgb(0.0, 0.537, 0.647); // #0089a5 callout text

    /// Muted blue-gray used for secondary labels (#8fa7b3).
    pub const SLATE_400: Color = Color::from_rgb(0.561, 0.655, 0.702);

    /// Marker pin fill (#ffd666).
    pub const ACCENT_500: Color = Color::from_rgb(1.0, 0.839, 0.4);

    // Weekend availability toggle
    pub const YES_BG: Color = Color::from_rgb(0.929, 1.0, 0.965); // #edfff6
    pub const YES_BORDER: Color = Color::from_rgb(0.631, 0.914, 0.773); // #a1e9c5
    pub const YES_TEXT: Color = Color::from_rgb(0.216, 0.780, 0.498); // #37c77f
    pub const NO_BG: Color = Color::from_rgb(0.988, 0.941, 0.957); // #fcf0f4
    pub const NO_BORDER: Color = Color::from_rgb(0.969, 0.859, 0.902); // #f7dbe6
    pub const NO_TEXT: Color = Color::from_rgb(1.0, 0.4, 0.616); // #ff669d

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_HOVER: f32 = 0.8;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_XXL: f32 = 64.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;

    // Component widths
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const FORM_WIDTH: f32 = 700.0;
    pub const DIALOG_WIDTH: f32 = 400.0;

    // Map
    /// Height of the location picker on the registration form.
    pub const FORM_MAP_HEIGHT: f32 = 280.0;
    /// Callout anchored to a map marker.
    pub const CALLOUT_WIDTH: f32 = 160.0;
    pub const CALLOUT_HEIGHT: f32 = 46.0;
    /// Radius of the marker pin head.
    pub const MARKER_RADIUS: f32 = 14.0;

    // Footer of the map screen
    pub const FOOTER_HEIGHT: f32 = 56.0;

    /// Edge of an image preview square on the form.
    pub const PREVIEW_SIZE: f32 = 96.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale following Material Design 3 type scale principles.
    //!
    //! The scale provides semantic sizes for consistent text hierarchy:
    //! - Titles: Large headings (pages, dialogs)
    //! - Body: Primary content text
    //! - Caption: Secondary, supporting text

    /// Large title - Main page headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Form section legends
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Dialog headers
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Form inputs, emphasis text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - Hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Character counters, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Medium border - Emphasis borders, toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 20.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::ICON_XXL > sizing::ICON_MD);
    assert!(sizing::CALLOUT_WIDTH > sizing::CALLOUT_HEIGHT);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > 0.0);

    // Color validation
    assert!(palette::PRIMARY_500.g >= 0.0 && palette::PRIMARY_500.g <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn brand_color_is_cyan() {
        assert!(palette::PRIMARY_500.b > palette::PRIMARY_500.r);
        assert!(palette::PRIMARY_500.g > palette::PRIMARY_500.r);
    }
}
