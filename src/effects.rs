//! Pure pointer/scroll math for the decorative effects. Components apply the
//! resulting descriptors to the DOM through thin style adapters.

/// Spotlight glow defaults for the bento card grid.
pub const SPOTLIGHT_RADIUS: f64 = 300.0;
pub const PARTICLE_COUNT: usize = 12;
pub const GLOW_COLOR: &str = "255, 179, 71";

/// Maximum card tilt in degrees.
const TILT_MAX_DEG: f64 = 10.0;
/// Pointer-following translation factor for magnetised cards.
const MAGNETISM_FACTOR: f64 = 0.05;

/// Scroll window for the timeline fill: starts when the section top reaches
/// 70% of the viewport, ends when its bottom reaches 30%.
const FILL_START_VIEWPORT_FRACTION: f64 = 0.70;
const FILL_END_VIEWPORT_FRACTION: f64 = 0.30;
/// Timeline items reveal once their top rises above 85% of the viewport.
pub const ITEM_REVEAL_VIEWPORT_FRACTION: f64 = 0.85;

/// Element geometry in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CardRect {
    fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// How far the spotlight reaches around the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotlightReach {
    /// Full intensity within this distance.
    pub proximity: f64,
    /// Intensity fades to zero at this distance.
    pub fade_distance: f64,
}

impl SpotlightReach {
    pub fn from_radius(radius: f64) -> Self {
        Self {
            proximity: radius * 0.5,
            fade_distance: radius * 0.75,
        }
    }
}

/// Glow strength for a card whose center is `distance` from the pointer:
/// 1 inside the proximity ring, linear falloff out to the fade distance.
pub fn glow_intensity(distance: f64, reach: SpotlightReach) -> f64 {
    if distance <= reach.proximity {
        1.0
    } else if distance < reach.fade_distance {
        (reach.fade_distance - distance) / (reach.fade_distance - reach.proximity)
    } else {
        0.0
    }
}

pub fn distance_to_center(pointer_x: f64, pointer_y: f64, rect: CardRect) -> f64 {
    let (cx, cy) = rect.center();
    (pointer_x - cx).hypot(pointer_y - cy)
}

/// CSS custom-property values driving one card's border glow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowVars {
    /// Pointer position relative to the card, in percent.
    pub x_pct: f64,
    pub y_pct: f64,
    pub intensity: f64,
    pub radius: f64,
}

pub fn card_glow(pointer_x: f64, pointer_y: f64, rect: CardRect, radius: f64) -> GlowVars {
    let reach = SpotlightReach::from_radius(radius);
    let intensity = glow_intensity(distance_to_center(pointer_x, pointer_y, rect), reach);
    GlowVars {
        x_pct: (pointer_x - rect.left) / rect.width * 100.0,
        y_pct: (pointer_y - rect.top) / rect.height * 100.0,
        intensity,
        radius,
    }
}

/// Card tilt (rotate_x, rotate_y) in degrees for a pointer at the given
/// offset within the card. Zero at the center, ±10° at the edges; vertical
/// offset tilts the card away from the pointer.
pub fn tilt(offset_x: f64, offset_y: f64, width: f64, height: f64) -> (f64, f64) {
    let cx = width / 2.0;
    let cy = height / 2.0;
    let rotate_x = (offset_y - cy) / cy * -TILT_MAX_DEG;
    let rotate_y = (offset_x - cx) / cx * TILT_MAX_DEG;
    (rotate_x, rotate_y)
}

/// Small pointer-following translation for magnetised cards.
pub fn magnetism(offset_x: f64, offset_y: f64, width: f64, height: f64) -> (f64, f64) {
    (
        (offset_x - width / 2.0) * MAGNETISM_FACTOR,
        (offset_y - height / 2.0) * MAGNETISM_FACTOR,
    )
}

/// Progress of the timeline fill through its scroll window, in [0, 1].
/// `section_top` is in document coordinates.
pub fn fill_progress(
    scroll_y: f64,
    viewport_height: f64,
    section_top: f64,
    section_height: f64,
) -> f64 {
    let start = section_top - viewport_height * FILL_START_VIEWPORT_FRACTION;
    let end = section_top + section_height - viewport_height * FILL_END_VIEWPORT_FRACTION;
    if end <= start {
        return 0.0;
    }
    ((scroll_y - start) / (end - start)).clamp(0.0, 1.0)
}

/// Whether an item whose top sits at `item_top` (viewport coordinates) has
/// crossed its reveal trigger line.
pub fn item_entered(item_top: f64, viewport_height: f64) -> bool {
    item_top < viewport_height * ITEM_REVEAL_VIEWPORT_FRACTION
}

/// Whether leaving the viewport hides an item again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPolicy {
    /// Stay visible once revealed.
    Once,
    /// Fade back out when scrolled above the trigger point.
    Reverse,
}

pub fn reveal(entered: bool, was_shown: bool, policy: RevealPolicy) -> bool {
    match policy {
        RevealPolicy::Once => was_shown || entered,
        RevealPolicy::Reverse => entered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: CardRect = CardRect {
        left: 100.0,
        top: 200.0,
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn spotlight_reach_from_radius() {
        let reach = SpotlightReach::from_radius(300.0);
        assert_eq!(reach.proximity, 150.0);
        assert_eq!(reach.fade_distance, 225.0);
    }

    #[test]
    fn glow_intensity_falloff() {
        let reach = SpotlightReach::from_radius(300.0);
        assert_eq!(glow_intensity(0.0, reach), 1.0);
        assert_eq!(glow_intensity(150.0, reach), 1.0);
        // Halfway between proximity and fade distance.
        let mid = glow_intensity(187.5, reach);
        assert!((mid - 0.5).abs() < 1e-9);
        assert_eq!(glow_intensity(225.0, reach), 0.0);
        assert_eq!(glow_intensity(1000.0, reach), 0.0);
    }

    #[test]
    fn card_glow_tracks_pointer_in_percent() {
        // Pointer at the card center.
        let vars = card_glow(200.0, 250.0, RECT, SPOTLIGHT_RADIUS);
        assert_eq!(vars.x_pct, 50.0);
        assert_eq!(vars.y_pct, 50.0);
        assert_eq!(vars.intensity, 1.0);
        assert_eq!(vars.radius, SPOTLIGHT_RADIUS);

        // Pointer at the top-left corner.
        let vars = card_glow(100.0, 200.0, RECT, SPOTLIGHT_RADIUS);
        assert_eq!(vars.x_pct, 0.0);
        assert_eq!(vars.y_pct, 0.0);
    }

    #[test]
    fn tilt_is_zero_at_center_and_capped_at_edges() {
        assert_eq!(tilt(100.0, 50.0, 200.0, 100.0), (0.0, 0.0));
        let (rx, ry) = tilt(200.0, 0.0, 200.0, 100.0);
        assert_eq!(rx, 10.0);
        assert_eq!(ry, 10.0);
        let (rx, ry) = tilt(0.0, 100.0, 200.0, 100.0);
        assert_eq!(rx, -10.0);
        assert_eq!(ry, -10.0);
    }

    #[test]
    fn magnetism_scales_offset_from_center() {
        assert_eq!(magnetism(100.0, 50.0, 200.0, 100.0), (0.0, 0.0));
        assert_eq!(magnetism(200.0, 100.0, 200.0, 100.0), (5.0, 2.5));
    }

    #[test]
    fn fill_progress_clamps_to_scroll_window() {
        // Section of height 1000 starting at y=2000, viewport 800.
        // Window: start = 2000 - 560 = 1440, end = 3000 - 240 = 2760.
        assert_eq!(fill_progress(0.0, 800.0, 2000.0, 1000.0), 0.0);
        assert_eq!(fill_progress(1440.0, 800.0, 2000.0, 1000.0), 0.0);
        assert_eq!(fill_progress(2100.0, 800.0, 2000.0, 1000.0), 0.5);
        assert_eq!(fill_progress(2760.0, 800.0, 2000.0, 1000.0), 1.0);
        assert_eq!(fill_progress(9999.0, 800.0, 2000.0, 1000.0), 1.0);
    }

    #[test]
    fn fill_progress_degenerate_window_is_zero() {
        assert_eq!(fill_progress(500.0, 800.0, 100.0, 10.0), 0.0);
    }

    #[test]
    fn reveal_policies() {
        assert!(item_entered(100.0, 800.0));
        assert!(!item_entered(700.0, 800.0));

        // Reverse: visibility follows the trigger line both ways.
        assert!(reveal(true, false, RevealPolicy::Reverse));
        assert!(!reveal(false, true, RevealPolicy::Reverse));
        // Once: stays shown after the first entry.
        assert!(reveal(false, true, RevealPolicy::Once));
        assert!(!reveal(false, false, RevealPolicy::Once));
    }
}
