/// Widest window width still classed as mobile.
pub const MOBILE_MAX_WIDTH: f64 = 768.0;
/// Widest window width still classed as tablet.
pub const TABLET_MAX_WIDTH: f64 = 1024.0;

/// Fixed extra scroll room on mobile so every card clears the right edge.
const MOBILE_PADDING: f64 = 50.0;
/// Fraction of viewport width added as padding on tablet / desktop.
const TABLET_PADDING_RATIO: f64 = 0.08;
const DESKTOP_PADDING_RATIO: f64 = 0.10;

/// Touch scrolling is imprecise, so the mobile scroll window is stretched to
/// guarantee the gallery animation completes.
const MOBILE_SCROLL_STRETCH: f64 = 1.2;

/// Quiet period before a resize burst triggers a rebuild.
pub const RESIZE_DEBOUNCE_MS: u64 = 250;
/// Orientation changes report stale dimensions briefly; wait for them to settle.
pub const ORIENTATION_SETTLE_MS: u64 = 300;

/// Coarse device-width bucket used to select animation constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Mobile,
    Tablet,
    Desktop,
}

impl ViewportClass {
    pub fn classify(width: f64) -> Self {
        if width <= MOBILE_MAX_WIDTH {
            ViewportClass::Mobile
        } else if width <= TABLET_MAX_WIDTH {
            ViewportClass::Tablet
        } else {
            ViewportClass::Desktop
        }
    }

    /// Extra translate distance appended past the last card.
    pub fn padding_term(self, viewport_width: f64) -> f64 {
        match self {
            ViewportClass::Mobile => MOBILE_PADDING,
            ViewportClass::Tablet => viewport_width * TABLET_PADDING_RATIO,
            ViewportClass::Desktop => viewport_width * DESKTOP_PADDING_RATIO,
        }
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, ViewportClass::Mobile)
    }
}

/// Recomputed-per-layout descriptor for the pinned gallery. No persistent
/// identity; invalidated whenever viewport class or measurements change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSequence {
    /// How far the gallery track translates left in total.
    pub total_translate_x: f64,
    /// Forward scroll consumed while the section stays pinned.
    pub scroll_distance: f64,
}

/// Distance the gallery must translate for all content to pass through the
/// container. Returns `None` when there is nothing to scroll, in which case
/// no binding should be installed.
pub fn compute_scroll_distance(
    class: ViewportClass,
    viewport_width: f64,
    content_width: f64,
    container_width: f64,
) -> Option<ScrollSequence> {
    let translate_x = content_width - container_width + class.padding_term(viewport_width);
    if translate_x <= 0.0 {
        return None;
    }
    let scroll_distance = if class.is_mobile() {
        translate_x * MOBILE_SCROLL_STRETCH
    } else {
        translate_x
    };
    Some(ScrollSequence {
        total_translate_x: translate_x,
        scroll_distance,
    })
}

/// Linear map from forward scroll within the pinned window to the track's
/// horizontal translation, clamped at both ends.
pub fn translate_for(scroll_offset: f64, seq: &ScrollSequence) -> f64 {
    let progress = (scroll_offset / seq.scroll_distance).clamp(0.0, 1.0);
    -progress * seq.total_translate_x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_boundaries() {
        assert_eq!(ViewportClass::classify(0.0), ViewportClass::Mobile);
        assert_eq!(ViewportClass::classify(375.0), ViewportClass::Mobile);
        assert_eq!(ViewportClass::classify(768.0), ViewportClass::Mobile);
        assert_eq!(ViewportClass::classify(769.0), ViewportClass::Tablet);
        assert_eq!(ViewportClass::classify(1024.0), ViewportClass::Tablet);
        assert_eq!(ViewportClass::classify(1025.0), ViewportClass::Desktop);
        assert_eq!(ViewportClass::classify(1440.0), ViewportClass::Desktop);
    }

    #[test]
    fn mobile_gallery_distance() {
        // width 375, content 2000, container 375
        let seq = compute_scroll_distance(ViewportClass::Mobile, 375.0, 2000.0, 375.0)
            .expect("content wider than container");
        assert_eq!(seq.total_translate_x, 2000.0 - 375.0 + 50.0);
        assert_eq!(seq.total_translate_x, 1675.0);
        assert_eq!(seq.scroll_distance, 1675.0 * 1.2);
        assert_eq!(seq.scroll_distance, 2010.0);
    }

    #[test]
    fn desktop_gallery_distance() {
        // width 1440, content 3000, container 1440 -> padding 144
        let seq = compute_scroll_distance(ViewportClass::Desktop, 1440.0, 3000.0, 1440.0)
            .expect("content wider than container");
        assert_eq!(seq.total_translate_x, 1704.0);
        // No stretch outside mobile.
        assert_eq!(seq.scroll_distance, 1704.0);
    }

    #[test]
    fn no_sequence_when_nothing_to_scroll() {
        assert!(compute_scroll_distance(ViewportClass::Desktop, 1440.0, 1000.0, 1440.0).is_none());
        // Exactly zero is also a no-op.
        assert!(compute_scroll_distance(ViewportClass::Mobile, 375.0, 325.0, 375.0).is_none());
    }

    #[test]
    fn distance_is_idempotent_and_monotonic_in_content_width() {
        let a = compute_scroll_distance(ViewportClass::Tablet, 900.0, 2500.0, 900.0).unwrap();
        let b = compute_scroll_distance(ViewportClass::Tablet, 900.0, 2500.0, 900.0).unwrap();
        assert_eq!(a, b);

        let mut last = 0.0;
        for content in [1000.0, 1500.0, 2200.0, 4000.0] {
            let seq = compute_scroll_distance(ViewportClass::Tablet, 900.0, content, 900.0)
                .expect("content wider than container");
            assert!(seq.total_translate_x > last);
            last = seq.total_translate_x;
        }
    }

    #[test]
    fn translate_clamps_to_sequence_bounds() {
        let seq = ScrollSequence {
            total_translate_x: 1000.0,
            scroll_distance: 1200.0,
        };
        assert_eq!(translate_for(-50.0, &seq), 0.0);
        assert_eq!(translate_for(0.0, &seq), 0.0);
        assert_eq!(translate_for(600.0, &seq), -500.0);
        assert_eq!(translate_for(1200.0, &seq), -1000.0);
        assert_eq!(translate_for(5000.0, &seq), -1000.0);
    }
}
