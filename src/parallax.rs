/// Transform for the parallax background, or `None` when the section is too
/// far from the viewport to bother.
pub fn background_transform(
    section_top: f64,
    viewport_height: f64,
    factor_px: f64,
    scale: f64,
) -> Option<String> {
    if viewport_height <= 0.0 {
        return None;
    }
    let progress = -section_top / viewport_height;
    if progress > -1.0 && progress < 2.0 {
        // Adding 0.0 turns -0.0 into 0.0 so the style never reads "-0px".
        let shift = progress * factor_px + 0.0;
        Some(format!("translateY({}px) scale({})", shift, scale))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_at_viewport_top_is_untranslated() {
        assert_eq!(
            background_transform(0.0, 800.0, 50.0, 1.1).as_deref(),
            Some("translateY(0px) scale(1.1)")
        );
        assert_eq!(
            background_transform(-0.0, 800.0, 50.0, 1.1).as_deref(),
            Some("translateY(0px) scale(1.1)")
        );
    }

    #[test]
    fn halfway_past_moves_half_the_factor() {
        assert_eq!(
            background_transform(-400.0, 800.0, 50.0, 1.1).as_deref(),
            Some("translateY(25px) scale(1.1)")
        );
    }

    #[test]
    fn far_away_sections_are_skipped() {
        assert_eq!(background_transform(800.0, 800.0, 50.0, 1.1), None);
        assert_eq!(background_transform(-1600.0, 800.0, 50.0, 1.1), None);
        assert_eq!(background_transform(0.0, 0.0, 50.0, 1.1), None);
    }
}
