//! Two-channel RGB indicator trait

/// Discrete indicator states
///
/// The LED has two channels wired, so there are exactly four states and no
/// intensity control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorColor {
    /// Both channels off
    #[default]
    Off,
    /// Channel A only (price falling)
    Down,
    /// Channel B only (price rising)
    Up,
    /// Both channels (alarm yellow)
    Both,
}

impl IndicatorColor {
    /// Pick the trend color for a 24h change
    ///
    /// Changes within `dead_band` of zero (exclusive bounds) show no color.
    /// The comparison is done in `f64` so that `0.001_f32`, which lies just
    /// above 0.001, counts as rising.
    pub fn for_change(change_percent: f32, dead_band: f64) -> Self {
        let change = f64::from(change_percent);
        if change > dead_band {
            IndicatorColor::Up
        } else if change < -dead_band {
            IndicatorColor::Down
        } else {
            IndicatorColor::Off
        }
    }
}

/// Trait for the indicator light
pub trait IndicatorLight {
    /// Both channels off
    fn set_off(&mut self);

    /// Channel A only
    fn set_color_a(&mut self);

    /// Channel B only
    fn set_color_b(&mut self);

    /// Both channels on
    fn set_both(&mut self);

    /// Show one of the four states
    fn show(&mut self, color: IndicatorColor) {
        match color {
            IndicatorColor::Off => self.set_off(),
            IndicatorColor::Down => self.set_color_a(),
            IndicatorColor::Up => self.set_color_b(),
            IndicatorColor::Both => self.set_both(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockIndicator;
    use proptest::prelude::*;

    const DEAD_BAND: f64 = 0.001;

    #[test]
    fn test_dead_band_edges() {
        assert_eq!(IndicatorColor::for_change(0.0, DEAD_BAND), IndicatorColor::Off);
        assert_eq!(IndicatorColor::for_change(0.000_999, DEAD_BAND), IndicatorColor::Off);
        assert_eq!(IndicatorColor::for_change(-0.000_999, DEAD_BAND), IndicatorColor::Off);
        // Nearest f32 to 0.001 is slightly larger than 0.001
        assert_eq!(IndicatorColor::for_change(0.001, DEAD_BAND), IndicatorColor::Up);
        assert_eq!(IndicatorColor::for_change(-0.001, DEAD_BAND), IndicatorColor::Down);
        assert_eq!(IndicatorColor::for_change(0.0011, DEAD_BAND), IndicatorColor::Up);
        assert_eq!(IndicatorColor::for_change(-0.0011, DEAD_BAND), IndicatorColor::Down);
    }

    #[test]
    fn test_show_dispatches() {
        let mut light = MockIndicator::new();
        light.show(IndicatorColor::Both);
        assert_eq!(light.color, IndicatorColor::Both);
        light.show(IndicatorColor::Down);
        assert_eq!(light.color, IndicatorColor::Down);
        light.show(IndicatorColor::Off);
        assert_eq!(light.color, IndicatorColor::Off);
    }

    proptest! {
        #[test]
        fn prop_inside_dead_band_is_off(change in -0.000_999f32..0.000_999) {
            prop_assert_eq!(IndicatorColor::for_change(change, DEAD_BAND), IndicatorColor::Off);
        }

        #[test]
        fn prop_outside_dead_band_has_sign(change in 0.0011f32..1000.0) {
            prop_assert_eq!(IndicatorColor::for_change(change, DEAD_BAND), IndicatorColor::Up);
            prop_assert_eq!(IndicatorColor::for_change(-change, DEAD_BAND), IndicatorColor::Down);
        }
    }
}
