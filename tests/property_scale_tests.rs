use markchart::core::{TimeScale, ValueScale, Viewport};
use proptest::prelude::*;

proptest! {
    #[test]
    fn time_scale_round_trips_within_tolerance(
        start in -1.0e6f64..1.0e6,
        span in 1.0f64..1.0e6,
        ratio in 0.0f64..1.0,
        width in 16u32..4096u32,
    ) {
        let viewport = Viewport::new(width, 720);
        let scale = TimeScale::new(start, start + span).expect("time scale");
        let time = start + span * ratio;

        let pixel = scale.time_to_pixel(time, viewport).expect("to pixel");
        let back = scale.pixel_to_time(pixel, viewport).expect("from pixel");

        prop_assert!(pixel.is_finite());
        prop_assert!((back - time).abs() <= 1e-6 * span.max(1.0));
    }

    #[test]
    fn value_scale_is_inverted_and_monotonic(
        min in -1.0e6f64..1.0e6,
        span in 1.0f64..1.0e6,
        low_ratio in 0.0f64..0.49,
        high_ratio in 0.51f64..1.0,
        height in 16u32..4096u32,
    ) {
        let viewport = Viewport::new(1280, height);
        let scale = ValueScale::new(min, min + span).expect("value scale");

        let low = min + span * low_ratio;
        let high = min + span * high_ratio;
        let low_px = scale.value_to_pixel(low, viewport).expect("low pixel");
        let high_px = scale.value_to_pixel(high, viewport).expect("high pixel");

        // Larger values sit closer to the top of the surface.
        prop_assert!(high_px < low_px);

        let top = scale.value_to_pixel(min + span, viewport).expect("top");
        let bottom = scale.value_to_pixel(min, viewport).expect("bottom");
        prop_assert!(top.abs() <= 1e-5);
        prop_assert!((bottom - f64::from(height)).abs() <= 1e-5);
    }

    #[test]
    fn value_scale_round_trips_within_tolerance(
        min in -1.0e6f64..1.0e6,
        span in 1.0f64..1.0e6,
        ratio in 0.0f64..1.0,
        height in 16u32..4096u32,
    ) {
        let viewport = Viewport::new(1280, height);
        let scale = ValueScale::new(min, min + span).expect("value scale");
        let value = min + span * ratio;

        let pixel = scale.value_to_pixel(value, viewport).expect("to pixel");
        let back = scale.pixel_to_value(pixel, viewport).expect("from pixel");
        prop_assert!((back - value).abs() <= 1e-6 * span.max(1.0));
    }
}
