mod common;

mod tests {
    use super::common::{FakeStage, RED, ms};
    use myrtio_matrix_animator::{
        Duration,
        animation::{Animation, RainbowAnimation, RainbowVariant},
        color::hue_to_rgb,
    };

    #[test]
    fn test_no_frame_before_interval() {
        let mut rainbow = RainbowAnimation::new(RainbowVariant::Solid);
        let mut stage = FakeStage::default();
        let mut leds = [RED; 25];
        rainbow.start(ms(500));

        assert!(!rainbow.tick(ms(500), &mut leds, &mut stage));
        assert!(!rainbow.tick(ms(549), &mut leds, &mut stage));
        assert!(leds.iter().all(|led| *led == RED));
        assert_eq!(rainbow.hue(), 0);

        assert!(rainbow.tick(ms(550), &mut leds, &mut stage));
        assert_eq!(rainbow.hue(), 2);
    }

    #[test]
    fn test_hue_after_frames_wraps() {
        let mut rainbow = RainbowAnimation::new(RainbowVariant::Solid)
            .with_hue(250)
            .with_step(3);
        let mut stage = FakeStage::default();
        let mut leds = [RED; 25];
        rainbow.start(ms(0));

        for frame in 1..=5 {
            assert!(rainbow.tick(ms(frame * 50), &mut leds, &mut stage));
        }

        assert_eq!(rainbow.hue(), 9);
        assert!(leds.iter().all(|led| *led == hue_to_rgb(9)));
    }

    #[test]
    fn test_one_frame_per_interval() {
        let mut rainbow = RainbowAnimation::new(RainbowVariant::Solid);
        let mut stage = FakeStage::default();
        let mut leds = [RED; 5];
        rainbow.start(ms(0));

        let drawn = (0..200)
            .filter(|t| rainbow.tick(ms(*t), &mut leds, &mut stage))
            .count();

        // Frames at 50, 100 and 150
        assert_eq!(drawn, 3);
        assert_eq!(rainbow.hue(), 6);
    }

    #[test]
    fn test_clock_going_backwards_draws_nothing() {
        let mut rainbow = RainbowAnimation::new(RainbowVariant::Solid);
        let mut stage = FakeStage::default();
        let mut leds = [RED; 5];
        rainbow.start(ms(100));

        assert!(!rainbow.tick(ms(20), &mut leds, &mut stage));
        assert!(rainbow.tick(ms(150), &mut leds, &mut stage));
        assert!(!rainbow.tick(ms(120), &mut leds, &mut stage));
        assert_eq!(rainbow.hue(), 2);
    }

    #[test]
    fn test_sliding_offsets_each_led() {
        let mut rainbow = RainbowAnimation::new(RainbowVariant::Sliding)
            .with_hue(100)
            .with_step(10);
        let mut stage = FakeStage::default();
        let mut leds = [RED; 30];
        rainbow.start(ms(0));

        assert!(rainbow.tick(ms(50), &mut leds, &mut stage));

        assert_eq!(rainbow.hue(), 110);
        for (n, led) in leds.iter().enumerate() {
            let hue = 110u8.wrapping_add((n as u8).wrapping_mul(10));
            assert_eq!(*led, hue_to_rgb(hue), "led {n}");
        }
    }

    #[test]
    fn test_custom_frame_interval() {
        let mut rainbow = RainbowAnimation::new(RainbowVariant::Solid)
            .with_frame_interval(Duration::from_millis(10));
        let mut stage = FakeStage::default();
        let mut leds = [RED; 5];
        rainbow.start(ms(0));

        assert_eq!(rainbow.frame_interval(), Duration::from_millis(10));
        assert!(rainbow.tick(ms(10), &mut leds, &mut stage));
        assert!(stage.shown.is_empty());
    }
}
