mod common;

mod tests {
    use super::common::{BLACK, FakeStage, WHITE, ms};
    use myrtio_matrix_animator::{
        Duration, Rgb,
        animation::{Animation, RANDOM_MAX_INTERVAL, RandomPixelAnimation},
    };

    #[test]
    fn test_exactly_one_pixel_per_frame() {
        let mut random = RandomPixelAnimation::new();
        let mut stage = FakeStage::default();
        let mut leds = [WHITE; 25];
        let mut now = 0;
        random.start(ms(now));

        for _ in 0..50 {
            now += random.frame_interval().as_millis();
            assert!(random.tick(ms(now), &mut leds, &mut stage));
            assert_eq!(leds.iter().filter(|led| **led != BLACK).count(), 1);
        }
    }

    #[test]
    fn test_pause_stays_under_maximum() {
        let mut random = RandomPixelAnimation::new();
        let mut stage = FakeStage::default();
        let mut leds = [BLACK; 25];
        let mut now = 0;
        random.start(ms(now));

        for _ in 0..200 {
            assert!(random.frame_interval() < RANDOM_MAX_INTERVAL);
            now += random.frame_interval().as_millis();
            assert!(random.tick(ms(now), &mut leds, &mut stage));
        }
    }

    #[test]
    fn test_first_pixel_within_a_second() {
        let mut random = RandomPixelAnimation::new();
        let mut stage = FakeStage::default();
        let mut leds = [BLACK; 9];
        random.start(ms(0));

        assert!(random.tick(ms(999), &mut leds, &mut stage));
    }

    #[test]
    fn test_custom_maximum_interval() {
        let mut random = RandomPixelAnimation::new()
            .with_seed(42)
            .with_max_interval(Duration::from_millis(10));
        let mut stage = FakeStage::default();
        let mut leds = [BLACK; 4];
        random.start(ms(0));

        assert_eq!(random.max_interval(), Duration::from_millis(10));
        for frame in 1..=20 {
            assert!(random.tick(ms(frame * 10), &mut leds, &mut stage));
        }
    }

    #[test]
    fn test_empty_strip_draws_nothing() {
        let mut random = RandomPixelAnimation::new();
        let mut stage = FakeStage::default();
        let mut leds: [Rgb; 0] = [];
        random.start(ms(0));

        assert!(!random.tick(ms(5_000), &mut leds, &mut stage));
    }
}
