mod common;

mod tests {
    use super::common::{BLACK, FakeStage, WHITE, ms};
    use myrtio_matrix_animator::animation::{
        Animation, DEFAULT_PALETTE, DEFAULT_PATH, PathStep, SNAKE_LENGTH, SnakeAnimation,
    };

    static GAPPED_PATH: [PathStep; 7] = [
        Some(0),
        Some(1),
        None,
        Some(3),
        Some(4),
        Some(5),
        Some(6),
    ];

    static SHORT_PATH: [PathStep; 2] = [Some(0), Some(1)];

    fn lit(leds: &[myrtio_matrix_animator::Rgb]) -> usize {
        leds.iter().filter(|led| **led != BLACK).count()
    }

    #[test]
    fn test_window_has_trail_length() {
        let snake = SnakeAnimation::new();
        assert_eq!(snake.window().len(), SNAKE_LENGTH);
        assert_eq!(snake.window(), [0, 27, 26, 25, 24]);
    }

    #[test]
    fn test_head_advances_and_wraps() {
        let mut snake = SnakeAnimation::new();
        let mut stage = FakeStage::default();
        let mut leds = [BLACK; 25];
        snake.start(ms(0));

        assert!(!snake.tick(ms(149), &mut leds, &mut stage));
        assert_eq!(snake.head(), 0);

        assert!(snake.tick(ms(150), &mut leds, &mut stage));
        assert_eq!(snake.head(), 1);
        assert_eq!(snake.window(), [1, 0, 27, 26, 25]);

        for frame in 2..=DEFAULT_PATH.len() as u64 {
            assert!(snake.tick(ms(frame * 150), &mut leds, &mut stage));
        }
        assert_eq!(snake.head(), 0);
    }

    #[test]
    fn test_first_frame_tail_wraps_to_path_end() {
        let mut snake = SnakeAnimation::new();
        let mut stage = FakeStage::default();
        let mut leds = [WHITE; 25];
        snake.start(ms(0));

        assert!(snake.tick(ms(150), &mut leds, &mut stage));

        // Head on path slot 0, tail wrapped to the end of the path
        assert_eq!(leds[4], DEFAULT_PALETTE[0]);
        assert_eq!(leds[12], DEFAULT_PALETTE[2]);
        assert_eq!(leds[13], DEFAULT_PALETTE[4]);
        assert_eq!(lit(&leds), 3);
    }

    #[test]
    fn test_gaps_are_never_painted() {
        let mut snake = SnakeAnimation::new().with_path(&GAPPED_PATH);
        let mut stage = FakeStage::default();
        let mut leds = [BLACK; 8];
        snake.start(ms(0));

        for frame in 1..=GAPPED_PATH.len() as u64 * 2 {
            let window = snake.window();
            assert!(snake.tick(ms(frame * 150), &mut leds, &mut stage));

            let gaps = window
                .iter()
                .filter(|slot| GAPPED_PATH[**slot].is_none())
                .count();
            assert_eq!(lit(&leds), SNAKE_LENGTH - gaps);
            assert_eq!(leds[2], BLACK);
            assert_eq!(leds[7], BLACK);
        }
    }

    #[test]
    fn test_trail_fades_from_head() {
        let mut snake = SnakeAnimation::new().with_path(&GAPPED_PATH);
        let mut stage = FakeStage::default();
        let mut leds = [BLACK; 8];
        snake.start(ms(0));

        assert!(snake.tick(ms(150), &mut leds, &mut stage));
        assert!(snake.tick(ms(300), &mut leds, &mut stage));

        // Head on slot 1, then 0, 6, 5, 4 behind it
        assert_eq!(leds[1], DEFAULT_PALETTE[0]);
        assert_eq!(leds[0], DEFAULT_PALETTE[1]);
        assert_eq!(leds[6], DEFAULT_PALETTE[2]);
        assert_eq!(leds[5], DEFAULT_PALETTE[3]);
        assert_eq!(leds[4], DEFAULT_PALETTE[4]);
        assert_eq!(leds[3], BLACK);
    }

    #[test]
    fn test_head_wins_on_short_path() {
        let mut snake = SnakeAnimation::new().with_path(&SHORT_PATH);
        let mut stage = FakeStage::default();
        let mut leds = [BLACK; 4];
        snake.start(ms(0));

        assert!(snake.tick(ms(150), &mut leds, &mut stage));

        assert_eq!(leds[0], DEFAULT_PALETTE[0]);
        assert_eq!(leds[1], DEFAULT_PALETTE[1]);
        assert_eq!(lit(&leds), 2);
    }

    #[test]
    fn test_path_past_buffer_is_ignored() {
        let mut snake = SnakeAnimation::new();
        let mut stage = FakeStage::default();
        let mut leds = [BLACK; 3];
        snake.start(ms(0));

        assert!(snake.tick(ms(150), &mut leds, &mut stage));
        assert!(leds.iter().all(|led| *led == BLACK));
    }

    #[test]
    fn test_empty_path_draws_nothing() {
        static EMPTY: [PathStep; 0] = [];
        let mut snake = SnakeAnimation::new().with_path(&EMPTY);
        let mut stage = FakeStage::default();
        let mut leds = [WHITE; 4];
        snake.start(ms(0));

        assert!(!snake.tick(ms(1_000), &mut leds, &mut stage));
        assert!(leds.iter().all(|led| *led == WHITE));
    }
}
