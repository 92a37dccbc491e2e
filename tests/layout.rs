use billstack::models::MAX_CANVAS_PIXELS;
use billstack::{ChartConfig, Layout, Profile};

fn expected(numbers: &[u32], cfg: &ChartConfig) -> (u32, u32) {
    let max = numbers.iter().copied().max().unwrap_or(0);
    (
        numbers.len() as u32 * (cfg.sprite_width + cfg.gap) + cfg.gap,
        max * cfg.vertical_step + cfg.sprite_height + cfg.margin,
    )
}

#[test]
fn canvas_size_follows_input_for_every_profile() {
    let inputs: [&[u32]; 5] = [&[1], &[10, 50, 20], &[0, 0, 0], &[7, 7], &[3, 0, 12, 1]];
    for profile in [Profile::Classic, Profile::Flat, Profile::Bold] {
        let cfg = profile.config();
        for numbers in inputs {
            let layout = Layout::compute(numbers, &cfg).unwrap();
            assert_eq!((layout.width, layout.height), expected(numbers, &cfg));
            assert_eq!(layout.bars_count as usize, numbers.len());
        }
    }
}

#[test]
fn empty_input_is_degenerate() {
    let cfg = ChartConfig::default();
    let layout = Layout::compute(&[], &cfg).unwrap();
    assert_eq!(layout.width, cfg.gap);
    assert_eq!(layout.height, cfg.sprite_height + cfg.margin);
    assert_eq!(layout.max_count, 0);
}

#[test]
fn baseline_is_shared_and_anchored() {
    let cfg = ChartConfig::default();
    let layout = Layout::compute(&[5, 1, 9], &cfg).unwrap();
    assert_eq!(layout.base_y, i64::from(layout.height) - i64::from(cfg.bottom_margin));
    assert_eq!(layout.sprite_y(0), layout.base_y);
    assert_eq!(layout.sprite_y(4), layout.base_y - 4 * i64::from(cfg.vertical_step));
}

#[test]
fn tallest_stack_and_labels_fit() {
    for profile in [Profile::Classic, Profile::Flat, Profile::Bold] {
        let cfg = profile.config();
        let numbers = [1, 40, 7];
        let layout = Layout::compute(&numbers, &cfg).unwrap();
        let top = layout.sprite_y(layout.max_count - 1);
        assert!(top >= 0, "{profile:?}: top sprite clipped at y={top}");
        let label_bottom = billstack::render::label_y(&layout, &cfg) + cfg.label_px.ceil() as i64;
        assert!(label_bottom <= i64::from(layout.height));
    }
}

#[test]
fn oversized_canvas_is_an_error() {
    let cfg = ChartConfig::default();
    let numbers = vec![1_000; 100_000];
    let (w, h) = expected(&numbers, &cfg);
    assert!(u64::from(w) * u64::from(h) > MAX_CANVAS_PIXELS);
    assert!(Layout::compute(&numbers, &cfg).is_err());
}
