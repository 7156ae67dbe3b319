use crate::views::{next_index, prev_index, Testimonial};

#[test]
fn test_next_wraps_from_last_to_first() {
    let len = Testimonial::sample_data().len();
    assert_eq!(next_index(len - 1, len), 0);
}

#[test]
fn test_prev_wraps_from_first_to_last() {
    let len = Testimonial::sample_data().len();
    assert_eq!(prev_index(0, len), len - 1);
}

#[test]
fn test_next_advances_mid_range() {
    assert_eq!(next_index(1, 4), 2);
}

#[test]
fn test_prev_retreats_mid_range() {
    assert_eq!(prev_index(2, 4), 1);
}

#[test]
fn test_empty_carousel_stays_at_origin() {
    assert_eq!(next_index(0, 0), 0);
    assert_eq!(prev_index(0, 0), 0);
}

#[test]
fn test_full_cycle_returns_to_start() {
    let len = Testimonial::sample_data().len();
    let mut index = 0;
    for _ in 0..len {
        index = next_index(index, len);
    }
    assert_eq!(index, 0);
}
