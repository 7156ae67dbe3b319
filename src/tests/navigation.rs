use crate::utils::scroll::{self, destination, SectionId, HEADER_OFFSET};

#[test]
fn test_destination_backs_off_header() {
    // Target at 500 with an 80 unit header lands at 420.
    assert_eq!(destination(500.0, 0.0), 420.0);
}

#[test]
fn test_destination_includes_current_scroll() {
    // Mid-page the bounding rect is viewport-relative; the current offset
    // is added back before the header is subtracted.
    assert_eq!(destination(120.0, 1000.0), 1040.0);
}

#[test]
fn test_destination_above_origin() {
    // A target close to the top may compute negative; the browser clamps.
    assert_eq!(destination(30.0, 0.0), 30.0 - HEADER_OFFSET);
}

#[test]
fn test_anchors_are_unique() {
    let anchors: Vec<_> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
    let mut deduped = anchors.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), anchors.len());
}

#[test]
fn test_all_covers_every_section() {
    assert_eq!(SectionId::ALL.len(), 6);
    assert_eq!(SectionId::ALL[0], SectionId::Home);
    assert_eq!(SectionId::ALL[5], SectionId::Contact);
}

#[test]
fn test_scroll_to_without_dom_is_a_no_op() {
    // Unresolvable targets are silently ignored.
    for section in SectionId::ALL {
        scroll::scroll_to(section);
    }
}
