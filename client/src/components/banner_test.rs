use super::*;

#[test]
fn next_slide_advances_and_wraps() {
    assert_eq!(next_slide(0, SLIDES.len()), 1);
    assert_eq!(next_slide(SLIDES.len() - 1, SLIDES.len()), 0);
}

#[test]
fn next_slide_with_no_slides_stays_at_zero() {
    assert_eq!(next_slide(3, 0), 0);
}

#[test]
fn slide_titles_are_unique() {
    let mut titles: Vec<&str> = SLIDES.iter().map(|s| s.title).collect();
    titles.sort_unstable();
    titles.dedup();
    assert_eq!(titles.len(), SLIDES.len());
}
