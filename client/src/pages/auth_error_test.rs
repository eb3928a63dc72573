use super::*;

#[test]
fn countdown_label_pluralizes() {
    assert_eq!(countdown_label(5), "Redirecting to the home page in 5 seconds...");
    assert_eq!(countdown_label(1), "Redirecting to the home page in 1 second...");
    assert_eq!(countdown_label(0), "Redirecting...");
}
