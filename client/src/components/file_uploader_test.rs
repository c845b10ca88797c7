use super::*;

#[test]
fn accepts_common_image_types_case_insensitively() {
    assert!(is_accepted("image/png"));
    assert!(is_accepted("IMAGE/JPEG"));
    assert!(is_accepted("image/svg+xml"));
}

#[test]
fn rejects_non_images() {
    assert!(!is_accepted("application/pdf"));
    assert!(!is_accepted("image/gif"));
    assert!(!is_accepted(""));
}
