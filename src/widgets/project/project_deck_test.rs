use super::*;
use crate::types::Variants;

#[test]
fn project_key_should_be_its_name() {
    let project = Project {
        name: "terrace".to_string(),
        url: "https://example.com".to_string(),
        repo: "https://example.com/src".to_string(),
        year: 2025,
        img: None,
        video: None,
        video_url: None,
        tags: Vec::new(),
    };

    assert_eq!(project.key(), Key::from("terrace"));
}

#[test]
fn staggered_should_index_custom_and_keep_the_rest() {
    let base = MotionConfig {
        variants: Variants::new().with("rest", "opacity: 0"),
        initial: Some("rest".into()),
        while_in_view: Some("reveal".into()),
        custom: None,
    };

    let staggered = staggered(&base, 3);
    assert_eq!(staggered.custom, Some(3.0));
    assert_eq!(staggered.variants, base.variants);
    assert_eq!(staggered.initial, base.initial);
    assert_eq!(staggered.while_in_view, base.while_in_view);
}
