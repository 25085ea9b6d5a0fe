use super::*;

#[test]
fn load_projects_should_parse_the_embedded_catalog() {
    let projects = load_projects().expect("could not parse catalog");
    assert!(!projects.is_empty());
    for project in projects {
        assert!(!project.name.is_empty());
        assert!(!project.url.is_empty());
        assert!(!project.repo.is_empty());
    }
}

#[test]
fn load_projects_should_map_the_video_url_field() {
    let projects = load_projects().expect("could not parse catalog");
    let embed = projects
        .iter()
        .find(|project| project.video_url.is_some())
        .expect("catalog has no embedded video entry");

    assert!(embed.video.is_none());
    assert!(embed
        .video_url
        .as_ref()
        .unwrap()
        .starts_with("https://www.youtube.com/embed/"));
}

#[test]
fn entrance_motion_should_animate_between_rest_and_reveal() {
    let motion = entrance_motion();
    assert!(motion.variants.get("rest").is_some());
    assert!(motion.variants.get("reveal").is_some());
    assert_eq!(motion.initial, Some("rest".into()));
    assert_eq!(motion.while_in_view, Some("reveal".into()));
    assert_eq!(motion.custom, None);
}
