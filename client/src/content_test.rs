use super::*;

#[test]
fn cv_urls_reference_the_same_file() {
    let download_id = CV_DOWNLOAD_URL.rsplit("id=").next();
    let view_id = CV_VIEW_URL
        .strip_prefix("https://drive.google.com/file/d/")
        .and_then(|rest| rest.strip_suffix("/view"));
    assert!(download_id.is_some_and(|id| !id.is_empty()));
    assert_eq!(download_id, view_id);
    assert!(CV_DOWNLOAD_URL.contains("export=download"));
}

#[test]
fn social_links_open_externally_except_mail() {
    for link in SOCIAL_LINKS {
        assert_eq!(link.is_external(), !link.href.starts_with("mailto:"), "{}", link.label);
    }
}

#[test]
fn every_project_links_to_code() {
    for project in PROJECTS {
        assert!(project.code_url.starts_with("https://github.com/"), "{}", project.title);
        assert!(!project.tech.is_empty(), "{}", project.title);
    }
}

#[test]
fn live_links_are_https() {
    let live: Vec<&str> = PROJECTS.iter().filter_map(|p| p.live_url).collect();
    assert_eq!(live.len(), 2);
    assert!(live.iter().all(|url| url.starts_with("https://")));
}

#[test]
fn skill_categories_are_non_empty() {
    for category in SKILL_CATEGORIES {
        assert!(!category.skills.is_empty(), "{}", category.title);
    }
}

#[test]
fn contact_mailto_uses_contact_email() {
    assert_eq!(contact_mailto(), "mailto:ashishrathod53839@gmail.com");
    assert!(CONTACTS.iter().any(|c| c.value == CONTACT_EMAIL));
}
