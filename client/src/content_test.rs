use super::*;

#[test]
fn skills_are_fixed_in_display_order() {
    let names: Vec<_> = SKILLS.iter().map(|s| s.name).collect();
    assert_eq!(names, ["JavaScript", "CSS", "HTML", "Bootstrap"]);
}

#[test]
fn skill_labels_show_literal_percentages() {
    let labels: Vec<_> = SKILLS.iter().map(|s| s.proficiency.label()).collect();
    assert_eq!(labels, ["90%", "80%", "95%", "75%"]);
}

#[test]
fn proficiency_is_clamped_to_one_hundred() {
    assert_eq!(Proficiency::new(0).percent(), 0);
    assert_eq!(Proficiency::new(100).percent(), 100);
    assert_eq!(Proficiency::new(101).percent(), 100);
    assert_eq!(Proficiency::new(u8::MAX).label(), "100%");
}

#[test]
fn every_skill_is_within_range() {
    assert!(SKILLS.iter().all(|s| s.proficiency.percent() <= 100));
}

#[test]
fn projects_are_fixed_in_display_order() {
    assert_eq!(PROJECTS.len(), 3);
    assert_eq!(PROJECTS[0].title, "Calculatrice en JS");
    assert_eq!(PROJECTS[0].image, "IMAGES/image.png");
    assert_eq!(PROJECTS[1].title, "Gestion des tâches en JS");
    assert_eq!(PROJECTS[1].description, "Une application de gestion de tâches en JavaScript.");
    assert_eq!(PROJECTS[2].title, "Gestion de produits en JS");
    assert_eq!(PROJECTS[2].image, "IMAGES/product-manager.jpg");
}

#[test]
fn nav_links_follow_page_order() {
    let targets: Vec<_> = NAV_LINKS.iter().map(|l| l.target.anchor()).collect();
    assert_eq!(targets, ["accueil", "apropos", "projets", "contact"]);
    assert_eq!(NAV_LINKS[1].label, "À propos");
}

#[test]
fn section_href_is_same_page_fragment() {
    assert_eq!(SectionId::Apropos.href(), "#apropos");
    assert_eq!(SectionId::Contact.href(), "#contact");
}

#[test]
fn default_content_uses_site_constants() {
    let content = PortfolioContent::default();
    assert_eq!(content.copy.full_name(), "Sanae Ahjoub");
    assert_eq!(content.nav.len(), 4);
    assert_eq!(content.skills.len(), 4);
    assert_eq!(content.projects.len(), 3);
    assert_eq!(content.copy.cv_path, "/cv/sanae-cv.pdf");
}
