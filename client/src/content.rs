//! Static display data for the portfolio page.
//!
//! DESIGN
//! ======
//! Everything the page shows lives here as `'static` values so components
//! stay pure renderers over injected data. Order within each list is the
//! display order.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// In-page landmarks reachable from the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionId {
    Accueil,
    Apropos,
    Projets,
    Contact,
}

impl SectionId {
    /// Element id of the section.
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Accueil => "accueil",
            Self::Apropos => "apropos",
            Self::Projets => "projets",
            Self::Contact => "contact",
        }
    }

    /// Same-page fragment link to the section.
    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

/// Skill level in percent, always within `0..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Proficiency(u8);

impl Proficiency {
    /// Values above 100 are clamped.
    pub const fn new(percent: u8) -> Self {
        Self(if percent > 100 { 100 } else { percent })
    }

    pub const fn percent(self) -> u8 {
        self.0
    }

    /// Badge text, e.g. `90%`.
    pub fn label(self) -> String {
        format!("{}%", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: &'static str,
    /// CSS color applied to the badge.
    pub color: &'static str,
    pub proficiency: Proficiency,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    /// Path relative to the page, served from the static assets directory.
    pub image: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: SectionId,
}

/// Fixed copy: names, headings, button labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteCopy {
    /// Highlighted part of the brand in the nav bar.
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub tagline: &'static str,
    pub learn_more_label: &'static str,
    pub cv_label: &'static str,
    pub cv_path: &'static str,
    pub about_title: &'static str,
    pub projects_title: &'static str,
    pub contact_title: &'static str,
    pub copyright: &'static str,
}

impl SiteCopy {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Everything `PortfolioPage` renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortfolioContent {
    pub copy: SiteCopy,
    pub nav: &'static [NavLink],
    pub skills: &'static [SkillEntry],
    pub projects: &'static [ProjectEntry],
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self { copy: SITE_COPY, nav: NAV_LINKS, skills: SKILLS, projects: PROJECTS }
    }
}

pub const SITE_COPY: SiteCopy = SiteCopy {
    first_name: "Sanae",
    last_name: "Ahjoub",
    tagline: "Développeuse passionnée par le design 3D et l'innovation.",
    learn_more_label: "En savoir plus",
    cv_label: "Télécharger mon CV",
    cv_path: "/cv/sanae-cv.pdf",
    about_title: "À Propos de Moi",
    projects_title: "Mes Projets",
    contact_title: "Contact",
    copyright: "© 2025 Sanae Ahjoub. Tous droits réservés.",
};

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Accueil", target: SectionId::Accueil },
    NavLink { label: "À propos", target: SectionId::Apropos },
    NavLink { label: "Projets", target: SectionId::Projets },
    NavLink { label: "Contact", target: SectionId::Contact },
];

pub const SKILLS: &[SkillEntry] = &[
    SkillEntry { name: "JavaScript", color: "#eab308", proficiency: Proficiency::new(90) },
    SkillEntry { name: "CSS", color: "#3b82f6", proficiency: Proficiency::new(80) },
    SkillEntry { name: "HTML", color: "#f97316", proficiency: Proficiency::new(95) },
    SkillEntry { name: "Bootstrap", color: "#a855f7", proficiency: Proficiency::new(75) },
];

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Calculatrice en JS",
        description: "Une calculatrice interactive développée en JavaScript.",
        image: "IMAGES/image.png",
    },
    ProjectEntry {
        title: "Gestion des tâches en JS",
        description: "Une application de gestion de tâches en JavaScript.",
        image: "IMAGES/task-manager.jpg",
    },
    ProjectEntry {
        title: "Gestion de produits en JS",
        description: "Une application de gestion de produits en JavaScript.",
        image: "IMAGES/product-manager.jpg",
    },
];
