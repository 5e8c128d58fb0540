//! Static résumé content rendered by the page.
//!
//! Optional blocks (`contact`, `photo_upload`) switch their feature off
//! entirely when absent.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::state::catalog::ProjectId;
use crate::state::navigation::NavLink;
use crate::state::skills::SkillMeter;

#[derive(Clone, Copy, Debug)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub photo_src: &'static str,
    pub summary: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct SectionDef {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct ExperienceItem {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct SkillDef {
    pub name: &'static str,
    /// Target percentage as rendered in `data-level`.
    pub level: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct ProjectCard {
    pub id: ProjectId,
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct EducationItem {
    pub degree: &'static str,
    pub school: &'static str,
    pub period: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct ContactBlock {
    pub intro: &'static str,
    pub submit_label: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Resume {
    pub profile: Profile,
    pub sections: &'static [SectionDef],
    pub experience: &'static [ExperienceItem],
    pub skills: &'static [SkillDef],
    pub projects: &'static [ProjectCard],
    pub education: &'static [EducationItem],
    pub contact: Option<ContactBlock>,
    /// Whether the photo overlay (upload trigger) is rendered.
    pub photo_upload: bool,
}

/// Section holding the contact form; dropped when `contact` is absent.
pub const CONTACT_SECTION_ID: &str = "contact";
/// Section whose visibility (or selection) fills the skill bars.
pub const SKILLS_SECTION_ID: &str = "competences";

impl Resume {
    /// Sections actually rendered, in page order.
    pub fn rendered_sections(&self) -> impl Iterator<Item = &'static SectionDef> + '_ {
        self.sections
            .iter()
            .filter(|section| section.id != CONTACT_SECTION_ID || self.contact.is_some())
    }

    /// One nav link per rendered section, in page order.
    pub fn nav_links(&self) -> Vec<NavLink> {
        self.rendered_sections()
            .map(|section| NavLink::new(section.label, format!("#{}", section.id)))
            .collect()
    }

    pub fn section_ids(&self) -> Vec<String> {
        self.rendered_sections().map(|section| section.id.to_owned()).collect()
    }

    /// Heading of section `id`, falling back to the id itself.
    #[must_use]
    pub fn section_label(&self, id: &'static str) -> &'static str {
        self.sections
            .iter()
            .find(|section| section.id == id)
            .map_or(id, |section| section.label)
    }

    pub fn skill_meters(&self) -> Vec<SkillMeter> {
        self.skills.iter().map(|skill| SkillMeter::from_metadata(skill.name, skill.level)).collect()
    }
}

pub const RESUME: Resume = Resume {
    profile: Profile {
        name: "Camille Laurent",
        headline: "Développeuse Full-Stack",
        location: "Lyon, France",
        email: "camille.laurent@example.com",
        photo_src: "/assets/profile.svg",
        summary: "Six ans à concevoir des applications web robustes, du schéma de base de données jusqu'à \
                  l'interface. J'aime les systèmes simples, bien testés et agréables à maintenir.",
    },
    sections: &[
        SectionDef { id: "accueil", label: "Accueil" },
        SectionDef { id: "experience", label: "Expérience" },
        SectionDef { id: "competences", label: "Compétences" },
        SectionDef { id: "projets", label: "Projets" },
        SectionDef { id: "formation", label: "Formation" },
        SectionDef { id: "contact", label: "Contact" },
    ],
    experience: &[
        ExperienceItem {
            role: "Développeuse Full-Stack",
            company: "Atelier Numérique",
            period: "2021 – aujourd'hui",
            summary: "Refonte d'une plateforme de réservation, migration vers une API typée et mise en place de \
                      l'intégration continue.",
        },
        ExperienceItem {
            role: "Développeuse Front-End",
            company: "Studio Lumen",
            period: "2018 – 2021",
            summary: "Interfaces React pour des clients du secteur culturel, bibliothèque de composants partagée.",
        },
    ],
    skills: &[
        SkillDef { name: "JavaScript / TypeScript", level: "90" },
        SkillDef { name: "React", level: "85" },
        SkillDef { name: "Node.js", level: "80" },
        SkillDef { name: "Rust", level: "75" },
        SkillDef { name: "SQL", level: "70" },
        SkillDef { name: "Docker", level: "65" },
    ],
    projects: &[
        ProjectCard {
            id: ProjectId(1),
            title: "Application E-commerce",
            summary: "Boutique en ligne complète : panier, paiement et suivi des commandes.",
            tags: &["React", "Node.js", "Stripe"],
        },
        ProjectCard {
            id: ProjectId(2),
            title: "Dashboard Analytics",
            summary: "Tableau de bord interactif branché sur plusieurs APIs REST.",
            tags: &["Chart.js", "REST", "TypeScript"],
        },
    ],
    education: &[
        EducationItem { degree: "Master Informatique", school: "Université Lyon 1", period: "2016 – 2018" },
        EducationItem { degree: "Licence Informatique", school: "Université Lyon 1", period: "2013 – 2016" },
    ],
    contact: Some(ContactBlock {
        intro: "Un projet, une question ? Écrivez-moi, je réponds sous 48 heures.",
        submit_label: "Envoyer",
    }),
    photo_upload: true,
};
