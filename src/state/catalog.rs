//! Static project catalog shown in the details modal.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::fmt;

/// Catalog key, carried by project buttons as `data-project`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(pub u32);

impl ProjectId {
    /// Parse a `data-project` attribute value.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().parse() {
            Ok(id) => Some(Self(id)),
            Err(_) => None,
        }
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
}

const PROJECTS: &[(ProjectId, Project)] = &[
    (
        ProjectId(1),
        Project {
            title: "Application E-commerce",
            description: "Développement d'une plateforme e-commerce complète avec React en frontend et Node.js en \
                          backend. Fonctionnalités incluant le panier, paiement sécurisé, et gestion des commandes.",
        },
    ),
    (
        ProjectId(2),
        Project {
            title: "Dashboard Analytics",
            description: "Création d'un tableau de bord interactif pour la visualisation de données avec Chart.js. \
                          Intégration d'APIs REST et mise en place de filtres avancés.",
        },
    ),
];

/// Look up a project by id.
#[must_use]
pub fn lookup(id: ProjectId) -> Option<&'static Project> {
    PROJECTS.iter().find(|(key, _)| *key == id).map(|(_, project)| project)
}
