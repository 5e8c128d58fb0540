//! Single-page résumé layout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the header (portrait, identity, theme switch, tabs) and one
//! section per content block. Exactly one section is visible at a time; a
//! URL fragment naming a section selects it on load.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::nav_bar::{NavBar, reveal_fragment};
use crate::components::page_effects::PageEffects;
use crate::components::page_section::PageSection;
use crate::components::profile_photo::ProfilePhoto;
use crate::components::project_modal::ProjectModal;
use crate::components::projects_section::ProjectsSection;
use crate::components::skills_section::SkillsSection;
use crate::components::theme_toggle::ThemeToggle;
use crate::content::{CONTACT_SECTION_ID, Resume, SKILLS_SECTION_ID};
use crate::state::PageContext;

#[component]
pub fn ResumePage(resume: Resume) -> impl IntoView {
    let ctx = expect_context::<PageContext>();

    if let Some(fragment) = crate::util::location::initial_fragment() {
        reveal_fragment(ctx, &fragment);
    }

    let profile = resume.profile;

    view! {
        <header class="header">
            <div class="header-content">
                <ProfilePhoto name=profile.name upload=resume.photo_upload/>
                <div class="header-text">
                    <h1>{profile.name}</h1>
                    <p class="headline">{profile.headline}</p>
                    <p class="location">{profile.location}</p>
                    <a class="email" href=format!("mailto:{}", profile.email)>{profile.email}</a>
                </div>
                <ThemeToggle/>
            </div>
            <NavBar/>
        </header>

        <main class="container">
            <PageSection id="accueil" title=resume.section_label("accueil")>
                <p class="summary">{profile.summary}</p>
            </PageSection>

            <PageSection id="experience" title=resume.section_label("experience")>
                <div class="timeline">
                    {resume
                        .experience
                        .iter()
                        .map(|item| {
                            view! {
                                <div class="timeline-item">
                                    <h3>{item.role}</h3>
                                    <p class="company">{item.company}" · "{item.period}</p>
                                    <p>{item.summary}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </PageSection>

            <SkillsSection id=SKILLS_SECTION_ID title=resume.section_label(SKILLS_SECTION_ID)/>

            <ProjectsSection id="projets" title=resume.section_label("projets") cards=resume.projects/>

            <PageSection id="formation" title=resume.section_label("formation")>
                <div class="education-list">
                    {resume
                        .education
                        .iter()
                        .map(|item| {
                            view! {
                                <div class="education-item">
                                    <h3>{item.degree}</h3>
                                    <p>{item.school}" · "{item.period}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </PageSection>

            {resume
                .contact
                .map(|block| {
                    view! {
                        <PageSection id=CONTACT_SECTION_ID title=resume.section_label(CONTACT_SECTION_ID)>
                            <ContactForm block=block/>
                        </PageSection>
                    }
                })}
        </main>

        <ProjectModal/>
        <PageEffects/>
    }
}
