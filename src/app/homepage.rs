use leptos::{either::Either, prelude::*};

use super::cards::{CertificateCard, CompetencyCard, ProjectCard, SkillTagView};
use super::header::NavBar;
use super::overlay::CaseStudyOverlay;
use super::section::{use_revealed, Section};
use crate::content::{self, ContactLink, ContentTables, Paragraph, Profile};
use crate::overlay::{OverlayController, OverlayEvent};
use crate::section::{ABOUT, CERTIFICATES, CONTACT, PROJECTS, SERVICES, SKILLS};

#[component]
pub fn HomePage() -> impl IntoView {
    match content::tables() {
        Ok(tables) => Either::Left(view! { <Portfolio tables /> }),
        Err(e) => {
            log::error!("couldn't load portfolio content: {e}");
            Either::Right(view! {
                <main class="min-h-screen flex items-center justify-center">
                    <p class="text-red-400">"This portfolio is temporarily unavailable."</p>
                </main>
            })
        }
    }
}

/// The whole page. Sole owner of the overlay state: cards and the overlay
/// only report events, and every transition happens here.
#[component]
pub fn Portfolio(tables: &'static ContentTables) -> impl IntoView {
    let (overlay, set_overlay) = signal(OverlayController::new());
    let on_event = Callback::new(move |ev: OverlayEvent| {
        set_overlay.maybe_update(|o| o.handle(ev, &tables.projects));
    });
    let on_select = Callback::new(move |index: usize| on_event.run(OverlayEvent::Select(index)));
    let profile = &tables.profile;

    view! {
        <NavBar brand=profile.brand.as_str() />
        <main>
            <Hero profile />
            <Section meta=ABOUT>
                <AboutText paragraphs=profile.about.as_slice() />
            </Section>
            <Section meta=SKILLS>
                <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 gap-4">
                    {tables
                        .skills
                        .iter()
                        .enumerate()
                        .map(|(index, skill)| view! { <SkillTagView index skill /> })
                        .collect_view()}
                </div>
            </Section>
            <Section meta=SERVICES>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {tables
                        .competencies
                        .iter()
                        .map(|competency| view! { <CompetencyCard competency /> })
                        .collect_view()}
                </div>
            </Section>
            <Section meta=PROJECTS>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    {tables
                        .projects
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard index project on_select /> })
                        .collect_view()}
                </div>
            </Section>
            <Section meta=CERTIFICATES>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {tables
                        .certificates
                        .iter()
                        .map(|certificate| view! { <CertificateCard certificate /> })
                        .collect_view()}
                </div>
            </Section>
            <Section meta=CONTACT>
                <ContactLinks links=profile.contacts.as_slice() />
            </Section>
        </main>
        <Footer holder=profile.copyright_holder.as_str() />
        <CaseStudyOverlay overlay projects=tables.projects.as_slice() on_event />
    }
}

#[component]
fn Hero(profile: &'static Profile) -> impl IntoView {
    view! {
        <section class="min-h-screen flex flex-col justify-center items-center text-center px-6 pt-24">
            <h1 class="hero-title text-5xl md:text-6xl font-extrabold bg-gradient-to-r from-red-500 via-pink-500 to-purple-500 bg-clip-text text-transparent">
                {profile.headline.as_str()}
            </h1>
            <p class="hero-fade mt-4 text-lg md:text-xl text-gray-300 [animation-delay:500ms]">
                {profile.tagline.as_str()}
            </p>
            <div class="hero-fade mt-6 flex gap-4 [animation-delay:1000ms]">
                <a
                    href=profile.resume.as_str()
                    download=""
                    class="bg-red-600 hover:bg-red-700 text-white px-4 py-2 rounded-full transition shadow-md hover:shadow-red-500/40"
                >
                    "Download Resume"
                </a>
                <a
                    href=PROJECTS.href()
                    class="border border-red-500 text-red-500 px-4 py-2 rounded-full hover:bg-red-900/30 transition"
                >
                    "View Projects"
                </a>
            </div>
        </section>
    }
}

#[component]
fn AboutText(paragraphs: &'static [Paragraph]) -> impl IntoView {
    let revealed = use_revealed();

    view! {
        <div
            class="reveal text-gray-300 leading-relaxed text-lg space-y-6 [transition-delay:200ms]"
            class:revealed=move || revealed.get()
        >
            {paragraphs
                .iter()
                .map(|spans| {
                    view! {
                        <p>
                            {spans
                                .iter()
                                .map(|span| {
                                    if span.highlight {
                                        Either::Left(
                                            view! {
                                                <span class="text-red-400 font-semibold">
                                                    {span.text.as_str()}
                                                </span>
                                            },
                                        )
                                    } else {
                                        Either::Right(span.text.as_str())
                                    }
                                })
                                .collect_view()}
                        </p>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ContactLinks(links: &'static [ContactLink]) -> impl IntoView {
    let revealed = use_revealed();

    view! {
        <div
            class="reveal flex justify-center gap-8 flex-wrap text-red-400 text-base [transition-delay:300ms]"
            class:revealed=move || revealed.get()
        >
            {links
                .iter()
                .map(|link| {
                    if link.new_tab {
                        Either::Left(
                            view! {
                                <a
                                    href=link.href.as_str()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="hover:text-white transition"
                                >
                                    {link.label.as_str()}
                                </a>
                            },
                        )
                    } else {
                        Either::Right(
                            view! {
                                <a href=link.href.as_str() class="hover:text-white transition">
                                    {link.label.as_str()}
                                </a>
                            },
                        )
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Footer(holder: &'static str) -> impl IntoView {
    view! {
        <footer class="text-center text-xs text-gray-600 py-6 border-t border-gray-800">
            "© " {env!("BUILD_YEAR")} " " {holder} ". All rights reserved."
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render_page() -> String {
        let owner = Owner::new();
        let tables = content::tables().expect("embedded content should validate");
        owner.with(|| view! { <Portfolio tables /> }.to_html())
    }

    #[test]
    fn test_initial_page_has_no_overlay() {
        let html = render_page();
        assert!(!html.contains(r#"role="dialog""#));
        assert!(!html.contains("The Process"));
    }

    #[test]
    fn test_every_section_anchor_is_rendered() {
        let html = render_page();
        for anchor in ["about", "skills", "services", "projects", "certificates", "contact"] {
            assert!(html.contains(&format!(r#"id="{anchor}""#)), "missing #{anchor}");
        }
        assert!(html.contains(r##"href="#projects""##));
    }

    #[test]
    fn test_tables_render_in_declaration_order() {
        let tables = content::tables().unwrap();
        let html = render_page();
        let positions = tables
            .certificates
            .iter()
            .map(|c| html.find(c.link.as_str()).expect("certificate link rendered"))
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        let positions = tables
            .competencies
            .iter()
            .map(|c| html.find(c.description.as_str()).expect("competency rendered"))
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
