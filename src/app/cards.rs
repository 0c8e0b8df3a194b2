use leptos::prelude::*;

use super::section::use_revealed;
use crate::content::{Certificate, Competency, Project, SkillTag};
use crate::section::stagger_delay;

/// A skill label that scales in after its predecessors.
#[component]
pub fn SkillTagView(index: usize, skill: &'static SkillTag) -> impl IntoView {
    let revealed = use_revealed();
    // only the entrance transform waits; hover shadows respond at once
    let stagger = format!("--stagger: {}ms", stagger_delay(index).as_millis());

    view! {
        <div
            class="skill-tag bg-[#1f1f1f] text-center py-3 rounded-lg text-red-400 shadow hover:shadow-red-600/50"
            class:revealed=move || revealed.get()
            style=stagger
        >
            {skill.label()}
        </div>
    }
}

#[component]
pub fn CompetencyCard(competency: &'static Competency) -> impl IntoView {
    view! {
        <div class="bg-[#1a1a1a] p-6 rounded-lg shadow-lg hover:shadow-red-500/40 hover:-translate-y-1 transition">
            <h4 class="text-red-400 font-semibold mb-2">{competency.title.as_str()}</h4>
            <p class="text-gray-300 text-sm">{competency.description.as_str()}</p>
        </div>
    }
}

/// A project summary. "Read Case Study" hands this card's index to
/// `on_select`; projects without a case study get no such button.
#[component]
pub fn ProjectCard(
    index: usize,
    project: &'static Project,
    #[prop(into)] on_select: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="project-card bg-[#1a1a1a] p-6 rounded-lg shadow-lg hover:shadow-red-500/40 hover:scale-[1.02] transition">
            <h3 class="text-xl font-semibold text-red-400">{project.title.as_str()}</h3>
            <p class="mt-2 text-gray-300">{project.description.as_str()}</p>
            <p class="mt-2 text-sm text-gray-500">"Tools: " {project.tools.as_str()}</p>
            {(!project.downloads.is_empty())
                .then(|| {
                    view! {
                        <div class="mt-4 flex gap-6 flex-wrap text-sm">
                            {project
                                .downloads
                                .iter()
                                .map(|d| {
                                    view! {
                                        <a
                                            href=d.href.as_str()
                                            download=""
                                            class="text-blue-400 hover:underline"
                                        >
                                            {d.label.as_str()}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })}
            {project
                .has_case_study()
                .then(|| {
                    view! {
                        <button
                            type="button"
                            class="mt-4 border border-red-500 text-red-500 px-4 py-2 rounded-full hover:bg-red-900/30 transition"
                            on:click=move |_| on_select.run(index)
                        >
                            "Read Case Study"
                        </button>
                    }
                })}
        </div>
    }
}

/// A certificate, opened in a new browsing context.
#[component]
pub fn CertificateCard(certificate: &'static Certificate) -> impl IntoView {
    view! {
        <a
            href=certificate.link.as_str()
            target="_blank"
            rel="noopener noreferrer"
            class="block bg-[#1a1a1a] p-5 rounded-lg shadow hover:shadow-red-500/40 hover:-translate-y-1 transition"
        >
            <h4 class="text-red-400 font-semibold text-lg">{certificate.title.as_str()}</h4>
            <p class="text-gray-400 text-sm mt-1">"Platform: " {certificate.platform.as_str()}</p>
            <p class="text-blue-400 text-sm mt-2 hover:underline">"View Certificate"</p>
        </a>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::CaseStudy;
    use leptos::tachys::view::RenderHtml;

    fn leak<T>(value: T) -> &'static T {
        Box::leak(Box::new(value))
    }

    fn project(case_study: Option<CaseStudy>) -> &'static Project {
        leak(Project {
            title: "Churn".to_string(),
            description: "Predict churn".to_string(),
            tools: "Python".to_string(),
            github_link: None,
            live_link: None,
            downloads: vec![],
            case_study,
        })
    }

    #[test]
    fn test_project_card_affordance_requires_case_study() {
        let owner = Owner::new();
        let with = project(Some(CaseStudy {
            problem: "p".to_string(),
            process: vec!["a".to_string()],
            results: "r".to_string(),
        }));
        let without = project(None);
        let (with_html, without_html) = owner.with(|| {
            (
                view! { <ProjectCard index=0 project=with on_select=|_: usize| {} /> }.to_html(),
                view! { <ProjectCard index=1 project=without on_select=|_: usize| {} /> }.to_html(),
            )
        });
        assert!(with_html.contains("Read Case Study"));
        assert!(!without_html.contains("Read Case Study"));
        assert!(without_html.contains("Churn"));
    }

    #[test]
    fn test_skill_tags_render_in_order_with_stagger() {
        let owner = Owner::new();
        let skills = leak(vec![
            SkillTag("SQL".to_string()),
            SkillTag("Python".to_string()),
            SkillTag("Excel".to_string()),
        ]);
        let html = owner.with(|| {
            skills
                .iter()
                .enumerate()
                .map(|(index, skill)| view! { <SkillTagView index skill /> }.to_html())
                .collect::<String>()
        });
        let sql = html.find("SQL").unwrap();
        let python = html.find("Python").unwrap();
        let excel = html.find("Excel").unwrap();
        assert!(sql < python && python < excel);
        assert!(html.contains("--stagger: 200ms"));
        assert!(!html.contains("transition-delay"));
    }

    #[test]
    fn test_certificate_opens_new_context() {
        let owner = Owner::new();
        let cert = leak(Certificate {
            title: "Power BI".to_string(),
            platform: "DataCamp".to_string(),
            link: "https://example.com/cert".to_string(),
        });
        let html = owner.with(|| view! { <CertificateCard certificate=cert /> }.to_html());
        assert!(html.contains(r#"href="https://example.com/cert""#));
        assert!(html.contains(r#"target="_blank""#));
    }
}
