use std::time::Duration;

use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::content::{CaseStudy, Project};
use crate::overlay::{outbound_links, OverlayController, OverlayEvent};

/// Matches the `overlay-exit` animation in input.css.
const EXIT_DELAY: Duration = Duration::from_millis(250);

/// Modal case study for the selected project. Every interaction is reported
/// through `on_event`; the owner of the controller decides the transition.
#[component]
pub fn CaseStudyOverlay(
    #[prop(into)] overlay: Signal<OverlayController>,
    projects: &'static [Project],
    #[prop(into)] on_event: Callback<OverlayEvent>,
) -> impl IntoView {
    let is_open = Signal::derive(move || overlay.get().is_open());
    let shown = move || {
        let project = overlay.get().last_shown().and_then(|i| projects.get(i))?;
        project.case_study.as_ref().map(|cs| (project, cs))
    };

    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        if ev.key() == "Escape" && is_open.get_untracked() {
            on_event.run(OverlayEvent::EscapeKey);
        }
    });

    view! {
        <AnimatedShow
            when=is_open
            show_class="overlay-enter"
            hide_class="overlay-exit"
            hide_delay=EXIT_DELAY
        >
            <div
                class="overlay-backdrop fixed inset-0 z-[60] bg-black/80 flex items-center justify-center p-4"
                on:click=move |_| on_event.run(OverlayEvent::Backdrop)
            >
                <div
                    role="dialog"
                    aria-modal="true"
                    class="overlay-panel relative bg-[#1a1a1a] max-w-2xl w-full max-h-[90vh] overflow-y-auto p-8 rounded-lg shadow-2xl shadow-red-500/20"
                    on:click=move |ev| {
                        // links in the panel must not reach the backdrop
                        ev.stop_propagation();
                        on_event.run(OverlayEvent::PanelClick);
                    }
                >
                    <button
                        type="button"
                        aria-label="Close case study"
                        class="absolute top-3 right-4 text-2xl text-gray-400 hover:text-white"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_event.run(OverlayEvent::CloseButton);
                        }
                    >
                        "×"
                    </button>
                    {move || {
                        shown()
                            .map(|(project, case_study)| {
                                view! { <CaseStudyPanel project case_study /> }
                            })
                    }}
                </div>
            </div>
        </AnimatedShow>
    }
}

#[component]
fn CaseStudyPanel(project: &'static Project, case_study: &'static CaseStudy) -> impl IntoView {
    let links = outbound_links(project);

    view! {
        <h3 class="text-2xl font-bold text-red-400 mb-6 pr-8">{project.title.as_str()}</h3>
        <h4 class="text-lg font-semibold text-white mb-2">"The Problem"</h4>
        <p class="text-gray-300 mb-6">{case_study.problem.as_str()}</p>
        <h4 class="text-lg font-semibold text-white mb-2">"The Process"</h4>
        <ol class="case-study-steps list-decimal list-inside space-y-1 text-gray-300 mb-6">
            {case_study
                .process
                .iter()
                .map(|step| view! { <li>{step.as_str()}</li> })
                .collect_view()}
        </ol>
        <h4 class="text-lg font-semibold text-white mb-2">"The Results"</h4>
        <p class="text-gray-300">{case_study.results.as_str()}</p>
        {(!links.is_empty())
            .then(|| {
                view! {
                    <div class="mt-8 flex gap-4 flex-wrap">
                        {links
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="bg-red-600 hover:bg-red-700 text-white px-4 py-2 rounded-full transition"
                                    >
                                        {link.kind.label()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                }
            })}
    }
}
