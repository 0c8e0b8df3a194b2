use leptos::{html, prelude::*};
use leptos_use::use_intersection_observer;

use crate::section::{RevealLatch, SectionMeta};

/// Whether the enclosing section has been revealed. Provided to the
/// section's children so their entrance can follow the heading.
#[derive(Debug, Clone, Copy)]
pub struct Revealed(pub ReadSignal<bool>);

/// Reads the enclosing section's reveal state. Outside a section content
/// is always shown.
pub fn use_revealed() -> Signal<bool> {
    match use_context::<Revealed>() {
        Some(Revealed(revealed)) => revealed.into(),
        None => Signal::derive(|| true),
    }
}

/// A titled, anchorable block whose heading fades in the first time it
/// scrolls into view.
#[component]
pub fn Section(meta: SectionMeta, children: Children) -> impl IntoView {
    let heading = NodeRef::<html::H2>::new();
    let (revealed, set_revealed) = signal(false);
    provide_context(Revealed(revealed));

    let mut latch = RevealLatch::new();
    use_intersection_observer(heading, move |entries, observer| {
        let visible = entries.iter().any(|e| e.is_intersecting());
        if latch.observe(visible) {
            set_revealed.set(true);
            observer.disconnect();
        }
    });

    view! {
        <section id=meta.anchor() class="py-16 px-6 max-w-6xl mx-auto scroll-mt-16">
            <h2
                node_ref=heading
                class="reveal text-3xl font-bold text-white mb-8"
                class:revealed=move || revealed.get()
            >
                {meta.title}
            </h2>
            {children()}
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn test_section_anchor_and_heading() {
        let owner = Owner::new();
        let html = owner.with(|| {
            view! {
                <Section meta=SectionMeta::new("Skills")>
                    <p>"body"</p>
                </Section>
            }
            .to_html()
        });
        assert!(html.contains(r#"id="skills""#));
        assert!(html.contains("Skills"));
        assert!(html.contains("body"));
        // not revealed until observed on the client
        assert!(!html.contains("revealed"));
    }

    #[test]
    fn test_explicit_id_and_empty_children() {
        let owner = Owner::new();
        let html = owner.with(|| {
            view! { <Section meta=SectionMeta::new("Services").with_id("what-i-do")>{()}</Section> }
                .to_html()
        });
        assert!(html.contains(r#"id="what-i-do""#));
        assert!(html.contains("</section>"));
    }
}
