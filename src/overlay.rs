use crate::content::Project;

/// Which project's case study is open, by position in the projects table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Closed,
    Open(usize),
}

/// User interactions that reach the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    /// "Read case study" on the project card at this index.
    Select(usize),
    CloseButton,
    /// Click on the dimmed area around the panel.
    Backdrop,
    /// Click anywhere inside the panel. Never dismisses.
    PanelClick,
    EscapeKey,
}

impl OverlayEvent {
    pub fn dismisses(&self) -> bool {
        matches!(
            self,
            OverlayEvent::CloseButton | OverlayEvent::Backdrop | OverlayEvent::EscapeKey
        )
    }
}

/// State machine behind the case-study overlay.
///
/// `Closed --select(p)--> Open(p)`, `Open(p) --select(q)--> Open(q)` and
/// `Open(p) --clear()--> Closed`. The last opened project is retained after
/// closing so the panel can animate out with its content still in place.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OverlayController {
    selection: Selection,
    last_shown: Option<usize>,
}

impl OverlayController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn is_open(&self) -> bool {
        matches!(self.selection, Selection::Open(_))
    }

    pub fn open_index(&self) -> Option<usize> {
        match self.selection {
            Selection::Open(i) => Some(i),
            Selection::Closed => None,
        }
    }

    /// The project to draw in the panel: the open one, or the one that was
    /// open last while the exit animation runs.
    pub fn last_shown(&self) -> Option<usize> {
        self.last_shown
    }

    /// Opens the case study of `projects[index]`, replacing any open one.
    ///
    /// Returns whether the state changed. Selecting the already open project
    /// is a no-op, and a project without a case study is refused.
    pub fn select(&mut self, index: usize, projects: &[Project]) -> bool {
        let Some(project) = projects.get(index) else {
            log::warn!("ignoring selection of unknown project #{index}");
            return false;
        };
        if !project.has_case_study() {
            log::warn!("project #{index} has no case study to open");
            return false;
        }
        if self.selection == Selection::Open(index) {
            return false;
        }
        log::debug!("case study overlay: {:?} -> Open({index})", self.selection);
        self.selection = Selection::Open(index);
        self.last_shown = Some(index);
        true
    }

    /// Closes the overlay. Returns whether it was open.
    pub fn clear(&mut self) -> bool {
        if self.selection == Selection::Closed {
            return false;
        }
        log::debug!("case study overlay: {:?} -> Closed", self.selection);
        self.selection = Selection::Closed;
        true
    }

    /// Applies one user interaction in dispatch order.
    pub fn handle(&mut self, event: OverlayEvent, projects: &[Project]) -> bool {
        match event {
            OverlayEvent::Select(index) => self.select(index, projects),
            e if e.dismisses() => self.clear(),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutboundKind {
    LiveDemo,
    Source,
}

impl OutboundKind {
    pub fn label(&self) -> &'static str {
        match self {
            OutboundKind::LiveDemo => "Launch Live Demo",
            OutboundKind::Source => "View Source",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutboundLink<'a> {
    pub kind: OutboundKind,
    pub href: &'a str,
}

/// External links shown in the overlay: live demo first, then source.
/// Absent or blank links produce no entry.
pub fn outbound_links(project: &Project) -> Vec<OutboundLink<'_>> {
    [
        (OutboundKind::LiveDemo, project.live_link.as_deref()),
        (OutboundKind::Source, project.github_link.as_deref()),
    ]
    .into_iter()
    .filter_map(|(kind, href)| {
        href.filter(|h| !h.trim().is_empty())
            .map(|href| OutboundLink { kind, href })
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CaseStudy;

    fn project(n: usize, live: Option<&str>, github: Option<&str>) -> Project {
        Project {
            title: format!("Project {n}"),
            description: format!("Description {n}"),
            tools: "Rust".to_string(),
            github_link: github.map(String::from),
            live_link: live.map(String::from),
            downloads: vec![],
            case_study: Some(CaseStudy {
                problem: format!("Problem {n}"),
                process: (0..=n).map(|s| format!("Step {n}.{s}")).collect(),
                results: format!("Results {n}"),
            }),
        }
    }

    fn projects() -> Vec<Project> {
        (0..3).map(|n| project(n, None, None)).collect()
    }

    #[test]
    fn test_initial_state_is_closed() {
        let overlay = OverlayController::new();
        assert_eq!(overlay.selection(), Selection::Closed);
        assert!(!overlay.is_open());
        assert_eq!(overlay.last_shown(), None);
    }

    #[test]
    fn test_select_then_clear() {
        let projects = projects();
        for i in 0..projects.len() {
            let mut overlay = OverlayController::new();
            assert!(overlay.select(i, &projects));
            assert_eq!(overlay.selection(), Selection::Open(i));
            assert!(overlay.clear());
            assert_eq!(overlay.selection(), Selection::Closed);
            assert!(!overlay.clear());
        }
    }

    #[test]
    fn test_select_replaces_open_project() {
        let projects = projects();
        let mut overlay = OverlayController::new();
        overlay.select(1, &projects);
        assert!(overlay.select(2, &projects));
        assert_eq!(overlay.selection(), Selection::Open(2));
        assert_eq!(overlay.last_shown(), Some(2));

        // same project again is a no-op
        assert!(!overlay.select(2, &projects));
        assert_eq!(overlay.selection(), Selection::Open(2));
    }

    #[test]
    fn test_panel_clicks_never_dismiss() {
        let projects = projects();
        let mut overlay = OverlayController::new();
        overlay.select(0, &projects);
        for _ in 0..3 {
            assert!(!overlay.handle(OverlayEvent::PanelClick, &projects));
            assert_eq!(overlay.selection(), Selection::Open(0));
        }
    }

    #[test]
    fn test_dismissal_paths_close_any_project() {
        let projects = projects();
        for event in [
            OverlayEvent::Backdrop,
            OverlayEvent::CloseButton,
            OverlayEvent::EscapeKey,
        ] {
            for i in 0..projects.len() {
                let mut overlay = OverlayController::new();
                overlay.handle(OverlayEvent::Select(i), &projects);
                assert!(overlay.handle(event, &projects));
                assert_eq!(overlay.selection(), Selection::Closed);
                // content stays available for the exit animation
                assert_eq!(overlay.last_shown(), Some(i));
            }
        }
    }

    #[test]
    fn test_events_apply_in_dispatch_order() {
        let projects = projects();
        let mut overlay = OverlayController::new();
        let events = [
            OverlayEvent::Select(0),
            OverlayEvent::PanelClick,
            OverlayEvent::Select(1),
            OverlayEvent::Backdrop,
            OverlayEvent::Select(2),
        ];
        let states = events
            .iter()
            .map(|e| {
                overlay.handle(*e, &projects);
                overlay.selection()
            })
            .collect::<Vec<_>>();
        assert_eq!(
            states,
            vec![
                Selection::Open(0),
                Selection::Open(0),
                Selection::Open(1),
                Selection::Closed,
                Selection::Open(2),
            ]
        );
    }

    #[test]
    fn test_refuses_missing_case_study_and_unknown_index() {
        let mut projects = projects();
        projects[1].case_study = None;
        let mut overlay = OverlayController::new();
        assert!(!overlay.select(1, &projects));
        assert!(!overlay.select(7, &projects));
        assert_eq!(overlay.selection(), Selection::Closed);

        overlay.select(0, &projects);
        assert!(!overlay.select(1, &projects));
        assert_eq!(overlay.selection(), Selection::Open(0));
    }

    #[test]
    fn test_outbound_links() {
        let source_only = project(0, None, Some("https://example.com/src"));
        let links = outbound_links(&source_only);
        assert_eq!(
            links,
            vec![OutboundLink {
                kind: OutboundKind::Source,
                href: "https://example.com/src"
            }]
        );

        let both = project(0, Some("https://example.com/demo"), Some("https://example.com/src"));
        let kinds = outbound_links(&both)
            .iter()
            .map(|l| l.kind)
            .collect::<Vec<_>>();
        assert_eq!(kinds, vec![OutboundKind::LiveDemo, OutboundKind::Source]);

        assert!(outbound_links(&project(0, None, None)).is_empty());
        assert!(outbound_links(&project(0, Some(" "), None)).is_empty());
    }
}
