use dioxus::prelude::*;

/// Delay between the panel starting to collapse and its labels hiding.
pub const LABEL_HIDE_DELAY_MS: u32 = 500;

// ─── State ─────────────────────────────────────────────────────────────

/// Identifies one scheduled label hide. A ticket only applies if no
/// expand/collapse happened after it was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideTicket(u64);

/// Expand/collapse state of the sidebar.
///
/// Expanding shows labels at once. Collapsing keeps them until the hide
/// delay elapses, so the labels can fade while the panel shrinks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub expanded: bool,
    pub labels_visible: bool,
    pending_hide: Option<u64>,
    generation: u64,
}

impl SidebarState {
    pub fn new(expanded: bool) -> Self {
        Self {
            expanded,
            labels_visible: expanded,
            pending_hide: None,
            generation: 0,
        }
    }

    /// Returns a ticket when a label hide has to be scheduled.
    pub fn set_expanded(&mut self, expanded: bool) -> Option<HideTicket> {
        self.generation += 1;
        self.expanded = expanded;

        if expanded {
            self.labels_visible = true;
            self.pending_hide = None;
            None
        } else {
            self.pending_hide = Some(self.generation);
            Some(HideTicket(self.generation))
        }
    }

    pub fn toggle(&mut self) -> Option<HideTicket> {
        self.set_expanded(!self.expanded)
    }

    /// Apply an elapsed hide delay. Stale tickets are ignored; returns
    /// whether the labels were hidden.
    pub fn hide_elapsed(&mut self, ticket: HideTicket) -> bool {
        if self.expanded || self.pending_hide != Some(ticket.0) {
            return false;
        }
        self.labels_visible = false;
        self.pending_hide = None;
        true
    }

    #[cfg(test)]
    fn has_pending_hide(&self) -> bool {
        self.pending_hide.is_some()
    }

    /// Whether item labels should be rendered at full opacity.
    pub fn show_labels(&self) -> bool {
        self.expanded && self.labels_visible
    }
}

/// Sidebar state plus the timer task that will hide the labels.
#[derive(Clone, Copy)]
pub struct SidebarContext {
    pub state: Signal<SidebarState>,
    hide_task: Signal<Option<Task>>,
}

impl SidebarContext {
    pub fn expanded(&self) -> bool {
        self.state.read().expanded
    }

    pub fn toggle(&mut self) {
        let next = !self.state.peek().expanded;
        self.set_expanded(next);
    }

    /// Change the expanded flag, cancelling any pending label hide.
    pub fn set_expanded(&mut self, expanded: bool) {
        if let Some(task) = self.hide_task.write().take() {
            task.cancel();
        }

        let Some(ticket) = self.state.write().set_expanded(expanded) else {
            return;
        };

        let mut state = self.state;
        let task = spawn(async move {
            gloo_timers::future::TimeoutFuture::new(LABEL_HIDE_DELAY_MS).await;
            state.write().hide_elapsed(ticket);
        });
        self.hide_task.set(Some(task));
    }
}

/// Provides sidebar state context to children.
#[component]
pub fn SidebarProvider(#[props(default = false)] default_expanded: bool, children: Element) -> Element {
    let state = use_signal(|| SidebarState::new(default_expanded));
    let hide_task = use_signal(|| None::<Task>);
    let ctx = use_context_provider(|| SidebarContext { state, hide_task });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-sidebar-expanded": if ctx.expanded() { "true" } else { "false" },
            {children}
        }
    }
}

/// Hook to access sidebar state.
pub fn use_sidebar() -> SidebarContext {
    use_context::<SidebarContext>()
}

// ─── Layout components ─────────────────────────────────────────────────

/// The sidebar panel. Width follows the expanded flag.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_sidebar();

    let base = vec![
        Attribute::new("class", "sidebar", None, false),
        Attribute::new(
            "data-state",
            if ctx.expanded() { "expanded" } else { "collapsed" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        aside {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-header", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        nav {
            ..merged,
            {children}
        }
    }
}

// ─── Menu components ───────────────────────────────────────────────────

#[component]
pub fn SidebarMenu(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-menu", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        ul {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarMenuItem(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-menu-item", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        li {
            ..merged,
            {children}
        }
    }
}

/// Interactive row within a SidebarMenuItem. Centers its icon when the
/// sidebar is collapsed.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_sidebar();

    let base = vec![
        Attribute::new("class", "sidebar-menu-button", None, false),
        Attribute::new(
            "data-active",
            if active { "true" } else { "false" },
            None,
            false,
        ),
        Attribute::new(
            "data-collapsed",
            if ctx.expanded() { "false" } else { "true" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        button {
            r#type: "button",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {children}
        }
    }
}

/// Text label of a menu row. Not rendered while collapsed; fades in once
/// labels are visible.
#[component]
pub fn SidebarLabel(children: Element) -> Element {
    let ctx = use_sidebar();
    let state = *ctx.state.read();

    rsx! {
        if state.expanded {
            span {
                class: "sidebar-label",
                "data-visible": if state.show_labels() { "true" } else { "false" },
                {children}
            }
        }
    }
}

// ─── Utility components ────────────────────────────────────────────────

/// Toggle button that expands/collapses the sidebar.
#[component]
pub fn SidebarTrigger(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut ctx = use_sidebar();

    let base = vec![Attribute::new("class", "sidebar-trigger", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        button {
            r#type: "button",
            "aria-label": "Toggle sidebar",
            "aria-expanded": if ctx.expanded() { "true" } else { "false" },
            onclick: move |_| ctx.toggle(),
            ..merged,
            {children}
        }
    }
}

/// The main content area that sits alongside the Sidebar.
#[component]
pub fn SidebarInset(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-inset", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        main {
            ..merged,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed_with_hidden_labels() {
        let state = SidebarState::new(false);
        assert!(!state.expanded);
        assert!(!state.labels_visible);
        assert!(!state.has_pending_hide());
    }

    #[test]
    fn expand_shows_labels_immediately() {
        let mut state = SidebarState::new(false);
        assert_eq!(state.toggle(), None);
        assert!(state.expanded);
        assert!(state.show_labels());
    }

    #[test]
    fn collapse_hides_labels_after_delay() {
        let mut state = SidebarState::new(true);
        let ticket = state.toggle().expect("collapse schedules a hide");

        assert!(!state.expanded);
        assert!(state.labels_visible);
        assert!(state.has_pending_hide());

        assert!(state.hide_elapsed(ticket));
        assert!(!state.labels_visible);
        assert!(!state.has_pending_hide());
    }

    #[test]
    fn re_expanding_cancels_pending_hide() {
        let mut state = SidebarState::new(false);
        state.toggle();
        let stale = state.toggle().expect("collapse schedules a hide");
        state.toggle();

        assert!(!state.has_pending_hide());
        assert!(!state.hide_elapsed(stale));
        assert!(state.expanded);
        assert!(state.labels_visible);
    }

    #[test]
    fn only_latest_collapse_ticket_applies() {
        let mut state = SidebarState::new(true);
        let first = state.toggle().unwrap();
        state.toggle();
        let second = state.toggle().unwrap();

        assert!(!state.hide_elapsed(first));
        assert!(state.labels_visible);
        assert!(state.hide_elapsed(second));
        assert!(!state.labels_visible);
    }

    #[test]
    fn labels_not_shown_while_collapsing() {
        let mut state = SidebarState::new(true);
        state.toggle();
        assert!(state.labels_visible);
        assert!(!state.show_labels());
    }

    #[test]
    fn renders_labels_only_when_expanded() {
        let expanded = dioxus_ssr::render_element(rsx! {
            SidebarProvider { default_expanded: true,
                Sidebar {
                    SidebarLabel { "My Tasks" }
                }
            }
        });
        assert!(expanded.contains(r#"data-state="expanded""#));
        assert!(expanded.contains("My Tasks"));

        let collapsed = dioxus_ssr::render_element(rsx! {
            SidebarProvider {
                Sidebar {
                    SidebarLabel { "My Tasks" }
                }
            }
        });
        assert!(collapsed.contains(r#"data-state="collapsed""#));
        assert!(!collapsed.contains("My Tasks"));
    }
}
