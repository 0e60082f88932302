use serde::Serialize;

use crate::UserRole;

/// Symbolic icon for a navigation entry. The UI layer maps these to glyphs.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum NavIcon {
    Dashboard,
    Tasks,
    Users,
    Orders,
}

/// A single navigation entry.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: NavIcon,
}

pub const DASHBOARD_LINK: NavLink = NavLink {
    path: "/admin/dashboard",
    label: "Dashboard",
    icon: NavIcon::Dashboard,
};

pub const ORDERS_LINK: NavLink = NavLink {
    path: "/account/orders",
    label: "Orders",
    icon: NavIcon::Orders,
};

const ADMIN_LINKS: &[NavLink] = &[
    DASHBOARD_LINK,
    NavLink {
        path: "/admin/tasks",
        label: "Tasks",
        icon: NavIcon::Tasks,
    },
    NavLink {
        path: "/admin/users",
        label: "Users",
        icon: NavIcon::Users,
    },
];

const WORKER_LINKS: &[NavLink] = &[NavLink {
    path: "/worker/my-tasks",
    label: "My Tasks",
    icon: NavIcon::Tasks,
}];

/// Sidebar entries for a role, in display order.
///
/// `UserRole::None` gets nothing, so no navigation is shown until the
/// role is known.
pub fn links_for_role(role: UserRole) -> &'static [NavLink] {
    match role {
        UserRole::Admin => ADMIN_LINKS,
        UserRole::Worker => WORKER_LINKS,
        UserRole::None => &[],
    }
}

/// The single navigation action offered by the account menu.
pub fn account_destination(role: UserRole) -> NavLink {
    match role {
        UserRole::Admin => DASHBOARD_LINK,
        UserRole::Worker | UserRole::None => ORDERS_LINK,
    }
}

/// Strip query string, fragment and trailing slashes from a location.
fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Whether `link_path` is a segment-wise prefix of `current_path`.
///
/// `/admin/tasks/7` matches `/admin/tasks`; `/admin/tasks-archive` does not.
pub fn is_active(current_path: &str, link_path: &str) -> bool {
    let current = normalize_path(current_path);
    let link = normalize_path(link_path);

    if link == "/" {
        return current == "/";
    }
    match current.strip_prefix(link) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// The entry to highlight for the current location: the longest matching
/// prefix, so nested paths never light up two entries.
pub fn active_link<'a>(links: &'a [NavLink], current_path: &str) -> Option<&'a NavLink> {
    links
        .iter()
        .filter(|link| is_active(current_path, link.path))
        .max_by_key(|link| normalize_path(link.path).len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn paths(links: &[NavLink]) -> Vec<&'static str> {
        links.iter().map(|l| l.path).collect()
    }

    #[test]
    fn admin_links_in_order() {
        let links = links_for_role(UserRole::Admin);
        assert_eq!(
            paths(links),
            vec!["/admin/dashboard", "/admin/tasks", "/admin/users"]
        );
        assert_eq!(
            links.iter().map(|l| l.label).collect::<Vec<_>>(),
            vec!["Dashboard", "Tasks", "Users"]
        );
        assert_eq!(
            links.iter().map(|l| l.icon).collect::<Vec<_>>(),
            vec![NavIcon::Dashboard, NavIcon::Tasks, NavIcon::Users]
        );
    }

    #[test]
    fn worker_links() {
        let links = links_for_role(UserRole::Worker);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].path, "/worker/my-tasks");
        assert_eq!(links[0].label, "My Tasks");
        assert_eq!(links[0].icon, NavIcon::Tasks);
    }

    #[test]
    fn unknown_role_gets_no_links() {
        assert!(links_for_role(UserRole::None).is_empty());
        assert!(links_for_role(UserRole::from_str_or_default("intern")).is_empty());
    }

    #[test]
    fn account_destination_by_role() {
        assert_eq!(account_destination(UserRole::Admin).label, "Dashboard");
        assert_eq!(account_destination(UserRole::Admin).path, "/admin/dashboard");
        assert_eq!(account_destination(UserRole::Worker).path, "/account/orders");
        assert_eq!(account_destination(UserRole::None).label, "Orders");
    }

    #[test]
    fn nested_task_path_highlights_only_tasks() {
        let links = links_for_role(UserRole::Admin);
        let matching: Vec<_> = links
            .iter()
            .filter(|l| is_active("/admin/tasks/7", l.path))
            .map(|l| l.path)
            .collect();
        assert_eq!(matching, vec!["/admin/tasks"]);
        assert_eq!(
            active_link(links, "/admin/tasks/7").map(|l| l.path),
            Some("/admin/tasks")
        );
    }

    #[test]
    fn prefix_match_respects_segment_boundaries() {
        assert!(is_active("/admin/tasks", "/admin/tasks"));
        assert!(is_active("/admin/tasks/", "/admin/tasks"));
        assert!(is_active("/admin/tasks?page=2", "/admin/tasks"));
        assert!(!is_active("/admin/tasks-archive", "/admin/tasks"));
        assert!(!is_active("/admin", "/admin/tasks"));
        assert!(!is_active("/worker/my-tasks", "/admin/tasks"));
    }

    #[test]
    fn root_link_only_matches_root() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/admin/tasks", "/"));
    }

    #[test]
    fn no_highlight_outside_dashboard() {
        assert!(active_link(links_for_role(UserRole::Admin), "/account/orders").is_none());
        assert!(active_link(links_for_role(UserRole::None), "/admin/tasks").is_none());
    }
}
