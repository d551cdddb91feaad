//! Ordered route table and first-match path resolution.
//!
//! DESIGN
//! ======
//! Entries are scanned in declaration order and the first match wins. The
//! table ends with exactly one catch-all that yields the not-found page.
//! Access control is not decided here: admin pages check the admin session
//! themselves and redirect to `/admin/login`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use thiserror::Error;

pub const ADMIN_ROOT_PATH: &str = "/admin";
pub const ADMIN_LOGIN_PATH: &str = "/admin/login";
pub const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";

/// Route-level screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Services,
    Portfolio,
    Contact,
    Login,
    AdminLogin,
    AdminDashboard,
    AdminProjects,
    AdminModules,
    AdminSettings,
    NotFound,
}

impl Page {
    /// Document title shown while the page is active.
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Folio",
            Self::About => "About · Folio",
            Self::Services => "Services · Folio",
            Self::Portfolio => "Portfolio · Folio",
            Self::Contact => "Contact · Folio",
            Self::Login => "Sign in · Folio",
            Self::AdminLogin => "Admin sign in · Folio",
            Self::AdminDashboard => "Dashboard · Folio Admin",
            Self::AdminProjects => "Projects · Folio Admin",
            Self::AdminModules => "Modules · Folio Admin",
            Self::AdminSettings => "Settings · Folio Admin",
            Self::NotFound => "Not found · Folio",
        }
    }

    pub fn is_admin(self) -> bool {
        matches!(
            self,
            Self::AdminLogin | Self::AdminDashboard | Self::AdminProjects | Self::AdminModules | Self::AdminSettings
        )
    }
}

/// What a matched entry does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Page(Page),
    /// Navigate elsewhere instead of rendering.
    Redirect(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    Exact(&'static str),
    CatchAll,
}

impl Pattern {
    /// Match an already normalized path.
    pub fn matches(self, path: &str) -> bool {
        match self {
            Self::Exact(literal) => literal == path,
            Self::CatchAll => true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: Pattern,
    pub target: Target,
}

const fn page(path: &'static str, page: Page) -> RouteEntry {
    RouteEntry {
        pattern: Pattern::Exact(path),
        target: Target::Page(page),
    }
}

/// The application's navigable surface, in match order.
pub static ROUTES: &[RouteEntry] = &[
    page("/", Page::Home),
    page("/about", Page::About),
    page("/services", Page::Services),
    page("/portfolio", Page::Portfolio),
    page("/contact", Page::Contact),
    page("/login", Page::Login),
    page(ADMIN_LOGIN_PATH, Page::AdminLogin),
    page(ADMIN_DASHBOARD_PATH, Page::AdminDashboard),
    page("/admin/projects", Page::AdminProjects),
    page("/admin/modules", Page::AdminModules),
    page("/admin/settings", Page::AdminSettings),
    RouteEntry {
        pattern: Pattern::Exact(ADMIN_ROOT_PATH),
        target: Target::Redirect(ADMIN_DASHBOARD_PATH),
    },
    RouteEntry {
        pattern: Pattern::CatchAll,
        target: Target::Page(Page::NotFound),
    },
];

/// Strip query string, fragment, and trailing slashes. Empty becomes `/`.
pub fn normalize_path(raw: &str) -> &str {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let trimmed = raw[..end].trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Resolve a browser path against [`ROUTES`].
pub fn resolve(path: &str) -> Target {
    resolve_in(ROUTES, path)
}

/// First-match resolution over an arbitrary table.
///
/// Falls back to the not-found page when nothing matches, so a table
/// without a catch-all still resolves deterministically.
pub fn resolve_in(table: &[RouteEntry], path: &str) -> Target {
    let path = normalize_path(path);
    table
        .iter()
        .find(|entry| entry.pattern.matches(path))
        .map_or(Target::Page(Page::NotFound), |entry| entry.target)
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("route table has no catch-all entry")]
    MissingCatchAll,
    #[error("route table has more than one catch-all entry")]
    MultipleCatchAll,
    #[error("catch-all entry at index {0} is not last")]
    CatchAllNotLast(usize),
    #[error("duplicate route pattern {0:?}")]
    DuplicatePattern(&'static str),
    #[error("route pattern {0:?} must start with '/'")]
    RelativePattern(&'static str),
    #[error("redirect from {0:?} points at an unregistered path")]
    DanglingRedirect(&'static str),
}

/// Check the structural invariants of a route table.
///
/// # Errors
///
/// Returns the first violated invariant.
pub fn validate_table(table: &[RouteEntry]) -> Result<(), RouteTableError> {
    let catch_alls: Vec<usize> = table
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.pattern == Pattern::CatchAll)
        .map(|(i, _)| i)
        .collect();
    match catch_alls.as_slice() {
        [] => return Err(RouteTableError::MissingCatchAll),
        [index] if *index != table.len() - 1 => return Err(RouteTableError::CatchAllNotLast(*index)),
        [_] => {}
        _ => return Err(RouteTableError::MultipleCatchAll),
    }

    let literals = || {
        table.iter().filter_map(|entry| match entry.pattern {
            Pattern::Exact(literal) => Some(literal),
            Pattern::CatchAll => None,
        })
    };

    for (i, literal) in literals().enumerate() {
        if !literal.starts_with('/') {
            return Err(RouteTableError::RelativePattern(literal));
        }
        if literals().take(i).any(|earlier| earlier == literal) {
            return Err(RouteTableError::DuplicatePattern(literal));
        }
    }

    for entry in table {
        if let (Pattern::Exact(from), Target::Redirect(to)) = (entry.pattern, entry.target) {
            if !literals().any(|literal| literal == to) {
                return Err(RouteTableError::DanglingRedirect(from));
            }
        }
    }

    Ok(())
}
