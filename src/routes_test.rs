use super::*;

// =============================================================
// Table invariants
// =============================================================

#[test]
fn shipped_table_is_valid() {
    assert_eq!(validate_table(ROUTES), Ok(()));
}

#[test]
fn validate_rejects_missing_catch_all() {
    let table = [page("/", Page::Home)];
    assert_eq!(validate_table(&table), Err(RouteTableError::MissingCatchAll));
}

#[test]
fn validate_rejects_catch_all_before_literals() {
    let table = [
        RouteEntry {
            pattern: Pattern::CatchAll,
            target: Target::Page(Page::NotFound),
        },
        page("/", Page::Home),
    ];
    assert_eq!(validate_table(&table), Err(RouteTableError::CatchAllNotLast(0)));
}

#[test]
fn validate_rejects_two_catch_alls() {
    let fallback = RouteEntry {
        pattern: Pattern::CatchAll,
        target: Target::Page(Page::NotFound),
    };
    let table = [page("/", Page::Home), fallback, fallback];
    assert_eq!(validate_table(&table), Err(RouteTableError::MultipleCatchAll));
}

#[test]
fn validate_rejects_duplicates_and_relative_patterns() {
    let fallback = RouteEntry {
        pattern: Pattern::CatchAll,
        target: Target::Page(Page::NotFound),
    };
    let dup = [page("/about", Page::About), page("/about", Page::Home), fallback];
    assert_eq!(validate_table(&dup), Err(RouteTableError::DuplicatePattern("/about")));

    let relative = [page("about", Page::About), fallback];
    assert_eq!(validate_table(&relative), Err(RouteTableError::RelativePattern("about")));
}

#[test]
fn validate_rejects_dangling_redirect() {
    let table = [
        RouteEntry {
            pattern: Pattern::Exact("/old"),
            target: Target::Redirect("/nowhere"),
        },
        RouteEntry {
            pattern: Pattern::CatchAll,
            target: Target::Page(Page::NotFound),
        },
    ];
    assert_eq!(validate_table(&table), Err(RouteTableError::DanglingRedirect("/old")));
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn every_declared_path_resolves_deterministically() {
    for entry in ROUTES {
        let Pattern::Exact(path) = entry.pattern else {
            continue;
        };
        let first = resolve(path);
        assert_eq!(first, resolve(path), "unstable resolution for {path}");
        assert_eq!(first, entry.target, "shadowed entry for {path}");
    }
}

#[test]
fn admin_root_always_redirects_to_dashboard() {
    assert_eq!(resolve("/admin"), Target::Redirect("/admin/dashboard"));
    assert_eq!(resolve("/admin/"), Target::Redirect("/admin/dashboard"));
    assert_eq!(resolve("/admin?next=x"), Target::Redirect("/admin/dashboard"));
}

#[test]
fn admin_sub_pages_are_reachable() {
    assert_eq!(resolve("/admin/login"), Target::Page(Page::AdminLogin));
    assert_eq!(resolve("/admin/dashboard"), Target::Page(Page::AdminDashboard));
    assert_eq!(resolve("/admin/projects"), Target::Page(Page::AdminProjects));
    assert_eq!(resolve("/admin/modules"), Target::Page(Page::AdminModules));
    assert_eq!(resolve("/admin/settings"), Target::Page(Page::AdminSettings));
}

#[test]
fn unregistered_path_is_not_found() {
    assert_eq!(resolve("/xyz123"), Target::Page(Page::NotFound));
    assert_eq!(resolve("/admin/unknown"), Target::Page(Page::NotFound));
}

#[test]
fn first_match_wins_over_later_duplicates() {
    let table = [page("/about", Page::About), page("/about", Page::Home)];
    assert_eq!(resolve_in(&table, "/about"), Target::Page(Page::About));
}

#[test]
fn table_without_fallback_still_resolves_not_found() {
    let table = [page("/", Page::Home)];
    assert_eq!(resolve_in(&table, "/missing"), Target::Page(Page::NotFound));
}

#[test]
fn literal_matching_is_exact() {
    assert_eq!(resolve("/About"), Target::Page(Page::NotFound));
    assert_eq!(resolve("/about/team"), Target::Page(Page::NotFound));
}

// =============================================================
// normalize_path
// =============================================================

#[test]
fn normalize_path_strips_query_fragment_and_trailing_slash() {
    assert_eq!(normalize_path("/about/"), "/about");
    assert_eq!(normalize_path("/about?ref=nav"), "/about");
    assert_eq!(normalize_path("/contact#form"), "/contact");
    assert_eq!(normalize_path("/services//"), "/services");
}

#[test]
fn normalize_path_maps_empty_and_root_to_root() {
    assert_eq!(normalize_path(""), "/");
    assert_eq!(normalize_path("/"), "/");
    assert_eq!(normalize_path("/?x=1"), "/");
}

// =============================================================
// Page metadata
// =============================================================

#[test]
fn admin_pages_are_flagged() {
    assert!(Page::AdminSettings.is_admin());
    assert!(Page::AdminLogin.is_admin());
    assert!(!Page::Home.is_admin());
    assert!(!Page::NotFound.is_admin());
}
