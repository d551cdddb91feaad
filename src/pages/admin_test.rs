use super::*;

#[test]
fn public_paths_exclude_admin_and_fallback_entries() {
    let paths = public_paths();
    assert_eq!(paths, vec!["/", "/about", "/services", "/portfolio", "/contact", "/login"]);
}
