//! Marker splice: writes a rendered fragment into an existing HTML page.

use std::fs;
use std::path::Path;

use super::ChangelogError;
use super::render::{NODE_SEPARATOR, render_changelog};

/// Opens the generated region of the page.
pub const START_MARKER: &str = "<!-- CHANGELOG_START -->";
/// Closes the generated region of the page.
pub const END_MARKER: &str = "<!-- CHANGELOG_END -->";

/// Replaces every `START … END` region of `page` with `fragment`.
///
/// The markers are kept, so running the splice again with the same fragment
/// gives the same page. Returns `None` when no start marker is followed by an
/// end marker.
pub fn splice(page: &str, fragment: &str) -> Option<String> {
    let mut out = String::with_capacity(page.len() + fragment.len());
    let mut rest = page;
    let mut replaced = false;

    while let Some(start) = rest.find(START_MARKER) {
        let after_start = start + START_MARKER.len();
        let Some(end) = rest[after_start..].find(END_MARKER) else {
            break;
        };
        let after_end = after_start + end + END_MARKER.len();

        out.push_str(&rest[..start]);
        out.push_str(START_MARKER);
        out.push_str(NODE_SEPARATOR);
        out.push_str(fragment);
        out.push_str(NODE_SEPARATOR);
        out.push_str(END_MARKER);

        rest = &rest[after_end..];
        replaced = true;
    }

    if !replaced {
        return None;
    }
    out.push_str(rest);
    Some(out)
}

/// Reads and renders the changelog at `path`.
pub fn render_file(path: &Path) -> Result<String, ChangelogError> {
    if !path.is_file() {
        return Err(ChangelogError::FileNotFound(path.to_path_buf()));
    }
    let markdown = fs::read_to_string(path)?;
    Ok(render_changelog(&markdown))
}

/// Renders `changelog` and splices it into `target`.
///
/// Both files must exist and the target must contain the markers; all checks
/// run before anything is written. Returns `true` when the target changed and
/// was rewritten, `false` when it was already up-to-date.
pub fn inject_file(changelog: &Path, target: &Path) -> Result<bool, ChangelogError> {
    if !changelog.is_file() {
        return Err(ChangelogError::FileNotFound(changelog.to_path_buf()));
    }
    if !target.is_file() {
        return Err(ChangelogError::FileNotFound(target.to_path_buf()));
    }

    let fragment = render_file(changelog)?;

    let page = fs::read_to_string(target)?;
    let updated = splice(&page, &fragment)
        .ok_or_else(|| ChangelogError::MarkersNotFound(target.to_path_buf()))?;

    if updated == page {
        tracing::debug!(page = %target.display(), "changelog unchanged, skipping write");
        return Ok(false);
    }

    fs::write(target, updated)?;
    tracing::info!(
        changelog = %changelog.display(),
        page = %target.display(),
        "changelog injected"
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "<html>\n  <body>\n    <main>\n      <!-- CHANGELOG_START -->\n      <p>stale</p>\n      <!-- CHANGELOG_END -->\n    </main>\n  </body>\n</html>\n";

    #[test]
    fn splice_replaces_region_and_keeps_markers() {
        let out = splice(PAGE, "<h2>1.0.0</h2>").unwrap();
        assert!(!out.contains("stale"));
        assert!(out.contains(
            "<!-- CHANGELOG_START -->\n      <h2>1.0.0</h2>\n      <!-- CHANGELOG_END -->"
        ));
        assert!(out.starts_with("<html>\n  <body>\n    <main>\n      "));
        assert!(out.ends_with("\n    </main>\n  </body>\n</html>\n"));
    }

    #[test]
    fn splice_is_idempotent() {
        let once = splice(PAGE, "<h2>1.0.0</h2>").unwrap();
        let twice = splice(&once, "<h2>1.0.0</h2>").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn splice_replaces_every_marker_pair() {
        let page = "<nav><!-- CHANGELOG_START -->old nav<!-- CHANGELOG_END --></nav>\n\
                    <main><!-- CHANGELOG_START -->old main<!-- CHANGELOG_END --></main>";
        let out = splice(page, "<h2>2.0.0</h2>").unwrap();
        let region = "<!-- CHANGELOG_START -->\n      <h2>2.0.0</h2>\n      <!-- CHANGELOG_END -->";
        assert_eq!(out, format!("<nav>{region}</nav>\n<main>{region}</main>"));
        assert_eq!(splice(&out, "<h2>2.0.0</h2>").unwrap(), out);
    }

    #[test]
    fn splice_requires_both_markers() {
        assert!(splice("<p>no markers</p>", "x").is_none());
        assert!(splice("<!-- CHANGELOG_START --> only start", "x").is_none());
        assert!(splice("only end <!-- CHANGELOG_END -->", "x").is_none());
    }

    #[test]
    fn splice_requires_end_after_start() {
        let page = "<!-- CHANGELOG_END --> <!-- CHANGELOG_START -->";
        assert!(splice(page, "x").is_none());
    }

    #[test]
    fn splice_empty_fragment() {
        let out = splice("a<!-- CHANGELOG_START --><!-- CHANGELOG_END -->b", "").unwrap();
        assert_eq!(
            out,
            "a<!-- CHANGELOG_START -->\n      \n      <!-- CHANGELOG_END -->b"
        );
    }

    #[test]
    fn inject_file_writes_then_reports_up_to_date() {
        let dir = tempfile::tempdir().unwrap();
        let changelog = dir.path().join("CHANGELOG.md");
        let target = dir.path().join("changelog.html");
        fs::write(&changelog, "## [1.0.0] - 2024-01-01\n- **Added** something\n").unwrap();
        fs::write(&target, PAGE).unwrap();

        assert!(inject_file(&changelog, &target).unwrap());
        let first = fs::read_to_string(&target).unwrap();
        assert!(first.contains("<h2>1.0.0 - 2024-01-01</h2>"));
        assert!(first.contains("<li><strong>Added</strong> something</li>"));

        assert!(!inject_file(&changelog, &target).unwrap());
        assert_eq!(fs::read_to_string(&target).unwrap(), first);
    }

    #[test]
    fn render_file_reads_and_renders() {
        let dir = tempfile::tempdir().unwrap();
        let changelog = dir.path().join("CHANGELOG.md");
        fs::write(&changelog, "### Fixed\n- typo\n").unwrap();

        assert_eq!(
            render_file(&changelog).unwrap(),
            "<h3>Fixed</h3>\n      <ul>\n      <li>typo</li>\n      </ul>"
        );
        assert!(matches!(
            render_file(&dir.path().join("nope.md")),
            Err(ChangelogError::FileNotFound(_))
        ));
    }

    #[test]
    fn inject_file_missing_changelog() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("changelog.html");
        fs::write(&target, PAGE).unwrap();

        let err = inject_file(&dir.path().join("missing.md"), &target).unwrap_err();
        assert!(matches!(err, ChangelogError::FileNotFound(p) if p.ends_with("missing.md")));
    }

    #[test]
    fn inject_file_missing_target() {
        let dir = tempfile::tempdir().unwrap();
        let changelog = dir.path().join("CHANGELOG.md");
        fs::write(&changelog, "- x\n").unwrap();

        let err = inject_file(&changelog, &dir.path().join("missing.html")).unwrap_err();
        assert!(matches!(err, ChangelogError::FileNotFound(p) if p.ends_with("missing.html")));
    }

    #[test]
    fn inject_file_without_markers_leaves_target_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let changelog = dir.path().join("CHANGELOG.md");
        let target = dir.path().join("changelog.html");
        fs::write(&changelog, "- x\n").unwrap();
        fs::write(&target, "<p>no markers</p>").unwrap();

        let err = inject_file(&changelog, &target).unwrap_err();
        assert!(matches!(err, ChangelogError::MarkersNotFound(_)));
        assert!(
            err.to_string()
                .ends_with("Expected <!-- CHANGELOG_START --> and <!-- CHANGELOG_END -->")
        );
        assert_eq!(fs::read_to_string(&target).unwrap(), "<p>no markers</p>");
    }
}
