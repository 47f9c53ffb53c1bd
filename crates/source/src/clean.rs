/// Mount prefix the device puts in front of side-loaded book identifiers.
pub const DEVICE_PREFIX: &str = "file:///mnt/onboard/";

/// Strips the device mount prefix from an identifier for display and export.
///
/// Identifiers without the prefix are returned unchanged. Repeated prefixes
/// are all removed, so `clean(clean(p)) == clean(p)` for every input.
///
/// Never feed the result back into a query: the device database stores the
/// prefixed form.
///
/// ```
/// use kobo_source::clean;
/// assert_eq!(clean("file:///mnt/onboard/Herbert/Dune.epub"), "Herbert/Dune.epub");
/// assert_eq!(clean("b6a9a4c8-3f8e-4a43-9a0e-5e0d1b1d5b1e"), "b6a9a4c8-3f8e-4a43-9a0e-5e0d1b1d5b1e");
/// ```
#[must_use]
pub fn clean(path: &str) -> &str {
    path.trim_start_matches(DEVICE_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("file:///mnt/onboard/Dune.epub", "Dune.epub")]
    #[case("file:///mnt/onboard/Herbert/Dune.epub", "Herbert/Dune.epub")]
    #[case("file:///mnt/onboard/Dune.epub#(2)OEBPS/ch01.xhtml", "Dune.epub#(2)OEBPS/ch01.xhtml")]
    #[case("b6a9a4c8-3f8e-4a43-9a0e-5e0d1b1d5b1e", "b6a9a4c8-3f8e-4a43-9a0e-5e0d1b1d5b1e")]
    #[case("file:///mnt/sd/Dune.epub", "file:///mnt/sd/Dune.epub")]
    #[case("", "")]
    fn test_clean(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(clean(input), expected);
    }

    #[rstest]
    #[case("file:///mnt/onboard/Dune.epub")]
    #[case("file:///mnt/onboard/file:///mnt/onboard/Dune.epub")]
    #[case("Dune.epub")]
    #[case("file:///mnt/onboard/")]
    fn test_clean_is_idempotent(#[case] input: &str) {
        assert_eq!(clean(clean(input)), clean(input));
    }

    #[test]
    fn test_prefix_only_in_the_middle_is_kept() {
        let id = "backup/file:///mnt/onboard/Dune.epub";
        assert_eq!(clean(id), id);
    }
}
