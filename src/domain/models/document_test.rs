use super::has_supported_extension;

#[test]
fn it_accepts_supported_extensions() {
    assert!(has_supported_extension("report.pdf"));
    assert!(has_supported_extension("numbers.xlsx"));
    assert!(has_supported_extension("legacy.xls"));
    assert!(has_supported_extension("rows.csv"));
}

#[test]
fn it_accepts_uppercase_extensions() {
    assert!(has_supported_extension("REPORT.PDF"));
    assert!(has_supported_extension("Numbers.Xlsx"));
}

#[test]
fn it_rejects_unsupported_extensions() {
    assert!(!has_supported_extension("notes.txt"));
    assert!(!has_supported_extension("archive.tar.gz"));
    assert!(!has_supported_extension("README"));
}
