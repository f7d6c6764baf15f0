//! Test utilities for the iView reader


/// Helper to create a complete iView export as it comes off disk
pub fn create_test_iview_lines() -> Vec<String> {
    [
        "## [iView]",
        "## Converted from:\tC:\\iView\\data\\sub01.idf",
        "#FileVersion:\t2",
        "#Fileformat:\t0",
        "#Subject:\tsub01",
        "#Date:\t04.03.2008 14:27:04",
        "#Description:\tfree viewing",
        "## of Pts Recorded:\t3",
        "#Offset Of Calibration Area:\t0\t0",
        "#Size Of Calibration Area:\t800\t600",
        "#Sample Rate:\t60",
        "",
        "0\t0\t412\t287\t1",
        "17\t0\t415\t290\t1",
        "33\t0\t418\t288\t1",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Helper to create minimal iView content
pub fn create_minimal_iview_lines() -> Vec<String> {
    [
        "#FileVersion:\t1.0",
        "#Sample Rate:\t60",
        "",
        "x1\ty1",
        "x2\ty2",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
