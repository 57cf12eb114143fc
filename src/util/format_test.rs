use super::*;

#[test]
fn format_file_size_picks_a_sensible_unit() {
    assert_eq!(format_file_size(512), "512 B");
    assert_eq!(format_file_size(2048), "2.0 KB");
    assert_eq!(format_file_size(5 * 1024 * 1024), "5.0 MB");
    assert_eq!(format_file_size(0), "0 B");
    assert_eq!(format_file_size(-5), "-5 B");
}

#[test]
fn format_percentage_rounds_to_whole_numbers() {
    assert_eq!(format_percentage(66.6), "67%");
    assert_eq!(format_percentage(0.0), "0%");
}

#[test]
fn format_date_takes_the_date_portion() {
    assert_eq!(format_date("2024-01-05T12:30:00Z"), "2024-01-05");
    assert_eq!(format_date("not-a-date"), "not-a-date");
}

#[test]
fn humanize_label_title_cases_underscored_labels() {
    assert_eq!(humanize_label("NEEDS_REVIEW"), "Needs Review");
    assert_eq!(humanize_label("uploaded"), "Uploaded");
    assert_eq!(humanize_label(""), "");
}
