use chrono::NaiveDate;

use erfassungsbogen::core::calendar::{day_key, iso_week, week_label};
use erfassungsbogen::utils::collate::{compare_de, sort_key_de};
use erfassungsbogen::utils::date::display_date;
use erfassungsbogen::utils::minutes_to_hhmm;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

#[test]
fn test_day_key_format() {
    assert_eq!(day_key(&d(2024, 1, 8)), "2024-01-08");
    assert_eq!(day_key(&d(2024, 12, 31)), "2024-12-31");
}

#[test]
fn test_iso_week_year_boundaries() {
    // Dec 31 can fall into week 1 of the following year.
    assert_eq!(iso_week(&d(2024, 12, 31)), (2025, 1));
    // Jan 1 of 2024 already belongs to week 1 of 2024.
    assert_eq!(iso_week(&d(2024, 1, 1)), (2024, 1));
    // Jan 1 can fall into week 52/53 of the previous year.
    assert_eq!(iso_week(&d(2021, 1, 1)), (2020, 53));
}

#[test]
fn test_week_label_zero_pads_week() {
    assert_eq!(week_label(&d(2024, 1, 8)), "KW 02/2024");
    assert_eq!(week_label(&d(2024, 12, 31)), "KW 01/2025");
}

#[test]
fn test_minutes_to_hhmm() {
    assert_eq!(minutes_to_hhmm(90), "01:30");
    assert_eq!(minutes_to_hhmm(0), "00:00");
    assert_eq!(minutes_to_hhmm(1439), "23:59");
    // Totals above a day keep summing hours.
    assert_eq!(minutes_to_hhmm(26 * 60 + 15), "26:15");
}

#[test]
fn test_display_date() {
    assert_eq!(display_date(&d(2024, 3, 5)), "05.03.2024");
}

#[test]
fn test_german_collation_folds_umlauts() {
    assert_eq!(sort_key_de("Ärzte"), "arzte");
    assert_eq!(sort_key_de("Straße"), "strasse");

    let mut labels = vec!["Zebra", "Ärzte", "Bau"];
    labels.sort_by(|a, b| compare_de(a, b));
    assert_eq!(labels, vec!["Ärzte", "Bau", "Zebra"]);
}
