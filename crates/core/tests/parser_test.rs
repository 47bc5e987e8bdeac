mod test_utils;

use chrono::Weekday;
use classgrid_core::{
    TableFormat,
    models::day::{DayLabel, DayNames},
    parser::parse_table,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use test_utils::{MOI, location};

#[test]
fn test_parse_is_deterministic() {
    let moi = location("MOI");
    let format = TableFormat::default();

    let first = parse_table(MOI, &moi, &format);
    let second = parse_table(MOI, &moi, &format);

    assert_eq!(first, second);
    assert_eq!(first.len(), 19);
}

#[test]
fn test_parse_reads_rows_then_columns() {
    let activities = parse_table(MOI, &location("MOI"), &TableFormat::default());

    let first_row: Vec<(&str, String, &str)> = activities
        .iter()
        .take(3)
        .map(|a| (a.time.as_str(), a.day.to_string(), a.class_name.as_str()))
        .collect();

    assert_eq!(
        first_row,
        vec![
            ("07.30", "Tuesday".to_string(), "Hatha Yoga"),
            ("07.30", "Friday".to_string(), "Hatha Yoga"),
            ("07.30", "Saturday".to_string(), "Pilates"),
        ]
    );
    assert!(activities.iter().all(|a| a.location == location("MOI")));
}

#[rstest]
#[case("", 0)]
#[case("   ", 0)]
#[case("\t", 0)]
#[case("Zumba", 1)]
#[case("  Zumba  ", 1)]
#[case("Booty & Abs", 1)]
fn test_cell_emptiness(#[case] cell: &str, #[case] expected: usize) {
    let table = format!("Time,Mon\n08.00,{cell}");
    let activities = parse_table(&table, &location("MOI"), &TableFormat::default());

    assert_eq!(activities.len(), expected);
    if let Some(activity) = activities.first() {
        assert_eq!(activity.class_name, cell.trim());
    }
}

#[test]
fn test_every_abbreviation_maps_to_its_full_name() {
    let table = "Time,Mon,Tue,Wed,Thurs,Fri,Sat,Sun\n08.00,a,b,c,d,e,f,g";
    let activities = parse_table(table, &location("MOI"), &TableFormat::default());

    let days: Vec<String> = activities.iter().map(|a| a.day.to_string()).collect();
    assert_eq!(
        days,
        vec![
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday"
        ]
    );
    assert_eq!(activities[3].day, DayLabel::Known(Weekday::Thu));
}

#[rstest]
#[case("Monday", DayLabel::Known(Weekday::Mon))]
#[case("Thu", DayLabel::Unrecognized("Thu".to_string()))]
#[case("mon", DayLabel::Unrecognized("mon".to_string()))]
#[case("Holiday", DayLabel::Unrecognized("Holiday".to_string()))]
fn test_header_labels_outside_the_table(#[case] label: &str, #[case] expected: DayLabel) {
    let table = format!("Time,{label}\n08.00,Zumba");
    let activities = parse_table(&table, &location("MOI"), &TableFormat::default());

    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].day, expected);
}

#[test]
fn test_custom_day_names() {
    let format = TableFormat {
        day_names: DayNames::empty().with_alias("Sen", Weekday::Mon),
        ..TableFormat::default()
    };
    let activities = parse_table("Waktu,Sen\n08.00,Zumba", &location("MOI"), &format);

    assert_eq!(activities[0].day, DayLabel::Known(Weekday::Mon));
}

#[test]
fn test_tolerates_blank_lines_and_line_endings() {
    let table = "\r\nTime,Mon,Tue\r\n\r\n08.00,Zumba,\r\n   \n09.00,,Pilates";
    let activities = parse_table(table, &location("MOI"), &TableFormat::default());

    let summary: Vec<(&str, &str)> = activities
        .iter()
        .map(|a| (a.time.as_str(), a.class_name.as_str()))
        .collect();
    assert_eq!(summary, vec![("08.00", "Zumba"), ("09.00", "Pilates")]);
}

#[test]
fn test_short_rows_contribute_fewer_activities() {
    let table = "Time,Mon,Tue,Wed\n08.00,Zumba\n09.00\n10.00,,,Yoga";
    let activities = parse_table(table, &location("MOI"), &TableFormat::default());

    let summary: Vec<(&str, &str)> = activities
        .iter()
        .map(|a| (a.time.as_str(), a.class_name.as_str()))
        .collect();
    assert_eq!(summary, vec![("08.00", "Zumba"), ("10.00", "Yoga")]);
}

#[rstest]
#[case("")]
#[case("\n\n")]
#[case("Time,Mon,Tue")]
fn test_empty_tables_yield_nothing(#[case] table: &str) {
    let activities = parse_table(table, &location("MOI"), &TableFormat::default());
    assert!(activities.is_empty());
}
