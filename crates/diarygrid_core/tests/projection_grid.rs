use diarygrid_core::{
    project_entries, share_entries, GridLayout, LabelKind, LabelStyle, MetricMode,
    ProjectionOptions, RawEntry,
};
use std::collections::HashSet;

fn dated(dates: &[&str]) -> Vec<RawEntry> {
    dates
        .iter()
        .map(|date| RawEntry::new(*date, "entry"))
        .collect()
}

fn daily(count: usize) -> Vec<RawEntry> {
    let start = chrono::NaiveDate::from_ymd_opt(2022, 10, 1).unwrap();
    (0..count)
        .map(|offset| {
            let date = start + chrono::Days::new(offset as u64);
            RawEntry::new(date.format("%Y-%m-%d").to_string(), "entry")
        })
        .collect()
}

#[test]
fn grid_positions_are_unique_and_in_bounds() {
    for columns in 1..=12 {
        for count in [0, 1, columns - 1, columns, columns + 1, 37] {
            let layout = GridLayout::with_cell_size(columns, 10.0).unwrap();
            let entries = share_entries(daily(count));
            let records = project_entries(&entries, &layout, ProjectionOptions::default());

            assert_eq!(records.len(), count);
            let rows = layout.rows_for(count);
            assert_eq!(rows, (count + columns - 1) / columns);

            let mut seen = HashSet::new();
            for (index, record) in records.iter().enumerate() {
                assert_eq!(record.index, index);
                assert_eq!(record.entry_number, index + 1);
                assert_eq!(record.row, index / columns);
                assert_eq!(record.col, index % columns);
                assert!(record.row < rows && record.col < columns);
                assert!(seen.insert((record.row, record.col)));
            }
        }
    }
}

#[test]
fn projection_is_idempotent() {
    let entries = share_entries(daily(45));
    let layout = GridLayout::from_viewport(10, 600.0).unwrap();
    let options = ProjectionOptions {
        metric_mode: MetricMode::Significance,
        label_style: LabelStyle::MonthDay,
    };

    let first = project_entries(&entries, &layout, options);
    let second = project_entries(&entries, &layout, options);
    assert_eq!(first, second);
}

#[test]
fn input_order_is_never_resorted() {
    let entries = share_entries(dated(&["2022-10-05", "2022-10-01", "2022-09-30"]));
    let layout = GridLayout::with_cell_size(3, 10.0).unwrap();
    let records = project_entries(&entries, &layout, ProjectionOptions::default());

    let dates: Vec<&str> = records.iter().map(|r| r.entry.date.as_str()).collect();
    assert_eq!(dates, vec!["2022-10-05", "2022-10-01", "2022-09-30"]);
    assert_eq!(records[1].label_kind, LabelKind::Month);
}

#[test]
fn metrics_are_clamped_for_any_score() {
    let entries = share_entries(
        [-7.5, -1.0, -0.25, 0.0, 0.8, 1.0, 42.0, f64::NAN]
            .into_iter()
            .map(|score| {
                RawEntry::new("2022-10-02", "x")
                    .with_sentiment_score(score)
                    .with_significance_score(score)
            })
            .collect(),
    );
    let layout = GridLayout::with_cell_size(4, 10.0).unwrap();

    for metric_mode in [MetricMode::Sentiment, MetricMode::Significance] {
        let options = ProjectionOptions {
            metric_mode,
            label_style: LabelStyle::MonthDay,
        };
        for record in project_entries(&entries, &layout, options) {
            assert!(
                (0.0..=1.0).contains(&record.metric),
                "{metric_mode:?} produced {}",
                record.metric
            );
        }
    }
}

#[test]
fn label_priority_never_shows_day_label_on_boundaries() {
    let entries = share_entries(daily(400));
    let layout = GridLayout::with_cell_size(30, 10.0).unwrap();
    let records = project_entries(&entries, &layout, ProjectionOptions::default());

    let mut year_starts = 0;
    for record in &records {
        match record.label_kind {
            LabelKind::Year => {
                year_starts += 1;
                assert_ne!(record.primary_label(), record.day_label);
                assert_eq!(record.primary_label(), record.year_label.as_deref().unwrap());
                assert!(record.is_month_start());
            }
            LabelKind::Month => {
                assert_ne!(record.primary_label(), record.day_label);
                assert_eq!(record.primary_label(), record.month_label.as_deref().unwrap());
            }
            LabelKind::Day => assert_eq!(record.primary_label(), record.day_label),
        }
    }
    assert_eq!(year_starts, 1);
}

#[test]
fn three_entry_scenario_produces_expected_labels() {
    let entries = share_entries(dated(&["2022-10-01", "2022-10-02", "2022-11-01"]));
    let layout = GridLayout::with_cell_size(2, 30.0).unwrap();
    let records = project_entries(&entries, &layout, ProjectionOptions::default());

    assert_eq!(layout.rows_for(records.len()), 2);
    assert_eq!(
        records.iter().map(|r| (r.row, r.col)).collect::<Vec<_>>(),
        vec![(0, 0), (0, 1), (1, 0)]
    );

    assert_eq!(records[0].label_kind, LabelKind::Month);
    assert_eq!(records[0].primary_label(), "Oct '22");
    assert_eq!(records[1].label_kind, LabelKind::Day);
    assert_eq!(records[1].primary_label(), "Oct 2");
    assert_eq!(records[2].label_kind, LabelKind::Month);
    assert_eq!(records[2].primary_label(), "Nov '22");
}

#[test]
fn entry_number_style_labels_plain_days_by_position() {
    let entries = share_entries(dated(&["2022-10-01", "2022-10-02", "garbage"]));
    let layout = GridLayout::with_cell_size(3, 10.0).unwrap();
    let options = ProjectionOptions {
        metric_mode: MetricMode::Sentiment,
        label_style: LabelStyle::EntryNumber,
    };
    let labels: Vec<String> = project_entries(&entries, &layout, options)
        .iter()
        .map(|r| r.primary_label().to_string())
        .collect();
    assert_eq!(labels, vec!["Oct '22", "2", "3"]);
}
