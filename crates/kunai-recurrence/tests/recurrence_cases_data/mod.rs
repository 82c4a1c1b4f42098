use chrono::NaiveDate;
use kunai_core::types::{Weekday, WeekdaySet};
use kunai_recurrence::recurrence::{
    Cadence, MonthlyPattern, Schedule, WeekOfMonth, next_occurrence, step_once,
};

pub struct StepCase {
    pub name: &'static str,
    pub schedule: Schedule,
    pub from: &'static str,
    pub expected: &'static str,
}

pub struct ResolveCase {
    pub name: &'static str,
    pub schedule: Schedule,
    pub current: &'static str,
    pub reference: &'static str,
    pub expected: Option<&'static str>,
}

fn weekly_on(interval: u32, days: &[Weekday]) -> Schedule {
    Schedule::new(Cadence::Weekly {
        interval,
        days: WeekdaySet::from_days(days),
    })
}

fn biweekly_on(interval: u32, days: &[Weekday]) -> Schedule {
    Schedule::new(Cadence::Biweekly {
        interval,
        days: WeekdaySet::from_days(days),
    })
}

fn monthly_pattern(pattern: MonthlyPattern) -> Schedule {
    Schedule::new(Cadence::Monthly {
        interval: 1,
        pattern: Some(pattern),
    })
}

#[expect(clippy::too_many_lines)]
pub fn step_cases() -> Vec<StepCase> {
    vec![
        StepCase {
            name: "daily_basic",
            schedule: Schedule::daily(1),
            from: "2026-01-01",
            expected: "2026-01-02",
        },
        StepCase {
            name: "daily_interval",
            schedule: Schedule::daily(10),
            from: "2026-12-28",
            expected: "2027-01-07",
        },
        StepCase {
            name: "weekly_no_selection",
            schedule: Schedule::weekly(1),
            from: "2026-01-06",
            expected: "2026-01-13",
        },
        StepCase {
            name: "weekly_no_selection_interval",
            schedule: Schedule::weekly(4),
            from: "2026-01-06",
            expected: "2026-02-03",
        },
        StepCase {
            name: "weekly_same_week_advance",
            schedule: weekly_on(1, &[Weekday::Monday, Weekday::Wednesday, Weekday::Friday]),
            from: "2026-01-07",
            expected: "2026-01-09",
        },
        StepCase {
            name: "weekly_wraparound",
            schedule: weekly_on(1, &[Weekday::Monday, Weekday::Wednesday, Weekday::Friday]),
            from: "2026-01-09",
            expected: "2026-01-12",
        },
        StepCase {
            name: "weekly_wraparound_three_weeks",
            schedule: weekly_on(3, &[Weekday::Tuesday, Weekday::Thursday]),
            from: "2026-01-08",
            expected: "2026-01-27",
        },
        StepCase {
            name: "weekly_sunday_selection",
            schedule: weekly_on(1, &[Weekday::Sunday]),
            from: "2026-01-04",
            expected: "2026-01-11",
        },
        StepCase {
            name: "biweekly_single_day",
            schedule: biweekly_on(1, &[Weekday::Tuesday]),
            from: "2026-01-06",
            expected: "2026-01-20",
        },
        StepCase {
            name: "biweekly_same_week_advance",
            schedule: biweekly_on(1, &[Weekday::Monday, Weekday::Thursday]),
            from: "2026-01-05",
            expected: "2026-01-08",
        },
        StepCase {
            name: "biweekly_interval_two",
            schedule: biweekly_on(2, &[Weekday::Tuesday]),
            from: "2026-01-06",
            expected: "2026-02-03",
        },
        StepCase {
            name: "monthly_day_clamps_february",
            schedule: monthly_pattern(MonthlyPattern::DayOfMonth { day: 31 }),
            from: "2026-01-15",
            expected: "2026-02-28",
        },
        StepCase {
            name: "monthly_day_clamps_leap_february",
            schedule: monthly_pattern(MonthlyPattern::DayOfMonth { day: 31 }),
            from: "2028-01-15",
            expected: "2028-02-29",
        },
        StepCase {
            name: "monthly_day_clamps_april",
            schedule: monthly_pattern(MonthlyPattern::DayOfMonth { day: 31 }),
            from: "2026-03-10",
            expected: "2026-04-30",
        },
        StepCase {
            name: "monthly_day_recovers_after_clamp",
            schedule: monthly_pattern(MonthlyPattern::DayOfMonth { day: 31 }),
            from: "2026-02-28",
            expected: "2026-03-31",
        },
        StepCase {
            name: "monthly_second_tuesday",
            schedule: monthly_pattern(MonthlyPattern::DayOfWeek {
                week: WeekOfMonth::Second,
                weekday: Weekday::Tuesday,
            }),
            from: "2026-02-10",
            expected: "2026-03-10",
        },
        StepCase {
            name: "monthly_last_friday",
            schedule: monthly_pattern(MonthlyPattern::DayOfWeek {
                week: WeekOfMonth::Last,
                weekday: Weekday::Friday,
            }),
            from: "2026-02-27",
            expected: "2026-03-27",
        },
        StepCase {
            name: "monthly_no_pattern_keeps_day",
            schedule: Schedule::monthly(1),
            from: "2026-01-31",
            expected: "2026-02-28",
        },
        StepCase {
            name: "quarterly_day_of_month",
            schedule: Schedule::new(Cadence::Quarterly {
                interval: 1,
                pattern: Some(MonthlyPattern::DayOfMonth { day: 15 }),
            }),
            from: "2026-01-15",
            expected: "2026-04-15",
        },
        StepCase {
            name: "quarterly_last_friday",
            schedule: Schedule::new(Cadence::Quarterly {
                interval: 1,
                pattern: Some(MonthlyPattern::DayOfWeek {
                    week: WeekOfMonth::Last,
                    weekday: Weekday::Friday,
                }),
            }),
            from: "2026-01-30",
            expected: "2026-04-24",
        },
        StepCase {
            name: "yearly_basic",
            schedule: Schedule::yearly(1),
            from: "2026-07-04",
            expected: "2027-07-04",
        },
        StepCase {
            name: "yearly_leap_day_clamps",
            schedule: Schedule::yearly(1),
            from: "2024-02-29",
            expected: "2025-02-28",
        },
    ]
}

pub fn resolve_cases() -> Vec<ResolveCase> {
    vec![
        ResolveCase {
            name: "on_time_single_step",
            schedule: weekly_on(1, &[Weekday::Monday]),
            current: "2026-01-05",
            reference: "2026-01-05",
            expected: Some("2026-01-12"),
        },
        ResolveCase {
            name: "ten_weeks_late_catches_up",
            schedule: weekly_on(1, &[Weekday::Monday]),
            current: "2026-01-05",
            reference: "2026-03-16",
            expected: Some("2026-03-23"),
        },
        ResolveCase {
            name: "late_monthly_day_of_month",
            schedule: monthly_pattern(MonthlyPattern::DayOfMonth { day: 31 }),
            current: "2025-12-31",
            reference: "2026-03-05",
            expected: Some("2026-03-31"),
        },
        ResolveCase {
            name: "reference_past_end_date",
            schedule: weekly_on(1, &[Weekday::Monday]).with_end_date(parse_date("2026-01-20")),
            current: "2026-01-05",
            reference: "2026-01-21",
            expected: None,
        },
        ResolveCase {
            name: "catch_up_past_end_date",
            schedule: weekly_on(1, &[Weekday::Monday]).with_end_date(parse_date("2026-01-20")),
            current: "2026-01-05",
            reference: "2026-01-19",
            expected: None,
        },
        ResolveCase {
            name: "candidate_on_end_date_kept",
            schedule: weekly_on(1, &[Weekday::Monday]).with_end_date(parse_date("2026-01-19")),
            current: "2026-01-05",
            reference: "2026-01-14",
            expected: Some("2026-01-19"),
        },
    ]
}

pub fn assert_step_case(case: &StepCase) {
    let actual = step_once(&case.schedule, parse_date(case.from));
    assert_eq!(
        actual,
        parse_date(case.expected),
        "Case {} did not match",
        case.name
    );
}

pub fn assert_resolve_case(case: &ResolveCase) {
    let actual = next_occurrence(
        &case.schedule,
        parse_date(case.current),
        Some(parse_date(case.reference)),
    );
    assert_eq!(
        actual,
        case.expected.map(parse_date),
        "Case {} did not match",
        case.name
    );
}

fn parse_date(value: &str) -> NaiveDate {
    value
        .parse()
        .unwrap_or_else(|err| panic!("Failed to parse date {value}: {err}"))
}
