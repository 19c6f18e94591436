//! End-to-end checks: sensor packages in, rendered summary lines out.
//!
//! Run with: `cargo nextest run -p workouts`

use workouts::{
    ErrorPolicy, OutputFormat, Package, Settings, Training, WorkoutError, WorkoutKind,
    default_packages, process_batch, read_package,
};

fn run_batch(packages: &[Package], settings: &Settings) -> (anyhow::Result<usize>, Vec<String>) {
    let mut out = Vec::new();
    let result = process_batch(packages, settings, &mut out).map(|report| report.processed);
    let text = String::from_utf8(out).expect("output is utf-8");
    (result, text.lines().map(str::to_string).collect())
}

#[test]
fn test_reference_batch_output() {
    let (result, lines) = run_batch(&default_packages(), &Settings::default());

    assert_eq!(result.unwrap(), 3);
    assert_eq!(
        lines,
        vec![
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
             Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.",
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.",
            "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
             Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.",
        ]
    );
}

#[test]
fn test_summary_is_idempotent() {
    for package in default_packages() {
        let workout = read_package(&package.code, &package.data).unwrap();
        let first = workout.summary();
        let second = workout.summary();

        assert_eq!(first, second);
        assert_eq!(first.calories.to_bits(), second.calories.to_bits());
        assert_eq!(first.speed.to_bits(), second.speed.to_bits());
    }
}

#[test]
fn test_unknown_code_produces_no_summary() {
    let (result, lines) = run_batch(&[Package::new("XYZ", [1.0, 1.0, 1.0])], &Settings::default());

    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<WorkoutError>(),
        Some(WorkoutError::UnknownWorkout(code)) if code == "XYZ"
    ));
    assert!(lines.is_empty());
}

#[test]
fn test_skip_policy_reports_only_valid_packages() {
    let packages = vec![
        Package::new("RUN", [15000.0, 1.0]),
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
        Package::new("SWM", [720.0, -1.0, 80.0, 25.0, 40.0]),
    ];
    let settings = Settings {
        on_error: ErrorPolicy::Skip,
        format: OutputFormat::Text,
    };
    let (result, lines) = run_batch(&packages, &settings);

    assert_eq!(result.unwrap(), 1);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Тип тренировки: SportsWalking;"));
}

#[test]
fn test_packages_from_json() {
    let json = r#"[
        {"code": "SWM", "data": [720, 1, 80, 25, 40]},
        {"code": "RUN", "data": [15000, 1, 75]},
        {"code": "WLK", "data": [9000, 1, 75, 180]}
    ]"#;
    let packages: Vec<Package> = serde_json::from_str(json).unwrap();
    assert_eq!(packages, default_packages());

    let kinds: Vec<WorkoutKind> = packages
        .iter()
        .map(|p| read_package(&p.code, &p.data).unwrap().kind())
        .collect();
    assert_eq!(
        kinds,
        vec![
            WorkoutKind::Swimming,
            WorkoutKind::Running,
            WorkoutKind::SportsWalking
        ]
    );
}

#[test]
fn test_integer_speed_renders_with_decimals() {
    let workout = read_package("SWM", &[0.0, 2.0, 60.0, 50.0, 80.0]).unwrap();
    let message = workout.summary().message();

    assert!(message.contains("Длительность: 2.000 ч."));
    assert!(message.contains("Дистанция: 0.000 км"));
    assert!(message.contains("Ср. скорость: 2.000 км/ч"));
}
