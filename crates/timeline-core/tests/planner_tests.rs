mod common;

use common::{wire_date, wire_range};
use timeline_core::{
    compute_offset_date, dates::format_display_date, generate_suggested_phases, AppendPhase,
    Breakpoint, PartitionerBuilder, PayloadOptions, PhaseField, PhaseStatus, Plan,
    TimelineError, UpdatePhase,
};

#[test]
fn test_two_phase_split_end_to_end() {
    let window = wire_range("2025-01-01", "2025-01-11");
    let breakpoints = vec![Breakpoint::new("A", 0.0, 0.5), Breakpoint::new("B", 0.5, 1.0)];

    let suggestions = generate_suggested_phases(&window, &breakpoints).expect("partition");
    assert_eq!(suggestions[0].range, wire_range("2025-01-01", "2025-01-06"));
    assert_eq!(suggestions[1].range, wire_range("2025-01-06", "2025-01-11"));

    let plan = Plan::from_suggestions("Split", window, &suggestions).expect("plan");
    let payload = plan.to_payload(PayloadOptions::default());
    assert_eq!(payload.start_date, "2025-01-01");
    assert_eq!(payload.end_date, "2025-01-11");
    assert_eq!(payload.fields["A"], "In Progress");
    assert_eq!(payload.fields["B"], "Pending");
}

#[test]
fn test_reference_planning_phase() {
    let window = wire_range("2025-06-16", "2025-10-17");
    let partitioner = PartitionerBuilder::new()
        .with_breakpoints(Breakpoint::reference())
        .build()
        .expect("partitioner");

    let suggestions = partitioner.suggest(&window).expect("suggestions");
    let planning = &suggestions[0];
    assert_eq!(planning.name, "Planning");
    assert_eq!(planning.range.end, wire_date("2025-07-04"));
    assert_eq!(format_display_date(planning.range.end), "04/07/2025");
}

#[test]
fn test_offset_date_at_fraction_bounds() {
    let window = wire_range("2023-03-05", "2023-09-30");
    assert_eq!(compute_offset_date(&window, 0.0).unwrap(), window.start);
    assert_eq!(compute_offset_date(&window, 1.0).unwrap(), window.end);
}

#[test]
fn test_manual_plan_workflow() {
    let mut plan = Plan::new("Data migration", wire_range("2025-03-01", "2025-05-31")).unwrap();

    let extract = AppendPhase::named("Extract").with_dates(Some(wire_date("2025-03-01")), None);
    let extract = plan.append_phase(&extract).unwrap();
    let load = plan.append_phase(&AppendPhase::named("Load")).unwrap();

    let update = UpdatePhase {
        id: load.0,
        start: Some(wire_date("2025-04-15")),
        end: Some(wire_date("2025-05-31")),
        status: Some(PhaseStatus::InProgress),
        ..Default::default()
    };
    for field in update.fields() {
        assert!(plan.update_phase(update.phase_id(), field).unwrap());
    }
    plan.update_phase(extract, PhaseField::Status(PhaseStatus::Pending)).unwrap();

    let in_progress: Vec<&str> = plan.in_progress().map(|p| p.name.as_str()).collect();
    assert_eq!(in_progress, ["Load"]);

    let payload = plan.to_payload(PayloadOptions {
        include_phase_ranges: true,
    });
    let phases = payload.phases.expect("phases requested");
    assert_eq!(phases[1].start_date.as_deref(), Some("2025-04-15"));
    assert_eq!(phases[0].end_date, None);
}

#[test]
fn test_blank_phase_name_is_rejected() {
    let mut plan = Plan::new("Data migration", wire_range("2025-03-01", "2025-05-31")).unwrap();
    assert!(matches!(
        plan.append_phase(&AppendPhase::named("")),
        Err(TimelineError::InvalidName { .. })
    ));
    assert!(plan.phases.is_empty());
}

#[test]
fn test_plan_json_round_trip_preserves_phases() {
    let window = wire_range("2025-06-16", "2025-10-17");
    let suggestions = generate_suggested_phases(&window, &Breakpoint::reference()).unwrap();
    let plan = Plan::from_suggestions("Rollout", window, &suggestions).unwrap();

    let json = serde_json::to_string_pretty(&plan).unwrap();
    let restored: Plan = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, plan);
}
