use super::*;

#[test]
fn gate_admits_one_submission_at_a_time() {
    let gate = SubmitGate::new();
    let guard = gate.try_begin();
    assert!(guard.is_some());
    assert!(gate.is_busy());
    assert!(gate.try_begin().is_none());

    drop(guard);
    assert!(!gate.is_busy());
    assert!(gate.try_begin().is_some());
}

#[test]
fn gate_clones_share_state() {
    let gate = SubmitGate::new();
    let other = gate.clone();
    let _guard = gate.try_begin();
    assert!(other.try_begin().is_none());
}

#[test]
fn mount_flag_clears_for_all_clones() {
    let flag = MountFlag::new();
    let task_view = flag.clone();
    assert!(task_view.is_mounted());
    flag.unmount();
    assert!(!task_view.is_mounted());
}

#[test]
fn only_newest_load_is_current() {
    let loads = LoadSequence::new();
    let first = loads.begin();
    assert!(loads.is_current(first));

    let second = loads.begin();
    assert!(!loads.is_current(first));
    assert!(loads.is_current(second));
}

#[test]
fn load_sequence_clones_share_issuance() {
    let loads = LoadSequence::new();
    let in_task = loads.clone();
    let ticket = in_task.begin();
    loads.begin();
    assert!(!in_task.is_current(ticket));
}
