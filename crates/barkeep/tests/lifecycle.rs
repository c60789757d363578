// Integration tests are compiled as a separate crate, so these lints don't apply
#![allow(clippy::tests_outside_test_module)]
#![allow(missing_docs)]

use barkeep::{
    BarOptions, BarkeepError, Manager, ManagerOptions, ProgressBar, Spinner, SpinnerOptions,
    Widget, WidgetState,
};

fn hidden_manager() -> Manager {
    Manager::with_options(ManagerOptions {
        hidden: true,
        colors: Some(false),
        completed_on_top: false,
    })
}

fn bar_on(manager: &Manager, total: u64, persist: bool) -> ProgressBar {
    ProgressBar::with_options(
        "work",
        total,
        BarOptions {
            persist,
            manager: Some(manager.clone()),
            ..BarOptions::default()
        },
    )
}

fn spinner_on(manager: &Manager, persist: bool) -> Spinner {
    Spinner::with_options(
        "working",
        SpinnerOptions {
            persist,
            manager: Some(manager.clone()),
            ..SpinnerOptions::default()
        },
    )
}

#[test]
fn bar_completes_when_total_reached() {
    let manager = hidden_manager();
    let mut bar = bar_on(&manager, 3, false);

    bar.start().unwrap();
    for _ in 0..3 {
        bar.advance(1).unwrap();
    }
    bar.stop().unwrap();

    assert_eq!(bar.state(), WidgetState::Completed);
    assert!(bar.is_done());
    assert_eq!(bar.position(), 3);
}

#[test]
fn bar_aborts_when_stopped_early() {
    let manager = hidden_manager();
    let mut bar = bar_on(&manager, 10, false);

    bar.start().unwrap();
    bar.advance(4).unwrap();
    bar.stop().unwrap();

    assert_eq!(bar.state(), WidgetState::Aborted);
}

#[test]
fn advance_requires_running() {
    let manager = hidden_manager();
    let mut bar = bar_on(&manager, 10, false);

    let err = bar.advance(1).unwrap_err();
    assert!(matches!(err, BarkeepError::NotRunning { .. }));
    assert_eq!(
        err.to_string(),
        "cannot advance progress bar: it is not running"
    );
}

#[test]
fn advance_past_total_is_exhausted() {
    let manager = hidden_manager();
    let mut bar = bar_on(&manager, 2, false);

    bar.start().unwrap();
    bar.advance(2).unwrap();

    let err = bar.advance(1).unwrap_err();
    assert!(matches!(err, BarkeepError::Exhausted { total: 2 }));
    assert_eq!(
        err.to_string(),
        "progress bar already reached its total of 2, cannot advance further"
    );
}

#[test]
fn start_after_finish_errors() {
    let manager = hidden_manager();
    let mut bar = bar_on(&manager, 1, false);

    bar.start().unwrap();
    bar.advance(1).unwrap();
    bar.stop().unwrap();

    let err = bar.start().unwrap_err();
    assert!(matches!(err, BarkeepError::AlreadyFinished { .. }));

    let err = bar.stop().unwrap_err();
    assert!(matches!(err, BarkeepError::NotRunning { .. }));
}

#[test]
fn restart_resets_position() {
    let manager = hidden_manager();
    let mut bar = bar_on(&manager, 10, false);

    bar.start().unwrap();
    bar.advance(7).unwrap();
    bar.restart().unwrap();

    assert_eq!(bar.position(), 0);
    assert!(bar.is_running());
}

#[test]
fn pause_returns_to_idle_and_resume_works() {
    let manager = hidden_manager();
    let mut bar = bar_on(&manager, 10, false);

    bar.start().unwrap();
    bar.advance(2).unwrap();
    bar.pause();
    assert_eq!(bar.state(), WidgetState::Idle);

    // Paused widgets reject updates until started again.
    assert!(bar.advance(1).is_err());

    bar.start().unwrap();
    bar.advance(1).unwrap();
    assert_eq!(bar.position(), 3);
}

#[test]
fn pause_on_finished_widget_is_a_noop() {
    let manager = hidden_manager();
    let mut bar = bar_on(&manager, 1, false);

    bar.start().unwrap();
    bar.advance(1).unwrap();
    bar.stop().unwrap();
    bar.pause();

    assert_eq!(bar.state(), WidgetState::Completed);
}

#[test]
fn transient_bar_detaches_on_stop() {
    let manager = hidden_manager();
    let mut bar = bar_on(&manager, 5, false);

    bar.start().unwrap();
    assert_eq!(manager.attached(), 1);

    bar.stop().unwrap();
    assert_eq!(manager.attached(), 0);
}

#[test]
fn persistent_bar_stays_attached_after_stop() {
    let manager = hidden_manager();
    let mut bar = bar_on(&manager, 5, true);

    bar.start().unwrap();
    bar.advance(5).unwrap();
    bar.stop().unwrap();

    assert_eq!(bar.state(), WidgetState::Completed);
    assert_eq!(manager.attached(), 1);
}

#[test]
fn dropping_a_running_widget_detaches_it() {
    let manager = hidden_manager();
    {
        let mut bar = bar_on(&manager, 5, false);
        bar.start().unwrap();
        assert_eq!(manager.attached(), 1);
    }
    assert_eq!(manager.attached(), 0);
}

#[test]
fn dropping_a_finished_widget_changes_nothing() {
    let manager = hidden_manager();
    {
        let mut spinner = spinner_on(&manager, false);
        spinner.start().unwrap();
        spinner.success(Some("saved")).unwrap();
        assert_eq!(manager.attached(), 1);
    }
    // The success line persists past the drop.
    assert_eq!(manager.attached(), 1);
}

#[test]
fn several_widgets_share_one_display() {
    let manager = hidden_manager();

    let mut total = ProgressBar::with_options(
        "Total",
        10,
        BarOptions {
            prefix: "[ 1/10] ".to_string(),
            persist: true,
            manager: Some(manager.clone()),
            ..BarOptions::default()
        },
    );
    let mut train = bar_on(&manager, 800, false);
    let mut spinner = spinner_on(&manager, false);

    total.start().unwrap();
    train.start().unwrap();
    spinner.start().unwrap();
    assert_eq!(manager.attached(), 3);

    train.advance(36).unwrap();
    spinner.update("saving checkpoint").unwrap();

    spinner.stop().unwrap();
    train.stop().unwrap();
    assert_eq!(manager.attached(), 1);

    total.advance(1).unwrap();
    assert_eq!(total.position(), 1);
}

#[test]
fn completed_on_top_keeps_attachment_count_stable() {
    let manager = Manager::with_options(ManagerOptions {
        hidden: true,
        colors: Some(false),
        completed_on_top: true,
    });

    let mut done = bar_on(&manager, 1, true);
    let mut running = bar_on(&manager, 100, false);

    done.start().unwrap();
    running.start().unwrap();
    assert_eq!(manager.attached(), 2);

    done.advance(1).unwrap();
    // Finishing re-inserts the bar at the top of the display.
    done.stop().unwrap();
    assert_eq!(done.state(), WidgetState::Completed);
    assert_eq!(manager.attached(), 2);

    running.stop().unwrap();
    assert_eq!(manager.attached(), 1);
}

#[test]
fn clear_forgets_all_widgets() {
    let manager = hidden_manager();

    let mut bar = bar_on(&manager, 5, true);
    let mut spinner = spinner_on(&manager, true);
    bar.start().unwrap();
    spinner.start().unwrap();
    assert_eq!(manager.attached(), 2);

    manager.clear().unwrap();
    assert_eq!(manager.attached(), 0);
}

#[test]
fn spinner_restart_after_pause() {
    let manager = hidden_manager();
    let mut spinner = spinner_on(&manager, false);

    spinner.start().unwrap();
    spinner.pause();
    assert_eq!(spinner.state(), WidgetState::Idle);

    spinner.restart().unwrap();
    assert!(spinner.is_running());

    spinner.fail(Some("gave up")).unwrap();
    assert_eq!(spinner.state(), WidgetState::Aborted);
}

#[test]
fn spinner_finish_after_finish_errors() {
    let manager = hidden_manager();
    let mut spinner = spinner_on(&manager, false);

    spinner.start().unwrap();
    spinner.success(None).unwrap();

    let err = spinner.fail(None).unwrap_err();
    assert!(matches!(err, BarkeepError::AlreadyFinished { .. }));
}

#[test]
fn manager_suspend_runs_closure() {
    let manager = hidden_manager();
    let mut spinner = spinner_on(&manager, false);
    spinner.start().unwrap();

    let value = manager.suspend(|| 41 + 1);
    assert_eq!(value, 42);

    spinner.stop().unwrap();
}
