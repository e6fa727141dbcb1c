// Run/stop behaviour through the tokio-backed ticker on a paused clock

use std::time::Duration;

use conway::{Pattern, SimulationConfig, SimulationController, TokioTicker};
use tokio::runtime::Handle;
use tokio::time;

const PERIOD: Duration = Duration::from_millis(200);

fn controller() -> SimulationController<TokioTicker> {
    let config = SimulationConfig::new(25, 55).with_tick_interval(PERIOD);
    let mut c = SimulationController::from_config(&config, TokioTicker::new(Handle::current()))
        .unwrap();
    let glider = Pattern::find("Glider").unwrap().stamp(c.grid(), 1, 1);
    c.replace_grid(glider).unwrap();
    c
}

async fn periods(n: u32) {
    time::sleep(PERIOD * n).await;
}

#[tokio::test(start_paused = true)]
async fn running_steps_once_per_period() {
    let mut c = controller();
    c.set_running(true);

    // Half a period of slack keeps us clear of the tick instants
    time::sleep(PERIOD / 2).await;
    assert_eq!(c.pump(), 0);

    for expected in 1..=5u64 {
        periods(1).await;
        assert_eq!(c.pump(), 1);
        assert_eq!(c.step_count(), expected);
    }
}

#[tokio::test(start_paused = true)]
async fn ticks_missed_by_a_slow_reader_are_not_dropped() {
    let mut c = controller();
    c.set_running(true);
    time::sleep(PERIOD / 2).await;

    periods(8).await;
    assert_eq!(c.pump(), 8);
    assert_eq!(c.step_count(), 8);
}

#[tokio::test(start_paused = true)]
async fn stopping_freezes_the_counter() {
    let mut c = controller();
    c.set_running(true);
    time::sleep(PERIOD / 2).await;
    periods(3).await;
    c.pump();
    assert_eq!(c.step_count(), 3);

    c.set_running(false);
    let frozen = c.grid().clone();
    periods(50).await;
    assert_eq!(c.pump(), 0);
    assert_eq!(c.step_count(), 3);
    assert_eq!(*c.grid(), frozen);
}

#[tokio::test(start_paused = true)]
async fn restarting_waits_a_full_period() {
    let mut c = controller();
    c.set_running(true);
    time::sleep(PERIOD / 2).await;
    periods(2).await;
    c.pump();
    c.set_running(false);

    c.set_running(true);
    time::sleep(PERIOD / 2).await;
    assert_eq!(c.pump(), 0);
    periods(1).await;
    assert_eq!(c.pump(), 1);
    assert_eq!(c.step_count(), 3);
}

#[tokio::test(start_paused = true)]
async fn reset_and_reconfigure_tear_down_ticking() {
    let mut c = controller();
    c.set_running(true);
    c.reset();
    periods(4).await;
    assert_eq!(c.pump(), 0);
    assert_eq!(c.step_count(), 0);
    assert!(!c.is_running());

    c.set_running(true);
    c.reconfigure(10, 10).unwrap();
    periods(4).await;
    assert_eq!(c.pump(), 0);
    assert_eq!(c.dimensions(), (10, 10));
}

#[tokio::test(start_paused = true)]
async fn dropping_the_controller_ends_the_tick_task() {
    let metrics = Handle::current().metrics();
    let mut c = controller();
    c.set_running(true);
    time::sleep(PERIOD / 2).await;
    periods(1).await;
    assert_eq!(c.pump(), 1);
    assert_eq!(metrics.num_alive_tasks(), 1);

    drop(c);
    periods(2).await;
    assert_eq!(metrics.num_alive_tasks(), 0);
}
