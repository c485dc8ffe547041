//! Integration tests for lift-sim.

use std::collections::HashMap;

use lift_car::{Fleet, Route, TravelScheduler};
use lift_core::{DispatchMode, ElevatorId, SimConfig, Tick};
use lift_traffic::{Sequence, SequenceSet};

use crate::{simulate, NoopObserver, RowSnapshot, SimBuilder, SimError, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn hm(hour: u32, minute: u32) -> Tick {
    Tick::from_hm(hour, minute)
}

fn config(elevators: u32, floors: u32, start: Tick, end: Tick) -> SimConfig {
    SimConfig {
        elevator_count: elevators,
        floor_count:    floors,
        start,
        end,
        ..SimConfig::default()
    }
}

fn set(sequences: impl IntoIterator<Item = Sequence>) -> SequenceSet {
    SequenceSet::from_sequences(sequences).unwrap()
}

/// One call 0 → 1 every 5 minutes, 09:00–09:10.
fn lobby_to_first() -> SequenceSet {
    set([Sequence::new("Lobby", 5, hm(9, 0), hm(9, 10), [0], [1])])
}

/// Records every observer callback.
#[derive(Default)]
struct Recorder {
    snapshots:  Vec<RowSnapshot>,
    dispatches: Vec<(Tick, ElevatorId, Route, Tick)>,
    releases:   Vec<(Tick, ElevatorId)>,
    ticks:      u32,
    ended:      Option<(Tick, usize)>,
}

impl SimObserver for Recorder {
    fn on_tick_start(&mut self, _tick: Tick) {
        self.ticks += 1;
    }
    fn on_release(&mut self, tick: Tick, elevator: ElevatorId) {
        self.releases.push((tick, elevator));
    }
    fn on_snapshot(&mut self, row: &RowSnapshot) {
        self.snapshots.push(row.clone());
    }
    fn on_dispatch(&mut self, tick: Tick, elevator: ElevatorId, route: &Route, available_at: Tick) {
        self.dispatches.push((tick, elevator, route.clone(), available_at));
    }
    fn on_sim_end(&mut self, final_tick: Tick, dropped_calls: usize) {
        self.ended = Some((final_tick, dropped_calls));
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn installs_default_sequences_when_none_given() {
        let sim = SimBuilder::new(SimConfig::default()).build().unwrap();
        assert_eq!(sim.sequences, SequenceSet::default_office());
        assert_eq!(sim.fleet.len(), 3);
    }

    #[test]
    fn empty_set_means_defaults() {
        let sim = SimBuilder::new(SimConfig::default())
            .sequences(SequenceSet::new())
            .build()
            .unwrap();
        assert_eq!(sim.sequences.len(), 4);
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = SimConfig { elevator_count: 0, ..SimConfig::default() };
        assert!(matches!(SimBuilder::new(cfg).build(), Err(SimError::Core(_))));
    }

    #[test]
    fn default_sequences_need_four_floors() {
        let cfg = SimConfig { floor_count: 3, ..SimConfig::default() };
        assert!(matches!(SimBuilder::new(cfg).build(), Err(SimError::Traffic(_))));
    }

    #[test]
    fn out_of_range_sequence_rejected() {
        let seqs = set([Sequence::new("Roof", 5, hm(9, 0), hm(10, 0), [0], [9])]);
        let result = SimBuilder::new(config(1, 4, hm(9, 0), hm(10, 0))).sequences(seqs).build();
        assert!(matches!(result, Err(SimError::Traffic(_))));
    }
}

// ── End-to-end ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn one_car_two_floors() {
        let table = simulate(config(1, 2, hm(9, 0), hm(9, 10)), lobby_to_first()).unwrap();

        assert_eq!(table.headers, ["Elevator 1"]);
        assert_eq!(table.len(), 11, "one row per minute, end inclusive");
        assert_eq!(table.rows[0].time(), "09:00");
        assert_eq!(table.rows[10].time(), "09:10");

        // Row is taken before the 09:00 call is dispatched.
        assert_eq!(table.label("09:00", "Elevator 1"), Some("0|0"));
        for minute in 1..=5 {
            let time = format!("09:{minute:02}");
            assert_eq!(table.label(&time, "Elevator 1"), Some("1|1"), "{time}");
        }
        // 09:05 trip repositions to the lobby first: 1 -> 0 -> 1.
        for minute in 6..=10 {
            let time = format!("09:{minute:02}");
            assert_eq!(table.label(&time, "Elevator 1"), Some("1|3"), "{time}");
        }
    }

    #[test]
    fn summary_counts() {
        let mut sim = SimBuilder::new(config(1, 2, hm(9, 0), hm(9, 10)))
            .sequences(lobby_to_first())
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();

        let summary = sim.summary();
        assert_eq!(summary.ticks, 601);
        assert_eq!(summary.rows, 11);
        assert_eq!(summary.calls_generated, 3);
        assert_eq!(summary.calls_pending, 0);
        assert_eq!(summary.dispatches, 3);
        // The 09:10 trip is committed at dispatch time.
        assert_eq!(summary.distances, [("Elevator 1".to_owned(), 5)]);
    }

    #[test]
    fn busy_label_appears_in_row() {
        let cfg = SimConfig {
            travel_secs: 40,
            floor_secs:  30,
            ..config(1, 2, hm(9, 0), hm(9, 2))
        };
        let table = simulate(cfg, lobby_to_first()).unwrap();
        assert_eq!(table.label("09:01", "Elevator 1"), Some("1|1 (waiting time)"));
        assert_eq!(table.label("09:02", "Elevator 1"), Some("1|1"));
    }

    #[test]
    fn single_instant_window() {
        let table = simulate(config(1, 2, hm(9, 0), hm(9, 0)), lobby_to_first()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows[0].labels, ["0|0"]);
    }

    #[test]
    fn observer_sees_every_tick_and_row() {
        let mut sim = SimBuilder::new(config(1, 2, hm(9, 0), hm(9, 10)))
            .sequences(lobby_to_first())
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let table = sim.run(&mut rec).unwrap();

        assert_eq!(rec.ticks, 601);
        assert_eq!(rec.snapshots, table.rows);
        assert_eq!(rec.ended, Some((Tick::from_hms(9, 10, 1), 0)));
        let dispatch_ticks: Vec<Tick> = rec.dispatches.iter().map(|d| d.0).collect();
        assert_eq!(dispatch_ticks, [hm(9, 0), hm(9, 5), hm(9, 10)]);
        let release_ticks: Vec<Tick> = rec.releases.iter().map(|r| r.0).collect();
        assert_eq!(release_ticks, [Tick::from_hms(9, 0, 25), Tick::from_hms(9, 5, 50)]);
    }

    #[test]
    fn run_ticks_steps_incrementally() {
        let mut sim = SimBuilder::new(config(1, 2, hm(9, 0), hm(9, 10)))
            .sequences(lobby_to_first())
            .build()
            .unwrap();
        sim.run_ticks(61, &mut NoopObserver).unwrap();
        assert_eq!(sim.clock.current, Tick::from_hms(9, 1, 1));
        assert_eq!(sim.result_table().len(), 2);

        let rest = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(rest.len(), 11);
    }
}

// ── Queueing ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod queue_tests {
    use super::*;

    fn every_minute() -> SequenceSet {
        set([Sequence::new("Rush", 1, hm(9, 0), hm(9, 1), [0], [1])])
    }

    #[test]
    fn pending_calls_retried_when_car_frees() {
        // 70 s trips: the 09:01 call waits until 09:01:10.
        let cfg = SimConfig {
            travel_secs: 40,
            floor_secs:  30,
            ..config(1, 2, hm(9, 0), hm(9, 2))
        };
        let mut sim = SimBuilder::new(cfg).sequences(every_minute()).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        let dispatch_ticks: Vec<Tick> = rec.dispatches.iter().map(|d| d.0).collect();
        assert_eq!(dispatch_ticks, [hm(9, 0), Tick::from_hms(9, 1, 10)]);
        assert_eq!(rec.ended.map(|e| e.1), Some(0));
    }

    #[test]
    fn calls_pending_at_end_are_dropped() {
        let cfg = SimConfig {
            travel_secs: 100,
            floor_secs:  30,
            ..config(1, 2, hm(9, 0), hm(9, 1))
        };
        let mut sim = SimBuilder::new(cfg).sequences(every_minute()).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        assert_eq!(rec.dispatches.len(), 1);
        assert_eq!(rec.ended.map(|e| e.1), Some(1));
        let summary = sim.summary();
        assert_eq!(summary.calls_generated, 2);
        assert_eq!(summary.calls_pending, 1);
    }

    #[test]
    fn batch_consumes_all_pending_calls_together() {
        let seqs = set([Sequence::new("Spread", 5, hm(9, 0), hm(9, 0), [0], [1, 2])]);
        let mut sim = SimBuilder::new(config(2, 4, hm(9, 0), hm(9, 1)))
            .sequences(seqs)
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let table = sim.run(&mut rec).unwrap();

        assert_eq!(rec.dispatches.len(), 1);
        let (_, car, route, until) = &rec.dispatches[0];
        assert_eq!(*car, ElevatorId(0));
        assert_eq!(route.to_string(), "0 -> 1, 1 -> 2");
        assert_eq!(*until, Tick::from_hms(9, 0, 50));
        assert_eq!(table.rows[1].labels, ["2|2", "0|0"]);
    }
}

// ── SingleCall mode ───────────────────────────────────────────────────────────

#[cfg(test)]
mod single_call_tests {
    use super::*;

    fn spread() -> SequenceSet {
        set([Sequence::new("Spread", 5, hm(9, 0), hm(9, 0), [0], [1, 2])])
    }

    fn single(cfg: SimConfig) -> SimConfig {
        SimConfig { dispatch_mode: DispatchMode::SingleCall, ..cfg }
    }

    #[test]
    fn each_call_gets_its_own_car() {
        let mut sim = SimBuilder::new(single(config(2, 4, hm(9, 0), hm(9, 1))))
            .sequences(spread())
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let table = sim.run(&mut rec).unwrap();

        let routes: Vec<(ElevatorId, String)> = rec
            .dispatches
            .iter()
            .map(|(_, car, route, _)| (*car, route.to_string()))
            .collect();
        assert_eq!(
            routes,
            [(ElevatorId(0), "0 -> 1".to_owned()), (ElevatorId(1), "0 -> 2".to_owned())]
        );
        assert_eq!(table.rows[1].labels, ["1|1", "2|2"]);
    }

    #[test]
    fn stops_at_first_unassignable_call() {
        let mut sim = SimBuilder::new(single(config(1, 4, hm(9, 0), hm(9, 1))))
            .sequences(spread())
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let table = sim.run(&mut rec).unwrap();

        // Second call waits for the car, which then repositions 1 -> 0.
        assert_eq!(rec.dispatches.len(), 2);
        assert_eq!(rec.dispatches[1].0, Tick::from_hms(9, 0, 25));
        assert_eq!(rec.dispatches[1].2.to_string(), "1 -> 0, 0 -> 2");
        assert_eq!(table.label("09:01", "Elevator 1"), Some("2|4 (waiting time)"));
    }
}

// ── Invariants ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod invariant_tests {
    use super::*;

    /// Checks floor bounds, monotone distance, and busy duration on every
    /// tick of a run.
    struct InvariantChecker {
        floor_count:  u32,
        scheduler:    TravelScheduler,
        last_total:   Vec<u64>,
        busy_until:   HashMap<ElevatorId, Tick>,
        releases:     usize,
        dispatches:   usize,
    }

    impl SimObserver for InvariantChecker {
        fn on_dispatch(&mut self, tick: Tick, elevator: ElevatorId, route: &Route, until: Tick) {
            assert_eq!(
                (until - tick) as u64,
                self.scheduler.duration_secs(route),
                "busy time must equal the schedule length"
            );
            assert!(self.busy_until.insert(elevator, until).is_none(), "assigned while busy");
            self.dispatches += 1;
        }

        fn on_release(&mut self, tick: Tick, elevator: ElevatorId) {
            assert_eq!(self.busy_until.remove(&elevator), Some(tick), "released off schedule");
            self.releases += 1;
        }

        fn on_tick_end(&mut self, _tick: Tick, fleet: &Fleet) {
            for car in fleet.iter() {
                assert!(car.floor().is_within(self.floor_count));
                let last = &mut self.last_total[car.id.index()];
                assert!(car.cumulative_distance() >= *last);
                *last = car.cumulative_distance();
                assert_eq!(car.is_available(), !self.busy_until.contains_key(&car.id));
            }
        }
    }

    fn check(config: SimConfig) {
        let mut checker = InvariantChecker {
            floor_count: config.floor_count,
            scheduler:   TravelScheduler::new(config.travel_secs, config.floor_secs),
            last_total:  vec![0; config.elevator_count as usize],
            busy_until:  HashMap::new(),
            releases:    0,
            dispatches:  0,
        };
        let mut sim = SimBuilder::new(config).build().unwrap();
        sim.run(&mut checker).unwrap();
        assert!(checker.dispatches > 0);
        assert!(checker.releases > 0);
    }

    #[test]
    fn default_office_day_batch() {
        check(SimConfig::default());
    }

    #[test]
    fn default_office_day_single_call() {
        check(SimConfig { dispatch_mode: DispatchMode::SingleCall, ..SimConfig::default() });
    }

    #[test]
    fn identical_inputs_give_identical_tables() {
        let seqs: Vec<Sequence> = SequenceSet::default_office().iter().cloned().collect();
        let forward  = set(seqs.iter().cloned());
        let backward = set(seqs.into_iter().rev());

        let a = simulate(SimConfig::default(), forward).unwrap();
        let b = simulate(SimConfig::default(), backward).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 661);
    }
}
