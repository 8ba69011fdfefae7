//! Invariants that every policy must satisfy, checked over seeded random
//! workloads.

use std::collections::HashSet;

use u_cpusched::models::{Occupant, Process};
use u_cpusched::scheduler::{simulate_all, Policy, SimulationOutcome, Simulator};
use u_cpusched::workload::WorkloadSpec;

const SEEDS: u64 = 64;

fn workloads() -> impl Iterator<Item = Vec<Process>> {
    let spec = WorkloadSpec::new(8)
        .with_max_arrival(25)
        .with_burst_range(1, 7)
        .with_priority_levels(4);
    (0..SEEDS).map(move |seed| spec.generate_seeded(seed))
}

fn policies() -> Vec<Policy> {
    let mut all = Policy::all(1).to_vec();
    all.push(Policy::RoundRobin { quantum: 3 });
    all.push(Policy::RoundRobin { quantum: 100 });
    all
}

fn run(policy: Policy, processes: &[Process]) -> SimulationOutcome {
    Simulator::new(policy).run(processes).unwrap()
}

#[test]
fn metrics_are_consistent() {
    for processes in workloads() {
        for policy in policies() {
            let outcome = run(policy, &processes);
            for p in &outcome.processes {
                let completion = p.completion.unwrap();
                let turnaround = p.turnaround.unwrap();
                let waiting = p.waiting.unwrap();
                assert!(completion > p.arrival, "{policy}: {p:?}");
                assert_eq!(turnaround, completion - p.arrival, "{policy}: {p:?}");
                assert_eq!(waiting, turnaround - p.burst, "{policy}: {p:?}");
                assert!(waiting >= 0, "{policy}: {p:?}");
                assert_eq!(p.remaining, 0);
            }
        }
    }
}

#[test]
fn timeline_covers_clock_without_gaps() {
    for processes in workloads() {
        for policy in policies() {
            let outcome = run(policy, &processes);
            let timeline = &outcome.timeline;
            assert!(timeline.is_contiguous(), "{policy}: {timeline:?}");

            let total: i64 = timeline.slices().iter().map(|s| s.duration()).sum();
            assert_eq!(total, outcome.makespan());

            let last_completion = outcome
                .processes
                .iter()
                .filter_map(|p| p.completion)
                .max()
                .unwrap();
            assert_eq!(outcome.makespan(), last_completion);

            let occupants: HashSet<&str> = timeline
                .slices()
                .iter()
                .filter_map(|s| s.occupant.process_id())
                .collect();
            let ids: HashSet<&str> = processes.iter().map(|p| p.id.as_str()).collect();
            assert_eq!(occupants, ids);
        }
    }
}

#[test]
fn execution_time_is_conserved() {
    for processes in workloads() {
        for policy in policies() {
            let outcome = run(policy, &processes);
            for p in &processes {
                assert_eq!(outcome.timeline.busy_time_of(&p.id), p.burst, "{policy}: {}", p.id);
            }
            // The last slice of each process ends at its completion.
            for p in &outcome.processes {
                let last = outcome.timeline.slices_for(&p.id).last().map(|s| s.end);
                assert_eq!(last, p.completion);
            }
        }
    }
}

#[test]
fn no_dispatch_before_arrival() {
    for processes in workloads() {
        for policy in policies() {
            let outcome = run(policy, &processes);
            for slice in outcome.timeline.slices() {
                if let Occupant::Process(id) = &slice.occupant {
                    let p = outcome.process(id).unwrap();
                    assert!(slice.start >= p.arrival, "{policy}: {slice:?}");
                }
            }
        }
    }
}

#[test]
fn idle_only_when_nothing_is_ready() {
    for processes in workloads() {
        for policy in policies() {
            let outcome = run(policy, &processes);
            for slice in outcome.timeline.slices() {
                if slice.occupant.is_idle() {
                    // Nobody unfinished may have arrived during the idle gap.
                    for p in &outcome.processes {
                        let waiting_during_gap =
                            p.arrival < slice.end && p.completion.unwrap() > slice.start;
                        assert!(!waiting_during_gap, "{policy}: {} during {slice:?}", p.id);
                    }
                }
            }
        }
    }
}

#[test]
fn policies_share_makespan_and_idle_time() {
    for processes in workloads() {
        let outcomes = simulate_all(&processes, 2).unwrap();
        let makespan = outcomes[0].makespan();
        let idle = outcomes[0].timeline.idle_time();
        for outcome in &outcomes {
            assert_eq!(outcome.makespan(), makespan, "{}", outcome.policy);
            assert_eq!(outcome.timeline.idle_time(), idle, "{}", outcome.policy);
        }
    }
}

#[test]
fn srtf_minimizes_average_waiting() {
    for processes in workloads() {
        let outcomes = simulate_all(&processes, 2).unwrap();
        let srtf = outcomes
            .iter()
            .find(|o| o.policy == Policy::Srtf)
            .unwrap()
            .kpi()
            .avg_waiting;
        for outcome in &outcomes {
            assert!(srtf <= outcome.kpi().avg_waiting + 1e-9, "{}", outcome.policy);
        }
    }
}

#[test]
fn non_preemptive_policies_run_each_process_once() {
    for processes in workloads() {
        for policy in [Policy::Fcfs, Policy::Sjf, Policy::Priority] {
            let outcome = run(policy, &processes);
            for p in &processes {
                assert_eq!(outcome.timeline.slices_for(&p.id).len(), 1, "{policy}: {}", p.id);
            }
        }
    }
}

#[test]
fn srtf_timeline_is_merged() {
    for processes in workloads() {
        let outcome = run(Policy::Srtf, &processes);
        for pair in outcome.timeline.slices().windows(2) {
            assert_ne!(pair[0].occupant, pair[1].occupant);
        }
    }
}

#[test]
fn round_robin_slices_never_exceed_quantum() {
    for processes in workloads() {
        for quantum in [1, 2, 3, 5] {
            let outcome = run(Policy::RoundRobin { quantum }, &processes);
            for slice in outcome.timeline.slices() {
                if !slice.occupant.is_idle() {
                    assert!(slice.duration() <= quantum, "q={quantum}: {slice:?}");
                }
            }
        }
    }
}

#[test]
fn round_robin_requeues_behind_arrivals() {
    for processes in workloads() {
        for quantum in [1, 2, 3] {
            let outcome = run(Policy::RoundRobin { quantum }, &processes);
            let timeline = &outcome.timeline;
            for x in &outcome.processes {
                for pair in timeline.slices_for(&x.id).windows(2) {
                    let (previous, next) = (pair[0], pair[1]);
                    // Everyone queued when X was preempted runs before X again.
                    for y in &outcome.processes {
                        let queued = y.id != x.id
                            && y.arrival <= previous.end
                            && y.completion.unwrap() > previous.end;
                        if !queued {
                            continue;
                        }
                        let ran_between = timeline
                            .slices_for(&y.id)
                            .iter()
                            .any(|s| s.start >= previous.end && s.start < next.start);
                        assert!(
                            ran_between,
                            "q={quantum}: {} skipped between {previous:?} and {next:?}",
                            y.id
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn round_robin_with_huge_quantum_matches_fcfs() {
    for processes in workloads() {
        let fcfs = run(Policy::Fcfs, &processes);
        let rr = run(Policy::RoundRobin { quantum: 1_000 }, &processes);
        assert_eq!(fcfs.processes, rr.processes);
        assert_eq!(fcfs.timeline, rr.timeline);
    }
}

#[test]
fn runs_are_idempotent() {
    for processes in workloads() {
        for policy in policies() {
            let first = run(policy, &processes);
            let second = run(policy, &processes);
            assert_eq!(first, second, "{policy}");
        }
    }
}

#[test]
fn single_process_has_no_wait() {
    for (arrival, burst) in [(0, 1), (0, 7), (5, 3), (12, 1)] {
        let processes = vec![Process::new("P1", arrival, burst).with_priority(0)];
        for policy in policies() {
            let outcome = run(policy, &processes);
            let p = &outcome.processes[0];
            assert_eq!(p.completion, Some(arrival + burst), "{policy}");
            assert_eq!(p.waiting, Some(0), "{policy}");
        }
    }
}
