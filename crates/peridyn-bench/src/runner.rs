//! Benchmark runner: times the evaluators on a scenario and collects metrics.

use peridyn_compute::BackendKind;
use peridyn_math::Vec3;
use peridyn_solver::{
    DamageSummary, Evaluator, EvaluatorConfig, ForceSummary, KernelReport, StepInputs,
};
use peridyn_telemetry::{EventEmitter, EventKind, SimulationEvent};
use peridyn_types::{PeridynError, PeridynResult};

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::{Scenario, ScenarioKind};

/// Runs benchmark scenarios and collects metrics.
///
/// When an emitter is attached, every timestep reports its kernels and,
/// after the last one, summaries of the damage and force fields.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkRunner {
    emitter: Option<EventEmitter>,
}

impl BenchmarkRunner {
    /// Creates a runner that emits no telemetry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports telemetry through `emitter`.
    pub fn with_emitter(mut self, emitter: EventEmitter) -> Self {
        self.emitter = Some(emitter);
        self
    }

    fn emit(&self, timestep: u32, kind: EventKind) {
        if let Some(emitter) = &self.emitter {
            emitter.emit(SimulationEvent::new(timestep, kind));
        }
    }

    fn emit_kernel(&self, timestep: u32, evaluator: &Evaluator, report: &KernelReport) {
        self.emit(
            timestep,
            EventKind::KernelDispatched {
                kernel: report.kernel.name().to_string(),
                backend: evaluator.backend().name().to_string(),
                node_count: report.node_count,
                wall_time: report.wall_time,
            },
        );
    }

    fn reject(&self, timestep: u32, error: &PeridynError) {
        self.emit(
            timestep,
            EventKind::PreconditionFailure {
                message: error.to_string(),
            },
        );
    }

    /// Run a single scenario with the given evaluator.
    ///
    /// Each timestep runs the damage and force kernels on their own and
    /// then once more as a combined step.
    pub fn run(&self, scenario: &Scenario, evaluator: &Evaluator) -> PeridynResult<BenchmarkMetrics> {
        let n = scenario.node_count();
        let nlist = scenario.nlist.view();
        let inputs = StepInputs {
            r: &scenario.r,
            r0: &scenario.nodes.coords,
            nlist,
            volume: &scenario.nodes.volume,
            family: &scenario.nodes.family,
        };

        let mut damage = vec![0.0; n];
        let mut force = vec![Vec3::ZERO; n];
        let mut step_times: Vec<f64> = Vec::with_capacity(scenario.timesteps as usize);
        let mut damage_time = 0.0;
        let mut force_time = 0.0;

        for t in 0..scenario.timesteps {
            let report = evaluator
                .evaluate_damage(nlist.counts(), inputs.family, &mut damage)
                .inspect_err(|e| self.reject(t, e))?;
            damage_time += report.wall_time;
            self.emit_kernel(t, evaluator, &report);

            let report = evaluator
                .evaluate_bond_force(inputs.r, inputs.r0, &nlist, inputs.volume, &mut force)
                .inspect_err(|e| self.reject(t, e))?;
            force_time += report.wall_time;
            self.emit_kernel(t, evaluator, &report);

            self.emit(
                t,
                EventKind::StepBegin {
                    node_count: n,
                    bond_count: nlist.bond_count(),
                },
            );
            let report = evaluator
                .evaluate_step(inputs, &mut damage, &mut force)
                .inspect_err(|e| self.reject(t, e))?;
            step_times.push(report.wall_time);
            self.emit(t, EventKind::StepEnd { wall_time: report.wall_time });
        }

        let damage_summary = DamageSummary::from_damage(&damage);
        let force_summary = ForceSummary::from_forces(&force);
        let last = scenario.timesteps.saturating_sub(1);
        self.emit(
            last,
            EventKind::Damage {
                max_damage: damage_summary.max_damage,
                mean_damage: damage_summary.mean_damage,
                fully_damaged: damage_summary.fully_damaged,
                non_finite: damage_summary.non_finite,
            },
        );
        self.emit(
            last,
            EventKind::Force {
                max_magnitude: force_summary.max_magnitude,
                net_force: force_summary.net_force.to_array(),
                non_finite: force_summary.non_finite,
            },
        );

        let steps = step_times.len().max(1) as f64;
        let total_wall_time: f64 = step_times.iter().sum();
        let metrics = BenchmarkMetrics {
            scenario: scenario.kind.name().to_string(),
            backend: evaluator.backend().name().to_string(),
            threads: evaluator.backend().thread_count(),
            node_count: n,
            bond_count: nlist.bond_count(),
            timesteps: scenario.timesteps,
            total_wall_time,
            avg_step_time: total_wall_time / steps,
            min_step_time: if step_times.is_empty() {
                0.0
            } else {
                step_times.iter().copied().fold(f64::MAX, f64::min)
            },
            max_step_time: step_times.iter().copied().fold(0.0, f64::max),
            avg_damage_time: damage_time / steps,
            avg_force_time: force_time / steps,
            max_damage: damage_summary.max_damage,
            max_force: force_summary.max_magnitude,
            net_force: force_summary.net_force.length(),
        };

        tracing::info!(
            scenario = %metrics.scenario,
            backend = %metrics.backend,
            nodes = metrics.node_count,
            avg_step_ms = metrics.avg_step_time * 1e3,
            "benchmark finished"
        );
        Ok(metrics)
    }

    /// Run one scenario on each backend in `backends`.
    pub fn run_backends(
        &self,
        scenario: &Scenario,
        config: &EvaluatorConfig,
        backends: &[BackendKind],
    ) -> PeridynResult<Vec<BenchmarkMetrics>> {
        backends
            .iter()
            .map(|&kind| {
                let evaluator = Evaluator::new(config.clone().with_backend(kind))?;
                self.run(scenario, &evaluator)
            })
            .collect()
    }

    /// Run all scenarios at the default size and return metrics for each.
    pub fn run_all(&self, evaluator: &Evaluator) -> PeridynResult<Vec<BenchmarkMetrics>> {
        let mut results = Vec::new();
        for &kind in ScenarioKind::all() {
            let scenario = Scenario::from_kind(kind)?;
            results.push(self.run(&scenario, evaluator)?);
        }
        Ok(results)
    }
}
