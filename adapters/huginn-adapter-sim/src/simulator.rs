//! Simulator backend implementation.

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing::{debug, instrument};
use uuid::Uuid;

use huginn_hal::{
    Backend, BackendConfig, Capabilities, Counts, ExecutionResult, HalError, HalResult, Job,
    JobId, JobStatus,
};
use huginn_ir::Circuit;

use crate::statevector::Statevector;

/// Job data for the simulator.
struct SimJob {
    job: Job,
    result: Option<ExecutionResult>,
}

/// Local simulator backend.
///
/// This backend simulates quantum circuits using a statevector simulation.
/// It supports circuits up to ~20 qubits (limited by memory).
pub struct SimulatorBackend {
    /// Backend configuration.
    config: BackendConfig,
    /// Cached capabilities.
    capabilities: Capabilities,
    /// Active jobs.
    jobs: Arc<Mutex<FxHashMap<String, SimJob>>>,
}

impl SimulatorBackend {
    /// Create a new simulator backend with default settings.
    pub fn new() -> Self {
        Self::with_max_qubits(20)
    }

    /// Create a simulator with custom max qubits.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self {
            config: BackendConfig::new("simulator"),
            capabilities: Capabilities::simulator(max_qubits),
            jobs: Arc::new(Mutex::new(FxHashMap::default())),
        }
    }

    /// Run simulation synchronously.
    #[instrument(skip(self, circuit))]
    fn run_simulation(&self, circuit: &Circuit, shots: u32) -> ExecutionResult {
        let start = Instant::now();

        let num_qubits = circuit.num_qubits();
        debug!("Starting simulation: {} qubits, {} shots", num_qubits, shots);

        // Apply all gates once; the circuit has no mid-circuit collapse, so
        // every shot samples the same final state.
        let mut sv = Statevector::new(num_qubits);
        for instruction in circuit.instructions() {
            sv.apply(instruction);
        }

        let clbit_map = measured_qubits(circuit);

        // Run shots
        let mut counts = Counts::new();
        for _ in 0..shots {
            let outcome = sv.sample();
            counts.insert(outcome_to_bitstring(outcome, &clbit_map), 1);
        }

        let elapsed = start.elapsed();
        debug!("Simulation completed in {:?}", elapsed);

        ExecutionResult::new(counts, shots).with_execution_time(elapsed.as_millis() as u64)
    }
}

/// Map each classical bit to the qubit measured into it, if any.
///
/// Later measurements into the same classical bit override earlier ones.
fn measured_qubits(circuit: &Circuit) -> Vec<Option<usize>> {
    let mut map = vec![None; circuit.num_clbits()];
    for instruction in circuit.instructions() {
        if instruction.is_measure() {
            for (qubit, clbit) in instruction.qubits.iter().zip(&instruction.clbits) {
                map[clbit.0 as usize] = Some(qubit.0 as usize);
            }
        }
    }
    map
}

/// Assemble a classical bitstring from a sampled basis-state index.
///
/// The classical register is printed most-significant bit first: the leftmost
/// character is the highest-numbered classical bit. Bits that were never
/// measured read as '0'.
fn outcome_to_bitstring(outcome: usize, clbit_map: &[Option<usize>]) -> String {
    clbit_map
        .iter()
        .rev()
        .map(|mapped| match mapped {
            Some(qubit) if outcome >> qubit & 1 == 1 => '1',
            _ => '0',
        })
        .collect()
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for SimulatorBackend {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    async fn is_available(&self) -> HalResult<bool> {
        Ok(true)
    }

    #[instrument(skip(self, circuit))]
    async fn submit(&self, circuit: &Circuit, shots: u32) -> HalResult<JobId> {
        // Validate circuit size
        if circuit.num_qubits() > self.capabilities.num_qubits as usize {
            return Err(HalError::CircuitTooLarge(format!(
                "Circuit has {} qubits but simulator only supports {}",
                circuit.num_qubits(),
                self.capabilities.num_qubits
            )));
        }

        // Validate shots
        if shots == 0 {
            return Err(HalError::InvalidShots("shots must be positive".into()));
        }
        if shots > self.capabilities.max_shots {
            return Err(HalError::InvalidShots(format!(
                "{} shots requested but simulator allows at most {}",
                shots, self.capabilities.max_shots
            )));
        }

        // Generate job ID
        let job_id = JobId::new(Uuid::new_v4().to_string());

        // Create job
        let job = Job::new(job_id.clone(), shots).with_backend("simulator");

        let sim_job = SimJob { job, result: None };

        // Store job
        {
            let mut jobs = self
                .jobs
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            jobs.insert(job_id.0.clone(), sim_job);
        }

        debug!("Submitted job: {}", job_id);

        // Run simulation immediately (in a real implementation, this would be async)
        let result = self.run_simulation(circuit, shots);

        // Update job with result
        {
            let mut jobs = self
                .jobs
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            if let Some(sim_job) = jobs.get_mut(&job_id.0) {
                sim_job.result = Some(result);
                sim_job.job = sim_job.job.clone().with_status(JobStatus::Completed);
            }
        }

        Ok(job_id)
    }

    async fn status(&self, job_id: &JobId) -> HalResult<JobStatus> {
        let jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        jobs.get(&job_id.0)
            .map(|j| j.job.status.clone())
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))
    }

    async fn result(&self, job_id: &JobId) -> HalResult<ExecutionResult> {
        let jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        jobs.get(&job_id.0)
            .and_then(|j| j.result.clone())
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))
    }

    async fn cancel(&self, job_id: &JobId) -> HalResult<()> {
        let mut jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(sim_job) = jobs.get_mut(&job_id.0) {
            sim_job.job = sim_job.job.clone().with_status(JobStatus::Cancelled);
            Ok(())
        } else {
            Err(HalError::JobNotFound(job_id.0.clone()))
        }
    }
}
