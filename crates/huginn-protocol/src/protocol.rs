//! Superdense-coding circuit construction and result extraction.

use tracing::{debug, instrument};

use huginn_hal::{Backend, Counts};
use huginn_ir::{Circuit, IrResult};

use crate::error::{ProtocolError, ProtocolResult};
use crate::message::Message;

/// The outcome of one protocol run.
#[derive(Debug, Clone)]
pub struct ProtocolRun {
    /// The message that was encoded.
    pub input: Message,
    /// The decoded bitstring (most frequent outcome).
    pub decoded: String,
    /// Measurement counts over all shots.
    pub counts: Counts,
    /// Fraction of shots that reproduced the input message exactly.
    pub success_rate: f64,
    /// Number of shots executed.
    pub shots: u32,
    /// The circuit that was executed, for rendering.
    pub circuit: Circuit,
}

/// Build the superdense-coding circuit for a message.
///
/// Alice holds `q[0]`, Bob holds `q[1]`. The circuit shares a Bell pair,
/// encodes the message with at most two gates on Alice's qubit, disentangles,
/// and measures `q[0] → c[0]`, `q[1] → c[1]`.
pub fn encode_circuit(message: Message) -> IrResult<Circuit> {
    let mut qc = Circuit::new("superdense");
    let q = qc.add_qreg("q", 2);
    let c = qc.add_creg("c", 2);
    let (alice, bob) = (q[0], q[1]);

    // 1) Share entanglement
    qc.h(alice)?.cx(alice, bob)?;

    // 2) Alice encodes. The X-before-Z order for "11" is semantic: it fixes
    //    which Bell state the pair lands in.
    match message {
        Message::B00 => {}
        Message::B01 => {
            qc.z(alice)?;
        }
        Message::B10 => {
            qc.x(alice)?;
        }
        Message::B11 => {
            qc.x(alice)?.z(alice)?;
        }
    }

    // 3) Bob decodes
    qc.cx(alice, bob)?.h(alice)?;

    // 4) Measure
    qc.measure(alice, c[0])?.measure(bob, c[1])?;

    Ok(qc)
}

/// Fraction of shots whose outcome equals the input message exactly.
///
/// 0.0 when the input never appears in the counts; 1.0 for a perfect
/// noiseless run.
pub fn success_rate(counts: &Counts, message: Message, shots: u32) -> f64 {
    if shots == 0 {
        return 0.0;
    }
    counts.get(message.as_str()) as f64 / f64::from(shots)
}

/// Run the full protocol: encode, execute, decode.
#[instrument(skip(backend), fields(backend = backend.name()))]
pub async fn run(
    backend: &dyn Backend,
    message: Message,
    shots: u32,
) -> ProtocolResult<ProtocolRun> {
    let circuit = encode_circuit(message)?;

    let job_id = backend.submit(&circuit, shots).await?;
    debug!("submitted superdense job {job_id}");
    let result = backend.wait(&job_id).await?;

    let decoded = result
        .counts
        .most_frequent()
        .map(|(bitstring, _)| bitstring.to_string())
        .ok_or(ProtocolError::EmptyCounts)?;
    let success_rate = success_rate(&result.counts, message, result.shots);

    debug!(%message, %decoded, success_rate, "protocol run complete");

    Ok(ProtocolRun {
        input: message,
        decoded,
        counts: result.counts,
        success_rate,
        shots: result.shots,
        circuit,
    })
}
