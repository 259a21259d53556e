//! Circuit diagram rendering.
//!
//! Draws a conventional gate-on-wire diagram: one horizontal wire per qubit,
//! a double-line classical wire underneath, one column per dependency layer.
//! Controlled gates use dot/⊕ notation; measurements drop a double line onto
//! the classical wire.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use huginn_ir::{Circuit, Instruction, InstructionKind, StandardGate};

use crate::error::RenderResult;
use crate::png::rgb_to_png_base64;

const LEFT_MARGIN: i32 = 72;
const RIGHT_MARGIN: i32 = 24;
const TOP_MARGIN: i32 = 32;
const BOTTOM_MARGIN: i32 = 40;
const WIRE_SPACING: i32 = 56;
const LAYER_WIDTH: i32 = 56;
const GATE_HALF_W: i32 = 17;
const GATE_HALF_H: i32 = 13;

type Canvas<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// Render a circuit diagram and return it as a base64 PNG string.
pub fn circuit_png_base64(circuit: &Circuit) -> RenderResult<String> {
    let layers = circuit.layers();
    let num_layers = layers.len().max(1) as i32;
    let num_qubits = circuit.num_qubits() as i32;

    let width = (LEFT_MARGIN + num_layers * LAYER_WIDTH + RIGHT_MARGIN) as u32;
    let height = (TOP_MARGIN + (num_qubits + 1) * WIRE_SPACING + BOTTOM_MARGIN) as u32;

    let mut buffer = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;

        draw_wires(&root, circuit, width as i32)?;

        for layer in &layers {
            let x = LEFT_MARGIN + layer.depth as i32 * LAYER_WIDTH + LAYER_WIDTH / 2;
            for op in &layer.ops {
                draw_op(&root, op, x, classical_wire_y(num_qubits))?;
            }
        }

        root.present()?;
    }

    rgb_to_png_base64(&buffer, width, height)
}

fn qubit_wire_y(qubit: usize) -> i32 {
    TOP_MARGIN + qubit as i32 * WIRE_SPACING + WIRE_SPACING / 2
}

fn classical_wire_y(num_qubits: i32) -> i32 {
    TOP_MARGIN + num_qubits * WIRE_SPACING + WIRE_SPACING / 2
}

fn label_style(size: u32) -> TextStyle<'static> {
    TextStyle::from(("sans-serif", size).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center))
}

fn wire_label_style(size: u32) -> TextStyle<'static> {
    TextStyle::from(("sans-serif", size).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center))
}

fn draw_wires(root: &Canvas<'_>, circuit: &Circuit, width: i32) -> RenderResult<()> {
    let x0 = LEFT_MARGIN - 8;
    let x1 = width - RIGHT_MARGIN;

    for (i, qubit) in circuit.qubits().iter().enumerate() {
        let y = qubit_wire_y(i);
        root.draw(&PathElement::new(vec![(x0, y), (x1, y)], &BLACK))?;
        root.draw(&Text::new(qubit.to_string(), (8, y), wire_label_style(15)))?;
    }

    // Classical register: a double line labeled with its register name.
    let y = classical_wire_y(circuit.num_qubits() as i32);
    root.draw(&PathElement::new(vec![(x0, y - 1), (x1, y - 1)], &BLACK))?;
    root.draw(&PathElement::new(vec![(x0, y + 2), (x1, y + 2)], &BLACK))?;
    let label = circuit
        .clbits()
        .first()
        .and_then(|c| c.register.clone())
        .unwrap_or_else(|| "c".to_string());
    root.draw(&Text::new(
        format!("{label}/{}", circuit.num_clbits()),
        (8, y),
        wire_label_style(15),
    ))?;

    Ok(())
}

fn draw_op(root: &Canvas<'_>, op: &Instruction, x: i32, cl_y: i32) -> RenderResult<()> {
    match &op.kind {
        InstructionKind::Gate(gate) => match gate {
            StandardGate::CX => {
                let (cy, ty) = two_qubit_ys(op);
                draw_link(root, x, cy, ty)?;
                draw_control_dot(root, x, cy)?;
                draw_oplus(root, x, ty)
            }
            StandardGate::CY => {
                let (cy, ty) = two_qubit_ys(op);
                draw_link(root, x, cy, ty)?;
                draw_control_dot(root, x, cy)?;
                draw_gate_box(root, x, ty, "Y")
            }
            StandardGate::CZ => {
                let (cy, ty) = two_qubit_ys(op);
                draw_link(root, x, cy, ty)?;
                draw_control_dot(root, x, cy)?;
                draw_control_dot(root, x, ty)
            }
            StandardGate::Swap => {
                let (y1, y2) = two_qubit_ys(op);
                draw_link(root, x, y1, y2)?;
                draw_swap_cross(root, x, y1)?;
                draw_swap_cross(root, x, y2)
            }
            g => {
                let y = qubit_wire_y(op.qubits[0].0 as usize);
                draw_gate_box(root, x, y, gate_label(*g))
            }
        },
        InstructionKind::Measure => {
            for (qubit, _clbit) in op.qubits.iter().zip(&op.clbits) {
                draw_measure(root, x, qubit_wire_y(qubit.0 as usize), cl_y)?;
            }
            Ok(())
        }
        InstructionKind::Barrier => draw_barrier(root, op, x),
    }
}

fn two_qubit_ys(op: &Instruction) -> (i32, i32) {
    (
        qubit_wire_y(op.qubits[0].0 as usize),
        qubit_wire_y(op.qubits[1].0 as usize),
    )
}

fn gate_label(gate: StandardGate) -> &'static str {
    match gate {
        StandardGate::I => "I",
        StandardGate::X => "X",
        StandardGate::Y => "Y",
        StandardGate::Z => "Z",
        StandardGate::H => "H",
        StandardGate::S => "S",
        StandardGate::Sdg => "S†",
        // Two-qubit gates are drawn structurally, not as labeled boxes.
        StandardGate::CX | StandardGate::CY | StandardGate::CZ | StandardGate::Swap => "",
    }
}

fn draw_gate_box(root: &Canvas<'_>, x: i32, y: i32, label: &str) -> RenderResult<()> {
    root.draw(&Rectangle::new(
        [
            (x - GATE_HALF_W, y - GATE_HALF_H),
            (x + GATE_HALF_W, y + GATE_HALF_H),
        ],
        WHITE.filled(),
    ))?;
    root.draw(&Rectangle::new(
        [
            (x - GATE_HALF_W, y - GATE_HALF_H),
            (x + GATE_HALF_W, y + GATE_HALF_H),
        ],
        BLACK.stroke_width(1),
    ))?;
    root.draw(&Text::new(label.to_string(), (x, y), label_style(15)))?;
    Ok(())
}

fn draw_control_dot(root: &Canvas<'_>, x: i32, y: i32) -> RenderResult<()> {
    root.draw(&Circle::new((x, y), 4, BLACK.filled()))?;
    Ok(())
}

fn draw_oplus(root: &Canvas<'_>, x: i32, y: i32) -> RenderResult<()> {
    let r = 9;
    root.draw(&Circle::new((x, y), r, WHITE.filled()))?;
    root.draw(&Circle::new((x, y), r, BLACK.stroke_width(1)))?;
    root.draw(&PathElement::new(vec![(x - r, y), (x + r, y)], &BLACK))?;
    root.draw(&PathElement::new(vec![(x, y - r), (x, y + r)], &BLACK))?;
    Ok(())
}

fn draw_swap_cross(root: &Canvas<'_>, x: i32, y: i32) -> RenderResult<()> {
    let r = 6;
    root.draw(&PathElement::new(
        vec![(x - r, y - r), (x + r, y + r)],
        BLACK.stroke_width(2),
    ))?;
    root.draw(&PathElement::new(
        vec![(x - r, y + r), (x + r, y - r)],
        BLACK.stroke_width(2),
    ))?;
    Ok(())
}

fn draw_link(root: &Canvas<'_>, x: i32, y1: i32, y2: i32) -> RenderResult<()> {
    root.draw(&PathElement::new(vec![(x, y1), (x, y2)], &BLACK))?;
    Ok(())
}

fn draw_measure(root: &Canvas<'_>, x: i32, y: i32, cl_y: i32) -> RenderResult<()> {
    draw_gate_box(root, x, y, "M")?;

    // Double line down to the classical register, ending in an arrowhead.
    root.draw(&PathElement::new(
        vec![(x - 2, y + GATE_HALF_H), (x - 2, cl_y - 8)],
        &BLACK,
    ))?;
    root.draw(&PathElement::new(
        vec![(x + 2, y + GATE_HALF_H), (x + 2, cl_y - 8)],
        &BLACK,
    ))?;
    root.draw(&Polygon::new(
        vec![(x - 5, cl_y - 8), (x + 5, cl_y - 8), (x, cl_y - 1)],
        BLACK.filled(),
    ))?;
    Ok(())
}

fn draw_barrier(root: &Canvas<'_>, op: &Instruction, x: i32) -> RenderResult<()> {
    let top = op
        .qubits
        .iter()
        .map(|q| qubit_wire_y(q.0 as usize))
        .min()
        .unwrap_or(TOP_MARGIN);
    let bottom = op
        .qubits
        .iter()
        .map(|q| qubit_wire_y(q.0 as usize))
        .max()
        .unwrap_or(TOP_MARGIN);
    let grey = RGBColor(160, 160, 160);
    root.draw(&Rectangle::new(
        [
            (x - 3, top - WIRE_SPACING / 2),
            (x + 3, bottom + WIRE_SPACING / 2),
        ],
        grey.mix(0.4).filled(),
    ))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
    use huginn_ir::QubitId;

    fn assert_is_png(encoded: &str) {
        let decoded = BASE64.decode(encoded).unwrap();
        assert_eq!(&decoded[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
    }

    #[test]
    fn test_bell_circuit_renders() {
        let circuit = Circuit::bell().unwrap();
        let encoded = circuit_png_base64(&circuit).unwrap();
        assert_is_png(&encoded);
    }

    #[test]
    fn test_empty_circuit_renders() {
        let circuit = Circuit::with_size("empty", 2, 2);
        let encoded = circuit_png_base64(&circuit).unwrap();
        assert_is_png(&encoded);
    }

    #[test]
    fn test_all_glyphs_render() {
        let mut circuit = Circuit::with_size("glyphs", 2, 2);
        circuit
            .h(QubitId(0))
            .unwrap()
            .id(QubitId(1))
            .unwrap()
            .y(QubitId(0))
            .unwrap()
            .s(QubitId(0))
            .unwrap()
            .sdg(QubitId(1))
            .unwrap()
            .cx(QubitId(0), QubitId(1))
            .unwrap()
            .cz(QubitId(0), QubitId(1))
            .unwrap()
            .cy(QubitId(0), QubitId(1))
            .unwrap()
            .swap(QubitId(0), QubitId(1))
            .unwrap()
            .barrier_all()
            .unwrap()
            .measure_all()
            .unwrap();

        let encoded = circuit_png_base64(&circuit).unwrap();
        assert_is_png(&encoded);
    }
}
