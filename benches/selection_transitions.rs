use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use gridclip::{
    core::{
        raw_msg::{GridEvent, GridTarget, Modifiers, RawMsg},
        translator::translate_raw_to_domain,
    },
    domain::{
        grid::ColumnDef,
        selection::{toggle_ctrl, CellCoord},
    },
    update, AppState,
};

fn wide_grid() -> AppState {
    let columns = (0..500)
        .map(|i| {
            let column = ColumnDef::new(format!("col{i}"));
            if i % 50 == 0 {
                column.locked()
            } else {
                column
            }
        })
        .collect();
    AppState::new("1", columns, 1_000_000)
}

/// A shift drag across the grid: press, a hover per cell, press again
fn drag(rows: usize) -> Vec<RawMsg> {
    let mut events = vec![RawMsg::Pointer(GridEvent::press(
        GridTarget::Cell(CellCoord::new(1, 1)),
        Modifiers::SHIFT,
    ))];
    events.extend((1..=rows).map(|i| {
        RawMsg::Pointer(GridEvent::hover(
            GridTarget::Cell(CellCoord::new(i, i % 400 + 1)),
            Modifiers::SHIFT,
        ))
    }));
    events.push(RawMsg::Pointer(GridEvent::press(
        GridTarget::Cell(CellCoord::new(rows, 400)),
        Modifiers::SHIFT,
    )));
    events
}

fn replay(state: AppState, events: &[RawMsg]) -> AppState {
    events.iter().fold(state, |state, raw| {
        translate_raw_to_domain(raw.clone(), &state)
            .into_iter()
            .fold(state, |state, msg| update(msg, state).0)
    })
}

fn benchmark(c: &mut Criterion) {
    let state = wide_grid();
    let events = drag(1_000);
    c.bench_function("cell drag 1000 hovers", |b| {
        b.iter(|| replay(black_box(state.clone()), black_box(&events)))
    });

    c.bench_function("ctrl toggle 200 indices", |b| {
        b.iter(|| {
            (1..=200).chain((1..=200).step_by(3)).fold(Vec::new(), |acc, i| {
                toggle_ctrl(black_box(&acc), i)
            })
        })
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
