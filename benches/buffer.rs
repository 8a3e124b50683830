//! Benchmarks for hot-path buffer operations.
//!
//! Models realistic terminal workloads: a front-end streaming decoded text
//! through `write`, editors inserting mid-line, and sustained scrolling
//! into a bounded scrollback. Sizes match real usage:
//!
//! - **80x24**: Classic terminal (ssh, tmux panes).
//! - **120x50**: Modern half-screen split.
//! - **240x80**: Full-screen 4K terminal.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use termbuf::{Column, Row, TerminalBuffer};

/// Terminal sizes that represent real usage.
const SIZES: [(usize, usize); 3] = [
    (80, 24),   // Classic VT100.
    (120, 50),  // Modern split pane.
    (240, 80),  // Full-screen 4K.
];

const SCROLLBACK: usize = 10_000;

/// Mostly ASCII with occasional wide chars, like compiler output or logs.
/// The common case for `write`.
fn ascii_heavy_line(cols: usize) -> String {
    let mut text = String::with_capacity(cols * 2);
    let mut used = 0;
    while used < cols {
        if used % 20 == 19 && used + 2 <= cols {
            text.push('好');
            used += 2;
        } else {
            text.push((b'a' + (used % 26) as u8) as char);
            used += 1;
        }
    }
    text
}

/// All CJK: every code point takes the wide path.
fn cjk_heavy_line(cols: usize) -> String {
    let cjk: Vec<char> = "漢字混在表示速度測定用".chars().collect();
    (0..cols / 2).map(|i| cjk[i % cjk.len()]).collect()
}

fn bench_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("write");
    for (cols, rows) in SIZES {
        let ascii = ascii_heavy_line(cols);
        group.bench_with_input(
            BenchmarkId::new("ascii_screen", format!("{cols}x{rows}")),
            &(cols, rows),
            |b, &(cols, rows)| {
                b.iter(|| {
                    let mut buf = TerminalBuffer::new(cols, rows, SCROLLBACK).unwrap();
                    for row in 0..rows {
                        buf.set_cursor(Column(0), Row(row));
                        buf.write(black_box(&ascii));
                    }
                    buf
                });
            },
        );

        let cjk = cjk_heavy_line(cols);
        group.bench_with_input(
            BenchmarkId::new("cjk_screen", format!("{cols}x{rows}")),
            &(cols, rows),
            |b, &(cols, rows)| {
                b.iter(|| {
                    let mut buf = TerminalBuffer::new(cols, rows, SCROLLBACK).unwrap();
                    for row in 0..rows {
                        buf.set_cursor(Column(0), Row(row));
                        buf.write(black_box(&cjk));
                    }
                    buf
                });
            },
        );
    }
    group.finish();
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for (cols, rows) in SIZES {
        let ascii = ascii_heavy_line(cols);
        group.bench_with_input(
            BenchmarkId::new("mid_line_wrap", format!("{cols}x{rows}")),
            &(cols, rows),
            |b, &(cols, rows)| {
                // Full screen so every insert wraps through every row below.
                let mut base = TerminalBuffer::new(cols, rows, SCROLLBACK).unwrap();
                for row in 0..rows {
                    base.set_cursor(Column(0), Row(row));
                    base.write(&ascii);
                }
                b.iter(|| {
                    let mut buf = base.clone();
                    buf.set_cursor(Column(cols / 2), Row(0));
                    buf.insert(black_box("inserted"));
                    buf
                });
            },
        );
    }
    group.finish();
}

fn bench_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll");
    for (cols, rows) in SIZES {
        let ascii = ascii_heavy_line(cols);
        group.bench_with_input(
            BenchmarkId::new("sustained_output", format!("{cols}x{rows}")),
            &(cols, rows),
            |b, &(cols, rows)| {
                // `yes`-style output: write the bottom row, scroll, repeat.
                b.iter(|| {
                    let mut buf = TerminalBuffer::new(cols, rows, SCROLLBACK).unwrap();
                    for _ in 0..200 {
                        buf.set_cursor(Column(0), Row(rows - 1));
                        buf.write(black_box(&ascii));
                        buf.insert_empty_line_at_bottom();
                    }
                    buf
                });
            },
        );
    }
    group.finish();
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize");
    for (cols, rows) in SIZES {
        let ascii = ascii_heavy_line(cols);
        group.bench_with_input(
            BenchmarkId::new("shrink_grow", format!("{cols}x{rows}")),
            &(cols, rows),
            |b, &(cols, rows)| {
                let mut base = TerminalBuffer::new(cols, rows, SCROLLBACK).unwrap();
                for row in 0..rows {
                    base.set_cursor(Column(0), Row(row));
                    base.write(&ascii);
                }
                b.iter(|| {
                    let mut buf = base.clone();
                    buf.resize(cols / 2, rows / 2).unwrap();
                    buf.resize(cols, rows).unwrap();
                    buf
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_write, bench_insert, bench_scroll, bench_resize);
criterion_main!(benches);
