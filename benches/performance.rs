//! Parser and styling throughput

use argkit::{ArgumentParser, Color, PadDirection, TextStyle};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn command_line(flags: usize) -> Vec<String> {
    let mut tokens = vec!["/usr/bin/tool".to_string(), "input.txt".to_string()];
    for i in 0..flags {
        match i % 4 {
            0 => tokens.push(format!("--option-{}=value-{}", i, i)),
            1 => {
                tokens.push(format!("--setting-{}", i));
                tokens.push(format!("{}", i));
            }
            2 => tokens.push("-xvf".to_string()),
            _ => tokens.push(format!("--switch-{}", i)),
        }
    }
    tokens
}

fn bench_parse(c: &mut Criterion) {
    let parser = ArgumentParser::new();
    let short = command_line(8);
    let long = command_line(512);

    c.bench_function("parse_8_flags", |b| b.iter(|| parser.parse(black_box(&short))));
    c.bench_function("parse_512_flags", |b| b.iter(|| parser.parse(black_box(&long))));
}

fn bench_render(c: &mut Criterion) {
    let style = TextStyle::with_enabled("status", true)
        .bold(true)
        .color_foreground(Color::Yellow)
        .highlight_background(true)
        .pad(24, ' ', PadDirection::Both);

    c.bench_function("render_styled", |b| b.iter(|| black_box(&style).render()));
}

criterion_group!(benches, bench_parse, bench_render);
criterion_main!(benches);
