use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_slots::core::{evaluate, NoTextures, SlotConfig, SpinController};
use tui_slots::term::{FrameBuffer, GlyphTextures, Hud, MachineView, Viewport};
use tui_slots::types::{SpinAction, SpinPhase, SymbolType, TICK_MS};

fn bench_spinning_tick(c: &mut Criterion) {
    let config = SlotConfig {
        initial_balance: u32::MAX,
        ..SlotConfig::with_seed(12345)
    };
    let mut machine = SpinController::new(config, NoTextures).unwrap();
    let mut now = 0u64;

    c.bench_function("spinning_tick_16ms", |b| {
        b.iter(|| {
            if machine.phase() == SpinPhase::Idle {
                machine.handle_action(SpinAction::Spin, now, &mut ());
            }
            now += TICK_MS as u64;
            machine.tick(black_box(now), &mut ());
        })
    });
}

fn bench_full_spin(c: &mut Criterion) {
    let config = SlotConfig {
        initial_balance: u32::MAX,
        ..SlotConfig::with_seed(7)
    };
    let mut machine = SpinController::new(config, NoTextures).unwrap();
    let mut now = 0u64;

    c.bench_function("full_spin", |b| {
        b.iter(|| {
            machine.handle_action(SpinAction::Spin, now, &mut ());
            while machine.phase() != SpinPhase::Idle {
                now += TICK_MS as u64;
                machine.tick(now, &mut ());
            }
            black_box(machine.balance());
        })
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let combos = [
        [SymbolType::Sym1, SymbolType::Sym2, SymbolType::Sym3],
        [SymbolType::Sym4, SymbolType::Sym4, SymbolType::Sym2],
        [SymbolType::Sym6, SymbolType::Sym6, SymbolType::Sym6],
    ];

    c.bench_function("evaluate", |b| {
        b.iter(|| {
            for symbols in &combos {
                black_box(evaluate(black_box(symbols), 1));
            }
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut machine =
        SpinController::new(SlotConfig::with_seed(3), GlyphTextures::unicode()).unwrap();
    let hud = Hud::new();
    machine.handle_action(SpinAction::Spin, 0, &mut ());
    machine.tick(800, &mut ());

    let view = MachineView::default();
    let vp = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    c.bench_function("render_machine", |b| {
        b.iter(|| {
            view.render_into(&machine, &hud, vp, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_spinning_tick,
    bench_full_spin,
    bench_evaluate,
    bench_render
);
criterion_main!(benches);
