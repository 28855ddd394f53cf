use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_slots::core::{SlotConfig, SpinController};
use tui_slots::term::{FrameBuffer, GlyphTextures, Hud, MachineView, Viewport};
use tui_slots::types::{SpinAction, SpinPhase, TICK_MS};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn spinning_frames_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut machine =
        SpinController::new(SlotConfig::with_seed(1), GlyphTextures::unicode()).unwrap();
    let mut hud = Hud::new();
    let view = MachineView::default();
    let vp = Viewport::new(60, 24);
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    // Warm-up: one full spin, including evaluation and any win message.
    machine.handle_action(SpinAction::Spin, 0, &mut hud);
    let mut now = 0;
    while machine.phase() != SpinPhase::Idle {
        now += TICK_MS as u64;
        hud.tick(now);
        machine.tick(now, &mut hud);
    }
    view.render_into(&machine, &hud, vp, &mut fb);

    let allocs = with_alloc_counting(|| {
        machine.handle_action(SpinAction::Spin, now, &mut ());
        for _ in 0..60 {
            now += TICK_MS as u64;
            machine.tick(now, &mut ());
            hud.tick(now);
            view.render_into(&machine, &hud, vp, &mut fb);
        }

        // A forced stop reschedules every reel tween.
        machine.handle_action(SpinAction::Stop, now, &mut ());
        while machine.phase() == SpinPhase::Stopping {
            now += TICK_MS as u64;
            machine.tick(now, &mut ());
            view.render_into(&machine, &hud, vp, &mut fb);
        }
    });

    assert_eq!(allocs, 0);
}
