use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_snake::core::{GameConfig, GameSnapshot, GameState};
use tui_snake::term::{FrameBuffer, GameView, Viewport};
use tui_snake::types::{Cell, Direction};

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
fn tick_snapshot_and_render_do_not_allocate() {
    // Classic layout heading right along row 10; the fruit sits out of the way.
    let config = GameConfig::default().with_fruit(Cell::new(0, 0));
    let mut gs = GameState::with_config(config).unwrap();
    gs.start();

    let view = GameView::default();
    let vp = Viewport::new(120, 50);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    // Warm-up: lets the body deque and snapshot buffers reach steady capacity.
    let _ = gs.tick(100);
    gs.snapshot_into(&mut snap);
    view.render_into(&snap, vp, &mut fb);

    let allocs = with_alloc_counting(|| {
        for i in 0..20 {
            if i == 10 {
                let _ = gs.request_direction(Direction::Down);
            }
            let _ = gs.tick(100);
            gs.snapshot_into(&mut snap);
            view.render_into(&snap, vp, &mut fb);
        }
    });

    assert!(!gs.game_over());
    assert_eq!(allocs, 0);
}
