use recycler::{Bounds, DataSource, RecyclerOptions, Size, StripLayout, TemplateId, View};
use recycler_adapter::{Controller, Easing};

#[derive(Default)]
struct Row {
    index: usize,
}

impl View for Row {
    fn place(&mut self, _bounds: Bounds) {}

    fn detach(&mut self) {}
}

struct Numbers;

impl DataSource<Row> for Numbers {
    fn count(&self) -> usize {
        10_000
    }

    fn bind(&mut self, view: &mut Row, index: usize) {
        view.index = index;
    }
}

fn main() {
    // Example: a frame loop driving an animated "scroll to index" without holding any UI
    // objects. An adapter would write the offset returned by `tick` back to its scroll surface.
    let options = RecyclerOptions::new(Size::new(200.0, 400.0));
    let mut c = Controller::new(options, StripLayout::vertical(24.0), |_: TemplateId| {
        Row::default()
    });
    c.recycler_mut().set_source(Numbers);

    let target = c.start_tween_to_index(2_000, 0, 240, Easing::SmoothStep);
    println!("target_offset={target:?}");

    let mut now_ms = 0u64;
    while let Some(off) = c.tick(now_ms) {
        if now_ms % 80 == 0 {
            println!("t={now_ms} off={:.1} window={:?}", off.y, c.recycler().window());
        }
        now_ms += 16;
    }

    let centered = c.recycler().view(2_000).map(|r| r.index);
    println!("done: window={:?} centered={centered:?}", c.recycler().window());
}
