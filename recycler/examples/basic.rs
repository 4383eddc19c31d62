// Example: a vertical list of 100k rows backed by a handful of recycled views.
use recycler::{
    Bounds, Recycler, RecyclerOptions, Size, SliceSource, StripLayout, TemplateId, Vec2, View,
    ViewFor,
};

#[derive(Debug, Default)]
struct Label {
    text: String,
    bounds: Bounds,
    visible: bool,
}

impl View for Label {
    fn place(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.visible = true;
    }

    fn detach(&mut self) {
        self.visible = false;
    }
}

impl ViewFor<String> for Label {
    fn set(&mut self, value: &String) {
        self.text.clone_from(value);
    }
}

fn main() {
    let options = RecyclerOptions::new(Size::new(320.0, 200.0)).with_buffer(2);
    let mut list = Recycler::new(options, StripLayout::vertical(20.0), |_: TemplateId| {
        Label::default()
    });

    let items: Vec<String> = (0..100_000).map(|i| format!("row #{i}")).collect();
    let stats = list.set_source(SliceSource::new(items));
    println!("content={:?} window={:?} {stats:?}", list.content_size(), list.window());

    for y in [15.0, 40.0, 400.0, 1_000_000.0] {
        let stats = list.apply_scroll_offset(Vec2::new(0.0, y));
        println!("scroll y={y}: window={:?} {stats:?}", list.window());
    }

    let target = list.centered_offset(12_345);
    list.apply_scroll_offset(target);
    list.for_each_active(|i, label| {
        println!("{i:>6} @ {:>7.1}: {}", label.bounds.y, label.text);
    });
    println!("pooled={}", list.pool().len());
}
