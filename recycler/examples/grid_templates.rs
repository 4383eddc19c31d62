// Example: a grid with two view templates (headers every tenth cell).
use recycler::{
    Axis, Bounds, DataSource, GridLayout, Padding, Recycler, RecyclerOptions, Size, TemplateId,
    Vec2, View,
};

const CELL: TemplateId = TemplateId(0);
const HEADER: TemplateId = TemplateId(1);

#[derive(Debug)]
struct Tile {
    template: TemplateId,
    caption: String,
}

impl View for Tile {
    fn place(&mut self, _bounds: Bounds) {}

    fn detach(&mut self) {}
}

struct Photos {
    count: usize,
}

impl DataSource<Tile> for Photos {
    fn count(&self) -> usize {
        self.count
    }

    fn bind(&mut self, view: &mut Tile, index: usize) {
        view.caption = match view.template {
            HEADER => format!("section {}", index / 10),
            _ => format!("photo {index}"),
        };
    }

    fn template_at(&self, index: usize) -> Option<TemplateId> {
        (index % 10 == 0).then_some(HEADER)
    }
}

fn main() {
    let layout = GridLayout::new(Axis::Vertical, Size::new(64.0, 64.0), 4)
        .with_spacing(Vec2::new(4.0, 4.0))
        .with_padding(Padding::uniform(8.0));
    let options = RecyclerOptions::new(Size::new(280.0, 300.0)).with_default_template(Some(CELL));
    let mut grid = Recycler::new(options, layout, |template: TemplateId| Tile {
        template,
        caption: String::new(),
    });

    grid.set_source(Photos { count: 2_000 });
    for step in 0..5 {
        let stats = grid.apply_scroll_offset(Vec2::new(0.0, step as f32 * 150.0));
        println!(
            "window={:?} built={} reused={} headers pooled={}",
            grid.window(),
            stats.built,
            stats.reused,
            grid.pool().count_of(HEADER)
        );
    }
    if let Some(tile) = grid.view(grid.start_index()) {
        println!("first active: {}", tile.caption);
    }
}
