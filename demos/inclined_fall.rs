use macroquad::color::BLACK;
use macroquad::window::{clear_background, next_frame};

use physics::scenarios::{InclinedFall, Scenario};
use physics::World;

mod shared;

struct GameState {
    scenario: InclinedFall,
    world: World,
}

impl GameState {
    fn new() -> Self {
        let scenario = InclinedFall {};
        let world = scenario.create();
        Self { scenario, world }
    }

    fn update(&mut self) {
        self.world.step();
        self.scenario.update(&mut self.world);
    }

    fn render(&self) {
        use shared::draw::Draw;
        clear_background(BLACK);
        for (_, body) in self.world.bodies() {
            body.draw();
        }
    }
}

#[macroquad::main("inclined_fall")]
async fn main() {
    shared::setup();
    let mut state = GameState::new();

    loop {
        state.update();
        state.render();
        next_frame().await;
    }
}
