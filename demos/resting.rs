use macroquad::color::BLACK;
use macroquad::window::{clear_background, next_frame};

use physics::scenarios::{Resting, Scenario};
use physics::World;

mod shared;

struct GameState {
    scenario: Resting,
    world: World,
}

impl GameState {
    fn new() -> Self {
        let scenario = Resting {};
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

#[macroquad::main("resting")]
async fn main() {
    shared::setup();
    let mut state = GameState::new();

    loop {
        state.update();
        state.render();
        next_frame().await;
    }
}
