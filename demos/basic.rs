//! Basic example of driving the puzzle engine without a renderer

use facematch_core::{
    assets, Attribute, AttemptResult, LevelGenerator, PuzzleConfig, PuzzleState, TARGET_TILE,
};

fn main() {
    // Generate every level once and show the pattern
    let mut generator = LevelGenerator::with_seed(7);
    for requested in 0..7 {
        let level = generator.generate(requested);
        println!(
            "Level {} ({}), rank {}: shapes {}, colors {}, expressions {}",
            level.display_number(),
            level.band(),
            level.rank(),
            level.in_play_count(Attribute::Shape),
            level.in_play_count(Attribute::Color),
            level.in_play_count(Attribute::Expression),
        );
        for (i, solution) in level.solutions().iter().enumerate() {
            let marker = if i == TARGET_TILE { "?" } else { " " };
            println!(
                "  {}{:>2}: {} {} {}",
                marker,
                i,
                assets::shape_key(solution.shape),
                solution.color,
                assets::face_key(solution.expression),
            );
        }
    }

    // Play the first level: a wrong guess, then the answer
    println!("\n--- Playing level 1 ---\n");
    let mut state = PuzzleState::new(PuzzleConfig::default().with_seed(7));
    let target = *state.level().target_solution();

    state.player_select(Attribute::Shape, target.shape);
    println!("Shape only: {:?}", state.player_attempt_target());
    println!("Try again shown: {}", state.try_again());

    for attribute in Attribute::ALL {
        state.player_select(attribute, target.get(attribute));
    }
    if let AttemptResult::Matched { advance: Some(ticket) } = state.player_attempt_target() {
        println!(
            "Solved! Level {} loads in {:?}",
            ticket.next_level() + 1,
            ticket.delay()
        );
        state.fire_advance(ticket);
    }
    println!("Now on level {}", state.display_level());
}
