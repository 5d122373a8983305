use std::collections::VecDeque;

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::constants::FOOD_SCORE;
use crate::grid::{Direction, GridPosition, GridSize};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickResult {
    Continue,
    AteFood,
    Collided,
}

/// Snake simulation on a bounded grid. Knows nothing about screens; the
/// controller decides when to reset, steer and tick it.
pub struct Engine<R = StdRng> {
    grid: GridSize,
    snake: VecDeque<GridPosition>,
    direction: Direction,
    pending_direction: Direction,
    food: GridPosition,
    score: u32,
    growth: u32,
    rng: R,
}

impl<R: Rng> Engine<R> {
    pub fn new(grid: GridSize, rng: R) -> Self {
        let start = grid.center();
        let mut engine = Self {
            grid,
            snake: VecDeque::from([start]),
            direction: Direction::Right,
            pending_direction: Direction::Right,
            food: start,
            score: 0,
            growth: 0,
            rng,
        };
        engine.reset(grid);
        engine
    }

    pub fn reset(&mut self, grid: GridSize) {
        self.grid = grid;
        self.snake = VecDeque::from([grid.center()]);
        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;
        self.growth = 0;
        self.score = 0;
        if let Some(food) = self.random_food_position() {
            self.food = food;
        }
    }

    /// Adopts new grid bounds without touching the snake or the food. Anything
    /// now out of bounds is caught by the next tick's boundary check.
    pub fn resize(&mut self, grid: GridSize) {
        self.grid = grid;
    }

    /// Latches `direction` for the next tick unless it would reverse the
    /// committed direction.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if direction != self.direction.opposite() {
            self.pending_direction = direction;
        }
    }

    pub fn tick(&mut self) -> TickResult {
        self.direction = self.pending_direction;
        let new_head = self.head().step(self.direction);

        // The tail cell still counts as occupied even though it would vacate this tick.
        if !self.grid.contains(new_head) || self.snake.contains(&new_head) {
            return TickResult::Collided;
        }

        self.snake.push_front(new_head);

        let ate = new_head == self.food;
        if ate {
            self.score += FOOD_SCORE;
            self.growth += 1;
            if let Some(food) = self.random_food_position() {
                self.food = food;
            }
        }

        if self.growth > 0 {
            self.growth -= 1;
        } else {
            self.snake.pop_back();
        }

        if ate { TickResult::AteFood } else { TickResult::Continue }
    }

    /// Rejection-samples a free cell. After a bounded number of misses the free
    /// cells are enumerated instead; `None` means the snake fills the grid.
    fn random_food_position(&mut self) -> Option<GridPosition> {
        let attempts = self.grid.cell_count().saturating_mul(4).max(16);
        for _ in 0..attempts {
            let pos = GridPosition::new(
                self.rng.gen_range(0..self.grid.width) as i32,
                self.rng.gen_range(0..self.grid.height) as i32,
            );
            if !self.snake.contains(&pos) {
                return Some(pos);
            }
        }

        let free: Vec<GridPosition> = self.grid.cells().filter(|cell| !self.snake.contains(cell)).collect();
        let picked = free.choose(&mut self.rng).copied();
        if picked.is_none() {
            tracing::debug!(len = self.snake.len(), "no free cell left for food");
        }
        picked
    }

    pub fn head(&self) -> GridPosition {
        self.snake[0]
    }

    pub fn snake(&self) -> &VecDeque<GridPosition> {
        &self.snake
    }

    pub fn food(&self) -> GridPosition {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn growth(&self) -> u32 {
        self.growth
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn engine_with(grid: GridSize, snake: &[(i32, i32)], direction: Direction, food: (i32, i32)) -> Engine {
        Engine {
            grid,
            snake: snake.iter().map(|&(c, r)| GridPosition::new(c, r)).collect(),
            direction,
            pending_direction: direction,
            food: GridPosition::new(food.0, food.1),
            score: 0,
            growth: 0,
            rng: StdRng::seed_from_u64(42),
        }
    }

    #[test]
    fn reset_places_single_cell_snake_at_center() {
        let mut engine = Engine::new(GridSize::new(32, 24), StdRng::seed_from_u64(1));
        engine.tick();
        engine.reset(GridSize::new(32, 24));

        assert_eq!(engine.snake().len(), 1);
        assert_eq!(engine.head(), GridPosition::new(16, 12));
        assert_eq!(engine.direction(), Direction::Right);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.growth(), 0);
        assert_ne!(engine.food(), engine.head());
        assert!(engine.grid().contains(engine.food()));
    }

    #[test]
    fn eating_scores_and_grows_on_the_same_tick() {
        let mut engine = engine_with(GridSize::new(10, 10), &[(5, 5)], Direction::Right, (6, 5));

        assert_eq!(engine.tick(), TickResult::AteFood);
        assert_eq!(engine.snake().iter().copied().collect::<Vec<_>>(), vec![GridPosition::new(6, 5), GridPosition::new(5, 5)]);
        assert_eq!(engine.score(), 10);
        assert_eq!(engine.growth(), 0);
        assert_ne!(engine.food(), GridPosition::new(6, 5));
        assert!(!engine.snake().contains(&engine.food()));
    }

    #[test]
    fn leaving_the_left_edge_collides() {
        let mut engine = engine_with(GridSize::new(10, 10), &[(0, 5), (1, 5)], Direction::Left, (7, 7));

        assert_eq!(engine.tick(), TickResult::Collided);
        assert_eq!(engine.snake().len(), 2);
        assert_eq!(engine.head(), GridPosition::new(0, 5));
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.food(), GridPosition::new(7, 7));
    }

    #[test]
    fn moving_into_own_tail_collides() {
        // Head at (1,1) travelling left, tail at (1,2) directly below.
        let mut engine = engine_with(GridSize::new(10, 10), &[(1, 1), (2, 1), (2, 2), (1, 2)], Direction::Left, (8, 8));
        engine.set_pending_direction(Direction::Down);

        assert_eq!(engine.tick(), TickResult::Collided);
        assert_eq!(engine.snake().len(), 4);
    }

    #[test]
    fn reversal_is_ignored() {
        let mut engine = engine_with(GridSize::new(10, 10), &[(5, 5), (4, 5)], Direction::Right, (0, 0));
        engine.set_pending_direction(Direction::Left);

        assert_eq!(engine.tick(), TickResult::Continue);
        assert_eq!(engine.head(), GridPosition::new(6, 5));
        assert_eq!(engine.direction(), Direction::Right);
    }

    #[test]
    fn reversal_is_checked_against_committed_direction() {
        let mut engine = engine_with(GridSize::new(10, 10), &[(5, 5), (4, 5)], Direction::Right, (0, 0));
        engine.set_pending_direction(Direction::Up);
        engine.set_pending_direction(Direction::Left);

        assert_eq!(engine.tick(), TickResult::Continue);
        assert_eq!(engine.head(), GridPosition::new(5, 4));
        assert_eq!(engine.direction(), Direction::Up);
    }

    #[test]
    fn plain_moves_keep_length() {
        let mut engine = engine_with(GridSize::new(10, 10), &[(3, 3), (2, 3), (1, 3)], Direction::Right, (9, 9));
        for _ in 0..4 {
            assert_eq!(engine.tick(), TickResult::Continue);
        }
        assert_eq!(engine.snake().len(), 3);
        assert_eq!(engine.head(), GridPosition::new(7, 3));
    }

    #[test]
    fn length_tracks_food_eaten() {
        for seed in 0..20 {
            let mut engine = Engine::new(GridSize::new(8, 8), StdRng::seed_from_u64(seed));
            let mut eaten = 0;
            for _ in 0..300 {
                let head = engine.head();
                let food = engine.food();
                let wanted = if food.col > head.col {
                    Direction::Right
                } else if food.col < head.col {
                    Direction::Left
                } else if food.row > head.row {
                    Direction::Down
                } else {
                    Direction::Up
                };
                engine.set_pending_direction(wanted);

                match engine.tick() {
                    TickResult::Collided => break,
                    TickResult::AteFood => eaten += 1,
                    TickResult::Continue => {}
                }
                assert_eq!(engine.snake().len(), 1 + eaten);
                assert_eq!(engine.score(), 10 * eaten as u32);
                assert!(!engine.snake().contains(&engine.food()));

                let mut cells: Vec<_> = engine.snake().iter().copied().collect();
                cells.sort_by_key(|c| (c.col, c.row));
                cells.dedup();
                assert_eq!(cells.len(), engine.snake().len());
            }
        }
    }

    #[test]
    fn food_lands_on_the_only_free_cell() {
        let mut engine = engine_with(GridSize::new(3, 1), &[(0, 0), (1, 0)], Direction::Left, (0, 0));
        for _ in 0..10 {
            assert_eq!(engine.random_food_position(), Some(GridPosition::new(2, 0)));
        }
    }

    #[test]
    fn full_grid_has_no_food_position() {
        let mut engine = engine_with(GridSize::new(2, 1), &[(0, 0), (1, 0)], Direction::Left, (0, 0));
        assert_eq!(engine.random_food_position(), None);
    }

    #[test]
    fn shrinking_grid_defers_to_next_tick() {
        let mut engine = engine_with(GridSize::new(10, 10), &[(7, 2)], Direction::Right, (0, 0));
        engine.resize(GridSize::new(5, 5));

        assert_eq!(engine.head(), GridPosition::new(7, 2));
        assert_eq!(engine.tick(), TickResult::Collided);
    }
}
