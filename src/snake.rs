use crate::grid::{Cell, Direction};

pub struct Snake {
    body: Vec<Cell>,
    heading: Direction,
    // Heading used by the most recent move; turns are checked against it.
    last_step: Direction,
    vacated: Option<Cell>,
}

impl Snake {
    /// Lays `length` segments out behind `head`, opposite to `heading`.
    pub fn new(head: Cell, length: usize, heading: Direction) -> Self {
        let back = heading.opposite();
        let mut body = Vec::with_capacity(length.max(1));
        let mut cell = head;
        body.push(cell);
        for _ in 1..length {
            cell = cell.step(back);
            body.push(cell);
        }
        Self { body, heading, last_step: heading, vacated: None }
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Moves one cell along the heading. Bounds are not checked here.
    pub fn advance(&mut self) {
        self.vacated = self.body.last().copied();
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        self.body[0] = self.body[0].step(self.heading);
        self.last_step = self.heading;
    }

    /// Adds a tail segment on the cell the tail left during the last move.
    pub fn grow(&mut self) {
        let tail = match self.vacated.take() {
            Some(cell) => cell,
            None => self.body[self.body.len() - 1],
        };
        self.body.push(tail);
    }

    /// Ignores the opposite of the current heading, and any turn that would
    /// fold the head back onto the neck before the next move.
    pub fn set_direction(&mut self, direction: Direction) {
        if direction != self.heading.opposite() && direction != self.last_step.opposite() {
            self.heading = direction;
        }
    }

    pub fn hits_wall(&self) -> bool {
        !self.head().is_inner()
    }

    pub fn hits_self(&self) -> bool {
        let head = self.head();
        self.body[1..].contains(&head)
    }

    pub fn eats(&self, food: Cell) -> bool {
        self.head() == food
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contiguous(body: &[Cell]) -> bool {
        body.windows(2)
            .all(|w| (w[0].x - w[1].x).abs() + (w[0].y - w[1].y).abs() == 1)
    }

    #[test]
    fn new_snake_trails_behind_the_head() {
        let snake = Snake::new(Cell::new(20, 15), 3, Direction::Right);
        assert_eq!(snake.body(), &[Cell::new(20, 15), Cell::new(19, 15), Cell::new(18, 15)]);
        assert_eq!(snake.heading(), Direction::Right);
    }

    #[test]
    fn advance_shifts_segments_onto_their_predecessors() {
        let mut snake = Snake::new(Cell::new(20, 15), 3, Direction::Right);
        snake.set_direction(Direction::Down);
        snake.advance();
        assert_eq!(snake.body(), &[Cell::new(20, 16), Cell::new(20, 15), Cell::new(19, 15)]);
        assert!(contiguous(snake.body()));
    }

    #[test]
    fn reversal_is_ignored() {
        let mut snake = Snake::new(Cell::new(20, 15), 3, Direction::Right);
        snake.set_direction(Direction::Left);
        assert_eq!(snake.heading(), Direction::Right);

        snake.set_direction(Direction::Up);
        assert_eq!(snake.heading(), Direction::Up);
    }

    #[test]
    fn two_turns_between_moves_cannot_fold_back() {
        let mut snake = Snake::new(Cell::new(20, 15), 3, Direction::Right);
        snake.set_direction(Direction::Up);
        snake.set_direction(Direction::Left);
        assert_eq!(snake.heading(), Direction::Up);

        // Down reverses the heading just accepted
        snake.set_direction(Direction::Down);
        assert_eq!(snake.heading(), Direction::Up);

        snake.advance();
        snake.set_direction(Direction::Left);
        assert_eq!(snake.heading(), Direction::Left);
    }

    #[test]
    fn grow_fills_the_vacated_tail_cell() {
        let mut snake = Snake::new(Cell::new(20, 15), 3, Direction::Right);
        snake.advance();
        snake.grow();
        assert_eq!(snake.body().len(), 4);
        assert_eq!(snake.body()[3], Cell::new(18, 15));
        assert!(contiguous(snake.body()));

        snake.advance();
        assert_eq!(snake.body().len(), 4);
        assert!(contiguous(snake.body()));
    }

    #[test]
    fn collisions() {
        let snake = Snake::new(Cell::new(1, 5), 2, Direction::Right);
        assert!(!snake.hits_wall());
        let mut snake = snake;
        snake.set_direction(Direction::Up);
        snake.advance();
        snake.set_direction(Direction::Left);
        snake.advance();
        assert!(snake.hits_wall());

        // Head just inside each wall, one step from crashing into it
        let edges = [
            (Cell::new(38, 5), Direction::Right),
            (Cell::new(5, 1), Direction::Up),
            (Cell::new(5, 28), Direction::Down),
            (Cell::new(1, 5), Direction::Left),
        ];
        for (head, heading) in edges {
            let mut snake = Snake::new(head, 1, heading);
            assert!(!snake.hits_wall());
            snake.advance();
            assert!(snake.hits_wall(), "head {:?} is outside the playfield", snake.head());
        }
        for outside in [Cell::new(39, 5), Cell::new(5, 0), Cell::new(5, 29), Cell::new(0, 5)] {
            assert!(Snake::new(outside, 1, Direction::Right).hits_wall());
        }

        // 5 segments turning in a tight square bite their own body
        let mut snake = Snake::new(Cell::new(10, 10), 5, Direction::Right);
        for d in [Direction::Down, Direction::Left, Direction::Up] {
            snake.set_direction(d);
            snake.advance();
        }
        assert!(snake.hits_self());
        assert!(snake.eats(snake.head()));
    }
}
