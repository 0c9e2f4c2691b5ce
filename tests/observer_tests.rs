use std::collections::HashSet;

use maze_backtracker::{
    generate, solve, EventLog, Generator, Maze, MazeEvent, NoopObserver, Position,
};

// Fixed seed for deterministic tests
const TEST_SEED: u64 = 42;

#[test]
fn test_every_cell_finalized_once() {
    let (width, height) = (9, 7);
    let mut log = EventLog::new();

    let maze = generate(width, height, Some(TEST_SEED), &mut log).unwrap();

    let finalized: Vec<Position> = log.finalized().collect();
    let unique: HashSet<Position> = finalized.iter().copied().collect();

    assert_eq!(finalized.len(), width * height);
    assert_eq!(unique.len(), width * height);
    assert_eq!(log.moves().count(), 0);

    // The root is the last cell to leave the stack.
    assert_eq!(finalized.last(), Some(&maze.entrance()));
}

#[test]
fn test_single_cell_finalized() {
    let mut log = EventLog::new();

    generate(1, 1, Some(TEST_SEED), &mut log).unwrap();

    assert_eq!(log.events, vec![MazeEvent::CellFinalized((0, 0))]);
}

#[test]
fn test_observer_does_not_change_generation() {
    let mut log = EventLog::new();

    let observed = generate(12, 8, Some(TEST_SEED), &mut log).unwrap();
    let headless = generate(12, 8, Some(TEST_SEED), &mut NoopObserver).unwrap();

    assert_eq!(observed, headless);
    assert!(!log.is_empty());
}

#[test]
fn test_finalized_cells_do_not_change_afterwards() {
    let mut generator = Generator::new(Maze::new(6, 6).unwrap(), Some(TEST_SEED));
    let mut snapshots = Vec::new();

    loop {
        let mut log = EventLog::new();
        if !generator.tick(&mut log) {
            break;
        }

        for position in log.finalized() {
            snapshots.push((position, generator.maze().cell(position).unwrap().clone()));
        }
    }

    let maze = generator.finish(&mut NoopObserver);

    assert_eq!(snapshots.len(), 36);
    for (position, snapshot) in snapshots {
        for direction in maze_backtracker::Direction::ALL {
            assert_eq!(
                snapshot.has_wall(direction),
                maze.cell(position).unwrap().has_wall(direction)
            );
        }
    }
}

#[test]
fn test_solver_moves_follow_open_walls() {
    let mut maze = generate(15, 10, Some(TEST_SEED), &mut NoopObserver).unwrap();
    let mut log = EventLog::new();

    let solution = solve(&mut maze, &mut log);
    assert!(solution.solved);

    for (from, to, _) in log.moves() {
        assert!(maze.is_open(from, to));
    }
}

#[test]
fn test_undone_moves_match_earlier_moves() {
    let mut maze = generate(15, 10, Some(TEST_SEED), &mut NoopObserver).unwrap();
    let mut log = EventLog::new();

    let solution = solve(&mut maze, &mut log);

    let mut open_moves: Vec<(Position, Position)> = Vec::new();
    for (from, to, undone) in log.moves() {
        if undone {
            // Backtracking always retreats over the most recent live edge.
            assert_eq!(open_moves.pop(), Some((from, to)));
        } else {
            open_moves.push((from, to));
        }
    }

    let expected: Vec<(Position, Position)> = solution
        .path
        .windows(2)
        .map(|pair| (pair[0], pair[1]))
        .collect();

    assert_eq!(open_moves, expected);
}

#[test]
fn test_unsolvable_maze_undoes_every_move() {
    // 3x2 with the exit walled off from the rest.
    let mut maze = Maze::new(3, 2).unwrap();
    maze.open_entrance_and_exit();
    maze.open_between((0, 0), (1, 0)).unwrap();
    maze.open_between((1, 0), (2, 0)).unwrap();
    maze.open_between((0, 0), (0, 1)).unwrap();
    maze.open_between((0, 1), (1, 1)).unwrap();

    let mut log = EventLog::new();
    let solution = solve(&mut maze, &mut log);

    assert!(!solution.solved);
    assert!(solution.path.is_empty());

    let forward = log.moves().filter(|(_, _, undone)| !undone).count();
    let undone = log.moves().filter(|(_, _, undone)| *undone).count();

    assert_eq!(forward, 4);
    assert_eq!(undone, 4);
}

#[test]
fn test_closure_observer() {
    let mut maze = generate(5, 5, Some(TEST_SEED), &mut NoopObserver).unwrap();
    let mut forward = 0;

    let solution = solve(&mut maze, &mut |event: &MazeEvent| {
        if let MazeEvent::Move { undone: false, .. } = event {
            forward += 1;
        }
    });

    assert!(solution.solved);
    assert!(forward >= solution.path.len() - 1);
}

#[test]
fn test_observer_does_not_change_solution() {
    let mut maze = generate(11, 13, Some(TEST_SEED), &mut NoopObserver).unwrap();

    let headless = solve(&mut maze, &mut NoopObserver);
    maze.reset_visited();
    let observed = solve(&mut maze, &mut EventLog::new());

    assert_eq!(headless, observed);
}
